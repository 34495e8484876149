use aio_toolkit::core::{collections, convert, datetime, math, misc, specs, text, validators};
use aio_toolkit::utils::error::{ErrorSeverity, UtilError};
use aio_toolkit::utils::{logger, validation::Validate};
use aio_toolkit::{CliConfig, DemoConfig, Result, TimeOffset};
use clap::Parser;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.log_format, config.verbose);

    tracing::info!("Starting aio-toolkit demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let demo = match load_demo_config(&config) {
        Ok(demo) => demo,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    match run(&config, &demo) {
        Ok(0) => {}
        Ok(skipped) => {
            eprintln!("⚠️ {} section(s) stopped early, see the log for details", skipped);
            std::process::exit(4);
        }
        Err(e) => report_and_exit(&e),
    }

    Ok(())
}

fn report_and_exit(e: &UtilError) -> ! {
    tracing::error!(
        "❌ Demo failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn load_demo_config(config: &CliConfig) -> Result<DemoConfig> {
    let demo = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading demo inputs from: {}", path);
            DemoConfig::from_file(path)?
        }
        None => DemoConfig::default(),
    };
    demo.validate()?;
    Ok(demo)
}

/// Runs the selected sections and returns how many stopped on a recoverable error.
fn run(config: &CliConfig, demo: &DemoConfig) -> Result<usize> {
    let sections: [(&str, &dyn Fn() -> Result<()>); 8] = [
        ("strings", &|| strings_demo(demo)),
        ("math", &math_demo),
        ("collections", &collections_demo),
        ("dates", &|| dates_demo(demo)),
        ("conversions", &|| {
            conversions_demo();
            Ok(())
        }),
        ("validation", &|| {
            validation_demo();
            Ok(())
        }),
        ("misc", &|| misc_demo(demo)),
        ("specs", &|| specs_demo(config.json)),
    ];

    let mut skipped = 0;
    for (name, section) in sections {
        if !config.wants(name) {
            continue;
        }
        match section() {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => {
                tracing::warn!("⚠️ Section `{}` stopped early: {}", name, e);
                println!("({})", e.user_friendly_message());
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(skipped)
}

fn strings_demo(demo: &DemoConfig) -> Result<()> {
    let strings = &demo.strings;
    println!("--- String Utilities ---");
    println!("Reverse of 'hello': {}", text::reverse_string("hello"));
    println!("Is 'madam' a palindrome? {}", text::is_palindrome("madam"));
    println!("Is 'Race car!' a palindrome? {}", text::is_palindrome("Race car!"));
    println!("Vowels in 'Programming': {}", text::count_vowels("Programming"));
    println!(
        "Random string ({} chars): {}",
        strings.random_length,
        text::generate_random_string(strings.random_length, &strings.charset)?
    );
    println!(
        "Slugify 'My Awesome Title!': {}",
        text::simple_slugify("My Awesome Title!")
    );
    println!(
        "Capitalize 'hello world example': {}",
        text::capitalize_words("hello world example")
    );
    println!(
        "Count 'l' in 'hello world': {}",
        text::count_substring("hello world", "l")
    );
    println!(
        "Truncate 'This is a long string' to 10 chars: {}",
        text::truncate_string("This is a long string", 10, &strings.truncate_suffix)
    );
    println!("Is '   ' blank? {}", text::is_blank(Some("   ")));
    println!("Is '' blank? {}", text::is_blank(Some("")));
    println!("Is 'not blank' blank? {}", text::is_blank(Some("not blank")));
    Ok(())
}

fn math_demo() -> Result<()> {
    println!("\n--- Mathematical Utilities ---");
    println!("Factorial of 5: {}", math::calculate_factorial(5)?);
    println!("Is 17 prime? {}", math::is_prime(17));
    println!("Is 1 prime? {}", math::is_prime(1));
    println!("Fibonacci (10 terms): {:?}", math::fibonacci_sequence(10)?);

    let mut nums = vec![1, 5, 2, 8, 3, 9, 4, 7, 6];
    println!("Mean of {:?}: {}", nums, math::calculate_mean(&nums));
    println!("Median of {:?}: {}", nums, math::calculate_median(&nums));
    nums.push(10);
    println!("Median of {:?}: {}", nums, math::calculate_median(&nums));

    println!("GCD of 48 and 18: {}", math::find_gcd(48, 18));
    println!("LCM of 48 and 18: {}", math::find_lcm(48, 18));
    println!("Is 25 a perfect square? {}", math::is_perfect_square(25));
    println!("Is 26 a perfect square? {}", math::is_perfect_square(26));
    println!(
        "180 degrees in radians: {}",
        math::degrees_to_radians(180.0)
    );
    println!(
        "Pi radians in degrees: {}",
        math::radians_to_degrees(std::f64::consts::PI)
    );
    Ok(())
}

fn collections_demo() -> Result<()> {
    println!("\n--- List/Collection Utilities ---");
    let nested = vec![vec![1, 2], vec![3, 4, 5], vec![6]];
    println!(
        "Flatten {:?}: {:?}",
        nested,
        collections::flatten_list(nested.clone())
    );

    let dupes = [1, 2, 2, 3, 4, 4, 4, 5, 1];
    println!(
        "Remove duplicates from {:?}: {:?}",
        dupes,
        collections::remove_duplicates(&dupes)
    );
    println!(
        "Random element from {:?}: {:?}",
        dupes,
        collections::random_element(&dupes)
    );
    println!(
        "Chunk {:?} by 3: {:?}",
        dupes,
        collections::chunk_list(&dupes, 3)?
    );

    let common = ["1", "2", "2", "3", "3", "3", "4", "a", "a", "a", "a"];
    println!(
        "Most common in {:?}: {:?}",
        common,
        collections::most_common_element(&common)
    );

    let mut shuffle_me = [1, 2, 3, 4, 5];
    collections::shuffle_in_place(&mut shuffle_me);
    println!("Shuffled list (in-place): {:?}", shuffle_me);

    let list_a = [1, 2, 3, 4, 5];
    let list_b = [4, 5, 6, 7, 8];
    println!(
        "Intersection of {:?} and {:?}: {:?}",
        list_a,
        list_b,
        collections::find_intersection(&list_a, &list_b)
    );
    println!(
        "Difference {:?} - {:?}: {:?}",
        list_a,
        list_b,
        collections::find_difference(&list_a, &list_b)
    );
    Ok(())
}

fn dates_demo(demo: &DemoConfig) -> Result<()> {
    let fmt = demo.dates.date_format.as_str();
    let first = datetime::parse_datetime("2023-01-01", datetime::DEFAULT_DATE_FORMAT)?;
    let second = datetime::parse_datetime("2023-01-10", datetime::DEFAULT_DATE_FORMAT)?;
    let first = first.format(fmt).to_string();
    let second = second.format(fmt).to_string();

    println!("\n--- Date/Time Utilities ---");
    println!("Current ISO datetime: {}", datetime::current_datetime_iso());
    println!(
        "Days between {} and {}: {}",
        first,
        second,
        datetime::days_between_dates(&first, &second, fmt)?
    );

    let now = chrono::Local::now().naive_local();
    println!("Now: {}", now);
    println!(
        "Now + 5 days and 3 hours: {}",
        datetime::add_time_to_date(now, TimeOffset::days(5).with_hours(3))?
    );
    println!(
        "Day of week for {}: {}",
        second,
        datetime::day_of_week(&second, fmt)?
    );
    println!("Is 2024 a leap year? {}", datetime::is_leap_year(2024));
    println!("Is 2023 a leap year? {}", datetime::is_leap_year(2023));
    println!(
        "Current Year: {}, Month: {}, Day: {}",
        datetime::current_year(),
        datetime::current_month(),
        datetime::current_day()
    );
    Ok(())
}

fn conversions_demo() {
    println!("\n--- Conversion Utilities ---");
    println!(
        "25°C in Fahrenheit: {}°F",
        convert::celsius_to_fahrenheit(25.0)
    );
    println!(
        "77°F in Celsius: {}°C",
        convert::fahrenheit_to_celsius(77.0)
    );
    println!("70kg in pounds: {} lbs", convert::kilograms_to_pounds(70.0));
    println!(
        "154.3234 lbs in kilograms: {} kg",
        convert::pounds_to_kilograms(154.3234)
    );
}

fn validation_demo() {
    println!("\n--- Validation Utilities ---");
    for email in ["test@example.com", "test@example"] {
        println!(
            "Is '{}' a valid email? {}",
            email,
            validators::is_valid_email_simple(email)
        );
    }
    for candidate in ["12345", "-123", "12.34"] {
        println!(
            "Is '{}' an integer string? {}",
            candidate,
            validators::is_integer_string(Some(candidate))
        );
    }
    for candidate in ["3.14", "-0.5", "abc"] {
        println!(
            "Is '{}' a float string? {}",
            candidate,
            validators::is_float_string(Some(candidate))
        );
    }
}

fn misc_demo(demo: &DemoConfig) -> Result<()> {
    println!("\n--- Miscellaneous Utilities ---");
    println!(
        "Dice roll (d{}): {}",
        demo.misc.dice_sides,
        misc::simple_dice_roll(demo.misc.dice_sides)?
    );
    println!("Dice roll (d20): {}", misc::simple_dice_roll(20)?);
    println!("Random hex color: {}", misc::generate_random_hex_color());
    println!("Generated UUID4: {}", misc::generate_uuid4_string());

    let n: u64 = 10_000;
    let (result, time_taken) = misc::measure_execution_time(|| {
        std::thread::sleep(Duration::from_millis(100));
        (0..n).sum::<u64>()
    });
    println!(
        "Example function took {:.4} seconds. Result: {}",
        time_taken, result
    );
    Ok(())
}

fn specs_demo(as_json: bool) -> Result<()> {
    println!("\n--- PC Specs ---");
    let pc = specs::get_pc_specs();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&pc)?);
    } else {
        specs::print_pc_specs(Some(&pc));
    }
    Ok(())
}
