use aio_toolkit::core::{datetime, misc, text};
use aio_toolkit::utils::validation::Validate;
use aio_toolkit::DemoConfig;
use anyhow::Result;
use tempfile::TempDir;

/// 從檔案載入設定並用其驅動各個工具函式
#[test]
fn test_config_file_drives_utilities() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("demo.toml");
    std::fs::write(
        &config_path,
        r#"
[strings]
random_length = 24
charset = "ab"
truncate_suffix = "~"

[dates]
date_format = "%d.%m.%Y"

[misc]
dice_sides = 4
"#,
    )?;

    let config = DemoConfig::from_file(&config_path)?;
    config.validate()?;

    let random = text::generate_random_string(config.strings.random_length, &config.strings.charset)?;
    assert_eq!(random.len(), 24);
    assert!(random.chars().all(|c| c == 'a' || c == 'b'));

    assert_eq!(
        text::truncate_string("abcdefghij", 5, &config.strings.truncate_suffix),
        "abcd~"
    );

    let days = datetime::days_between_dates("01.01.2023", "10.01.2023", &config.dates.date_format)?;
    assert_eq!(days, 9);
    assert_eq!(
        datetime::day_of_week("26.10.2023", &config.dates.date_format)?,
        "Thursday"
    );

    for _ in 0..20 {
        let roll = misc::simple_dice_roll(config.misc.dice_sides)?;
        assert!((1..=4).contains(&roll));
    }

    Ok(())
}

#[test]
fn test_invalid_config_file_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "[misc]\ndice_sides = -3\n")?;

    let config = DemoConfig::from_file(&config_path)?;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("misc.dice_sides"));
    Ok(())
}
