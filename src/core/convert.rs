const POUNDS_PER_KILOGRAM: f64 = 2.20462;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn kilograms_to_pounds(kg: f64) -> f64 {
    kg * POUNDS_PER_KILOGRAM
}

pub fn pounds_to_kilograms(lbs: f64) -> f64 {
    lbs / POUNDS_PER_KILOGRAM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature() {
        assert_eq!(celsius_to_fahrenheit(25.0), 77.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);

        for c in [-273.15, -12.5, 0.0, 36.6, 1000.0] {
            let back = fahrenheit_to_celsius(celsius_to_fahrenheit(c));
            assert!((back - c).abs() < 1e-9, "{} came back as {}", c, back);
        }
    }

    #[test]
    fn test_weight() {
        assert!((kilograms_to_pounds(70.0) - 154.3234).abs() < 1e-9);
        assert!((pounds_to_kilograms(kilograms_to_pounds(82.5)) - 82.5).abs() < 1e-9);
    }
}
