use crate::utils::error::{Result, UtilError};
use rand::Rng;
use std::time::Instant;
use uuid::Uuid;

pub const DEFAULT_DICE_SIDES: i64 = 6;

pub fn simple_dice_roll(sides: i64) -> Result<i64> {
    simple_dice_roll_with(&mut rand::thread_rng(), sides)
}

pub fn simple_dice_roll_with<R: Rng + ?Sized>(rng: &mut R, sides: i64) -> Result<i64> {
    if sides <= 0 {
        tracing::debug!("rejected dice with {} sides", sides);
        return Err(UtilError::invalid_argument(
            "sides",
            "Number of sides must be positive",
        ));
    }
    Ok(rng.gen_range(1..=sides))
}

/// `#rrggbb`, lowercase.
pub fn generate_random_hex_color() -> String {
    generate_random_hex_color_with(&mut rand::thread_rng())
}

pub fn generate_random_hex_color_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..=0xFF_FFFFu32))
}

pub fn generate_uuid4_string() -> String {
    Uuid::new_v4().to_string()
}

/// Runs `f` and returns its result with the elapsed wall-clock seconds.
pub fn measure_execution_time<T, F>(f: F) -> (T, f64)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[test]
    fn test_dice_roll_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let value = simple_dice_roll_with(&mut rng, 20).unwrap();
            assert!((1..=20).contains(&value), "Value {} out of range", value);
        }
        assert_eq!(simple_dice_roll(1).unwrap(), 1);
        assert!((1..=6).contains(&simple_dice_roll(DEFAULT_DICE_SIDES).unwrap()));
    }

    #[test]
    fn test_dice_roll_rejects_non_positive_sides() {
        assert!(matches!(
            simple_dice_roll(0),
            Err(UtilError::InvalidArgument { .. })
        ));
        assert!(simple_dice_roll(-6).is_err());
    }

    #[test]
    fn test_random_hex_color_format() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let color = generate_random_hex_color_with(&mut rng);
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_uuid4_string() {
        let id = generate_uuid4_string();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id.len(), 36);
        assert_ne!(id, generate_uuid4_string());
    }

    #[test]
    fn test_measure_execution_time() {
        let n = 10_000u64;
        let (result, elapsed) = measure_execution_time(|| {
            std::thread::sleep(Duration::from_millis(20));
            (0..n).sum::<u64>()
        });
        assert_eq!(result, 49_995_000);
        assert!(elapsed >= 0.02);
    }
}
