use crate::utils::error::{Result, UtilError};

/// Numbers accepted by [`calculate_mean`] and [`calculate_median`].
///
/// 64-bit integers beyond 2^53 lose precision in the conversion.
pub trait AsF64: Copy {
    fn as_f64(self) -> f64;
}

macro_rules! impl_as_f64 {
    ($($t:ty),*) => {
        $(impl AsF64 for $t {
            fn as_f64(self) -> f64 {
                self as f64
            }
        })*
    };
}

impl_as_f64!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

pub fn calculate_factorial(n: i64) -> Result<u128> {
    if n < 0 {
        tracing::debug!("rejected factorial input {}", n);
        return Err(UtilError::invalid_argument(
            "n",
            "Factorial is not defined for negative numbers",
        ));
    }
    (1..=n as u128).try_fold(1u128, |acc, k| {
        acc.checked_mul(k)
            .ok_or_else(|| UtilError::overflow("factorial"))
    })
}

/// Trial division by 2, 3 and then 6k ± 1 up to √n.
pub fn is_prime(num: i64) -> bool {
    if num <= 1 {
        return false;
    }
    if num <= 3 {
        return true;
    }
    if num % 2 == 0 || num % 3 == 0 {
        return false;
    }
    let mut i: i64 = 5;
    while i <= num / i {
        if num % i == 0 || num % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

pub fn fibonacci_sequence(n_terms: i64) -> Result<Vec<u128>> {
    if n_terms <= 0 {
        return Ok(Vec::new());
    }
    if n_terms == 1 {
        return Ok(vec![0]);
    }

    let mut sequence: Vec<u128> = vec![0, 1];
    while (sequence.len() as i64) < n_terms {
        let len = sequence.len();
        let next = sequence[len - 1]
            .checked_add(sequence[len - 2])
            .ok_or_else(|| UtilError::overflow("fibonacci sequence"))?;
        sequence.push(next);
    }
    Ok(sequence)
}

/// Arithmetic mean; `0.0` for an empty slice.
pub fn calculate_mean<T: AsF64>(numbers: &[T]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    let sum: f64 = numbers.iter().map(|&n| n.as_f64()).sum();
    sum / numbers.len() as f64
}

/// Median; `0.0` for an empty slice. Even-length input averages the two
/// central values.
pub fn calculate_median<T: AsF64>(numbers: &[T]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    let mut sorted: Vec<f64> = numbers.iter().map(|&n| n.as_f64()).collect();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

pub fn find_gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn find_lcm(a: i64, b: i64) -> u128 {
    if a == 0 || b == 0 {
        return 0;
    }
    let gcd = find_gcd(a, b) as u128;
    (a.unsigned_abs() as u128 / gcd) * b.unsigned_abs() as u128
}

pub fn is_perfect_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let n = n as i128;
    // f64 sqrt can be off by one for large inputs
    let mut root = (n as f64).sqrt() as i128;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root * root == n
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}
