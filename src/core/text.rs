use crate::utils::error::{Result, UtilError};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

pub const DEFAULT_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const DEFAULT_TRUNCATE_SUFFIX: &str = "...";

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("slug character pattern is valid"));
static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static HYPHEN_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--+").expect("hyphen pattern is valid"));

pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Ignores case and anything that is not alphanumeric.
pub fn is_palindrome(s: &str) -> bool {
    let processed: Vec<char> = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    processed.iter().eq(processed.iter().rev())
}

pub fn count_vowels(s: &str) -> usize {
    s.chars().filter(|c| "aeiouAEIOU".contains(*c)).count()
}

pub fn generate_random_string(length: i64, charset: &str) -> Result<String> {
    generate_random_string_with(&mut rand::thread_rng(), length, charset)
}

pub fn generate_random_string_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: i64,
    charset: &str,
) -> Result<String> {
    if length < 0 {
        tracing::debug!("rejected random string length {}", length);
        return Err(UtilError::invalid_argument(
            "length",
            "Length cannot be negative",
        ));
    }

    let pool: Vec<char> = charset.chars().collect();
    if pool.is_empty() && length > 0 {
        return Err(UtilError::invalid_argument(
            "charset",
            "Charset cannot be empty",
        ));
    }

    Ok((0..length).filter_map(|_| pool.choose(rng)).collect())
}

/// Lowercase, hyphen-separated form of `text` suitable for URLs.
pub fn simple_slugify(text: &str) -> String {
    let text = text.to_lowercase();
    let text = NON_SLUG_CHARS.replace_all(&text, "");
    let text = WHITESPACE_RUNS.replace_all(&text, "-");
    let text = HYPHEN_RUNS.replace_all(&text, "-");
    text.trim_matches('-').to_string()
}

pub fn capitalize_words(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Non-overlapping occurrences of `sub`. An empty `sub` matches at every
/// char boundary.
pub fn count_substring(text: &str, sub: &str) -> usize {
    text.matches(sub).count()
}

/// Shortens `s` to `max_length` chars, ending with `suffix`.
///
/// When `suffix` is longer than `max_length` nothing of `s` is kept and the
/// suffix is returned alone. A negative-index slice would instead drop chars
/// from the end of `s` (`"abcdef"`, 2 → `"abcde..."`); that form is not
/// reproduced here.
pub fn truncate_string(s: &str, max_length: usize, suffix: &str) -> String {
    if s.chars().count() <= max_length {
        return s.to_string();
    }
    let keep = max_length.saturating_sub(suffix.chars().count());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(suffix);
    out
}

pub fn is_blank(s: Option<&str>) -> bool {
    s.map_or(true, |s| s.trim().is_empty())
}
