use once_cell::sync::Lazy;
use regex::Regex;

// Permissive on purpose; not an RFC 5322 parser.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

// `\d` is Unicode-aware: any decimal digit (Nd), not only 0-9.
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("digit pattern is valid"));

pub fn is_valid_email_simple(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Surrounding whitespace and any leading `+`/`-` signs are ignored; the
/// rest must be decimal digits from any script (`"٤٢"` passes).
/// Superscripts and other non-decimal digit forms such as `"²"` do not.
pub fn is_integer_string(s: Option<&str>) -> bool {
    let Some(s) = s else {
        return false;
    };
    let digits = s.trim().trim_start_matches(&['-', '+'][..]);
    DIGITS.is_match(digits)
}

pub fn is_float_string(s: Option<&str>) -> bool {
    match s {
        Some(s) => s.trim().parse::<f64>().is_ok(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email_simple() {
        assert!(is_valid_email_simple("test@example.com"));
        assert!(is_valid_email_simple("first.last+tag@sub.example.co"));
        assert!(!is_valid_email_simple("test@example"));
        assert!(!is_valid_email_simple("@example.com"));
        assert!(!is_valid_email_simple("test@example.c"));
        assert!(!is_valid_email_simple("te st@example.com"));
    }

    #[test]
    fn test_is_integer_string() {
        assert!(is_integer_string(Some("12345")));
        assert!(is_integer_string(Some("-123")));
        assert!(is_integer_string(Some(" +42 ")));
        assert!(!is_integer_string(Some("12.34")));
        assert!(!is_integer_string(Some("-")));
        assert!(!is_integer_string(Some("")));
        assert!(!is_integer_string(None));
    }

    #[test]
    fn test_is_integer_string_accepts_non_ascii_decimal_digits() {
        assert!(is_integer_string(Some("٣٤")));
        assert!(is_integer_string(Some("-१२३")));
        assert!(is_integer_string(Some("１２")));
        assert!(!is_integer_string(Some("²")));
        assert!(!is_integer_string(Some("½")));
        assert!(!is_integer_string(Some("Ⅻ")));
    }

    #[test]
    fn test_is_float_string() {
        assert!(is_float_string(Some("3.14")));
        assert!(is_float_string(Some("-0.5")));
        assert!(is_float_string(Some("1e10")));
        assert!(is_float_string(Some(" 7 ")));
        assert!(is_float_string(Some("inf")));
        assert!(!is_float_string(Some("abc")));
        assert!(!is_float_string(Some("")));
        assert!(!is_float_string(None));
    }
}
