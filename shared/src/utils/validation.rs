//! Request field validation helpers

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII only: `\d` in `regex` also matches non-ASCII digits
static CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

/// Check that a submitted verification code is exactly six ASCII digits
pub fn is_valid_code_format(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}
