use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect quantity strings
    /// Matches: number (optional decimal, optional scientific notation)
    /// + optional whitespace + unit token
    /// Examples: "100 MB", "1.5GB", "10 Mbps", "5 MB/s", "30 seconds", "-20 °C"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^[-+]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\s*[a-zA-Z/°℃℉µ]+"
    ).unwrap();
}

/// Check if a string looks like a number followed by a unit
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}
