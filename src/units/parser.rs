use crate::units::convert::Unit;
use crate::units::detector::looks_like_quantity;
use crate::units::error::UnitError;
use crate::units::types::ParsedQuantity;
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

lazy_static! {
    /// Characters kept by the lenient number parser
    static ref NON_NUMERIC: Regex = Regex::new(r"[^0-9.\-]").unwrap();

    /// Longest leading number after stripping, e.g. "1.2" out of "1.2.3"
    static ref LEADING_NUMBER: Regex = Regex::new(r"^-?(\d+\.?\d*|\.\d+)").unwrap();

    /// Number + unit token, e.g. "1.5 GB", "10Mbps", "-20 °C", "2.5e3 ms"
    static ref QUANTITY: Regex = Regex::new(
        r"^(?P<value>[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*(?P<unit>[^\s\d.+\-]\S*)$"
    ).unwrap();
}

/// Parse a number the way a browser's `parseFloat` would after stripping
/// everything except digits, dots and minus signs.
///
/// Returns `None` for input with no leading number ("", "abc", "--1").
pub fn parse_lenient_number(input: &str) -> Option<f64> {
    let stripped = NON_NUMERIC.replace_all(input, "");
    let number = LEADING_NUMBER.find(&stripped)?;
    number.as_str().parse::<f64>().ok()
}

/// Parse a plain numeric field. Strict parsing is tried first so exponent
/// notation survives; anything else goes through [`parse_lenient_number`].
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => parse_lenient_number(trimmed),
    }
}

/// Split a quantity string into its numeric value and raw unit token
fn split_quantity(input: &str) -> Result<(f64, &str), UnitError> {
    let trimmed = input.trim();
    let caps = QUANTITY
        .captures(trimmed)
        .ok_or_else(|| UnitError::ParseError(format!("not a quantity: '{}'", trimmed)))?;

    let value_str = caps.name("value").map(|m| m.as_str()).unwrap_or_default();
    let unit_str = caps.name("unit").map(|m| m.as_str()).unwrap_or_default();

    let value = value_str
        .parse::<f64>()
        .map_err(|e| UnitError::ParseError(format!("invalid number '{}': {}", value_str, e)))?;

    Ok((value, unit_str))
}

/// Parse a quantity string such as "100 MB" or "68 °F"
pub fn parse_quantity(input: &str) -> Result<ParsedQuantity, UnitError> {
    let (value, unit_str) = split_quantity(input)?;
    let unit = Unit::from_str(unit_str)?;

    Ok(ParsedQuantity {
        value,
        unit,
        original: input.trim().to_string(),
    })
}

/// Number and unit from text that carries a unit of kind `U` ("1.5 GB" for a
/// size). `None` for bare numbers and for units of another kind.
pub fn parse_typed_unit<U: FromStr>(input: &str) -> Option<(f64, U)> {
    if !looks_like_quantity(input) {
        return None;
    }
    let (value, unit_str) = split_quantity(input).ok()?;
    match U::from_str(unit_str) {
        Ok(unit) => Some((value, unit)),
        Err(_) => {
            log::debug!(
                "unit '{}' not valid for this field, keeping selected unit",
                unit_str
            );
            None
        }
    }
}

/// Parse a calculator field that may carry its own unit.
///
/// "1.5 GB" typed into a size field yields `(1.5, GB)`. Text without a
/// recognizable unit of the field's kind falls back to the field's selected
/// unit, keeping only the number.
pub fn parse_field<U: FromStr + Copy>(input: &str, fallback: U) -> Option<(f64, U)> {
    parse_typed_unit(input).or_else(|| parse_number(input).map(|value| (value, fallback)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::data::{FileSizeUnit, SpeedUnit, TimeUnit};
    use crate::units::measure::TemperatureUnit;

    #[test]
    fn test_lenient_number() {
        assert_eq!(parse_lenient_number("100"), Some(100.0));
        assert_eq!(parse_lenient_number("1,024"), Some(1024.0));
        assert_eq!(parse_lenient_number("$12.50"), Some(12.5));
        assert_eq!(parse_lenient_number("1.2.3"), Some(1.2));
        assert_eq!(parse_lenient_number("-7 MB"), Some(-7.0));
        assert_eq!(parse_lenient_number(".5"), Some(0.5));
        assert_eq!(parse_lenient_number("5."), Some(5.0));
        assert_eq!(parse_lenient_number(""), None);
        assert_eq!(parse_lenient_number("abc"), None);
        assert_eq!(parse_lenient_number("--1"), None);
    }

    #[test]
    fn test_parse_number_keeps_exponents() {
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("  42 "), Some(42.0));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_parse_quantity() {
        let q = parse_quantity("1.5 GB").unwrap();
        assert_eq!(q.value, 1.5);
        assert_eq!(q.unit, Unit::DataSize(FileSizeUnit::GB));
        assert_eq!(q.original, "1.5 GB");

        let q = parse_quantity("10Mbps").unwrap();
        assert_eq!(q.unit, Unit::Speed(SpeedUnit::Mbps));

        let q = parse_quantity("-20 °C").unwrap();
        assert_eq!(q.value, -20.0);
        assert_eq!(q.unit, Unit::Temperature(TemperatureUnit::Celsius));

        let q = parse_quantity("2.5e3 ms").unwrap();
        assert_eq!(q.value, 2500.0);
        assert_eq!(q.unit, Unit::Time(TimeUnit::Milliseconds));
    }

    #[test]
    fn test_parse_quantity_errors() {
        assert!(matches!(parse_quantity("100"), Err(UnitError::ParseError(_))));
        assert!(matches!(
            parse_quantity("100 widgets"),
            Err(UnitError::UnknownUnit(_))
        ));
        assert!(parse_quantity("").is_err());
    }

    #[test]
    fn test_parse_field_uses_typed_unit() {
        assert_eq!(
            parse_field("1.5 GB", FileSizeUnit::MB),
            Some((1.5, FileSizeUnit::GB))
        );
        assert_eq!(
            parse_field("30 seconds", TimeUnit::Minutes),
            Some((30.0, TimeUnit::Seconds))
        );
        assert_eq!(
            parse_field("5 MB/s", SpeedUnit::Mbps),
            Some((5.0, SpeedUnit::MegabytesPerSec))
        );
    }

    #[test]
    fn test_parse_typed_unit_only_for_matching_kind() {
        assert_eq!(
            parse_typed_unit::<FileSizeUnit>("1 MB"),
            Some((1.0, FileSizeUnit::MB))
        );
        assert_eq!(parse_typed_unit::<FileSizeUnit>("1"), None);
        assert_eq!(parse_typed_unit::<FileSizeUnit>("2 min"), None);
    }

    #[test]
    fn test_parse_field_falls_back_to_selected_unit() {
        assert_eq!(parse_field("250", FileSizeUnit::MB), Some((250.0, FileSizeUnit::MB)));
        // "5 m" is not a time unit, so only the number is kept
        assert_eq!(parse_field("5 m", TimeUnit::Minutes), Some((5.0, TimeUnit::Minutes)));
        assert_eq!(parse_field("", SpeedUnit::Mbps), None);
        assert_eq!(parse_field("fast", SpeedUnit::Mbps), None);
    }
}
