use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    UnknownUnit(String),
    ParseError(String),
    DimensionMismatch { from: String, to: String },
    InvalidValue(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::UnknownUnit(unit) => write!(f, "Unknown unit: {}", unit),
            UnitError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            UnitError::DimensionMismatch { from, to } => {
                write!(f, "Cannot convert {} to {}: dimensions differ", from, to)
            }
            UnitError::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
        }
    }
}

impl std::error::Error for UnitError {}
