use std::fmt;

/// Why a calculator produced no result
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    InvalidInput { field: String, reason: String },
    HoursMismatch { peak: f64, off_peak: f64 },
}

impl CalcError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidInput { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            CalcError::HoursMismatch { peak, off_peak } => write!(
                f,
                "Peak and off-peak hours must add up to 24 (got {} + {})",
                peak, off_peak
            ),
        }
    }
}

impl std::error::Error for CalcError {}
