use crate::calc::error::CalcError;
use std::fmt;

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub message: String,
    /// Input field the issue refers to
    pub field: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: String, field: Option<String>) {
        self.errors.push(ValidationIssue {
            severity: IssueSeverity::Error,
            message,
            field,
        });
    }

    pub fn add_warning(&mut self, message: String, field: Option<String>) {
        self.warnings.push(ValidationIssue {
            severity: IssueSeverity::Warning,
            message,
            field,
        });
    }

    /// Record the reason a calculation was suppressed
    pub fn add_calc_error(&mut self, error: &CalcError) {
        let field = match error {
            CalcError::InvalidInput { field, .. } => Some(field.clone()),
            CalcError::HoursMismatch { .. } => Some("hours".to_string()),
        };
        self.add_error(error.to_string(), field);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .map(|issue| issue.message.clone())
            .collect()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.errors.is_empty() {
            writeln!(f, "Errors:")?;
            for error in &self.errors {
                if let Some(field) = &error.field {
                    writeln!(f, "  [{}] {}", field, error.message)?;
                } else {
                    writeln!(f, "  {}", error.message)?;
                }
            }
        }

        if !self.warnings.is_empty() {
            writeln!(f, "Warnings:")?;
            for warning in &self.warnings {
                if let Some(field) = &warning.field {
                    writeln!(f, "  [{}] {}", field, warning.message)?;
                } else {
                    writeln!(f, "  {}", warning.message)?;
                }
            }
        }

        Ok(())
    }
}
