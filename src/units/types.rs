use crate::units::convert::Unit;
use serde::Serialize;

/// Result of parsing a free-text quantity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedQuantity {
    /// Numeric value in `unit`
    pub value: f64,
    /// Unit recognized from the text
    pub unit: Unit,
    /// Original input string for display
    pub original: String,
}
