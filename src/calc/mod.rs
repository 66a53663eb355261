// Calculator engines behind each tool page

pub mod converter;
pub mod debounce;
pub mod download;
pub mod electricity;
pub mod error;
pub mod mortgage;
pub mod validation;

#[cfg(test)]
mod tests;

pub use converter::{convert_pair, Category, ConversionPair, PairState, Side};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
pub use download::{
    solve, DownloadCalculator, DownloadInputs, DownloadReport, Field, SpeedEntry, SpeedTable,
};
pub use electricity::{
    annual_cost, detect_country, find_country, CostEstimate, Country, Tariff, COUNTRIES,
};
pub use error::CalcError;
pub use mortgage::{compare, compare_inputs, InterestComparison};
pub use validation::{IssueSeverity, ValidationIssue, ValidationResult};
