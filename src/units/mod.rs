// Units, free-text quantity parsing and display formatting shared by every calculator

pub mod convert;
pub mod data;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod measure;
pub mod parser;
pub mod types;

pub use convert::{convert, validate_dimension, Dimension, Unit};
pub use data::{FileSizeUnit, SpeedUnit, TimeUnit};
pub use detector::looks_like_quantity;
pub use error::UnitError;
pub use formatter::{fixed, format_file_size, format_number, format_time};
pub use measure::{LengthUnit, MassUnit, TemperatureUnit};
pub use parser::{
    parse_field, parse_lenient_number, parse_number, parse_quantity, parse_typed_unit,
};
pub use types::ParsedQuantity;
