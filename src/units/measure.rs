// Mass, length and temperature units for the unit converter.

use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kilograms in one international avoirdupois pound
pub const KG_PER_POUND: f64 = 0.45359237;
/// Kilometres in one international mile
pub const KM_PER_MILE: f64 = 1.609344;
/// Metres in one international foot
pub const METERS_PER_FOOT: f64 = 0.3048;
/// Centimetres in one inch
pub const CM_PER_INCH: f64 = 2.54;
/// Offset between the Celsius and Kelvin scales
pub const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    Pound,
    Kilogram,
}

impl MassUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Pound => "lb",
            MassUnit::Kilogram => "kg",
        }
    }

    /// Kilograms in one of this unit
    pub fn to_base(self) -> f64 {
        match self {
            MassUnit::Pound => KG_PER_POUND,
            MassUnit::Kilogram => 1.0,
        }
    }

    pub fn convert(self, value: f64, to: MassUnit) -> f64 {
        if self == to {
            return value;
        }
        value * self.to_base() / to.to_base()
    }
}

impl FromStr for MassUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lb" | "lbs" | "pound" | "pounds" => Ok(MassUnit::Pound),
            "kg" | "kgs" | "kilo" | "kilos" | "kilogram" | "kilograms" => Ok(MassUnit::Kilogram),
            _ => Err(UnitError::UnknownUnit(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Mile,
    Kilometer,
    Foot,
    Meter,
    Inch,
    Centimeter,
}

impl LengthUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Mile => "mi",
            LengthUnit::Kilometer => "km",
            LengthUnit::Foot => "ft",
            LengthUnit::Meter => "m",
            LengthUnit::Inch => "in",
            LengthUnit::Centimeter => "cm",
        }
    }

    /// Metres in one of this unit
    pub fn to_base(self) -> f64 {
        match self {
            LengthUnit::Mile => KM_PER_MILE * 1000.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Foot => METERS_PER_FOOT,
            LengthUnit::Meter => 1.0,
            LengthUnit::Inch => CM_PER_INCH / 100.0,
            LengthUnit::Centimeter => 0.01,
        }
    }

    pub fn convert(self, value: f64, to: LengthUnit) -> f64 {
        // Direct factors for the converter's pairs keep their results exact
        match (self, to) {
            (a, b) if a == b => value,
            (LengthUnit::Mile, LengthUnit::Kilometer) => value * KM_PER_MILE,
            (LengthUnit::Kilometer, LengthUnit::Mile) => value / KM_PER_MILE,
            (LengthUnit::Foot, LengthUnit::Meter) => value * METERS_PER_FOOT,
            (LengthUnit::Meter, LengthUnit::Foot) => value / METERS_PER_FOOT,
            (LengthUnit::Inch, LengthUnit::Centimeter) => value * CM_PER_INCH,
            (LengthUnit::Centimeter, LengthUnit::Inch) => value / CM_PER_INCH,
            _ => value * self.to_base() / to.to_base(),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(LengthUnit::Mile),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(LengthUnit::Kilometer)
            }
            "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meter),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inch),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(LengthUnit::Centimeter)
            }
            _ => Err(UnitError::UnknownUnit(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => ((value - 32.0) * 5.0) / 9.0,
            TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => (celsius * 9.0) / 5.0 + 32.0,
            TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
        }
    }

    /// Affine conversion through Celsius
    pub fn convert(self, value: f64, to: TemperatureUnit) -> f64 {
        if self == to {
            return value;
        }
        to.from_celsius(self.to_celsius(value))
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Bare "C"/"F" are accepted; lowercase "c" and "f" are not unit symbols
        match trimmed {
            "C" | "°C" | "℃" => return Ok(TemperatureUnit::Celsius),
            "F" | "°F" | "℉" => return Ok(TemperatureUnit::Fahrenheit),
            "K" => return Ok(TemperatureUnit::Kelvin),
            _ => {}
        }
        match trimmed.to_lowercase().as_str() {
            "celsius" | "centigrade" | "degc" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "degf" => Ok(TemperatureUnit::Fahrenheit),
            "kelvin" => Ok(TemperatureUnit::Kelvin),
            _ => Err(UnitError::UnknownUnit(trimmed.to_string())),
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
