use crate::units::data::{FileSizeUnit, SpeedUnit, TimeUnit};
use crate::units::error::UnitError;
use crate::units::measure::{LengthUnit, MassUnit, TemperatureUnit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Mass,
    Length,
    Temperature,
    DataSize,
    Time,
    Speed,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Mass => "mass",
            Dimension::Length => "length",
            Dimension::Temperature => "temperature",
            Dimension::DataSize => "data size",
            Dimension::Time => "time",
            Dimension::Speed => "speed",
        };
        f.write_str(name)
    }
}

/// Any unit the calculators know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "dimension", content = "unit", rename_all = "snake_case")]
pub enum Unit {
    Mass(MassUnit),
    Length(LengthUnit),
    Temperature(TemperatureUnit),
    DataSize(FileSizeUnit),
    Time(TimeUnit),
    Speed(SpeedUnit),
}

impl Unit {
    pub fn dimension(self) -> Dimension {
        match self {
            Unit::Mass(_) => Dimension::Mass,
            Unit::Length(_) => Dimension::Length,
            Unit::Temperature(_) => Dimension::Temperature,
            Unit::DataSize(_) => Dimension::DataSize,
            Unit::Time(_) => Dimension::Time,
            Unit::Speed(_) => Dimension::Speed,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Mass(u) => u.symbol(),
            Unit::Length(u) => u.symbol(),
            Unit::Temperature(u) => u.symbol(),
            Unit::DataSize(u) => u.label(),
            Unit::Time(u) => u.label(),
            Unit::Speed(u) => u.label(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    /// Resolve a unit symbol or alias. Order matters where symbols overlap:
    /// "m" is metres (minutes are "min"), "b"/"B" are bytes, and speeds are
    /// tried before sizes so "Mbps" never falls back to a size unit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(UnitError::UnknownUnit(String::new()));
        }

        if let Ok(u) = TemperatureUnit::from_str(s) {
            return Ok(Unit::Temperature(u));
        }
        if let Ok(u) = MassUnit::from_str(s) {
            return Ok(Unit::Mass(u));
        }
        if let Ok(u) = LengthUnit::from_str(s) {
            return Ok(Unit::Length(u));
        }
        if let Ok(u) = SpeedUnit::from_str(s) {
            return Ok(Unit::Speed(u));
        }
        if let Ok(u) = FileSizeUnit::from_str(s) {
            return Ok(Unit::DataSize(u));
        }
        if let Ok(u) = TimeUnit::from_str(s) {
            return Ok(Unit::Time(u));
        }

        Err(UnitError::UnknownUnit(s.to_string()))
    }
}

/// Check that two units measure the same dimension
pub fn validate_dimension(from: Unit, to: Unit) -> Result<Dimension, UnitError> {
    if from.dimension() != to.dimension() {
        return Err(UnitError::DimensionMismatch {
            from: format!("{} ({})", from, from.dimension()),
            to: format!("{} ({})", to, to.dimension()),
        });
    }
    Ok(from.dimension())
}

/// Convert `value` from one unit to another of the same dimension
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, UnitError> {
    if !value.is_finite() {
        return Err(UnitError::InvalidValue(value.to_string()));
    }
    validate_dimension(from, to)?;

    let converted = match (from, to) {
        (Unit::Mass(a), Unit::Mass(b)) => a.convert(value, b),
        (Unit::Length(a), Unit::Length(b)) => a.convert(value, b),
        (Unit::Temperature(a), Unit::Temperature(b)) => a.convert(value, b),
        (Unit::DataSize(a), Unit::DataSize(b)) => value * a.multiplier() / b.multiplier(),
        (Unit::Time(a), Unit::Time(b)) => value * a.multiplier() / b.multiplier(),
        (Unit::Speed(a), Unit::Speed(b)) => value * a.multiplier() / b.multiplier(),
        _ => unreachable!("dimensions validated above"),
    };

    Ok(converted)
}
