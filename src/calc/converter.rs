// Paired unit converter: typing into either side of a pair fills in the other.

use crate::units::convert::{convert, Unit};
use crate::units::formatter::fixed;
use crate::units::measure::{LengthUnit, MassUnit, TemperatureUnit};
use crate::units::parser::parse_lenient_number;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Decimal places shown in the converted field
pub const OUTPUT_DECIMALS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weight,
    Length,
    Temperature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionPair {
    PoundsKilograms,
    MilesKilometers,
    FeetMeters,
    InchesCentimeters,
    CelsiusFahrenheit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl ConversionPair {
    pub const ALL: [ConversionPair; 5] = [
        ConversionPair::PoundsKilograms,
        ConversionPair::MilesKilometers,
        ConversionPair::FeetMeters,
        ConversionPair::InchesCentimeters,
        ConversionPair::CelsiusFahrenheit,
    ];

    pub fn units(self) -> (Unit, Unit) {
        match self {
            ConversionPair::PoundsKilograms => {
                (Unit::Mass(MassUnit::Pound), Unit::Mass(MassUnit::Kilogram))
            }
            ConversionPair::MilesKilometers => (
                Unit::Length(LengthUnit::Mile),
                Unit::Length(LengthUnit::Kilometer),
            ),
            ConversionPair::FeetMeters => {
                (Unit::Length(LengthUnit::Foot), Unit::Length(LengthUnit::Meter))
            }
            ConversionPair::InchesCentimeters => (
                Unit::Length(LengthUnit::Inch),
                Unit::Length(LengthUnit::Centimeter),
            ),
            ConversionPair::CelsiusFahrenheit => (
                Unit::Temperature(TemperatureUnit::Celsius),
                Unit::Temperature(TemperatureUnit::Fahrenheit),
            ),
        }
    }

    pub fn unit(self, side: Side) -> Unit {
        let (left, right) = self.units();
        match side {
            Side::Left => left,
            Side::Right => right,
        }
    }

    pub fn category(self) -> Category {
        match self {
            ConversionPair::PoundsKilograms => Category::Weight,
            ConversionPair::CelsiusFahrenheit => Category::Temperature,
            _ => Category::Length,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ConversionPair::PoundsKilograms => "Pounds ↔ Kilograms",
            ConversionPair::MilesKilometers => "Miles ↔ Kilometers",
            ConversionPair::FeetMeters => "Feet ↔ Meters",
            ConversionPair::InchesCentimeters => "Inches ↔ Centimeters",
            ConversionPair::CelsiusFahrenheit => "Celsius ↔ Fahrenheit",
        }
    }

    /// Reference formulas shown under each pair
    pub fn formula_hints(self) -> &'static [&'static str] {
        match self {
            ConversionPair::PoundsKilograms => &["1 lb = 0.45359237 kg", "1 kg = 2.20462262 lb"],
            ConversionPair::MilesKilometers => &["1 mi = 1.609344 km", "1 km = 0.621371 mi"],
            ConversionPair::FeetMeters => &["1 ft = 0.3048 m", "1 m = 3.28084 ft"],
            ConversionPair::InchesCentimeters => &["1 in = 2.54 cm", "1 cm = 0.393701 in"],
            ConversionPair::CelsiusFahrenheit => &["°F = °C × 9/5 + 32", "°C = (°F − 32) × 5/9"],
        }
    }

    pub fn in_category(category: Category) -> Vec<ConversionPair> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pair| pair.category() == category)
            .collect()
    }

    /// Find the pair joining two units, in either order.
    /// Returns the pair and the side `from` sits on.
    pub fn between(from: Unit, to: Unit) -> Option<(ConversionPair, Side)> {
        Self::ALL.iter().find_map(|pair| {
            let (left, right) = pair.units();
            if left == from && right == to {
                Some((*pair, Side::Left))
            } else if right == from && left == to {
                Some((*pair, Side::Right))
            } else {
                None
            }
        })
    }
}

impl FromStr for ConversionPair {
    type Err = crate::units::UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pounds-kilograms" | "lb-kg" | "weight" => Ok(ConversionPair::PoundsKilograms),
            "miles-kilometers" | "mi-km" => Ok(ConversionPair::MilesKilometers),
            "feet-meters" | "ft-m" => Ok(ConversionPair::FeetMeters),
            "inches-centimeters" | "in-cm" => Ok(ConversionPair::InchesCentimeters),
            "celsius-fahrenheit" | "c-f" | "temperature" => Ok(ConversionPair::CelsiusFahrenheit),
            other => Err(crate::units::UnitError::UnknownUnit(other.to_string())),
        }
    }
}

/// Convert the text typed on `side` and return the text for the other side:
/// four decimals, or empty when the input holds no number.
pub fn convert_pair(pair: ConversionPair, side: Side, text: &str) -> String {
    let value = match parse_lenient_number(text) {
        Some(value) => value,
        None => return String::new(),
    };

    match convert(value, pair.unit(side), pair.unit(side.opposite())) {
        Ok(converted) => fixed(converted, OUTPUT_DECIMALS),
        Err(e) => {
            log::warn!("conversion failed for {:?}: {}", pair, e);
            String::new()
        }
    }
}

/// Both text fields of one pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairState {
    pub pair: ConversionPair,
    pub left: String,
    pub right: String,
}

impl PairState {
    pub fn new(pair: ConversionPair) -> Self {
        Self {
            pair,
            left: String::new(),
            right: String::new(),
        }
    }

    /// Store the edited side's text and refresh the other side
    pub fn edit(&mut self, side: Side, text: &str) {
        let converted = convert_pair(self.pair, side, text);
        match side {
            Side::Left => {
                self.left = text.to_string();
                self.right = converted;
            }
            Side::Right => {
                self.right = text.to_string();
                self.left = converted;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_pair_both_directions() {
        assert_eq!(
            convert_pair(ConversionPair::PoundsKilograms, Side::Left, "10"),
            "4.5359"
        );
        assert_eq!(
            convert_pair(ConversionPair::PoundsKilograms, Side::Right, "1"),
            "2.2046"
        );
        assert_eq!(
            convert_pair(ConversionPair::MilesKilometers, Side::Left, "26.2"),
            "42.1648"
        );
        assert_eq!(convert_pair(ConversionPair::FeetMeters, Side::Right, "1"), "3.2808");
        assert_eq!(
            convert_pair(ConversionPair::InchesCentimeters, Side::Left, "12"),
            "30.4800"
        );
    }

    #[test]
    fn test_temperature_pair() {
        assert_eq!(
            convert_pair(ConversionPair::CelsiusFahrenheit, Side::Left, "37"),
            "98.6000"
        );
        assert_eq!(
            convert_pair(ConversionPair::CelsiusFahrenheit, Side::Right, "-40"),
            "-40.0000"
        );
    }

    #[test]
    fn test_non_numeric_input_clears_other_side() {
        assert_eq!(convert_pair(ConversionPair::FeetMeters, Side::Left, ""), "");
        assert_eq!(convert_pair(ConversionPair::FeetMeters, Side::Left, "abc"), "");
    }

    #[test]
    fn test_pair_state_edit() {
        let mut state = PairState::new(ConversionPair::MilesKilometers);
        state.edit(Side::Left, "1");
        assert_eq!(state.left, "1");
        assert_eq!(state.right, "1.6093");

        state.edit(Side::Right, "10");
        assert_eq!(state.right, "10");
        assert_eq!(state.left, "6.2137");

        state.edit(Side::Right, "");
        assert_eq!(state.left, "");
    }

    #[test]
    fn test_formula_hints() {
        assert_eq!(
            ConversionPair::PoundsKilograms.formula_hints(),
            &["1 lb = 0.45359237 kg", "1 kg = 2.20462262 lb"]
        );
        for pair in ConversionPair::ALL {
            let hints = pair.formula_hints();
            assert_eq!(hints.len(), 2, "{:?}", pair);
            let (left, right) = pair.units();
            if pair.category() != Category::Temperature {
                assert!(hints[0].contains(left.symbol()), "{:?}", pair);
                assert!(hints[0].contains(right.symbol()), "{:?}", pair);
            }
        }
    }

    #[test]
    fn test_categories_and_lookup() {
        assert_eq!(ConversionPair::in_category(Category::Length).len(), 3);
        assert_eq!(
            ConversionPair::between(
                Unit::Length(LengthUnit::Meter),
                Unit::Length(LengthUnit::Foot)
            ),
            Some((ConversionPair::FeetMeters, Side::Right))
        );
        assert_eq!(
            ConversionPair::between(
                Unit::Length(LengthUnit::Meter),
                Unit::Length(LengthUnit::Mile)
            ),
            None
        );
        assert_eq!(
            "lb-kg".parse::<ConversionPair>().unwrap(),
            ConversionPair::PoundsKilograms
        );
    }
}
