// Three-way download solver: any two of {file size, time, speed} determine the
// third through `bytes = bytes_per_second * seconds`.

use crate::calc::error::CalcError;
use crate::units::data::{
    from_bytes, from_bytes_per_second, from_seconds, to_bytes, to_bytes_per_second, to_seconds,
    FileSizeUnit, SpeedUnit, TimeUnit,
};
use crate::units::formatter::{format_file_size, format_number, format_time};
use crate::units::parser::{parse_field, parse_typed_unit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Size,
    Time,
    Speed,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Size, Field::Time, Field::Speed];

    /// Short name used in JSON and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Field::Size => "size",
            Field::Time => "time",
            Field::Speed => "speed",
        }
    }
}

impl FromStr for Field {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.key() == key)
            .ok_or_else(|| CalcError::invalid("field", format!("unknown field '{}'", s)))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Size => "file size",
            Field::Time => "download time",
            Field::Speed => "download speed",
        };
        f.write_str(name)
    }
}

fn positive(value: f64) -> Option<f64> {
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

/// A unit typed into the text becomes the selected unit; the text keeps
/// only the number
fn adopt_unit<U: FromStr>(text: &str, selected: &mut U) -> String {
    match parse_typed_unit::<U>(text) {
        Some((value, unit)) => {
            *selected = unit;
            value.to_string()
        }
        None => text.to_string(),
    }
}

/// Seconds needed to move `bytes` at `bytes_per_sec`
pub fn solve_time(bytes: f64, bytes_per_sec: f64) -> Option<f64> {
    let rate = positive(bytes_per_sec)?;
    positive(bytes / rate)
}

/// Bytes per second needed to move `bytes` in `seconds`
pub fn solve_speed(bytes: f64, seconds: f64) -> Option<f64> {
    let secs = positive(seconds)?;
    positive(bytes / secs)
}

/// Bytes moved in `seconds` at `bytes_per_sec`
pub fn solve_size(bytes_per_sec: f64, seconds: f64) -> Option<f64> {
    positive(positive(bytes_per_sec)? * positive(seconds)?)
}

/// Raw form state: the text in each field plus its selected unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadInputs {
    pub size: String,
    pub size_unit: FileSizeUnit,
    pub time: String,
    pub time_unit: TimeUnit,
    pub speed: String,
    pub speed_unit: SpeedUnit,
}

impl Default for DownloadInputs {
    fn default() -> Self {
        Self {
            size: String::new(),
            size_unit: FileSizeUnit::MB,
            time: "0".to_string(),
            time_unit: TimeUnit::Seconds,
            speed: "100".to_string(),
            speed_unit: SpeedUnit::Mbps,
        }
    }
}

/// One row of the results grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedEntry {
    pub unit: SpeedUnit,
    pub value: f64,
    pub formatted: String,
}

/// The transfer rate expressed in every speed unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedTable {
    pub bytes_per_second: f64,
    pub entries: Vec<SpeedEntry>,
}

impl SpeedTable {
    pub fn new(bytes_per_second: f64) -> Self {
        let entries = SpeedUnit::DISPLAY_ORDER
            .iter()
            .map(|unit| {
                let value = from_bytes_per_second(bytes_per_second, *unit);
                SpeedEntry {
                    unit: *unit,
                    value,
                    formatted: format_number(value),
                }
            })
            .collect();

        Self {
            bytes_per_second,
            entries,
        }
    }

    pub fn get(&self, unit: SpeedUnit) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.unit == unit)
            .map(|entry| entry.value)
    }
}

/// Everything the results panel shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadReport {
    pub inputs: DownloadInputs,
    /// Field filled in by the last recompute, if any
    pub solved: Option<Field>,
    pub bytes: Option<f64>,
    pub seconds: Option<f64>,
    pub bytes_per_second: Option<f64>,
    pub speeds: Option<SpeedTable>,
    pub summary: Option<String>,
}

/// One entry in a unit selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Selector entries for the three fields, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitOptions {
    pub size: Vec<UnitOption>,
    pub time: Vec<UnitOption>,
    pub speed: Vec<UnitOption>,
}

pub fn unit_options() -> UnitOptions {
    UnitOptions {
        size: FileSizeUnit::ALL
            .iter()
            .map(|u| UnitOption {
                value: u.label(),
                label: u.description(),
            })
            .collect(),
        time: TimeUnit::ALL
            .iter()
            .map(|u| UnitOption {
                value: u.label(),
                label: u.description(),
            })
            .collect(),
        speed: SpeedUnit::ALL
            .iter()
            .map(|u| UnitOption {
                value: u.label(),
                label: u.label(),
            })
            .collect(),
    }
}

/// Stateful download calculator tracking which fields the user edited
#[derive(Debug, Clone, Default)]
pub struct DownloadCalculator {
    inputs: DownloadInputs,
    /// Most recent edit last; never more than two distinct fields
    history: Vec<Field>,
    last_solved: Option<Field>,
}

impl DownloadCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(inputs: DownloadInputs) -> Self {
        Self {
            inputs,
            history: Vec::new(),
            last_solved: None,
        }
    }

    pub fn inputs(&self) -> &DownloadInputs {
        &self.inputs
    }

    pub fn history(&self) -> &[Field] {
        &self.history
    }

    /// Bytes in the size field, if it holds a positive number
    pub fn bytes(&self) -> Option<f64> {
        let (value, unit) = parse_field(&self.inputs.size, self.inputs.size_unit)?;
        positive(to_bytes(value, unit))
    }

    pub fn seconds(&self) -> Option<f64> {
        let (value, unit) = parse_field(&self.inputs.time, self.inputs.time_unit)?;
        positive(to_seconds(value, unit))
    }

    pub fn bytes_per_second(&self) -> Option<f64> {
        let (value, unit) = parse_field(&self.inputs.speed, self.inputs.speed_unit)?;
        positive(to_bytes_per_second(value, unit))
    }

    fn value_of(&self, field: Field) -> Option<f64> {
        match field {
            Field::Size => self.bytes(),
            Field::Time => self.seconds(),
            Field::Speed => self.bytes_per_second(),
        }
    }

    fn record_edit(&mut self, field: Field) {
        self.history.retain(|f| *f != field);
        self.history.push(field);
        if self.history.len() > 2 {
            self.history.remove(0);
        }
    }

    /// Store new text for a field and recompute. Returns the field that was
    /// filled in, if any.
    pub fn set_input(&mut self, field: Field, text: &str) -> Option<Field> {
        self.set_text(field, text);
        self.commit_edit(field);
        self.recompute()
    }

    /// Store a field's text without recomputing.
    ///
    /// A unit typed into the text ("1.5 GB") replaces the field's selected
    /// unit and the text keeps only the number.
    pub fn set_text(&mut self, field: Field, text: &str) {
        match field {
            Field::Size => {
                self.inputs.size = adopt_unit(text, &mut self.inputs.size_unit);
            }
            Field::Time => {
                self.inputs.time = adopt_unit(text, &mut self.inputs.time_unit);
            }
            Field::Speed => {
                self.inputs.speed = adopt_unit(text, &mut self.inputs.speed_unit);
            }
        }
    }

    /// Mark `field` as the most recent edit
    pub fn commit_edit(&mut self, field: Field) {
        self.record_edit(field);
    }

    pub fn set_size_unit(&mut self, unit: FileSizeUnit) -> Option<Field> {
        self.inputs.size_unit = unit;
        self.record_edit(Field::Size);
        self.recompute()
    }

    pub fn set_time_unit(&mut self, unit: TimeUnit) -> Option<Field> {
        self.inputs.time_unit = unit;
        self.record_edit(Field::Time);
        self.recompute()
    }

    pub fn set_speed_unit(&mut self, unit: SpeedUnit) -> Option<Field> {
        self.inputs.speed_unit = unit;
        self.record_edit(Field::Speed);
        self.recompute()
    }

    /// Pick the field to recompute.
    ///
    /// With exactly one field missing, that field is solved (unless the user
    /// just cleared it). With all three present, the field outside the two
    /// most recent edits is solved; a single edit to the time recomputes the
    /// speed, and any other single edit recomputes the time.
    pub fn target_field(&self) -> Option<Field> {
        let missing: Vec<Field> = Field::ALL
            .iter()
            .copied()
            .filter(|f| self.value_of(*f).is_none())
            .collect();

        match missing.as_slice() {
            [] => {}
            [only] => {
                if self.history.last() == Some(only) {
                    return None;
                }
                return Some(*only);
            }
            _ => return None,
        }

        match self.history.as_slice() {
            [] => Some(Field::Time),
            [Field::Time] => Some(Field::Speed),
            [_] => Some(Field::Time),
            recent => Field::ALL.iter().copied().find(|f| !recent.contains(f)),
        }
    }

    /// Solve the target field and write it back in that field's unit
    pub fn recompute(&mut self) -> Option<Field> {
        let target = match self.target_field() {
            Some(target) => target,
            None => {
                log::debug!("not enough inputs to recompute");
                self.last_solved = None;
                return None;
            }
        };

        let solved = match target {
            Field::Time => solve_time(self.bytes()?, self.bytes_per_second()?)
                .map(|secs| from_seconds(secs, self.inputs.time_unit)),
            Field::Speed => solve_speed(self.bytes()?, self.seconds()?)
                .map(|bps| from_bytes_per_second(bps, self.inputs.speed_unit)),
            Field::Size => solve_size(self.bytes_per_second()?, self.seconds()?)
                .map(|bytes| from_bytes(bytes, self.inputs.size_unit)),
        }?;

        let text = solved.to_string();
        match target {
            Field::Size => self.inputs.size = text,
            Field::Time => self.inputs.time = text,
            Field::Speed => self.inputs.speed = text,
        }
        log::debug!("recomputed {} = {}", target, solved);
        self.last_solved = Some(target);
        Some(target)
    }

    /// Rates in every unit, once both a size and a speed are known
    pub fn results(&self) -> Option<SpeedTable> {
        self.bytes()?;
        let rate = self.bytes_per_second()?;
        Some(SpeedTable::new(rate))
    }

    /// "Downloaded 100.00 MB (838.86 Mb) in 1m 24s at 1.25M Bytes/s"
    pub fn summary(&self) -> Option<String> {
        let bytes = self.bytes()?;
        let rate = self.bytes_per_second()?;
        let seconds = self.seconds().unwrap_or(0.0);
        Some(format!(
            "Downloaded {} in {} at {} Bytes/s",
            format_file_size(bytes),
            format_time(seconds),
            format_number(rate)
        ))
    }

    pub fn report(&self) -> DownloadReport {
        DownloadReport {
            inputs: self.inputs.clone(),
            solved: self.last_solved,
            bytes: self.bytes(),
            seconds: self.seconds(),
            bytes_per_second: self.bytes_per_second(),
            speeds: self.results(),
            summary: self.summary(),
        }
    }
}

/// One-shot solve: fill in whichever field is missing.
///
/// Needs at least two of the three fields; with all three present the time
/// is recomputed.
pub fn solve(inputs: DownloadInputs) -> Result<DownloadReport, CalcError> {
    let mut calculator = DownloadCalculator::with_inputs(inputs);

    let present = Field::ALL
        .iter()
        .filter(|f| calculator.value_of(**f).is_some())
        .count();
    if present < 2 {
        return Err(CalcError::invalid(
            "inputs",
            "enter at least two of file size, time and speed",
        ));
    }

    if calculator.recompute().is_none() {
        return Err(CalcError::invalid("inputs", "values could not be solved"));
    }

    Ok(calculator.report())
}
