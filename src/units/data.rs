// Data size, time and transfer-rate units used by the download calculator.
// Byte-denominated units are binary (1 KB = 1024 B); bit-denominated units are
// decimal (1 Kb = 1000 bits).

use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const TIB: f64 = 1024.0 * 1024.0 * 1024.0 * 1024.0;

const KILOBIT_BYTES: f64 = 1000.0 / 8.0;
const MEGABIT_BYTES: f64 = (1000.0 * 1000.0) / 8.0;
const GIGABIT_BYTES: f64 = (1000.0 * 1000.0 * 1000.0) / 8.0;
const TERABIT_BYTES: f64 = (1000.0 * 1000.0 * 1000.0 * 1000.0) / 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileSizeUnit {
    B,
    KB,
    MB,
    GB,
    TB,
    Kb,
    Mb,
    Gb,
    Tb,
}

impl FileSizeUnit {
    pub const ALL: [FileSizeUnit; 9] = [
        FileSizeUnit::B,
        FileSizeUnit::KB,
        FileSizeUnit::MB,
        FileSizeUnit::GB,
        FileSizeUnit::TB,
        FileSizeUnit::Kb,
        FileSizeUnit::Mb,
        FileSizeUnit::Gb,
        FileSizeUnit::Tb,
    ];

    /// Number of bytes in one of this unit
    pub fn multiplier(self) -> f64 {
        match self {
            FileSizeUnit::B => 1.0,
            FileSizeUnit::KB => KIB,
            FileSizeUnit::MB => MIB,
            FileSizeUnit::GB => GIB,
            FileSizeUnit::TB => TIB,
            FileSizeUnit::Kb => KILOBIT_BYTES,
            FileSizeUnit::Mb => MEGABIT_BYTES,
            FileSizeUnit::Gb => GIGABIT_BYTES,
            FileSizeUnit::Tb => TERABIT_BYTES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileSizeUnit::B => "B",
            FileSizeUnit::KB => "KB",
            FileSizeUnit::MB => "MB",
            FileSizeUnit::GB => "GB",
            FileSizeUnit::TB => "TB",
            FileSizeUnit::Kb => "Kb",
            FileSizeUnit::Mb => "Mb",
            FileSizeUnit::Gb => "Gb",
            FileSizeUnit::Tb => "Tb",
        }
    }

    /// Human-readable name shown next to the selector
    pub fn description(self) -> &'static str {
        match self {
            FileSizeUnit::B => "Bytes",
            FileSizeUnit::KB => "KB (Kilobytes)",
            FileSizeUnit::MB => "MB (Megabytes)",
            FileSizeUnit::GB => "GB (Gigabytes)",
            FileSizeUnit::TB => "TB (Terabytes)",
            FileSizeUnit::Kb => "Kb (Kilobits)",
            FileSizeUnit::Mb => "Mb (Megabits)",
            FileSizeUnit::Gb => "Gb (Gigabits)",
            FileSizeUnit::Tb => "Tb (Terabits)",
        }
    }
}

impl FromStr for FileSizeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Case matters for the canonical labels: "Mb" is megabits, "MB" megabytes
        if let Some(unit) = FileSizeUnit::ALL.iter().find(|u| u.label() == s) {
            return Ok(*unit);
        }

        match s.to_lowercase().as_str() {
            "byte" | "bytes" | "b" => Ok(FileSizeUnit::B),
            "kb" | "kib" | "kilobyte" | "kilobytes" => Ok(FileSizeUnit::KB),
            "mb" | "mib" | "megabyte" | "megabytes" => Ok(FileSizeUnit::MB),
            "gb" | "gib" | "gigabyte" | "gigabytes" => Ok(FileSizeUnit::GB),
            "tb" | "tib" | "terabyte" | "terabytes" => Ok(FileSizeUnit::TB),
            "kilobit" | "kilobits" => Ok(FileSizeUnit::Kb),
            "megabit" | "megabits" => Ok(FileSizeUnit::Mb),
            "gigabit" | "gigabits" => Ok(FileSizeUnit::Gb),
            "terabit" | "terabits" => Ok(FileSizeUnit::Tb),
            _ => Err(UnitError::UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for FileSizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    #[serde(rename = "ms")]
    Milliseconds,
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "min")]
    Minutes,
    #[serde(rename = "hr")]
    Hours,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
    ];

    /// Number of seconds in one of this unit
    pub fn multiplier(self) -> f64 {
        match self {
            TimeUnit::Milliseconds => 0.001,
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3600.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "hr",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "Milliseconds",
            TimeUnit::Seconds => "Seconds",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Hours => "Hours",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ms" | "msec" | "millisecond" | "milliseconds" => Ok(TimeUnit::Milliseconds),
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "min" | "mins" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(TimeUnit::Hours),
            _ => Err(UnitError::UnknownUnit(s.trim().to_string())),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[serde(rename = "Bytes/s")]
    BytesPerSec,
    #[serde(rename = "KB/s")]
    KilobytesPerSec,
    #[serde(rename = "MB/s")]
    MegabytesPerSec,
    #[serde(rename = "GB/s")]
    GigabytesPerSec,
    #[serde(rename = "bps")]
    Bps,
    #[serde(rename = "Kbps")]
    Kbps,
    #[serde(rename = "Mbps")]
    Mbps,
    #[serde(rename = "Gbps")]
    Gbps,
    #[serde(rename = "Kb/s")]
    KilobitsPerSec,
    #[serde(rename = "Mb/s")]
    MegabitsPerSec,
    #[serde(rename = "Gb/s")]
    GigabitsPerSec,
}

impl SpeedUnit {
    pub const ALL: [SpeedUnit; 11] = [
        SpeedUnit::BytesPerSec,
        SpeedUnit::KilobytesPerSec,
        SpeedUnit::MegabytesPerSec,
        SpeedUnit::GigabytesPerSec,
        SpeedUnit::Bps,
        SpeedUnit::Kbps,
        SpeedUnit::Mbps,
        SpeedUnit::Gbps,
        SpeedUnit::KilobitsPerSec,
        SpeedUnit::MegabitsPerSec,
        SpeedUnit::GigabitsPerSec,
    ];

    /// Order used when listing every rate in the results grid
    pub const DISPLAY_ORDER: [SpeedUnit; 11] = [
        SpeedUnit::MegabytesPerSec,
        SpeedUnit::MegabitsPerSec,
        SpeedUnit::Mbps,
        SpeedUnit::KilobytesPerSec,
        SpeedUnit::KilobitsPerSec,
        SpeedUnit::Kbps,
        SpeedUnit::GigabytesPerSec,
        SpeedUnit::GigabitsPerSec,
        SpeedUnit::Gbps,
        SpeedUnit::BytesPerSec,
        SpeedUnit::Bps,
    ];

    /// Number of bytes per second in one of this unit
    pub fn multiplier(self) -> f64 {
        match self {
            SpeedUnit::BytesPerSec => 1.0,
            SpeedUnit::KilobytesPerSec => KIB,
            SpeedUnit::MegabytesPerSec => MIB,
            SpeedUnit::GigabytesPerSec => GIB,
            SpeedUnit::Bps => 1.0 / 8.0,
            SpeedUnit::Kbps | SpeedUnit::KilobitsPerSec => KILOBIT_BYTES,
            SpeedUnit::Mbps | SpeedUnit::MegabitsPerSec => MEGABIT_BYTES,
            SpeedUnit::Gbps | SpeedUnit::GigabitsPerSec => GIGABIT_BYTES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeedUnit::BytesPerSec => "Bytes/s",
            SpeedUnit::KilobytesPerSec => "KB/s",
            SpeedUnit::MegabytesPerSec => "MB/s",
            SpeedUnit::GigabytesPerSec => "GB/s",
            SpeedUnit::Bps => "bps",
            SpeedUnit::Kbps => "Kbps",
            SpeedUnit::Mbps => "Mbps",
            SpeedUnit::Gbps => "Gbps",
            SpeedUnit::KilobitsPerSec => "Kb/s",
            SpeedUnit::MegabitsPerSec => "Mb/s",
            SpeedUnit::GigabitsPerSec => "Gb/s",
        }
    }
}

impl FromStr for SpeedUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(unit) = SpeedUnit::ALL.iter().find(|u| u.label() == s) {
            return Ok(*unit);
        }

        match s {
            "B/s" | "Bps" => return Ok(SpeedUnit::BytesPerSec),
            "KBps" => return Ok(SpeedUnit::KilobytesPerSec),
            "MBps" => return Ok(SpeedUnit::MegabytesPerSec),
            "GBps" => return Ok(SpeedUnit::GigabytesPerSec),
            _ => {}
        }

        match s.to_lowercase().as_str() {
            "bytes/s" | "bytes/sec" | "byte/s" => Ok(SpeedUnit::BytesPerSec),
            "bit/s" | "bits/s" | "bits/sec" => Ok(SpeedUnit::Bps),
            "kbps" | "kbit/s" => Ok(SpeedUnit::Kbps),
            "mbps" | "mbit/s" => Ok(SpeedUnit::Mbps),
            "gbps" | "gbit/s" => Ok(SpeedUnit::Gbps),
            _ => Err(UnitError::UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn to_bytes(value: f64, unit: FileSizeUnit) -> f64 {
    value * unit.multiplier()
}

pub fn from_bytes(bytes: f64, unit: FileSizeUnit) -> f64 {
    bytes / unit.multiplier()
}

pub fn to_seconds(value: f64, unit: TimeUnit) -> f64 {
    value * unit.multiplier()
}

pub fn from_seconds(seconds: f64, unit: TimeUnit) -> f64 {
    seconds / unit.multiplier()
}

pub fn to_bytes_per_second(value: f64, unit: SpeedUnit) -> f64 {
    value * unit.multiplier()
}

pub fn from_bytes_per_second(bytes_per_sec: f64, unit: SpeedUnit) -> f64 {
    bytes_per_sec / unit.multiplier()
}
