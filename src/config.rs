use crate::calc::debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
use crate::calc::download::{DownloadCalculator, DownloadInputs};
use crate::calc::electricity::DEFAULT_PEAK_HOURS;
use crate::units::{FileSizeUnit, SpeedUnit, TimeUnit};
use serde::{Deserialize, Serialize};

/// Environment variable holding the footer feedback link
pub const FEEDBACK_URL_ENV: &str = "NEXT_PUBLIC_FEEDBACK_URL";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    // Defaults for the electricity calculator
    #[serde(default)]
    pub electricity: ElectricityConfig,

    // Initial units and debounce for the download calculator
    #[serde(default)]
    pub download: DownloadConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub feedback_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ElectricityConfig {
    /// Country code; detected from the locale when absent
    #[serde(default)]
    pub country: Option<String>,

    /// Flat rate per kWh overriding the country default
    #[serde(default)]
    pub rate: Option<f64>,

    #[serde(default = "default_peak_hours")]
    pub peak_hours: f64,
}

impl Default for ElectricityConfig {
    fn default() -> Self {
        Self {
            country: None,
            rate: None,
            peak_hours: default_peak_hours(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DownloadConfig {
    #[serde(default = "default_size_unit")]
    pub size_unit: FileSizeUnit,

    #[serde(default = "default_time_unit")]
    pub time_unit: TimeUnit,

    #[serde(default = "default_speed_unit")]
    pub speed_unit: SpeedUnit,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: f64,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            size_unit: default_size_unit(),
            time_unit: default_time_unit(),
            speed_unit: default_speed_unit(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl DownloadConfig {
    /// Blank form using the configured units
    pub fn inputs(&self) -> DownloadInputs {
        DownloadInputs {
            size_unit: self.size_unit,
            time_unit: self.time_unit,
            speed_unit: self.speed_unit,
            ..DownloadInputs::default()
        }
    }

    pub fn calculator(&self) -> DownloadCalculator {
        DownloadCalculator::with_inputs(self.inputs())
    }

    pub fn debouncer(&self) -> Debouncer {
        Debouncer::new(self.debounce_ms)
    }
}

fn default_peak_hours() -> f64 {
    DEFAULT_PEAK_HOURS
}

fn default_size_unit() -> FileSizeUnit {
    FileSizeUnit::MB
}

fn default_time_unit() -> TimeUnit {
    TimeUnit::Seconds
}

fn default_speed_unit() -> SpeedUnit {
    SpeedUnit::Mbps
}

fn default_debounce_ms() -> f64 {
    DEFAULT_DEBOUNCE_MS
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Apply `NEXT_PUBLIC_FEEDBACK_URL` on top of the file settings
    pub fn apply_env(&mut self) {
        self.override_feedback_url(std::env::var(FEEDBACK_URL_ENV).ok());
    }

    /// A non-empty value replaces the configured URL; empty values are ignored
    pub fn override_feedback_url(&mut self, value: Option<String>) {
        if let Some(url) = value {
            let url = url.trim();
            if !url.is_empty() {
                log::debug!("feedback url set from {}", FEEDBACK_URL_ENV);
                self.site.feedback_url = Some(url.to_string());
            }
        }
    }

    /// The feedback link to render, if one is set and non-empty
    pub fn feedback_url(&self) -> Option<&str> {
        self.site
            .feedback_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::empty();
        assert_eq!(config.feedback_url(), None);
        assert_eq!(config.electricity.peak_hours, 8.0);
        assert_eq!(config.download.size_unit, FileSizeUnit::MB);
        assert_eq!(config.download.speed_unit, SpeedUnit::Mbps);
        assert_eq!(config.download.debounce_ms, 300.0);
    }

    #[test]
    fn test_load_partial_toml() {
        let config = Config::load_from_str(
            r#"
[site]
feedback_url = "https://example.com/feedback"

[electricity]
country = "DE"
rate = 0.35

[download]
speed_unit = "MB/s"
time_unit = "min"
"#,
        )
        .unwrap();

        assert_eq!(config.feedback_url(), Some("https://example.com/feedback"));
        assert_eq!(config.electricity.country.as_deref(), Some("DE"));
        assert_eq!(config.electricity.rate, Some(0.35));
        assert_eq!(config.electricity.peak_hours, 8.0);
        assert_eq!(config.download.speed_unit, SpeedUnit::MegabytesPerSec);
        assert_eq!(config.download.time_unit, TimeUnit::Minutes);
        assert_eq!(config.download.size_unit, FileSizeUnit::MB);
    }

    #[test]
    fn test_download_section_builds_calculator_and_debouncer() {
        let config = Config::load_from_str(
            r#"
[download]
size_unit = "GB"
speed_unit = "MB/s"
debounce_ms = 500.0
"#,
        )
        .unwrap();

        let mut calc = config.download.calculator();
        assert_eq!(calc.inputs().size_unit, FileSizeUnit::GB);
        assert_eq!(calc.inputs().time_unit, TimeUnit::Seconds);
        assert_eq!(calc.inputs().speed_unit, SpeedUnit::MegabytesPerSec);
        assert_eq!(calc.inputs().speed, "100");

        calc.set_input(crate::calc::download::Field::Size, "1");
        assert_eq!(calc.seconds(), Some(1024.0 / 100.0));

        let mut debouncer = config.download.debouncer();
        assert_eq!(debouncer.delay_ms(), 500.0);
        debouncer.schedule(crate::calc::download::Field::Size, 0.0);
        assert_eq!(debouncer.poll(300.0), None);
        assert!(debouncer.poll(500.0).is_some());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::load_from_str("[download]\nspeed_unit = \"warp\"").is_err());
    }

    #[test]
    fn test_feedback_override() {
        let mut config = Config::empty();
        config.override_feedback_url(Some(String::new()));
        assert_eq!(config.feedback_url(), None);

        config.override_feedback_url(Some("https://forms.example/tools".to_string()));
        assert_eq!(config.feedback_url(), Some("https://forms.example/tools"));

        config.override_feedback_url(None);
        assert_eq!(config.feedback_url(), Some("https://forms.example/tools"));
    }

    #[test]
    fn test_blank_configured_url_is_hidden() {
        let config = Config::load_from_str("[site]\nfeedback_url = \"  \"").unwrap();
        assert_eq!(config.feedback_url(), None);
    }
}
