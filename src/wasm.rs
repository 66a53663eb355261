// WebAssembly bindings for the calculators
use crate::calc::converter::{convert_pair, ConversionPair, Side};
use crate::calc::debounce::Debouncer;
use crate::calc::download::{self, DownloadCalculator, DownloadInputs, Field};
use crate::calc::electricity::{self, Tariff};
use crate::calc::mortgage;
use crate::config::Config;
use crate::site;
use crate::units;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

fn parse_field(field: &str) -> Result<Field, JsValue> {
    field
        .parse()
        .map_err(|e: crate::calc::CalcError| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct CalculatorWasm {
    config: Config,
}

impl Default for CalculatorWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CalculatorWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: Config::empty(),
        }
    }

    /// Build from TOML config contents
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<CalculatorWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self { config })
    }

    /// Solve a download form given as JSON (`DownloadInputs`)
    /// Returns JSON string of the report
    #[wasm_bindgen]
    pub fn download(&self, inputs_json: &str) -> Result<String, JsValue> {
        let inputs: DownloadInputs = serde_json::from_str(inputs_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse inputs JSON: {}", e)))?;

        let report = download::solve(inputs)
            .map_err(|e| JsValue::from_str(&format!("Download calculation failed: {}", e)))?;

        to_json(&report)
    }

    /// Tariff is JSON, e.g. `{"type":"single","rate":0.15}`
    #[wasm_bindgen]
    pub fn electricity(&self, watts: f64, tariff_json: &str) -> Result<String, JsValue> {
        let tariff: Tariff = serde_json::from_str(tariff_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse tariff JSON: {}", e)))?;

        let estimate = electricity::annual_cost(watts, &tariff)
            .map_err(|e| JsValue::from_str(&format!("Electricity calculation failed: {}", e)))?;

        to_json(&estimate)
    }

    /// Country preset for a browser locale such as "en-GB"
    #[wasm_bindgen]
    pub fn detect_country(&self, locale: &str) -> Result<String, JsValue> {
        to_json(electricity::detect_country(locale))
    }

    #[wasm_bindgen]
    pub fn countries(&self) -> Result<String, JsValue> {
        to_json(&electricity::COUNTRIES)
    }

    /// Returns the warning text, or nothing when the hours cover a full day
    #[wasm_bindgen]
    pub fn hours_warning(&self, peak_hours: f64, off_peak_hours: f64) -> Option<String> {
        electricity::hours_warning(peak_hours, off_peak_hours).map(str::to_string)
    }

    #[wasm_bindgen]
    pub fn mortgage(
        &self,
        balance: &str,
        rate_percent: &str,
        overpayment: &str,
    ) -> Result<String, JsValue> {
        let comparison = mortgage::compare_inputs(balance, rate_percent, overpayment)
            .map_err(|e| JsValue::from_str(&format!("Mortgage calculation failed: {}", e)))?;

        to_json(&comparison)
    }

    /// Paired converter: returns the text for the other side, empty when
    /// the input holds no number
    #[wasm_bindgen]
    pub fn convert_pair(&self, pair: &str, side: &str, text: &str) -> Result<String, JsValue> {
        let pair: ConversionPair = pair
            .parse()
            .map_err(|e| JsValue::from_str(&format!("Unknown pair: {}", e)))?;
        let side = match side {
            "left" => Side::Left,
            "right" => Side::Right,
            other => return Err(JsValue::from_str(&format!("Unknown side: {}", other))),
        };

        Ok(convert_pair(pair, side, text))
    }

    /// Free-form conversion, e.g. ("10", "km", "mi")
    #[wasm_bindgen]
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, JsValue> {
        let from: units::Unit = from
            .parse()
            .map_err(|e| JsValue::from_str(&format!("Failed to parse unit: {}", e)))?;
        let to: units::Unit = to
            .parse()
            .map_err(|e| JsValue::from_str(&format!("Failed to parse unit: {}", e)))?;

        units::convert(value, from, to)
            .map_err(|e| JsValue::from_str(&format!("Conversion failed: {}", e)))
    }

    /// Routes, navigation, calculators, alternatives and the feedback link
    #[wasm_bindgen]
    pub fn site(&self) -> Result<String, JsValue> {
        to_json(&site::site_map(&self.config))
    }

    /// Reference formulas for a converter pair
    #[wasm_bindgen]
    pub fn formula_hints(&self, pair: &str) -> Result<String, JsValue> {
        let pair: ConversionPair = pair
            .parse()
            .map_err(|e| JsValue::from_str(&format!("Unknown pair: {}", e)))?;
        to_json(&pair.formula_hints())
    }

    /// Selector entries for the download form
    #[wasm_bindgen]
    pub fn download_units(&self) -> Result<String, JsValue> {
        to_json(&download::unit_options())
    }

    /// Download form seeded with the configured units and debounce delay
    #[wasm_bindgen]
    pub fn download_session(&self) -> DownloadSession {
        DownloadSession::from_config(&self.config)
    }
}

/// Stateful download form: edits are debounced against the browser clock
#[wasm_bindgen]
pub struct DownloadSession {
    calculator: DownloadCalculator,
    debouncer: Debouncer,
}

impl Default for DownloadSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadSession {
    pub fn from_config(config: &Config) -> Self {
        Self {
            calculator: config.download.calculator(),
            debouncer: config.download.debouncer(),
        }
    }
}

#[wasm_bindgen]
impl DownloadSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            calculator: DownloadCalculator::new(),
            debouncer: Debouncer::default(),
        }
    }

    #[wasm_bindgen]
    pub fn with_delay(delay_ms: f64) -> Self {
        Self {
            calculator: DownloadCalculator::new(),
            debouncer: Debouncer::new(delay_ms),
        }
    }

    /// Record text for a field and start the quiet period
    #[wasm_bindgen]
    pub fn edit(&mut self, field: &str, text: &str) -> Result<(), JsValue> {
        let field = parse_field(field)?;
        self.calculator.set_text(field, text);
        self.debouncer.schedule(field, js_sys::Date::now());
        Ok(())
    }

    /// Call from a timer; recomputes once the input has settled.
    /// Returns the solved field name, if any.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> Option<String> {
        let field = self.debouncer.poll(js_sys::Date::now())?;
        self.calculator.commit_edit(field);
        self.calculator.recompute().map(|f| f.key().to_string())
    }

    #[wasm_bindgen]
    pub fn set_unit(&mut self, field: &str, unit: &str) -> Result<(), JsValue> {
        let field = parse_field(field)?;
        let bad_unit = |e: units::UnitError| JsValue::from_str(&format!("Invalid unit: {}", e));
        self.debouncer.cancel();
        match field {
            Field::Size => self.calculator.set_size_unit(unit.parse().map_err(bad_unit)?),
            Field::Time => self.calculator.set_time_unit(unit.parse().map_err(bad_unit)?),
            Field::Speed => self.calculator.set_speed_unit(unit.parse().map_err(bad_unit)?),
        };
        Ok(())
    }

    #[wasm_bindgen]
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Returns JSON string of the current report
    #[wasm_bindgen]
    pub fn report(&self) -> Result<String, JsValue> {
        to_json(&self.calculator.report())
    }
}
