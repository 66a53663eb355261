// Annual running cost of an always-on device under single or dual (peak/off-peak) tariffs.

use crate::calc::error::CalcError;
use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const HOURS_PER_YEAR: f64 = HOURS_PER_DAY * DAYS_PER_YEAR;

pub const HOURS_WARNING: &str = "Peak and off-peak hours must add up to 24 hours total.";

const PEAK_RATE_FACTOR: f64 = 1.5;
const OFF_PEAK_RATE_FACTOR: f64 = 0.7;

/// Default split of a dual tariff day
pub const DEFAULT_PEAK_HOURS: f64 = 8.0;
pub const DEFAULT_OFF_PEAK_HOURS: f64 = 16.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Tariff {
    Single {
        rate: f64,
    },
    Dual {
        peak_rate: f64,
        off_peak_rate: f64,
        peak_hours: f64,
        off_peak_hours: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierCost {
    pub kwh: f64,
    pub cost: f64,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TariffBreakdown {
    pub peak: TierCost,
    pub off_peak: TierCost,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub annual_kwh: f64,
    pub annual_cost: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
    pub breakdown: Option<TariffBreakdown>,
}

impl CostEstimate {
    fn from_annual(annual_kwh: f64, annual_cost: f64, breakdown: Option<TariffBreakdown>) -> Self {
        Self {
            annual_kwh,
            annual_cost,
            daily_cost: annual_cost / DAYS_PER_YEAR,
            monthly_cost: annual_cost / MONTHS_PER_YEAR,
            breakdown,
        }
    }
}

fn require_positive(field: &str, value: f64) -> Result<f64, CalcError> {
    if value.is_nan() {
        return Err(CalcError::invalid(field, "not a number"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid(field, "must be greater than zero"));
    }
    Ok(value)
}

fn hours_add_up(peak_hours: f64, off_peak_hours: f64) -> bool {
    (peak_hours + off_peak_hours - HOURS_PER_DAY).abs() < 1e-9
}

/// Annual consumption and cost of a device drawing `watts` around the clock
pub fn annual_cost(watts: f64, tariff: &Tariff) -> Result<CostEstimate, CalcError> {
    let watts = require_positive("wattage", watts)?;
    let kilowatts = watts / 1000.0;

    match *tariff {
        Tariff::Single { rate } => {
            let rate = require_positive("rate", rate)?;
            let annual_kwh = kilowatts * HOURS_PER_YEAR;
            Ok(CostEstimate::from_annual(annual_kwh, annual_kwh * rate, None))
        }
        Tariff::Dual {
            peak_rate,
            off_peak_rate,
            peak_hours,
            off_peak_hours,
        } => {
            let peak_rate = require_positive("peak rate", peak_rate)?;
            let off_peak_rate = require_positive("off-peak rate", off_peak_rate)?;
            let peak_hours = require_positive("peak hours", peak_hours)?;
            let off_peak_hours = require_positive("off-peak hours", off_peak_hours)?;
            if !hours_add_up(peak_hours, off_peak_hours) {
                return Err(CalcError::HoursMismatch {
                    peak: peak_hours,
                    off_peak: off_peak_hours,
                });
            }

            let peak_kwh = kilowatts * peak_hours * DAYS_PER_YEAR;
            let off_peak_kwh = kilowatts * off_peak_hours * DAYS_PER_YEAR;
            let peak = TierCost {
                kwh: peak_kwh,
                cost: peak_kwh * peak_rate,
                hours: peak_hours,
            };
            let off_peak = TierCost {
                kwh: off_peak_kwh,
                cost: off_peak_kwh * off_peak_rate,
                hours: off_peak_hours,
            };

            Ok(CostEstimate::from_annual(
                peak.kwh + off_peak.kwh,
                peak.cost + off_peak.cost,
                Some(TariffBreakdown { peak, off_peak }),
            ))
        }
    }
}

/// Static warning shown while the two hour fields don't cover a full day
pub fn hours_warning(peak_hours: f64, off_peak_hours: f64) -> Option<&'static str> {
    if hours_add_up(peak_hours, off_peak_hours) {
        None
    } else {
        Some(HOURS_WARNING)
    }
}

/// Editing one hours field sets the other to the rest of the day
pub fn complement_hours(hours: f64) -> f64 {
    HOURS_PER_DAY - hours
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub currency: &'static str,
    pub symbol: &'static str,
    pub default_rate: f64,
    pub locales: &'static [&'static str],
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl Country {
    pub fn default_peak_rate(&self) -> f64 {
        round_to(self.default_rate * PEAK_RATE_FACTOR, 3)
    }

    pub fn default_off_peak_rate(&self) -> f64 {
        round_to(self.default_rate * OFF_PEAK_RATE_FACTOR, 3)
    }

    /// Dual tariff prefilled from this country's defaults
    pub fn default_dual_tariff(&self) -> Tariff {
        Tariff::Dual {
            peak_rate: self.default_peak_rate(),
            off_peak_rate: self.default_off_peak_rate(),
            peak_hours: DEFAULT_PEAK_HOURS,
            off_peak_hours: DEFAULT_OFF_PEAK_HOURS,
        }
    }
}

pub static COUNTRIES: [Country; 11] = [
    Country {
        code: "US",
        name: "United States",
        currency: "USD",
        symbol: "$",
        default_rate: 0.15,
        locales: &["en-US"],
    },
    Country {
        code: "UK",
        name: "United Kingdom",
        currency: "GBP",
        symbol: "£",
        default_rate: 0.28,
        locales: &["en-GB"],
    },
    Country {
        code: "EU",
        name: "European Union",
        currency: "EUR",
        symbol: "€",
        default_rate: 0.22,
        locales: &[],
    },
    Country {
        code: "CA",
        name: "Canada",
        currency: "CAD",
        symbol: "C$",
        default_rate: 0.13,
        locales: &["en-CA", "fr-CA"],
    },
    Country {
        code: "AU",
        name: "Australia",
        currency: "AUD",
        symbol: "A$",
        default_rate: 0.25,
        locales: &["en-AU"],
    },
    Country {
        code: "JP",
        name: "Japan",
        currency: "JPY",
        symbol: "¥",
        default_rate: 25.0,
        locales: &["ja-JP", "ja"],
    },
    Country {
        code: "DE",
        name: "Germany",
        currency: "EUR",
        symbol: "€",
        default_rate: 0.32,
        locales: &["de-DE", "de"],
    },
    Country {
        code: "FR",
        name: "France",
        currency: "EUR",
        symbol: "€",
        default_rate: 0.19,
        locales: &["fr-FR", "fr"],
    },
    Country {
        code: "NL",
        name: "Netherlands",
        currency: "EUR",
        symbol: "€",
        default_rate: 0.23,
        locales: &["nl-NL", "nl"],
    },
    Country {
        code: "SE",
        name: "Sweden",
        currency: "SEK",
        symbol: "kr",
        default_rate: 1.2,
        locales: &["sv-SE", "sv"],
    },
    Country {
        code: "SG",
        name: "Singapore",
        currency: "SGD",
        symbol: "S$",
        default_rate: 0.28,
        locales: &["en-SG"],
    },
];

pub fn default_country() -> &'static Country {
    &COUNTRIES[0]
}

/// Look up a country preset by its code (case-insensitive)
pub fn find_country(code: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .find(|country| country.code.eq_ignore_ascii_case(code.trim()))
}

/// Match a locale like "en-GB" to a country: exact locale first, then the
/// language code alone, then the US default.
pub fn detect_country(locale: &str) -> &'static Country {
    let locale = locale.trim();

    if let Some(country) = COUNTRIES
        .iter()
        .find(|country| country.locales.iter().any(|l| *l == locale))
    {
        return country;
    }

    let language = locale.split(['-', '_']).next().unwrap_or_default();
    if !language.is_empty() {
        let prefix = format!("{}-", language);
        if let Some(country) = COUNTRIES.iter().find(|country| {
            country
                .locales
                .iter()
                .any(|l| l.starts_with(&prefix) || *l == language)
        }) {
            return country;
        }
    }

    log::debug!("no country preset for locale '{}', using default", locale);
    default_country()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_tariff_example() {
        let estimate = annual_cost(2000.0, &Tariff::Single { rate: 0.15 }).unwrap();
        assert!((estimate.annual_kwh - 17_520.0).abs() < 1e-9);
        assert!((estimate.annual_cost - 2628.0).abs() < 1e-9);
        assert!((estimate.daily_cost - 2628.0 / 365.0).abs() < 1e-9);
        assert!((estimate.monthly_cost - 219.0).abs() < 1e-9);
        assert!(estimate.breakdown.is_none());
    }

    #[test]
    fn test_dual_tariff_breakdown() {
        let tariff = Tariff::Dual {
            peak_rate: 0.3,
            off_peak_rate: 0.1,
            peak_hours: 8.0,
            off_peak_hours: 16.0,
        };
        let estimate = annual_cost(1000.0, &tariff).unwrap();
        let breakdown = estimate.breakdown.unwrap();
        assert!((breakdown.peak.kwh - 2920.0).abs() < 1e-9);
        assert!((breakdown.off_peak.kwh - 5840.0).abs() < 1e-9);
        assert!((estimate.annual_kwh - 8760.0).abs() < 1e-9);
        assert!((estimate.annual_cost - (2920.0 * 0.3 + 5840.0 * 0.1)).abs() < 1e-9);
        assert_eq!(breakdown.peak.hours, 8.0);
    }

    #[test]
    fn test_invalid_inputs_suppress_result() {
        assert!(annual_cost(0.0, &Tariff::Single { rate: 0.15 }).is_err());
        assert!(annual_cost(f64::NAN, &Tariff::Single { rate: 0.15 }).is_err());
        assert!(annual_cost(100.0, &Tariff::Single { rate: 0.0 }).is_err());

        let err = annual_cost(
            100.0,
            &Tariff::Dual {
                peak_rate: 0.3,
                off_peak_rate: 0.1,
                peak_hours: 10.0,
                off_peak_hours: 10.0,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            CalcError::HoursMismatch {
                peak: 10.0,
                off_peak: 10.0
            }
        );
    }

    #[test]
    fn test_hours_helpers() {
        assert_eq!(hours_warning(8.0, 16.0), None);
        assert_eq!(hours_warning(8.0, 15.0), Some(HOURS_WARNING));
        assert_eq!(complement_hours(7.0), 17.0);
    }

    #[test]
    fn test_country_defaults() {
        let uk = find_country("uk").unwrap();
        assert_eq!(uk.symbol, "£");
        assert_eq!(uk.default_peak_rate(), 0.42);
        assert_eq!(uk.default_off_peak_rate(), 0.196);
        assert!(find_country("XX").is_none());
    }

    #[test]
    fn test_detect_country() {
        assert_eq!(detect_country("en-GB").code, "UK");
        assert_eq!(detect_country("fr-CA").code, "CA");
        assert_eq!(detect_country("ja").code, "JP");
        // Language-only fallback: first preset speaking German
        assert_eq!(detect_country("de-AT").code, "DE");
        assert_eq!(detect_country("sv_FI").code, "SE");
        assert_eq!(detect_country("pt-BR").code, "US");
        assert_eq!(detect_country("").code, "US");
    }

    proptest! {
        #[test]
        fn test_single_tariff_formula(watts in 0.1f64..100_000.0, rate in 0.001f64..100.0) {
            let estimate = annual_cost(watts, &Tariff::Single { rate }).unwrap();
            let expected = (watts / 1000.0) * 8760.0 * rate;
            prop_assert!((estimate.annual_cost - expected).abs() <= 1e-9 * expected.max(1.0));
        }

        #[test]
        fn test_dual_tiers_sum_to_total(watts in 0.1f64..100_000.0, peak in 1u32..24) {
            let peak_hours = peak as f64;
            let tariff = Tariff::Dual {
                peak_rate: 0.3,
                off_peak_rate: 0.1,
                peak_hours,
                off_peak_hours: complement_hours(peak_hours),
            };
            let estimate = annual_cost(watts, &tariff).unwrap();
            let breakdown = estimate.breakdown.unwrap();
            let single = (watts / 1000.0) * HOURS_PER_YEAR;
            prop_assert!(
                (breakdown.peak.kwh + breakdown.off_peak.kwh - estimate.annual_kwh).abs() < 1e-9
            );
            prop_assert!((estimate.annual_kwh - single).abs() <= 1e-9 * single.max(1.0));
        }
    }
}
