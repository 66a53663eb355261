use crate::calc::error::CalcError;
use serde::Serialize;

/// Average number of days in a month
pub const AVG_DAYS_PER_MONTH: f64 = 30.44;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Interest accrued on `balance` in one day at an annual rate given as a fraction
pub fn daily_interest(balance: f64, annual_rate: f64) -> f64 {
    (balance * annual_rate) / DAYS_PER_YEAR
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterestPeriods {
    pub daily: f64,
    pub monthly: f64,
    pub annual: f64,
}

impl InterestPeriods {
    pub fn from_daily(daily: f64) -> Self {
        Self {
            daily,
            monthly: daily * AVG_DAYS_PER_MONTH,
            annual: daily * DAYS_PER_YEAR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AfterOverpayment {
    pub balance: f64,
    #[serde(flatten)]
    pub interest: InterestPeriods,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterestComparison {
    pub current: InterestPeriods,
    pub after_overpayment: AfterOverpayment,
    pub saving: InterestPeriods,
}

/// Compare daily interest before and after an immediate lump-sum overpayment.
///
/// `rate_percent` is the annual rate as a percentage (5.5 for 5.5%). A missing
/// overpayment is `0.0`; negative overpayments are treated as zero.
pub fn compare(
    balance: f64,
    rate_percent: f64,
    overpayment: f64,
) -> Result<InterestComparison, CalcError> {
    if balance.is_nan() || balance <= 0.0 {
        return Err(CalcError::invalid("balance", "must be greater than zero"));
    }
    if rate_percent.is_nan() || rate_percent < 0.0 {
        return Err(CalcError::invalid("interest rate", "must not be negative"));
    }

    let annual_rate = rate_percent / 100.0;
    let extra = if overpayment.is_finite() {
        overpayment.max(0.0)
    } else {
        0.0
    };

    let daily_current = daily_interest(balance, annual_rate);
    let new_balance = (balance - extra).max(0.0);
    let daily_new = daily_interest(new_balance, annual_rate);

    Ok(InterestComparison {
        current: InterestPeriods::from_daily(daily_current),
        after_overpayment: AfterOverpayment {
            balance: new_balance,
            interest: InterestPeriods::from_daily(daily_new),
        },
        saving: InterestPeriods::from_daily(daily_current - daily_new),
    })
}

/// Form-level entry point: parses the three text fields the way the page does
pub fn compare_inputs(
    balance: &str,
    rate_percent: &str,
    overpayment: &str,
) -> Result<InterestComparison, CalcError> {
    let balance = crate::units::parse_number(balance)
        .ok_or_else(|| CalcError::invalid("balance", "not a number"))?;
    let rate = crate::units::parse_number(rate_percent)
        .ok_or_else(|| CalcError::invalid("interest rate", "not a number"))?;
    let extra = crate::units::parse_number(overpayment).unwrap_or(0.0);
    compare(balance, rate, extra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_daily_interest() {
        assert!((daily_interest(200_000.0, 0.05) - 27.397260273972602).abs() < 1e-9);
    }

    #[test]
    fn test_compare_with_overpayment() {
        let result = compare(200_000.0, 5.5, 10_000.0).unwrap();
        let current = 200_000.0 * 0.055 / 365.0;
        let after = 190_000.0 * 0.055 / 365.0;

        assert!((result.current.daily - current).abs() < 1e-9);
        assert!((result.current.monthly - current * 30.44).abs() < 1e-9);
        assert_eq!(result.after_overpayment.balance, 190_000.0);
        assert!((result.after_overpayment.interest.daily - after).abs() < 1e-9);
        assert!((result.saving.daily - (current - after)).abs() < 1e-9);
        assert!((result.saving.annual - 10_000.0 * 0.055).abs() < 1e-6);
    }

    #[test]
    fn test_overpayment_larger_than_balance_clears_it() {
        let result = compare(5_000.0, 4.0, 9_000.0).unwrap();
        assert_eq!(result.after_overpayment.balance, 0.0);
        assert_eq!(result.after_overpayment.interest.daily, 0.0);
        assert_eq!(result.saving.daily, result.current.daily);
    }

    #[test]
    fn test_zero_rate_is_allowed() {
        let result = compare(100_000.0, 0.0, 1_000.0).unwrap();
        assert_eq!(result.saving.daily, 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(compare(0.0, 5.0, 0.0).is_err());
        assert!(compare(f64::NAN, 5.0, 0.0).is_err());
        assert!(compare(100_000.0, -1.0, 0.0).is_err());
        assert!(compare_inputs("", "5", "").is_err());
        assert!(compare_inputs("200000", "abc", "").is_err());
    }

    #[test]
    fn test_compare_inputs_defaults_overpayment() {
        let result = compare_inputs("200000", "5.5", "").unwrap();
        assert_eq!(result.after_overpayment.balance, 200_000.0);
        assert_eq!(result.saving.daily, 0.0);
    }

    proptest! {
        #[test]
        fn test_saving_is_non_negative_and_monotonic(
            balance in 1.0f64..2_000_000.0,
            rate in 0.0f64..20.0,
            a in -10_000.0f64..3_000_000.0,
            b in 0.0f64..3_000_000.0,
        ) {
            let low = compare(balance, rate, a).unwrap();
            let high = compare(balance, rate, a.max(0.0) + b).unwrap();
            prop_assert!(low.saving.daily >= 0.0);
            prop_assert!(high.saving.daily >= low.saving.daily - 1e-12);

            let expected = daily_interest(balance, rate / 100.0)
                - daily_interest((balance - a.max(0.0)).max(0.0), rate / 100.0);
            prop_assert!((low.saving.daily - expected).abs() < 1e-9);
        }
    }
}
