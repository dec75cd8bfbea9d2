//! Configuration types for payroll runs.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The tunable rates applied by the compensation calculator.
///
/// Rates are passed into the engine explicitly rather than read from
/// hidden constants, so runs can be tested with varied rates without
/// touching engine internals.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollRates;
/// use rust_decimal::Decimal;
///
/// let rates = PayrollRates::default();
/// assert_eq!(rates.tax_percent, Decimal::from(10));
/// assert_eq!(rates.allowance_per_present_day, Decimal::from(50));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayrollRates {
    /// Flat tax percent applied on gross salary.
    #[serde(default = "default_tax_percent")]
    pub tax_percent: Decimal,
    /// Allowance paid per present day (e.g. transport/meal).
    #[serde(default = "default_allowance_per_present_day")]
    pub allowance_per_present_day: Decimal,
}

fn default_tax_percent() -> Decimal {
    Decimal::from(10)
}

fn default_allowance_per_present_day() -> Decimal {
    Decimal::from(50)
}

impl Default for PayrollRates {
    fn default() -> Self {
        Self {
            tax_percent: default_tax_percent(),
            allowance_per_present_day: default_allowance_per_present_day(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_rates() {
        let rates = PayrollRates::default();
        assert_eq!(rates.tax_percent, Decimal::from(10));
        assert_eq!(rates.allowance_per_present_day, Decimal::from(50));
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = "tax_percent: 12.5\nallowance_per_present_day: 75\n";
        let rates: PayrollRates = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rates.tax_percent, Decimal::from_str("12.5").unwrap());
        assert_eq!(rates.allowance_per_present_day, Decimal::from(75));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let yaml = "tax_percent: 15\n";
        let rates: PayrollRates = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rates.tax_percent, Decimal::from(15));
        assert_eq!(rates.allowance_per_present_day, Decimal::from(50));
    }

    #[test]
    fn test_empty_document_uses_all_defaults() {
        let rates: PayrollRates = serde_yaml::from_str("{}").unwrap();
        assert_eq!(rates, PayrollRates::default());
    }
}
