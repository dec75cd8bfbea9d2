//! Compensation calculation.
//!
//! Pure function from (basic salary, present days, working days) to
//! prorated basic pay, allowances, and deductions, with rounding applied
//! at every intermediate step.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PayrollRates;

/// Key under which the flat-rate tax component is recorded in the
/// deduction breakdown.
pub const TAX_DEDUCTION_KEY: &str = "tax";

/// The result of a compensation calculation for one employee-month.
///
/// Deductions are kept as a breakdown of named components so additional
/// categories (loans, advances, provident fund) can be added without
/// changing the calculation contract. The core engine records a single
/// component under [`TAX_DEDUCTION_KEY`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompensationResult {
    /// Basic salary prorated by attendance, rounded to 2 decimal places.
    pub prorated_basic: Decimal,
    /// Per-present-day allowances, rounded to 2 decimal places.
    pub allowances: Decimal,
    /// Gross pay: prorated basic plus allowances, rounded to 2 decimal places.
    pub gross: Decimal,
    /// Named deduction components, each rounded to 2 decimal places.
    pub deductions: BTreeMap<String, Decimal>,
}

impl CompensationResult {
    /// The sum of all deduction components.
    pub fn total_deductions(&self) -> Decimal {
        self.deductions.values().sum()
    }

    /// The net pay: gross minus total deductions, rounded to 2 decimal
    /// places.
    ///
    /// Net is always derived from the other components, never carried as
    /// independent state.
    pub fn net(&self) -> Decimal {
        round2(self.gross - self.total_deductions())
    }
}

/// Rounds a monetary value to 2 decimal places using banker's rounding.
///
/// The same strategy is used for every intermediate step so cent-level
/// results are reproducible from the stored components.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Calculates compensation for one employee-month.
///
/// Each step rounds to 2 decimal places before the next step consumes it;
/// deferring rounding to the end produces different cent-level results for
/// typical fractional attendance ratios, so the step order is part of the
/// contract:
///
/// 1. `prorated_basic = round2(basic_salary * present_days / working_days)`
/// 2. `allowances = round2(allowance_per_present_day * present_days)`
/// 3. `gross = round2(prorated_basic + allowances)`
/// 4. `tax = round2(gross * tax_percent / 100)`
/// 5. `net = round2(gross - deductions)` (derived via [`CompensationResult::net`])
///
/// # Arguments
///
/// * `basic_salary` - The employee's monthly basic salary (non-negative)
/// * `present_days` - The present-day count from attendance aggregation
/// * `working_days` - The working-day count for the month (>= 1)
/// * `rates` - The allowance and tax rates in effect for the run
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_compensation;
/// use payroll_engine::config::PayrollRates;
/// use rust_decimal::Decimal;
///
/// let result = calculate_compensation(
///     Decimal::new(300000, 2), // 3000.00
///     20,
///     20,
///     &PayrollRates::default(),
/// );
/// assert_eq!(result.prorated_basic, Decimal::new(300000, 2));
/// assert_eq!(result.allowances, Decimal::new(100000, 2));
/// assert_eq!(result.net(), Decimal::new(360000, 2));
/// ```
pub fn calculate_compensation(
    basic_salary: Decimal,
    present_days: u32,
    working_days: u32,
    rates: &PayrollRates,
) -> CompensationResult {
    // working_days carries a floor of 1 from the working-day counter, so
    // the division below cannot hit a zero divisor.
    let working_days = working_days.max(1);

    let present = Decimal::from(present_days);
    let working = Decimal::from(working_days);

    let prorated_basic = round2(basic_salary * present / working);
    let allowances = round2(rates.allowance_per_present_day * present);
    let gross = round2(prorated_basic + allowances);
    let tax = round2(gross * rates.tax_percent / Decimal::ONE_HUNDRED);

    let mut deductions = BTreeMap::new();
    deductions.insert(TAX_DEDUCTION_KEY.to_string(), tax);

    CompensationResult {
        prorated_basic,
        allowances,
        gross,
        deductions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// CC-001: full attendance pays the full basic salary
    #[test]
    fn test_full_attendance_reference_case() {
        let result = calculate_compensation(dec("3000"), 20, 20, &PayrollRates::default());

        assert_eq!(result.prorated_basic, dec("3000.00"));
        assert_eq!(result.allowances, dec("1000.00"));
        assert_eq!(result.gross, dec("4000.00"));
        assert_eq!(result.total_deductions(), dec("400.00"));
        assert_eq!(result.net(), dec("3600.00"));
    }

    /// CC-002: zero present days zeroes out every component
    #[test]
    fn test_zero_present_days_yields_all_zeros() {
        let result = calculate_compensation(dec("3000"), 0, 22, &PayrollRates::default());

        assert_eq!(result.prorated_basic, dec("0.00"));
        assert_eq!(result.allowances, dec("0.00"));
        assert_eq!(result.gross, dec("0.00"));
        assert_eq!(result.total_deductions(), dec("0.00"));
        assert_eq!(result.net(), dec("0.00"));
    }

    /// CC-003: fractional ratio rounds at each step
    #[test]
    fn test_fractional_ratio_step_wise_rounding() {
        // 2600 * 13/21 = 1609.5238..., rounded before allowances are added.
        let result = calculate_compensation(dec("2600"), 13, 21, &PayrollRates::default());

        assert_eq!(result.prorated_basic, dec("1609.52"));
        assert_eq!(result.allowances, dec("650.00"));
        assert_eq!(result.gross, dec("2259.52"));
        assert_eq!(result.total_deductions(), dec("225.95"));
        assert_eq!(result.net(), dec("2033.57"));
    }

    /// CC-004: step-wise and end-only rounding disagree at the cent level
    #[test]
    fn test_step_wise_differs_from_end_only_rounding() {
        // 1000 * 7/23 = 304.3478...; step-wise, the tax base is the rounded
        // gross 654.35 and the tax is round2(65.435) = 65.44. End-only
        // rounding would tax the raw gross 654.3478... and land on 65.43.
        let rates = PayrollRates::default();
        let result = calculate_compensation(dec("1000"), 7, 23, &rates);

        assert_eq!(result.prorated_basic, dec("304.35"));
        assert_eq!(result.gross, dec("654.35"));
        assert_eq!(result.total_deductions(), dec("65.44"));
        assert_eq!(result.net(), dec("588.91"));

        // End-only computation on the raw intermediate values.
        let raw_gross = dec("1000") * Decimal::from(7) / Decimal::from(23) + dec("350");
        let end_only_tax = round2(raw_gross * rates.tax_percent / Decimal::ONE_HUNDRED);
        assert_eq!(end_only_tax, dec("65.43"));
        assert_ne!(end_only_tax, result.total_deductions());
    }

    /// CC-005: rates are taken from the configuration, not constants
    #[test]
    fn test_custom_rates_are_applied() {
        let rates = PayrollRates {
            tax_percent: dec("20"),
            allowance_per_present_day: dec("25"),
        };
        let result = calculate_compensation(dec("3000"), 20, 20, &rates);

        assert_eq!(result.allowances, dec("500.00"));
        assert_eq!(result.gross, dec("3500.00"));
        assert_eq!(result.total_deductions(), dec("700.00"));
        assert_eq!(result.net(), dec("2800.00"));
    }

    /// CC-006: the tax component is recorded under its named key
    #[test]
    fn test_deduction_breakdown_names_tax() {
        let result = calculate_compensation(dec("3000"), 20, 20, &PayrollRates::default());

        assert_eq!(result.deductions.len(), 1);
        assert_eq!(result.deductions[TAX_DEDUCTION_KEY], dec("400.00"));
    }

    /// CC-007: a zero working-day divisor is floored, not divided by
    #[test]
    fn test_zero_working_days_floored_to_one() {
        let result = calculate_compensation(dec("3000"), 1, 0, &PayrollRates::default());
        assert_eq!(result.prorated_basic, dec("3000.00"));
    }

    proptest! {
        /// CC-008: net always recomputes exactly from the stored components
        #[test]
        fn prop_net_recomputes_from_components(
            basic in 0u32..1_000_000,
            present in 0u32..=23,
            working in 1u32..=23,
        ) {
            let result = calculate_compensation(
                Decimal::from(basic),
                present,
                working,
                &PayrollRates::default(),
            );
            let recomputed = round2(result.gross - result.total_deductions());
            prop_assert_eq!(result.net(), recomputed);
            // All components carry at most 2 decimal places.
            prop_assert!(result.prorated_basic.scale() <= 2);
            prop_assert!(result.total_deductions().scale() <= 2);
        }
    }
}
