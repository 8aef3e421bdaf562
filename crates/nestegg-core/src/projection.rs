//! Projection Engine
//!
//! Compound-interest and annuity formulas used to project savings growth,
//! plus their inversions (required contribution, time to goal) and the
//! goal status classification.
//!
//! All rates are annual percentages (`7.0` means 7%/year). Contributions are
//! monthly and land at the end of each month. Every function here is pure and
//! does no input validation: see [`crate::analysis::GoalInputs::validate`] for
//! the checks callers run before computing a percentage or status.

use crate::analysis::GoalStatus;

/// Contribution periods per year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Percentage of target at or above which a goal is achievable
pub const ACHIEVABLE_PERCENT: f64 = 100.0;

/// Percentage of target at or above which a goal is partially achievable
pub const PARTIAL_PERCENT: f64 = 60.0;

/// Convert an annual percentage rate to a monthly fractional rate
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / MONTHS_PER_YEAR
}

/// Lump sum growth: `principal * (1 + rate/100)^years`
///
/// The rate may be negative for depreciating assets.
pub fn compound_interest(principal: f64, annual_rate_pct: f64, years: f64) -> f64 {
    principal * (1.0 + annual_rate_pct / 100.0).powf(years)
}

/// Growth factor of an end-of-month payment stream: `((1 + r)^n - 1) / r`
///
/// At `r == 0` the formula is 0/0; its limit is simply `n`.
pub fn annuity_factor(monthly_rate: f64, months: f64) -> f64 {
    if monthly_rate == 0.0 {
        return months;
    }
    ((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate
}

/// Future value of a principal plus a monthly contribution stream
pub fn future_value_with_contributions(
    principal: f64,
    monthly_contribution: f64,
    annual_rate_pct: f64,
    years: f64,
) -> f64 {
    let rate = monthly_rate(annual_rate_pct);
    let months = years * MONTHS_PER_YEAR;

    let fv_principal = principal * (1.0 + rate).powf(months);
    let fv_contributions = monthly_contribution * annuity_factor(rate, months);

    fv_principal + fv_contributions
}

/// Projected price of an asset after `years` of appreciation (or depreciation)
pub fn future_asset_price(current_price: f64, annual_appreciation_pct: f64, years: f64) -> f64 {
    compound_interest(current_price, annual_appreciation_pct, years)
}

/// Years needed for savings to grow to `target_amount`
///
/// Without contributions this solves the lump sum growth for time. When the
/// rate is not positive, or the savings already cover the target, it returns
/// 0. Note that 0 is also returned when the target can never be reached by
/// interest alone (no contribution, non-positive rate, savings below target).
///
/// With a contribution and a negative rate the balance converges to
/// `-contribution / monthly_rate`. A target at or beyond that limit is never
/// reached and the result is not finite (`NaN` or infinity); callers should
/// check `is_finite()`.
pub fn years_to_goal(
    current_savings: f64,
    monthly_contribution: f64,
    annual_rate_pct: f64,
    target_amount: f64,
) -> f64 {
    if monthly_contribution <= 0.0 {
        if annual_rate_pct <= 0.0 || current_savings >= target_amount {
            return 0.0;
        }
        return (target_amount / current_savings).ln() / (1.0 + annual_rate_pct / 100.0).ln();
    }

    let rate = monthly_rate(annual_rate_pct);

    let months = if rate == 0.0 {
        (target_amount - current_savings) / monthly_contribution
    } else {
        // n = [ln(FV*r/PMT + 1) - ln(PV*r/PMT + 1)] / ln(1 + r)
        let target_term = (target_amount * rate / monthly_contribution + 1.0).ln();
        let savings_term = (current_savings * rate / monthly_contribution + 1.0).ln();
        (target_term - savings_term) / (1.0 + rate).ln()
    };

    months / MONTHS_PER_YEAR
}

/// Monthly contribution needed to reach `target_amount` in exactly `years`
///
/// Returns 0 when the growth of `current_savings` alone already covers the
/// target. Never negative.
pub fn required_monthly_savings(
    current_savings: f64,
    target_amount: f64,
    annual_rate_pct: f64,
    years: f64,
) -> f64 {
    let rate = monthly_rate(annual_rate_pct);
    let months = years * MONTHS_PER_YEAR;

    let fv_current_savings = current_savings * (1.0 + rate).powf(months);
    let remaining = target_amount - fv_current_savings;

    if remaining <= 0.0 {
        return 0.0;
    }

    (remaining / annuity_factor(rate, months)).max(0.0)
}

/// Projected amount as a percentage of target, clamped to `[0, 100]`
///
/// Callers must ensure `target_amount > 0`.
pub fn goal_percentage(projected_amount: f64, target_amount: f64) -> f64 {
    (projected_amount / target_amount * 100.0).clamp(0.0, ACHIEVABLE_PERCENT)
}

/// Classify a projection against its target
///
/// Callers must ensure `target_amount > 0`.
pub fn determine_goal_status(projected_amount: f64, target_amount: f64) -> GoalStatus {
    let percentage = projected_amount / target_amount * 100.0;

    if percentage >= ACHIEVABLE_PERCENT {
        GoalStatus::Achievable
    } else if percentage >= PARTIAL_PERCENT {
        GoalStatus::Partially
    } else {
        GoalStatus::NotAchievable
    }
}

/// Gap between target and projection (negative means surplus)
pub fn shortfall(projected_amount: f64, target_amount: f64) -> f64 {
    target_amount - projected_amount
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = expected.abs().max(1.0) * 1e-9;
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_compound_interest_basic() {
        assert_close(compound_interest(1000.0, 10.0, 2.0), 1210.0);
        assert_close(compound_interest(1000.0, -10.0, 1.0), 900.0);
    }

    #[test]
    fn test_compound_interest_zero_horizon_is_identity() {
        for rate in [-50.0, 0.0, 7.0, 250.0] {
            assert_eq!(compound_interest(12345.0, rate, 0.0), 12345.0);
        }
    }

    #[test]
    fn test_compound_interest_non_negative() {
        for rate in [-100.0, -10.0, 0.0, 12.0] {
            for years in [0.0, 1.0, 7.5, 30.0] {
                assert!(compound_interest(5000.0, rate, years) >= 0.0);
            }
        }
    }

    #[test]
    fn test_annuity_factor_zero_rate() {
        assert_eq!(annuity_factor(0.0, 60.0), 60.0);
        assert!(annuity_factor(0.01, 60.0) > 60.0);
    }

    #[test]
    fn test_future_value_no_rate_no_contribution() {
        assert_eq!(future_value_with_contributions(50_000.0, 0.0, 0.0, 10.0), 50_000.0);
    }

    #[test]
    fn test_future_value_zero_rate_is_linear() {
        let fv = future_value_with_contributions(0.0, 2500.0, 0.0, 4.0);
        assert_eq!(fv, 2500.0 * 4.0 * 12.0);
        assert!(fv.is_finite());
    }

    #[test]
    fn test_future_value_reference_scenario() {
        let fv = future_value_with_contributions(100_000.0, 10_000.0, 7.0, 5.0);

        let r: f64 = 0.07 / 12.0;
        let growth = (1.0 + r).powf(60.0);
        let expected = 100_000.0 * growth + 10_000.0 * ((growth - 1.0) / r);

        assert!(((fv - expected) / expected).abs() < 1e-6);
        assert!(fv > 854_000.0 && fv < 860_000.0);
    }

    #[test]
    fn test_future_value_monotonic_in_each_input() {
        let base = future_value_with_contributions(10_000.0, 1_000.0, 6.0, 5.0);
        assert!(future_value_with_contributions(20_000.0, 1_000.0, 6.0, 5.0) > base);
        assert!(future_value_with_contributions(10_000.0, 2_000.0, 6.0, 5.0) > base);
        assert!(future_value_with_contributions(10_000.0, 1_000.0, 8.0, 5.0) > base);
        assert!(future_value_with_contributions(10_000.0, 1_000.0, 6.0, 6.0) > base);
        // Rate increase from zero goes through the special case
        let flat = future_value_with_contributions(10_000.0, 1_000.0, 0.0, 5.0);
        assert!(future_value_with_contributions(10_000.0, 1_000.0, 0.5, 5.0) > flat);
    }

    #[test]
    fn test_future_asset_price_depreciation() {
        let price = future_asset_price(1_000_000.0, -10.0, 5.0);
        assert_close(price, 1_000_000.0 * 0.9_f64.powi(5));
        assert!(price < 1_000_000.0);
    }

    #[test]
    fn test_years_to_goal_inverts_future_value() {
        let years = years_to_goal(100_000.0, 10_000.0, 7.0, 1_000_000.0);
        let fv = future_value_with_contributions(100_000.0, 10_000.0, 7.0, years);
        assert!((fv - 1_000_000.0).abs() < 1e-2);
        assert!(years > 5.0 && years < 6.0);
    }

    #[test]
    fn test_years_to_goal_zero_rate_is_linear() {
        let years = years_to_goal(40_000.0, 5_000.0, 0.0, 100_000.0);
        assert_close(years, 1.0);
        assert!(years.is_finite());
    }

    #[test]
    fn test_years_to_goal_without_contributions() {
        let years = years_to_goal(100_000.0, 0.0, 10.0, 121_000.0);
        assert_close(years, 2.0);
    }

    #[test]
    fn test_years_to_goal_unreachable_returns_zero() {
        // No contributions and no growth: kept at 0 for compatibility
        assert_eq!(years_to_goal(100_000.0, 0.0, 0.0, 1_000_000.0), 0.0);
        assert_eq!(years_to_goal(100_000.0, 0.0, -3.0, 1_000_000.0), 0.0);
        // Already met
        assert_eq!(years_to_goal(2_000_000.0, 0.0, 7.0, 1_000_000.0), 0.0);
    }

    #[test]
    fn test_years_to_goal_negative_rate_beyond_limit_is_not_finite() {
        // Balance converges to 10,000 / 0.01 = 1,000,000
        assert!(!years_to_goal(100_000.0, 10_000.0, -12.0, 2_000_000.0).is_finite());
        assert!(!years_to_goal(100_000.0, 10_000.0, -12.0, 1_000_000.0).is_finite());

        let years = years_to_goal(100_000.0, 10_000.0, -12.0, 500_000.0);
        assert!(years.is_finite() && years > 0.0);
    }

    #[test]
    fn test_required_monthly_savings_reaches_target() {
        let required = required_monthly_savings(100_000.0, 1_000_000.0, 7.0, 5.0);
        let fv = future_value_with_contributions(100_000.0, required, 7.0, 5.0);
        assert!((fv - 1_000_000.0).abs() < 1e-2);
    }

    #[test]
    fn test_required_monthly_savings_zero_rate() {
        let required = required_monthly_savings(40_000.0, 100_000.0, 0.0, 5.0);
        assert_close(required, 1_000.0);
    }

    #[test]
    fn test_required_monthly_savings_already_met() {
        assert_eq!(required_monthly_savings(1_000_000.0, 500_000.0, 7.0, 5.0), 0.0);
        assert_eq!(required_monthly_savings(1_000_000.0, 1_000_000.0, 0.0, 5.0), 0.0);
    }

    #[test]
    fn test_goal_percentage_clamped() {
        assert_eq!(goal_percentage(10_000_000.0, 1_000_000.0), 100.0);
        assert_eq!(goal_percentage(500_000.0, 1_000_000.0), 50.0);
        assert_eq!(goal_percentage(0.0, 1_000_000.0), 0.0);
    }

    #[test]
    fn test_goal_status_thresholds() {
        assert_eq!(determine_goal_status(100.0, 100.0), GoalStatus::Achievable);
        assert_eq!(determine_goal_status(1_200.0, 100.0), GoalStatus::Achievable);
        assert_eq!(determine_goal_status(99.99, 100.0), GoalStatus::Partially);
        assert_eq!(determine_goal_status(60.0, 100.0), GoalStatus::Partially);
        assert_eq!(determine_goal_status(59.99, 100.0), GoalStatus::NotAchievable);
        assert_eq!(determine_goal_status(0.0, 100.0), GoalStatus::NotAchievable);
    }

    #[test]
    fn test_shortfall_sign() {
        assert_eq!(shortfall(500_000.0, 1_000_000.0), 500_000.0);
        assert_eq!(shortfall(1_200_000.0, 1_000_000.0), -200_000.0);
    }
}
