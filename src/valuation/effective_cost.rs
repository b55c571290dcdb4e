//! Effective cost and savings calculation.
//!
//! Monetizes the points at the program benchmark and works out what the
//! award booking really costs compared to paying cash.

use rust_decimal::Decimal;

use crate::models::{AuditStep, FlightQuote};

/// The result of an effective cost calculation.
#[derive(Debug, Clone)]
pub struct EffectiveCostResult {
    /// Dollar value attributed to the points (points × benchmark / 100).
    pub point_cash_value: Decimal,
    /// Total effective cost of the award booking.
    pub total_effective_cost: Decimal,
    /// Estimated savings versus paying full cash.
    pub savings: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the effective cost of an award booking.
///
/// - point_cash_value = points × benchmark / 100
/// - total_effective_cost = taxes_fees + bag_fees + point_cash_value
/// - savings = cash_price − total_effective_cost
///
/// All three values are rounded to 2 decimal places.
pub fn compute_effective_cost(
    quote: &FlightQuote,
    benchmark: Decimal,
    step_number: u32,
) -> EffectiveCostResult {
    let cash_required_with_bags = quote.cash_required_with_bags();
    let points = Decimal::from(quote.points_required);

    let point_cash_value = (points * benchmark / Decimal::ONE_HUNDRED).round_dp(2);
    let total_effective_cost = (cash_required_with_bags + point_cash_value).round_dp(2);
    let savings = (quote.cash_price - total_effective_cost).round_dp(2);

    let audit_step = AuditStep {
        step_number,
        rule_id: "effective_cost".to_string(),
        rule_name: "Effective Cost".to_string(),
        input: serde_json::json!({
            "cash_price": quote.cash_price.normalize().to_string(),
            "cash_required_with_bags": cash_required_with_bags.normalize().to_string(),
            "points_required": quote.points_required,
            "benchmark": benchmark.normalize().to_string()
        }),
        output: serde_json::json!({
            "point_cash_value": point_cash_value.normalize().to_string(),
            "total_effective_cost": total_effective_cost.normalize().to_string(),
            "savings": savings.normalize().to_string()
        }),
        reasoning: format!(
            "{} points × {}¢ = ${}; ${} cash required + ${} = ${} total; ${} − ${} = ${} savings",
            quote.points_required,
            benchmark.normalize(),
            point_cash_value.normalize(),
            cash_required_with_bags.normalize(),
            point_cash_value.normalize(),
            total_effective_cost.normalize(),
            quote.cash_price.normalize(),
            total_effective_cost.normalize(),
            savings.normalize()
        ),
    };

    EffectiveCostResult {
        point_cash_value,
        total_effective_cost,
        savings,
        audit_step,
    }
}
