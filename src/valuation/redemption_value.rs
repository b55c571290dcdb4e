//! Per-point redemption value calculation.
//!
//! Computes how many cents of value each point actually buys for a given
//! quote, both counting and ignoring bag fees.

use rust_decimal::Decimal;

use crate::models::{AuditStep, AuditWarning, FlightQuote};

/// The result of a redemption value calculation.
#[derive(Debug, Clone)]
pub struct RedemptionValueResult {
    /// Cents per point, counting bag fees as cash outlay. Rounded to 2 dp.
    pub value_with_bags: Decimal,
    /// Cents per point, ignoring bag fees. Rounded to 2 dp.
    pub value_without_bags: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Warning emitted when the quote requested zero points.
    pub warning: Option<AuditWarning>,
}

/// Calculates the per-point redemption values for a quote.
///
/// - value_with_bags = (cash_price − taxes_fees − bag_fees) / points × 100
/// - value_without_bags = (cash_price − taxes_fees) / points × 100
///
/// Both values are rounded to 2 decimal places. Zero points must not divide:
/// both values are defined as 0 and a `ZERO_POINTS` warning is attached.
pub fn compute_redemption_values(quote: &FlightQuote, step_number: u32) -> RedemptionValueResult {
    let cash_required_with_bags = quote.cash_required_with_bags();

    let (value_with_bags, value_without_bags, warning) = if quote.points_required == 0 {
        let warning = AuditWarning {
            code: "ZERO_POINTS".to_string(),
            message: "Quote requires zero points; per-point values are defined as 0".to_string(),
            severity: "high".to_string(),
        };
        (Decimal::ZERO, Decimal::ZERO, Some(warning))
    } else {
        let points = Decimal::from(quote.points_required);
        let with_bags = ((quote.cash_price - cash_required_with_bags) / points
            * Decimal::ONE_HUNDRED)
            .round_dp(2);
        let without_bags =
            ((quote.cash_price - quote.taxes_fees) / points * Decimal::ONE_HUNDRED).round_dp(2);
        (with_bags, without_bags, None)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "redemption_value".to_string(),
        rule_name: "Redemption Value".to_string(),
        input: serde_json::json!({
            "cash_price": quote.cash_price.normalize().to_string(),
            "taxes_fees": quote.taxes_fees.normalize().to_string(),
            "bag_fees": quote.bag_fees.normalize().to_string(),
            "points_required": quote.points_required
        }),
        output: serde_json::json!({
            "value_with_bags": value_with_bags.normalize().to_string(),
            "value_without_bags": value_without_bags.normalize().to_string()
        }),
        reasoning: if quote.points_required == 0 {
            "Zero points requested, per-point values defined as 0".to_string()
        } else {
            format!(
                "({} − {}) / {} × 100 = {}¢/point with bags; ({} − {}) / {} × 100 = {}¢/point without",
                quote.cash_price.normalize(),
                cash_required_with_bags.normalize(),
                quote.points_required,
                value_with_bags.normalize(),
                quote.cash_price.normalize(),
                quote.taxes_fees.normalize(),
                quote.points_required,
                value_without_bags.normalize()
            )
        },
    };

    RedemptionValueResult {
        value_with_bags,
        value_without_bags,
        audit_step,
        warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_quote(
        cash_price: &str,
        taxes_fees: &str,
        bag_fees: &str,
        points_required: u32,
    ) -> FlightQuote {
        FlightQuote {
            name: "JFK to LHR".to_string(),
            cash_price: dec(cash_price),
            taxes_fees: dec(taxes_fees),
            bag_fees: dec(bag_fees),
            points_required,
            program: "aadvantage".to_string(),
        }
    }

    // RV-001: worked example from the AAdvantage quote
    #[test]
    fn test_rv_001_aadvantage_example() {
        let quote = create_quote("425.00", "57.60", "70.00", 32000);

        let result = compute_redemption_values(&quote, 1);

        // (425 − 127.60) / 32000 × 100 = 0.929375 → 0.93
        assert_eq!(result.value_with_bags, dec("0.93"));
        // (425 − 57.60) / 32000 × 100 = 1.148125 → 1.15
        assert_eq!(result.value_without_bags, dec("1.15"));
        assert!(result.warning.is_none());
    }

    // RV-002: zero bag fees give equal values
    #[test]
    fn test_rv_002_zero_bag_fees_values_equal() {
        let quote = create_quote("750", "80", "0", 20000);

        let result = compute_redemption_values(&quote, 1);

        // (750 − 80) / 20000 × 100 = 3.35
        assert_eq!(result.value_with_bags, dec("3.35"));
        assert_eq!(result.value_without_bags, dec("3.35"));
    }

    // RV-003: positive bag fees depress value_with_bags only
    #[test]
    fn test_rv_003_bag_fees_reduce_value_with_bags() {
        let quote = create_quote("500", "50", "60", 25000);

        let result = compute_redemption_values(&quote, 1);

        assert!(result.value_with_bags < result.value_without_bags);
        // (500 − 110) / 25000 × 100 = 1.56
        assert_eq!(result.value_with_bags, dec("1.56"));
        // (500 − 50) / 25000 × 100 = 1.80
        assert_eq!(result.value_without_bags, dec("1.80"));
    }

    // RV-004: zero points must not divide
    #[test]
    fn test_rv_004_zero_points_yields_zero_values() {
        let quote = create_quote("425.00", "57.60", "70.00", 0);

        let result = compute_redemption_values(&quote, 1);

        assert_eq!(result.value_with_bags, Decimal::ZERO);
        assert_eq!(result.value_without_bags, Decimal::ZERO);

        let warning = result.warning.expect("Expected ZERO_POINTS warning");
        assert_eq!(warning.code, "ZERO_POINTS");
        assert_eq!(warning.severity, "high");
    }

    // RV-005: fees above cash price give negative values, not an error
    #[test]
    fn test_rv_005_negative_value_when_fees_exceed_cash_price() {
        let quote = create_quote("100.00", "120.00", "0", 10000);

        let result = compute_redemption_values(&quote, 1);

        // (100 − 120) / 10000 × 100 = −0.20
        assert_eq!(result.value_with_bags, dec("-0.20"));
        assert_eq!(result.value_without_bags, dec("-0.20"));
    }

    #[test]
    fn test_values_rounded_to_two_decimal_places() {
        let quote = create_quote("333.33", "0", "0", 7777);

        let result = compute_redemption_values(&quote, 1);

        assert_eq!(result.value_with_bags, result.value_with_bags.round_dp(2));
        assert_eq!(
            result.value_without_bags,
            result.value_without_bags.round_dp(2)
        );
    }

    #[test]
    fn test_audit_step_records_inputs_and_outputs() {
        let quote = create_quote("425.00", "57.60", "70.00", 32000);

        let result = compute_redemption_values(&quote, 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "redemption_value");
        assert_eq!(result.audit_step.input["cash_price"].as_str().unwrap(), "425");
        assert_eq!(
            result.audit_step.input["points_required"].as_u64().unwrap(),
            32000
        );
        assert_eq!(
            result.audit_step.output["value_with_bags"].as_str().unwrap(),
            "0.93"
        );
        assert!(result.audit_step.reasoning.contains("0.93"));
    }
}
