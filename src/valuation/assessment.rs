//! Qualitative assessment of a redemption.
//!
//! Applies the verdict rules in strict precedence order:
//! 1. negative savings is always poor;
//! 2. below-benchmark value is poor;
//! 3. within the good margin above benchmark is good;
//! 4. anything beyond that is great.

use rust_decimal::Decimal;

use crate::models::{Assessment, AuditStep};

/// The result of an assessment, including the audit step.
#[derive(Debug, Clone)]
pub struct AssessmentResult {
    /// The qualitative verdict.
    pub assessment: Assessment,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Derives the qualitative verdict for a redemption.
///
/// `value_without_bags` is compared against the program benchmark;
/// `good_margin` is the band above benchmark that still only rates "good".
pub fn assess(
    savings: Decimal,
    value_without_bags: Decimal,
    benchmark: Decimal,
    good_margin: Decimal,
    step_number: u32,
) -> AssessmentResult {
    let (assessment, reasoning) = if savings < Decimal::ZERO {
        (
            Assessment::Poor,
            format!(
                "Savings ${} is negative, redeeming costs more than paying cash",
                savings.normalize()
            ),
        )
    } else if value_without_bags < benchmark {
        (
            Assessment::Poor,
            format!(
                "Value {}¢/point is below the {}¢ benchmark",
                value_without_bags.normalize(),
                benchmark.normalize()
            ),
        )
    } else if value_without_bags <= benchmark + good_margin {
        (
            Assessment::Good,
            format!(
                "Value {}¢/point is within {}¢ of the {}¢ benchmark",
                value_without_bags.normalize(),
                good_margin.normalize(),
                benchmark.normalize()
            ),
        )
    } else {
        (
            Assessment::Great,
            format!(
                "Value {}¢/point exceeds the {}¢ benchmark by more than {}¢",
                value_without_bags.normalize(),
                benchmark.normalize(),
                good_margin.normalize()
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "assessment".to_string(),
        rule_name: "Redemption Assessment".to_string(),
        input: serde_json::json!({
            "savings": savings.normalize().to_string(),
            "value_without_bags": value_without_bags.normalize().to_string(),
            "benchmark": benchmark.normalize().to_string(),
            "good_margin": good_margin.normalize().to_string()
        }),
        output: serde_json::json!({
            "assessment": assessment.to_string()
        }),
        reasoning,
    };

    AssessmentResult {
        assessment,
        audit_step,
    }
}
