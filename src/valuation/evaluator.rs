//! Quote evaluation orchestration.
//!
//! Runs the full valuation pipeline for a single quote: benchmark lookup,
//! per-point redemption values, effective cost, and assessment, collecting
//! an audit trace along the way.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::config::ValuationConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditTrace, AuditWarning, FlightQuote, RedemptionResult};

use super::assessment::assess;
use super::benchmark::lookup_benchmark;
use super::effective_cost::compute_effective_cost;
use super::redemption_value::compute_redemption_values;

/// Evaluates a single flight quote into a [`RedemptionResult`].
///
/// Pure apart from the generated evaluation id and timestamp: the same quote
/// and configuration always produce the same values and assessment.
///
/// # Errors
///
/// Returns `InvalidQuote` if any monetary field is negative. Zero points and
/// unknown programs do not error; they produce a defined result with a
/// warning in the audit trace.
///
/// # Example
///
/// ```no_run
/// use redemption_engine::config::ConfigLoader;
/// use redemption_engine::models::FlightQuote;
/// use redemption_engine::valuation::evaluate_quote;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/valuation").unwrap();
/// let quote = FlightQuote {
///     name: "JFK to LHR".to_string(),
///     cash_price: Decimal::from_str("425.00").unwrap(),
///     taxes_fees: Decimal::from_str("57.60").unwrap(),
///     bag_fees: Decimal::from_str("70.00").unwrap(),
///     points_required: 32000,
///     program: "aadvantage".to_string(),
/// };
///
/// let result = evaluate_quote(&quote, loader.config()).unwrap();
/// println!("{}: {}", result.flight_name, result.assessment);
/// ```
pub fn evaluate_quote(
    quote: &FlightQuote,
    config: &ValuationConfig,
) -> EngineResult<RedemptionResult> {
    let start_time = Instant::now();

    quote.validate()?;

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let benchmark_result = lookup_benchmark(&quote.program, config, step_number);
    steps.push(benchmark_result.audit_step);
    warnings.extend(benchmark_result.warning);
    step_number += 1;

    let value_result = compute_redemption_values(quote, step_number);
    steps.push(value_result.audit_step);
    warnings.extend(value_result.warning);
    step_number += 1;

    let cost_result = compute_effective_cost(quote, benchmark_result.benchmark, step_number);
    steps.push(cost_result.audit_step);
    step_number += 1;

    let assessment_result = assess(
        cost_result.savings,
        value_result.value_without_bags,
        benchmark_result.benchmark,
        config.settings().good_margin,
        step_number,
    );
    steps.push(assessment_result.audit_step);

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(RedemptionResult {
        evaluation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        flight_name: quote.name.clone(),
        program: quote.program.clone(),
        benchmark: benchmark_result.benchmark,
        benchmark_source: benchmark_result.source,
        points_required: quote.points_required,
        cash_required: quote.cash_required_with_bags(),
        point_cash_value: cost_result.point_cash_value,
        total_effective_cost: cost_result.total_effective_cost,
        savings: cost_result.savings,
        value_with_bags: value_result.value_with_bags,
        value_without_bags: value_result.value_without_bags,
        assessment: assessment_result.assessment,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::error::EngineError;
    use crate::models::{Assessment, BenchmarkSource};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn load_config() -> ValuationConfig {
        ConfigLoader::load("config/valuation")
            .expect("Failed to load config")
            .config()
            .clone()
    }

    fn create_quote(
        cash_price: &str,
        taxes_fees: &str,
        bag_fees: &str,
        points_required: u32,
        program: &str,
    ) -> FlightQuote {
        FlightQuote {
            name: "JFK to LHR".to_string(),
            cash_price: dec(cash_price),
            taxes_fees: dec(taxes_fees),
            bag_fees: dec(bag_fees),
            points_required,
            program: program.to_string(),
        }
    }

    // EV-001: known-program quote end to end
    #[test]
    fn test_ev_001_aadvantage_poor_redemption() {
        let config = load_config();
        let quote = create_quote("425.00", "57.60", "70.00", 32000, "aadvantage");

        let result = evaluate_quote(&quote, &config).unwrap();

        assert_eq!(result.benchmark, dec("1.49"));
        assert_eq!(result.benchmark_source, BenchmarkSource::Catalog);
        assert_eq!(result.value_with_bags, dec("0.93"));
        assert_eq!(result.value_without_bags, dec("1.15"));
        assert_eq!(result.cash_required, dec("127.60"));
        assert_eq!(result.point_cash_value, dec("476.80"));
        assert_eq!(result.total_effective_cost, dec("604.40"));
        assert_eq!(result.savings, dec("-179.40"));
        assert_eq!(result.assessment, Assessment::Poor);
    }

    // EV-002: unknown program, great redemption
    #[test]
    fn test_ev_002_unknown_program_great_redemption() {
        let config = load_config();
        let quote = create_quote("750", "80", "0", 20000, "mystery_air");

        let result = evaluate_quote(&quote, &config).unwrap();

        assert_eq!(result.benchmark, dec("1.0"));
        assert_eq!(result.benchmark_source, BenchmarkSource::Default);
        assert_eq!(result.value_without_bags, dec("3.35"));
        assert_eq!(result.point_cash_value, dec("200"));
        assert_eq!(result.total_effective_cost, dec("280"));
        assert_eq!(result.savings, dec("470"));
        assert_eq!(result.assessment, Assessment::Great);

        let warning_codes: Vec<&str> = result
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();
        assert_eq!(warning_codes, vec!["UNKNOWN_PROGRAM"]);
    }

    // EV-003: zero points does not panic
    #[test]
    fn test_ev_003_zero_points_defined_result() {
        let config = load_config();
        let quote = create_quote("425.00", "57.60", "70.00", 0, "aadvantage");

        let result = evaluate_quote(&quote, &config).unwrap();

        assert_eq!(result.value_with_bags, Decimal::ZERO);
        assert_eq!(result.value_without_bags, Decimal::ZERO);
        assert!(
            result
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == "ZERO_POINTS")
        );
        // 0 < 1.49 benchmark with non-negative savings → poor
        assert_eq!(result.assessment, Assessment::Poor);
    }

    #[test]
    fn test_negative_cash_price_returns_invalid_quote() {
        let config = load_config();
        let quote = create_quote("-425.00", "57.60", "70.00", 32000, "aadvantage");

        let result = evaluate_quote(&quote, &config);

        match result.unwrap_err() {
            EngineError::InvalidQuote { field, .. } => assert_eq!(field, "cash_price"),
            other => panic!("Expected InvalidQuote, got {:?}", other),
        }
    }

    #[test]
    fn test_audit_trace_has_four_ordered_steps() {
        let config = load_config();
        let quote = create_quote("425.00", "57.60", "70.00", 32000, "aadvantage");

        let result = evaluate_quote(&quote, &config).unwrap();

        let rule_ids: Vec<&str> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "benchmark_lookup",
                "redemption_value",
                "effective_cost",
                "assessment"
            ]
        );

        let step_numbers: Vec<u32> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(step_numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_result_carries_quote_identity() {
        let config = load_config();
        let quote = create_quote("425.00", "57.60", "70.00", 32000, "aadvantage");

        let result = evaluate_quote(&quote, &config).unwrap();

        assert_eq!(result.flight_name, "JFK to LHR");
        assert_eq!(result.program, "aadvantage");
        assert_eq!(result.points_required, 32000);
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_same_inputs_same_values() {
        let config = load_config();
        let quote = create_quote("512.40", "44.10", "35.00", 27500, "avios");

        let first = evaluate_quote(&quote, &config).unwrap();
        let second = evaluate_quote(&quote, &config).unwrap();

        assert_eq!(first.value_with_bags, second.value_with_bags);
        assert_eq!(first.value_without_bags, second.value_without_bags);
        assert_eq!(first.savings, second.savings);
        assert_eq!(first.assessment, second.assessment);
    }
}
