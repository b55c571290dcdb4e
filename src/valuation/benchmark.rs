//! Benchmark lookup functionality.
//!
//! This module resolves a loyalty program code to its benchmark point value,
//! falling back to the configured default when the program is unknown.

use rust_decimal::Decimal;

use crate::config::ValuationConfig;
use crate::models::{AuditStep, AuditWarning, BenchmarkSource};

/// The result of a benchmark lookup, including the audit step.
#[derive(Debug, Clone)]
pub struct BenchmarkLookupResult {
    /// The benchmark value in cents per point.
    pub benchmark: Decimal,
    /// Whether the benchmark came from the catalog or the default fallback.
    pub source: BenchmarkSource,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
    /// Warning emitted when the program was not in the catalog.
    pub warning: Option<AuditWarning>,
}

/// Resolves the benchmark point value for a loyalty program.
///
/// Known programs get their catalog benchmark. Unknown programs do not
/// error: they get the configured default benchmark, and a warning is
/// attached so the fallback is visible to the caller.
///
/// # Arguments
///
/// * `program` - The loyalty program code (e.g., "aadvantage")
/// * `config` - The valuation configuration containing the catalog
/// * `step_number` - The step number for audit trail sequencing
pub fn lookup_benchmark(
    program: &str,
    config: &ValuationConfig,
    step_number: u32,
) -> BenchmarkLookupResult {
    let (benchmark, source) = config.benchmark_for(program);

    let (source_str, reasoning, warning) = match source {
        BenchmarkSource::Catalog => (
            "catalog",
            format!(
                "Program '{}' found in catalog with benchmark {}¢/point",
                program,
                benchmark.normalize()
            ),
            None,
        ),
        BenchmarkSource::Default => (
            "default",
            format!(
                "Program '{}' not in catalog, using default benchmark {}¢/point",
                program,
                benchmark.normalize()
            ),
            Some(AuditWarning {
                code: "UNKNOWN_PROGRAM".to_string(),
                message: format!(
                    "Program '{}' is not in the catalog; default benchmark {}¢/point applied",
                    program,
                    benchmark.normalize()
                ),
                severity: "medium".to_string(),
            }),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "benchmark_lookup".to_string(),
        rule_name: "Benchmark Lookup".to_string(),
        input: serde_json::json!({
            "program": program
        }),
        output: serde_json::json!({
            "benchmark": benchmark.normalize().to_string(),
            "source": source_str
        }),
        reasoning,
    };

    BenchmarkLookupResult {
        benchmark,
        source,
        audit_step,
        warning,
    }
}
