//! Valuation result models for the Redemption Engine.
//!
//! This module contains the [`RedemptionResult`] type and its associated
//! structures that capture all outputs of evaluating a flight quote,
//! including per-point values, effective cost, assessment, and audit traces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The qualitative verdict for a redemption.
///
/// Derived deterministically from savings and the per-point value without
/// bag fees versus the program benchmark.
///
/// # Example
///
/// ```
/// use redemption_engine::models::Assessment;
///
/// assert_eq!(Assessment::Great.to_string(), "Great redemption");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    /// Redeeming points loses money or gets less than benchmark value.
    Poor,
    /// Value per point is at or slightly above benchmark.
    Good,
    /// Value per point is clearly above benchmark.
    Great,
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assessment::Poor => write!(f, "Poor redemption"),
            Assessment::Good => write!(f, "Good redemption"),
            Assessment::Great => write!(f, "Great redemption"),
        }
    }
}

/// Where the benchmark used for a valuation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkSource {
    /// The program was found in the configured catalog.
    Catalog,
    /// The program was unknown and the default benchmark was applied.
    Default,
}

/// A single step in the audit trace recording a valuation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during valuation.
///
/// Warnings indicate conditions that don't prevent a result but may require
/// attention, such as an unknown program falling back to the default
/// benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a valuation.
///
/// Records every decision made during the valuation process for
/// transparency.
///
/// # Example
///
/// ```
/// use redemption_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of valuation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during valuation.
    pub warnings: Vec<AuditWarning>,
    /// The total valuation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of evaluating a flight quote.
///
/// All monetary amounts are in dollars; per-point values and the benchmark
/// are in cents per point. Derived values are rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptionResult {
    /// Unique identifier for this evaluation.
    pub evaluation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// The flight name or route from the originating quote.
    pub flight_name: String,
    /// The loyalty program code the quote was evaluated against.
    pub program: String,
    /// The program's benchmark value in cents per point.
    pub benchmark: Decimal,
    /// Where the benchmark came from (catalog or default fallback).
    pub benchmark_source: BenchmarkSource,
    /// Points required for the award booking.
    pub points_required: u32,
    /// Cash required on the award booking (taxes & fees plus bag fees).
    pub cash_required: Decimal,
    /// Dollar value attributed to the points (points × benchmark / 100).
    pub point_cash_value: Decimal,
    /// Total effective cost of the award booking (cash required + point value).
    pub total_effective_cost: Decimal,
    /// Estimated savings versus paying full cash.
    pub savings: Decimal,
    /// Cents per point received, counting bag fees as cash outlay.
    pub value_with_bags: Decimal,
    /// Cents per point received, ignoring bag fees.
    pub value_without_bags: Decimal,
    /// The qualitative verdict.
    pub assessment: Assessment,
    /// Complete audit trace of valuation decisions.
    pub audit_trace: AuditTrace,
}
