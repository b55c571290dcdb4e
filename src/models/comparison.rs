//! Comparison result models.
//!
//! Types produced when ranking multiple flight quotes against each other.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RedemptionResult;

/// One ranked entry in a multi-flight comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Cash price with bag fees added, for display alongside the result.
    pub cash_price_with_bags: Decimal,
    /// The full valuation for this flight.
    pub result: RedemptionResult,
}

/// The result of comparing multiple flight quotes.
///
/// Entries are ordered descending by `value_with_bags`; flights with equal
/// values keep their original input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Unique identifier for this comparison.
    pub comparison_id: Uuid,
    /// When the comparison was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the comparison.
    pub engine_version: String,
    /// Ranked per-flight entries.
    pub entries: Vec<ComparisonEntry>,
}
