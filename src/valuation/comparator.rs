//! Multi-flight comparison.
//!
//! Evaluates a batch of flight quotes and ranks them by the redemption
//! value that counts bag fees, best first.

use chrono::Utc;
use uuid::Uuid;

use crate::config::ValuationConfig;
use crate::error::EngineResult;
use crate::models::{ComparisonEntry, ComparisonResult, FlightQuote};

use super::evaluator::evaluate_quote;

/// Compares multiple flight quotes.
///
/// Each quote is evaluated independently, tagged with its cash price
/// including bag fees for display, and the entries are sorted descending
/// by `value_with_bags`. The sort is stable: quotes with equal values keep
/// their input order. The input slice is not modified.
///
/// # Errors
///
/// Returns the first `InvalidQuote` error encountered; a batch with one bad
/// quote produces no partial result.
pub fn compare_quotes(
    quotes: &[FlightQuote],
    config: &ValuationConfig,
) -> EngineResult<ComparisonResult> {
    let mut entries: Vec<ComparisonEntry> = Vec::with_capacity(quotes.len());

    for quote in quotes {
        let result = evaluate_quote(quote, config)?;
        entries.push(ComparisonEntry {
            cash_price_with_bags: quote.cash_price_with_bags(),
            result,
        });
    }

    // Vec::sort_by is stable, so ties keep input order.
    entries.sort_by(|a, b| b.result.value_with_bags.cmp(&a.result.value_with_bags));

    Ok(ComparisonResult {
        comparison_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        entries,
    })
}
