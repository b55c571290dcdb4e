//! Valuation logic for the Redemption Engine.
//!
//! This module contains the calculation stages for deciding cash versus
//! points: benchmark lookup, per-point redemption value, effective cost
//! and savings, the qualitative assessment, the single-quote evaluator
//! that orchestrates them, and the multi-flight comparator.

mod assessment;
mod benchmark;
mod comparator;
mod effective_cost;
mod evaluator;
mod redemption_value;

pub use assessment::{AssessmentResult, assess};
pub use benchmark::{BenchmarkLookupResult, lookup_benchmark};
pub use comparator::compare_quotes;
pub use effective_cost::{EffectiveCostResult, compute_effective_cost};
pub use evaluator::evaluate_quote;
pub use redemption_value::{RedemptionValueResult, compute_redemption_values};
