//! Core data models for the Redemption Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod comparison;
mod quote;
mod valuation_result;

pub use comparison::{ComparisonEntry, ComparisonResult};
pub use quote::FlightQuote;
pub use valuation_result::{
    Assessment, AuditStep, AuditTrace, AuditWarning, BenchmarkSource, RedemptionResult,
};
