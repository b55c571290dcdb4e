//! Points vs Cash Redemption Engine
//!
//! This crate decides whether an airline ticket is a better deal booked with
//! cash or with loyalty points, by computing per-point redemption values
//! against program-specific benchmarks and ranking competing flights.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod valuation;
