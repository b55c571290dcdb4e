//! Request types for the Redemption Engine API.
//!
//! This module defines the JSON request structures for the `/evaluate` and
//! `/compare` endpoints. The form collaborator submits numeric fields as
//! raw text, so they arrive here as strings and are parsed into domain
//! types; a failed parse names the offending field rather than crashing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};
use crate::models::FlightQuote;

/// One flight quote as submitted by the form collaborator.
///
/// Numeric fields are strings; see [`FlightQuote`] for their meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightQuoteRequest {
    /// Free-text flight name or route (e.g., "JFK to LHR").
    pub name: String,
    /// Cash price of the ticket, excluding bag fees (e.g., "425.00").
    pub cash_price: String,
    /// Taxes and fees charged on the award ticket (e.g., "57.60").
    pub taxes_fees: String,
    /// Bag fees, if applicable. Defaults to "0".
    #[serde(default = "zero_amount")]
    pub bag_fees: String,
    /// Points or miles required (e.g., "32000").
    pub points_required: String,
    /// The loyalty program code (e.g., "aadvantage").
    pub program: String,
}

fn zero_amount() -> String {
    "0".to_string()
}

/// Request body for the `/compare` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// The flight quotes to compare. Must contain at least one entry.
    pub flights: Vec<FlightQuoteRequest>,
}

fn parse_amount(field: &str, raw: &str) -> EngineResult<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|_| EngineError::InvalidQuote {
        field: field.to_string(),
        message: format!("'{}' is not a valid amount", raw),
    })
}

fn parse_points(raw: &str) -> EngineResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| EngineError::InvalidQuote {
            field: "points_required".to_string(),
            message: format!("'{}' is not a valid whole number of points", raw),
        })
}

impl TryFrom<FlightQuoteRequest> for FlightQuote {
    type Error = EngineError;

    fn try_from(req: FlightQuoteRequest) -> EngineResult<Self> {
        Ok(FlightQuote {
            cash_price: parse_amount("cash_price", &req.cash_price)?,
            taxes_fees: parse_amount("taxes_fees", &req.taxes_fees)?,
            bag_fees: parse_amount("bag_fees", &req.bag_fees)?,
            points_required: parse_points(&req.points_required)?,
            name: req.name,
            program: req.program,
        })
    }
}
