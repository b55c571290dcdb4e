//! Flight quote model.
//!
//! This module defines the [`FlightQuote`] struct that captures all inputs
//! for a single cash-versus-points redemption decision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Inputs for one redemption decision.
///
/// Monetary fields are in dollars. `cash_price` excludes bag fees; the fees
/// charged on the award ticket live in `taxes_fees` and `bag_fees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightQuote {
    /// Free-text flight name or route (e.g., "JFK to LHR").
    pub name: String,
    /// Cash price of the ticket, excluding bag fees.
    pub cash_price: Decimal,
    /// Taxes and fees charged on the award ticket.
    pub taxes_fees: Decimal,
    /// Bag fees, if applicable.
    pub bag_fees: Decimal,
    /// Points or miles required for the award booking.
    pub points_required: u32,
    /// The loyalty program code (e.g., "aadvantage").
    pub program: String,
}

impl FlightQuote {
    /// Returns the cash price with bag fees added, for display purposes.
    ///
    /// # Examples
    ///
    /// ```
    /// use redemption_engine::models::FlightQuote;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let quote = FlightQuote {
    ///     name: "JFK to LHR".to_string(),
    ///     cash_price: Decimal::from_str("425.00").unwrap(),
    ///     taxes_fees: Decimal::from_str("57.60").unwrap(),
    ///     bag_fees: Decimal::from_str("70.00").unwrap(),
    ///     points_required: 32000,
    ///     program: "aadvantage".to_string(),
    /// };
    /// assert_eq!(quote.cash_price_with_bags(), Decimal::from_str("495.00").unwrap());
    /// ```
    pub fn cash_price_with_bags(&self) -> Decimal {
        self.cash_price + self.bag_fees
    }

    /// Returns the cash required to complete the award booking.
    ///
    /// Award taxes and fees plus bag fees.
    pub fn cash_required_with_bags(&self) -> Decimal {
        self.taxes_fees + self.bag_fees
    }

    /// Validates the quote's monetary fields.
    ///
    /// Monetary fields must not be negative. Zero points is allowed here;
    /// the evaluator produces a defined zero-value result for it rather
    /// than dividing by zero.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("cash_price", self.cash_price),
            ("taxes_fees", self.taxes_fees),
            ("bag_fees", self.bag_fees),
        ] {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidQuote {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }
        Ok(())
    }
}
