//! HTTP API module for the Redemption Engine.
//!
//! This module provides the REST API endpoints for evaluating and
//! comparing cash-versus-points flight quotes.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComparisonRequest, FlightQuoteRequest};
pub use response::{ApiError, ProgramListResponse, ProgramSummary};
pub use state::AppState;
