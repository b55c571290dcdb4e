//! HTTP request handlers for the Redemption Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::FlightQuote;
use crate::valuation::{compare_quotes, evaluate_quote};

use super::request::{ComparisonRequest, FlightQuoteRequest};
use super::response::{ApiError, ApiErrorResponse, ProgramListResponse, ProgramSummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/compare", post(compare_handler))
        .route("/programs", get(list_programs_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(error: crate::error::EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /evaluate endpoint.
///
/// Accepts a single flight quote and returns its redemption valuation.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<FlightQuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    // Parse the raw text fields into a domain quote
    let quote: FlightQuote = match request.try_into() {
        Ok(quote) => quote,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quote validation failed"
            );
            return engine_error_response(err);
        }
    };

    match evaluate_quote(&quote, state.config().config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                flight_name = %result.flight_name,
                program = %result.program,
                assessment = %result.assessment,
                savings = %result.savings,
                "Evaluation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Evaluation failed"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for POST /compare endpoint.
///
/// Accepts a batch of flight quotes and returns them ranked by redemption
/// value, best first.
async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing comparison request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    if request.flights.is_empty() {
        warn!(correlation_id = %correlation_id, "Comparison request with no flights");
        return bad_request(ApiError::validation_error(
            "At least one flight is required for a comparison",
        ));
    }

    let mut quotes: Vec<FlightQuote> = Vec::with_capacity(request.flights.len());
    for flight in request.flights {
        match flight.try_into() {
            Ok(quote) => quotes.push(quote),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Quote validation failed"
                );
                return engine_error_response(err);
            }
        }
    }

    match compare_quotes(&quotes, state.config().config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                flights_count = result.entries.len(),
                "Comparison completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Comparison failed"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for GET /programs endpoint.
///
/// Returns the fixed loyalty program list for the form collaborator's
/// select widget.
async fn list_programs_handler(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config().config();

    let mut programs: Vec<ProgramSummary> = config
        .programs()
        .iter()
        .map(|(code, program)| ProgramSummary {
            code: code.clone(),
            name: program.name.clone(),
            benchmark: program.benchmark,
        })
        .collect();
    programs.sort_by(|a, b| a.name.cmp(&b.name));

    let response = ProgramListResponse {
        default_benchmark: config.settings().default_benchmark,
        programs,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
