//! HTTP routes for the allocation service.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::allocation::{evaluate, Evaluation, HoldingWeight, MarketInput, GROSS_UP_DIVISOR};
use crate::error::ApiError;
use crate::EngineState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct HoldingsResponse {
    pub holdings: Vec<HoldingWeight>,
    pub count: usize,
    pub weight_sum: f64,
    pub gross_up_divisor: f64,
}

// ============================================================================
// Router
// ============================================================================

/// Build the application router.
pub fn build_router(state: Arc<EngineState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/allocation", get(get_allocation).post(post_allocation))
        .route("/api/v1/holdings", get(get_holdings))
        .with_state(state)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: "tandem-engine".to_string(),
    })
}

/// Evaluate inputs given as query parameters
pub async fn get_allocation(
    State(state): State<Arc<EngineState>>,
    input: Result<Query<MarketInput>, QueryRejection>,
) -> Result<Json<Evaluation>, ApiError> {
    let Query(input) = input?;
    run_evaluation(&state, &input).map(Json)
}

/// Evaluate inputs given as a JSON body
pub async fn post_allocation(
    State(state): State<Arc<EngineState>>,
    input: Result<Json<MarketInput>, JsonRejection>,
) -> Result<Json<Evaluation>, ApiError> {
    let Json(input) = input?;
    run_evaluation(&state, &input).map(Json)
}

/// List the strategic holding table
pub async fn get_holdings(State(state): State<Arc<EngineState>>) -> Json<HoldingsResponse> {
    Json(HoldingsResponse {
        holdings: state.holdings.as_slice().to_vec(),
        count: state.holdings.len(),
        weight_sum: state.holdings.weight_sum(),
        gross_up_divisor: GROSS_UP_DIVISOR,
    })
}

fn run_evaluation(state: &EngineState, input: &MarketInput) -> Result<Evaluation, ApiError> {
    let context = input.resolve(&state.config.defaults, &state.config.limits)?;
    Ok(evaluate(&context, &state.holdings))
}
