// 🌐 REST API - receipt submission and points lookup over HTTP
// Thin layer: all scoring lives in the registry and engine

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::engine::ScoreBreakdown;
use crate::error::Error;
use crate::fixtures::demo_items;
use crate::receipt::{Item, Receipt};
use crate::registry::ReceiptRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: ReceiptRegistry,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::ReceiptNotFound(_) => ApiError::NotFound(err.to_string()),
            Error::InvalidReceipt(_) => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid receipt: {}", rejection.body_text()))
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// GET /items - Demo item list
async fn list_items() -> Json<Vec<Item>> {
    Json(demo_items())
}

/// GET /receipts - Every submitted receipt keyed by id
async fn list_receipts(State(state): State<AppState>) -> Json<HashMap<String, Receipt>> {
    Json(state.registry.get_all())
}

/// POST /receipts/process - Submit a receipt
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload.map_err(|rejection| {
        warn!("rejected receipt submission: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let id = state.registry.submit(receipt);

    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/:id/points - Points for a submitted receipt
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state.registry.score_for(&id)?;

    Ok(Json(PointsResponse { points }))
}

/// GET /receipts/:id/breakdown - Per-rule points for a submitted receipt
async fn get_breakdown(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ScoreBreakdown>, ApiError> {
    Ok(Json(state.registry.breakdown_for(&id)?))
}

// ============================================================================
// Router
// ============================================================================

/// Build the application router around a registry
pub fn router(registry: ReceiptRegistry) -> Router {
    let state = AppState { registry };

    Router::new()
        .route("/health", get(health_check))
        .route("/items", get(list_items))
        .route("/receipts", get(list_receipts))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .route("/receipts/:id/breakdown", get(get_breakdown))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Log the available routes once the listener is up
pub fn log_routes(addr: &std::net::SocketAddr) {
    info!("Receipt server listening on http://{}", addr);
    info!("   GET  /items                   - Demo items");
    info!("   GET  /receipts                - All submitted receipts");
    info!("   POST /receipts/process        - Submit a receipt");
    info!("   GET  /receipts/:id/points     - Points for a receipt");
    info!("   GET  /receipts/:id/breakdown  - Per-rule points");
    info!("   GET  /health                  - Health check");
}
