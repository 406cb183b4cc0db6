//! REST API for Duo Grid
//!
//! Stateless endpoints: every request carries the memories it wants laid out
//! or summarised, so handlers share nothing but the layout configuration.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use duo_core::{parse_timestamp, DuoError, GridSpan, MemoryId, MemoryKind, MemoryRecord};
use duo_layout::{GridLayout, LayoutConfig, LayoutOptimizer};
use duo_recap::{Recap, TOP_LOCATIONS_COUNT_DEFAULT};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// API state holding the layout optimizer
#[derive(Clone)]
pub struct ApiState {
    optimizer: Arc<LayoutOptimizer>,
}

impl ApiState {
    /// Create API state with the default breakpoints and weights
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Create API state with custom configuration
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            optimizer: Arc::new(LayoutOptimizer::new(config)),
        }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the main API router
pub fn create_router() -> Router {
    create_router_with_state(ApiState::new())
}

/// Create the API router around existing state
pub fn create_router_with_state(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/layout", post(compute_layout))
        .route("/layout/columns", get(get_columns))
        .route("/recap", post(compute_recap))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// A memory as sent by the client; timestamps are RFC 3339 strings
///
/// Timestamps stay strings here so a malformed one is reported as a 400
/// naming the field, rather than a generic body rejection from `Json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryDto {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub photo_count: u32,
    pub location: Option<String>,
    pub song: Option<String>,
    pub title: Option<String>,
}

impl MemoryDto {
    fn into_record(self) -> duo_core::Result<MemoryRecord> {
        let start_date = self
            .start_date
            .map(|s| parse_timestamp("start_date", &s))
            .transpose()?;
        let end_date = self
            .end_date
            .map(|s| parse_timestamp("end_date", &s))
            .transpose()?;

        Ok(MemoryRecord {
            id: MemoryId::new(self.id),
            kind: MemoryKind::parse(&self.kind),
            start_date,
            end_date,
            created_at: parse_timestamp("created_at", &self.created_at)?,
            photo_count: self.photo_count,
            location: self.location,
            song: self.song,
            title: self.title,
        })
    }
}

fn into_records(memories: Vec<MemoryDto>) -> Result<Vec<MemoryRecord>, ApiError> {
    memories
        .into_iter()
        .map(MemoryDto::into_record)
        .collect::<duo_core::Result<Vec<_>>>()
        .map_err(ApiError::from)
}

fn resolve_now(now: Option<String>) -> Result<DateTime<Utc>, ApiError> {
    match now {
        Some(s) => Ok(parse_timestamp("now", &s)?),
        None => Ok(Utc::now()),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub viewport_width: i64,
    pub now: Option<String>,
    pub memories: Vec<MemoryDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ColumnsQuery {
    pub width: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecapRequest {
    pub now: Option<String>,
    pub top_locations: Option<usize>,
    pub memories: Vec<MemoryDto>,
}

// Response types
#[derive(Debug, Serialize)]
pub struct CellResponse {
    pub id: String,
    pub kind: MemoryKind,
    pub span: GridSpan,
}

impl From<&MemoryRecord> for CellResponse {
    fn from(record: &MemoryRecord) -> Self {
        Self {
            id: record.id.to_string(),
            kind: record.kind,
            span: record.kind.grid_span(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RowResponse {
    pub width: usize,
    pub items: Vec<CellResponse>,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub columns: usize,
    pub order: Vec<String>,
    pub rows: Vec<RowResponse>,
}

impl From<GridLayout<'_>> for LayoutResponse {
    fn from(layout: GridLayout<'_>) -> Self {
        let order = layout.order().map(|r| r.id.to_string()).collect();
        let rows = layout
            .rows
            .iter()
            .map(|row| RowResponse {
                width: row.width,
                items: row.items.iter().map(|r| CellResponse::from(*r)).collect(),
            })
            .collect();

        Self {
            columns: layout.columns,
            order,
            rows,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ColumnsResponse {
    pub width: i64,
    pub columns: usize,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<DuoError> for ApiError {
    fn from(err: DuoError) -> Self {
        match err {
            DuoError::InvalidTimestamp { .. } => ApiError::BadRequest(err.to_string()),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "Duo Grid"
    }))
}

/// Column count for a viewport width
async fn get_columns(
    State(state): State<ApiState>,
    Query(query): Query<ColumnsQuery>,
) -> Json<ColumnsResponse> {
    Json(ColumnsResponse {
        width: query.width,
        columns: state.optimizer.columns_for(query.width),
    })
}

/// Lay out memories for a viewport
async fn compute_layout(
    State(state): State<ApiState>,
    Json(req): Json<LayoutRequest>,
) -> Result<Json<LayoutResponse>, ApiError> {
    let now = resolve_now(req.now)?;
    let records = into_records(req.memories)?;

    let layout = state.optimizer.layout(&records, req.viewport_width, now);

    Ok(Json(LayoutResponse::from(layout)))
}

/// Summarise memories
async fn compute_recap(Json(req): Json<RecapRequest>) -> Result<Json<Recap>, ApiError> {
    let now = resolve_now(req.now)?;
    let records = into_records(req.memories)?;
    let top = req.top_locations.unwrap_or(TOP_LOCATIONS_COUNT_DEFAULT);

    Ok(Json(Recap::compute(&records, now, top)))
}
