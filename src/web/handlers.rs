//! HTTP request handlers

use super::state::AppState;
use crate::analytics::Analytics;
use crate::dataset::Mp;
use crate::error::AppError;
use crate::query::{MpParams, MpQuery};
use crate::search::MpPage;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::IntoResponse,
    Json,
};
use std::num::IntErrorKind;

/// Welcome document listing the endpoints
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to the Ugandan MP Nominations API.",
        "version": crate::VERSION,
        "endpoints": {
            "list": "/api/mps?page=1&limit=20&party=&constituency=&search=&fuzzy=",
            "detail": "/api/mps/{id}",
            "analytics": "/api/analytics",
            "health": "/health"
        }
    }))
}

/// Paginated, filterable MP listing
pub async fn list_mps(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MpPage>, AppError> {
    let Query(pairs) = pairs.map_err(|e| AppError::MalformedQuery(e.body_text()))?;
    let query = MpQuery::parse(MpParams::from_pairs(pairs))?;
    Ok(Json(state.search.execute(&query)))
}

/// Single MP by id. Any integer is accepted; ids outside the record range
/// are simply not found.
pub async fn get_mp(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Mp>, AppError> {
    let id: i64 = raw_id.trim().parse().map_err(|e: std::num::ParseIntError| {
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                AppError::invalid_param("id", "value is out of range")
            }
            _ => AppError::invalid_param("id", format!("expected an integer, got {:?}", raw_id)),
        }
    })?;

    u32::try_from(id)
        .ok()
        .and_then(|id| state.search.find(id))
        .cloned()
        .map(Json)
        .ok_or(AppError::RecordNotFound(id))
}

/// Totals and party distribution
pub async fn analytics(State(state): State<AppState>) -> Json<Analytics> {
    Json(state.analytics.as_ref().clone())
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "records": state.record_count()
    }))
}
