//! Search and export handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::AppState;
use crate::datetime::DateRange;
use crate::news::{export_file_name, to_csv, SearchOutcome};
use crate::web::dto::{ApiResponse, SearchRequest, SearchResponse};
use crate::web::error::ApiError;
use crate::NewsError;

/// POST /api/search - Run one search over the session settings.
///
/// A body that does not deserialize (e.g., a malformed date) is answered
/// with 422 and the usual error body.
pub async fn search(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SearchResponse>>, ApiError> {
    let Json(req) = payload.map_err(|e| NewsError::Validation(e.body_text()))?;
    let default = state.default_range();
    let range = DateRange::new(
        req.start.unwrap_or(default.start),
        req.end.unwrap_or(default.end),
    );

    // Snapshot so no lock is held while the feed requests run
    let settings = state.settings.read().await.clone();
    let outcome = state.service.run(&settings, &range).await;
    let response = SearchResponse::new(&outcome, &range);

    let mut last = state.last_results.lock().await;
    *last = match outcome {
        SearchOutcome::Found(items) => Some(items),
        _ => None,
    };

    Ok(Json(ApiResponse::new(response)))
}

/// GET /api/search/export - Download the last search result as CSV.
pub async fn export_csv(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let last = state.last_results.lock().await;
    let items = last
        .as_ref()
        .ok_or_else(|| ApiError::not_found("No search result to export"))?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(state.today())
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        to_csv(items),
    )
        .into_response())
}
