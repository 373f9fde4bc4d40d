//! Settings handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use super::AppState;
use crate::settings::parse_list;
use crate::web::dto::{ApiResponse, SettingsResponse, UpdateSettingsRequest};

/// Warning shown when the settings file could not be written.
pub const SAVE_FAILED_WARNING: &str =
    "설정 파일 저장 중 오류가 발생했습니다. (권한 문제일 수 있습니다)";

/// GET /api/settings - Current keywords and institutions.
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<ApiResponse<SettingsResponse>> {
    let settings = state.settings.read().await;
    Json(ApiResponse::new(SettingsResponse::from(&*settings)))
}

/// PUT /api/settings - Update and persist keywords and institutions.
///
/// The session keeps the new values even when writing the file fails; the
/// failure is returned as a warning.
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Json<ApiResponse<SettingsResponse>> {
    let snapshot = {
        let mut settings = state.settings.write().await;
        if let Some(keywords) = req.keywords.as_deref() {
            settings.keywords = parse_list(keywords);
        }
        if let Some(institutions) = req.institutions.as_deref() {
            settings.institutions = parse_list(institutions);
        }
        settings.clone()
    };

    let data = SettingsResponse::from(&snapshot);
    match state.store.save(&snapshot) {
        Ok(()) => Json(ApiResponse::new(data)),
        Err(e) => {
            tracing::warn!("Failed to save settings: {}", e);
            Json(ApiResponse::with_warning(data, SAVE_FAILED_WARNING))
        }
    }
}
