//! Model status handler

use axum::{extract::State, Json};
use gridguard_core::logic::features::LayoutInfo;

use crate::models::ModelStatusResponse;
use crate::AppState;

/// Loaded model, feature layout and classification settings
pub async fn status(State(state): State<AppState>) -> Json<ModelStatusResponse> {
    let assessor = &state.assessor;
    Json(ModelStatusResponse {
        model: assessor.model().status(),
        assessment_count: assessor.assessment_count(),
        layout: LayoutInfo::current(),
        capacity_mw: assessor.capacity_mw(),
        thresholds: *assessor.thresholds(),
    })
}
