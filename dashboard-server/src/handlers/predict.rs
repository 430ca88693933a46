//! Prediction handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use gridguard_core::{build_charts, InputRecord};

use crate::models::{PredictRequest, PredictResponse};
use crate::{AppResult, AppState};

/// Encode → predict → classify → chart, on the blocking pool
pub async fn run_prediction(state: &AppState, record: InputRecord) -> AppResult<PredictResponse> {
    let assessor = state.assessor.clone();
    let chart_step_c = state.config.chart_step_c;

    let (assessment, charts) = tokio::task::spawn_blocking(move || {
        let assessment = assessor.assess(&record)?;
        let charts = build_charts(&assessor, &assessment, chart_step_c)?;
        Ok::<_, gridguard_core::GridGuardError>((assessment, charts))
    })
    .await??;

    let response = PredictResponse::new(&assessment, charts);
    tracing::info!(
        id = %response.id,
        risk = %response.risk,
        utilization = response.utilization_pct,
        "Prediction served"
    );
    Ok(response)
}

/// JSON prediction endpoint
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(req) = payload?;
    let record = req.into_record()?;
    let response = run_prediction(&state, record).await?;
    Ok(Json(response))
}
