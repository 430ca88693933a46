//! Dashboard page handlers

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form,
};
use gridguard_core::InputRecord;

use super::predict::run_prediction;
use crate::models::PredictRequest;
use crate::views::{render_dashboard, DashboardView};
use crate::{AppError, AppState};

/// Empty dashboard with default inputs
pub async fn index() -> Html<String> {
    Html(render_dashboard(&DashboardView {
        form: default_form(),
        result: None,
        error: None,
    }))
}

/// Form submit: metrics and charts, or the error on the same page
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Form<PredictRequest>, FormRejection>,
) -> (StatusCode, Html<String>) {
    // An undecodable body leaves nothing to echo back, so the form resets
    let req = match payload {
        Ok(Form(req)) => req,
        Err(rejection) => return error_page(default_form(), AppError::from(rejection)),
    };
    let form = req.clone();

    let outcome = match req.into_record() {
        Ok(record) => run_prediction(&state, record).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(result) => (
            StatusCode::OK,
            Html(render_dashboard(&DashboardView {
                form,
                result: Some(result),
                error: None,
            })),
        ),
        Err(e) => error_page(form, e),
    }
}

fn default_form() -> PredictRequest {
    PredictRequest::from(&InputRecord::default())
}

fn error_page(form: PredictRequest, err: AppError) -> (StatusCode, Html<String>) {
    let (status, message) = err.status_and_message();
    tracing::warn!(status = status.as_u16(), "Prediction failed: {}", message);
    (
        status,
        Html(render_dashboard(&DashboardView {
            form,
            result: None,
            error: Some(message),
        })),
    )
}
