use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use visa_ai::error::AppError;
use visa_ai::reports::express_entry::{
    report_router, ExpressEntryReport, ExpressEntryReportService, ImmigrationProfile,
    ProfileIntake, ReportRepository,
};

/// Stateless scoring response for callers that do not want persistence.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PreviewResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) report: ExpressEntryReport,
}

pub(crate) fn with_report_routes<R>(service: Arc<ExpressEntryReportService<R>>) -> axum::Router
where
    R: ReportRepository + 'static,
{
    report_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/reports/preview",
            axum::routing::post(preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn preview_endpoint(
    Json(profile): Json<ImmigrationProfile>,
) -> Result<Json<PreviewResponse>, AppError> {
    ProfileIntake.validate(&profile)?;
    let report = ExpressEntryReport::assemble(&profile)?;

    Ok(Json(PreviewResponse {
        generated_at: Utc::now(),
        report,
    }))
}
