use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::ImmigrationProfile;
use super::repository::{ReportId, ReportRepository, RepositoryError};
use super::service::{ExpressEntryReportService, ReportServiceError};

const RECENT_LIMIT: usize = 20;

/// Router builder exposing HTTP endpoints for report generation and
/// retrieval.
pub fn report_router<R>(service: Arc<ExpressEntryReportService<R>>) -> Router
where
    R: ReportRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/reports",
            post(generate_handler::<R>).get(recent_handler::<R>),
        )
        .route("/api/v1/reports/:report_id", get(report_handler::<R>))
        .with_state(service)
}

pub(crate) async fn generate_handler<R>(
    State(service): State<Arc<ExpressEntryReportService<R>>>,
    axum::Json(profile): axum::Json<ImmigrationProfile>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.generate(profile) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(ReportServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ReportServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "report already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn recent_handler<R>(
    State(service): State<Arc<ExpressEntryReportService<R>>>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.recent(RECENT_LIMIT) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.summary_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<ExpressEntryReportService<R>>>,
    Path(report_id): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
{
    let id = ReportId(report_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(ReportServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "reportId": id.0,
                "error": "report not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
