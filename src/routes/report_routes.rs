use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use super::route_not_found;
use crate::controllers::ReportController;
use crate::dto::report_dto::{CreateReportRequest, UpdateReportRequest};
use crate::dto::{CreatedResponse, MessageResponse};
use crate::models::Report;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::{JsonBody, RecordId};

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/reports",
            get(list_reports).post(create_report).fallback(route_not_found),
        )
        .route("/api/reports/:id", put(update_report).fallback(route_not_found))
}

async fn list_reports(State(state): State<AppState>) -> AppResult<Json<Vec<Report>>> {
    let controller = ReportController::new(state.reports.clone());
    let reports = controller.list().await?;
    Ok(Json(reports))
}

async fn create_report(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateReportRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let controller = ReportController::new(state.reports.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_report(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(request): JsonBody<UpdateReportRequest>,
) -> AppResult<Json<MessageResponse>> {
    let controller = ReportController::new(state.reports.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}
