use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use super::route_not_found;
use crate::controllers::MechanicController;
use crate::dto::mechanic_dto::MechanicRequest;
use crate::dto::{CreatedResponse, MessageResponse};
use crate::models::Mechanic;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::{JsonBody, RecordId};

/// `/api/users` y `/api/mechanic` son dos rutas de alta con el mismo comportamiento
pub fn create_mechanic_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/users",
            get(list_mechanics).post(create_mechanic).fallback(route_not_found),
        )
        .route("/api/mechanic", post(create_mechanic).fallback(route_not_found))
        .route(
            "/api/mechanic/:id",
            put(update_mechanic)
                .delete(delete_mechanic)
                .fallback(route_not_found),
        )
}

async fn list_mechanics(State(state): State<AppState>) -> AppResult<Json<Vec<Mechanic>>> {
    let controller = MechanicController::new(state.mechanics.clone());
    let mechanics = controller.list().await?;
    Ok(Json(mechanics))
}

async fn create_mechanic(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<MechanicRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let controller = MechanicController::new(state.mechanics.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_mechanic(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(request): JsonBody<MechanicRequest>,
) -> AppResult<Json<MessageResponse>> {
    let controller = MechanicController::new(state.mechanics.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}

async fn delete_mechanic(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<MessageResponse>> {
    let controller = MechanicController::new(state.mechanics.clone());
    let response = controller.delete(&id).await?;
    Ok(Json(response))
}
