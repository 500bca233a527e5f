use axum::{extract::State, routing::post, Json, Router};

use super::route_not_found;
use crate::controllers::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::JsonBody;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/api/login/mechanic", post(login_mechanic).fallback(route_not_found))
        .route("/api/login/admin", post(login_admin).fallback(route_not_found))
}

async fn login_mechanic(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let controller = AuthController::new(state.mechanics.clone(), state.admins.clone());
    let response = controller.login_mechanic(request).await?;
    Ok(Json(response))
}

async fn login_admin(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let controller = AuthController::new(state.mechanics.clone(), state.admins.clone());
    let response = controller.login_admin(request).await?;
    Ok(Json(response))
}
