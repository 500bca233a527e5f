use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use super::route_not_found;
use crate::controllers::VehicleController;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::dto::{CreatedResponse, MessageResponse};
use crate::models::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::{JsonBody, RecordId};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/vehiculos",
            get(list_vehicles).post(create_vehicle).fallback(route_not_found),
        )
        .route(
            "/api/vehiculos/:id",
            put(update_vehicle)
                .delete(delete_vehicle)
                .fallback(route_not_found),
        )
}

async fn list_vehicles(State(state): State<AppState>) -> AppResult<Json<Vec<Vehicle>>> {
    let controller = VehicleController::new(state.vehicles.clone());
    let vehicles = controller.list().await?;
    Ok(Json(vehicles))
}

async fn create_vehicle(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateVehicleRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let controller = VehicleController::new(state.vehicles.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_vehicle(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(request): JsonBody<UpdateVehicleRequest>,
) -> AppResult<Json<MessageResponse>> {
    let controller = VehicleController::new(state.vehicles.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<MessageResponse>> {
    let controller = VehicleController::new(state.vehicles.clone());
    let response = controller.delete(&id).await?;
    Ok(Json(response))
}
