//! Rutas de la API
//!
//! Cada grupo de rutas vive en su propio módulo; aquí se unen, se agrega
//! la ruta de bienvenida, el fallback 404 y las capas de CORS y trazas.

pub mod auth_routes;
pub mod mechanic_routes;
pub mod report_routes;
pub mod vehicle_routes;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub const WELCOME_MESSAGE: &str = "Bienvenido a la API de reportes y mecánicos";

/// Router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome).fallback(route_not_found))
        .merge(report_routes::create_report_router())
        .merge(mechanic_routes::create_mechanic_router())
        .merge(vehicle_routes::create_vehicle_router())
        .merge(auth_routes::create_auth_router())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// 404 para rutas inexistentes, sin importar el método
pub(crate) async fn route_not_found() -> AppError {
    AppError::route_not_found()
}
