//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la API y su conversión a respuestas
//! HTTP. Todas las respuestas de error tienen la forma `{"error": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Mensaje para cualquier ruta que no exista
pub const ROUTE_NOT_FOUND: &str = "Ruta no encontrada";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {message}: {source}")]
    Database {
        message: String,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    /// Error de almacenamiento con el mensaje que verá el cliente.
    /// El error del driver se registra en el log y no se devuelve.
    pub fn database(message: impl Into<String>, source: sqlx::Error) -> Self {
        let message = message.into();
        error!("❌ {}: {}", message, source);
        AppError::Database { message, source }
    }

    pub fn route_not_found() -> Self {
        AppError::NotFound(ROUTE_NOT_FOUND.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Texto público del error
    pub fn public_message(&self) -> &str {
        match self {
            AppError::Validation(msg) | AppError::Unauthorized(msg) | AppError::NotFound(msg) => msg,
            AppError::Database { message, .. } => message,
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            warn!("⚠️ {} {}", status.as_u16(), self.public_message());
        }

        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
