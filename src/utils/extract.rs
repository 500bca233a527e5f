//! Extractores de Axum con errores en formato `{"error": "..."}`

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts, HeaderMap},
};
use serde::de::DeserializeOwned;

use crate::utils::errors::AppError;

/// Cuerpo JSON de la petición. Sin `Content-Type` JSON o con cuerpo vacío
/// se toma como `{}`; un JSON mal formado responde 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            AppError::Validation(format!("Cuerpo inválido: {}", rejection.body_text()))
        })?;

        let raw: &[u8] = if is_json && !bytes.iter().all(u8::is_ascii_whitespace) {
            &bytes
        } else {
            b"{}"
        };

        serde_json::from_slice(raw)
            .map(JsonBody)
            .map_err(|e| AppError::Validation(format!("Cuerpo JSON inválido: {}", e)))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Segmento `:id` de la ruta, tal cual llega. Se pasa sin convertir al
/// `WHERE id = ?`: un id que no es número simplemente no coincide con ninguna fila.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| RecordId(id))
            .map_err(|_| AppError::route_not_found())
    }
}
