//! Middleware de CORS
//!
//! La API acepta peticiones de cualquier origen, en todas las rutas.

use tower_http::cors::CorsLayer;

/// CORS abierto: `Access-Control-Allow-Origin: *` con cualquier método y cabecera
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::permissive()
}
