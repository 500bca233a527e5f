//! Utilidades del sistema
//!
//! Manejo de errores, extractores y validación de peticiones.

pub mod errors;
pub mod extract;
pub mod validation;

pub use errors::{AppError, AppResult};
pub use extract::{JsonBody, RecordId};
