//! Modelo de Mechanic - tabla `mecanicos`

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Mecánico con credenciales de acceso.
/// La contraseña se guarda y se compara en texto plano.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Mechanic {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub password: String,
}

/// Datos completos de un mecánico, para alta y para reemplazo
#[derive(Debug, Clone, PartialEq)]
pub struct MechanicData {
    pub nombre: String,
    pub email: String,
    pub password: String,
}
