//! Modelo de Admin - tabla `admins`, solo lectura desde la API

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Admin {
    pub id: i64,
    pub email: String,
    pub password: String,
}
