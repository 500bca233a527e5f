//! Modelo de Vehicle - tabla `vehiculos`

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::FieldValue;

/// Vehículo de la flotilla y su chofer asignado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub chofer: String,
    pub placa: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub chofer: String,
    pub placa: String,
}

/// Reemplazo completo de un vehículo; lo que no llegue queda en NULL
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleUpdate {
    pub marca: Option<FieldValue>,
    pub modelo: Option<FieldValue>,
    pub anio: Option<FieldValue>,
    pub chofer: Option<FieldValue>,
    pub placa: Option<FieldValue>,
}
