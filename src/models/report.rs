//! Modelo de Report
//!
//! Mapea exactamente a la tabla `reportes`. Las columnas usan camelCase
//! (`fechaIngreso`, `fechaSalida`) y así se serializan en la API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::FieldValue;

/// Reporte de reparación de un vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub matricula: String,
    pub encargado: String,
    pub fecha_ingreso: NaiveDate,
    pub fecha_salida: Option<NaiveDate>,
    pub problema: String,
    pub reparaciones: Option<String>,
}

/// Datos para insertar un reporte, con los opcionales ya normalizados
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub matricula: String,
    pub encargado: String,
    pub fecha_ingreso: String,
    pub fecha_salida: Option<String>,
    pub problema: String,
    pub reparaciones: Option<String>,
}

/// Reemplazo completo de un reporte. Un campo ausente se escribe como NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportUpdate {
    pub matricula: Option<FieldValue>,
    pub encargado: Option<FieldValue>,
    pub fecha_ingreso: Option<FieldValue>,
    pub fecha_salida: Option<FieldValue>,
    pub problema: Option<FieldValue>,
    pub reparaciones: Option<FieldValue>,
}
