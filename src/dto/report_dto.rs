use serde::Deserialize;
use validator::Validate;

use crate::models::{FieldValue, NewReport, ReportUpdate};

// Request para crear un reporte
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    #[validate(required, length(min = 1))]
    pub matricula: Option<String>,
    #[validate(required, length(min = 1))]
    pub encargado: Option<String>,
    #[validate(required, length(min = 1))]
    pub fecha_ingreso: Option<String>,
    pub fecha_salida: Option<String>,
    #[validate(required, length(min = 1))]
    pub problema: Option<String>,
    pub reparaciones: Option<String>,
}

impl CreateReportRequest {
    /// Convertir una petición ya validada. `fechaSalida` y `reparaciones`
    /// vacías se guardan como NULL.
    pub fn into_new_report(self) -> NewReport {
        NewReport {
            matricula: self.matricula.unwrap_or_default(),
            encargado: self.encargado.unwrap_or_default(),
            fecha_ingreso: self.fecha_ingreso.unwrap_or_default(),
            fecha_salida: self.fecha_salida.filter(|s| !s.is_empty()),
            problema: self.problema.unwrap_or_default(),
            reparaciones: self.reparaciones.filter(|s| !s.is_empty()),
        }
    }
}

// Request para actualizar un reporte: se pasa tal cual, sin validar
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReportRequest {
    pub matricula: Option<FieldValue>,
    pub encargado: Option<FieldValue>,
    pub fecha_ingreso: Option<FieldValue>,
    pub fecha_salida: Option<FieldValue>,
    pub problema: Option<FieldValue>,
    pub reparaciones: Option<FieldValue>,
}

impl From<UpdateReportRequest> for ReportUpdate {
    fn from(request: UpdateReportRequest) -> Self {
        Self {
            matricula: request.matricula,
            encargado: request.encargado,
            fecha_ingreso: request.fecha_ingreso,
            fecha_salida: request.fecha_salida,
            problema: request.problema,
            reparaciones: request.reparaciones,
        }
    }
}
