use std::sync::Arc;

use tracing::{debug, info};

use crate::dto::report_dto::{CreateReportRequest, UpdateReportRequest};
use crate::dto::{CreatedResponse, MessageResponse};
use crate::models::{Report, ReportUpdate};
use crate::repositories::ReportRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_required;

pub struct ReportController {
    repository: Arc<dyn ReportRepository>,
}

impl ReportController {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Report>> {
        self.repository
            .find_all()
            .await
            .map_err(|e| AppError::database("Error al obtener reportes", e))
    }

    pub async fn create(&self, request: CreateReportRequest) -> AppResult<CreatedResponse> {
        debug!("📥 Datos recibidos: {:?}", request);
        validate_required(&request, "Faltan campos obligatorios")?;

        let report = request.into_new_report();
        let id = self
            .repository
            .create(&report)
            .await
            .map_err(|e| AppError::database("Error al guardar el reporte", e))?;

        info!("✅ Reporte {} guardado (matrícula {})", id, report.matricula);
        Ok(CreatedResponse::new("✅ Reporte guardado con éxito", id))
    }

    /// Reemplaza el reporte completo. Es la única actualización que
    /// responde 404 cuando el id no existe.
    pub async fn update(&self, id: &str, request: UpdateReportRequest) -> AppResult<MessageResponse> {
        info!("Actualizando reporte con ID: {}", id);

        let changes = ReportUpdate::from(request);
        let affected = self
            .repository
            .update(id, &changes)
            .await
            .map_err(|e| AppError::database("Error al actualizar reporte", e))?;

        if affected == 0 {
            return Err(AppError::NotFound("Reporte no encontrado".to_string()));
        }

        Ok(MessageResponse::new("Reporte actualizado"))
    }
}
