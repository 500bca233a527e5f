use std::sync::Arc;

use tracing::info;

use crate::dto::mechanic_dto::MechanicRequest;
use crate::dto::{CreatedResponse, MessageResponse};
use crate::models::Mechanic;
use crate::repositories::MechanicRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_required;

pub struct MechanicController {
    repository: Arc<dyn MechanicRepository>,
}

impl MechanicController {
    pub fn new(repository: Arc<dyn MechanicRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Mechanic>> {
        self.repository
            .find_all()
            .await
            .map_err(|e| AppError::database("Error al obtener los mecánicos", e))
    }

    /// Alta de mecánico, compartida por `POST /api/mechanic` y `POST /api/users`
    pub async fn create(&self, request: MechanicRequest) -> AppResult<CreatedResponse> {
        validate_required(&request, "Faltan campos obligatorios para agregar un mecánico")?;

        let mechanic = request.into_mechanic_data();
        let id = self
            .repository
            .create(&mechanic)
            .await
            .map_err(|e| AppError::database("Error al agregar el mecánico", e))?;

        info!("✅ Mecánico {} agregado ({})", id, mechanic.email);
        Ok(CreatedResponse::new("✅ Mecánico agregado con éxito", id))
    }

    // No se revisan filas afectadas: un id inexistente también responde 200
    pub async fn update(&self, id: &str, request: MechanicRequest) -> AppResult<MessageResponse> {
        validate_required(&request, "Faltan campos obligatorios para actualizar el mecánico")?;

        let affected = self
            .repository
            .update(id, &request.into_mechanic_data())
            .await
            .map_err(|e| AppError::database("Error al actualizar el mecánico", e))?;

        info!("Mecánico {} actualizado ({} filas)", id, affected);
        Ok(MessageResponse::new("✅ Mecánico actualizado con éxito"))
    }

    pub async fn delete(&self, id: &str) -> AppResult<MessageResponse> {
        let affected = self
            .repository
            .delete(id)
            .await
            .map_err(|e| AppError::database("Error al eliminar el mecánico", e))?;

        info!("Mecánico {} eliminado ({} filas)", id, affected);
        Ok(MessageResponse::new("✅ Mecánico eliminado con éxito"))
    }
}
