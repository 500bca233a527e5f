use std::sync::Arc;

use tracing::info;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::dto::{CreatedResponse, MessageResponse};
use crate::models::{Vehicle, VehicleUpdate};
use crate::repositories::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_required;

pub struct VehicleController {
    repository: Arc<dyn VehicleRepository>,
}

impl VehicleController {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        self.repository
            .find_all()
            .await
            .map_err(|e| AppError::database("Error al obtener los vehículos", e))
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<CreatedResponse> {
        validate_required(&request, "Faltan campos obligatorios")?;

        let vehicle = request.into_new_vehicle();
        let id = self
            .repository
            .create(&vehicle)
            .await
            .map_err(|e| AppError::database("Error al guardar el vehículo", e))?;

        info!("✅ Vehículo {} guardado (placa {})", id, vehicle.placa);
        Ok(CreatedResponse::new("✅ Vehículo guardado con éxito", id))
    }

    // Sin validación ni verificación de existencia
    pub async fn update(&self, id: &str, request: UpdateVehicleRequest) -> AppResult<MessageResponse> {
        let changes = VehicleUpdate::from(request);
        self.repository
            .update(id, &changes)
            .await
            .map_err(|e| AppError::database("Error al actualizar el vehículo", e))?;

        Ok(MessageResponse::new("Vehículo actualizado correctamente"))
    }

    pub async fn delete(&self, id: &str) -> AppResult<MessageResponse> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| AppError::database("Error al eliminar el vehículo", e))?;

        Ok(MessageResponse::new("✅ Vehículo eliminado con éxito"))
    }
}
