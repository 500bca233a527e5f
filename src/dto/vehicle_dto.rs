use serde::Deserialize;
use validator::Validate;

use crate::models::{FieldValue, NewVehicle, VehicleUpdate};
use crate::utils::validation::deserialize_year;

// Request para registrar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(required, length(min = 1))]
    pub marca: Option<String>,
    #[validate(required, length(min = 1))]
    pub modelo: Option<String>,
    // `0` y `""` llegan como None
    #[serde(default, deserialize_with = "deserialize_year")]
    #[validate(required)]
    pub anio: Option<i32>,
    #[validate(required, length(min = 1))]
    pub chofer: Option<String>,
    #[validate(required, length(min = 1))]
    pub placa: Option<String>,
}

impl CreateVehicleRequest {
    pub fn into_new_vehicle(self) -> NewVehicle {
        NewVehicle {
            marca: self.marca.unwrap_or_default(),
            modelo: self.modelo.unwrap_or_default(),
            anio: self.anio.unwrap_or_default(),
            chofer: self.chofer.unwrap_or_default(),
            placa: self.placa.unwrap_or_default(),
        }
    }
}

// Request para actualizar un vehículo (sin validación)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateVehicleRequest {
    pub marca: Option<FieldValue>,
    pub modelo: Option<FieldValue>,
    pub anio: Option<FieldValue>,
    pub chofer: Option<FieldValue>,
    pub placa: Option<FieldValue>,
}

impl From<UpdateVehicleRequest> for VehicleUpdate {
    fn from(request: UpdateVehicleRequest) -> Self {
        Self {
            marca: request.marca,
            modelo: request.modelo,
            anio: request.anio,
            chofer: request.chofer,
            placa: request.placa,
        }
    }
}
