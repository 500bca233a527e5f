use serde::Deserialize;
use validator::Validate;

use crate::models::MechanicData;

// Request de alta y de actualización de mecánico: los tres campos son obligatorios
#[derive(Debug, Deserialize, Validate)]
pub struct MechanicRequest {
    #[validate(required, length(min = 1))]
    pub nombre: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl MechanicRequest {
    pub fn into_mechanic_data(self) -> MechanicData {
        MechanicData {
            nombre: self.nombre.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        }
    }
}
