use serde::{Deserialize, Serialize};

// Respuesta con solo un mensaje
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Respuesta de alta: mensaje + id generado por la base de datos
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedResponse {
    pub message: String,
    pub id: u64,
}

impl CreatedResponse {
    pub fn new(message: impl Into<String>, id: u64) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}
