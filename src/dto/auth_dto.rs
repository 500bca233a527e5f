use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Role;

// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

// Login response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub user_id: i64,
    pub role: Role,
}

impl LoginResponse {
    pub fn success(user_id: i64, role: Role) -> Self {
        Self {
            message: "Login exitoso".to_string(),
            user_id,
            role,
        }
    }
}
