//! Roles y cuentas con acceso al login

use serde::{Deserialize, Serialize};

use super::{Admin, Mechanic};

/// Etiqueta devuelta al iniciar sesión. No es una credencial:
/// el cliente la usa para decidir qué pantallas mostrar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mecanico,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Mecanico => "mecanico",
            Role::Admin => "admin",
        }
    }
}

/// Cuenta que puede iniciar sesión con email y contraseña
pub trait LoginAccount {
    const ROLE: Role;

    fn account_id(&self) -> i64;

    fn stored_password(&self) -> &str;

    /// Comparación literal, sin hash
    fn password_matches(&self, supplied: &str) -> bool {
        self.stored_password() == supplied
    }
}

impl LoginAccount for Mechanic {
    const ROLE: Role = Role::Mecanico;

    fn account_id(&self) -> i64 {
        self.id
    }

    fn stored_password(&self) -> &str {
        &self.password
    }
}

impl LoginAccount for Admin {
    const ROLE: Role = Role::Admin;

    fn account_id(&self) -> i64 {
        self.id
    }

    fn stored_password(&self) -> &str {
        &self.password
    }
}
