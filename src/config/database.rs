//! Configuración de base de datos
//!
//! Este módulo maneja los parámetros de conexión a MySQL con SQLx.

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::env;

use super::environment::parse_or_default;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_USER: &str = "u855233599_axel";
pub const DEFAULT_DB_PASSWORD: &str = "";
pub const DEFAULT_DB_NAME: &str = "u855233599_reportes_db";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 1;

/// Configuración de la base de datos
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// La contraseña nunca aparece en los logs
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DatabaseConfig {
    /// Leer la configuración desde `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`...
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_connections =
            parse_or_default(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS).max(1);

        Self {
            host: lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            port: parse_or_default(&lookup, "DB_PORT", DEFAULT_DB_PORT),
            user: lookup("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
            password: lookup("DB_PASSWORD").unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_string()),
            database: lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            max_connections,
        }
    }

    /// Opciones de conexión de sqlx
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }

    /// Crear el pool de conexiones. La conexión se abre de inmediato,
    /// así un error de credenciales se detecta al arrancar.
    pub async fn create_pool(&self) -> Result<MySqlPool, sqlx::Error> {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(1)
            .connect_with(self.connect_options())
            .await
    }

    /// Descripción para logs, sin credenciales
    pub fn display_target(&self) -> String {
        format!("mysql://{}@{}:{}/{}", self.user, self.host, self.port, self.database)
    }
}
