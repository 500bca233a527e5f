//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del servidor HTTP y del logging.
//! Cada variable tiene un valor por defecto, así que el servicio arranca
//! aunque no exista ningún `.env`.

use std::env;
use std::str::FromStr;

use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::DEBUG;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    pub log_level: tracing::Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración a partir de cualquier fuente clave/valor
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or_default(&lookup, "PORT", DEFAULT_PORT);
        let log_level = parse_or_default(&lookup, "LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            host,
            port,
            log_level,
        }
    }

    /// Obtener la dirección en la que escucha el servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parsear una variable numérica; si no es válida se usa el valor por defecto
pub(crate) fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Debug,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!("⚠️ Valor inválido para {}: '{}', usando {:?}", key, raw, default);
                default
            }
        },
        None => default,
    }
}
