//! Conexión a MySQL
//!
//! Este módulo abre la conexión compartida al arrancar el servidor y la
//! libera al apagarlo.

use sqlx::MySqlPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Conexión compartida a la base de datos
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: MySqlPool,
}

impl DatabaseConnection {
    /// Conectar usando la configuración dada. No hay reintentos: si falla,
    /// el error sube hasta `main` y el proceso termina.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("🔌 Conectando a {}", config.display_target());
        let pool = config.create_pool().await?;
        info!("✅ Conectado a la base de datos MySQL");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Cerrar todas las conexiones abiertas
    pub async fn close(&self) {
        self.pool.close().await;
        info!("🔌 Conexión a la base de datos cerrada");
    }
}
