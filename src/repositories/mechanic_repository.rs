use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::{Mechanic, MechanicData};

/// Acceso a la tabla `mecanicos`
#[async_trait]
pub trait MechanicRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Mechanic>, sqlx::Error>;

    async fn create(&self, mechanic: &MechanicData) -> Result<u64, sqlx::Error>;

    async fn update(&self, id: &str, mechanic: &MechanicData) -> Result<u64, sqlx::Error>;

    async fn delete(&self, id: &str) -> Result<u64, sqlx::Error>;

    /// Primer mecánico con ese email. El email no es único a nivel de API.
    async fn find_by_email(&self, email: &str) -> Result<Option<Mechanic>, sqlx::Error>;
}

pub struct MySqlMechanicRepository {
    pool: MySqlPool,
}

impl MySqlMechanicRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MechanicRepository for MySqlMechanicRepository {
    async fn find_all(&self) -> Result<Vec<Mechanic>, sqlx::Error> {
        sqlx::query_as::<_, Mechanic>("SELECT * FROM mecanicos")
            .fetch_all(&self.pool)
            .await
    }

    async fn create(&self, mechanic: &MechanicData) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO mecanicos (nombre, email, password) VALUES (?, ?, ?)")
            .bind(&mechanic.nombre)
            .bind(&mechanic.email)
            .bind(&mechanic.password)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id())
    }

    async fn update(&self, id: &str, mechanic: &MechanicData) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE mecanicos SET nombre = ?, email = ?, password = ? WHERE id = ?")
                .bind(&mechanic.nombre)
                .bind(&mechanic.email)
                .bind(&mechanic.password)
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mecanicos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Mechanic>, sqlx::Error> {
        sqlx::query_as::<_, Mechanic>("SELECT * FROM mecanicos WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }
}
