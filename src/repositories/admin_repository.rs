use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::Admin;

/// Lectura de la tabla `admins`; la API no da de alta ni modifica administradores
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, sqlx::Error>;
}

pub struct MySqlAdminRepository {
    pool: MySqlPool,
}

impl MySqlAdminRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for MySqlAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }
}
