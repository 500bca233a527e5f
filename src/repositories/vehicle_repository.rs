use async_trait::async_trait;
use sqlx::MySqlPool;

use super::bind_field;
use crate::models::{NewVehicle, Vehicle, VehicleUpdate};

/// Acceso a la tabla `vehiculos`
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Vehicle>, sqlx::Error>;

    async fn create(&self, vehicle: &NewVehicle) -> Result<u64, sqlx::Error>;

    async fn update(&self, id: &str, changes: &VehicleUpdate) -> Result<u64, sqlx::Error>;

    async fn delete(&self, id: &str) -> Result<u64, sqlx::Error>;
}

pub struct MySqlVehicleRepository {
    pool: MySqlPool,
}

impl MySqlVehicleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for MySqlVehicleRepository {
    async fn find_all(&self) -> Result<Vec<Vehicle>, sqlx::Error> {
        sqlx::query_as::<_, Vehicle>("SELECT * FROM vehiculos")
            .fetch_all(&self.pool)
            .await
    }

    async fn create(&self, vehicle: &NewVehicle) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO vehiculos (marca, modelo, anio, chofer, placa) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&vehicle.marca)
        .bind(&vehicle.modelo)
        .bind(vehicle.anio)
        .bind(&vehicle.chofer)
        .bind(&vehicle.placa)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn update(&self, id: &str, changes: &VehicleUpdate) -> Result<u64, sqlx::Error> {
        let query = sqlx::query(
            "UPDATE vehiculos SET marca = ?, modelo = ?, anio = ?, chofer = ?, placa = ? WHERE id = ?",
        );
        let query = [
            &changes.marca,
            &changes.modelo,
            &changes.anio,
            &changes.chofer,
            &changes.placa,
        ]
        .into_iter()
        .fold(query, |query, value| bind_field(query, value.as_ref()));

        let result = query.bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehiculos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
