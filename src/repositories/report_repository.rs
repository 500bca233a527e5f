use async_trait::async_trait;
use sqlx::MySqlPool;

use super::bind_field;
use crate::models::{NewReport, Report, ReportUpdate};

/// Acceso a la tabla `reportes`
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Todos los reportes, en el orden que devuelva la base de datos
    async fn find_all(&self) -> Result<Vec<Report>, sqlx::Error>;

    /// Insertar y devolver el id generado
    async fn create(&self, report: &NewReport) -> Result<u64, sqlx::Error>;

    /// Reemplazar todos los campos; devuelve las filas afectadas.
    /// El id se compara tal como llegó en la ruta.
    async fn update(&self, id: &str, changes: &ReportUpdate) -> Result<u64, sqlx::Error>;
}

pub struct MySqlReportRepository {
    pool: MySqlPool,
}

impl MySqlReportRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for MySqlReportRepository {
    async fn find_all(&self) -> Result<Vec<Report>, sqlx::Error> {
        sqlx::query_as::<_, Report>("SELECT * FROM reportes")
            .fetch_all(&self.pool)
            .await
    }

    async fn create(&self, report: &NewReport) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO reportes (matricula, encargado, fechaIngreso, fechaSalida, problema, reparaciones)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&report.matricula)
        .bind(&report.encargado)
        .bind(&report.fecha_ingreso)
        .bind(report.fecha_salida.as_deref())
        .bind(&report.problema)
        .bind(report.reparaciones.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn update(&self, id: &str, changes: &ReportUpdate) -> Result<u64, sqlx::Error> {
        let query = sqlx::query(
            r#"
            UPDATE reportes
            SET matricula = ?, fechaIngreso = ?, encargado = ?, problema = ?, reparaciones = ?, fechaSalida = ?
            WHERE id = ?
            "#,
        );
        let query = [
            &changes.matricula,
            &changes.fecha_ingreso,
            &changes.encargado,
            &changes.problema,
            &changes.reparaciones,
            &changes.fecha_salida,
        ]
        .into_iter()
        .fold(query, |query, value| bind_field(query, value.as_ref()));

        let result = query.bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }
}
