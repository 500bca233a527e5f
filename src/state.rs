//! Estado compartido de la aplicación
//!
//! Este módulo define el estado que se pasa a través del router de Axum:
//! un repositorio por tabla, creados una sola vez al arrancar.

use sqlx::MySqlPool;
use std::sync::Arc;

use crate::repositories::{
    AdminRepository, MechanicRepository, MySqlAdminRepository, MySqlMechanicRepository,
    MySqlReportRepository, MySqlVehicleRepository, ReportRepository, VehicleRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub reports: Arc<dyn ReportRepository>,
    pub mechanics: Arc<dyn MechanicRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub admins: Arc<dyn AdminRepository>,
}

impl AppState {
    pub fn new(
        reports: Arc<dyn ReportRepository>,
        mechanics: Arc<dyn MechanicRepository>,
        vehicles: Arc<dyn VehicleRepository>,
        admins: Arc<dyn AdminRepository>,
    ) -> Self {
        Self {
            reports,
            mechanics,
            vehicles,
            admins,
        }
    }

    /// Repositorios MySQL que comparten el mismo pool
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self::new(
            Arc::new(MySqlReportRepository::new(pool.clone())),
            Arc::new(MySqlMechanicRepository::new(pool.clone())),
            Arc::new(MySqlVehicleRepository::new(pool.clone())),
            Arc::new(MySqlAdminRepository::new(pool)),
        )
    }
}
