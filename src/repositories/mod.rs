//! Repositorios: una sentencia SQL parametrizada por operación

pub mod admin_repository;
pub mod mechanic_repository;
pub mod report_repository;
pub mod vehicle_repository;

pub use admin_repository::{AdminRepository, MySqlAdminRepository};
pub use mechanic_repository::{MechanicRepository, MySqlMechanicRepository};
pub use report_repository::{MySqlReportRepository, ReportRepository};
pub use vehicle_repository::{MySqlVehicleRepository, VehicleRepository};

use sqlx::{mysql::MySqlArguments, query::Query, MySql};

use crate::models::FieldValue;

/// Enlazar un valor recibido en una actualización con su tipo JSON original.
/// Un campo ausente o `null` se envía como NULL.
pub(crate) fn bind_field<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    value: Option<&'q FieldValue>,
) -> Query<'q, MySql, MySqlArguments> {
    match value {
        None => query.bind(None::<String>),
        Some(FieldValue::Bool(b)) => query.bind(*b),
        Some(FieldValue::Integer(n)) => query.bind(*n),
        Some(FieldValue::Float(x)) => query.bind(*x),
        Some(FieldValue::Text(text)) => query.bind(text.as_str()),
        Some(FieldValue::Json(value)) => query.bind(value.to_string()),
    }
}
