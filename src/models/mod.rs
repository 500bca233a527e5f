//! Modelos de datos
//!
//! Cada struct mapea una fila de su tabla en MySQL.

pub mod admin;
pub mod auth;
pub mod field_value;
pub mod mechanic;
pub mod report;
pub mod vehicle;

pub use admin::Admin;
pub use auth::{LoginAccount, Role};
pub use field_value::FieldValue;
pub use mechanic::{Mechanic, MechanicData};
pub use report::{NewReport, Report, ReportUpdate};
pub use vehicle::{NewVehicle, Vehicle, VehicleUpdate};
