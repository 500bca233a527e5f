//! Controladores: validación de peticiones y forma de las respuestas

pub mod auth_controller;
pub mod mechanic_controller;
pub mod report_controller;
pub mod vehicle_controller;

pub use auth_controller::AuthController;
pub use mechanic_controller::MechanicController;
pub use report_controller::ReportController;
pub use vehicle_controller::VehicleController;
