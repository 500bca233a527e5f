//! Cuerpos de petición y de respuesta de la API

pub mod auth_dto;
pub mod mechanic_dto;
pub mod report_dto;
pub mod response_dto;
pub mod vehicle_dto;

pub use response_dto::{CreatedResponse, MessageResponse};
