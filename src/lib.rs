//! API de registro para un taller de reparación de vehículos:
//! reportes de reparación, mecánicos, vehículos y login.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
