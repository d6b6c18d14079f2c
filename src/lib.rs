//! Fleet manager
//!
//! API REST para la gestión de una flota: vehículos, pólizas de seguro,
//! recordatorios y registros de mantenimiento, movimientos económicos y
//! estadísticas del dashboard.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
