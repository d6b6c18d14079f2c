//! Services module
//!
//! Lógica de negocio sin HTTP: cálculo de vencimientos, agregados del
//! dashboard y comprobación de propiedad.

pub mod dashboard_service;
pub mod ownership;
pub mod reminder_scheduler;
