//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema PostgreSQL
//! (ver `migrations/`) y los value objects de creación/patch de cada entidad.

pub mod dashboard;
pub mod insurance;
pub mod reminder;
pub mod service_record;
pub mod transaction;
pub mod vehicle;
