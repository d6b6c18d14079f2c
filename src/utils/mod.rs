//! Utilidades del sistema
//!
//! Manejo de errores, validación, extractores y JWT.

pub mod errors;
pub mod extract;
pub mod jwt;
pub mod validation;
