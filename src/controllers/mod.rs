//! Controllers
//!
//! Orquestan cada operación: comprobación de propiedad, reglas entre
//! campos y llamadas al almacén. Los handlers de `routes` solo extraen
//! los datos de la request y delegan aquí.

pub mod dashboard_controller;
pub mod insurance_controller;
pub mod record_controller;
pub mod reminder_controller;
pub mod transaction_controller;
pub mod vehicle_controller;
