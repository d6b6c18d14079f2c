//! DTOs de entrada de la API
//!
//! Requests deserializados y validados antes de llegar a los controllers.

pub mod insurance_dto;
pub mod record_dto;
pub mod reminder_dto;
pub mod transaction_dto;
pub mod vehicle_dto;
