//! Utilidades de validación
//!
//! Validadores reutilizados por los DTOs (`#[validate(custom = ...)]`)
//! y comprobaciones entre campos que se aplican después de un merge.

use chrono::{DateTime, Utc};
use validator::ValidationError;

use crate::utils::errors::{field_error, validation_error, AppResult};

/// Validar que un string no esté vacío ni sea solo espacios
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// El kilometraje actual nunca puede quedar por debajo del inicial
pub fn check_mileage_order(initial_mileage: i64, current_mileage: i64) -> AppResult<()> {
    if current_mileage < initial_mileage {
        return Err(validation_error(
            "currentMileage",
            "currentMileage must be greater than or equal to initialMileage",
        ));
    }
    Ok(())
}

/// Versión para `#[validate(schema(...))]`
pub fn mileage_order(
    initial_mileage: i64,
    current_mileage: Option<i64>,
) -> Result<(), ValidationError> {
    match current_mileage {
        Some(current) if current < initial_mileage => Err(field_error(
            "currentMileage",
            "currentMileage must be greater than or equal to initialMileage",
        )),
        _ => Ok(()),
    }
}

/// Una póliza no puede terminar antes de empezar
pub fn check_policy_period(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> AppResult<()> {
    if end_date < start_date {
        return Err(validation_error(
            "endDate",
            "endDate must be on or after startDate",
        ));
    }
    Ok(())
}

/// Versión para `#[validate(schema(...))]`
pub fn policy_period(
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if end_date < start_date {
        return Err(field_error("endDate", "endDate must be on or after startDate"));
    }
    Ok(())
}
