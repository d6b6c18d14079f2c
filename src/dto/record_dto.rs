use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::models::service_record::NewServiceRecord;
use crate::utils::validation::validate_not_blank;

// Request para registrar un servicio realizado.
// `service_type` no se guarda en el registro: sirve para actualizar
// los recordatorios del vehículo con el mismo tipo de servicio.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRecordRequest {
    pub date: DateTime<Utc>,

    #[validate(range(min = 0, message = "mileage must be greater than or equal to 0"))]
    pub mileage: i64,

    #[validate(range(min = 0, message = "cost must be greater than or equal to 0"))]
    pub cost: i64,

    #[validate(custom(function = "validate_not_blank", message = "description is required"))]
    pub description: String,

    pub provider: Option<String>,

    #[validate(custom(function = "validate_not_blank", message = "serviceType must not be blank"))]
    pub service_type: Option<String>,
}

impl CreateServiceRecordRequest {
    pub fn split(self) -> (NewServiceRecord, Option<String>) {
        (
            NewServiceRecord {
                date: self.date,
                mileage: self.mileage,
                cost: self.cost,
                description: self.description,
                provider: self.provider,
            },
            self.service_type,
        )
    }
}
