use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::vehicle::{NewVehicle, VehiclePatch, VehicleStatus};
use crate::utils::validation::{mileage_order, validate_not_blank};

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_mileage"))]
pub struct CreateVehicleRequest {
    #[validate(custom(function = "validate_not_blank", message = "make is required"))]
    pub make: String,

    #[validate(custom(function = "validate_not_blank", message = "model is required"))]
    pub model: String,

    #[validate(range(min = 1886, max = 2100, message = "year must be between 1886 and 2100"))]
    pub year: i32,

    pub vin: Option<String>,
    pub license_plate: Option<String>,
    pub status: Option<VehicleStatus>,

    #[validate(range(min = 0, message = "initialMileage must be greater than or equal to 0"))]
    pub initial_mileage: Option<i64>,

    #[validate(range(min = 0, message = "currentMileage must be greater than or equal to 0"))]
    pub current_mileage: Option<i64>,
}

fn validate_create_mileage(request: &CreateVehicleRequest) -> Result<(), ValidationError> {
    mileage_order(request.initial_mileage.unwrap_or(0), request.current_mileage)
}

impl From<CreateVehicleRequest> for NewVehicle {
    fn from(request: CreateVehicleRequest) -> Self {
        let initial_mileage = request.initial_mileage.unwrap_or(0);
        Self {
            make: request.make,
            model: request.model,
            year: request.year,
            vin: request.vin,
            license_plate: request.license_plate,
            status: request.status.unwrap_or_default(),
            initial_mileage,
            current_mileage: request.current_mileage.unwrap_or(initial_mileage),
        }
    }
}

// Request para actualizar un vehículo
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(custom(function = "validate_not_blank", message = "make must not be blank"))]
    pub make: Option<String>,

    #[validate(custom(function = "validate_not_blank", message = "model must not be blank"))]
    pub model: Option<String>,

    #[validate(range(min = 1886, max = 2100, message = "year must be between 1886 and 2100"))]
    pub year: Option<i32>,

    pub vin: Option<String>,
    pub license_plate: Option<String>,
    pub status: Option<VehicleStatus>,

    #[validate(range(min = 0, message = "initialMileage must be greater than or equal to 0"))]
    pub initial_mileage: Option<i64>,

    #[validate(range(min = 0, message = "currentMileage must be greater than or equal to 0"))]
    pub current_mileage: Option<i64>,
}

impl From<UpdateVehicleRequest> for VehiclePatch {
    fn from(request: UpdateVehicleRequest) -> Self {
        Self {
            make: request.make,
            model: request.model,
            year: request.year,
            vin: request.vin,
            license_plate: request.license_plate,
            status: request.status,
            initial_mileage: request.initial_mileage,
            current_mileage: request.current_mileage,
        }
    }
}
