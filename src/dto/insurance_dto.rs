use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::insurance::{InsurancePolicyPatch, NewInsurancePolicy};
use crate::utils::validation::{policy_period, validate_not_blank};

// Request para crear una póliza
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_period"))]
pub struct CreateInsurancePolicyRequest {
    #[validate(custom(function = "validate_not_blank", message = "provider is required"))]
    pub provider: String,

    #[validate(custom(function = "validate_not_blank", message = "policyNumber is required"))]
    pub policy_number: String,

    pub coverage_details: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    #[validate(range(min = 0, message = "premiumAmount must be greater than or equal to 0"))]
    pub premium_amount: i64,
}

fn validate_create_period(request: &CreateInsurancePolicyRequest) -> Result<(), ValidationError> {
    policy_period(request.start_date, request.end_date)
}

impl From<CreateInsurancePolicyRequest> for NewInsurancePolicy {
    fn from(request: CreateInsurancePolicyRequest) -> Self {
        Self {
            provider: request.provider,
            policy_number: request.policy_number,
            coverage_details: request.coverage_details,
            start_date: request.start_date,
            end_date: request.end_date,
            premium_amount: request.premium_amount,
        }
    }
}

// Request para actualizar una póliza; el periodo se vuelve a validar tras el merge
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInsurancePolicyRequest {
    #[validate(custom(function = "validate_not_blank", message = "provider must not be blank"))]
    pub provider: Option<String>,

    #[validate(custom(function = "validate_not_blank", message = "policyNumber must not be blank"))]
    pub policy_number: Option<String>,

    pub coverage_details: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0, message = "premiumAmount must be greater than or equal to 0"))]
    pub premium_amount: Option<i64>,
}

impl From<UpdateInsurancePolicyRequest> for InsurancePolicyPatch {
    fn from(request: UpdateInsurancePolicyRequest) -> Self {
        Self {
            provider: request.provider,
            policy_number: request.policy_number,
            coverage_details: request.coverage_details,
            start_date: request.start_date,
            end_date: request.end_date,
            premium_amount: request.premium_amount,
        }
    }
}
