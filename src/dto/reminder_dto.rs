use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::reminder::{DueSchedule, NewServiceReminder, ReminderPatch};
use crate::utils::errors::field_error;
use crate::utils::validation::validate_not_blank;

// Request para crear un recordatorio. Los campos derivados se aceptan
// en el parser solo para poder rechazarlos con un 400 explícito.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "reject_derived_on_create"))]
pub struct CreateReminderRequest {
    #[validate(custom(function = "validate_not_blank", message = "serviceType is required"))]
    pub service_type: String,

    #[validate(range(min = 1, message = "intervalMileage must be a positive integer"))]
    pub interval_mileage: Option<i32>,

    #[validate(range(min = 1, max = 1200, message = "intervalMonths must be between 1 and 1200"))]
    pub interval_months: Option<i32>,

    pub last_service_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0, message = "lastServiceMileage must be greater than or equal to 0"))]
    pub last_service_mileage: Option<i64>,

    #[serde(default)]
    pub is_dismissed: bool,

    pub next_due_date: Option<serde_json::Value>,
    pub next_due_mileage: Option<serde_json::Value>,
}

fn reject_derived_on_create(request: &CreateReminderRequest) -> Result<(), ValidationError> {
    reject_derived(&request.next_due_date, &request.next_due_mileage)
}

fn reject_derived(
    next_due_date: &Option<serde_json::Value>,
    next_due_mileage: &Option<serde_json::Value>,
) -> Result<(), ValidationError> {
    if next_due_date.is_some() {
        return Err(field_error("nextDueDate", "nextDueDate is calculated by the server"));
    }
    if next_due_mileage.is_some() {
        return Err(field_error("nextDueMileage", "nextDueMileage is calculated by the server"));
    }
    Ok(())
}

impl CreateReminderRequest {
    pub fn into_new_reminder(self, schedule: DueSchedule) -> NewServiceReminder {
        NewServiceReminder {
            service_type: self.service_type,
            interval_mileage: self.interval_mileage,
            interval_months: self.interval_months,
            last_service_date: self.last_service_date,
            last_service_mileage: self.last_service_mileage,
            is_dismissed: self.is_dismissed,
            schedule,
        }
    }
}

// Request para actualizar un recordatorio
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "reject_derived_on_update"))]
pub struct UpdateReminderRequest {
    #[validate(custom(function = "validate_not_blank", message = "serviceType must not be blank"))]
    pub service_type: Option<String>,

    #[validate(range(min = 1, message = "intervalMileage must be a positive integer"))]
    pub interval_mileage: Option<i32>,

    #[validate(range(min = 1, max = 1200, message = "intervalMonths must be between 1 and 1200"))]
    pub interval_months: Option<i32>,

    pub last_service_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0, message = "lastServiceMileage must be greater than or equal to 0"))]
    pub last_service_mileage: Option<i64>,

    pub is_dismissed: Option<bool>,

    pub next_due_date: Option<serde_json::Value>,
    pub next_due_mileage: Option<serde_json::Value>,
}

fn reject_derived_on_update(request: &UpdateReminderRequest) -> Result<(), ValidationError> {
    reject_derived(&request.next_due_date, &request.next_due_mileage)
}

impl From<UpdateReminderRequest> for ReminderPatch {
    fn from(request: UpdateReminderRequest) -> Self {
        Self {
            service_type: request.service_type,
            interval_mileage: request.interval_mileage,
            interval_months: request.interval_months,
            last_service_date: request.last_service_date,
            last_service_mileage: request.last_service_mileage,
            is_dismissed: request.is_dismissed,
            schedule: None,
        }
    }
}
