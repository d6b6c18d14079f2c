//! Modelo de ServiceReminder
//!
//! `next_due_date` y `next_due_mileage` son derivados: los calcula
//! `services::reminder_scheduler` y nunca vienen del cliente.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReminder {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub service_type: String,
    pub interval_mileage: Option<i32>,
    pub interval_months: Option<i32>,
    pub last_service_date: Option<DateTime<Utc>>,
    pub last_service_mileage: Option<i64>,
    pub next_due_date: Option<DateTime<Utc>>,
    pub next_due_mileage: Option<i64>,
    pub is_dismissed: bool,
    pub created_at: DateTime<Utc>,
}

/// Próximo vencimiento calculado de un recordatorio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueSchedule {
    pub next_due_date: Option<DateTime<Utc>>,
    pub next_due_mileage: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewServiceReminder {
    pub service_type: String,
    pub interval_mileage: Option<i32>,
    pub interval_months: Option<i32>,
    pub last_service_date: Option<DateTime<Utc>>,
    pub last_service_mileage: Option<i64>,
    pub is_dismissed: bool,
    pub schedule: DueSchedule,
}

/// Actualización parcial. `schedule`, si está presente, reemplaza
/// los dos campos derivados (incluido `None`).
#[derive(Debug, Clone, Default)]
pub struct ReminderPatch {
    pub service_type: Option<String>,
    pub interval_mileage: Option<i32>,
    pub interval_months: Option<i32>,
    pub last_service_date: Option<DateTime<Utc>>,
    pub last_service_mileage: Option<i64>,
    pub is_dismissed: Option<bool>,
    pub schedule: Option<DueSchedule>,
}

impl ReminderPatch {
    pub fn is_empty(&self) -> bool {
        self.service_type.is_none()
            && self.interval_mileage.is_none()
            && self.interval_months.is_none()
            && self.last_service_date.is_none()
            && self.last_service_mileage.is_none()
            && self.is_dismissed.is_none()
            && self.schedule.is_none()
    }

    pub fn apply_to(&self, reminder: &mut ServiceReminder) {
        if let Some(service_type) = &self.service_type {
            reminder.service_type = service_type.clone();
        }
        if let Some(interval) = self.interval_mileage {
            reminder.interval_mileage = Some(interval);
        }
        if let Some(interval) = self.interval_months {
            reminder.interval_months = Some(interval);
        }
        if let Some(date) = self.last_service_date {
            reminder.last_service_date = Some(date);
        }
        if let Some(mileage) = self.last_service_mileage {
            reminder.last_service_mileage = Some(mileage);
        }
        if let Some(dismissed) = self.is_dismissed {
            reminder.is_dismissed = dismissed;
        }
        if let Some(schedule) = self.schedule {
            reminder.next_due_date = schedule.next_due_date;
            reminder.next_due_mileage = schedule.next_due_mileage;
        }
    }
}

/// Recordatorio con el indicador `isDue` calculado para la vista de detalle
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderView {
    #[serde(flatten)]
    pub reminder: ServiceReminder,
    pub is_due: bool,
}
