use std::sync::Arc;

use uuid::Uuid;

use crate::dto::reminder_dto::{CreateReminderRequest, UpdateReminderRequest};
use crate::models::reminder::{ReminderPatch, ServiceReminder};
use crate::repositories::FleetStore;
use crate::services::{
    ownership::OwnershipGuard,
    reminder_scheduler::{self, ReminderInterval, ServiceBaseline},
};
use crate::utils::errors::AppResult;

pub struct ReminderController {
    store: Arc<dyn FleetStore>,
}

impl ReminderController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    fn guard(&self) -> OwnershipGuard<'_> {
        OwnershipGuard::new(self.store.as_ref())
    }

    pub async fn list(&self, vehicle_id: Uuid, user_id: &str) -> AppResult<Vec<ServiceReminder>> {
        self.guard().authorize_vehicle(vehicle_id, user_id).await?;
        self.store.list_reminders(vehicle_id).await
    }

    /// Crea el recordatorio con el vencimiento ya calculado
    pub async fn create(
        &self,
        vehicle_id: Uuid,
        user_id: &str,
        request: CreateReminderRequest,
    ) -> AppResult<ServiceReminder> {
        let vehicle = self.guard().authorize_vehicle(vehicle_id, user_id).await?;

        let schedule = reminder_scheduler::next_due(
            ReminderInterval {
                mileage: request.interval_mileage,
                months: request.interval_months,
            },
            ServiceBaseline::resolve(
                request.last_service_date,
                request.last_service_mileage,
                &vehicle,
            ),
        );

        let reminder = self
            .store
            .create_reminder(vehicle_id, request.into_new_reminder(schedule))
            .await?;
        tracing::debug!(
            reminder_id = %reminder.id,
            next_due_date = ?reminder.next_due_date,
            next_due_mileage = ?reminder.next_due_mileage,
            "reminder scheduled"
        );
        Ok(reminder)
    }

    /// Toda actualización recalcula los campos derivados
    pub async fn update(
        &self,
        id: Uuid,
        user_id: &str,
        request: UpdateReminderRequest,
    ) -> AppResult<ServiceReminder> {
        let (current, vehicle) = self.guard().authorize_reminder(id, user_id).await?;

        let mut patch = ReminderPatch::from(request);
        if patch.is_empty() {
            return Ok(current);
        }

        let mut merged = current;
        patch.apply_to(&mut merged);
        patch.schedule = Some(reminder_scheduler::schedule_for(&merged, &vehicle));

        self.store.update_reminder(id, patch).await
    }

    pub async fn delete(&self, id: Uuid, user_id: &str) -> AppResult<()> {
        self.guard().authorize_reminder(id, user_id).await?;
        self.store.delete_reminder(id).await
    }
}
