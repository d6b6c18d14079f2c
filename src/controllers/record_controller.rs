use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::dto::record_dto::CreateServiceRecordRequest;
use crate::models::{
    reminder::ReminderPatch,
    service_record::ServiceRecord,
    vehicle::{Vehicle, VehiclePatch},
};
use crate::repositories::FleetStore;
use crate::services::{ownership::OwnershipGuard, reminder_scheduler};
use crate::utils::errors::AppResult;

pub struct RecordController {
    store: Arc<dyn FleetStore>,
}

impl RecordController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    fn guard(&self) -> OwnershipGuard<'_> {
        OwnershipGuard::new(self.store.as_ref())
    }

    pub async fn list(&self, vehicle_id: Uuid, user_id: &str) -> AppResult<Vec<ServiceRecord>> {
        self.guard().authorize_vehicle(vehicle_id, user_id).await?;
        self.store.list_records(vehicle_id).await
    }

    /// Guarda el registro y después, en escrituras sueltas:
    /// - sube `currentMileage` del vehículo si el registro lo supera
    /// - con `serviceType`, reinicia los recordatorios de ese tipo
    pub async fn create(
        &self,
        vehicle_id: Uuid,
        user_id: &str,
        request: CreateServiceRecordRequest,
    ) -> AppResult<ServiceRecord> {
        let mut vehicle = self.guard().authorize_vehicle(vehicle_id, user_id).await?;

        let (new_record, service_type) = request.split();
        let record = self.store.create_record(vehicle_id, new_record).await?;
        info!("🔧 Registro de servicio {} para vehículo {}", record.id, vehicle_id);

        if record.mileage > vehicle.current_mileage {
            vehicle = self
                .store
                .update_vehicle(
                    vehicle_id,
                    VehiclePatch {
                        current_mileage: Some(record.mileage),
                        ..Default::default()
                    },
                )
                .await?;
        }

        if let Some(service_type) = service_type {
            self.reset_matching_reminders(&vehicle, &service_type, &record).await?;
        }

        Ok(record)
    }

    async fn reset_matching_reminders(
        &self,
        vehicle: &Vehicle,
        service_type: &str,
        record: &ServiceRecord,
    ) -> AppResult<()> {
        let wanted = service_type.trim().to_lowercase();
        let matching: Vec<_> = self
            .store
            .list_reminders(vehicle.id)
            .await?
            .into_iter()
            .filter(|r| r.service_type.trim().to_lowercase() == wanted)
            .collect();

        if matching.is_empty() {
            warn!("⚠️ Ningún recordatorio '{}' en vehículo {}", service_type, vehicle.id);
            return Ok(());
        }

        for mut reminder in matching {
            reminder.last_service_date = Some(record.date);
            reminder.last_service_mileage = Some(record.mileage);
            let schedule = reminder_scheduler::schedule_for(&reminder, vehicle);

            self.store
                .update_reminder(
                    reminder.id,
                    ReminderPatch {
                        last_service_date: Some(record.date),
                        last_service_mileage: Some(record.mileage),
                        schedule: Some(schedule),
                        ..Default::default()
                    },
                )
                .await?;
        }

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, user_id: &str) -> AppResult<()> {
        self.guard().authorize_record(id, user_id).await?;
        self.store.delete_record(id).await
    }
}
