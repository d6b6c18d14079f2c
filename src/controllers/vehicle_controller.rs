use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::{
    reminder::ReminderView,
    vehicle::{Vehicle, VehicleDetails, VehiclePatch},
};
use crate::repositories::FleetStore;
use crate::services::{ownership::OwnershipGuard, reminder_scheduler};
use crate::utils::{errors::AppResult, validation::check_mileage_order};

pub struct VehicleController {
    store: Arc<dyn FleetStore>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, user_id: &str) -> AppResult<Vec<Vehicle>> {
        self.store.list_vehicles(user_id).await
    }

    /// Vehículo con sus recordatorios (marcados con `isDue`) y la póliza activa
    pub async fn get_details(
        &self,
        id: Uuid,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<VehicleDetails> {
        let vehicle = OwnershipGuard::new(self.store.as_ref())
            .authorize_vehicle(id, user_id)
            .await?;

        let upcoming_reminders = self
            .store
            .list_reminders(vehicle.id)
            .await?
            .into_iter()
            .map(|reminder| ReminderView {
                is_due: reminder_scheduler::is_due(&reminder, now, vehicle.current_mileage),
                reminder,
            })
            .collect();

        // La primera en orden de inicio descendente, sin filtrar por vigencia
        let active_policy = self.store.list_policies(vehicle.id).await?.into_iter().next();

        Ok(VehicleDetails {
            vehicle,
            upcoming_reminders,
            active_policy,
        })
    }

    pub async fn create(&self, user_id: &str, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        let vehicle = self.store.create_vehicle(user_id, request.into()).await?;
        info!("🚐 Vehículo {} creado ({} {})", vehicle.id, vehicle.make, vehicle.model);
        Ok(vehicle)
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: &str,
        request: UpdateVehicleRequest,
    ) -> AppResult<Vehicle> {
        let current = OwnershipGuard::new(self.store.as_ref())
            .authorize_vehicle(id, user_id)
            .await?;

        let patch = VehiclePatch::from(request);
        if patch.is_empty() {
            return Ok(current);
        }

        let mut merged = current;
        patch.apply_to(&mut merged);
        check_mileage_order(merged.initial_mileage, merged.current_mileage)?;

        self.store.update_vehicle(id, patch).await
    }

    pub async fn delete(&self, id: Uuid, user_id: &str) -> AppResult<()> {
        OwnershipGuard::new(self.store.as_ref())
            .authorize_vehicle(id, user_id)
            .await?;

        self.store.delete_vehicle(id).await?;
        info!("🗑️ Vehículo {} eliminado con sus registros asociados", id);
        Ok(())
    }
}
