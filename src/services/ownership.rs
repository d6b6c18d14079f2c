//! Comprobación de propiedad
//!
//! Toda operación se resuelve hasta el vehículo y compara su `owner_id`
//! con el usuario autenticado. Recurso inexistente → 404; vehículo de otro
//! usuario → 403. Las rutas que solo reciben el id del sub-recurso
//! (p. ej. `DELETE /insurance/:id`) pasan por aquí igual que las demás.

use uuid::Uuid;

use crate::models::{
    insurance::InsurancePolicy, reminder::ServiceReminder, service_record::ServiceRecord,
    transaction::Transaction, vehicle::Vehicle,
};
use crate::repositories::FleetStore;
use crate::utils::errors::{forbidden_error, not_found_error, AppResult};

pub struct OwnershipGuard<'a> {
    store: &'a dyn FleetStore,
}

impl<'a> OwnershipGuard<'a> {
    pub fn new(store: &'a dyn FleetStore) -> Self {
        Self { store }
    }

    /// Devuelve el vehículo si pertenece al usuario
    pub async fn authorize_vehicle(&self, vehicle_id: Uuid, user_id: &str) -> AppResult<Vehicle> {
        let vehicle = self
            .store
            .get_vehicle(vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;

        if vehicle.owner_id != user_id {
            tracing::warn!(%vehicle_id, user_id, "⛔ acceso denegado a vehículo ajeno");
            return Err(forbidden_error("Vehicle", vehicle_id));
        }

        Ok(vehicle)
    }

    pub async fn authorize_policy(
        &self,
        policy_id: Uuid,
        user_id: &str,
    ) -> AppResult<(InsurancePolicy, Vehicle)> {
        let policy = self
            .store
            .get_policy(policy_id)
            .await?
            .ok_or_else(|| not_found_error("Insurance policy", policy_id))?;
        let vehicle = self.authorize_vehicle(policy.vehicle_id, user_id).await?;
        Ok((policy, vehicle))
    }

    pub async fn authorize_reminder(
        &self,
        reminder_id: Uuid,
        user_id: &str,
    ) -> AppResult<(ServiceReminder, Vehicle)> {
        let reminder = self
            .store
            .get_reminder(reminder_id)
            .await?
            .ok_or_else(|| not_found_error("Service reminder", reminder_id))?;
        let vehicle = self.authorize_vehicle(reminder.vehicle_id, user_id).await?;
        Ok((reminder, vehicle))
    }

    pub async fn authorize_record(
        &self,
        record_id: Uuid,
        user_id: &str,
    ) -> AppResult<(ServiceRecord, Vehicle)> {
        let record = self
            .store
            .get_record(record_id)
            .await?
            .ok_or_else(|| not_found_error("Service record", record_id))?;
        let vehicle = self.authorize_vehicle(record.vehicle_id, user_id).await?;
        Ok((record, vehicle))
    }

    pub async fn authorize_transaction(
        &self,
        transaction_id: Uuid,
        user_id: &str,
    ) -> AppResult<(Transaction, Vehicle)> {
        let transaction = self
            .store
            .get_transaction(transaction_id)
            .await?
            .ok_or_else(|| not_found_error("Transaction", transaction_id))?;
        let vehicle = self.authorize_vehicle(transaction.vehicle_id, user_id).await?;
        Ok((transaction, vehicle))
    }
}
