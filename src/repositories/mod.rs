//! Repositorios
//!
//! `FleetStore` es el contrato de persistencia: CRUD por entidad,
//! filtrado por vehículo o por propietario. Hay dos implementaciones,
//! PostgreSQL (`PgFleetStore`) y en memoria (`MemoryFleetStore`).
//!
//! Orden de los listados: vehículos por `created_at` desc, pólizas por
//! `start_date` desc, recordatorios por `next_due_date` desc (sin fecha al
//! final), registros y movimientos por `date` desc.
//!
//! Un `update` con patch vacío devuelve el registro actual sin escribir.

pub mod memory_store;
pub mod pg_store;

pub use memory_store::MemoryFleetStore;
pub use pg_store::PgFleetStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    insurance::{InsurancePolicy, InsurancePolicyPatch, NewInsurancePolicy},
    reminder::{NewServiceReminder, ReminderPatch, ServiceReminder},
    service_record::{NewServiceRecord, ServiceRecord},
    transaction::{NewTransaction, Transaction, TransactionPatch},
    vehicle::{NewVehicle, Vehicle, VehiclePatch},
};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait FleetStore: Send + Sync {
    // Vehicles
    async fn list_vehicles(&self, owner_id: &str) -> AppResult<Vec<Vehicle>>;
    async fn get_vehicle(&self, id: Uuid) -> AppResult<Option<Vehicle>>;
    async fn create_vehicle(&self, owner_id: &str, vehicle: NewVehicle) -> AppResult<Vehicle>;
    async fn update_vehicle(&self, id: Uuid, patch: VehiclePatch) -> AppResult<Vehicle>;
    /// Borra el vehículo y, en cascada, todo lo que cuelga de él
    async fn delete_vehicle(&self, id: Uuid) -> AppResult<()>;

    // Insurance
    async fn list_policies(&self, vehicle_id: Uuid) -> AppResult<Vec<InsurancePolicy>>;
    async fn get_policy(&self, id: Uuid) -> AppResult<Option<InsurancePolicy>>;
    async fn create_policy(
        &self,
        vehicle_id: Uuid,
        policy: NewInsurancePolicy,
    ) -> AppResult<InsurancePolicy>;
    async fn update_policy(
        &self,
        id: Uuid,
        patch: InsurancePolicyPatch,
    ) -> AppResult<InsurancePolicy>;
    async fn delete_policy(&self, id: Uuid) -> AppResult<()>;

    // Reminders
    async fn list_reminders(&self, vehicle_id: Uuid) -> AppResult<Vec<ServiceReminder>>;
    async fn get_reminder(&self, id: Uuid) -> AppResult<Option<ServiceReminder>>;
    async fn create_reminder(
        &self,
        vehicle_id: Uuid,
        reminder: NewServiceReminder,
    ) -> AppResult<ServiceReminder>;
    async fn update_reminder(&self, id: Uuid, patch: ReminderPatch) -> AppResult<ServiceReminder>;
    async fn delete_reminder(&self, id: Uuid) -> AppResult<()>;

    // Records
    async fn list_records(&self, vehicle_id: Uuid) -> AppResult<Vec<ServiceRecord>>;
    async fn get_record(&self, id: Uuid) -> AppResult<Option<ServiceRecord>>;
    async fn create_record(
        &self,
        vehicle_id: Uuid,
        record: NewServiceRecord,
    ) -> AppResult<ServiceRecord>;
    async fn delete_record(&self, id: Uuid) -> AppResult<()>;

    // Transactions
    async fn list_transactions(&self, vehicle_id: Uuid) -> AppResult<Vec<Transaction>>;
    async fn get_transaction(&self, id: Uuid) -> AppResult<Option<Transaction>>;
    async fn create_transaction(
        &self,
        vehicle_id: Uuid,
        transaction: NewTransaction,
    ) -> AppResult<Transaction>;
    async fn update_transaction(&self, id: Uuid, patch: TransactionPatch) -> AppResult<Transaction>;
    async fn delete_transaction(&self, id: Uuid) -> AppResult<()>;
}
