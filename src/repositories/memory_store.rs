//! Store en memoria
//!
//! Mismo contrato que `PgFleetStore`, sobre mapas protegidos por un
//! `RwLock`. Se usa con `STORE_BACKEND=memory` y en los tests. Cuenta
//! lecturas y escrituras para poder comprobar qué operaciones tocan el store.

use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    insurance::{InsurancePolicy, InsurancePolicyPatch, NewInsurancePolicy},
    reminder::{NewServiceReminder, ReminderPatch, ServiceReminder},
    service_record::{NewServiceRecord, ServiceRecord},
    transaction::{NewTransaction, Transaction, TransactionPatch},
    vehicle::{NewVehicle, Vehicle, VehiclePatch},
};
use crate::repositories::FleetStore;
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Default)]
struct Tables {
    vehicles: HashMap<Uuid, Vehicle>,
    policies: HashMap<Uuid, InsurancePolicy>,
    reminders: HashMap<Uuid, ServiceReminder>,
    records: HashMap<Uuid, ServiceRecord>,
    transactions: HashMap<Uuid, Transaction>,
}

#[derive(Default)]
pub struct MemoryFleetStore {
    tables: RwLock<Tables>,
    reads: AtomicU64,
    writes: AtomicU64,
}

impl MemoryFleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de operaciones de lectura servidas
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    /// Número de escrituras realizadas (create/update/delete efectivos)
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    fn count_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    fn count_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    fn ensure_vehicle(tables: &Tables, vehicle_id: Uuid) -> AppResult<()> {
        if tables.vehicles.contains_key(&vehicle_id) {
            Ok(())
        } else {
            Err(not_found_error("Vehicle", vehicle_id))
        }
    }
}

#[async_trait]
impl FleetStore for MemoryFleetStore {
    async fn list_vehicles(&self, owner_id: &str) -> AppResult<Vec<Vehicle>> {
        self.count_read();
        let tables = self.tables.read().await;
        let mut vehicles: Vec<Vehicle> = tables
            .vehicles
            .values()
            .filter(|v| v.owner_id == owner_id)
            .cloned()
            .collect();
        vehicles.sort_by_key(|v| Reverse(v.created_at));
        Ok(vehicles)
    }

    async fn get_vehicle(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        self.count_read();
        Ok(self.tables.read().await.vehicles.get(&id).cloned())
    }

    async fn create_vehicle(&self, owner_id: &str, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let created = Vehicle {
            id: Uuid::new_v4(),
            owner_id: owner_id.to_string(),
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            vin: vehicle.vin,
            license_plate: vehicle.license_plate,
            status: vehicle.status,
            initial_mileage: vehicle.initial_mileage,
            current_mileage: vehicle.current_mileage,
            created_at: Utc::now(),
        };

        self.tables.write().await.vehicles.insert(created.id, created.clone());
        self.count_write();
        Ok(created)
    }

    async fn update_vehicle(&self, id: Uuid, patch: VehiclePatch) -> AppResult<Vehicle> {
        let mut tables = self.tables.write().await;
        let vehicle = tables
            .vehicles
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        if patch.is_empty() {
            self.count_read();
            return Ok(vehicle.clone());
        }

        patch.apply_to(vehicle);
        self.count_write();
        Ok(vehicle.clone())
    }

    async fn delete_vehicle(&self, id: Uuid) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        if tables.vehicles.remove(&id).is_none() {
            return Err(not_found_error("Vehicle", id));
        }

        tables.policies.retain(|_, p| p.vehicle_id != id);
        tables.reminders.retain(|_, r| r.vehicle_id != id);
        tables.records.retain(|_, r| r.vehicle_id != id);
        tables.transactions.retain(|_, t| t.vehicle_id != id);
        self.count_write();
        Ok(())
    }

    async fn list_policies(&self, vehicle_id: Uuid) -> AppResult<Vec<InsurancePolicy>> {
        self.count_read();
        let tables = self.tables.read().await;
        let mut policies: Vec<InsurancePolicy> = tables
            .policies
            .values()
            .filter(|p| p.vehicle_id == vehicle_id)
            .cloned()
            .collect();
        policies.sort_by_key(|p| Reverse(p.start_date));
        Ok(policies)
    }

    async fn get_policy(&self, id: Uuid) -> AppResult<Option<InsurancePolicy>> {
        self.count_read();
        Ok(self.tables.read().await.policies.get(&id).cloned())
    }

    async fn create_policy(
        &self,
        vehicle_id: Uuid,
        policy: NewInsurancePolicy,
    ) -> AppResult<InsurancePolicy> {
        let mut tables = self.tables.write().await;
        Self::ensure_vehicle(&tables, vehicle_id)?;

        let created = InsurancePolicy {
            id: Uuid::new_v4(),
            vehicle_id,
            provider: policy.provider,
            policy_number: policy.policy_number,
            coverage_details: policy.coverage_details,
            start_date: policy.start_date,
            end_date: policy.end_date,
            premium_amount: policy.premium_amount,
            created_at: Utc::now(),
        };
        tables.policies.insert(created.id, created.clone());
        self.count_write();
        Ok(created)
    }

    async fn update_policy(
        &self,
        id: Uuid,
        patch: InsurancePolicyPatch,
    ) -> AppResult<InsurancePolicy> {
        let mut tables = self.tables.write().await;
        let policy = tables
            .policies
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Insurance policy", id))?;

        if patch.is_empty() {
            self.count_read();
            return Ok(policy.clone());
        }

        patch.apply_to(policy);
        self.count_write();
        Ok(policy.clone())
    }

    async fn delete_policy(&self, id: Uuid) -> AppResult<()> {
        if self.tables.write().await.policies.remove(&id).is_none() {
            return Err(not_found_error("Insurance policy", id));
        }
        self.count_write();
        Ok(())
    }

    async fn list_reminders(&self, vehicle_id: Uuid) -> AppResult<Vec<ServiceReminder>> {
        self.count_read();
        let tables = self.tables.read().await;
        let mut reminders: Vec<ServiceReminder> = tables
            .reminders
            .values()
            .filter(|r| r.vehicle_id == vehicle_id)
            .cloned()
            .collect();
        // Con fecha primero (más reciente arriba), sin fecha al final
        reminders.sort_by(|a, b| match (a.next_due_date, b.next_due_date) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => b.created_at.cmp(&a.created_at),
        });
        Ok(reminders)
    }

    async fn get_reminder(&self, id: Uuid) -> AppResult<Option<ServiceReminder>> {
        self.count_read();
        Ok(self.tables.read().await.reminders.get(&id).cloned())
    }

    async fn create_reminder(
        &self,
        vehicle_id: Uuid,
        reminder: NewServiceReminder,
    ) -> AppResult<ServiceReminder> {
        let mut tables = self.tables.write().await;
        Self::ensure_vehicle(&tables, vehicle_id)?;

        let created = ServiceReminder {
            id: Uuid::new_v4(),
            vehicle_id,
            service_type: reminder.service_type,
            interval_mileage: reminder.interval_mileage,
            interval_months: reminder.interval_months,
            last_service_date: reminder.last_service_date,
            last_service_mileage: reminder.last_service_mileage,
            next_due_date: reminder.schedule.next_due_date,
            next_due_mileage: reminder.schedule.next_due_mileage,
            is_dismissed: reminder.is_dismissed,
            created_at: Utc::now(),
        };
        tables.reminders.insert(created.id, created.clone());
        self.count_write();
        Ok(created)
    }

    async fn update_reminder(&self, id: Uuid, patch: ReminderPatch) -> AppResult<ServiceReminder> {
        let mut tables = self.tables.write().await;
        let reminder = tables
            .reminders
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Service reminder", id))?;

        if patch.is_empty() {
            self.count_read();
            return Ok(reminder.clone());
        }

        patch.apply_to(reminder);
        self.count_write();
        Ok(reminder.clone())
    }

    async fn delete_reminder(&self, id: Uuid) -> AppResult<()> {
        if self.tables.write().await.reminders.remove(&id).is_none() {
            return Err(not_found_error("Service reminder", id));
        }
        self.count_write();
        Ok(())
    }

    async fn list_records(&self, vehicle_id: Uuid) -> AppResult<Vec<ServiceRecord>> {
        self.count_read();
        let tables = self.tables.read().await;
        let mut records: Vec<ServiceRecord> = tables
            .records
            .values()
            .filter(|r| r.vehicle_id == vehicle_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| Reverse(r.date));
        Ok(records)
    }

    async fn get_record(&self, id: Uuid) -> AppResult<Option<ServiceRecord>> {
        self.count_read();
        Ok(self.tables.read().await.records.get(&id).cloned())
    }

    async fn create_record(
        &self,
        vehicle_id: Uuid,
        record: NewServiceRecord,
    ) -> AppResult<ServiceRecord> {
        let mut tables = self.tables.write().await;
        Self::ensure_vehicle(&tables, vehicle_id)?;

        let created = ServiceRecord {
            id: Uuid::new_v4(),
            vehicle_id,
            date: record.date,
            mileage: record.mileage,
            cost: record.cost,
            description: record.description,
            provider: record.provider,
            created_at: Utc::now(),
        };
        tables.records.insert(created.id, created.clone());
        self.count_write();
        Ok(created)
    }

    async fn delete_record(&self, id: Uuid) -> AppResult<()> {
        if self.tables.write().await.records.remove(&id).is_none() {
            return Err(not_found_error("Service record", id));
        }
        self.count_write();
        Ok(())
    }

    async fn list_transactions(&self, vehicle_id: Uuid) -> AppResult<Vec<Transaction>> {
        self.count_read();
        let tables = self.tables.read().await;
        let mut transactions: Vec<Transaction> = tables
            .transactions
            .values()
            .filter(|t| t.vehicle_id == vehicle_id)
            .cloned()
            .collect();
        transactions.sort_by_key(|t| Reverse(t.date));
        Ok(transactions)
    }

    async fn get_transaction(&self, id: Uuid) -> AppResult<Option<Transaction>> {
        self.count_read();
        Ok(self.tables.read().await.transactions.get(&id).cloned())
    }

    async fn create_transaction(
        &self,
        vehicle_id: Uuid,
        transaction: NewTransaction,
    ) -> AppResult<Transaction> {
        let mut tables = self.tables.write().await;
        Self::ensure_vehicle(&tables, vehicle_id)?;

        let created = Transaction {
            id: Uuid::new_v4(),
            vehicle_id,
            date: transaction.date,
            kind: transaction.kind,
            category: transaction.category,
            amount: transaction.amount,
            description: transaction.description,
            created_at: Utc::now(),
        };
        tables.transactions.insert(created.id, created.clone());
        self.count_write();
        Ok(created)
    }

    async fn update_transaction(
        &self,
        id: Uuid,
        patch: TransactionPatch,
    ) -> AppResult<Transaction> {
        let mut tables = self.tables.write().await;
        let transaction = tables
            .transactions
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Transaction", id))?;

        if patch.is_empty() {
            self.count_read();
            return Ok(transaction.clone());
        }

        patch.apply_to(transaction);
        self.count_write();
        Ok(transaction.clone())
    }

    async fn delete_transaction(&self, id: Uuid) -> AppResult<()> {
        if self.tables.write().await.transactions.remove(&id).is_none() {
            return Err(not_found_error("Transaction", id));
        }
        self.count_write();
        Ok(())
    }
}
