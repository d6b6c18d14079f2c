use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
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

// Los updates tocan solo las columnas presentes en el patch, en una única
// sentencia: dos patches concurrentes sobre columnas distintas no se pisan.

const UPDATE_VEHICLE_SQL: &str = r#"
    UPDATE vehicles
    SET make = COALESCE($2, make),
        model = COALESCE($3, model),
        year = COALESCE($4, year),
        vin = COALESCE($5, vin),
        license_plate = COALESCE($6, license_plate),
        status = COALESCE($7, status),
        initial_mileage = COALESCE($8, initial_mileage),
        current_mileage = COALESCE($9, current_mileage)
    WHERE id = $1
    RETURNING *
"#;

const UPDATE_POLICY_SQL: &str = r#"
    UPDATE insurance_policies
    SET provider = COALESCE($2, provider),
        policy_number = COALESCE($3, policy_number),
        coverage_details = COALESCE($4, coverage_details),
        start_date = COALESCE($5, start_date),
        end_date = COALESCE($6, end_date),
        premium_amount = COALESCE($7, premium_amount)
    WHERE id = $1
    RETURNING *
"#;

const UPDATE_REMINDER_SQL: &str = r#"
    UPDATE service_reminders
    SET service_type = COALESCE($2, service_type),
        interval_mileage = COALESCE($3, interval_mileage),
        interval_months = COALESCE($4, interval_months),
        last_service_date = COALESCE($5, last_service_date),
        last_service_mileage = COALESCE($6, last_service_mileage),
        is_dismissed = COALESCE($7, is_dismissed),
        next_due_date = CASE WHEN $8 THEN $9 ELSE next_due_date END,
        next_due_mileage = CASE WHEN $8 THEN $10 ELSE next_due_mileage END
    WHERE id = $1
    RETURNING *
"#;

const UPDATE_TRANSACTION_SQL: &str = r#"
    UPDATE transactions
    SET date = COALESCE($2, date),
        type = COALESCE($3, type),
        category = COALESCE($4, category),
        amount = COALESCE($5, amount),
        description = COALESCE($6, description)
    WHERE id = $1
    RETURNING *
"#;

/// Implementación PostgreSQL del store
#[derive(Clone)]
pub struct PgFleetStore {
    pool: PgPool,
}

impl PgFleetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn delete_by_id(&self, table: &str, resource: &str, id: Uuid) -> AppResult<()> {
        // `table` siempre es una constante de este módulo
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", table))
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error(resource, id));
        }
        Ok(())
    }
}

#[async_trait]
impl FleetStore for PgFleetStore {
    async fn list_vehicles(&self, owner_id: &str) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    async fn get_vehicle(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    async fn create_vehicle(&self, owner_id: &str, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let created = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, owner_id, make, model, year, vin, license_plate, status,
                initial_mileage, current_mileage, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(vehicle.make)
        .bind(vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.vin)
        .bind(vehicle.license_plate)
        .bind(vehicle.status)
        .bind(vehicle.initial_mileage)
        .bind(vehicle.current_mileage)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_vehicle(&self, id: Uuid, patch: VehiclePatch) -> AppResult<Vehicle> {
        if patch.is_empty() {
            return self
                .get_vehicle(id)
                .await?
                .ok_or_else(|| not_found_error("Vehicle", id));
        }

        sqlx::query_as::<_, Vehicle>(UPDATE_VEHICLE_SQL)
            .bind(id)
            .bind(patch.make)
            .bind(patch.model)
            .bind(patch.year)
            .bind(patch.vin)
            .bind(patch.license_plate)
            .bind(patch.status)
            .bind(patch.initial_mileage)
            .bind(patch.current_mileage)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    async fn delete_vehicle(&self, id: Uuid) -> AppResult<()> {
        self.delete_by_id("vehicles", "Vehicle", id).await
    }

    async fn list_policies(&self, vehicle_id: Uuid) -> AppResult<Vec<InsurancePolicy>> {
        let policies = sqlx::query_as::<_, InsurancePolicy>(
            "SELECT * FROM insurance_policies WHERE vehicle_id = $1 ORDER BY start_date DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(policies)
    }

    async fn get_policy(&self, id: Uuid) -> AppResult<Option<InsurancePolicy>> {
        let policy = sqlx::query_as::<_, InsurancePolicy>(
            "SELECT * FROM insurance_policies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(policy)
    }

    async fn create_policy(
        &self,
        vehicle_id: Uuid,
        policy: NewInsurancePolicy,
    ) -> AppResult<InsurancePolicy> {
        let created = sqlx::query_as::<_, InsurancePolicy>(
            r#"
            INSERT INTO insurance_policies (id, vehicle_id, provider, policy_number,
                coverage_details, start_date, end_date, premium_amount, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(policy.provider)
        .bind(policy.policy_number)
        .bind(policy.coverage_details)
        .bind(policy.start_date)
        .bind(policy.end_date)
        .bind(policy.premium_amount)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_policy(
        &self,
        id: Uuid,
        patch: InsurancePolicyPatch,
    ) -> AppResult<InsurancePolicy> {
        if patch.is_empty() {
            return self
                .get_policy(id)
                .await?
                .ok_or_else(|| not_found_error("Insurance policy", id));
        }

        sqlx::query_as::<_, InsurancePolicy>(UPDATE_POLICY_SQL)
            .bind(id)
            .bind(patch.provider)
            .bind(patch.policy_number)
            .bind(patch.coverage_details)
            .bind(patch.start_date)
            .bind(patch.end_date)
            .bind(patch.premium_amount)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("Insurance policy", id))
    }

    async fn delete_policy(&self, id: Uuid) -> AppResult<()> {
        self.delete_by_id("insurance_policies", "Insurance policy", id).await
    }

    async fn list_reminders(&self, vehicle_id: Uuid) -> AppResult<Vec<ServiceReminder>> {
        let reminders = sqlx::query_as::<_, ServiceReminder>(
            r#"
            SELECT * FROM service_reminders
            WHERE vehicle_id = $1
            ORDER BY next_due_date DESC NULLS LAST, created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reminders)
    }

    async fn get_reminder(&self, id: Uuid) -> AppResult<Option<ServiceReminder>> {
        let reminder = sqlx::query_as::<_, ServiceReminder>(
            "SELECT * FROM service_reminders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reminder)
    }

    async fn create_reminder(
        &self,
        vehicle_id: Uuid,
        reminder: NewServiceReminder,
    ) -> AppResult<ServiceReminder> {
        let created = sqlx::query_as::<_, ServiceReminder>(
            r#"
            INSERT INTO service_reminders (id, vehicle_id, service_type, interval_mileage,
                interval_months, last_service_date, last_service_mileage, next_due_date,
                next_due_mileage, is_dismissed, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(reminder.service_type)
        .bind(reminder.interval_mileage)
        .bind(reminder.interval_months)
        .bind(reminder.last_service_date)
        .bind(reminder.last_service_mileage)
        .bind(reminder.schedule.next_due_date)
        .bind(reminder.schedule.next_due_mileage)
        .bind(reminder.is_dismissed)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_reminder(&self, id: Uuid, patch: ReminderPatch) -> AppResult<ServiceReminder> {
        if patch.is_empty() {
            return self
                .get_reminder(id)
                .await?
                .ok_or_else(|| not_found_error("Service reminder", id));
        }

        // Con schedule se escriben los dos campos derivados, también a NULL
        let schedule = patch.schedule.unwrap_or_default();
        sqlx::query_as::<_, ServiceReminder>(UPDATE_REMINDER_SQL)
            .bind(id)
            .bind(patch.service_type)
            .bind(patch.interval_mileage)
            .bind(patch.interval_months)
            .bind(patch.last_service_date)
            .bind(patch.last_service_mileage)
            .bind(patch.is_dismissed)
            .bind(patch.schedule.is_some())
            .bind(schedule.next_due_date)
            .bind(schedule.next_due_mileage)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("Service reminder", id))
    }

    async fn delete_reminder(&self, id: Uuid) -> AppResult<()> {
        self.delete_by_id("service_reminders", "Service reminder", id).await
    }

    async fn list_records(&self, vehicle_id: Uuid) -> AppResult<Vec<ServiceRecord>> {
        let records = sqlx::query_as::<_, ServiceRecord>(
            "SELECT * FROM service_records WHERE vehicle_id = $1 ORDER BY date DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn get_record(&self, id: Uuid) -> AppResult<Option<ServiceRecord>> {
        let record = sqlx::query_as::<_, ServiceRecord>(
            "SELECT * FROM service_records WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn create_record(
        &self,
        vehicle_id: Uuid,
        record: NewServiceRecord,
    ) -> AppResult<ServiceRecord> {
        let created = sqlx::query_as::<_, ServiceRecord>(
            r#"
            INSERT INTO service_records
                (id, vehicle_id, date, mileage, cost, description, provider, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(record.date)
        .bind(record.mileage)
        .bind(record.cost)
        .bind(record.description)
        .bind(record.provider)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete_record(&self, id: Uuid) -> AppResult<()> {
        self.delete_by_id("service_records", "Service record", id).await
    }

    async fn list_transactions(&self, vehicle_id: Uuid) -> AppResult<Vec<Transaction>> {
        let transactions = sqlx::query_as::<_, Transaction>(
            "SELECT * FROM transactions WHERE vehicle_id = $1 ORDER BY date DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    async fn get_transaction(&self, id: Uuid) -> AppResult<Option<Transaction>> {
        let transaction = sqlx::query_as::<_, Transaction>(
            "SELECT * FROM transactions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }

    async fn create_transaction(
        &self,
        vehicle_id: Uuid,
        transaction: NewTransaction,
    ) -> AppResult<Transaction> {
        let created = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions
                (id, vehicle_id, date, type, category, amount, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(transaction.date)
        .bind(transaction.kind)
        .bind(transaction.category)
        .bind(transaction.amount)
        .bind(transaction.description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_transaction(
        &self,
        id: Uuid,
        patch: TransactionPatch,
    ) -> AppResult<Transaction> {
        if patch.is_empty() {
            return self
                .get_transaction(id)
                .await?
                .ok_or_else(|| not_found_error("Transaction", id));
        }

        sqlx::query_as::<_, Transaction>(UPDATE_TRANSACTION_SQL)
            .bind(id)
            .bind(patch.date)
            .bind(patch.kind)
            .bind(patch.category)
            .bind(patch.amount)
            .bind(patch.description)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("Transaction", id))
    }

    async fn delete_transaction(&self, id: Uuid) -> AppResult<()> {
        self.delete_by_id("transactions", "Transaction", id).await
    }
}
