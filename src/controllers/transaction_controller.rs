use std::sync::Arc;

use uuid::Uuid;

use crate::dto::transaction_dto::{CreateTransactionRequest, UpdateTransactionRequest};
use crate::models::transaction::{Transaction, TransactionPatch};
use crate::repositories::FleetStore;
use crate::services::ownership::OwnershipGuard;
use crate::utils::errors::AppResult;

pub struct TransactionController {
    store: Arc<dyn FleetStore>,
}

impl TransactionController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    fn guard(&self) -> OwnershipGuard<'_> {
        OwnershipGuard::new(self.store.as_ref())
    }

    pub async fn list(&self, vehicle_id: Uuid, user_id: &str) -> AppResult<Vec<Transaction>> {
        self.guard().authorize_vehicle(vehicle_id, user_id).await?;
        self.store.list_transactions(vehicle_id).await
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        user_id: &str,
        request: CreateTransactionRequest,
    ) -> AppResult<Transaction> {
        self.guard().authorize_vehicle(vehicle_id, user_id).await?;
        self.store.create_transaction(vehicle_id, request.into()).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: &str,
        request: UpdateTransactionRequest,
    ) -> AppResult<Transaction> {
        let (current, _) = self.guard().authorize_transaction(id, user_id).await?;

        let patch = TransactionPatch::from(request);
        if patch.is_empty() {
            return Ok(current);
        }

        self.store.update_transaction(id, patch).await
    }

    pub async fn delete(&self, id: Uuid, user_id: &str) -> AppResult<()> {
        self.guard().authorize_transaction(id, user_id).await?;
        self.store.delete_transaction(id).await
    }
}
