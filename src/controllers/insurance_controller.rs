use std::sync::Arc;

use uuid::Uuid;

use crate::dto::insurance_dto::{CreateInsurancePolicyRequest, UpdateInsurancePolicyRequest};
use crate::models::insurance::{InsurancePolicy, InsurancePolicyPatch};
use crate::repositories::FleetStore;
use crate::services::ownership::OwnershipGuard;
use crate::utils::{errors::AppResult, validation::check_policy_period};

pub struct InsuranceController {
    store: Arc<dyn FleetStore>,
}

impl InsuranceController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    fn guard(&self) -> OwnershipGuard<'_> {
        OwnershipGuard::new(self.store.as_ref())
    }

    pub async fn list(&self, vehicle_id: Uuid, user_id: &str) -> AppResult<Vec<InsurancePolicy>> {
        self.guard().authorize_vehicle(vehicle_id, user_id).await?;
        self.store.list_policies(vehicle_id).await
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        user_id: &str,
        request: CreateInsurancePolicyRequest,
    ) -> AppResult<InsurancePolicy> {
        self.guard().authorize_vehicle(vehicle_id, user_id).await?;
        self.store.create_policy(vehicle_id, request.into()).await
    }

    /// Las fechas se vuelven a comprobar sobre el registro ya mezclado
    pub async fn update(
        &self,
        id: Uuid,
        user_id: &str,
        request: UpdateInsurancePolicyRequest,
    ) -> AppResult<InsurancePolicy> {
        let (current, _) = self.guard().authorize_policy(id, user_id).await?;

        let patch = InsurancePolicyPatch::from(request);
        if patch.is_empty() {
            return Ok(current);
        }

        let mut merged = current;
        patch.apply_to(&mut merged);
        check_policy_period(merged.start_date, merged.end_date)?;

        self.store.update_policy(id, patch).await
    }

    pub async fn delete(&self, id: Uuid, user_id: &str) -> AppResult<()> {
        self.guard().authorize_policy(id, user_id).await?;
        self.store.delete_policy(id).await
    }
}
