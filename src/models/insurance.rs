//! Modelo de InsurancePolicy

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Póliza de seguro de un vehículo. `premium_amount` en céntimos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePolicy {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub provider: String,
    pub policy_number: String,
    pub coverage_details: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub premium_amount: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewInsurancePolicy {
    pub provider: String,
    pub policy_number: String,
    pub coverage_details: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub premium_amount: i64,
}

#[derive(Debug, Clone, Default)]
pub struct InsurancePolicyPatch {
    pub provider: Option<String>,
    pub policy_number: Option<String>,
    pub coverage_details: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub premium_amount: Option<i64>,
}

impl InsurancePolicyPatch {
    pub fn is_empty(&self) -> bool {
        self.provider.is_none()
            && self.policy_number.is_none()
            && self.coverage_details.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.premium_amount.is_none()
    }

    pub fn apply_to(&self, policy: &mut InsurancePolicy) {
        if let Some(provider) = &self.provider {
            policy.provider = provider.clone();
        }
        if let Some(number) = &self.policy_number {
            policy.policy_number = number.clone();
        }
        if let Some(details) = &self.coverage_details {
            policy.coverage_details = Some(details.clone());
        }
        if let Some(start) = self.start_date {
            policy.start_date = start;
        }
        if let Some(end) = self.end_date {
            policy.end_date = end;
        }
        if let Some(premium) = self.premium_amount {
            policy.premium_amount = premium;
        }
    }
}
