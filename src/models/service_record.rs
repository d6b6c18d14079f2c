//! Modelo de ServiceRecord (historial inmutable, sin update)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: DateTime<Utc>,
    pub mileage: i64,
    pub cost: i64,
    pub description: String,
    pub provider: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewServiceRecord {
    pub date: DateTime<Utc>,
    pub mileage: i64,
    pub cost: i64,
    pub description: String,
    pub provider: Option<String>,
}
