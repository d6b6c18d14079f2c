use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::dashboard::DashboardStats;
use crate::repositories::FleetStore;
use crate::services::dashboard_service;
use crate::utils::errors::AppResult;

pub struct DashboardController {
    store: Arc<dyn FleetStore>,
}

impl DashboardController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn stats(&self, user_id: &str, now: DateTime<Utc>) -> AppResult<DashboardStats> {
        dashboard_service::compute_stats(self.store.as_ref(), user_id, now).await
    }
}
