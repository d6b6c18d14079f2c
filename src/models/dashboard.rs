//! Modelo de estadísticas del dashboard

use serde::{Deserialize, Serialize};

/// Resumen por usuario. `total_monthly_expenses` en céntimos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_vehicles: i64,
    pub active_vehicles: i64,
    pub total_monthly_expenses: i64,
    pub upcoming_reminders_count: i64,
}
