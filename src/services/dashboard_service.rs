//! Agregados del dashboard
//!
//! Lee los vehículos del usuario y, por cada uno, sus movimientos y
//! recordatorios, y los pliega en memoria. No es transaccional: si hay
//! escrituras concurrentes el resultado puede mezclar estados (lectura
//! "rasgada"). Para flotas grandes esto debería ser una única consulta
//! agregada en la base de datos; las reglas de suma/conteo son las mismas.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    dashboard::DashboardStats,
    reminder::ServiceReminder,
    transaction::Transaction,
    vehicle::{Vehicle, VehicleStatus},
};
use crate::repositories::FleetStore;
use crate::utils::errors::{AppError, AppResult};

/// Ventana de gastos: `[now - 30 días, now]`, ambos extremos incluidos
pub const EXPENSE_WINDOW_DAYS: i64 = 30;

pub fn expense_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (now - Duration::days(EXPENSE_WINDOW_DAYS), now)
}

/// Pliegue puro sobre datos ya cargados. Una suma de gastos que no cabe
/// en `i64` es un error interno, nunca un total truncado.
pub fn fold_stats(
    vehicles: &[Vehicle],
    transactions: &[Transaction],
    reminders: &[ServiceReminder],
    now: DateTime<Utc>,
) -> AppResult<DashboardStats> {
    let (window_start, window_end) = expense_window(now);

    let total_monthly_expenses = transactions
        .iter()
        .filter(|t| t.is_expense() && t.date >= window_start && t.date <= window_end)
        .try_fold(0_i64, |total, t| total.checked_add(t.amount))
        .ok_or_else(|| {
            AppError::Internal("monthly expense total overflows i64".to_string())
        })?;

    // Cuenta todo recordatorio no descartado, vencido o no
    let upcoming_reminders_count = reminders.iter().filter(|r| !r.is_dismissed).count() as i64;

    Ok(DashboardStats {
        total_vehicles: vehicles.len() as i64,
        active_vehicles: vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Active)
            .count() as i64,
        total_monthly_expenses,
        upcoming_reminders_count,
    })
}

/// Estadísticas del usuario. Sin vehículos devuelve ceros sin consultar nada más.
pub async fn compute_stats(
    store: &dyn FleetStore,
    owner_id: &str,
    now: DateTime<Utc>,
) -> AppResult<DashboardStats> {
    let vehicles = store.list_vehicles(owner_id).await?;
    if vehicles.is_empty() {
        return Ok(DashboardStats::default());
    }

    let mut transactions = Vec::new();
    let mut reminders = Vec::new();
    for vehicle in &vehicles {
        transactions.extend(store.list_transactions(vehicle.id).await?);
        reminders.extend(store.list_reminders(vehicle.id).await?);
    }

    let stats = fold_stats(&vehicles, &transactions, &reminders, now)?;
    tracing::debug!(
        owner_id,
        vehicles = stats.total_vehicles,
        transactions = transactions.len(),
        reminders = reminders.len(),
        "dashboard stats computed"
    );
    Ok(stats)
}
