//! Cálculo de vencimientos de recordatorios de mantenimiento
//!
//! `next_due_mileage = baseline.mileage + interval_mileage` y
//! `next_due_date = baseline.date + interval_months` (meses de calendario;
//! si el día no existe en el mes destino se usa el último día del mes).
//!
//! Baseline: el último servicio registrado. Si el recordatorio no tiene
//! servicio previo se usan el kilometraje inicial y la fecha de alta del
//! vehículo. Solo los campos derivados usan ese valor por defecto; los
//! `last_service_*` guardados no se tocan.

use chrono::{DateTime, Months, Utc};

use crate::models::{
    reminder::{DueSchedule, ServiceReminder},
    vehicle::Vehicle,
};

/// Intervalos configurados en el recordatorio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReminderInterval {
    pub mileage: Option<i32>,
    pub months: Option<i32>,
}

/// Punto de partida del cálculo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceBaseline {
    pub date: Option<DateTime<Utc>>,
    pub mileage: Option<i64>,
}

impl ServiceBaseline {
    pub fn resolve(
        last_service_date: Option<DateTime<Utc>>,
        last_service_mileage: Option<i64>,
        vehicle: &Vehicle,
    ) -> Self {
        Self {
            date: last_service_date.or(Some(vehicle.created_at)),
            mileage: last_service_mileage.or(Some(vehicle.initial_mileage)),
        }
    }
}

/// Calcula el próximo vencimiento. Sin intervalos, el recordatorio es
/// solo informativo y los dos campos quedan vacíos.
pub fn next_due(interval: ReminderInterval, baseline: ServiceBaseline) -> DueSchedule {
    let next_due_mileage = match (interval.mileage, baseline.mileage) {
        (Some(every), Some(base)) => base.checked_add(i64::from(every)),
        _ => None,
    };

    let next_due_date = match (interval.months, baseline.date) {
        (Some(months), Some(base)) => u32::try_from(months)
            .ok()
            .and_then(|m| add_calendar_months(base, m)),
        _ => None,
    };

    DueSchedule {
        next_due_date,
        next_due_mileage,
    }
}

/// Suma meses de calendario, ajustando al último día válido del mes
pub fn add_calendar_months(date: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    date.checked_add_months(Months::new(months))
}

/// Recalcula el vencimiento de un recordatorio ya guardado
pub fn schedule_for(reminder: &ServiceReminder, vehicle: &Vehicle) -> DueSchedule {
    next_due(
        ReminderInterval {
            mileage: reminder.interval_mileage,
            months: reminder.interval_months,
        },
        ServiceBaseline::resolve(
            reminder.last_service_date,
            reminder.last_service_mileage,
            vehicle,
        ),
    )
}

/// Un recordatorio no descartado está vencido si no tiene umbral o si
/// se alcanzó cualquiera de los dos (kilometraje o fecha).
pub fn is_due(reminder: &ServiceReminder, now: DateTime<Utc>, current_mileage: i64) -> bool {
    if reminder.is_dismissed {
        return false;
    }

    match (reminder.next_due_date, reminder.next_due_mileage) {
        (None, None) => true,
        (due_date, due_mileage) => {
            due_date.is_some_and(|d| now >= d) || due_mileage.is_some_and(|m| current_mileage >= m)
        }
    }
}
