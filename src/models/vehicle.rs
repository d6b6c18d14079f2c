//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! Mapea a la tabla `vehicles` con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

use crate::models::insurance::InsurancePolicy;
use crate::models::reminder::ReminderView;

/// Estado del vehículo - mapea al ENUM vehicle_status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Active,
    Maintenance,
    Sold,
}

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    pub owner_id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: Option<String>,
    pub license_plate: Option<String>,
    pub status: VehicleStatus,
    pub initial_mileage: i64,
    pub current_mileage: i64,
    pub created_at: DateTime<Utc>,
}

/// Datos para insertar un vehículo, con los valores por defecto ya resueltos
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: Option<String>,
    pub license_plate: Option<String>,
    pub status: VehicleStatus,
    pub initial_mileage: i64,
    pub current_mileage: i64,
}

/// Actualización parcial: `Some` sobrescribe, `None` deja el valor actual
#[derive(Debug, Clone, Default)]
pub struct VehiclePatch {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub vin: Option<String>,
    pub license_plate: Option<String>,
    pub status: Option<VehicleStatus>,
    pub initial_mileage: Option<i64>,
    pub current_mileage: Option<i64>,
}

impl VehiclePatch {
    pub fn is_empty(&self) -> bool {
        self.make.is_none()
            && self.model.is_none()
            && self.year.is_none()
            && self.vin.is_none()
            && self.license_plate.is_none()
            && self.status.is_none()
            && self.initial_mileage.is_none()
            && self.current_mileage.is_none()
    }

    pub fn apply_to(&self, vehicle: &mut Vehicle) {
        if let Some(make) = &self.make {
            vehicle.make = make.clone();
        }
        if let Some(model) = &self.model {
            vehicle.model = model.clone();
        }
        if let Some(year) = self.year {
            vehicle.year = year;
        }
        if let Some(vin) = &self.vin {
            vehicle.vin = Some(vin.clone());
        }
        if let Some(plate) = &self.license_plate {
            vehicle.license_plate = Some(plate.clone());
        }
        if let Some(status) = self.status {
            vehicle.status = status;
        }
        if let Some(initial) = self.initial_mileage {
            vehicle.initial_mileage = initial;
        }
        if let Some(current) = self.current_mileage {
            vehicle.current_mileage = current;
        }
    }
}

/// Respuesta de `GET /vehicles/:id`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub upcoming_reminders: Vec<ReminderView>,
    pub active_policy: Option<InsurancePolicy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle() -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            owner_id: "user-a".to_string(),
            make: "Toyota".to_string(),
            model: "Hilux".to_string(),
            year: 2020,
            vin: None,
            license_plate: Some("AB-123-CD".to_string()),
            status: VehicleStatus::Active,
            initial_mileage: 1000,
            current_mileage: 1500,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_patch() {
        assert!(VehiclePatch::default().is_empty());
        let patch = VehiclePatch {
            status: Some(VehicleStatus::Sold),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_apply_only_overwrites_present_fields() {
        let mut v = vehicle();
        let original = v.clone();
        let patch = VehiclePatch {
            current_mileage: Some(2000),
            vin: Some("JTEBU5JR".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut v);

        assert_eq!(v.current_mileage, 2000);
        assert_eq!(v.vin.as_deref(), Some("JTEBU5JR"));
        assert_eq!(v.make, original.make);
        assert_eq!(v.license_plate, original.license_plate);
        assert_eq!(v.status, original.status);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_value(VehicleStatus::Maintenance).unwrap();
        assert_eq!(json, "maintenance");
        let v = serde_json::to_value(vehicle()).unwrap();
        assert_eq!(v["currentMileage"], 1500);
        assert_eq!(v["ownerId"], "user-a");
    }
}
