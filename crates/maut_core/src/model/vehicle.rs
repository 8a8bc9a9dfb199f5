//! Vehicle registration records.
//!
//! # Invariants
//! - `registered_on` is assigned at registration time, never by callers.
//! - A vehicle is identified by `vehicle_id` for its whole lifetime.

use super::{SpeedClassId, UserId, VehicleId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Caller-supplied data for registering a vehicle.
///
/// No plausibility checks (axles, weight, duplicate plates) are applied; the
/// store's constraints are the only gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRegistration {
    pub vehicle_id: VehicleId,
    pub speed_class_id: SpeedClassId,
    pub user_id: UserId,
    pub license_plate: String,
    /// Vehicle identification number (FIN/VIN).
    pub fin: String,
    pub axles: i32,
    pub weight: i32,
    /// Country of registration code, e.g. `DE`.
    pub country_code: String,
}

impl VehicleRegistration {
    /// Completes the registration with the date it was persisted on.
    pub fn into_vehicle(self, registered_on: NaiveDate) -> Vehicle {
        Vehicle {
            vehicle_id: self.vehicle_id,
            speed_class_id: self.speed_class_id,
            user_id: self.user_id,
            license_plate: self.license_plate,
            fin: self.fin,
            axles: self.axles,
            weight: self.weight,
            country_code: self.country_code,
            registered_on,
        }
    }
}

/// Vehicle as stored in `FAHRZEUG`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_id: VehicleId,
    pub speed_class_id: SpeedClassId,
    pub user_id: UserId,
    pub license_plate: String,
    pub fin: String,
    pub axles: i32,
    pub weight: i32,
    pub country_code: String,
    /// Local calendar date of registration (`anmeldedatum`).
    pub registered_on: NaiveDate,
}
