//! Rental cost formulas, one per vehicle category.
//!
//! All pricing lives in [`rental_cost`] so that every category's formula can be
//! read side by side. Day counts are validated by the rent command before they
//! get here, which is why the function takes an unsigned count.

use crate::model::VehicleKind;

/// Bikes rented for more than this many days get [`BIKE_LONG_RENTAL_FACTOR`].
pub const BIKE_DISCOUNT_AFTER_DAYS: u32 = 3;
pub const BIKE_LONG_RENTAL_FACTOR: f64 = 0.90;
/// Flat truck surcharge per ton of load capacity, independent of the day count.
pub const TRUCK_SURCHARGE_PER_TON: f64 = 10.0;

pub fn rental_cost(kind: &VehicleKind, base_rate: f64, days: u32) -> f64 {
    let base = base_rate * f64::from(days);
    match kind {
        VehicleKind::Car => base,
        VehicleKind::Bike if days > BIKE_DISCOUNT_AFTER_DAYS => base * BIKE_LONG_RENTAL_FACTOR,
        VehicleKind::Bike => base,
        VehicleKind::Truck { load_capacity_tons } => {
            base + load_capacity_tons * TRUCK_SURCHARGE_PER_TON
        }
    }
}
