use crate::error::{RentalError, Result};
use crate::model::{ids_match, Customer, Vehicle};
use crate::store::DataStore;

pub fn find_vehicle<'a, S: DataStore>(store: &'a S, id: &str) -> Result<&'a Vehicle> {
    store
        .vehicles()
        .iter()
        .find(|v| ids_match(v.id(), id))
        .ok_or_else(|| RentalError::vehicle_not_found(id))
}

pub fn find_customer<'a, S: DataStore>(store: &'a S, id: &str) -> Result<&'a Customer> {
    store
        .customers()
        .iter()
        .find(|c| ids_match(c.id(), id))
        .ok_or_else(|| RentalError::customer_not_found(id))
}

/// Day counts arrive as signed integers from the input layer.
pub fn validate_days(days: i64) -> Result<u32> {
    if days <= 0 {
        return Err(RentalError::InvalidDuration(days));
    }
    u32::try_from(days).map_err(|_| RentalError::InvalidDuration(days))
}

/// Cost of renting `vehicle` for `days`, rejected when it overflows to a
/// non-finite amount.
pub fn checked_cost(vehicle: &Vehicle, days: u32) -> Result<f64> {
    let total_cost = vehicle.calculate_cost(days);
    if !total_cost.is_finite() {
        return Err(RentalError::InvalidInput(format!(
            "Rental cost for {} over {} days is out of range",
            vehicle.model, days
        )));
    }
    Ok(total_cost)
}

/// `prefix` followed by `count + 1`, advanced past any id already in use.
pub fn next_sequential_id(prefix: &str, count: usize, taken: impl Fn(&str) -> bool) -> String {
    let mut n = count + 1;
    loop {
        let candidate = format!("{prefix}{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
