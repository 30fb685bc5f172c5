use crate::commands::{CmdMessage, CmdResult, Quote};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{checked_cost, find_vehicle, validate_days};

/// Prices a rental without performing it. Availability is reported but does
/// not block the quote.
pub fn run<S: DataStore>(store: &S, vehicle_id: &str, days: i64) -> Result<CmdResult> {
    let vehicle = find_vehicle(store, vehicle_id)?;
    let days = validate_days(days)?;
    let total_cost = checked_cost(vehicle, days)?;

    let mut result = CmdResult::default();
    if !vehicle.is_available() {
        result.add_message(CmdMessage::warning(format!(
            "{} is currently rented out.",
            vehicle.model
        )));
    }
    result.quote = Some(Quote {
        vehicle: vehicle.clone(),
        days,
        total_cost,
    });
    Ok(result)
}
