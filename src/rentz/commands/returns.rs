use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RentalError, Result};
use crate::store::DataStore;

/// Marks a rented vehicle as available again. Rental history is not touched.
pub fn run<S: DataStore>(store: &mut S, vehicle_id: &str) -> Result<CmdResult> {
    let vehicle = store
        .vehicle_mut(vehicle_id)
        .ok_or_else(|| RentalError::vehicle_not_found(vehicle_id))?;

    if vehicle.is_available() {
        return Err(RentalError::NotRented {
            model: vehicle.model.clone(),
        });
    }
    vehicle.available = true;

    tracing::info!(vehicle = %vehicle.id(), "vehicle returned");

    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Vehicle {} (ID: {}) has been successfully returned.",
        vehicle.model,
        vehicle.id()
    )));
    result.affected_vehicles.push(vehicle.clone());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::{find_customer, find_vehicle};
    use crate::commands::rent;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returning_makes_vehicle_available() {
        let mut store = StoreFixture::standard().store;
        rent::run(&mut store, "C1", "V1", 3).unwrap();

        let result = run(&mut store, "v1").unwrap();
        assert!(result.affected_vehicles[0].is_available());
        assert!(find_vehicle(&store, "V1").unwrap().is_available());
        assert!(result.messages[0].content.contains("successfully returned"));
    }

    #[test]
    fn returning_keeps_rental_history() {
        let mut store = StoreFixture::standard().store;
        rent::run(&mut store, "C1", "V3", 2).unwrap();
        run(&mut store, "V3").unwrap();

        let history = find_customer(&store, "C1").unwrap().history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].total_cost, 2025.0);
    }

    #[test]
    fn returning_an_available_vehicle_is_not_rented() {
        let mut store = StoreFixture::standard().store;
        let err = run(&mut store, "V2").unwrap_err();
        assert!(matches!(err, RentalError::NotRented { ref model } if model == "Mountain Bike"));
        assert!(find_vehicle(&store, "V2").unwrap().is_available());
    }

    #[test]
    fn returning_unknown_vehicle_is_not_found() {
        let mut store = StoreFixture::standard().store;
        assert!(matches!(
            run(&mut store, "V42"),
            Err(RentalError::NotFound { what: "Vehicle", .. })
        ));
    }
}
