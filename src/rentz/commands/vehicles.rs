use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RentalError, Result};
use crate::model::{ids_match, NewVehicle, Vehicle, VehicleKind};
use crate::store::DataStore;

use super::helpers::next_sequential_id;

/// Available vehicles in insertion order. The iterator borrows the store and
/// can be cloned to walk the fleet again.
pub fn available<S: DataStore>(store: &S) -> impl Iterator<Item = &Vehicle> + Clone {
    store.vehicles().iter().filter(|v| v.is_available())
}

pub fn list_available<S: DataStore>(store: &S) -> Result<CmdResult> {
    let listed: Vec<Vehicle> = available(store).cloned().collect();
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No vehicles currently available."));
    }
    Ok(result.with_listed_vehicles(listed))
}

pub fn list_all<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.vehicles().is_empty() {
        result.add_message(CmdMessage::info("No vehicles in the fleet."));
    }
    Ok(result.with_listed_vehicles(store.vehicles().to_vec()))
}

pub fn add<S: DataStore>(store: &mut S, new: NewVehicle) -> Result<CmdResult> {
    validate(&new)?;

    let id = match new.id {
        Some(id) => {
            let id = id.trim().to_string();
            if id.is_empty() {
                return Err(RentalError::InvalidInput(
                    "Vehicle id cannot be empty".into(),
                ));
            }
            id
        }
        None => {
            let existing = store.vehicles();
            next_sequential_id("V", existing.len(), |candidate| {
                existing.iter().any(|v| ids_match(v.id(), candidate))
            })
        }
    };

    let vehicle = Vehicle::new(id, new.model.trim(), new.base_rate, new.kind);
    store.insert_vehicle(vehicle.clone())?;
    tracing::info!(vehicle = %vehicle.id(), kind = %vehicle.kind, "vehicle added");

    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Added {} {} with ID: {}",
        vehicle.kind,
        vehicle.model,
        vehicle.id()
    )));
    result.affected_vehicles.push(vehicle);
    Ok(result)
}

fn validate(new: &NewVehicle) -> Result<()> {
    if new.model.trim().is_empty() {
        return Err(RentalError::InvalidInput("Model cannot be empty".into()));
    }
    if !new.base_rate.is_finite() || new.base_rate < 0.0 {
        return Err(RentalError::InvalidInput(format!(
            "Daily rate must be a non-negative number (got {})",
            new.base_rate
        )));
    }
    if let VehicleKind::Truck { load_capacity_tons } = new.kind {
        if !load_capacity_tons.is_finite() || load_capacity_tons < 0.0 {
            return Err(RentalError::InvalidInput(format!(
                "Load capacity must be a non-negative number (got {load_capacity_tons})"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::rent;
    use crate::store::memory::fixtures::StoreFixture;

    fn ids(vehicles: &[Vehicle]) -> Vec<&str> {
        vehicles.iter().map(|v| v.id()).collect()
    }

    #[test]
    fn lists_available_in_insertion_order() {
        let mut store = StoreFixture::standard().store;
        rent::run(&mut store, "C1", "V2", 1).unwrap();

        let result = list_available(&store).unwrap();
        assert_eq!(ids(&result.listed_vehicles), ["V1", "V3"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn available_iterator_is_restartable() {
        let store = StoreFixture::standard().store;
        let iter = available(&store);
        assert_eq!(iter.clone().count(), 3);
        assert_eq!(iter.map(|v| v.id()).collect::<Vec<_>>(), ["V1", "V2", "V3"]);
    }

    #[test]
    fn empty_fleet_reports_nothing_available() {
        let mut store = StoreFixture::new()
            .with_car("V1", "Toyota Camry", 500.0)
            .with_customer("C1", "Ann")
            .store;
        rent::run(&mut store, "C1", "V1", 1).unwrap();

        let result = list_available(&store).unwrap();
        assert!(result.listed_vehicles.is_empty());
        assert_eq!(result.messages[0].content, "No vehicles currently available.");
        let all = list_all(&store).unwrap();
        assert_eq!(all.listed_vehicles.len(), 1);
        assert!(all.messages.is_empty());
    }

    #[test]
    fn empty_store_reports_empty_fleet() {
        let result = list_all(&StoreFixture::new().store).unwrap();
        assert!(result.listed_vehicles.is_empty());
        assert_eq!(result.messages[0].content, "No vehicles in the fleet.");
    }

    #[test]
    fn generated_ids_continue_from_fleet_size() {
        let mut store = StoreFixture::standard().store;
        let result = add(
            &mut store,
            NewVehicle::new("Kids Bike", 100.0, VehicleKind::Bike),
        )
        .unwrap();
        assert_eq!(result.affected_vehicles[0].id(), "V4");
        assert!(result.affected_vehicles[0].is_available());
    }

    #[test]
    fn generated_ids_skip_caller_supplied_ones() {
        let mut store = StoreFixture::standard().store;
        add(
            &mut store,
            NewVehicle::new("Nissan Versa", 400.0, VehicleKind::Car).with_id("V5"),
        )
        .unwrap();
        let result = add(
            &mut store,
            NewVehicle::new("Road Bike", 180.0, VehicleKind::Bike),
        )
        .unwrap();
        assert_eq!(result.affected_vehicles[0].id(), "V6");
    }

    #[test]
    fn rejects_duplicate_and_invalid_vehicles() {
        let mut store = StoreFixture::standard().store;
        assert!(matches!(
            add(&mut store, NewVehicle::new("Dup", 1.0, VehicleKind::Car).with_id("v1")),
            Err(RentalError::DuplicateId(_))
        ));
        assert!(matches!(
            add(&mut store, NewVehicle::new("Cheap", -1.0, VehicleKind::Car)),
            Err(RentalError::InvalidInput(_))
        ));
        assert!(matches!(
            add(
                &mut store,
                NewVehicle::new(
                    "Hauler",
                    900.0,
                    VehicleKind::Truck {
                        load_capacity_tons: f64::NAN
                    }
                )
            ),
            Err(RentalError::InvalidInput(_))
        ));
        assert_eq!(store.vehicles().len(), 3);
    }
}
