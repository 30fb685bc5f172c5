//! The desk's starting fleet and customer list.

use crate::error::Result;
use crate::model::{Customer, NewCustomer, Vehicle};
use crate::store::DataStore;

pub fn default_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle::car("V1", "Toyota Camry", 500.0),
        Vehicle::bike("V2", "Mountain Bike", 150.0),
        Vehicle::truck("V3", "Ford F-150", 1000.0, 2.5),
        Vehicle::car("V4", "Honda Accord", 550.0),
        Vehicle::car("V5", "Mercedes C-Class", 900.0),
        Vehicle::bike("V6", "Road Bike", 180.0),
        Vehicle::truck("V7", "Chevy Silverado 3500", 1100.0, 4.0),
        Vehicle::car("V8", "BMW X5 SUV", 1200.0),
        Vehicle::car("V9", "Nissan Versa", 400.0),
        Vehicle::bike("V10", "Kids Bike", 100.0),
    ]
}

pub fn default_customers() -> Vec<Customer> {
    vec![
        Customer::new(
            "C1",
            NewCustomer::new("Mulugeta Daba", "091011121314", "Jimma JIT", "G12345"),
        ),
        Customer::new(
            "C2",
            NewCustomer::new("Samuel Fayisa", "091516171819", "Jimma JIT", "G67890"),
        ),
    ]
}

/// Loads the default fleet and customers into `store`.
pub fn seed<S: DataStore>(store: &mut S) -> Result<()> {
    for vehicle in default_vehicles() {
        store.insert_vehicle(vehicle)?;
    }
    for customer in default_customers() {
        store.insert_customer(customer)?;
    }
    tracing::debug!(
        vehicles = store.vehicles().len(),
        customers = store.customers().len(),
        "catalog seeded"
    );
    Ok(())
}
