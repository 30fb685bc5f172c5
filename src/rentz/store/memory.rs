use super::DataStore;
use crate::error::{RentalError, Result};
use crate::model::{ids_match, Customer, Vehicle};

/// Insertion-ordered, process-lifetime storage.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    vehicles: Vec<Vehicle>,
    customers: Vec<Customer>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    fn customers(&self) -> &[Customer] {
        &self.customers
    }

    fn insert_vehicle(&mut self, vehicle: Vehicle) -> Result<()> {
        if self.vehicles.iter().any(|v| ids_match(v.id(), vehicle.id())) {
            return Err(RentalError::DuplicateId(vehicle.id().to_string()));
        }
        self.vehicles.push(vehicle);
        Ok(())
    }

    fn insert_customer(&mut self, customer: Customer) -> Result<()> {
        if self
            .customers
            .iter()
            .any(|c| ids_match(c.id(), customer.id()))
        {
            return Err(RentalError::DuplicateId(customer.id().to_string()));
        }
        self.customers.push(customer);
        Ok(())
    }

    fn vehicle_mut(&mut self, id: &str) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| ids_match(v.id(), id))
    }

    fn customer_mut(&mut self, id: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| ids_match(c.id(), id))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NewCustomer;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_car(mut self, id: &str, model: &str, rate: f64) -> Self {
            self.store
                .insert_vehicle(Vehicle::car(id, model, rate))
                .unwrap();
            self
        }

        pub fn with_bike(mut self, id: &str, model: &str, rate: f64) -> Self {
            self.store
                .insert_vehicle(Vehicle::bike(id, model, rate))
                .unwrap();
            self
        }

        pub fn with_truck(mut self, id: &str, model: &str, rate: f64, tons: f64) -> Self {
            self.store
                .insert_vehicle(Vehicle::truck(id, model, rate, tons))
                .unwrap();
            self
        }

        pub fn with_rented_car(mut self, id: &str, model: &str, rate: f64) -> Self {
            let mut car = Vehicle::car(id, model, rate);
            car.available = false;
            self.store.insert_vehicle(car).unwrap();
            self
        }

        pub fn with_customer(mut self, id: &str, name: &str) -> Self {
            let details = NewCustomer::new(name, "0900000000", "Jimma JIT", format!("G-{id}"));
            self.store
                .insert_customer(Customer::new(id, details))
                .unwrap();
            self
        }

        /// The three vehicles and one customer used across command tests.
        pub fn standard() -> Self {
            Self::new()
                .with_car("V1", "Toyota Camry", 500.0)
                .with_bike("V2", "Mountain Bike", 150.0)
                .with_truck("V3", "Ford F-150", 1000.0, 2.5)
                .with_customer("C1", "Mulugeta Daba")
        }
    }
}
