//! # Storage Layer
//!
//! The [`DataStore`] trait is what the command layer sees of the registry's
//! records. Commands never touch a concrete container, so the same rules run
//! against any backend that keeps the two guarantees below.
//!
//! ## Guarantees
//!
//! - Vehicles and customers are unique by id, compared ignoring case. Inserting
//!   a clashing id fails with [`RentalError::DuplicateId`](crate::error::RentalError).
//! - Listing returns records in insertion order.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. Records live for the process
//!   lifetime and nothing is written to disk.
//!
//! Records are never removed, which is what keeps size-derived ids
//! (`C3`, `V11`) stable.

use crate::error::Result;
use crate::model::{Customer, Vehicle};

pub mod memory;

pub trait DataStore {
    /// All vehicles in insertion order.
    fn vehicles(&self) -> &[Vehicle];

    /// All customers in insertion order.
    fn customers(&self) -> &[Customer];

    /// Append a vehicle, rejecting an id that is already taken.
    fn insert_vehicle(&mut self, vehicle: Vehicle) -> Result<()>;

    /// Append a customer, rejecting an id that is already taken.
    fn insert_customer(&mut self, customer: Customer) -> Result<()>;

    fn vehicle_mut(&mut self, id: &str) -> Option<&mut Vehicle>;

    fn customer_mut(&mut self, id: &str) -> Option<&mut Customer>;
}
