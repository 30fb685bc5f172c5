//! # API Facade
//!
//! [`RentalApi`] is the registry: the single owner of every vehicle and
//! customer record and the single entry point for every operation, whichever
//! UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to the matching function in `commands/`
//! - **Owns** the store, so callers construct one registry value and pass it
//!   around instead of reaching for global state
//! - **Returns structured types** (`Result<CmdResult>`, or borrowed records
//!   for the lookups)
//!
//! It never prints and never formats amounts. That is the CLI's job.
//!
//! ## Exclusive access
//!
//! Every mutating method takes `&mut self`. The availability check and the
//! state change of a rent or return happen under the same exclusive borrow,
//! so a caller sharing a registry across threads has to wrap it in a lock,
//! and that lock then covers the whole check-then-write sequence.
//!
//! ## Testing Strategy
//!
//! API tests check dispatch and return shapes. Business rules are covered in
//! the command modules.

use crate::catalog;
use crate::commands;
use crate::error::Result;
use crate::model::{Customer, NewCustomer, NewVehicle, Vehicle};
use crate::store::DataStore;
use std::path::Path;

pub struct RentalApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> RentalApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// A registry preloaded with the default fleet and customers.
    pub fn with_catalog(mut store: S) -> Result<Self> {
        catalog::seed(&mut store)?;
        Ok(Self { store })
    }

    pub fn rent_vehicle(
        &mut self,
        customer_id: &str,
        vehicle_id: &str,
        days: i64,
    ) -> Result<commands::CmdResult> {
        commands::rent::run(&mut self.store, customer_id, vehicle_id, days)
    }

    pub fn return_vehicle(&mut self, vehicle_id: &str) -> Result<commands::CmdResult> {
        commands::returns::run(&mut self.store, vehicle_id)
    }

    pub fn quote(&self, vehicle_id: &str, days: i64) -> Result<commands::CmdResult> {
        commands::quote::run(&self.store, vehicle_id, days)
    }

    pub fn add_vehicle(&mut self, vehicle: NewVehicle) -> Result<commands::CmdResult> {
        commands::vehicles::add(&mut self.store, vehicle)
    }

    pub fn register_customer(&mut self, details: NewCustomer) -> Result<commands::CmdResult> {
        commands::customers::register(&mut self.store, details)
    }

    pub fn list_available_vehicles(&self) -> Result<commands::CmdResult> {
        commands::vehicles::list_available(&self.store)
    }

    pub fn list_vehicles(&self) -> Result<commands::CmdResult> {
        commands::vehicles::list_all(&self.store)
    }

    pub fn list_customers(&self) -> Result<commands::CmdResult> {
        commands::customers::list(&self.store)
    }

    pub fn customer_history(&self, customer_id: &str) -> Result<commands::CmdResult> {
        commands::history::run(&self.store, customer_id)
    }

    /// Lazily walks the available vehicles. Clone the iterator to restart it.
    pub fn available_vehicles(&self) -> impl Iterator<Item = &Vehicle> + Clone + '_ {
        commands::vehicles::available(&self.store)
    }

    pub fn find_vehicle(&self, id: &str) -> Result<&Vehicle> {
        commands::helpers::find_vehicle(&self.store, id)
    }

    pub fn find_customer(&self, id: &str) -> Result<&Customer> {
        commands::helpers::find_customer(&self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Configuration does not involve the registry, so it sits beside it.
pub fn configure(config_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(config_dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, Quote, RentalReceipt};
