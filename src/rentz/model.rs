use crate::pricing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Bike,
    Truck { load_capacity_tons: f64 },
}

impl VehicleKind {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Bike => "Bike",
            VehicleKind::Truck { .. } => "Truck",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: String,
    pub model: String,
    pub base_rate: f64,
    pub(crate) available: bool,
    #[serde(flatten)]
    pub kind: VehicleKind,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        base_rate: f64,
        kind: VehicleKind,
    ) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            base_rate,
            available: true,
            kind,
        }
    }

    pub fn car(id: impl Into<String>, model: impl Into<String>, base_rate: f64) -> Self {
        Self::new(id, model, base_rate, VehicleKind::Car)
    }

    pub fn bike(id: impl Into<String>, model: impl Into<String>, base_rate: f64) -> Self {
        Self::new(id, model, base_rate, VehicleKind::Bike)
    }

    pub fn truck(
        id: impl Into<String>,
        model: impl Into<String>,
        base_rate: f64,
        load_capacity_tons: f64,
    ) -> Self {
        Self::new(id, model, base_rate, VehicleKind::Truck { load_capacity_tons })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn calculate_cost(&self, days: u32) -> f64 {
        pricing::rental_cost(&self.kind, self.base_rate, days)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [ID: {}]", self.model, self.id)
    }
}

/// One completed rental. Never modified after it is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalTransaction {
    pub id: String,
    pub vehicle_id: String,
    pub vehicle_model: String,
    pub days: u32,
    pub total_cost: f64,
    pub rented_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub gov_id: String,
    history: Vec<RentalTransaction>,
}

impl Customer {
    pub fn new(id: impl Into<String>, details: NewCustomer) -> Self {
        Self {
            id: id.into(),
            name: details.name,
            phone: details.phone,
            address: details.address,
            gov_id: details.gov_id,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Transactions in the order they were recorded.
    pub fn history(&self) -> &[RentalTransaction] {
        &self.history
    }

    /// Transaction ids are sequential per customer: `T1`, `T2`, ...
    pub fn next_transaction_id(&self) -> String {
        format!("T{}", self.history.len() + 1)
    }

    pub(crate) fn record(&mut self, transaction: RentalTransaction) {
        self.history.push(transaction);
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Phone: {} | Address: {} | GovID: {}",
            self.id, self.name, self.phone, self.address, self.gov_id
        )
    }
}

/// Registration details collected before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub gov_id: String,
}

impl NewCustomer {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        gov_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            gov_id: gov_id.into(),
        }
    }
}

/// A vehicle to add to the fleet. When `id` is `None` the registry assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVehicle {
    pub id: Option<String>,
    pub model: String,
    pub base_rate: f64,
    pub kind: VehicleKind,
}

impl NewVehicle {
    pub fn new(model: impl Into<String>, base_rate: f64, kind: VehicleKind) -> Self {
        Self {
            id: None,
            model: model.into(),
            base_rate,
            kind,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Identifiers are matched ignoring case (`v1` finds `V1`).
pub fn ids_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
