use crate::config::RentalConfig;
use crate::model::{Customer, RentalTransaction, Vehicle};

pub mod config;
pub mod customers;
pub mod helpers;
pub mod history;
pub mod quote;
pub mod rent;
pub mod returns;
pub mod vehicles;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a successful rental.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalReceipt {
    pub transaction_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub vehicle_id: String,
    pub vehicle_model: String,
    pub days: u32,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub vehicle: Vehicle,
    pub days: u32,
    pub total_cost: f64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_vehicles: Vec<Vehicle>,
    pub listed_vehicles: Vec<Vehicle>,
    pub affected_customers: Vec<Customer>,
    pub listed_customers: Vec<Customer>,
    pub transactions: Vec<RentalTransaction>,
    pub receipt: Option<RentalReceipt>,
    pub quote: Option<Quote>,
    pub config: Option<RentalConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_vehicles(mut self, vehicles: Vec<Vehicle>) -> Self {
        self.listed_vehicles = vehicles;
        self
    }

    pub fn with_listed_customers(mut self, customers: Vec<Customer>) -> Self {
        self.listed_customers = customers;
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<RentalTransaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_config(mut self, config: RentalConfig) -> Self {
        self.config = Some(config);
        self
    }
}
