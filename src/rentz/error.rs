use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },

    #[error("{model} is currently unavailable")]
    Unavailable { model: String },

    #[error("Vehicle {model} was not marked as rented")]
    NotRented { model: String },

    #[error("Rental days must be greater than zero (got {0})")]
    InvalidDuration(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RentalError {
    pub fn customer_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            what: "Customer",
            id: id.into(),
        }
    }

    pub fn vehicle_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            what: "Vehicle",
            id: id.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RentalError>;
