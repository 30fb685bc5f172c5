use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RentalError, Result};
use crate::model::{ids_match, Customer, NewCustomer};
use crate::store::DataStore;

use super::helpers::next_sequential_id;

/// Registers a customer under the next `C{n}` id.
pub fn register<S: DataStore>(store: &mut S, details: NewCustomer) -> Result<CmdResult> {
    let details = NewCustomer::new(
        details.name.trim(),
        details.phone.trim(),
        details.address.trim(),
        details.gov_id.trim(),
    );
    if details.name.is_empty() {
        return Err(RentalError::InvalidInput("Name cannot be empty".into()));
    }

    let existing = store.customers();
    let id = next_sequential_id("C", existing.len(), |candidate| {
        existing.iter().any(|c| ids_match(c.id(), candidate))
    });

    let customer = Customer::new(id, details);
    store.insert_customer(customer.clone())?;
    tracing::info!(customer = %customer.id(), "customer registered");

    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Successfully added new customer: {} with ID: {}",
        customer.name,
        customer.id()
    )));
    result.affected_customers.push(customer);
    Ok(result)
}

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.customers().is_empty() {
        result.add_message(CmdMessage::info("No customers registered."));
    }
    Ok(result.with_listed_customers(store.customers().to_vec()))
}
