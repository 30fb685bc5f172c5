use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::find_customer;

pub fn run<S: DataStore>(store: &S, customer_id: &str) -> Result<CmdResult> {
    let customer = find_customer(store, customer_id)?;
    tracing::debug!(
        customer = %customer.id(),
        rentals = customer.history().len(),
        "history lookup"
    );

    let mut result = CmdResult::default().with_transactions(customer.history().to_vec());
    if customer.history().is_empty() {
        result.add_message(CmdMessage::info("No rentals found."));
    }
    result.listed_customers.push(customer.clone());
    Ok(result)
}
