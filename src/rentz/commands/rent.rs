use crate::commands::{CmdMessage, CmdResult, RentalReceipt};
use crate::error::{RentalError, Result};
use crate::model::RentalTransaction;
use crate::store::DataStore;
use chrono::Utc;

use super::helpers::{checked_cost, find_customer, find_vehicle, validate_days};

/// Rents a vehicle to a customer.
///
/// Checks run in a fixed order: both ids must resolve, the vehicle must be
/// available, then the day count must be positive and the cost finite. Nothing
/// is written until every check passes, so a failed rental leaves the store
/// untouched.
pub fn run<S: DataStore>(
    store: &mut S,
    customer_id: &str,
    vehicle_id: &str,
    days: i64,
) -> Result<CmdResult> {
    let customer = find_customer(store, customer_id);
    let vehicle = find_vehicle(store, vehicle_id);
    let (customer, vehicle) = match (customer, vehicle) {
        (Ok(c), Ok(v)) => (c, v),
        (Err(e), _) | (_, Err(e)) => return Err(e),
    };

    if !vehicle.is_available() {
        return Err(RentalError::Unavailable {
            model: vehicle.model.clone(),
        });
    }
    let days = validate_days(days)?;

    let total_cost = checked_cost(vehicle, days)?;
    let receipt = RentalReceipt {
        transaction_id: customer.next_transaction_id(),
        customer_id: customer.id().to_string(),
        customer_name: customer.name.clone(),
        vehicle_id: vehicle.id().to_string(),
        vehicle_model: vehicle.model.clone(),
        days,
        total_cost,
    };
    let transaction = RentalTransaction {
        id: receipt.transaction_id.clone(),
        vehicle_id: receipt.vehicle_id.clone(),
        vehicle_model: receipt.vehicle_model.clone(),
        days,
        total_cost,
        rented_at: Utc::now(),
    };

    let vehicle = store
        .vehicle_mut(&receipt.vehicle_id)
        .ok_or_else(|| RentalError::vehicle_not_found(vehicle_id))?;
    vehicle.available = false;
    let rented = vehicle.clone();

    store
        .customer_mut(&receipt.customer_id)
        .ok_or_else(|| RentalError::customer_not_found(customer_id))?
        .record(transaction.clone());

    tracing::info!(
        customer = %receipt.customer_id,
        vehicle = %receipt.vehicle_id,
        days,
        cost = total_cost,
        transaction = %receipt.transaction_id,
        "vehicle rented"
    );

    let mut result = CmdResult::default().with_transactions(vec![transaction]);
    result.add_message(CmdMessage::success(format!(
        "Success! {} rented {} for {} days.",
        receipt.customer_name, receipt.vehicle_model, days
    )));
    result.affected_vehicles.push(rented);
    result.receipt = Some(receipt);
    Ok(result)
}
