use chrono::{DateTime, Utc};
use colored::Colorize;
use rentz::api::{CmdMessage, MessageLevel, Quote, RentalReceipt};
use rentz::error::RentalError;
use rentz::model::{Customer, RentalTransaction, Vehicle};
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

pub const SEPARATOR: &str = "------------------------------------------";

pub fn format_amount(currency: &str, amount: f64) -> String {
    format!("{} {:.2}", currency, amount)
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_error(err: &RentalError) -> String {
    format!("{}\n", format!("Error: {}", err).red())
}

/// Left-aligns `s` in a column `width` terminal cells wide.
fn pad(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

pub fn render_available_vehicles(vehicles: &[Vehicle], currency: &str) -> String {
    render_vehicle_table("--- Available Vehicles ---", vehicles, currency, false)
}

pub fn render_fleet(vehicles: &[Vehicle], currency: &str) -> String {
    render_vehicle_table("--- Fleet ---", vehicles, currency, true)
}

fn render_vehicle_table(
    heading: &str,
    vehicles: &[Vehicle],
    currency: &str,
    with_status: bool,
) -> String {
    let mut out = format!("{}\n", heading.bold());
    let id_width = column_width(vehicles.iter().map(|v| v.id()));
    let model_width = column_width(vehicles.iter().map(|v| v.model.as_str()));

    for v in vehicles {
        let mut line = format!(
            "ID: {} | {} {} - Rate: {}/day",
            pad(v.id(), id_width),
            pad(&v.model, model_width),
            pad(&format!("({})", v.kind), 7),
            format_amount(currency, v.base_rate),
        );
        if with_status {
            let status = if v.is_available() {
                "available".green()
            } else {
                "rented".yellow()
            };
            line.push_str(&format!(" | {}", status));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn render_customers(customers: &[Customer]) -> String {
    let mut out = format!("{}\n", "--- Registered Customers ---".bold());
    for c in customers {
        out.push_str(&format!("{}\n", c));
    }
    out
}

pub fn render_receipt(receipt: &RentalReceipt, currency: &str) -> String {
    format!(
        "Total Cost: {} (Transaction {})\n",
        format_amount(currency, receipt.total_cost).bold(),
        receipt.transaction_id
    )
}

pub fn render_quote(quote: &Quote, currency: &str) -> String {
    format!(
        "{} ({}) for {} days: {}\n",
        quote.vehicle.model,
        quote.vehicle.kind,
        quote.days,
        format_amount(currency, quote.total_cost).bold()
    )
}

pub fn render_history(
    customer: &Customer,
    transactions: &[RentalTransaction],
    currency: &str,
) -> String {
    let mut out = format!(
        "Rental History for {} (ID: {}):\n",
        customer.name.bold(),
        customer.id()
    );
    for t in transactions {
        out.push_str(&format!(
            "  Transaction {}: {} for {} days | Cost: {} | {}\n",
            t.id,
            t.vehicle_model,
            t.days,
            format_amount(currency, t.total_cost),
            format_time_ago(t.rented_at).dimmed()
        ));
    }
    out
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
