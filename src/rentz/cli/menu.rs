//! The interactive rental desk.
//!
//! Reads one menu choice per line, prompts for the arguments the choice needs,
//! calls the matching [`RentalApi`] operation and renders the outcome. Errors
//! from the library are printed and the loop asks again; only I/O failures on
//! the terminal itself end the session early. End of input exits cleanly.

use super::render::{
    render_available_vehicles, render_customers, render_error, render_history, render_messages,
    render_receipt, SEPARATOR,
};
use colored::Colorize;
use rentz::api::{CmdResult, RentalApi};
use rentz::error::{RentalError, Result};
use rentz::model::{NewCustomer, NewVehicle, VehicleKind};
use rentz::store::DataStore;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowAvailable,
    AddCustomer,
    ShowCustomers,
    Rent,
    Return,
    History,
    AddVehicle,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::ShowAvailable,
        MenuChoice::AddCustomer,
        MenuChoice::ShowCustomers,
        MenuChoice::Rent,
        MenuChoice::Return,
        MenuChoice::History,
        MenuChoice::AddVehicle,
        MenuChoice::Exit,
    ];

    pub fn from_number(n: i64) -> Option<Self> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ShowAvailable => "Display Available Vehicles",
            MenuChoice::AddCustomer => "Add New Customer",
            MenuChoice::ShowCustomers => "Display All Customers",
            MenuChoice::Rent => "Rent a Vehicle",
            MenuChoice::Return => "Return a Vehicle",
            MenuChoice::History => "View Customer History",
            MenuChoice::AddVehicle => "Add New Vehicle",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub struct Session<'a, S: DataStore, R, W> {
    api: &'a mut RentalApi<S>,
    currency: &'a str,
    input: R,
    output: W,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Session<'a, S, R, W> {
    pub fn new(api: &'a mut RentalApi<S>, currency: &'a str, input: R, output: W) -> Self {
        Self {
            api,
            currency,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                return self.goodbye();
            };

            let choice = match line.parse::<i64>() {
                Ok(n) => n,
                Err(_) => {
                    let max = MenuChoice::ALL.len();
                    self.say_error(&format!(
                        "Invalid input. Please enter a number between 1 and {max}."
                    ))?;
                    continue;
                }
            };

            let outcome = match MenuChoice::from_number(choice) {
                Some(MenuChoice::Exit) => return self.goodbye(),
                Some(choice) => self.dispatch(choice)?,
                None => {
                    self.say_error("Invalid choice. Please select a valid option.")?;
                    continue;
                }
            };
            if outcome == Flow::EndOfInput {
                writeln!(self.output)?;
                return self.goodbye();
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}\n", SEPARATOR)?;
        writeln!(self.output, "Welcome to the Vehicle Rental System CLI")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    fn goodbye(&mut self) -> Result<()> {
        writeln!(self.output, "Exiting the system. Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `label` and reads one trimmed line. `None` means input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Input-layer rejections use their own wording rather than `RentalError`'s.
    fn say_error(&mut self, message: &str) -> Result<()> {
        tracing::debug!(message, "rejected menu input");
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::ShowAvailable => {
                let result = self.api.list_available_vehicles();
                self.show(result, |r, currency| {
                    render_available_vehicles(&r.listed_vehicles, currency)
                })?;
            }
            MenuChoice::AddCustomer => return self.add_customer(),
            MenuChoice::ShowCustomers => {
                let result = self.api.list_customers();
                self.show(result, |r, _| render_customers(&r.listed_customers))?;
            }
            MenuChoice::Rent => return self.rent(),
            MenuChoice::Return => {
                let Some(vehicle_id) = self.prompt("Enter Vehicle ID to return: ")? else {
                    return Ok(Flow::EndOfInput);
                };
                let result = self.api.return_vehicle(&vehicle_id);
                self.show(result, |_, _| String::new())?;
            }
            MenuChoice::History => {
                let Some(customer_id) = self.prompt("Enter Customer ID to view history: ")? else {
                    return Ok(Flow::EndOfInput);
                };
                let result = self.api.customer_history(&customer_id);
                self.show(result, |r, currency| match r.listed_customers.first() {
                    Some(customer) => render_history(customer, &r.transactions, currency),
                    None => String::new(),
                })?;
            }
            MenuChoice::AddVehicle => return self.add_vehicle(),
            MenuChoice::Exit => {}
        }
        Ok(Flow::Continue)
    }

    fn add_customer(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n--- Add New Customer ---")?;
        let mut fields = Vec::with_capacity(4);
        for label in [
            "Enter Name: ",
            "Enter Phone Number: ",
            "Enter Address: ",
            "Enter Government ID Number: ",
        ] {
            match self.prompt(label)? {
                Some(value) => fields.push(value),
                None => return Ok(Flow::EndOfInput),
            }
        }
        let [name, phone, address, gov_id]: [String; 4] = fields
            .try_into()
            .map_err(|_| RentalError::InvalidInput("incomplete customer details".into()))?;

        let result = self
            .api
            .register_customer(NewCustomer::new(name, phone, address, gov_id));
        self.show(result, |_, _| String::new())?;
        Ok(Flow::Continue)
    }

    fn rent(&mut self) -> Result<Flow> {
        let Some(customer_id) = self.prompt("Enter Customer ID: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(vehicle_id) = self.prompt("Enter Vehicle ID: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(days) = self.prompt("Enter number of rental days: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Ok(days) = days.parse::<i64>() else {
            self.say_error("Invalid number format for days. Please enter a valid integer.")?;
            return Ok(Flow::Continue);
        };

        let result = self.api.rent_vehicle(&customer_id, &vehicle_id, days);
        self.show(result, |r, currency| match &r.receipt {
            Some(receipt) => render_receipt(receipt, currency),
            None => String::new(),
        })?;
        Ok(Flow::Continue)
    }

    fn add_vehicle(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n--- Add New Vehicle ---")?;
        let Some(category) = self.prompt("Enter Vehicle Type (car/bike/truck): ")? else {
            return Ok(Flow::EndOfInput);
        };
        let category = category.to_lowercase();
        if !matches!(category.as_str(), "car" | "bike" | "truck") {
            self.say_error("Invalid vehicle type. Please enter car, bike or truck.")?;
            return Ok(Flow::Continue);
        }
        let Some(model) = self.prompt("Enter Model: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(rate) = self.prompt("Enter Daily Rate: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Ok(base_rate) = rate.parse::<f64>() else {
            self.say_error("Invalid number format for rate. Please enter a valid number.")?;
            return Ok(Flow::Continue);
        };

        let kind = match category.as_str() {
            "car" => VehicleKind::Car,
            "bike" => VehicleKind::Bike,
            _ => {
                let Some(tons) = self.prompt("Enter Load Capacity (tons): ")? else {
                    return Ok(Flow::EndOfInput);
                };
                let Ok(load_capacity_tons) = tons.parse::<f64>() else {
                    self.say_error(
                        "Invalid number format for capacity. Please enter a valid number.",
                    )?;
                    return Ok(Flow::Continue);
                };
                VehicleKind::Truck { load_capacity_tons }
            }
        };

        let result = self.api.add_vehicle(NewVehicle::new(model, base_rate, kind));
        self.show(result, |_, _| String::new())?;
        Ok(Flow::Continue)
    }

    /// Writes either the rendered result followed by its messages, or the error.
    fn show(
        &mut self,
        result: Result<CmdResult>,
        body: impl FnOnce(&CmdResult, &str) -> String,
    ) -> Result<()> {
        match result {
            Ok(result) => {
                write!(self.output, "{}", body(&result, self.currency))?;
                write!(self.output, "{}", render_messages(&result.messages))?;
            }
            Err(err) => {
                tracing::debug!(error = %err, "operation failed");
                write!(self.output, "{}", render_error(&err))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    EndOfInput,
}
