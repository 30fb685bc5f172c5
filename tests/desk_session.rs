#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rentz_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("rentz"));
    cmd.env("RENTZ_CONFIG_DIR", config_dir.path())
        .env_remove("RENTZ_LOG");
    cmd
}

#[test]
fn test_rent_return_and_rent_again() {
    let config = TempDir::new().unwrap();

    rentz_cmd(&config)
        .write_stdin("4\nC1\nV1\n3\n4\nC2\nV1\n1\n5\nv1\n4\nC2\nV1\n1\n6\nC2\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success! Mulugeta Daba rented Toyota Camry for 3 days.",
        ))
        .stdout(predicate::str::contains("Total Cost: ETB 1500.00 (Transaction T1)"))
        .stdout(predicate::str::contains("Error: Toyota Camry is currently unavailable"))
        .stdout(predicate::str::contains(
            "Vehicle Toyota Camry (ID: V1) has been successfully returned.",
        ))
        .stdout(predicate::str::contains(
            "Success! Samuel Fayisa rented Toyota Camry for 1 days.",
        ))
        .stdout(predicate::str::contains(
            "  Transaction T1: Toyota Camry for 1 days | Cost: ETB 500.00",
        ))
        .stdout(predicate::str::ends_with("Exiting the system. Goodbye!\n"));
}

#[test]
fn test_available_listing_hides_rented_vehicles() {
    let config = TempDir::new().unwrap();

    rentz_cmd(&config)
        .write_stdin("4\nC1\nV2\n4\n1\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Cost: ETB 540.00"))
        .stdout(predicate::str::contains("--- Available Vehicles ---"))
        .stdout(predicate::str::contains("Toyota Camry"))
        .stdout(predicate::str::contains("ID: V2 ").not());
}

#[test]
fn test_truck_pricing_and_new_customer() {
    let config = TempDir::new().unwrap();

    rentz_cmd(&config)
        .write_stdin("2\nHana Tesfaye\n0922\nAdama\nG777\n4\nc3\nv3\n2\n3\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully added new customer: Hana Tesfaye with ID: C3",
        ))
        .stdout(predicate::str::contains("Total Cost: ETB 2025.00"))
        .stdout(predicate::str::contains(
            "ID: C3 | Name: Hana Tesfaye | Phone: 0922 | Address: Adama | GovID: G777",
        ));
}

#[test]
fn test_invalid_input_keeps_the_loop_running() {
    let config = TempDir::new().unwrap();

    rentz_cmd(&config)
        .write_stdin("x\n99\n4\nC1\nV1\n0\n4\nC1\nV1\nten\n6\nC42\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter a number between 1 and 8."))
        .stdout(predicate::str::contains("Invalid choice. Please select a valid option."))
        .stdout(predicate::str::contains("Error: Rental days must be greater than zero (got 0)"))
        .stdout(predicate::str::contains(
            "Invalid number format for days. Please enter a valid integer.",
        ))
        .stdout(predicate::str::contains("Error: Customer not found: C42"));
}

#[test]
fn test_empty_flag_starts_without_catalog() {
    let config = TempDir::new().unwrap();

    rentz_cmd(&config)
        .args(["--empty"])
        .write_stdin("1\n3\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No vehicles currently available."))
        .stdout(predicate::str::contains("No customers registered."));
}

#[test]
fn test_fleet_json_flattens_category() {
    let config = TempDir::new().unwrap();

    rentz_cmd(&config)
        .args(["fleet", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "V3""#))
        .stdout(predicate::str::contains(r#""category": "truck""#))
        .stdout(predicate::str::contains(r#""load_capacity_tons": 2.5"#));
}

#[test]
fn test_quote_and_quote_errors() {
    let config = TempDir::new().unwrap();

    rentz_cmd(&config)
        .args(["quote", "v2", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mountain Bike (Bike) for 4 days: ETB 540.00"));

    rentz_cmd(&config)
        .args(["quote", "V1", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rental days must be greater than zero"));

    rentz_cmd(&config)
        .args(["quote", "V99", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vehicle not found: V99"));
}

#[test]
fn test_config_currency_changes_rendering() {
    let config = TempDir::new().unwrap();

    rentz_cmd(&config)
        .args(["config", "currency", "usd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("currency set to USD"));

    rentz_cmd(&config)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("currency = USD"))
        .stdout(predicate::str::contains("seed-catalog = true"));

    rentz_cmd(&config)
        .args(["quote", "V1", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD 1500.00"));
}

#[test]
fn test_config_can_disable_seeding() {
    let config = TempDir::new().unwrap();

    rentz_cmd(&config)
        .args(["config", "seed-catalog", "false"])
        .assert()
        .success();

    rentz_cmd(&config)
        .args(["fleet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vehicles in the fleet."));
}

#[test]
fn test_fleet_lists_every_vehicle_with_status() {
    let config = TempDir::new().unwrap();

    rentz_cmd(&config)
        .args(["fleet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Fleet ---"))
        .stdout(predicate::str::contains("ID: V10 "))
        .stdout(predicate::str::contains("| available"));

    rentz_cmd(&config)
        .args(["fleet", "--all"])
        .assert()
        .failure();
}
