//! # Rentz Architecture
//!
//! Rentz is a vehicle rental desk: a fleet of cars, bikes and trucks, a list of
//! registered customers, and the rent/return transactions between them. All of
//! it lives in memory for the lifetime of the process.
//!
//! The library holds every rule. The `rentz` binary is one client of it: a
//! menu-driven console that collects input and renders what the library returns.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, argument parsing, rendering          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - RentalApi: the registry value the caller owns            │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Rent, return, quote, listings, registration, history     │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Failures come back as [`error::RentalError`] values; nothing in the
//! core is fatal, and the menu simply reports the error and asks again.
//!
//! ## Module Overview
//!
//! - [`api`]: The registry facade, entry point for all operations
//! - [`commands`]: Business rules for each operation
//! - [`store`]: Storage abstraction and the in-memory backend
//! - [`model`]: Vehicles, customers and rental transactions
//! - [`pricing`]: Per-category cost formulas
//! - [`catalog`]: The default fleet and customer list
//! - [`config`]: Desk settings (currency label, seeding)
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod pricing;
pub mod store;
