//! Startup wiring for example product seeding.

mod config;
mod startup;

pub use config::ExampleDataSettings;
pub use startup::seed_example_data_on_startup;
