pub mod actions;
pub mod configuration;
pub mod connectors;
pub mod models;
pub mod retention;
