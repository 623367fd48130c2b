//! Configuration management for the Elasticsearch indices client.
//!
//! This crate provides types and loaders for managing cluster connection
//! configuration from environment variables and `.env` files.

pub mod constants;
mod error;
mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use types::{AuthStrategy, Config, ConnectionConfig};
