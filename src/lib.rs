pub mod config;
pub mod error;

// Data sources
pub mod dataset;
pub mod online;
pub mod recipe;

// Matching and pagination
pub mod search;

// HTTP surface
pub mod api;
pub mod web;

// Command-line interface
pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
