//! Heatlens Core - Domain models, registry, and configuration
//!
//! This crate contains the core domain logic and port definitions for the
//! heatlens map-explorer engine.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
pub mod registry;

pub use error::{HeatlensError, Result};
