//! Shared error and configuration types

pub mod config;
pub mod error;

pub use config::{BenchConfig, ClientConfig};
pub use error::{Error, Result};
