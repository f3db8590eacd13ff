//! Library configuration and constants.
//!
//! This module provides:
//! - Remote service constants (endpoints, header values, body sentinels)
//! - The [`Config`] struct and the logging option enums shared with the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
