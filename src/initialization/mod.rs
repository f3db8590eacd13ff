//! Resource setup for lookups and the CLI.
//!
//! - HTTP client (user agent, optional timeout)
//! - Logger (plain or JSON)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
