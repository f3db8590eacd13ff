//! Error handling.
//!
//! This module provides:
//! - Error type definitions for lookups and initialization
//! - Error kinds callers can match on
//! - Transport failure categorization for diagnostics
//!
//! Lookup errors fall into three kinds:
//! - **InvalidFormat**: the service rejected the address (usage error)
//! - **Transport**: the request could not be completed
//! - **Decode**: the response was not the expected JSON

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_transport_error};
pub use types::{ErrorKind, InitializationError, LookupError, TransportError, TransportFailure};
