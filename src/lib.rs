//! macvendors library: MAC address vendor lookups via macvendors.co
//!
//! Resolves a hardware address to the organization its block is registered
//! to, either as a full [`VendorRecord`] or as just the vendor name. Every
//! lookup is one live request; nothing is cached.
//!
//! # Example
//!
//! ```no_run
//! use macvendors::{LookupError, VendorResolver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = VendorResolver::new()?;
//!
//! let mac = resolver.lookup("28:18:78:6D:64:42").await?;
//! println!("{}", mac.address);
//! println!("{}", mac.company);
//! println!("{}", mac.country);
//! println!("{}", mac.block_type);
//! println!("{}", mac.mac_prefix);
//! println!("{}", mac.start_hex);
//! println!("{}", mac.end_hex);
//!
//! match resolver.name("xx").await {
//!     Ok(name) => println!("{}", name),
//!     Err(LookupError::InvalidMacFormat) => eprintln!("bad address"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async. Use `#[tokio::main]` in your application or call them
//! from within a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
pub mod transport;
mod vendor;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    categorize_reqwest_error, categorize_transport_error, ErrorKind, InitializationError,
    LookupError, TransportError, TransportFailure,
};
pub use transport::{HttpRequest, RawResponse, ReqwestTransport, Transport};
pub use vendor::{
    classify_lookup_body, classify_name_body, LookupResult, VendorRecord, VendorResolver,
};
