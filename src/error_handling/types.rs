//! Error type definitions.
//!
//! This module defines the errors surfaced by lookups and by initialization.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure of the underlying request/response exchange.
///
/// `Io` exists for transports that are not backed by `reqwest`.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP client could not complete the request or read its body.
    #[error(transparent)]
    Http(#[from] ReqwestError),

    /// An I/O failure reported by a custom transport.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors returned by [`VendorResolver`](crate::VendorResolver) lookups.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The service did not recognize the supplied address.
    ///
    /// Shared by both the full and the name-only lookup.
    #[error("invalid mac format supported formats hex ':' bit '-' dot '.'")]
    InvalidMacFormat,

    /// The request could not be completed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The full-lookup body was not valid JSON.
    #[error("failed to decode vendor response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse classification of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input: the address was malformed or unknown
    InvalidFormat,
    /// Network, DNS, connection or body read failure
    Transport,
    /// Response body could not be decoded
    Decode,
}

impl ErrorKind {
    /// Stable human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "Invalid MAC format",
            ErrorKind::Transport => "Transport error",
            ErrorKind::Decode => "Decode error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LookupError {
    /// Returns the kind of this error, for callers that match on kind rather than call site.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::InvalidMacFormat => ErrorKind::InvalidFormat,
            LookupError::Transport(_) => ErrorKind::Transport,
            LookupError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// True when the caller supplied an address the service does not accept.
    ///
    /// Transport and decode failures are environmental; whether to retry them
    /// is up to the caller.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, LookupError::InvalidMacFormat)
    }
}

/// Categories of transport failure, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportFailure {
    /// Request could not be built (e.g. bad URL)
    Builder,
    /// Timed out
    Timeout,
    /// Connection could not be established
    Connect,
    /// Failed while sending the request
    Request,
    /// Failed while reading the body
    Body,
    /// I/O failure from a custom transport
    Io,
    /// Anything else
    Other,
}

impl TransportFailure {
    /// Stable human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportFailure::Builder => "HTTP request builder error",
            TransportFailure::Timeout => "HTTP request timeout error",
            TransportFailure::Connect => "HTTP request connect error",
            TransportFailure::Request => "HTTP request error",
            TransportFailure::Body => "HTTP request body error",
            TransportFailure::Io => "I/O error",
            TransportFailure::Other => "HTTP request other error",
        }
    }
}

impl std::fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
