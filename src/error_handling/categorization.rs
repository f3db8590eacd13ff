//! Transport error categorization.

use super::types::{TransportError, TransportFailure};

/// Categorizes a `reqwest::Error` into a `TransportFailure`.
///
/// Checks are ordered from most to least specific: a timeout while
/// connecting is reported as a timeout.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportFailure {
    if error.is_builder() {
        TransportFailure::Builder
    } else if error.is_timeout() {
        TransportFailure::Timeout
    } else if error.is_connect() {
        TransportFailure::Connect
    } else if error.is_request() {
        TransportFailure::Request
    } else if error.is_body() || error.is_decode() {
        TransportFailure::Body
    } else {
        TransportFailure::Other
    }
}

/// Categorizes any `TransportError`.
pub fn categorize_transport_error(error: &TransportError) -> TransportFailure {
    match error {
        TransportError::Http(e) => categorize_reqwest_error(e),
        TransportError::Io(e) if e.kind() == std::io::ErrorKind::TimedOut => {
            TransportFailure::Timeout
        }
        TransportError::Io(e)
            if matches!(
                e.kind(),
                std::io::ErrorKind::ConnectionRefused | std::io::ErrorKind::ConnectionReset
            ) =>
        {
            TransportFailure::Connect
        }
        TransportError::Io(_) => TransportFailure::Io,
    }
}
