//! Configuration constants.
//!
//! Values that describe the macvendors.co contract. They are fixed by the
//! remote service and must match it byte for byte.

/// Base URL of the macvendors.co API.
///
/// Both endpoints hang off this prefix:
/// - full lookup: `{base}/{mac}/json`
/// - name lookup: `{base}/vendorname/{mac}`
pub const DEFAULT_API_BASE_URL: &str = "https://macvendors.co/api";

/// User-Agent sent with every request.
///
/// The service rejects requests that look like scripted clients, so this
/// mirrors what its own API browser sends.
pub const API_USER_AGENT: &str = "API Browser";

/// Plain-text body the name endpoint returns for an unrecognized address.
pub const INVALID_MAC_SENTINEL: &[u8] = b"Please provide mac address";

/// Marker whose presence anywhere in a full-lookup body means the lookup failed.
///
/// Matched as a raw byte substring before any JSON decoding.
pub const LOOKUP_ERROR_MARKER: &[u8] = b"error";
