//! Transport errors and the numeric fallback-code namespace.
//!
//! # Design
//! Nothing typed ever reaches the caller of `request`; every failure is
//! flattened into the `(code, bytes)` reply so any consumer — including one
//! on the far side of an FFI boundary — can interpret it without exception
//! machinery. `TransportError` exists for the transport to report its
//! platform code and for logging context inside the adapter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A failure reported by the transport itself: the route was accepted but no
/// usable response came back (connection refused, DNS failure, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportError {
    /// Numeric platform code (errno, URL-loading subsystem code, ...).
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "transport error (code {})", self.code)
        } else {
            write!(f, "transport error (code {}): {}", self.code, self.message)
        }
    }
}

impl std::error::Error for TransportError {}

/// Adapter-level fallback codes, reported when no platform code is available.
///
/// Negative on purpose: HTTP status codes and OS error numbers are positive,
/// so a caller can always tell which namespace a reply code came from.
pub mod code {
    /// The transport failed without supplying a platform code.
    pub const TRANSPORT: i64 = -1;

    /// Status outside `[200, 300)` and no body available to surface.
    pub const UNACCEPTABLE_STATUS: i64 = -2;

    /// MIME type was not `application/json` and no body available to surface.
    pub const UNACCEPTABLE_CONTENT_TYPE: i64 = -3;

    /// The response passed validation but its head or body was absent, or
    /// nothing at all came back. Terminal stand-in for what would otherwise
    /// leave the caller waiting forever.
    pub const MALFORMED_RESPONSE: i64 = -4;
}
