//! Acceptance policy for raw responses.
//!
//! # Design
//! Two independent checks run against the response head, status before
//! content type, first failure wins. The ordering is part of the contract:
//! it decides which reason (and which fallback code) a doubly-bad response
//! reports. A missing head is itself a failure, since neither check can be
//! evaluated.

use std::fmt;

use crate::error::code;
use crate::transport::ResponseHead;

/// The only MIME type the adapter accepts. Exact match, no parameters.
pub const EXPECTED_MIME: &str = "application/json";

/// Why a response was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// No response head came back at all.
    MissingResponse,

    /// Status code outside `[200, 300)`.
    UnacceptableStatus { status: u16 },

    /// MIME type other than [`EXPECTED_MIME`], or absent.
    UnacceptableContentType { found: Option<String> },
}

impl ValidationFailure {
    /// The negative code reported through the numeric channel when there is
    /// no body to surface and the transport supplied no code of its own.
    pub fn fallback_code(&self) -> i64 {
        match self {
            ValidationFailure::MissingResponse => code::MALFORMED_RESPONSE,
            ValidationFailure::UnacceptableStatus { .. } => code::UNACCEPTABLE_STATUS,
            ValidationFailure::UnacceptableContentType { .. } => code::UNACCEPTABLE_CONTENT_TYPE,
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::MissingResponse => write!(f, "no response head"),
            ValidationFailure::UnacceptableStatus { status } => {
                write!(f, "unacceptable status {status}")
            }
            ValidationFailure::UnacceptableContentType { found: Some(mime) } => {
                write!(f, "unacceptable content type {mime:?}")
            }
            ValidationFailure::UnacceptableContentType { found: None } => {
                write!(f, "content type missing")
            }
        }
    }
}

/// Apply the acceptance policy to a response head.
///
/// Status check first, then content type; the first failing check is the one
/// reported.
pub fn validate(head: Option<&ResponseHead>) -> Result<(), ValidationFailure> {
    let head = head.ok_or(ValidationFailure::MissingResponse)?;
    if !(200..300).contains(&head.status) {
        return Err(ValidationFailure::UnacceptableStatus { status: head.status });
    }
    if head.mime_type.as_deref() != Some(EXPECTED_MIME) {
        return Err(ValidationFailure::UnacceptableContentType {
            found: head.mime_type.clone(),
        });
    }
    Ok(())
}
