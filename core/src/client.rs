//! Request orchestration and result normalization.
//!
//! # Design
//! `ApiClient` owns one injected transport and nothing else; each `request`
//! call owns its own resolution path, so concurrent calls share no state.
//! The interesting logic lives in [`resolve`], a pure function implementing
//! the decision table below, which the C FFI surface reuses without going
//! through the async client.
//!
//! Resolution of a [`RawResponse`]:
//!
//! - validation fails, head and body both present → `(head.status, body)`;
//!   the real status surfaces even though the response was rejected
//! - validation fails, head or body missing → transport's platform code if
//!   it supplied one, else the failure's fallback code, with an empty body
//! - validation passes, head and body both present → `(head.status, body)`
//! - validation passes, head or body missing → transport code if any, else
//!   [`code::MALFORMED_RESPONSE`] — a terminal reply rather than leaving the
//!   caller waiting forever

use bytes::Bytes;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::code;
use crate::transport::{RawResponse, RouteDescriptor, Transport};
use crate::validate;

/// The normalized outcome every request resolves to.
///
/// `code` is either an HTTP status, a positive platform error code, or one of
/// the negative fallback codes in [`crate::error::code`]. Error replies carry
/// an empty body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub code: i64,
    #[serde(default)]
    pub body: Bytes,
}

/// Executes routes against an injected [`Transport`] and normalizes the
/// outcome.
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Execute `route` and resolve the outcome into exactly one [`Reply`].
    ///
    /// Never fails at the type level; every transport or validation failure
    /// is flattened into the reply's numeric code. The future may complete
    /// on a different thread than the one that started it.
    pub async fn request(&self, route: &RouteDescriptor) -> Reply {
        debug!("dispatching {:?} {}", route.method, route.url);
        let raw = self.transport.execute(route).await;
        resolve(raw)
    }
}

/// Collapse a [`RawResponse`] into the [`Reply`] the caller sees.
pub fn resolve(raw: RawResponse) -> Reply {
    match validate::validate(raw.head.as_ref()) {
        Ok(()) => match (raw.head, raw.body) {
            (Some(head), Some(body)) => {
                debug!("accepted response, status {}", head.status);
                Reply {
                    code: head.status.into(),
                    body,
                }
            }
            _ => {
                // Accepted head but nothing usable behind it. Resolving with
                // a terminal code upholds the one-reply-per-request
                // invariant.
                warn!("response accepted but head or body missing");
                let code = raw
                    .error
                    .map(|e| e.code)
                    .unwrap_or(code::MALFORMED_RESPONSE);
                Reply {
                    code,
                    body: Bytes::new(),
                }
            }
        },
        Err(failure) => {
            warn!("validation failed: {failure}");
            if let (Some(head), Some(body)) = (raw.head, raw.body) {
                // A rejected response that still has a body surfaces its real
                // status, so callers can tell an HTTP error with a payload
                // apart from a transport-level failure.
                Reply {
                    code: head.status.into(),
                    body,
                }
            } else {
                let code = raw
                    .error
                    .map(|e| e.code)
                    .unwrap_or_else(|| failure.fallback_code());
                Reply {
                    code,
                    body: Bytes::new(),
                }
            }
        }
    }
}
