//! Route and raw-response types plus the transport seam.
//!
//! # Design
//! Requests and responses are plain data. The core never opens a socket;
//! executing a [`RouteDescriptor`] is the job of whatever implements
//! [`Transport`] — a real network stack in production, an in-memory fake in
//! tests. The trait deliberately carries no retry, timeout or cancellation
//! policy; those belong to the implementation.
//!
//! All fields use owned types (`String`, `Bytes`) so values can cross thread
//! and FFI boundaries without lifetime concerns, and the value types derive
//! serde so fixtures and test vectors can express them as JSON.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;

/// HTTP method for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// A caller-built description of one HTTP request.
///
/// The caller has already encoded headers and body; the client consumes the
/// descriptor as an opaque value and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub method: Method,
    pub url: String,
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    #[serde(default)]
    pub body: Option<Bytes>,
}

/// Status-line metadata exposed by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHead {
    pub status: u16,
    /// Bare MIME type with parameters already stripped by the transport
    /// (`application/json`, never `application/json; charset=utf-8`).
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Everything executing a route produced, before any interpretation.
///
/// Any combination of fields may be absent; [`crate::resolve`] decides what
/// reaches the caller. A body that is present but empty (`Some(Bytes::new())`)
/// is distinct from a body the transport never produced (`None`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawResponse {
    #[serde(default)]
    pub error: Option<TransportError>,
    #[serde(default)]
    pub head: Option<ResponseHead>,
    #[serde(default)]
    pub body: Option<Bytes>,
}

/// Capability interface for executing routes.
///
/// Implementations guarantee that `execute` yields exactly one `RawResponse`
/// per accepted route, on whatever thread suits them. The adapter imposes no
/// ordering across concurrent calls.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, route: &RouteDescriptor) -> RawResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Method::Get).unwrap(), r#""GET""#);
        assert_eq!(serde_json::to_string(&Method::Patch).unwrap(), r#""PATCH""#);
    }

    #[test]
    fn route_deserializes_with_defaults() {
        let route: RouteDescriptor =
            serde_json::from_str(r#"{"method":"GET","url":"http://localhost/json"}"#).unwrap();
        assert_eq!(route.method, Method::Get);
        assert_eq!(route.url, "http://localhost/json");
        assert!(route.headers.is_empty());
        assert!(route.body.is_none());
    }

    #[test]
    fn raw_response_deserializes_body_from_string() {
        let raw: RawResponse = serde_json::from_str(
            r#"{"head":{"status":200,"mime_type":"application/json"},"body":"{}"}"#,
        )
        .unwrap();
        assert_eq!(raw.head.unwrap().status, 200);
        assert_eq!(raw.body.unwrap().as_ref(), b"{}");
        assert!(raw.error.is_none());
    }

    #[test]
    fn empty_raw_response_is_all_absent() {
        let raw = RawResponse::default();
        assert!(raw.error.is_none() && raw.head.is_none() && raw.body.is_none());
    }
}
