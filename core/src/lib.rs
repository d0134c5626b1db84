//! Thin request/validate/complete adapter over an injected HTTP transport.
//!
//! # Overview
//! Takes a caller-built [`RouteDescriptor`], hands it to a [`Transport`]
//! capability for execution, validates the [`RawResponse`] that comes back
//! (status in `[200, 300)`, MIME type exactly `application/json`), and
//! collapses the outcome into a [`Reply`] of `(code, body bytes)`. Connection
//! handling, TLS, retries and redirects all live behind the transport seam
//! and are none of this crate's business.
//!
//! # Design
//! - `ApiClient` is stateless — it holds only the transport, fixed at
//!   construction and never reassigned.
//! - The transport is a trait, so orchestration is tested against in-memory
//!   fakes and any conforming implementation is interchangeable.
//! - Collapsing a `RawResponse` into a `Reply` is a pure function
//!   ([`resolve`]), shared by the async client and the C FFI surface.
//! - Failure travels only through the numeric code channel. A rejected
//!   response that still carries a body surfaces its real status code, so
//!   callers can tell "HTTP error with body" apart from "transport failure".
//!   Adapter-level fallback codes are negative ([`error::code`]) and never
//!   collide with HTTP statuses or OS error numbers.

pub mod client;
pub mod error;
pub mod transport;
pub mod validate;

pub use client::{resolve, ApiClient, Reply};
pub use error::TransportError;
pub use transport::{Method, RawResponse, ResponseHead, RouteDescriptor, Transport};
pub use validate::ValidationFailure;
