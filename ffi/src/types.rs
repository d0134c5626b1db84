//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! The host side owns every pointer it passes in; this crate reads but never
//! frees caller memory. The only allocation that crosses the boundary is the
//! opaque [`FfiCall`] handle, created by `networking_request` and consumed by
//! `networking_call_complete`. Body bytes handed to the completion are only
//! valid for the duration of the callback; hosts that need them longer must
//! copy.

use std::ffi::CStr;
use std::os::raw::{c_char, c_void};

use bytes::Bytes;
use networking_core::{RawResponse, ResponseHead, TransportError};

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Patch = 3,
    Delete = 4,
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *const c_char,
    pub value: *const c_char,
}

/// A route described as C-compatible plain data.
///
/// Built by the caller, forwarded verbatim to the host transport hook. The
/// adapter treats it as opaque; `body == null` means no body, a non-null
/// `body` with `body_len == 0` means an empty one.
#[repr(C)]
pub struct FfiRoute {
    pub method: FfiMethod,
    pub url: *const c_char,
    pub headers: *const FfiHeader,
    pub headers_len: u32,
    pub body: *const u8,
    pub body_len: usize,
}

/// What the host transport produced for a route.
///
/// Constructed on the host's stack and passed to `networking_call_complete`;
/// read, never freed, by this crate. `mime_type` carries the bare MIME type
/// with parameters stripped, or null when the response had none. As with
/// routes, a null `body` is an absent body while a non-null empty one is
/// present-but-empty.
#[repr(C)]
pub struct FfiRawResponse {
    pub has_error: bool,
    pub error_code: i64,
    pub error_message: *const c_char,
    pub has_head: bool,
    pub status: u16,
    pub mime_type: *const c_char,
    pub body: *const u8,
    pub body_len: usize,
}

impl FfiRawResponse {
    /// Convert to the core representation, copying everything out of the
    /// host's memory.
    ///
    /// # Safety
    /// All non-null pointers must be valid for the advertised lengths and
    /// any C strings NUL-terminated.
    pub(crate) unsafe fn to_core(&self) -> RawResponse {
        let error = if self.has_error {
            Some(TransportError {
                code: self.error_code,
                message: opt_string(self.error_message).unwrap_or_default(),
            })
        } else {
            None
        };
        let head = if self.has_head {
            Some(ResponseHead {
                status: self.status,
                mime_type: opt_string(self.mime_type),
            })
        } else {
            None
        };
        let body = if self.body.is_null() {
            None
        } else {
            Some(Bytes::copy_from_slice(std::slice::from_raw_parts(
                self.body,
                self.body_len,
            )))
        };
        RawResponse { error, head, body }
    }
}

unsafe fn opt_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

/// Host-side transport hook: execute `route` and complete `call` via
/// `networking_call_complete`, exactly once, from any thread.
pub type FfiTransportFn =
    extern "C" fn(ctx: *mut c_void, route: *const FfiRoute, call: *mut FfiCall);

/// Completion handler mirroring the `(code, bytes)` contract. `body` is only
/// valid during the call.
pub type FfiCompletionFn =
    extern "C" fn(ctx: *mut c_void, code: i64, body: *const u8, body_len: usize);

/// Opaque in-flight request handle.
///
/// Owned by the host between the transport hook firing and the matching
/// `networking_call_complete`, which consumes it.
pub struct FfiCall {
    pub(crate) completion: FfiCompletionFn,
    pub(crate) completion_ctx: *mut c_void,
}
