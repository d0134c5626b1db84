//! C-ABI surface for the networking adapter.
//!
//! # Overview
//! Re-exposes the adapter's single operation in its callback form —
//! `request(route, completion)` — to any language with a C FFI. The host
//! side is the transport: `networking_request` forwards the route to a
//! host-supplied hook, the host performs the I/O on whatever stack it owns,
//! and hands the raw outcome back through `networking_call_complete`. The
//! adapter then resolves the outcome and invokes the completion with the
//! normalized `(code, bytes)` pair.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Exactly-once completion is enforced structurally: the in-flight call
//!   handle is a `Box` consumed by `networking_call_complete`.
//! - Resolution reuses `networking_core::resolve`, so the C surface and the
//!   Rust client can never disagree about the decision table.

pub mod types;

use std::os::raw::c_void;
use std::panic::catch_unwind;

use networking_core::{error::code, RawResponse};

use types::{FfiCall, FfiCompletionFn, FfiRawResponse, FfiRoute, FfiTransportFn};

/// Start one request.
///
/// Forwards `route` to `transport` together with an opaque call handle. The
/// transport hook runs synchronously inside this function; the I/O it kicks
/// off may finish later on any thread. Once the host calls
/// `networking_call_complete` on the handle, `completion` fires exactly once
/// with the normalized `(code, body)` outcome.
///
/// A null `route` completes immediately with the adapter's transport
/// fallback code and an empty body; the completion still fires exactly once.
#[unsafe(no_mangle)]
pub extern "C" fn networking_request(
    route: *const FfiRoute,
    transport: FfiTransportFn,
    transport_ctx: *mut c_void,
    completion: FfiCompletionFn,
    completion_ctx: *mut c_void,
) {
    let _ = catch_unwind(|| {
        if route.is_null() {
            completion(completion_ctx, code::TRANSPORT, std::ptr::null(), 0);
            return;
        }
        let call = Box::into_raw(Box::new(FfiCall {
            completion,
            completion_ctx,
        }));
        transport(transport_ctx, route, call);
    });
}

/// Complete an in-flight call with what the transport produced.
///
/// Consumes `call`; it must not be used again afterwards. `response` is read
/// but not freed, and may be null when the transport produced nothing at all
/// (resolves to the malformed-response code). Safe to call from any thread.
/// Calling with a null `call` is a no-op.
#[unsafe(no_mangle)]
pub extern "C" fn networking_call_complete(call: *mut FfiCall, response: *const FfiRawResponse) {
    if call.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let call = unsafe { Box::from_raw(call) };
        let raw = if response.is_null() {
            RawResponse::default()
        } else {
            unsafe { (*response).to_core() }
        };
        let reply = networking_core::resolve(raw);
        (call.completion)(
            call.completion_ctx,
            reply.code,
            reply.body.as_ptr(),
            reply.body.len(),
        );
    });
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use super::*;
    use crate::types::{FfiHeader, FfiMethod};

    /// What the completion observed, owned by the test and passed as ctx.
    #[derive(Default)]
    struct CompletionRecord {
        calls: u32,
        code: i64,
        body: Vec<u8>,
    }

    extern "C" fn record_completion(ctx: *mut c_void, code: i64, body: *const u8, body_len: usize) {
        let record = unsafe { &mut *(ctx as *mut CompletionRecord) };
        record.calls += 1;
        record.code = code;
        record.body = if body.is_null() {
            Vec::new()
        } else {
            unsafe { std::slice::from_raw_parts(body, body_len) }.to_vec()
        };
    }

    /// Host transport that completes synchronously with the scripted
    /// response passed as ctx.
    extern "C" fn scripted_transport(ctx: *mut c_void, _route: *const FfiRoute, call: *mut FfiCall) {
        networking_call_complete(call, ctx as *const FfiRawResponse);
    }

    /// Host transport that completes later, from another thread.
    extern "C" fn deferred_transport(ctx: *mut c_void, _route: *const FfiRoute, call: *mut FfiCall) {
        let call_addr = call as usize;
        let response_addr = ctx as usize;
        let handle = std::thread::spawn(move || {
            networking_call_complete(
                call_addr as *mut FfiCall,
                response_addr as *const FfiRawResponse,
            );
        });
        handle.join().unwrap();
    }

    fn empty_response() -> FfiRawResponse {
        FfiRawResponse {
            has_error: false,
            error_code: 0,
            error_message: std::ptr::null(),
            has_head: false,
            status: 0,
            mime_type: std::ptr::null(),
            body: std::ptr::null(),
            body_len: 0,
        }
    }

    fn route(url: &CString) -> FfiRoute {
        FfiRoute {
            method: FfiMethod::Get,
            url: url.as_ptr(),
            headers: std::ptr::null::<FfiHeader>(),
            headers_len: 0,
            body: std::ptr::null(),
            body_len: 0,
        }
    }

    fn run_request(
        transport: FfiTransportFn,
        response: Option<&FfiRawResponse>,
    ) -> CompletionRecord {
        let url = CString::new("http://fixture/json").unwrap();
        let route = route(&url);
        let mut record = CompletionRecord::default();
        let ctx = response
            .map(|r| r as *const FfiRawResponse as *mut c_void)
            .unwrap_or(std::ptr::null_mut());
        networking_request(
            &route,
            transport,
            ctx,
            record_completion,
            &mut record as *mut CompletionRecord as *mut c_void,
        );
        record
    }

    #[test]
    fn accepted_response_completes_with_status_and_body() {
        let mime = CString::new("application/json").unwrap();
        let body = br#"{"status":"ok"}"#;
        let response = FfiRawResponse {
            has_head: true,
            status: 200,
            mime_type: mime.as_ptr(),
            body: body.as_ptr(),
            body_len: body.len(),
            ..empty_response()
        };

        let record = run_request(scripted_transport, Some(&response));
        assert_eq!(record.calls, 1);
        assert_eq!(record.code, 200);
        assert_eq!(record.body, body);
    }

    #[test]
    fn http_error_with_body_keeps_real_status() {
        let mime = CString::new("application/json").unwrap();
        let body = br#"{"error":"no such resource"}"#;
        let response = FfiRawResponse {
            has_head: true,
            status: 404,
            mime_type: mime.as_ptr(),
            body: body.as_ptr(),
            body_len: body.len(),
            ..empty_response()
        };

        let record = run_request(scripted_transport, Some(&response));
        assert_eq!(record.calls, 1);
        assert_eq!(record.code, 404);
        assert_eq!(record.body, body);
    }

    #[test]
    fn transport_error_completes_with_platform_code() {
        let message = CString::new("not connected").unwrap();
        let response = FfiRawResponse {
            has_error: true,
            error_code: -1009,
            error_message: message.as_ptr(),
            ..empty_response()
        };

        let record = run_request(scripted_transport, Some(&response));
        assert_eq!(record.calls, 1);
        assert_eq!(record.code, -1009);
        assert!(record.body.is_empty());
    }

    #[test]
    fn null_response_completes_with_malformed_code() {
        let record = run_request(scripted_transport, None);
        assert_eq!(record.calls, 1);
        assert_eq!(record.code, code::MALFORMED_RESPONSE);
        assert!(record.body.is_empty());
    }

    #[test]
    fn null_route_still_completes_exactly_once() {
        let mut record = CompletionRecord::default();
        networking_request(
            std::ptr::null(),
            scripted_transport,
            std::ptr::null_mut(),
            record_completion,
            &mut record as *mut CompletionRecord as *mut c_void,
        );
        assert_eq!(record.calls, 1);
        assert_eq!(record.code, code::TRANSPORT);
    }

    #[test]
    fn completion_may_arrive_from_another_thread() {
        let mime = CString::new("application/json").unwrap();
        let body = br#"{"thread":"other"}"#;
        let response = FfiRawResponse {
            has_head: true,
            status: 200,
            mime_type: mime.as_ptr(),
            body: body.as_ptr(),
            body_len: body.len(),
            ..empty_response()
        };

        let record = run_request(deferred_transport, Some(&response));
        assert_eq!(record.calls, 1);
        assert_eq!(record.code, 200);
        assert_eq!(record.body, body);
    }

    #[test]
    fn completing_a_null_call_is_a_no_op() {
        networking_call_complete(std::ptr::null_mut(), std::ptr::null());
    }
}
