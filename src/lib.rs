//! Embeddable HTTP server core
//!
//! `embhttp` turns a byte-read source and a byte-write sink into an HTTP
//! server: it parses requests, hands them to a caller-supplied handler and
//! writes the handler's response back to the sink. Two wire protocols run
//! over the same transport abstraction: HTTP/1.1 with keep-alive and
//! chunked bodies, and HTTP/2 with binary framing and HPACK header
//! decompression.
//!
//! Transports, TLS, process startup and configuration are the caller's
//! business; the core only needs the two stream traits in [`stream`] and a
//! handler function. No state is kept across connections.

pub mod http;
pub mod stream;
