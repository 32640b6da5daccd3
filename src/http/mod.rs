//! HTTP/1.1 server core
//!
//! This module parses requests off an [`InputStream`], dispatches them to a
//! handler and serialises the handler's [`Response`] back out through an
//! [`OutputStream`]. The HTTP/2 flavour of the same contract lives in
//! [`h2`].
//!
//! # Examples
//!
//! ```no_run
//! use std::net::TcpListener;
//! use embhttp::http::{http_server, Response};
//!
//! let listener = TcpListener::bind("127.0.0.1:8080").unwrap();
//! for stream in listener.incoming() {
//!     let stream = stream.unwrap();
//!     let mut input = stream.try_clone().unwrap();
//!     let mut output = stream;
//!     http_server(&mut input, &mut output, |req| {
//!         Ok(Response::text(format!(
//!             "you asked for {}",
//!             String::from_utf8_lossy(req.path)
//!         )))
//!     })
//!     .unwrap();
//! }
//! ```
//!
//! [`InputStream`]: crate::stream::InputStream
//! [`OutputStream`]: crate::stream::OutputStream

pub mod body;
pub mod h2;
pub mod headers;
pub mod message;
pub mod server;

pub use headers::{compare_header_name, get_header_range, get_single, HeaderList, HeaderView};
pub use message::{http_abort, Request, Response};
pub use server::http_server;

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, Error>;

/// HTTP/1.1 errors.
///
/// Parse-level violations are answered on the wire (`400`, or `413` for an
/// oversized request head) before the connection is terminated; transport
/// failures surface to the caller as `Io`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error on the underlying transport
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed request line or truncated request head
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported HTTP version
    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// Unparseable or contradictory header
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Request head does not fit the read buffer
    #[error("Request head too large")]
    HeadTooLarge,
}

/// The error type a handler may fail with; the server turns it into a `500`
/// response carrying the error text.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// What a request handler returns.
pub type HandlerResult = std::result::Result<Response, HandlerError>;
