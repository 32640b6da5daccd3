//! Request and response types
//!
//! A [`Request`] borrows its method, target and header views out of the
//! connection's read buffer for exactly as long as the handler runs; the
//! borrow checker guarantees the buffer is not reused underneath it. A
//! [`Response`] owns everything it carries, including an optional body
//! stream.

use std::fmt;

use bytes::Bytes;

use super::headers::{get_single, HeaderList};
use crate::stream::{BytesStream, InputStream};

/// A parsed HTTP request, dispatched to the handler.
pub struct Request<'a> {
    /// Request method, e.g. `GET`, `POST`, `PUT`.
    pub method: &'a [u8],
    /// Request target exactly as received, with no normalisation.
    pub path: &'a [u8],
    /// Headers, sorted case-insensitively by name.
    pub headers: HeaderList<'a>,
    /// Body stream; reads nothing when the request carries no body.
    pub body: &'a mut dyn InputStream,
}

impl<'a> Request<'a> {
    /// The value of `name` when the header appears exactly once.
    pub fn header(&self, name: &[u8]) -> Option<&'a [u8]> {
        get_single(&self.headers, name)
    }
}

impl fmt::Debug for Request<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &String::from_utf8_lossy(self.method))
            .field("path", &String::from_utf8_lossy(self.path))
            .field("headers", &self.headers.len())
            .finish_non_exhaustive()
    }
}

/// A response produced by the handler.
pub struct Response {
    pub status_code: u16,
    /// Reason phrase; when empty the status line uses [`status_text`].
    pub status_text: String,
    /// Headers in the order they will appear on the wire.
    pub headers: Vec<(String, String)>,
    /// Body length when known; `None` switches the emitter to chunked
    /// transfer encoding.
    pub content_length: Option<u64>,
    pub body: Option<Box<dyn InputStream>>,
}

impl Response {
    /// An empty response with the given status.
    pub fn new(status_code: u16) -> Self {
        Response {
            status_code,
            status_text: String::new(),
            headers: Vec::new(),
            content_length: Some(0),
            body: None,
        }
    }

    /// A `200` response carrying `body` as `text/plain` with a known length.
    pub fn text(body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Response {
            status_code: 200,
            status_text: String::new(),
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            content_length: Some(body.len() as u64),
            body: Some(Box::new(BytesStream::new(body))),
        }
    }

    /// A `200` response streaming `body` with unknown length; the emitter
    /// applies chunked transfer encoding.
    pub fn stream(body: Box<dyn InputStream>) -> Self {
        Response {
            status_code: 200,
            status_text: String::new(),
            headers: Vec::new(),
            content_length: None,
            body: Some(body),
        }
    }

    /// Override the status code.
    pub fn status(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    /// Append a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status_code", &self.status_code)
            .field("status_text", &self.status_text)
            .field("headers", &self.headers)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// An empty-bodied response with the given status, for aborting a request.
pub fn http_abort(status_code: u16) -> Response {
    Response::new(status_code)
}

static STATUS_TEXTS: [(u16, &str); 7] = [
    (200, "OK"),
    (204, "No Content"),
    (303, "See Other"),
    (400, "Bad Request"),
    (404, "Not Found"),
    (413, "Payload Too Large"),
    (500, "Internal Server Error"),
];

/// The reason phrase for well-known status codes.
pub fn status_text(status_code: u16) -> Option<&'static str> {
    STATUS_TEXTS
        .iter()
        .find(|&&(code, _)| code == status_code)
        .map(|&(_, text)| text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_lookup() {
        assert_eq!(status_text(200), Some("OK"));
        assert_eq!(status_text(303), Some("See Other"));
        assert_eq!(status_text(404), Some("Not Found"));
        assert_eq!(status_text(999), None);
    }

    #[test]
    fn test_text_response_carries_length_and_type() {
        let resp = Response::text("hello");
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.content_length, Some(5));
        assert_eq!(
            resp.headers,
            vec![("content-type".to_string(), "text/plain".to_string())]
        );
        assert!(resp.body.is_some());
    }

    #[test]
    fn test_http_abort_is_empty() {
        let resp = http_abort(404);
        assert_eq!(resp.status_code, 404);
        assert_eq!(resp.content_length, Some(0));
        assert!(resp.body.is_none());
        assert!(resp.headers.is_empty());
    }

    #[test]
    fn test_builder_style_helpers() {
        let resp = Response::text("oops").status(500).header("retry-after", "1");
        assert_eq!(resp.status_code, 500);
        assert_eq!(resp.headers.len(), 2);
        assert_eq!(resp.headers[1], ("retry-after".to_string(), "1".to_string()));
    }
}
