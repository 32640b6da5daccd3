//! HTTP/1.1 connection loop
//!
//! [`http_server`] drives one keep-alive connection: it parses requests out
//! of a fixed-size read buffer, hands each to the handler, writes the
//! response back, and drains whatever body bytes the handler left unread so
//! the next pipelined request starts from a clean boundary.

use std::io;

use tracing::{debug, trace};

use super::body::{ChunkedBodyStream, FixedBodyStream, RequestBody};
use super::headers::{compare_header_name, get_header_range, get_single, HeaderView};
use super::message::{http_abort, status_text, Request, Response};
use super::{Error, HandlerResult, Result};
use crate::stream::{premature_eof, InputStream, OutputStream};

/// Size of the header read buffer; a request head that does not fit is
/// answered with `413`.
pub const HEADER_BUF_SIZE: usize = 64 * 1024;

/// Size of the staging buffer used when copying response bodies.
const WRITE_BUF_SIZE: usize = 64 * 1024;

/// Serve HTTP/1.1 requests from `input`, writing responses to `output`,
/// until the peer closes the connection or a protocol violation forces
/// termination.
///
/// The handler runs on the calling thread, one request at a time. A handler
/// error is turned into a `500` response carrying the error text and the
/// connection stays alive; parse failures answer `400` (or `413` when the
/// request head overflows the buffer) and terminate. Transport failures are
/// returned to the caller as [`Error::Io`].
pub fn http_server<R, W, F>(input: &mut R, output: &mut W, mut handler: F) -> Result<()>
where
    R: InputStream,
    W: OutputStream,
    F: FnMut(Request<'_>) -> HandlerResult,
{
    let mut buf = vec![0u8; HEADER_BUF_SIZE];
    let mut body_buf = vec![0u8; WRITE_BUF_SIZE];
    let mut filled = 0usize;

    loop {
        let head_end = loop {
            if let Some(end) = find_header_end(&buf[..filled]) {
                break end;
            }
            if filled == buf.len() {
                return reject(output, Error::HeadTooLarge, &mut body_buf);
            }
            let n = input.read(&mut buf[filled..])?;
            if n == 0 {
                if filled == 0 {
                    // clean close between requests
                    return Ok(());
                }
                let err = Error::Parse("request head cut short".to_string());
                return reject(output, err, &mut body_buf);
            }
            filled += n;
        };

        let (method, path, headers) = match parse_request_head(&buf[..head_end]) {
            Ok(parts) => parts,
            Err(err) => return reject(output, err, &mut body_buf),
        };
        trace!(
            method = %String::from_utf8_lossy(method),
            path = %String::from_utf8_lossy(path),
            "request"
        );

        let kind = match select_body(method, &headers) {
            Ok(kind) => kind,
            Err(err) => return reject(output, err, &mut body_buf),
        };

        let prebuf = &buf[head_end..filled];
        let mut body = match kind {
            BodyKind::Fixed(limit) => {
                RequestBody::Fixed(FixedBodyStream::new(prebuf, &mut *input, limit))
            }
            BodyKind::Chunked => RequestBody::Chunked(ChunkedBodyStream::new(prebuf, &mut *input)),
        };

        let request = Request {
            method,
            path,
            headers,
            body: &mut body,
        };
        let response = match handler(request) {
            Ok(response) => response,
            Err(err) => Response::text(err.to_string()).status(500),
        };
        send_response(output, response, &mut body_buf)?;

        // Drain whatever the handler left unread.
        loop {
            let n = body.read(&mut body_buf)?;
            if n == 0 {
                break;
            }
        }

        // Bytes past the consumed body belong to the next pipelined request.
        let leftover = body.prebuf_remaining();
        drop(body);
        buf.copy_within(filled - leftover..filled, 0);
        filled = leftover;
    }
}

enum BodyKind {
    Fixed(u64),
    Chunked,
}

/// Answer a protocol violation and terminate the connection.
fn reject<W>(out: &mut W, err: Error, body_buf: &mut [u8]) -> Result<()>
where
    W: OutputStream + ?Sized,
{
    debug!(error = %err, "rejecting request");
    let status = match err {
        Error::HeadTooLarge => 413,
        _ => 400,
    };
    send_response(out, http_abort(status), body_buf)?;
    Ok(())
}

/// Pick the body framing for a request per its method and headers.
///
/// Only `POST` and `PUT` carry bodies. A single well-formed
/// `content-length` wins; otherwise any `transfer-encoding` headers must
/// collectively be exactly one `chunked` value (anything else rejects the
/// request with `400`); otherwise the body is empty.
fn select_body(method: &[u8], headers: &[HeaderView<'_>]) -> Result<BodyKind> {
    if method != b"POST" && method != b"PUT" {
        return Ok(BodyKind::Fixed(0));
    }

    if let Some(len) = get_single(headers, b"content-length").and_then(parse_content_length) {
        return Ok(BodyKind::Fixed(len));
    }

    match get_header_range(headers, b"transfer-encoding") {
        [] => Ok(BodyKind::Fixed(0)),
        [single] if single.value == b"chunked" => Ok(BodyKind::Chunked),
        _ => Err(Error::InvalidHeader(
            "unsupported transfer-encoding".to_string(),
        )),
    }
}

/// Non-negative decimal with overflow detection.
fn parse_content_length(value: &[u8]) -> Option<u64> {
    if value.is_empty() {
        return None;
    }
    let mut n: u64 = 0;
    for &b in value {
        if !b.is_ascii_digit() {
            return None;
        }
        n = n.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
    }
    Some(n)
}

/// Offset just past the `\r\n\r\n` head/body boundary, if present.
fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|pos| pos + 4)
}

fn split_line(buf: &[u8]) -> Option<(&[u8], &[u8])> {
    let pos = buf.windows(2).position(|w| w == b"\r\n")?;
    Some((&buf[..pos], &buf[pos + 2..]))
}

fn trim_ows(mut value: &[u8]) -> &[u8] {
    while let [b' ' | b'\t', rest @ ..] = value {
        value = rest;
    }
    while let [rest @ .., b' ' | b'\t'] = value {
        value = rest;
    }
    value
}

/// Parse `METHOD SP TARGET SP HTTP/1.1` and the following header lines.
///
/// `head` runs up to and including the blank line. A header line only needs
/// its colon; an empty name is accepted. Returns the header list sorted by
/// name; the sort is stable so repeated names keep wire order.
fn parse_request_head(head: &[u8]) -> Result<(&[u8], &[u8], Vec<HeaderView<'_>>)> {
    let malformed = || Error::Parse("malformed request line".to_string());
    let (request_line, mut rest) = split_line(head).ok_or_else(malformed)?;

    let sp1 = request_line
        .iter()
        .position(|&b| b == b' ')
        .ok_or_else(malformed)?;
    let method = &request_line[..sp1];
    let after_method = &request_line[sp1 + 1..];
    let sp2 = after_method
        .iter()
        .position(|&b| b == b' ')
        .ok_or_else(malformed)?;
    let path = &after_method[..sp2];
    let version = &after_method[sp2 + 1..];
    if version != b"HTTP/1.1" {
        return Err(Error::InvalidVersion(
            String::from_utf8_lossy(version).into_owned(),
        ));
    }

    let mut headers = Vec::new();
    loop {
        let (line, after) = split_line(rest)
            .ok_or_else(|| Error::Parse("request head cut short".to_string()))?;
        rest = after;
        if line.is_empty() {
            break;
        }
        let colon = line
            .iter()
            .position(|&b| b == b':')
            .ok_or_else(|| Error::InvalidHeader(String::from_utf8_lossy(line).into_owned()))?;
        headers.push(HeaderView::new(&line[..colon], trim_ows(&line[colon + 1..])));
    }

    headers.sort_by(|a, b| compare_header_name(a.name, b.name));
    Ok((method, path, headers))
}

/// Serialise `response` and stream its body.
///
/// A missing body forces the content length to zero. A known length appends
/// `content-length` and copies exactly that many bytes; an unknown one
/// appends `transfer-encoding: chunked` and frames each read as a chunk.
fn send_response<W>(out: &mut W, mut response: Response, body_buf: &mut [u8]) -> io::Result<()>
where
    W: OutputStream + ?Sized,
{
    if response.body.is_none() {
        response.content_length = Some(0);
    }
    match response.content_length {
        Some(n) => response
            .headers
            .push(("content-length".to_string(), n.to_string())),
        None => response
            .headers
            .push(("transfer-encoding".to_string(), "chunked".to_string())),
    }
    if response.status_text.is_empty() {
        response.status_text = status_text(response.status_code)
            .unwrap_or("No Status Text")
            .to_string();
    }
    debug!(status = response.status_code, "response");

    let mut head = Vec::with_capacity(256);
    head.extend_from_slice(b"HTTP/1.1 ");
    head.extend_from_slice(response.status_code.to_string().as_bytes());
    head.push(b' ');
    head.extend_from_slice(response.status_text.as_bytes());
    head.extend_from_slice(b"\r\n");
    for (name, value) in &response.headers {
        head.extend_from_slice(name.as_bytes());
        head.extend_from_slice(b": ");
        head.extend_from_slice(value.as_bytes());
        head.extend_from_slice(b"\r\n");
    }
    head.extend_from_slice(b"\r\n");
    out.write_all(&head)?;

    let Some(mut body) = response.body else {
        return Ok(());
    };
    match response.content_length {
        Some(mut remaining) => {
            while remaining > 0 {
                let want = (body_buf.len() as u64).min(remaining) as usize;
                let n = body.read(&mut body_buf[..want])?;
                if n == 0 {
                    return Err(premature_eof());
                }
                out.write_all(&body_buf[..n])?;
                remaining -= n as u64;
            }
        }
        None => loop {
            let n = body.read(body_buf)?;
            if n == 0 {
                out.write_all(b"0\r\n\r\n")?;
                break;
            }
            out.write_all(format!("{n:x}\r\n").as_bytes())?;
            out.write_all(&body_buf[..n])?;
            out.write_all(b"\r\n")?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HandlerError;
    use crate::stream::BytesStream;

    fn serve(input: &[u8], handler: impl FnMut(Request<'_>) -> HandlerResult) -> Vec<u8> {
        let mut input = input;
        let mut output = Vec::new();
        http_server(&mut input, &mut output, handler).unwrap();
        output
    }

    fn body_to_end(body: &mut dyn InputStream) -> Vec<u8> {
        let mut out = Vec::new();
        let mut buf = [0u8; 11];
        loop {
            let n = body.read(&mut buf).unwrap();
            if n == 0 {
                return out;
            }
            out.extend_from_slice(&buf[..n]);
        }
    }

    #[test]
    fn test_get_with_text_response() {
        let output = serve(b"GET /hi HTTP/1.1\r\nHost: x\r\n\r\n", |req| {
            assert_eq!(req.method, b"GET");
            assert_eq!(req.path, b"/hi");
            assert_eq!(req.header(b"host"), Some(&b"x"[..]));
            Ok(Response::text("hello"))
        });

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("content-length: 5\r\n"));
        assert!(text.contains("content-type: text/plain\r\n"));
        assert!(text.ends_with("\r\n\r\nhello"));
    }

    #[test]
    fn test_post_with_content_length_echoes_body() {
        let output = serve(b"POST /a HTTP/1.1\r\ncontent-length: 3\r\n\r\nabc", |mut req| {
            let data = body_to_end(&mut req.body);
            Ok(Response::text(data))
        });

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("content-length: 3\r\n"));
        assert!(text.ends_with("\r\n\r\nabc"));
    }

    #[test]
    fn test_chunked_request_body() {
        let input =
            b"POST /up HTTP/1.1\r\ntransfer-encoding: chunked\r\n\r\n3\r\nabc\r\n2\r\nde\r\n0\r\n\r\n";
        let mut seen = Vec::new();
        let output = serve(input, |mut req| {
            seen = body_to_end(&mut req.body);
            Ok(Response::new(204))
        });

        assert_eq!(seen, b"abcde");
        assert!(String::from_utf8(output)
            .unwrap()
            .starts_with("HTTP/1.1 204 No Content\r\n"));
    }

    #[test]
    fn test_request_headers_are_sorted() {
        serve(
            b"GET / HTTP/1.1\r\nZulu: 1\r\nalpha: 2\r\nMike: 3\r\n\r\n",
            |req| {
                let names: Vec<_> = req.headers.iter().map(|h| h.name.to_ascii_lowercase()).collect();
                assert_eq!(names, vec![b"alpha".to_vec(), b"mike".to_vec(), b"zulu".to_vec()]);
                Ok(Response::new(200))
            },
        );
    }

    #[test]
    fn test_pipelined_requests_share_the_buffer() {
        let input = b"GET /one HTTP/1.1\r\n\r\nGET /two HTTP/1.1\r\n\r\n";
        let mut paths = Vec::new();
        let output = serve(input, |req| {
            paths.push(req.path.to_vec());
            Ok(Response::text("ok"))
        });

        assert_eq!(paths, vec![b"/one".to_vec(), b"/two".to_vec()]);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("HTTP/1.1 200 OK").count(), 2);
    }

    #[test]
    fn test_unread_body_is_drained_before_next_request() {
        let input = b"POST /a HTTP/1.1\r\ncontent-length: 5\r\n\r\nabcdeGET /b HTTP/1.1\r\n\r\n";
        let mut paths = Vec::new();
        serve(input, |req| {
            paths.push(req.path.to_vec());
            Ok(Response::new(200))
        });
        assert_eq!(paths, vec![b"/a".to_vec(), b"/b".to_vec()]);
    }

    #[test]
    fn test_handler_error_becomes_500() {
        let output = serve(b"GET / HTTP/1.1\r\n\r\n", |_req| {
            Err(HandlerError::from("kaboom"))
        });

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("HTTP/1.1 500 Internal Server Error\r\n"));
        assert!(text.contains("content-type: text/plain\r\n"));
        assert!(text.ends_with("\r\n\r\nkaboom"));
    }

    #[test]
    fn test_parse_errors_carry_context() {
        assert!(matches!(
            parse_request_head(b"GET /\r\n\r\n"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            parse_request_head(b"GET / HTTP/1.0\r\n\r\n"),
            Err(Error::InvalidVersion(_))
        ));
        assert!(matches!(
            parse_request_head(b"GET / HTTP/1.1\r\nno colon here\r\n\r\n"),
            Err(Error::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_empty_header_name_is_accepted() {
        let (_, _, headers) =
            parse_request_head(b"GET / HTTP/1.1\r\n: anonymous\r\n\r\n").unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].name, b"");
        assert_eq!(headers[0].value, b"anonymous");
    }

    #[test]
    fn test_malformed_request_line_answers_400() {
        let output = serve(b"GET /\r\n\r\n", |_req| unreachable!());
        assert!(String::from_utf8(output)
            .unwrap()
            .starts_with("HTTP/1.1 400 Bad Request\r\n"));
    }

    #[test]
    fn test_wrong_version_answers_400() {
        let output = serve(b"GET / HTTP/1.0\r\n\r\n", |_req| unreachable!());
        assert!(String::from_utf8(output)
            .unwrap()
            .starts_with("HTTP/1.1 400 Bad Request\r\n"));
    }

    #[test]
    fn test_conflicting_transfer_encoding_answers_400() {
        let input =
            b"POST / HTTP/1.1\r\ntransfer-encoding: chunked\r\ntransfer-encoding: chunked\r\n\r\n";
        let output = serve(input, |_req| unreachable!());
        assert!(String::from_utf8(output)
            .unwrap()
            .starts_with("HTTP/1.1 400 Bad Request\r\n"));
    }

    #[test]
    fn test_oversized_head_answers_413() {
        let mut input = vec![b'a'; HEADER_BUF_SIZE + 16];
        input[..4].copy_from_slice(b"GET ");
        let output = serve(&input, |_req| unreachable!());
        assert!(String::from_utf8(output)
            .unwrap()
            .starts_with("HTTP/1.1 413 Payload Too Large\r\n"));
    }

    #[test]
    fn test_truncated_request_answers_400() {
        let output = serve(b"GET / HTTP/1.1\r\nHost", |_req| unreachable!());
        assert!(String::from_utf8(output)
            .unwrap()
            .starts_with("HTTP/1.1 400 Bad Request\r\n"));
    }

    #[test]
    fn test_empty_input_closes_cleanly() {
        let output = serve(b"", |_req| unreachable!());
        assert!(output.is_empty());
    }

    #[test]
    fn test_unknown_status_gets_default_text() {
        let output = serve(b"GET / HTTP/1.1\r\n\r\n", |_req| Ok(Response::new(799)));
        assert!(String::from_utf8(output)
            .unwrap()
            .starts_with("HTTP/1.1 799 No Status Text\r\n"));
    }

    #[test]
    fn test_streaming_response_round_trips_through_chunked_decoding() {
        let payload = b"The quick brown fox jumps over the lazy dog".repeat(7);
        let expected = payload.clone();
        let output = serve(b"GET /stream HTTP/1.1\r\n\r\n", move |_req| {
            Ok(Response::stream(Box::new(BytesStream::new(
                payload.clone(),
            ))))
        });

        let text = String::from_utf8(output.clone()).unwrap();
        assert!(text.contains("transfer-encoding: chunked\r\n"));

        let boundary = output.windows(4).position(|w| w == b"\r\n\r\n").unwrap() + 4;
        let mut wire: &[u8] = &output[boundary..];
        let mut decoder = ChunkedBodyStream::new(b"", &mut wire);
        let decoded = body_to_end(&mut decoder);
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_body_ignored_for_get() {
        // content-length on a GET frames no body; the loop treats the bytes
        // that follow as the next request.
        let input = b"GET / HTTP/1.1\r\ncontent-length: 20\r\n\r\nGET /next HTTP/1.1\r\n\r\n";
        let mut paths = Vec::new();
        serve(input, |req| {
            paths.push(req.path.to_vec());
            Ok(Response::new(200))
        });
        assert_eq!(paths, vec![b"/".to_vec(), b"/next".to_vec()]);
    }
}
