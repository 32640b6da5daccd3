//! Integration tests for the HTTP/1.1 server over real TCP connections.

use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::thread;

use embhttp::http::{http_abort, http_server, HandlerResult, Request, Response};

fn spawn_server<F>(handler: F) -> SocketAddr
where
    F: FnMut(Request<'_>) -> HandlerResult + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut input = stream.try_clone().unwrap();
        let mut output = stream;
        let _ = http_server(&mut input, &mut output, handler);
    });

    addr
}

fn roundtrip(addr: SocketAddr, request: &[u8]) -> String {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(request).unwrap();
    stream.shutdown(Shutdown::Write).unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();
    String::from_utf8(response).unwrap()
}

#[test]
fn test_get_roundtrip() {
    let addr = spawn_server(|req| {
        assert_eq!(req.method, b"GET");
        assert_eq!(req.path, b"/hi");
        Ok(Response::text("hello"))
    });

    let response = roundtrip(addr, b"GET /hi HTTP/1.1\r\nHost: x\r\n\r\n");
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("content-length: 5\r\n"));
    assert!(response.contains("content-type: text/plain\r\n"));
    assert!(response.ends_with("\r\n\r\nhello"));
}

#[test]
fn test_post_echo_roundtrip() {
    let addr = spawn_server(|mut req| {
        let mut body = Vec::new();
        let mut buf = [0u8; 256];
        loop {
            let n = req.body.read(&mut buf)?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&buf[..n]);
        }
        Ok(Response::text(body))
    });

    let response = roundtrip(addr, b"POST /echo HTTP/1.1\r\ncontent-length: 9\r\n\r\nsome data");
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.ends_with("\r\n\r\nsome data"));
}

#[test]
fn test_chunked_request_roundtrip() {
    let addr = spawn_server(|mut req| {
        let mut body = Vec::new();
        let mut buf = [0u8; 256];
        loop {
            let n = req.body.read(&mut buf)?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&buf[..n]);
        }
        assert_eq!(body, b"abcde");
        Ok(Response::new(204))
    });

    let request =
        b"POST /up HTTP/1.1\r\ntransfer-encoding: chunked\r\n\r\n3\r\nabc\r\n2\r\nde\r\n0\r\n\r\n";
    let response = roundtrip(addr, request);
    assert!(response.starts_with("HTTP/1.1 204 No Content\r\n"));
}

#[test]
fn test_keep_alive_serves_multiple_requests() {
    let addr = spawn_server(|req| {
        Ok(Response::text(format!(
            "path={}",
            String::from_utf8_lossy(req.path)
        )))
    });

    let response = roundtrip(
        addr,
        b"GET /first HTTP/1.1\r\n\r\nGET /second HTTP/1.1\r\n\r\n",
    );
    assert_eq!(response.matches("HTTP/1.1 200 OK").count(), 2);
    assert!(response.contains("path=/first"));
    assert!(response.contains("path=/second"));
}

#[test]
fn test_not_found_via_abort() {
    let addr = spawn_server(|req| {
        if req.path == b"/known" {
            Ok(Response::text("found"))
        } else {
            Ok(http_abort(404))
        }
    });

    let response = roundtrip(addr, b"GET /missing HTTP/1.1\r\n\r\n");
    assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(response.contains("content-length: 0\r\n"));
}

#[test]
fn test_handler_failure_keeps_connection_alive() {
    let addr = spawn_server(|req| {
        if req.path == b"/bad" {
            Err("this one is broken".into())
        } else {
            Ok(Response::text("fine"))
        }
    });

    let response = roundtrip(addr, b"GET /bad HTTP/1.1\r\n\r\nGET /good HTTP/1.1\r\n\r\n");
    assert!(response.starts_with("HTTP/1.1 500 Internal Server Error\r\n"));
    assert!(response.contains("this one is broken"));
    assert!(response.contains("HTTP/1.1 200 OK"));
    assert!(response.ends_with("fine"));
}

#[test]
fn test_malformed_request_gets_400() {
    let addr = spawn_server(|_req| Ok(Response::text("unreached")));

    let response = roundtrip(addr, b"completely wrong\r\n\r\n");
    assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
}
