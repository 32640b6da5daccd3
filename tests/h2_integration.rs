//! Integration tests for the HTTP/2 server over real TCP connections.

use std::io::Write;
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::thread;

use embhttp::http::h2::{codec, http2_server, Error, FrameFlags, FrameType, CONNECTION_PREFACE};
use embhttp::http::{HandlerResult, Request, Response};

fn no_dispatch(_req: Request<'_>) -> HandlerResult {
    Ok(Response::new(200))
}

fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut input = stream.try_clone().unwrap();
        let mut output = stream;
        let _ = http2_server(&mut input, &mut output, no_dispatch);
    });

    addr
}

fn write_frame(stream: &mut TcpStream, frame_type: FrameType, flags: u8, payload: &[u8]) {
    let header = codec::encode_header(frame_type, flags, 0, payload.len());
    stream.write_all(&header).unwrap();
    stream.write_all(payload).unwrap();
}

#[test]
fn test_preface_and_settings_exchange() {
    let addr = spawn_server();
    let mut stream = TcpStream::connect(addr).unwrap();

    stream.write_all(CONNECTION_PREFACE).unwrap();
    write_frame(&mut stream, FrameType::Settings, 0, &[]);

    // the server speaks SETTINGS first, then acknowledges ours
    let first = codec::read_frame(&mut stream, usize::MAX).unwrap();
    assert_eq!(first.frame_type(), Some(FrameType::Settings));
    assert!(!first.flags.is_ack());
    assert_eq!(first.payload_len(), 0);

    let second = codec::read_frame(&mut stream, usize::MAX).unwrap();
    assert_eq!(second.frame_type(), Some(FrameType::Settings));
    assert!(second.flags.is_ack());
    assert_eq!(second.payload_len(), 0);
}

#[test]
fn test_ping_gets_acked_over_tcp() {
    let addr = spawn_server();
    let mut stream = TcpStream::connect(addr).unwrap();

    stream.write_all(CONNECTION_PREFACE).unwrap();
    write_frame(&mut stream, FrameType::Settings, 0, &[]);

    let data = [0xde, 0xad, 0xbe, 0xef, 0x00, 0x01, 0x02, 0x03];
    write_frame(&mut stream, FrameType::Ping, 0, &data);

    // the PING ACK arrives among the control frames
    loop {
        let frame = codec::read_frame(&mut stream, usize::MAX).unwrap();
        if frame.frame_type() == Some(FrameType::Ping) {
            assert!(frame.flags.is_ack());
            assert_eq!(&frame.payload[..], &data);
            break;
        }
        assert_eq!(frame.frame_type(), Some(FrameType::Settings));
    }
}

#[test]
fn test_request_headers_are_accepted() {
    let addr = spawn_server();
    let mut stream = TcpStream::connect(addr).unwrap();

    stream.write_all(CONNECTION_PREFACE).unwrap();
    write_frame(&mut stream, FrameType::Settings, 0, &[]);

    // :method GET, :path /, :scheme http, :authority www.example.com
    let mut block = vec![0x82, 0x84, 0x86, 0x41, 0x0f];
    block.extend_from_slice(b"www.example.com");
    let header = codec::encode_header(
        FrameType::Headers,
        FrameFlags::END_HEADERS | FrameFlags::END_STREAM,
        1,
        block.len(),
    );
    stream.write_all(&header).unwrap();
    stream.write_all(&block).unwrap();
    stream.shutdown(Shutdown::Write).unwrap();

    // the server still completes the settings exchange and quiesces without
    // tearing the socket down mid-frame
    let first = codec::read_frame(&mut stream, usize::MAX).unwrap();
    assert_eq!(first.frame_type(), Some(FrameType::Settings));
    let second = codec::read_frame(&mut stream, usize::MAX).unwrap();
    assert!(second.flags.is_ack());
}

#[test]
fn test_wrong_preface_closes_connection() {
    let addr = spawn_server();
    let mut stream = TcpStream::connect(addr).unwrap();

    stream.write_all(b"GET / HTTP/1.1\r\nHost: nope\r\n\r\n").unwrap();

    // server terminates without writing anything, so the read fails
    let err = codec::read_frame(&mut stream, usize::MAX).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
