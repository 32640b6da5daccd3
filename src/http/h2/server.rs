//! HTTP/2 connection driver
//!
//! One connection, two threads. The reader (the calling thread) parses and
//! validates frames, maintains the stream registry and HPACK state, and
//! queues control responses. The sender owns the write sink outright: it
//! emits the server's SETTINGS first, then drains PING acknowledgements
//! before SETTINGS acknowledgements, sleeping on a condition variable when
//! the queue is empty. The reader never writes; the sender never touches
//! reader state beyond the mutex-guarded queue and the staged settings
//! record it applies when acknowledging.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Condvar, Mutex};
use std::thread;

use bytes::Buf;
use tracing::{debug, trace};

use super::codec::{self, RawFrame};
use super::error::{Error, Result};
use super::frames::{FrameFlags, FrameType};
use super::hpack;
use super::settings::Settings;
use super::stream::Http2Stream;
use super::{CONNECTION_PREFACE, DEFAULT_HEADER_TABLE_SIZE};
use crate::http::{HandlerResult, Request};
use crate::stream::{InputStream, OutputStream};

/// Upper bound on a header block accumulated across CONTINUATION frames.
const MAX_HEADER_BLOCK_SIZE: usize = 64 * 1024;

/// Work queued for the sender, guarded by one mutex.
struct SendState {
    /// Payloads of PINGs awaiting acknowledgement.
    pings: VecDeque<[u8; 8]>,
    /// SETTINGS acknowledgements owed to the peer.
    settings_acks: usize,
    /// Peer settings staged by the reader; the sender applies them when it
    /// sends the matching ACK.
    staged_settings: Settings,
    /// Shutdown signal from the reader.
    done: bool,
}

struct SendShared {
    state: Mutex<SendState>,
    ready: Condvar,
    /// Our SETTINGS frames awaiting a peer ACK.
    settings_in_flight: AtomicI32,
    /// A transport error the sender hit, re-raised by the reader.
    failure: Mutex<Option<Error>>,
}

impl SendShared {
    fn new() -> Self {
        SendShared {
            state: Mutex::new(SendState {
                pings: VecDeque::new(),
                settings_acks: 0,
                staged_settings: Settings::default(),
                done: false,
            }),
            ready: Condvar::new(),
            settings_in_flight: AtomicI32::new(0),
            failure: Mutex::new(None),
        }
    }
}

/// Serve one HTTP/2 connection.
///
/// Reads the 24-byte client preface, then exchanges frames until the
/// transport fails or the peer violates the protocol; either way the error
/// is returned once the sender has quiesced. The first frame written is
/// always the server's own SETTINGS.
///
/// `_handler` completes the signature shared with the HTTP/1.1 server;
/// request dispatch is not wired up yet. Decoded request headers are kept
/// on their stream.
// TODO: dispatch completed streams to the handler once response framing
// exists; emitting HEADERS needs an HPACK encoder.
pub fn http2_server<R, W, F>(input: &mut R, output: &mut W, _handler: F) -> Result<()>
where
    R: InputStream,
    W: OutputStream + Send,
    F: FnMut(Request<'_>) -> HandlerResult,
{
    let mut preface = [0u8; CONNECTION_PREFACE.len()];
    input.read_exact(&mut preface)?;
    if &preface[..] != CONNECTION_PREFACE {
        return Err(Error::InvalidPreface);
    }
    trace!("client preface accepted");

    let shared = SendShared::new();
    let result = thread::scope(|scope| {
        let sender = scope.spawn(|| sender_loop(output, &shared));

        let reader_result = reader_loop(input, &shared);

        {
            let mut state = shared.state.lock().unwrap();
            state.done = true;
            shared.ready.notify_one();
        }
        if let Err(panic) = sender.join() {
            std::panic::resume_unwind(panic);
        }
        reader_result
    });

    if let Err(err) = &result {
        debug!(code = err.error_code().name(), error = %err, "connection terminated");
    }
    result
}

fn reader_loop<R: InputStream>(input: &mut R, shared: &SendShared) -> Result<()> {
    let mut streams: HashMap<u32, Http2Stream> = HashMap::new();
    let mut next_client_stream: u32 = 1;
    let mut decoder = hpack::Decoder::new(DEFAULT_HEADER_TABLE_SIZE as usize);
    // What we announced to the peer; inbound frames must respect it.
    let local_settings = Settings::default();

    loop {
        if let Some(err) = shared.failure.lock().unwrap().take() {
            return Err(err);
        }

        let frame = codec::read_frame(input, local_settings.max_frame_size as usize)?;
        match frame.frame_type() {
            Some(FrameType::Headers) => handle_headers(
                frame,
                input,
                &mut streams,
                &mut next_client_stream,
                &mut decoder,
                &local_settings,
            )?,
            Some(FrameType::Continuation) => {
                // a CONTINUATION arriving outside a HEADERS sequence
                let stream = streams.get_mut(&frame.stream_id).ok_or_else(|| {
                    Error::Protocol(format!(
                        "CONTINUATION on unknown stream {}",
                        frame.stream_id
                    ))
                })?;
                stream.header_block.extend_from_slice(&frame.payload);
            }
            Some(FrameType::Settings) => handle_settings(&frame, shared)?,
            Some(FrameType::Ping) => handle_ping(&frame, shared)?,
            Some(FrameType::Data) => {
                if frame.stream_id == 0 {
                    return Err(Error::Protocol("DATA frame on stream 0".to_string()));
                }
                // inbound data is not flow-controlled here
            }
            Some(FrameType::WindowUpdate) => {
                if frame.payload_len() != 4 {
                    return Err(Error::FrameSize(format!(
                        "WINDOW_UPDATE payload of {} bytes",
                        frame.payload_len()
                    )));
                }
                // window accounting is not enforced on the send path
            }
            Some(FrameType::Priority) => {
                if frame.payload_len() != 5 {
                    return Err(Error::FrameSize(format!(
                        "PRIORITY payload of {} bytes",
                        frame.payload_len()
                    )));
                }
            }
            Some(FrameType::RstStream) => {
                if frame.payload_len() != 4 {
                    return Err(Error::FrameSize(format!(
                        "RST_STREAM payload of {} bytes",
                        frame.payload_len()
                    )));
                }
                trace!(stream = frame.stream_id, "stream reset by peer");
            }
            Some(FrameType::Goaway) => {
                if frame.payload_len() < 8 {
                    return Err(Error::FrameSize(format!(
                        "GOAWAY payload of {} bytes",
                        frame.payload_len()
                    )));
                }
                trace!("peer sent GOAWAY");
            }
            Some(FrameType::PushPromise) => {
                // clients do not push; ignored
            }
            None => {
                // unknown frame types must be ignored
                trace!(frame_type = frame.frame_type, "ignoring unknown frame type");
            }
        }
    }
}

/// Process a HEADERS frame and the CONTINUATIONs completing its block.
fn handle_headers<R: InputStream>(
    frame: RawFrame,
    input: &mut R,
    streams: &mut HashMap<u32, Http2Stream>,
    next_client_stream: &mut u32,
    decoder: &mut hpack::Decoder,
    local_settings: &Settings,
) -> Result<()> {
    let stream_id = frame.stream_id;
    if stream_id == 0 {
        return Err(Error::Protocol("HEADERS frame on stream 0".to_string()));
    }
    if stream_id & 1 == 0 {
        return Err(Error::Protocol(format!(
            "client HEADERS on even stream {stream_id}"
        )));
    }
    if stream_id < *next_client_stream {
        return Err(Error::Protocol(format!(
            "stream id {stream_id} does not increase"
        )));
    }
    *next_client_stream = stream_id + 2;

    let flags = frame.flags;
    let mut payload = frame.payload;
    if flags.is_padded() {
        if payload.is_empty() {
            return Err(Error::Protocol("padded HEADERS without pad length".to_string()));
        }
        let pad_length = usize::from(payload[0]);
        payload.advance(1);
        if payload.len() < pad_length {
            return Err(Error::Protocol("HEADERS padding exceeds payload".to_string()));
        }
        payload.truncate(payload.len() - pad_length);
    }
    if flags.is_priority() {
        if payload.len() < 6 {
            return Err(Error::Protocol("HEADERS priority info truncated".to_string()));
        }
        payload.advance(6);
    }

    let stream = streams.entry(stream_id).or_default();
    if flags.is_end_stream() {
        stream.open_from_client = false;
    }
    stream.header_block.extend_from_slice(&payload);

    let mut end_headers = flags.is_end_headers();
    while !end_headers {
        let limit = (local_settings.max_frame_size as usize)
            .min(MAX_HEADER_BLOCK_SIZE - stream.header_block.len());
        let cont = codec::read_frame(input, limit)?;
        if cont.frame_type() != Some(FrameType::Continuation) || cont.stream_id != stream_id {
            return Err(Error::Protocol(
                "header block interrupted by another frame".to_string(),
            ));
        }
        stream.header_block.extend_from_slice(&cont.payload);
        end_headers = cont.flags.is_end_headers();
    }

    let block = std::mem::take(&mut stream.header_block);
    let headers = decoder.decode(&block)?;
    debug!(
        stream = stream_id,
        headers = headers.len(),
        "decoded request headers"
    );
    stream.headers = Some(headers);
    Ok(())
}

fn handle_settings(frame: &RawFrame, shared: &SendShared) -> Result<()> {
    if frame.stream_id != 0 {
        return Err(Error::Protocol("SETTINGS frame on nonzero stream".to_string()));
    }

    if frame.flags.is_ack() {
        if frame.payload_len() != 0 {
            return Err(Error::FrameSize("SETTINGS ACK with payload".to_string()));
        }
        if shared.settings_in_flight.fetch_sub(1, Ordering::SeqCst) <= 0 {
            return Err(Error::Protocol(
                "SETTINGS ACK without outstanding SETTINGS".to_string(),
            ));
        }
        return Ok(());
    }

    if frame.payload_len() % 6 != 0 {
        return Err(Error::FrameSize(format!(
            "SETTINGS payload of {} bytes",
            frame.payload_len()
        )));
    }

    let mut state = shared.state.lock().unwrap();
    let mut staged = state.staged_settings;
    let mut records = frame.payload.clone();
    while records.remaining() >= 6 {
        let id = records.get_u16();
        let value = records.get_u32();
        staged.apply(id, value)?;
    }
    state.staged_settings = staged;
    state.settings_acks += 1;
    shared.ready.notify_one();
    Ok(())
}

fn handle_ping(frame: &RawFrame, shared: &SendShared) -> Result<()> {
    if frame.stream_id != 0 {
        return Err(Error::Protocol("PING frame on nonzero stream".to_string()));
    }
    if frame.payload_len() != 8 {
        return Err(Error::FrameSize(format!(
            "PING payload of {} bytes",
            frame.payload_len()
        )));
    }

    if frame.flags.is_ack() {
        trace!("ping acknowledged by peer");
        return Ok(());
    }

    let mut data = [0u8; 8];
    data.copy_from_slice(&frame.payload);
    let mut state = shared.state.lock().unwrap();
    state.pings.push_back(data);
    shared.ready.notify_one();
    Ok(())
}

fn sender_loop<W: OutputStream + ?Sized>(out: &mut W, shared: &SendShared) {
    if let Err(err) = run_sender(out, shared) {
        *shared.failure.lock().unwrap() = Some(err);
    }
}

fn run_sender<W: OutputStream + ?Sized>(out: &mut W, shared: &SendShared) -> Result<()> {
    let mut state = shared.state.lock().unwrap();

    // The server's own SETTINGS is the first frame on the wire.
    shared.settings_in_flight.fetch_add(1, Ordering::SeqCst);
    codec::write_frame(out, FrameType::Settings, 0, 0, &[])?;

    loop {
        // PING ACKs drain before SETTINGS ACKs; shutdown waits for both.
        if let Some(ping) = state.pings.pop_front() {
            codec::write_frame(out, FrameType::Ping, FrameFlags::ACK, 0, &ping)?;
            continue;
        }
        if state.settings_acks > 0 {
            let applied = state.staged_settings;
            state.settings_acks -= 1;
            codec::write_frame(out, FrameType::Settings, FrameFlags::ACK, 0, &[])?;
            trace!(?applied, "applied peer settings");
            continue;
        }
        if state.done {
            return Ok(());
        }
        state = shared.ready.wait(state).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Response;

    fn no_dispatch(_req: Request<'_>) -> HandlerResult {
        Ok(Response::new(200))
    }

    fn frame(frame_type: FrameType, flags: u8, stream_id: u32, payload: &[u8]) -> Vec<u8> {
        let mut wire = Vec::new();
        codec::write_frame(&mut wire, frame_type, flags, stream_id, payload).unwrap();
        wire
    }

    fn connect(frames: &[Vec<u8>]) -> (Result<()>, Vec<RawFrame>) {
        let mut input = CONNECTION_PREFACE.to_vec();
        for f in frames {
            input.extend_from_slice(f);
        }
        let mut src: &[u8] = &input;
        let mut output = Vec::new();
        let result = http2_server(&mut src, &mut output, no_dispatch);

        let mut wire: &[u8] = &output;
        let mut sent = Vec::new();
        while !wire.is_empty() {
            sent.push(codec::read_frame(&mut wire, usize::MAX).unwrap());
        }
        (result, sent)
    }

    #[test]
    fn test_settings_exchange() {
        let (result, sent) = connect(&[frame(FrameType::Settings, 0, 0, &[])]);

        // input runs dry after the exchange
        assert!(matches!(result, Err(Error::Io(_))));

        // server SETTINGS first, then the ACK for the client's
        assert!(sent.len() >= 2);
        assert_eq!(sent[0].frame_type(), Some(FrameType::Settings));
        assert!(!sent[0].flags.is_ack());
        assert_eq!(sent[0].payload_len(), 0);
        assert_eq!(sent[1].frame_type(), Some(FrameType::Settings));
        assert!(sent[1].flags.is_ack());
    }

    #[test]
    fn test_settings_records_are_validated_and_acked() {
        // MAX_FRAME_SIZE = 65536, HEADER_TABLE_SIZE = 8192
        let payload = [0, 5, 0, 1, 0, 0, 0, 1, 0, 0, 32, 0];
        let (result, sent) = connect(&[frame(FrameType::Settings, 0, 0, &payload)]);

        assert!(matches!(result, Err(Error::Io(_))));
        assert!(sent
            .iter()
            .any(|f| f.frame_type() == Some(FrameType::Settings) && f.flags.is_ack()));
    }

    #[test]
    fn test_ping_is_acknowledged_with_same_payload() {
        let data = [9, 8, 7, 6, 5, 4, 3, 2];
        let (result, sent) = connect(&[
            frame(FrameType::Settings, 0, 0, &[]),
            frame(FrameType::Ping, 0, 0, &data),
        ]);

        assert!(matches!(result, Err(Error::Io(_))));
        let pong = sent
            .iter()
            .find(|f| f.frame_type() == Some(FrameType::Ping))
            .expect("no PING ACK sent");
        assert!(pong.flags.is_ack());
        assert_eq!(&pong.payload[..], &data);
    }

    #[test]
    fn test_invalid_preface_writes_nothing() {
        let mut src: &[u8] = b"GET / HTTP/1.1\r\nHost: x\r\n\r\n";
        let mut output = Vec::new();
        let result = http2_server(&mut src, &mut output, no_dispatch);
        assert!(matches!(result, Err(Error::InvalidPreface)));
        assert!(output.is_empty());
    }

    #[test]
    fn test_headers_with_hpack_block_is_accepted() {
        // :method GET, :path /, :scheme http, :authority www.example.com
        let mut block = vec![0x82, 0x84, 0x86, 0x41, 0x0f];
        block.extend_from_slice(b"www.example.com");
        let flags = FrameFlags::END_HEADERS | FrameFlags::END_STREAM;
        let (result, _) = connect(&[frame(FrameType::Headers, flags, 1, &block)]);

        // the connection only dies because the input runs out
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_header_block_spanning_continuations() {
        let mut block = vec![0x82, 0x84, 0x86, 0x41, 0x0f];
        block.extend_from_slice(b"www.example.com");
        let (first, second) = block.split_at(3);

        let (result, _) = connect(&[
            frame(FrameType::Headers, FrameFlags::END_STREAM, 1, first),
            frame(FrameType::Continuation, FrameFlags::END_HEADERS, 1, second),
        ]);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_garbled_header_block_is_a_compression_error() {
        // index 0 is never valid
        let (result, _) = connect(&[frame(
            FrameType::Headers,
            FrameFlags::END_HEADERS,
            1,
            &[0x80],
        )]);
        assert!(matches!(result, Err(Error::Compression(_))));
    }

    #[test]
    fn test_headers_on_stream_zero() {
        let (result, _) = connect(&[frame(FrameType::Headers, FrameFlags::END_HEADERS, 0, &[0x82])]);
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[test]
    fn test_headers_on_even_stream() {
        let (result, _) = connect(&[frame(FrameType::Headers, FrameFlags::END_HEADERS, 2, &[0x82])]);
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[test]
    fn test_stream_ids_must_increase() {
        let (result, _) = connect(&[
            frame(FrameType::Headers, FrameFlags::END_HEADERS, 5, &[0x82]),
            frame(FrameType::Headers, FrameFlags::END_HEADERS, 3, &[0x82]),
        ]);
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[test]
    fn test_interrupted_header_block() {
        let (result, _) = connect(&[
            frame(FrameType::Headers, 0, 1, &[0x82]),
            frame(FrameType::Ping, 0, 0, &[0; 8]),
        ]);
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[test]
    fn test_padded_headers() {
        // pad length 3, block 0x82, three bytes of padding
        let payload = [3, 0x82, 0, 0, 0];
        let flags = FrameFlags::END_HEADERS | FrameFlags::PADDED;
        let (result, _) = connect(&[frame(FrameType::Headers, flags, 1, &payload)]);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_padding_longer_than_payload() {
        let payload = [200, 0x82];
        let flags = FrameFlags::END_HEADERS | FrameFlags::PADDED;
        let (result, _) = connect(&[frame(FrameType::Headers, flags, 1, &payload)]);
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[test]
    fn test_settings_length_not_multiple_of_six() {
        let (result, _) = connect(&[frame(FrameType::Settings, 0, 0, &[0; 5])]);
        assert!(matches!(result, Err(Error::FrameSize(_))));
    }

    #[test]
    fn test_settings_enable_push_must_be_boolean() {
        let payload = [0, 2, 0, 0, 0, 2];
        let (result, _) = connect(&[frame(FrameType::Settings, 0, 0, &payload)]);
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[test]
    fn test_settings_ack_without_outstanding_settings() {
        let (result, _) = connect(&[
            frame(FrameType::Settings, FrameFlags::ACK, 0, &[]),
            frame(FrameType::Settings, FrameFlags::ACK, 0, &[]),
        ]);
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[test]
    fn test_ping_with_wrong_payload_size() {
        let (result, _) = connect(&[frame(FrameType::Ping, 0, 0, &[0; 7])]);
        assert!(matches!(result, Err(Error::FrameSize(_))));
    }

    #[test]
    fn test_oversized_frame_is_rejected() {
        // hand-built header announcing a 20000-byte payload
        let huge = codec::encode_header(FrameType::Data, 0, 1, 20_000);
        let (result, _) = connect(&[huge.to_vec()]);
        assert!(matches!(result, Err(Error::FrameSize(_))));
    }

    #[test]
    fn test_unknown_frame_types_are_ignored() {
        let mut unknown = codec::encode_header(FrameType::Data, 0, 3, 4).to_vec();
        unknown[3] = 0x77; // no such frame type
        unknown.extend_from_slice(&[1, 2, 3, 4]);
        let (result, sent) = connect(&[unknown, frame(FrameType::Settings, 0, 0, &[])]);

        // the unknown frame is skipped; the SETTINGS after it is still acked
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(sent
            .iter()
            .any(|f| f.frame_type() == Some(FrameType::Settings) && f.flags.is_ack()));
    }

    #[test]
    fn test_sender_drains_pings_before_settings_acks() {
        let shared = SendShared::new();
        {
            let mut state = shared.state.lock().unwrap();
            state.settings_acks = 1;
            state.pings.push_back([1; 8]);
            state.pings.push_back([2; 8]);
            state.done = true;
        }

        let mut output = Vec::new();
        run_sender(&mut output, &shared).unwrap();

        let mut wire: &[u8] = &output;
        let mut sent = Vec::new();
        while !wire.is_empty() {
            sent.push(codec::read_frame(&mut wire, usize::MAX).unwrap());
        }

        assert_eq!(sent.len(), 4);
        assert_eq!(sent[0].frame_type(), Some(FrameType::Settings));
        assert!(!sent[0].flags.is_ack());
        assert_eq!(sent[1].frame_type(), Some(FrameType::Ping));
        assert_eq!(&sent[1].payload[..], &[1; 8]);
        assert_eq!(sent[2].frame_type(), Some(FrameType::Ping));
        assert_eq!(&sent[2].payload[..], &[2; 8]);
        assert_eq!(sent[3].frame_type(), Some(FrameType::Settings));
        assert!(sent[3].flags.is_ack());
    }

    #[test]
    fn test_sender_failure_reaches_the_caller() {
        struct BrokenSink;
        impl OutputStream for BrokenSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "sink gone",
                ))
            }
        }

        let mut input = CONNECTION_PREFACE.to_vec();
        input.extend_from_slice(&frame(FrameType::Settings, 0, 0, &[]));
        let mut src: &[u8] = &input;
        let mut sink = BrokenSink;
        let result = http2_server(&mut src, &mut sink, no_dispatch);
        assert!(result.is_err());
    }
}
