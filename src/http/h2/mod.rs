//! HTTP/2 server core
//!
//! [`http2_server`] speaks RFC 7540 framing over the same stream traits the
//! HTTP/1.1 loop uses. Each connection runs two cooperating threads: the
//! calling thread reads and validates frames, drives the stream registry
//! and decodes HPACK header blocks, while a dedicated sender owns the write
//! sink and interleaves control traffic (the server SETTINGS, PING
//! acknowledgements, SETTINGS acknowledgements).
//!
//! Server push, prioritisation and outbound flow-control enforcement are
//! not implemented; peer settings are tracked and acknowledged but only
//! constrain the inbound side.

pub mod codec;
pub mod error;
pub mod frames;
pub mod hpack;
pub mod server;
pub mod settings;
pub mod stream;

pub use error::{Error, ErrorCode, Result};
pub use frames::{FrameFlags, FrameType};
pub use server::http2_server;
pub use settings::Settings;
pub use stream::Http2Stream;

/// HTTP/2 connection preface that every client must send first
/// (RFC 7540 Section 3.5).
pub const CONNECTION_PREFACE: &[u8] = b"PRI * HTTP/2.0\r\n\r\nSM\r\n\r\n";

/// Default header compression table size (4096 bytes).
pub const DEFAULT_HEADER_TABLE_SIZE: u32 = 4096;

/// Default initial flow-control window size (65535 bytes).
pub const DEFAULT_INITIAL_WINDOW_SIZE: u32 = 65535;

/// Default maximum frame payload size (16384 bytes).
pub const DEFAULT_MAX_FRAME_SIZE: u32 = 16384;
