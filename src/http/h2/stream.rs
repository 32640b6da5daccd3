//! Per-stream state
//!
//! The server tracks client-initiated streams in a registry keyed by
//! stream id. Header block fragments accumulate here across HEADERS and
//! CONTINUATION frames until END_HEADERS completes the block.

use super::hpack::Header;

/// Stream ID type
pub type StreamId = u32;

/// State kept per client-initiated stream.
#[derive(Debug)]
pub struct Http2Stream {
    /// Header block fragments accumulated so far.
    pub header_block: Vec<u8>,
    /// Whether the client half of the stream is still open; cleared by
    /// END_STREAM.
    pub open_from_client: bool,
    /// The decoded request headers, once a complete block has arrived.
    pub headers: Option<Vec<Header>>,
}

impl Http2Stream {
    pub fn new() -> Self {
        Http2Stream {
            header_block: Vec::new(),
            open_from_client: true,
            headers: None,
        }
    }
}

impl Default for Http2Stream {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stream_is_open() {
        let stream = Http2Stream::new();
        assert!(stream.open_from_client);
        assert!(stream.header_block.is_empty());
        assert!(stream.headers.is_none());
    }
}
