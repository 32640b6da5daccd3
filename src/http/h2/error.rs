//! HTTP/2 error types
//!
//! Connection errors map onto the error codes defined in RFC 7540
//! Section 7. Recovery is always per-connection: once any violation is
//! observed the connection is torn down and never reused.

use std::fmt;

use super::hpack::DecodeError;

/// HTTP/2 connection errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error on the underlying transport
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Protocol violation (RFC 7540 Section 7 - error code 0x1)
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Flow-control violation (RFC 7540 Section 7 - error code 0x3)
    #[error("flow control error: {0}")]
    FlowControl(String),

    /// Incorrectly sized frame (RFC 7540 Section 7 - error code 0x6)
    #[error("frame size error: {0}")]
    FrameSize(String),

    /// Header block failed to decode (RFC 7540 Section 7 - error code 0x9)
    #[error("compression error: {0}")]
    Compression(#[from] DecodeError),

    /// The 24-byte client preface did not match
    #[error("invalid client preface")]
    InvalidPreface,
}

impl Error {
    /// The RFC 7540 error code a GOAWAY for this error would carry.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Error::Io(_) => ErrorCode::InternalError,
            Error::Protocol(_) => ErrorCode::ProtocolError,
            Error::FlowControl(_) => ErrorCode::FlowControlError,
            Error::FrameSize(_) => ErrorCode::FrameSizeError,
            Error::Compression(_) => ErrorCode::CompressionError,
            Error::InvalidPreface => ErrorCode::ProtocolError,
        }
    }
}

/// HTTP/2 error codes as defined in RFC 7540 Section 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    /// Graceful shutdown
    NoError = 0x0,
    /// Protocol error detected
    ProtocolError = 0x1,
    /// Implementation fault
    InternalError = 0x2,
    /// Flow-control limits exceeded
    FlowControlError = 0x3,
    /// Settings not acknowledged
    SettingsTimeout = 0x4,
    /// Frame received for closed stream
    StreamClosed = 0x5,
    /// Frame size incorrect
    FrameSizeError = 0x6,
    /// Stream not processed
    RefusedStream = 0x7,
    /// Stream cancelled
    Cancel = 0x8,
    /// Compression state not updated
    CompressionError = 0x9,
    /// TCP connection error for CONNECT method
    ConnectError = 0xa,
    /// Processing capacity exceeded
    EnhanceYourCalm = 0xb,
    /// Negotiated TLS parameters not acceptable
    InadequateSecurity = 0xc,
    /// Use HTTP/1.1 for the request
    Http11Required = 0xd,
}

impl ErrorCode {
    /// Convert error code to u32
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Create error code from u32
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            0x0 => Some(ErrorCode::NoError),
            0x1 => Some(ErrorCode::ProtocolError),
            0x2 => Some(ErrorCode::InternalError),
            0x3 => Some(ErrorCode::FlowControlError),
            0x4 => Some(ErrorCode::SettingsTimeout),
            0x5 => Some(ErrorCode::StreamClosed),
            0x6 => Some(ErrorCode::FrameSizeError),
            0x7 => Some(ErrorCode::RefusedStream),
            0x8 => Some(ErrorCode::Cancel),
            0x9 => Some(ErrorCode::CompressionError),
            0xa => Some(ErrorCode::ConnectError),
            0xb => Some(ErrorCode::EnhanceYourCalm),
            0xc => Some(ErrorCode::InadequateSecurity),
            0xd => Some(ErrorCode::Http11Required),
            _ => None,
        }
    }

    /// Get error name
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::NoError => "NO_ERROR",
            ErrorCode::ProtocolError => "PROTOCOL_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::FlowControlError => "FLOW_CONTROL_ERROR",
            ErrorCode::SettingsTimeout => "SETTINGS_TIMEOUT",
            ErrorCode::StreamClosed => "STREAM_CLOSED",
            ErrorCode::FrameSizeError => "FRAME_SIZE_ERROR",
            ErrorCode::RefusedStream => "REFUSED_STREAM",
            ErrorCode::Cancel => "CANCEL",
            ErrorCode::CompressionError => "COMPRESSION_ERROR",
            ErrorCode::ConnectError => "CONNECT_ERROR",
            ErrorCode::EnhanceYourCalm => "ENHANCE_YOUR_CALM",
            ErrorCode::InadequateSecurity => "INADEQUATE_SECURITY",
            ErrorCode::Http11Required => "HTTP_1_1_REQUIRED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:x})", self.name(), self.as_u32())
    }
}

/// Result type for HTTP/2 operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_conversion() {
        assert_eq!(ErrorCode::NoError.as_u32(), 0x0);
        assert_eq!(ErrorCode::ProtocolError.as_u32(), 0x1);
        assert_eq!(ErrorCode::Http11Required.as_u32(), 0xd);

        assert_eq!(ErrorCode::from_u32(0x0), Some(ErrorCode::NoError));
        assert_eq!(ErrorCode::from_u32(0x9), Some(ErrorCode::CompressionError));
        assert_eq!(ErrorCode::from_u32(0xff), None);
    }

    #[test]
    fn test_error_maps_to_code() {
        assert_eq!(
            Error::Protocol("x".to_string()).error_code(),
            ErrorCode::ProtocolError
        );
        assert_eq!(
            Error::FrameSize("x".to_string()).error_code(),
            ErrorCode::FrameSizeError
        );
        assert_eq!(
            Error::Compression(DecodeError::Truncated).error_code(),
            ErrorCode::CompressionError
        );
        assert_eq!(Error::InvalidPreface.error_code(), ErrorCode::ProtocolError);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FlowControlError.to_string(), "FLOW_CONTROL_ERROR (0x3)");
    }
}
