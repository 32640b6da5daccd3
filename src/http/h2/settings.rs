//! HTTP/2 settings (RFC 7540 Section 6.5)
//!
//! Each endpoint keeps one record per direction. Values received in a
//! SETTINGS frame are validated and staged, then applied by the sender when
//! it acknowledges them.

use std::fmt;

use tracing::trace;

use super::error::{Error, Result};
use super::{DEFAULT_HEADER_TABLE_SIZE, DEFAULT_INITIAL_WINDOW_SIZE, DEFAULT_MAX_FRAME_SIZE};

/// HTTP/2 settings parameters (RFC 7540 Section 6.5.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum SettingsParameter {
    /// SETTINGS_HEADER_TABLE_SIZE (0x1)
    HeaderTableSize = 0x1,
    /// SETTINGS_ENABLE_PUSH (0x2)
    EnablePush = 0x2,
    /// SETTINGS_MAX_CONCURRENT_STREAMS (0x3)
    MaxConcurrentStreams = 0x3,
    /// SETTINGS_INITIAL_WINDOW_SIZE (0x4)
    InitialWindowSize = 0x4,
    /// SETTINGS_MAX_FRAME_SIZE (0x5)
    MaxFrameSize = 0x5,
    /// SETTINGS_MAX_HEADER_LIST_SIZE (0x6)
    MaxHeaderListSize = 0x6,
}

impl SettingsParameter {
    /// Convert to u16
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Create from u16
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x1 => Some(SettingsParameter::HeaderTableSize),
            0x2 => Some(SettingsParameter::EnablePush),
            0x3 => Some(SettingsParameter::MaxConcurrentStreams),
            0x4 => Some(SettingsParameter::InitialWindowSize),
            0x5 => Some(SettingsParameter::MaxFrameSize),
            0x6 => Some(SettingsParameter::MaxHeaderListSize),
            _ => None,
        }
    }

    /// Get parameter name
    pub fn name(&self) -> &'static str {
        match self {
            SettingsParameter::HeaderTableSize => "HEADER_TABLE_SIZE",
            SettingsParameter::EnablePush => "ENABLE_PUSH",
            SettingsParameter::MaxConcurrentStreams => "MAX_CONCURRENT_STREAMS",
            SettingsParameter::InitialWindowSize => "INITIAL_WINDOW_SIZE",
            SettingsParameter::MaxFrameSize => "MAX_FRAME_SIZE",
            SettingsParameter::MaxHeaderListSize => "MAX_HEADER_LIST_SIZE",
        }
    }
}

impl fmt::Display for SettingsParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:x})", self.name(), self.as_u16())
    }
}

/// One endpoint's settings, with the protocol defaults.
///
/// `u32::MAX` stands in for the protocol's "unbounded" on
/// `max_concurrent_streams` and `max_header_list_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub header_table_size: u32,
    pub enable_push: bool,
    pub max_concurrent_streams: u32,
    pub initial_window_size: u32,
    pub max_frame_size: u32,
    pub max_header_list_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            header_table_size: DEFAULT_HEADER_TABLE_SIZE,
            enable_push: true,
            max_concurrent_streams: u32::MAX,
            initial_window_size: DEFAULT_INITIAL_WINDOW_SIZE,
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
            max_header_list_size: u32::MAX,
        }
    }
}

impl Settings {
    /// Apply one `(id, value)` record from a SETTINGS frame.
    ///
    /// Validates per RFC 7540 Section 6.5.2: ENABLE_PUSH must be a boolean,
    /// INITIAL_WINDOW_SIZE must not exceed 2^31-1 (flow-control error) and
    /// MAX_FRAME_SIZE must lie in [16384, 2^24-1]. Unknown identifiers are
    /// ignored.
    pub fn apply(&mut self, id: u16, value: u32) -> Result<()> {
        let Some(param) = SettingsParameter::from_u16(id) else {
            trace!(id, value, "ignoring unknown setting");
            return Ok(());
        };
        match param {
            SettingsParameter::HeaderTableSize => self.header_table_size = value,
            SettingsParameter::EnablePush => {
                if value > 1 {
                    return Err(Error::Protocol(format!(
                        "ENABLE_PUSH value {value} is not a boolean"
                    )));
                }
                self.enable_push = value == 1;
            }
            SettingsParameter::MaxConcurrentStreams => self.max_concurrent_streams = value,
            SettingsParameter::InitialWindowSize => {
                if value > 0x7fff_ffff {
                    return Err(Error::FlowControl(format!(
                        "initial window size {value} exceeds 2^31-1"
                    )));
                }
                self.initial_window_size = value;
            }
            SettingsParameter::MaxFrameSize => {
                if !(16384..=0x00ff_ffff).contains(&value) {
                    return Err(Error::Protocol(format!(
                        "max frame size {value} outside [16384, 16777215]"
                    )));
                }
                self.max_frame_size = value;
            }
            SettingsParameter::MaxHeaderListSize => self.max_header_list_size = value,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_conversion() {
        assert_eq!(SettingsParameter::HeaderTableSize.as_u16(), 0x1);
        assert_eq!(
            SettingsParameter::from_u16(0x5),
            Some(SettingsParameter::MaxFrameSize)
        );
        assert_eq!(SettingsParameter::from_u16(0xff), None);
        assert_eq!(SettingsParameter::EnablePush.to_string(), "ENABLE_PUSH (0x2)");
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.header_table_size, 4096);
        assert!(settings.enable_push);
        assert_eq!(settings.max_concurrent_streams, u32::MAX);
        assert_eq!(settings.initial_window_size, 65535);
        assert_eq!(settings.max_frame_size, 16384);
        assert_eq!(settings.max_header_list_size, u32::MAX);
    }

    #[test]
    fn test_apply_updates_fields() {
        let mut settings = Settings::default();
        settings.apply(0x1, 8192).unwrap();
        settings.apply(0x2, 0).unwrap();
        settings.apply(0x3, 100).unwrap();
        settings.apply(0x4, 1 << 20).unwrap();
        settings.apply(0x5, 65536).unwrap();
        settings.apply(0x6, 32768).unwrap();

        assert_eq!(settings.header_table_size, 8192);
        assert!(!settings.enable_push);
        assert_eq!(settings.max_concurrent_streams, 100);
        assert_eq!(settings.initial_window_size, 1 << 20);
        assert_eq!(settings.max_frame_size, 65536);
        assert_eq!(settings.max_header_list_size, 32768);
    }

    #[test]
    fn test_apply_validates_enable_push() {
        let mut settings = Settings::default();
        assert!(matches!(settings.apply(0x2, 2), Err(Error::Protocol(_))));
    }

    #[test]
    fn test_apply_validates_initial_window_size() {
        let mut settings = Settings::default();
        assert!(matches!(
            settings.apply(0x4, 0x8000_0000),
            Err(Error::FlowControl(_))
        ));
    }

    #[test]
    fn test_apply_validates_max_frame_size() {
        let mut settings = Settings::default();
        assert!(matches!(settings.apply(0x5, 16383), Err(Error::Protocol(_))));
        assert!(matches!(
            settings.apply(0x5, 1 << 24),
            Err(Error::Protocol(_))
        ));
    }

    #[test]
    fn test_apply_ignores_unknown_ids() {
        let mut settings = Settings::default();
        settings.apply(0x8, 1).unwrap();
        settings.apply(0x9, 1).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
