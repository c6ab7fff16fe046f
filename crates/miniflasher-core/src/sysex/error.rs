use thiserror::Error;

use crate::usage::UsageError;

/// Framing errors for preset sysex messages.
///
/// # Examples
/// ```
/// use miniflasher_core::{SysexError, parse_preset_message};
///
/// let err = parse_preset_message(&[0xF0, 0xF7]).unwrap_err();
/// assert!(matches!(err, SysexError::WrongLength { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SysexError {
    #[error("preset message must be {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("missing sysex start byte (found 0x{found:02X})")]
    MissingStart { found: u8 },
    #[error("missing sysex end byte (found 0x{found:02X})")]
    MissingEnd { found: u8 },
    #[error("message is not from an MPK mini (device id {id})")]
    ForeignDevice { id: String },
    #[error("invalid slot in message: {0}")]
    Slot(#[from] UsageError),
}
