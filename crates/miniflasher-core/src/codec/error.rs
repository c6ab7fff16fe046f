use thiserror::Error;

/// Structural errors raised by the preset codec.
///
/// These never describe a field value; range problems are reported by the
/// validator.
///
/// # Examples
/// ```
/// use miniflasher_core::{FormatError, decode};
///
/// let err = decode(&[0u8; 100]).unwrap_err();
/// assert!(matches!(err, FormatError::WrongLength { expected: 101, actual: 100 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("preset buffer must be exactly {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("{collection} must hold exactly {expected} entries, got {actual}")]
    WrongCount {
        collection: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("arpeggio tempo {value} cannot be encoded (max {max})")]
    TempoOverflow { value: u16, max: u16 },
}
