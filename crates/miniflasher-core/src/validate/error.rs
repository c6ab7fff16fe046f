use thiserror::Error;

use super::schema::Domain;

/// A preset field outside the range the device accepts.
///
/// `field` is a path into the document form, e.g. `arpeggio.tempo_bpm`,
/// `pad_bank_2[3].type` or `knobs[5].low`. `value` is signed so document
/// numbers that do not fit the field's storage width can be reported too.
///
/// # Examples
/// ```
/// use miniflasher_core::{Domain, ValidationError};
///
/// let err = ValidationError::OutOfRange {
///     field: "pad_midi_ch".to_string(),
///     value: 16,
///     domain: Domain::range(0, 15),
/// };
/// assert_eq!(err.to_string(), "pad_midi_ch must be in 0..=15, got 16");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be in {domain}, got {value}")]
    OutOfRange {
        field: String,
        value: i64,
        domain: Domain,
    },
    #[error("{field}: low ({low}) must not exceed high ({high})")]
    InvertedKnobRange { field: String, low: u8, high: u8 },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::OutOfRange { field, .. } => field,
            ValidationError::InvertedKnobRange { field, .. } => field,
        }
    }
}
