//! miniflasher core library: MPK mini preset codec and validation.
//!
//! The device stores a preset as 101 raw bytes exchanged over sysex. This
//! crate maps that buffer to a structured, serializable preset and back,
//! and checks structured presets against the ranges the device accepts
//! before anything is sent to it:
//! - `codec`: pure decode/encode between `RawPreset` and `StructuredPreset`
//! - `validate`: declarative range schema, all-or-nothing acceptance
//! - `sysex`: request/response framing around the raw buffer
//! - `source`: `.syx` dump files (the only file I/O in this crate)
//! - `flash`: read and write paths tying the above together
//!
//! Invariants:
//! - A raw preset is exactly 101 bytes on both decode and encode.
//! - Decode never validates; encode never re-validates ranges.
//! - `pad_no` and `knob_no` are positions, never stored in raw bytes.
//!
//! # Examples
//! ```
//! use miniflasher_core::{decode, encode, validate};
//!
//! let mut raw = [0u8; 101];
//! raw[9] = 2;
//! raw[10] = 1;
//! raw[11] = 50;
//! let preset = decode(&raw)?;
//! assert_eq!(preset.arpeggio.tempo_bpm, 178);
//!
//! let preset = validate(preset)?;
//! assert_eq!(encode(&preset)?, raw);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod codec;
mod document;
mod flash;
mod source;
mod sysex;
mod usage;
mod validate;

pub use codec::layout::{KNOB_COUNT, PADS_PER_BANK, PRESET_LEN};
pub use codec::{FormatError, decode, encode};
pub use document::{DocumentError, preset_from_json, preset_to_json};
pub use flash::{FlashError, read_dump, read_dump_file, read_preset, write_preset};
pub use source::{MessageSource, SourceError, SyxFileSource};
pub use sysex::{
    Command, PresetMessage, SysexError, parse_preset_message, read_request, write_request,
};
pub use usage::{PresetSlot, UsageError, check_document_path};
pub use validate::{Domain, ValidationError, validate, violations};

/// The raw preset buffer as the device stores it.
pub type RawPreset = [u8; PRESET_LEN];

/// Decoded preset; the long-lived, serializable form.
///
/// # Examples
/// ```
/// use miniflasher_core::{StructuredPreset, decode};
///
/// let preset: StructuredPreset = decode(&[0u8; 101])?;
/// assert_eq!(preset.pad_bank_1.len(), 8);
/// assert_eq!(preset.knobs[7].knob_no, 7);
/// # Ok::<(), miniflasher_core::FormatError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredPreset {
    /// MIDI channel of the pads (0-15).
    pub pad_midi_ch: u8,
    /// MIDI channel of the keys and knobs (0-15).
    pub key_knob_midi_ch: u8,
    /// Keyboard octave (0-8).
    pub octave: u8,
    /// Transposition (0-24).
    pub transposition: u8,
    pub arpeggio: Arpeggio,
    /// Exactly `PADS_PER_BANK` pads.
    pub pad_bank_1: Vec<Pad>,
    /// Exactly `PADS_PER_BANK` pads.
    pub pad_bank_2: Vec<Pad>,
    /// Exactly `KNOB_COUNT` knobs.
    pub knobs: Vec<Knob>,
}

/// Arpeggiator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arpeggio {
    pub enable: u8,
    pub mode: u8,
    pub time_division: u8,
    pub clock: u8,
    pub latch: u8,
    pub tempo_taps: u8,
    /// Carried on the wire as two base-128 digits.
    pub tempo_bpm: u16,
    pub octave: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pad {
    /// Position within the bank (0-7); derived, not stored in raw bytes.
    pub pad_no: u8,
    pub note: u8,
    pub pc: u8,
    pub cc: u8,
    /// Flag byte, stored under `type` in documents.
    #[serde(rename = "type")]
    pub pad_type: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knob {
    /// Position (0-7); derived, not stored in raw bytes.
    pub knob_no: u8,
    pub cc: u8,
    pub low: u8,
    pub high: u8,
}
