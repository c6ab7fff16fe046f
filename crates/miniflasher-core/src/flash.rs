//! Read and write paths between sysex messages and structured presets.
//!
//! Read: unframe -> slot check -> decode. Nothing is validated; the dump is
//! taken as the device state.
//! Write: validate -> encode -> frame. A rejected preset produces no bytes.

use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::StructuredPreset;
use crate::codec::{FormatError, decode, encode};
use crate::source::{MessageSource, SourceError, SyxFileSource};
use crate::sysex::{SysexError, parse_preset_message, write_request};
use crate::usage::{PresetSlot, UsageError};
use crate::validate::{ValidationError, validate};

#[derive(Debug, Error)]
pub enum FlashError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Sysex(#[from] SysexError),
    #[error(transparent)]
    Usage(#[from] UsageError),
    #[error("dump source error: {0}")]
    Source(#[from] SourceError),
    #[error("dump holds preset slot {found}, expected slot {expected}")]
    SlotMismatch {
        expected: PresetSlot,
        found: PresetSlot,
    },
    #[error("no sysex message found in dump")]
    EmptyDump,
}

/// Decodes a framed preset message addressed to `expected`.
pub fn read_preset(message: &[u8], expected: PresetSlot) -> Result<StructuredPreset, FlashError> {
    let parsed = parse_preset_message(message)?;
    if parsed.slot != expected {
        return Err(FlashError::SlotMismatch {
            expected,
            found: parsed.slot,
        });
    }
    debug!("reading {:?} message for slot {}", parsed.command, parsed.slot);
    Ok(decode(parsed.preset)?)
}

/// Validates and encodes `preset` into a framed write request for `slot`.
///
/// # Examples
/// ```
/// use miniflasher_core::{PresetSlot, decode, write_preset};
///
/// let mut preset = decode(&[0u8; 101])?;
/// preset.arpeggio.tempo_taps = 4;
/// preset.arpeggio.tempo_bpm = 90;
/// let message = write_preset(PresetSlot::try_from(2)?, preset)?;
/// assert_eq!(message.len(), 110);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_preset(slot: PresetSlot, preset: StructuredPreset) -> Result<Vec<u8>, FlashError> {
    let preset = validate(preset)?;
    let raw = encode(&preset)?;
    info!("preset for slot {} passed validation", slot);
    Ok(write_request(slot, &raw))
}

/// Reads the first message from `source` as the preset for `expected`.
pub fn read_dump<S: MessageSource>(
    source: &mut S,
    expected: PresetSlot,
) -> Result<StructuredPreset, FlashError> {
    let message = source.next_message()?.ok_or(FlashError::EmptyDump)?;
    read_preset(&message, expected)
}

pub fn read_dump_file(path: &Path, expected: PresetSlot) -> Result<StructuredPreset, FlashError> {
    let mut source = SyxFileSource::open(path)?;
    read_dump(&mut source, expected)
}
