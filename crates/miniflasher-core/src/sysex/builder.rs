use log::trace;

use super::layout;
use crate::RawPreset;
use crate::usage::PresetSlot;

/// Framed request asking the device to dump `slot`.
///
/// # Examples
/// ```
/// use miniflasher_core::{PresetSlot, read_request};
///
/// let slot = PresetSlot::try_from(1)?;
/// assert_eq!(
///     read_request(slot),
///     vec![0xF0, 0x47, 0x7F, 0x7C, 0x63, 0x00, 0x01, 0x01, 0xF7]
/// );
/// # Ok::<(), miniflasher_core::UsageError>(())
/// ```
pub fn read_request(slot: PresetSlot) -> Vec<u8> {
    let mut message = Vec::with_capacity(layout::READ_REQUEST_LEN);
    message.push(layout::SYSEX_START);
    message.extend_from_slice(layout::READ_HEADER);
    message.push(slot.get());
    message.push(layout::SYSEX_END);
    trace!("built read request for slot {}", slot);
    message
}

/// Framed request storing `preset` into `slot`.
pub fn write_request(slot: PresetSlot, preset: &RawPreset) -> Vec<u8> {
    let mut message = Vec::with_capacity(layout::PRESET_MESSAGE_LEN);
    message.push(layout::SYSEX_START);
    message.extend_from_slice(layout::WRITE_HEADER);
    message.push(slot.get());
    message.extend_from_slice(preset);
    message.push(layout::SYSEX_END);
    trace!("built write request for slot {}", slot);
    message
}
