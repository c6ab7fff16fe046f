use crate::codec::layout::PRESET_LEN;

pub const SYSEX_START: u8 = 0xF0;
pub const SYSEX_END: u8 = 0xF7;

/// Manufacturer (Akai), device and model id shared by every preset message.
pub const DEVICE_ID: &[u8; 3] = &[0x47, 0x7F, 0x7C];

pub const COMMAND_DUMP: u8 = 0x63;
pub const COMMAND_STORE: u8 = 0x61;

pub const READ_HEADER: &[u8; 6] = &[0x47, 0x7F, 0x7C, COMMAND_DUMP, 0x00, 0x01];
pub const WRITE_HEADER: &[u8; 6] = &[0x47, 0x7F, 0x7C, COMMAND_STORE, 0x00, 0x01];

pub const START_OFFSET: usize = 0;
pub const DEVICE_ID_RANGE: std::ops::Range<usize> = 1..4;
pub const COMMAND_OFFSET: usize = 4;
pub const HEADER_RANGE: std::ops::Range<usize> = 1..7;
pub const SLOT_OFFSET: usize = 7;
pub const PAYLOAD_OFFSET: usize = 8;
pub const PAYLOAD_RANGE: std::ops::Range<usize> = PAYLOAD_OFFSET..PAYLOAD_OFFSET + PRESET_LEN;

/// Framed read request: start, header, slot, end.
pub const READ_REQUEST_LEN: usize = SLOT_OFFSET + 2;
/// Framed read response or write request: start, header, slot, preset, end.
pub const PRESET_MESSAGE_LEN: usize = PAYLOAD_RANGE.end + 1;
pub const END_OFFSET: usize = PRESET_MESSAGE_LEN - 1;

const _: () = assert!(HEADER_RANGE.end == SLOT_OFFSET);
const _: () = assert!(PRESET_MESSAGE_LEN == 110);
