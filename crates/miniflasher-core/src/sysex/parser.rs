use log::debug;

use super::error::SysexError;
use super::layout;
use super::reader::SysexReader;
use crate::usage::PresetSlot;

/// Direction of a preset message, taken from its command byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Preset dump sent by the device in answer to a read request.
    Dump,
    /// Preset store sent to the device.
    Store,
}

#[derive(Debug)]
pub struct PresetMessage<'a> {
    pub command: Command,
    pub slot: PresetSlot,
    /// The 101 raw preset bytes, still undecoded.
    pub preset: &'a [u8],
}

/// Unframes a preset dump or store message.
///
/// Only the device id is compared; the remaining header bytes are whatever
/// the device echoed back.
pub fn parse_preset_message(message: &[u8]) -> Result<PresetMessage<'_>, SysexError> {
    let reader = SysexReader::new(message);
    reader.require_frame(layout::PRESET_MESSAGE_LEN)?;

    let device_id = reader.read_slice(layout::DEVICE_ID_RANGE.clone())?;
    if device_id != layout::DEVICE_ID {
        return Err(SysexError::ForeignDevice {
            id: reader.read_device_id_hex()?,
        });
    }

    let command = match reader.read_u8(layout::COMMAND_OFFSET)? {
        layout::COMMAND_STORE => Command::Store,
        _ => Command::Dump,
    };
    let slot = PresetSlot::try_from(reader.read_u8(layout::SLOT_OFFSET)?)?;
    let preset = reader.read_slice(layout::PAYLOAD_RANGE.clone())?;
    debug!("unframed {:?} message for slot {}", command, slot);

    Ok(PresetMessage {
        command,
        slot,
        preset,
    })
}

#[cfg(test)]
mod tests {
    use super::{Command, parse_preset_message};
    use crate::sysex::{SysexError, layout, write_request};
    use crate::usage::PresetSlot;

    fn dump_message(slot: u8) -> Vec<u8> {
        let mut message = vec![0u8; layout::PRESET_MESSAGE_LEN];
        message[layout::START_OFFSET] = layout::SYSEX_START;
        message[layout::HEADER_RANGE.clone()].copy_from_slice(layout::READ_HEADER);
        message[layout::SLOT_OFFSET] = slot;
        message[layout::END_OFFSET] = layout::SYSEX_END;
        message
    }

    #[test]
    fn parse_dump_response() {
        let mut message = dump_message(2);
        message[layout::PAYLOAD_OFFSET] = 9;
        let parsed = parse_preset_message(&message).unwrap();
        assert_eq!(parsed.command, Command::Dump);
        assert_eq!(parsed.slot.get(), 2);
        assert_eq!(parsed.preset.len(), 101);
        assert_eq!(parsed.preset[0], 9);
    }

    #[test]
    fn parse_store_request() {
        let slot = PresetSlot::try_from(4).unwrap();
        let message = write_request(slot, &[7u8; 101]);
        let parsed = parse_preset_message(&message).unwrap();
        assert_eq!(parsed.command, Command::Store);
        assert_eq!(parsed.slot, slot);
        assert!(parsed.preset.iter().all(|b| *b == 7));
    }

    #[test]
    fn parse_rejects_missing_end() {
        let mut message = dump_message(1);
        message[layout::END_OFFSET] = 0x00;
        let err = parse_preset_message(&message).unwrap_err();
        assert_eq!(err, SysexError::MissingEnd { found: 0x00 });
    }

    #[test]
    fn parse_rejects_truncated_message() {
        let message = dump_message(1);
        let err = parse_preset_message(&message[..layout::PRESET_MESSAGE_LEN - 1]).unwrap_err();
        assert!(err.to_string().contains("must be 110 bytes, got 109"));
    }

    #[test]
    fn parse_rejects_foreign_device() {
        let mut message = dump_message(1);
        message[layout::DEVICE_ID_RANGE.start] = 0x41;
        let err = parse_preset_message(&message).unwrap_err();
        assert!(err.to_string().contains("41 7F 7C"));
    }

    #[test]
    fn parse_rejects_slot_out_of_range() {
        let message = dump_message(0);
        let err = parse_preset_message(&message).unwrap_err();
        assert!(matches!(err, SysexError::Slot(_)));
    }
}
