use log::debug;

use super::error::FormatError;
use super::layout;
use super::writer::PresetWriter;
use crate::{Knob, Pad, RawPreset, StructuredPreset};

/// Packs a structured preset back into the raw 101-byte layout.
///
/// Only the shape is checked (bank and knob counts, tempo width). Field
/// ranges are the validator's job and must be checked before calling this on
/// the write path. `pad_no` and `knob_no` are ignored; position decides.
pub fn encode(preset: &StructuredPreset) -> Result<RawPreset, FormatError> {
    require_count("pad_bank_1", preset.pad_bank_1.len(), layout::PADS_PER_BANK)?;
    require_count("pad_bank_2", preset.pad_bank_2.len(), layout::PADS_PER_BANK)?;
    require_count("knobs", preset.knobs.len(), layout::KNOB_COUNT)?;

    let mut writer = PresetWriter::new();
    writer.write_u8(layout::PAD_MIDI_CH_OFFSET, preset.pad_midi_ch);
    writer.write_u8(layout::KEY_KNOB_MIDI_CH_OFFSET, preset.key_knob_midi_ch);
    writer.write_u8(layout::OCTAVE_OFFSET, preset.octave);
    writer.write_u8(layout::TRANSPOSITION_OFFSET, preset.transposition);

    let arp = &preset.arpeggio;
    writer.write_u8(layout::ARP_ENABLE_OFFSET, arp.enable);
    writer.write_u8(layout::ARP_MODE_OFFSET, arp.mode);
    writer.write_u8(layout::ARP_TIME_DIVISION_OFFSET, arp.time_division);
    writer.write_u8(layout::ARP_CLOCK_OFFSET, arp.clock);
    writer.write_u8(layout::ARP_LATCH_OFFSET, arp.latch);
    writer.write_u8(layout::ARP_TEMPO_TAPS_OFFSET, arp.tempo_taps);
    writer.write_base128(layout::ARP_TEMPO_RANGE.clone(), arp.tempo_bpm)?;
    writer.write_u8(layout::ARP_OCTAVE_OFFSET, arp.octave);

    write_pad_bank(&mut writer, layout::PAD_BANK_1_OFFSET, &preset.pad_bank_1);
    write_pad_bank(&mut writer, layout::PAD_BANK_2_OFFSET, &preset.pad_bank_2);
    write_knobs(&mut writer, &preset.knobs);

    debug!("encoded preset into {} bytes", layout::PRESET_LEN);
    Ok(writer.finish())
}

fn require_count(
    collection: &'static str,
    actual: usize,
    expected: usize,
) -> Result<(), FormatError> {
    if actual != expected {
        return Err(FormatError::WrongCount {
            collection,
            expected,
            actual,
        });
    }
    Ok(())
}

fn write_pad_bank(writer: &mut PresetWriter, base: usize, pads: &[Pad]) {
    for (index, pad) in pads.iter().enumerate() {
        let record = writer.record_mut(base, layout::PAD_STRIDE, index);
        record[layout::PAD_NOTE_OFFSET] = pad.note;
        record[layout::PAD_PC_OFFSET] = pad.pc;
        record[layout::PAD_CC_OFFSET] = pad.cc;
        record[layout::PAD_TYPE_OFFSET] = pad.pad_type;
    }
}

fn write_knobs(writer: &mut PresetWriter, knobs: &[Knob]) {
    for (index, knob) in knobs.iter().enumerate() {
        let record = writer.record_mut(layout::KNOBS_OFFSET, layout::KNOB_STRIDE, index);
        record[layout::KNOB_CC_OFFSET] = knob.cc;
        record[layout::KNOB_LOW_OFFSET] = knob.low;
        record[layout::KNOB_HIGH_OFFSET] = knob.high;
    }
}

#[cfg(test)]
mod tests {
    use super::encode;
    use crate::codec::{FormatError, decode, layout};

    #[test]
    fn encode_splits_tempo() {
        let mut preset = decode(&[0u8; layout::PRESET_LEN]).unwrap();
        preset.arpeggio.tempo_bpm = 178;
        let raw = encode(&preset).unwrap();
        assert_eq!(raw[10], 1);
        assert_eq!(raw[11], 50);
    }

    #[test]
    fn encode_rejects_short_pad_bank() {
        let mut preset = decode(&[0u8; layout::PRESET_LEN]).unwrap();
        preset.pad_bank_2.pop();
        let err = encode(&preset).unwrap_err();
        assert_eq!(
            err,
            FormatError::WrongCount {
                collection: "pad_bank_2",
                expected: 8,
                actual: 7,
            }
        );
    }

    #[test]
    fn encode_rejects_extra_knob() {
        let mut preset = decode(&[0u8; layout::PRESET_LEN]).unwrap();
        let extra = preset.knobs[0].clone();
        preset.knobs.push(extra);
        let err = encode(&preset).unwrap_err();
        assert!(err.to_string().contains("knobs must hold exactly 8 entries, got 9"));
    }

    #[test]
    fn encode_ignores_stored_positions() {
        let raw: Vec<u8> = (0..layout::PRESET_LEN as u8).collect();
        let mut preset = decode(&raw).unwrap();
        preset.pad_bank_1[3].pad_no = 42;
        preset.knobs[5].knob_no = 0;
        assert_eq!(encode(&preset).unwrap().to_vec(), raw);
    }
}
