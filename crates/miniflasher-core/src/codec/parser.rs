use log::debug;

use super::error::FormatError;
use super::layout;
use super::reader::PresetReader;
use crate::{Arpeggio, Knob, Pad, StructuredPreset};

/// Unpacks a raw 101-byte preset into its structured form.
///
/// Field values are copied as-is; a byte the validator would reject still
/// decodes.
pub fn decode(raw: &[u8]) -> Result<StructuredPreset, FormatError> {
    let reader = PresetReader::new(raw)?;

    let arpeggio = Arpeggio {
        enable: reader.read_u8(layout::ARP_ENABLE_OFFSET),
        mode: reader.read_u8(layout::ARP_MODE_OFFSET),
        time_division: reader.read_u8(layout::ARP_TIME_DIVISION_OFFSET),
        clock: reader.read_u8(layout::ARP_CLOCK_OFFSET),
        latch: reader.read_u8(layout::ARP_LATCH_OFFSET),
        tempo_taps: reader.read_u8(layout::ARP_TEMPO_TAPS_OFFSET),
        tempo_bpm: reader.read_base128(layout::ARP_TEMPO_RANGE.clone()),
        octave: reader.read_u8(layout::ARP_OCTAVE_OFFSET),
    };

    let preset = StructuredPreset {
        pad_midi_ch: reader.read_u8(layout::PAD_MIDI_CH_OFFSET),
        key_knob_midi_ch: reader.read_u8(layout::KEY_KNOB_MIDI_CH_OFFSET),
        octave: reader.read_u8(layout::OCTAVE_OFFSET),
        transposition: reader.read_u8(layout::TRANSPOSITION_OFFSET),
        arpeggio,
        pad_bank_1: read_pad_bank(&reader, layout::PAD_BANK_1_OFFSET),
        pad_bank_2: read_pad_bank(&reader, layout::PAD_BANK_2_OFFSET),
        knobs: read_knobs(&reader),
    };
    debug!(
        "decoded preset: tempo {} bpm, pad channel {}",
        preset.arpeggio.tempo_bpm, preset.pad_midi_ch
    );
    Ok(preset)
}

fn read_pad_bank(reader: &PresetReader<'_>, base: usize) -> Vec<Pad> {
    reader
        .records(base, layout::PAD_STRIDE, layout::PADS_PER_BANK)
        .enumerate()
        .map(|(index, record)| Pad {
            pad_no: index as u8,
            note: record[layout::PAD_NOTE_OFFSET],
            pc: record[layout::PAD_PC_OFFSET],
            cc: record[layout::PAD_CC_OFFSET],
            pad_type: record[layout::PAD_TYPE_OFFSET],
        })
        .collect()
}

fn read_knobs(reader: &PresetReader<'_>) -> Vec<Knob> {
    reader
        .records(layout::KNOBS_OFFSET, layout::KNOB_STRIDE, layout::KNOB_COUNT)
        .enumerate()
        .map(|(index, record)| Knob {
            knob_no: index as u8,
            cc: record[layout::KNOB_CC_OFFSET],
            low: record[layout::KNOB_LOW_OFFSET],
            high: record[layout::KNOB_HIGH_OFFSET],
        })
        .collect()
}
