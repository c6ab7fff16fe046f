pub const PRESET_LEN: usize = 101;

pub const PAD_MIDI_CH_OFFSET: usize = 0;
pub const KEY_KNOB_MIDI_CH_OFFSET: usize = 1;
pub const OCTAVE_OFFSET: usize = 2;
pub const TRANSPOSITION_OFFSET: usize = 3;

pub const ARP_ENABLE_OFFSET: usize = 4;
pub const ARP_MODE_OFFSET: usize = 5;
pub const ARP_TIME_DIVISION_OFFSET: usize = 6;
pub const ARP_CLOCK_OFFSET: usize = 7;
pub const ARP_LATCH_OFFSET: usize = 8;
pub const ARP_TEMPO_TAPS_OFFSET: usize = 9;
pub const ARP_TEMPO_RANGE: std::ops::Range<usize> = 10..12;
pub const ARP_OCTAVE_OFFSET: usize = 12;

pub const HEADER_LEN: usize = 13;

/// Tempo is carried as two 7-bit digits, most significant first.
pub const TEMPO_RADIX: u16 = 128;
pub const TEMPO_MAX_ENCODABLE: u16 = 255 * TEMPO_RADIX + (TEMPO_RADIX - 1);

pub const PADS_PER_BANK: usize = 8;
pub const PAD_STRIDE: usize = 4;
pub const PAD_NOTE_OFFSET: usize = 0;
pub const PAD_PC_OFFSET: usize = 1;
pub const PAD_CC_OFFSET: usize = 2;
pub const PAD_TYPE_OFFSET: usize = 3;
pub const PAD_BANK_LEN: usize = PADS_PER_BANK * PAD_STRIDE;
pub const PAD_BANK_1_OFFSET: usize = HEADER_LEN;
pub const PAD_BANK_2_OFFSET: usize = PAD_BANK_1_OFFSET + PAD_BANK_LEN;

pub const KNOB_COUNT: usize = 8;
pub const KNOB_STRIDE: usize = 3;
pub const KNOB_CC_OFFSET: usize = 0;
pub const KNOB_LOW_OFFSET: usize = 1;
pub const KNOB_HIGH_OFFSET: usize = 2;
pub const KNOBS_OFFSET: usize = PAD_BANK_2_OFFSET + PAD_BANK_LEN;
pub const KNOBS_LEN: usize = KNOB_COUNT * KNOB_STRIDE;

const _: () = assert!(ARP_OCTAVE_OFFSET + 1 == HEADER_LEN);
const _: () = assert!(ARP_TEMPO_RANGE.end == ARP_OCTAVE_OFFSET);
const _: () = assert!(PAD_TYPE_OFFSET < PAD_STRIDE);
const _: () = assert!(KNOB_HIGH_OFFSET < KNOB_STRIDE);
const _: () = assert!(PAD_BANK_2_OFFSET == 45);
const _: () = assert!(KNOBS_OFFSET == 77);
const _: () = assert!(KNOBS_OFFSET + KNOBS_LEN == PRESET_LEN);
