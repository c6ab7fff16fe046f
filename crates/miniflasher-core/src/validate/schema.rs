use std::fmt;

use crate::{Arpeggio, Knob, Pad, StructuredPreset};

/// Legal values for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Inclusive range.
    Range { min: u16, max: u16 },
    /// Boolean stored as a byte: 0 or 1.
    Flag,
}

impl Domain {
    pub const fn range(min: u16, max: u16) -> Self {
        Domain::Range { min, max }
    }

    pub fn contains(&self, value: u16) -> bool {
        match *self {
            Domain::Range { min, max } => (min..=max).contains(&value),
            Domain::Flag => value <= 1,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Range { min, max } => write!(f, "{}..={}", min, max),
            Domain::Flag => write!(f, "{{0, 1}}"),
        }
    }
}

pub const MIDI_CHANNEL: Domain = Domain::range(0, 15);
pub const BYTE: Domain = Domain::range(0, 255);
pub const SEVEN_BIT: Domain = Domain::range(0, 127);

/// One row of the schema: a named field, how to read it, and its domain.
pub struct Rule<T> {
    pub field: &'static str,
    pub domain: Domain,
    pub read: fn(&T) -> u16,
}

impl<T> Rule<T> {
    pub fn value(&self, target: &T) -> u16 {
        (self.read)(target)
    }
}

pub static PRESET_RULES: &[Rule<StructuredPreset>] = &[
    Rule {
        field: "pad_midi_ch",
        domain: MIDI_CHANNEL,
        read: |p| p.pad_midi_ch.into(),
    },
    Rule {
        field: "key_knob_midi_ch",
        domain: MIDI_CHANNEL,
        read: |p| p.key_knob_midi_ch.into(),
    },
    Rule {
        field: "octave",
        domain: Domain::range(0, 8),
        read: |p| p.octave.into(),
    },
    Rule {
        field: "transposition",
        domain: Domain::range(0, 24),
        read: |p| p.transposition.into(),
    },
];

pub static ARPEGGIO_RULES: &[Rule<Arpeggio>] = &[
    Rule {
        field: "arpeggio.enable",
        domain: Domain::Flag,
        read: |a| a.enable.into(),
    },
    Rule {
        field: "arpeggio.mode",
        domain: Domain::range(0, 5),
        read: |a| a.mode.into(),
    },
    Rule {
        field: "arpeggio.time_division",
        domain: Domain::range(0, 7),
        read: |a| a.time_division.into(),
    },
    Rule {
        field: "arpeggio.clock",
        domain: Domain::Flag,
        read: |a| a.clock.into(),
    },
    Rule {
        field: "arpeggio.latch",
        domain: Domain::Flag,
        read: |a| a.latch.into(),
    },
    Rule {
        field: "arpeggio.tempo_taps",
        domain: Domain::range(2, 4),
        read: |a| a.tempo_taps.into(),
    },
    Rule {
        field: "arpeggio.tempo_bpm",
        domain: Domain::range(30, 240),
        read: |a| a.tempo_bpm,
    },
    Rule {
        field: "arpeggio.octave",
        domain: Domain::range(0, 3),
        read: |a| a.octave.into(),
    },
];

pub static PAD_RULES: &[Rule<Pad>] = &[
    Rule {
        field: "note",
        domain: BYTE,
        read: |p| p.note.into(),
    },
    Rule {
        field: "pc",
        domain: BYTE,
        read: |p| p.pc.into(),
    },
    Rule {
        field: "cc",
        domain: BYTE,
        read: |p| p.cc.into(),
    },
    Rule {
        field: "type",
        domain: Domain::Flag,
        read: |p| p.pad_type.into(),
    },
];

pub static KNOB_RULES: &[Rule<Knob>] = &[
    Rule {
        field: "cc",
        domain: BYTE,
        read: |k| k.cc.into(),
    },
    Rule {
        field: "low",
        domain: SEVEN_BIT,
        read: |k| k.low.into(),
    },
    Rule {
        field: "high",
        domain: SEVEN_BIT,
        read: |k| k.high.into(),
    },
];

#[cfg(test)]
mod tests {
    use super::{Domain, MIDI_CHANNEL};

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(MIDI_CHANNEL.contains(0));
        assert!(MIDI_CHANNEL.contains(15));
        assert!(!MIDI_CHANNEL.contains(16));
        assert!(!Domain::range(2, 4).contains(1));
    }

    #[test]
    fn flag_accepts_zero_and_one() {
        assert!(Domain::Flag.contains(0));
        assert!(Domain::Flag.contains(1));
        assert!(!Domain::Flag.contains(2));
    }

    #[test]
    fn domain_display() {
        assert_eq!(Domain::range(30, 240).to_string(), "30..=240");
        assert_eq!(Domain::Flag.to_string(), "{0, 1}");
    }
}
