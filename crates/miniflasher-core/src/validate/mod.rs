//! Range validation for structured presets.
//!
//! The device accepts a fixed set of values per field; `schema` holds that
//! set as rule tables and this module walks them in a stable order: header
//! fields, arpeggio, pad bank 1, pad bank 2, then knobs. Knobs additionally
//! require `low <= high`.
//!
//! `validate` stops at the first violation and is what the write path uses.
//! `violations` keeps going and is meant for diagnostics only.

use std::ops::ControlFlow;

use log::{debug, trace};

use crate::{Knob, Pad, StructuredPreset};

pub mod error;
pub mod schema;

pub use error::ValidationError;
pub use schema::Domain;

use schema::{ARPEGGIO_RULES, KNOB_RULES, PAD_RULES, PRESET_RULES, Rule};

/// Accepts the preset as a whole or rejects it with the first violation.
///
/// # Examples
/// ```
/// use miniflasher_core::{decode, validate};
///
/// let mut preset = decode(&[0u8; 101])?;
/// preset.arpeggio.tempo_taps = 2;
/// preset.arpeggio.tempo_bpm = 120;
/// assert!(validate(preset.clone()).is_ok());
///
/// preset.pad_midi_ch = 16;
/// assert_eq!(validate(preset).unwrap_err().field(), "pad_midi_ch");
/// # Ok::<(), miniflasher_core::FormatError>(())
/// ```
pub fn validate(preset: StructuredPreset) -> Result<StructuredPreset, ValidationError> {
    let mut first = None;
    walk(&preset, |violation| {
        first = Some(violation);
        ControlFlow::Break(())
    });
    match first {
        Some(violation) => {
            debug!("preset rejected: {}", violation);
            Err(violation)
        }
        None => Ok(preset),
    }
}

/// Every violation in the preset, in the same order `validate` checks them.
pub fn violations(preset: &StructuredPreset) -> Vec<ValidationError> {
    let mut found = Vec::new();
    walk(preset, |violation| {
        found.push(violation);
        ControlFlow::Continue(())
    });
    found
}

fn walk<F>(preset: &StructuredPreset, mut report: F)
where
    F: FnMut(ValidationError) -> ControlFlow<()>,
{
    let _ = visit(preset, &mut report);
}

fn visit<F>(preset: &StructuredPreset, report: &mut F) -> ControlFlow<()>
where
    F: FnMut(ValidationError) -> ControlFlow<()>,
{
    check_rules(PRESET_RULES, preset, |field| field.to_string(), report)?;
    check_rules(ARPEGGIO_RULES, &preset.arpeggio, |field| field.to_string(), report)?;
    check_pad_bank("pad_bank_1", &preset.pad_bank_1, report)?;
    check_pad_bank("pad_bank_2", &preset.pad_bank_2, report)?;
    check_knobs(&preset.knobs, report)
}

fn check_rules<T, F>(
    rules: &[Rule<T>],
    target: &T,
    path: impl Fn(&str) -> String,
    report: &mut F,
) -> ControlFlow<()>
where
    F: FnMut(ValidationError) -> ControlFlow<()>,
{
    for rule in rules {
        let value = rule.value(target);
        trace!("checking {} = {} against {}", rule.field, value, rule.domain);
        if !rule.domain.contains(value) {
            report(ValidationError::OutOfRange {
                field: path(rule.field),
                value: value.into(),
                domain: rule.domain,
            })?;
        }
    }
    ControlFlow::Continue(())
}

fn check_pad_bank<F>(bank: &str, pads: &[Pad], report: &mut F) -> ControlFlow<()>
where
    F: FnMut(ValidationError) -> ControlFlow<()>,
{
    for (index, pad) in pads.iter().enumerate() {
        check_rules(
            PAD_RULES,
            pad,
            |field| format!("{}[{}].{}", bank, index, field),
            report,
        )?;
    }
    ControlFlow::Continue(())
}

fn check_knobs<F>(knobs: &[Knob], report: &mut F) -> ControlFlow<()>
where
    F: FnMut(ValidationError) -> ControlFlow<()>,
{
    for (index, knob) in knobs.iter().enumerate() {
        check_rules(
            KNOB_RULES,
            knob,
            |field| format!("knobs[{}].{}", index, field),
            report,
        )?;
        if knob.low > knob.high {
            report(ValidationError::InvertedKnobRange {
                field: format!("knobs[{}]", index),
                low: knob.low,
                high: knob.high,
            })?;
        }
    }
    ControlFlow::Continue(())
}
