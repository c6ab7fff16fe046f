//! JSON document form of a preset.
//!
//! Keys mirror `StructuredPreset` field names; the pad type is stored under
//! `type`. Unknown keys are ignored and missing keys are errors. A number
//! that does not fit its field's storage width is reported as an
//! out-of-range field with the range the device accepts; every other range
//! check is left to `validate`.

use serde_json::Value;
use thiserror::Error;

use crate::StructuredPreset;
use crate::validate::ValidationError;
use crate::validate::schema::{ARPEGGIO_RULES, KNOB_RULES, PAD_RULES, PRESET_RULES, Rule};

/// The only document field stored wider than a byte.
const TEMPO_FIELD: &str = "arpeggio.tempo_bpm";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid preset document: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("invalid preset document: {0}")]
    Field(#[from] ValidationError),
    #[error("preset serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub fn preset_from_json(text: &str) -> Result<StructuredPreset, DocumentError> {
    let document: Value = serde_json::from_str(text).map_err(DocumentError::Parse)?;
    check_storage_widths(&document)?;
    serde_json::from_value(document).map_err(DocumentError::Parse)
}

/// Pretty-printed with two-space indentation.
pub fn preset_to_json(preset: &StructuredPreset) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(preset).map_err(DocumentError::Serialize)
}

fn check_storage_widths(document: &Value) -> Result<(), ValidationError> {
    check_record(document, PRESET_RULES, |field| field.to_string())?;
    check_record(document, ARPEGGIO_RULES, |field| field.to_string())?;
    for bank in ["pad_bank_1", "pad_bank_2"] {
        for (index, pad) in records(document, bank).enumerate() {
            check_record(pad, PAD_RULES, |field| format!("{}[{}].{}", bank, index, field))?;
        }
    }
    for (index, knob) in records(document, "knobs").enumerate() {
        check_record(knob, KNOB_RULES, |field| format!("knobs[{}].{}", index, field))?;
    }
    Ok(())
}

// Missing keys and non-integer values fall through to serde's own errors.
fn check_record<T>(
    record: &Value,
    rules: &[Rule<T>],
    path: impl Fn(&str) -> String,
) -> Result<(), ValidationError> {
    for rule in rules {
        let pointer = format!("/{}", rule.field.replace('.', "/"));
        let Some(value) = record.pointer(&pointer).and_then(Value::as_i64) else {
            continue;
        };
        let max = if rule.field == TEMPO_FIELD {
            i64::from(u16::MAX)
        } else {
            i64::from(u8::MAX)
        };
        if !(0..=max).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: path(rule.field),
                value,
                domain: rule.domain,
            });
        }
    }
    Ok(())
}

fn records<'a>(document: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    document
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}
