//! Caller-supplied arguments: preset slot and document path.
//!
//! These checks run before any codec or transport work so a bad invocation
//! never touches the device.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

pub const SLOT_MIN: u8 = 1;
pub const SLOT_MAX: u8 = 4;
pub const DOCUMENT_EXTENSION: &str = "json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("preset slot must be an integer between 1 and 4, got '{value}'")]
    InvalidSlot { value: String },
    #[error("preset document must be a .json file: {path}")]
    UnsupportedDocument { path: String },
}

/// One of the four program slots on the device.
///
/// # Examples
/// ```
/// use miniflasher_core::PresetSlot;
///
/// let slot: PresetSlot = "3".parse()?;
/// assert_eq!(slot.get(), 3);
/// assert!(PresetSlot::try_from(5).is_err());
/// # Ok::<(), miniflasher_core::UsageError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresetSlot(u8);

impl PresetSlot {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PresetSlot {
    type Error = UsageError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (SLOT_MIN..=SLOT_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(UsageError::InvalidSlot {
                value: value.to_string(),
            })
        }
    }
}

impl From<PresetSlot> for u8 {
    fn from(slot: PresetSlot) -> Self {
        slot.0
    }
}

impl FromStr for PresetSlot {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || UsageError::InvalidSlot {
            value: s.to_string(),
        };
        let value: u8 = s.trim().parse().map_err(|_| invalid())?;
        PresetSlot::try_from(value).map_err(|_| invalid())
    }
}

impl fmt::Display for PresetSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejects paths that do not name a JSON document.
pub fn check_document_path(path: &Path) -> Result<(), UsageError> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != DOCUMENT_EXTENSION {
        return Err(UsageError::UnsupportedDocument {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{PresetSlot, UsageError, check_document_path};

    #[test]
    fn slot_accepts_one_to_four() {
        for value in 1..=4u8 {
            assert_eq!(PresetSlot::try_from(value).unwrap().get(), value);
        }
    }

    #[test]
    fn slot_rejects_zero_and_five() {
        assert!(PresetSlot::try_from(0).is_err());
        let err = PresetSlot::try_from(5).unwrap_err();
        assert!(err.to_string().contains("between 1 and 4"));
    }

    #[test]
    fn slot_parse_keeps_original_text() {
        let err = "two".parse::<PresetSlot>().unwrap_err();
        assert_eq!(
            err,
            UsageError::InvalidSlot {
                value: "two".to_string()
            }
        );
        let err = "300".parse::<PresetSlot>().unwrap_err();
        assert!(err.to_string().contains("'300'"));
    }

    #[test]
    fn document_path_requires_json() {
        assert!(check_document_path(Path::new("presets/live.json")).is_ok());
        assert!(check_document_path(Path::new("LIVE.JSON")).is_ok());
        assert!(check_document_path(Path::new("live.yaml")).is_err());
        assert!(check_document_path(Path::new("live")).is_err());
    }
}
