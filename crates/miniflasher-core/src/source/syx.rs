use std::fs;
use std::path::Path;

use log::{debug, trace};

use super::{MessageSource, SourceError};
use crate::sysex::layout::{SYSEX_END, SYSEX_START};

/// Sysex messages stored back to back in a `.syx` file.
///
/// Bytes between messages are skipped. A message that hits the end of the
/// file or a new start byte before its end byte is reported as truncated.
pub struct SyxFileSource {
    bytes: Vec<u8>,
    cursor: usize,
}

impl SyxFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let bytes = fs::read(path)?;
        debug!("opened {} ({} bytes)", path.display(), bytes.len());
        Ok(Self::from_bytes(bytes))
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes, cursor: 0 }
    }
}

impl MessageSource for SyxFileSource {
    fn next_message(&mut self) -> Result<Option<Vec<u8>>, SourceError> {
        let Some(start) = self.bytes[self.cursor..]
            .iter()
            .position(|b| *b == SYSEX_START)
            .map(|pos| self.cursor + pos)
        else {
            self.cursor = self.bytes.len();
            return Ok(None);
        };

        for (index, byte) in self.bytes.iter().enumerate().skip(start + 1) {
            match *byte {
                SYSEX_END => {
                    self.cursor = index + 1;
                    trace!("sysex message at {}..{}", start, self.cursor);
                    return Ok(Some(self.bytes[start..self.cursor].to_vec()));
                }
                SYSEX_START => break,
                _ => {}
            }
        }
        Err(SourceError::Truncated { offset: start })
    }
}
