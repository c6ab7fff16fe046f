use super::error::FormatError;
use super::layout;
use crate::RawPreset;

pub struct PresetWriter {
    buffer: RawPreset,
}

impl PresetWriter {
    pub fn new() -> Self {
        Self {
            buffer: [0u8; layout::PRESET_LEN],
        }
    }

    pub fn write_u8(&mut self, offset: usize, value: u8) {
        self.buffer[offset] = value;
    }

    /// Splits `value` into a high/low pair of base-128 digits.
    ///
    /// The low digit is always below 128; the high digit takes whatever is
    /// left, so values above `TEMPO_MAX_ENCODABLE` do not fit in one byte.
    pub fn write_base128(
        &mut self,
        range: std::ops::Range<usize>,
        value: u16,
    ) -> Result<(), FormatError> {
        if value > layout::TEMPO_MAX_ENCODABLE {
            return Err(FormatError::TempoOverflow {
                value,
                max: layout::TEMPO_MAX_ENCODABLE,
            });
        }
        let high = (value / layout::TEMPO_RADIX) as u8;
        let low = (value % layout::TEMPO_RADIX) as u8;
        self.buffer[range].copy_from_slice(&[high, low]);
        Ok(())
    }

    /// Mutable view of record `index` in a bank laid out with `stride`.
    pub fn record_mut(&mut self, base: usize, stride: usize, index: usize) -> &mut [u8] {
        let start = base + stride * index;
        &mut self.buffer[start..start + stride]
    }

    pub fn finish(self) -> RawPreset {
        self.buffer
    }
}
