use super::error::FormatError;
use super::layout;

pub struct PresetReader<'a> {
    payload: &'a [u8],
}

impl<'a> PresetReader<'a> {
    /// Wraps a buffer, rejecting anything that is not exactly one preset.
    pub fn new(payload: &'a [u8]) -> Result<Self, FormatError> {
        if payload.len() != layout::PRESET_LEN {
            return Err(FormatError::WrongLength {
                expected: layout::PRESET_LEN,
                actual: payload.len(),
            });
        }
        Ok(Self { payload })
    }

    // Offsets come from `layout` and are bounded by the length check in `new`.
    pub fn read_u8(&self, offset: usize) -> u8 {
        self.payload[offset]
    }

    pub fn read_base128(&self, range: std::ops::Range<usize>) -> u16 {
        let bytes = &self.payload[range];
        u16::from(bytes[0]) * layout::TEMPO_RADIX + u16::from(bytes[1])
    }

    /// Fixed-stride walk over a bank of records starting at `base`.
    pub fn records(
        &self,
        base: usize,
        stride: usize,
        count: usize,
    ) -> impl Iterator<Item = &'a [u8]> {
        self.payload[base..base + stride * count].chunks_exact(stride)
    }
}
