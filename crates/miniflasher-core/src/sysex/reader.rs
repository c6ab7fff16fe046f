use super::error::SysexError;
use super::layout;

pub struct SysexReader<'a> {
    message: &'a [u8],
}

impl<'a> SysexReader<'a> {
    pub fn new(message: &'a [u8]) -> Self {
        Self { message }
    }

    pub fn require_len(&self, expected: usize) -> Result<(), SysexError> {
        if self.message.len() != expected {
            return Err(SysexError::WrongLength {
                expected,
                actual: self.message.len(),
            });
        }
        Ok(())
    }

    // Reads follow `require_len` or `require_frame`, so the error arms of
    // `read_u8` and `read_slice` are unreachable for the offsets in `layout`.
    pub fn read_u8(&self, offset: usize) -> Result<u8, SysexError> {
        self.message
            .get(offset)
            .copied()
            .ok_or(SysexError::WrongLength {
                expected: offset + 1,
                actual: self.message.len(),
            })
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], SysexError> {
        self.message
            .get(range.clone())
            .ok_or(SysexError::WrongLength {
                expected: range.end,
                actual: self.message.len(),
            })
    }

    /// Checks the `F0 ... F7` frame around a message of `len` bytes.
    pub fn require_frame(&self, len: usize) -> Result<(), SysexError> {
        self.require_len(len)?;
        let start = self.read_u8(layout::START_OFFSET)?;
        if start != layout::SYSEX_START {
            return Err(SysexError::MissingStart { found: start });
        }
        let end = self.read_u8(len - 1)?;
        if end != layout::SYSEX_END {
            return Err(SysexError::MissingEnd { found: end });
        }
        Ok(())
    }

    pub fn read_device_id_hex(&self) -> Result<String, SysexError> {
        let bytes = self.read_slice(layout::DEVICE_ID_RANGE.clone())?;
        Ok(bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" "))
    }
}
