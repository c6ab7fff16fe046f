//! Sysex message sources.
//!
//! A source yields framed sysex messages one at a time. `SyxFileSource` reads
//! them from a `.syx` dump on disk and stands in for a live MIDI input; all
//! file I/O of the library lives here.

mod syx;

pub use syx::SyxFileSource;

use thiserror::Error;

pub trait MessageSource {
    fn next_message(&mut self) -> Result<Option<Vec<u8>>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unterminated sysex message starting at byte {offset}")]
    Truncated { offset: usize },
}
