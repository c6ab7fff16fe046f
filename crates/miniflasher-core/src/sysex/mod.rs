//! Sysex framing for MPK mini preset transfers.
//!
//! A read request is `F0 47 7F 7C 63 00 01 <slot> F7`. The device answers with
//! the header and slot echoed, the 101 preset bytes and the `F7` trailer. A
//! write request has the same shape with command byte `61`.
//!
//! Framing only: the preset bytes are handed to the codec untouched.

pub mod builder;
pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use builder::{read_request, write_request};
pub use error::SysexError;
pub use parser::{Command, PresetMessage, parse_preset_message};
