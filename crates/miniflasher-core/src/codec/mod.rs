//! Preset codec for the 101-byte MPK mini program dump.
//!
//! Each direction follows a layered structure:
//! - `layout`: byte offsets, strides and record sizes (source of truth)
//! - `reader` / `writer`: bounded byte access and the base-128 tempo pair
//! - `parser` / `encoder`: domain-level transforms (no direct offsets)
//! - `error`: structural errors only
//!
//! The codec never looks at field ranges. A dump holding values the device
//! should not produce still decodes, and encode assumes the caller validated
//! the preset first.

pub mod encoder;
pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod writer;

pub use encoder::encode;
pub use error::FormatError;
pub use parser::decode;
