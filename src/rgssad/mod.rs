//! RGSSAD archive decoding and extraction.
//!
//! RGSSAD is the encrypted asset archive used by RGSS-based game engines.
//! Two directory layouts exist, selected by the version byte after the
//! signature:
//!
//! ```text
//! offset 0  "RGSSAD\0"
//! offset 7  version (1 or 3)
//! offset 8  directory (layout depends on version)
//! ```
//!
//! ## Architecture
//!
//! - [`cipher`]: the XOR keystream functions shared by both versions
//! - [`parser`]: header check and the v1/v3 directory walkers
//! - [`extractor`]: content decryption and writing entries to disk
//!
//! Extraction always happens after the full directory has been parsed, so a
//! malformed directory is reported before anything is written.
//!
//! ## Limitations
//!
//! - Read only; archives cannot be created or modified
//! - Versions other than 1 and 3 are rejected

pub mod cipher;
mod error;
mod extractor;
mod parser;
mod structures;


pub use error::{RgssadError, RgssadResult};
pub use extractor::{RgssadExtractor, output_path};
pub use parser::RgssadParser;
pub use structures::*;
