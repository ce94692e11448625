//! # unrgssad
//!
//! Extractor for RGSSAD encrypted game archives.
//!
//! Both directory layouts are supported: version 1, where a single rolling
//! key runs through the whole directory, and version 3, where a fixed key
//! decrypts a zero-terminated file table. Every entry's content is decrypted
//! with its own key and written out under its original relative path.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use unrgssad::{LocalFileReader, RgssadExtractor};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let reader = Arc::new(LocalFileReader::new(Path::new("Game.rgssad"))?);
//!     let extractor = RgssadExtractor::new(reader);
//!
//!     let entries = extractor.list_entries().await?;
//!     for entry in &entries {
//!         println!("{entry}");
//!     }
//!     extractor.extract_all(&entries, Path::new("out")).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod io;
pub mod rgssad;

pub use cli::Cli;
pub use io::{LocalFileReader, MemoryReader, ReadAt, SequentialReader};
pub use rgssad::{RgssadEntry, RgssadError, RgssadExtractor, RgssadResult};
