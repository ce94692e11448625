//! RGSSAD directory parser.
//!
//! Reads the fixed header, then walks the directory of whichever layout the
//! version byte selects. Content is never read here; entries only record
//! where it lives and which key decrypts it.
//!
//! ## Version 1
//!
//! The directory is interleaved with content. Each record is
//! `[name_len][name][size]` followed directly by `size` bytes of content,
//! and one key (seeded with `0xDEADCAFE`) runs through every record, so
//! record N cannot be decoded without decoding records `0..N` first.
//!
//! ## Version 3
//!
//! The directory is a table at the front of the file. Its key is derived
//! once from the first header word and never changes. Each record is
//! `[offset][size][key][name_len][name]`; a decrypted offset of zero ends
//! the table.

use std::sync::Arc;

use tracing::{debug, info};

use crate::io::{ReadAt, SequentialReader};

use super::cipher;
use super::error::{RgssadError, RgssadResult};
use super::structures::*;

/// Low-level RGSSAD directory parser.
///
/// Typically used through [`RgssadExtractor`](super::RgssadExtractor)
/// rather than directly.
pub struct RgssadParser<R: ReadAt> {
    /// The underlying data source
    reader: Arc<R>,
    /// Total size of the archive in bytes
    size: u64,
}

impl<R: ReadAt> RgssadParser<R> {
    pub fn new(reader: Arc<R>) -> Self {
        let size = reader.size();
        Self { reader, size }
    }

    /// Verify the signature and read the version byte.
    ///
    /// # Errors
    ///
    /// [`RgssadError::InvalidSignature`] if the file does not start with
    /// `"RGSSAD\0"`, [`RgssadError::UnsupportedVersion`] for any version
    /// other than 1 or 3.
    pub async fn read_header(&self) -> RgssadResult<ArchiveHeader> {
        if self.size < HEADER_SIZE {
            return Err(RgssadError::InvalidSignature);
        }

        let mut buf = [0u8; HEADER_SIZE as usize];
        self.reader.read_exact_at(0, &mut buf).await?;

        if &buf[..SIGNATURE.len()] != SIGNATURE {
            return Err(RgssadError::InvalidSignature);
        }

        let raw_version = buf[SIGNATURE.len()];
        let version =
            Version::from_u8(raw_version).ok_or(RgssadError::UnsupportedVersion(raw_version))?;

        Ok(ArchiveHeader { version })
    }

    /// Parse the whole directory.
    ///
    /// Either every record decodes and passes the bounds checks, or an
    /// error is returned and no entries are produced.
    pub async fn list_entries(&self) -> RgssadResult<Vec<RgssadEntry>> {
        self.list_entries_with(|_| {}).await
    }

    /// Parse the whole directory, calling `on_entry` as each record is
    /// decoded.
    ///
    /// Records reported before a failure have already been seen by the
    /// callback when the error is returned.
    pub async fn list_entries_with<F>(&self, mut on_entry: F) -> RgssadResult<Vec<RgssadEntry>>
    where
        F: FnMut(&RgssadEntry) + Send,
    {
        let header = self.read_header().await?;

        let mut cursor = SequentialReader::new(self.reader.clone());
        cursor.seek(HEADER_SIZE);

        let entries = match header.version {
            Version::V1 => self.parse_v1(&mut cursor, &mut on_entry).await?,
            Version::V3 => self.parse_v3(&mut cursor, &mut on_entry).await?,
        };

        info!(
            version = %header.version,
            entries = entries.len(),
            "parsed RGSSAD directory"
        );
        Ok(entries)
    }

    async fn parse_v1(
        &self,
        cursor: &mut SequentialReader<R>,
        on_entry: &mut (dyn FnMut(&RgssadEntry) + Send),
    ) -> RgssadResult<Vec<RgssadEntry>> {
        let mut key = V1_DIRECTORY_SEED;
        let mut entries = Vec::new();

        while cursor.offset() < cursor.size() {
            let (name_len, next) = cipher::decrypt_v1_int(cursor.read_u32().await?, key);
            key = next;

            let raw_name = self.read_name(cursor, name_len).await?;
            let (name, next) = cipher::decrypt_v1_name(&raw_name, key);
            key = next;

            let (size, next) = cipher::decrypt_v1_int(cursor.read_u32().await?, key);
            key = next;

            // Content starts right after the size field and is keyed with
            // the directory key as it stands now.
            let offset = cursor.offset();
            let offset = u32::try_from(offset).map_err(|_| RgssadError::OffsetOverflow(offset))?;

            let entry = self.checked_entry(offset, size, key, name)?;
            cursor.seek(entry.end());
            on_entry(&entry);
            entries.push(entry);
        }

        Ok(entries)
    }

    async fn parse_v3(
        &self,
        cursor: &mut SequentialReader<R>,
        on_entry: &mut (dyn FnMut(&RgssadEntry) + Send),
    ) -> RgssadResult<Vec<RgssadEntry>> {
        let key = cipher::v3_directory_key(cursor.read_u32().await?);
        let mut entries = Vec::new();

        loop {
            let offset = cipher::decrypt_v3_int(cursor.read_u32().await?, key);
            if offset == 0 {
                break;
            }

            let size = cipher::decrypt_v3_int(cursor.read_u32().await?, key);
            let file_key = cipher::decrypt_v3_int(cursor.read_u32().await?, key);
            let name_len = cipher::decrypt_v3_int(cursor.read_u32().await?, key);

            let raw_name = self.read_name(cursor, name_len).await?;
            let name = cipher::decrypt_v3_name(&raw_name, key);

            let entry = self.checked_entry(offset, size, file_key, name)?;
            on_entry(&entry);
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read an encrypted name, refusing lengths the archive cannot hold.
    async fn read_name(
        &self,
        cursor: &mut SequentialReader<R>,
        name_len: u32,
    ) -> RgssadResult<Vec<u8>> {
        let available = cursor.remaining();
        if name_len as u64 > available {
            return Err(RgssadError::Truncated {
                offset: cursor.offset(),
                wanted: name_len as u64,
                available,
            });
        }
        Ok(cursor.read_bytes(name_len as usize).await?)
    }

    fn checked_entry(
        &self,
        offset: u32,
        size: u32,
        key: u32,
        name: Vec<u8>,
    ) -> RgssadResult<RgssadEntry> {
        let entry = RgssadEntry {
            offset,
            size,
            key,
            name,
        };

        if entry.end() > self.size {
            return Err(RgssadError::EntryOutOfBounds {
                name: entry.display_name().into_owned(),
                offset,
                size,
                archive_len: self.size,
            });
        }

        debug!(offset, size, name = %entry.display_name(), "parsed entry");
        Ok(entry)
    }
}
