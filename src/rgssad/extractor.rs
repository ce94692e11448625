use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::io::ReadAt;

use super::cipher;
use super::error::{RgssadError, RgssadResult};
use super::parser::RgssadParser;
use super::structures::RgssadEntry;

/// RGSSAD archive extractor
pub struct RgssadExtractor<R: ReadAt> {
    parser: RgssadParser<R>,
    reader: Arc<R>,
}

impl<R: ReadAt> RgssadExtractor<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            parser: RgssadParser::new(reader.clone()),
            reader,
        }
    }

    /// List all entries in the archive, in directory order
    pub async fn list_entries(&self) -> RgssadResult<Vec<RgssadEntry>> {
        self.parser.list_entries().await
    }

    /// List all entries, calling `on_entry` as each one is parsed
    pub async fn list_entries_with<F>(&self, on_entry: F) -> RgssadResult<Vec<RgssadEntry>>
    where
        F: FnMut(&RgssadEntry) + Send,
    {
        self.parser.list_entries_with(on_entry).await
    }

    /// Read and decrypt an entry's content
    pub async fn extract_to_memory(&self, entry: &RgssadEntry) -> RgssadResult<Vec<u8>> {
        let archive_len = self.reader.size();
        if entry.end() > archive_len {
            return Err(RgssadError::EntryOutOfBounds {
                name: entry.display_name().into_owned(),
                offset: entry.offset,
                size: entry.size,
                archive_len,
            });
        }

        let mut buf = vec![0u8; entry.size as usize];
        self.reader
            .read_exact_at(entry.offset as u64, &mut buf)
            .await?;

        cipher::decrypt_content(&mut buf, entry.key);
        Ok(buf)
    }

    /// Extract an entry to `output_path`, replacing any existing file
    pub async fn extract_to_file(&self, entry: &RgssadEntry, output_path: &Path) -> RgssadResult<()> {
        // Nothing touches the filesystem until the content has been read
        let data = self.extract_to_memory(entry).await?;

        // Create parent directories if needed
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = fs::File::create(output_path).await?;
        file.write_all(&data).await?;
        file.flush().await?;

        debug!(path = %output_path.display(), bytes = data.len(), "extracted");
        Ok(())
    }

    /// Extract every entry under `output_dir`, in order.
    ///
    /// Stops at the first failure; files already written are left in place.
    pub async fn extract_all(&self, entries: &[RgssadEntry], output_dir: &Path) -> RgssadResult<()> {
        for entry in entries {
            let path = output_path(output_dir, &entry.name)?;
            self.extract_to_file(entry, &path).await?;
        }
        Ok(())
    }
}

/// Resolve an entry name below `output_dir`.
///
/// The name bytes are used as-is, so names that are not valid UTF-8 still
/// map to distinct files. Only plain relative paths are accepted: root,
/// drive prefix and `..` components are rejected, as is a name with no
/// components at all.
pub fn output_path(output_dir: &Path, name: &[u8]) -> RgssadResult<PathBuf> {
    let unsafe_path = || RgssadError::UnsafePath(String::from_utf8_lossy(name).into_owned());

    let mut path = output_dir.to_path_buf();
    let mut pushed = false;

    for component in name_to_path(name).ok_or_else(unsafe_path)?.components() {
        match component {
            Component::Normal(part) => {
                path.push(part);
                pushed = true;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(unsafe_path());
            }
        }
    }

    if !pushed {
        return Err(unsafe_path());
    }
    Ok(path)
}

#[cfg(unix)]
fn name_to_path(name: &[u8]) -> Option<&Path> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    Some(Path::new(OsStr::from_bytes(name)))
}

// Paths are not raw bytes here, so only UTF-8 names can be represented
#[cfg(not(unix))]
fn name_to_path(name: &[u8]) -> Option<&Path> {
    std::str::from_utf8(name).ok().map(Path::new)
}
