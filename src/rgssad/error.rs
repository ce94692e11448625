use thiserror::Error;

#[derive(Debug, Error)]
pub enum RgssadError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("not an RGSSAD archive (bad signature)")]
    InvalidSignature,

    #[error("unsupported RGSSAD version {0} (only 1 and 3 are supported)")]
    UnsupportedVersion(u8),

    #[error("entry {name:?} (offset {offset}, size {size}) runs past the archive end ({archive_len} bytes)")]
    EntryOutOfBounds {
        name: String,
        offset: u32,
        size: u32,
        archive_len: u64,
    },

    #[error("entry offset {0} does not fit in 32 bits")]
    OffsetOverflow(u64),

    #[error("directory truncated at offset {offset}: wanted {wanted} bytes, {available} available")]
    Truncated {
        offset: u64,
        wanted: u64,
        available: u64,
    },

    #[error("entry path escapes the output directory: {0}")]
    UnsafePath(String),
}

pub type RgssadResult<T> = Result<T, RgssadError>;
