use std::borrow::Cow;
use std::fmt;

/// Archive signature: `"RGSSAD"` followed by a NUL byte.
pub const SIGNATURE: &[u8; 7] = b"RGSSAD\0";

/// Size of the fixed header (signature plus version byte).
pub const HEADER_SIZE: u64 = 8;

/// Directory key seed for version 1 archives
pub const V1_DIRECTORY_SEED: u32 = 0xDEADCAFE;

/// Directory layout version stored at byte 7
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// Key threaded through the whole directory, content interleaved
    V1,
    /// Fixed directory key, zero-offset terminated table
    V3,
}

impl Version {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Version::V1),
            3 => Some(Version::V3),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            Version::V1 => 1,
            Version::V3 => 3,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.as_u8())
    }
}

/// Parsed archive header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveHeader {
    pub version: Version,
}

/// One archived file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgssadEntry {
    /// Position of the encrypted content in the archive
    pub offset: u32,
    /// Content length in bytes
    pub size: u32,
    /// Seed for the content cipher
    pub key: u32,
    /// Relative path, `/`-separated, exactly as decrypted
    pub name: Vec<u8>,
}

impl RgssadEntry {
    /// Name for display; invalid UTF-8 is replaced.
    pub fn display_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// End of the content region (exclusive).
    pub fn end(&self) -> u64 {
        self.offset as u64 + self.size as u64
    }
}

impl fmt::Display for RgssadEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.offset, self.size, self.display_name())
    }
}
