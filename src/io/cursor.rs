use byteorder::{ByteOrder, LittleEndian};
use std::io;
use std::sync::Arc;

use super::ReadAt;

/// Forward-reading cursor over a [`ReadAt`] source.
///
/// Directory parsing walks the archive front to back, so this keeps the
/// current position the way a plain file handle would while still going
/// through positioned reads underneath.
pub struct SequentialReader<R: ReadAt> {
    reader: Arc<R>,
    offset: u64,
    size: u64,
}

impl<R: ReadAt> SequentialReader<R> {
    pub fn new(reader: Arc<R>) -> Self {
        let size = reader.size();
        Self {
            reader,
            offset: 0,
            size,
        }
    }

    /// Current read position.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Total length of the underlying source.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Bytes left between the current position and the end of the source.
    pub fn remaining(&self) -> u64 {
        self.size.saturating_sub(self.offset)
    }

    /// Move to an absolute position. Seeking past the end is allowed; the
    /// next read fails.
    pub fn seek(&mut self, offset: u64) {
        self.offset = offset;
    }

    pub async fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.reader.read_exact_at(self.offset, buf).await?;
        self.offset += buf.len() as u64;
        Ok(())
    }

    /// Read `len` bytes into a fresh buffer.
    ///
    /// The length is checked against the remaining size before allocating.
    pub async fn read_bytes(&mut self, len: usize) -> io::Result<Vec<u8>> {
        if len as u64 > self.remaining() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "cannot read {len} bytes at offset {}, only {} remain",
                    self.offset,
                    self.remaining()
                ),
            ));
        }
        let mut buf = vec![0u8; len];
        self.read_exact(&mut buf).await?;
        Ok(buf)
    }

    pub async fn read_u32(&mut self) -> io::Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf).await?;
        Ok(LittleEndian::read_u32(&buf))
    }
}
