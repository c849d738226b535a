//! Sentinel-terminated source buffer.
//!
//! The buffer appends a `0x00` sentinel after the source content so the
//! scanner can detect end of input without bounds checks, plus one extra
//! zero byte so [`Cursor::peek`](crate::Cursor::peek) stays in bounds even
//! when the cursor sits on the sentinel itself.

use crate::Cursor;

/// Zero bytes appended after the source: the sentinel plus one peek byte.
const TAIL: usize = 2;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00]
///  ^                ^
///  0                source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct ScanBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 peek pad]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes the tail).
    source_len: u32,
}

impl ScanBuffer {
    /// Copy `source` into a sentinel-terminated buffer.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated to `u32::MAX`
    /// for scanning purposes; an editor buffer never comes close.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let mut buf = Vec::with_capacity(source_bytes.len() + TAIL);
        buf.extend_from_slice(source_bytes);
        buf.extend_from_slice(&[0; TAIL]);

        let source_len = u32::try_from(source_bytes.len()).unwrap_or(u32::MAX);
        Self { buf, source_len }
    }

    /// The source bytes, without the sentinel tail.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

#[cfg(test)]
mod tests;
