//! Byte range to text decoding.

use thiserror::Error;

/// Failure to turn a byte range of the source buffer into text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("byte range {start}..{end} is outside the source buffer (len {len})")]
    OutOfRange { start: usize, end: usize, len: usize },
    #[error("byte range {start}..{end} is not valid UTF-8")]
    InvalidUtf8 { start: usize, end: usize },
}

/// Decode `source[start..end]` as UTF-8.
///
/// Borrows from `source`; nothing is copied unless the caller asks for it.
pub fn slice(source: &[u8], start: usize, end: usize) -> Result<&str, DecodeError> {
    if start > end || end > source.len() {
        return Err(DecodeError::OutOfRange {
            start,
            end,
            len: source.len(),
        });
    }

    std::str::from_utf8(&source[start..end]).map_err(|_| DecodeError::InvalidUtf8 { start, end })
}
