// SPDX-License-Identifier: MIT

mod entry;
mod header;

pub use entry::RawDirEntry;
pub use header::RawVolumeHeader;

use crate::errors::{FsFormatError, FsFormatResult};

/// Decodes a fixed-width ASCII field, trimming trailing pad bytes
/// (spaces and NULs). `field` names the field in the error.
pub(crate) fn ascii_trimmed(bytes: &[u8], field: &'static str) -> FsFormatResult<String> {
    if !bytes.is_ascii() {
        return Err(FsFormatError::NotAscii(field));
    }
    let end = bytes
        .iter()
        .rposition(|&b| b != b' ' && b != 0)
        .map_or(0, |p| p + 1);
    String::from_utf8(bytes[..end].to_vec()).map_err(|_| FsFormatError::NotAscii(field))
}
