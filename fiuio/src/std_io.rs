// SPDX-License-Identifier: MIT

use std::io::{Error, ErrorKind, Read, Seek, SeekFrom, Write};

use crate::{VolumeIO, errors::*};

/// File-backed implementation of `VolumeIO`.
///
/// Borrows the underlying handle for the duration of one operation
/// sequence; dropping it releases nothing beyond the borrow, so the
/// caller controls when the file handle closes.
#[derive(Debug)]
pub struct StdVolumeIO<'a, T: Read + Write + Seek> {
    io: &'a mut T,
}

impl<'a, T: Read + Write + Seek> StdVolumeIO<'a, T> {
    #[inline]
    pub fn new(io: &'a mut T) -> Self {
        Self { io }
    }
}

impl<'a, T: Read + Write + Seek> VolumeIO for StdVolumeIO<'a, T> {
    fn write_at(&mut self, offset: u64, data: &[u8]) -> VolumeIOResult {
        self.io.seek(SeekFrom::Start(offset))?;
        self.io.write_all(data)?;
        Ok(())
    }

    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> VolumeIOResult {
        self.io.seek(SeekFrom::Start(offset))?;
        self.io.read_exact(buf)?;
        Ok(())
    }

    fn flush(&mut self) -> VolumeIOResult {
        self.io.flush()?;
        Ok(())
    }
}

impl From<Error> for VolumeIOError {
    #[cold]
    #[inline(never)]
    fn from(e: Error) -> Self {
        if e.kind() == ErrorKind::UnexpectedEof {
            return VolumeIOError::UnexpectedEof;
        }
        // Leak the string to produce a 'static str. Acceptable for error mapping.
        let leaked_str: &'static str = Box::leak(e.to_string().into_boxed_str());
        VolumeIOError::Other(leaked_str)
    }
}
