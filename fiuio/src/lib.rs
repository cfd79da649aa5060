// SPDX-License-Identifier: MIT

// Core modules
pub mod errors;

// Backend modules
mod mem;
mod std_io;

// Prelude re-exports (central entrypoint)
pub mod prelude {
    pub use super::VolumeIO;
    pub use super::VolumeIOStructExt;
    pub use super::errors::*;
    pub use super::mem::MemVolumeIO;
    pub use super::std_io::StdVolumeIO;
}

// Internal use
use errors::*;

/// Maximum size of the internal scratch buffer used by struct reads.
/// 4 KiB covers every fixed-width record this toolkit decodes.
pub const BLOCK_BUF_SIZE: usize = 4096;

/// Byte-addressable volume IO abstraction.
///
/// Allows read/write/flush at arbitrary absolute offsets.
/// Implementations may target RAM or files; every call is a single
/// positioned transfer with no state carried between calls.
pub trait VolumeIO {
    /// Writes `data` at `offset` (absolute).
    fn write_at(&mut self, offset: u64, data: &[u8]) -> VolumeIOResult;

    /// Reads `buf.len()` bytes into `buf` from `offset` (absolute).
    ///
    /// A read that cannot be fully satisfied fails with
    /// [`VolumeIOError::UnexpectedEof`] or [`VolumeIOError::OutOfBounds`];
    /// it never returns short data.
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> VolumeIOResult;

    /// Flushes any buffered data (may be a no-op).
    fn flush(&mut self) -> VolumeIOResult;
}

/// Extension trait for reading and writing fixed-layout structs using zerocopy.
///
/// Requires the struct to implement zerocopy traits for safe conversion;
/// the struct's in-memory layout is the on-disk layout.
pub trait VolumeIOStructExt: VolumeIO {
    /// Reads a struct of type `T` from the given offset.
    fn read_struct<T: zerocopy::FromBytes + zerocopy::KnownLayout + zerocopy::Immutable>(
        &mut self,
        offset: u64,
    ) -> VolumeIOResult<T> {
        let size = core::mem::size_of::<T>();
        assert!(size <= BLOCK_BUF_SIZE, "read_struct: type too large");
        let mut buf = [0u8; BLOCK_BUF_SIZE];
        self.read_at(offset, &mut buf[..size])?;
        T::read_from_bytes(&buf[..size]).map_err(|_| VolumeIOError::Other("read_struct failed"))
    }

    /// Writes a struct of type `T` at the given offset.
    fn write_struct<T: zerocopy::IntoBytes + zerocopy::KnownLayout + zerocopy::Immutable>(
        &mut self,
        offset: u64,
        val: &T,
    ) -> VolumeIOResult {
        let bytes = val.as_bytes();
        self.write_at(offset, bytes)
    }
}

impl<T: VolumeIO + ?Sized> VolumeIOStructExt for T {}
