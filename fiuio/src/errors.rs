// SPDX-License-Identifier: MIT

use core::fmt;

/// Result type for VolumeIO operations.
pub type VolumeIOResult<T = ()> = core::result::Result<T, VolumeIOError>;

/// Error type for VolumeIO operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIOError {
    Other(&'static str),
    /// Attempted to read or write outside the backing storage.
    OutOfBounds,
    /// The storage ended before the requested range was satisfied.
    UnexpectedEof,
}

impl VolumeIOError {
    pub fn msg(&self) -> &'static str {
        match self {
            VolumeIOError::Other(msg) => msg,
            VolumeIOError::OutOfBounds => "Out of bounds",
            VolumeIOError::UnexpectedEof => "Unexpected end of volume",
        }
    }

    /// True when the failure means "the volume is shorter than the
    /// requested range", as opposed to a device fault.
    pub fn is_short(&self) -> bool {
        matches!(
            self,
            VolumeIOError::OutOfBounds | VolumeIOError::UnexpectedEof
        )
    }
}

impl From<&'static str> for VolumeIOError {
    #[inline]
    fn from(msg: &'static str) -> Self {
        VolumeIOError::Other(msg)
    }
}

impl fmt::Display for VolumeIOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())?;
        Ok(())
    }
}
