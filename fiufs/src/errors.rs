// SPDX-License-Identifier: MIT

use core::fmt;

pub use fiuio::errors::*;

/// Header or directory record cannot be decoded as declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsFormatError {
    /// The image ends before the region being decoded.
    TooShort,
    /// A declared-ASCII field holds non-ASCII bytes.
    NotAscii(&'static str),
    /// A 14-digit timestamp field does not decode to a calendar date.
    BadTimestamp(&'static str),
    Invalid(&'static str),
    Other(&'static str),
}

impl FsFormatError {
    pub fn msg(&self) -> &'static str {
        match self {
            FsFormatError::TooShort => "Image shorter than the decoded region",
            FsFormatError::NotAscii(_) => "Non-ASCII bytes in ASCII field",
            FsFormatError::BadTimestamp(_) => "Invalid timestamp field",
            FsFormatError::Invalid(msg) => msg,
            FsFormatError::Other(msg) => msg,
        }
    }
}

impl fmt::Display for FsFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())?;
        match self {
            FsFormatError::NotAscii(field) | FsFormatError::BadTimestamp(field) => {
                write!(f, " (field: {field})")?;
            }
            _ => {}
        }
        Ok(())
    }
}

/// Free-space or directory-slot exhaustion. Normal outcomes of a full
/// volume, not device faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsAllocatorError {
    /// No contiguous free run of the required length exists.
    OutOfSpace,
    /// Every directory slot is occupied.
    DirectoryFull,
    Other(&'static str),
}

impl FsAllocatorError {
    pub fn msg(&self) -> &'static str {
        match self {
            FsAllocatorError::OutOfSpace => "No contiguous free cluster run large enough",
            FsAllocatorError::DirectoryFull => "Directory has no free slot",
            FsAllocatorError::Other(msg) => msg,
        }
    }
}

impl fmt::Display for FsAllocatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())?;
        Ok(())
    }
}

/// Content movement between the image and the local filesystem.
///
/// Expected absences (`SourceMissing`, `DestinationExists`) are distinct
/// from device faults (`IO`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsTransferError {
    IO(VolumeIOError),
    /// The local source file does not exist.
    SourceMissing,
    /// The extraction destination already exists; it is left untouched.
    DestinationExists,
    /// The file name does not fit the 14-byte ASCII name field.
    InvalidName,
    Other(&'static str),
}

impl FsTransferError {
    pub fn msg(&self) -> &'static str {
        match self {
            FsTransferError::IO(_) => "IO error",
            FsTransferError::SourceMissing => "Source file not found",
            FsTransferError::DestinationExists => "Destination already exists",
            FsTransferError::InvalidName => "Invalid file name",
            FsTransferError::Other(msg) => msg,
        }
    }

    pub fn source(&self) -> Option<FsError> {
        match self {
            FsTransferError::IO(e) => Some(FsError::IO(*e)),
            _ => None,
        }
    }
}

impl fmt::Display for FsTransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())?;
        let mut current = self.source();
        while let Some(src) = current {
            write!(f, "\n  caused by: {}", src.msg())?;
            current = src.source();
        }
        Ok(())
    }
}

/// Top-level error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    IO(VolumeIOError),
    Format(FsFormatError),
    Allocator(FsAllocatorError),
    Transfer(FsTransferError),
    Other(&'static str),
}

impl FsError {
    pub fn msg(&self) -> &'static str {
        match self {
            FsError::IO(e) => e.msg(),
            FsError::Format(e) => e.msg(),
            FsError::Allocator(e) => e.msg(),
            FsError::Transfer(e) => e.msg(),
            FsError::Other(msg) => msg,
        }
    }

    pub fn source(&self) -> Option<FsError> {
        match self {
            FsError::Transfer(e) => e.source(),
            _ => None,
        }
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())?;
        let mut current = self.source();
        while let Some(src) = current {
            write!(f, "\n  caused by: {}", src.msg())?;
            current = src.source();
        }
        Ok(())
    }
}

// === type Fs*Result ===

pub type FsResult<T = ()> = Result<T, FsError>;
pub type FsFormatResult<T = ()> = Result<T, FsFormatError>;
pub type FsAllocatorResult<T = ()> = Result<T, FsAllocatorError>;
pub type FsTransferResult<T = ()> = Result<T, FsTransferError>;

// === conversions ===

macro_rules! impl_into_fserror {
    ($($t:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$t> for FsError {
                #[inline]
                fn from(e: $t) -> Self { FsError::$variant(e) }
            }
        )+
    };
}

impl_into_fserror! {
    VolumeIOError    => IO,
    FsFormatError    => Format,
    FsAllocatorError => Allocator,
    FsTransferError  => Transfer,
}

impl From<&'static str> for FsError {
    #[inline]
    fn from(msg: &'static str) -> Self {
        FsError::Other(msg)
    }
}

impl From<VolumeIOError> for FsTransferError {
    #[inline]
    fn from(e: VolumeIOError) -> Self {
        FsTransferError::IO(e)
    }
}
