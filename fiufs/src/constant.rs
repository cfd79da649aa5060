// SPDX-License-Identifier: MIT

/// On-disk system tag, 8 ASCII bytes at offset 0 of the header cluster.
pub const SYSTEM_TAG: &[u8; 8] = b"FiUnamFS";

/// Decoded byte length of the fixed-offset header region.
pub const HEADER_LEN: usize = 54;

/// Width of one directory record.
pub const ENTRY_WIDTH: usize = 64;

/// Significant bytes of a record name (record byte 0 is the marker).
pub const ENTRY_NAME_LEN: usize = 14;

/// Marker byte of an occupied directory slot.
pub const ENTRY_OCCUPIED: u8 = b'-';

/// Fill byte of a free slot's marker+name field.
pub const ENTRY_FREE: u8 = b'.';

/// Pad byte for names shorter than the name field.
pub const ENTRY_NAME_PAD: u8 = b' ';

/// Length of the `YYYYMMDDHHMMSS` timestamp fields.
pub const TIMESTAMP_LEN: usize = 14;
