// SPDX-License-Identifier: MIT

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::constant::*;

/// One 64-byte directory record, exactly as laid out on disk.
///
/// Byte 0 is the slot marker; a slot is occupied iff it equals
/// [`ENTRY_OCCUPIED`]. Timestamps are 14 ASCII digits `YYYYMMDDHHMMSS`.
#[derive(IntoBytes, FromBytes, KnownLayout, Immutable, Copy, Clone, Debug)]
#[repr(C, packed)]
pub struct RawDirEntry {
    pub marker: u8,      // @0
    pub name: [u8; 14],  // @1
    _gap0: u8,
    pub size_bytes: u32, // @16
    pub initial_cluster: u32, // @20
    pub created_at: [u8; 14], // @24
    pub updated_at: [u8; 14], // @38
    _reserved: [u8; 12],
}

impl RawDirEntry {
    /// Builds an occupied record. `name` must already fit the name field;
    /// shorter names are padded with [`ENTRY_NAME_PAD`].
    pub fn occupied(
        name: &str,
        size_bytes: u32,
        initial_cluster: u32,
        created_at: [u8; TIMESTAMP_LEN],
        updated_at: [u8; TIMESTAMP_LEN],
    ) -> Self {
        let mut name_field = [ENTRY_NAME_PAD; ENTRY_NAME_LEN];
        for (dst, b) in name_field.iter_mut().zip(name.bytes()) {
            *dst = b;
        }
        Self {
            marker: ENTRY_OCCUPIED,
            name: name_field,
            _gap0: 0,
            size_bytes,
            initial_cluster,
            created_at,
            updated_at,
            _reserved: [0u8; 12],
        }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.marker == ENTRY_OCCUPIED
    }
}
