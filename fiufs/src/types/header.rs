// SPDX-License-Identifier: MIT

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// First-cluster volume header, exactly as laid out on disk.
///
/// The declared fields sit at fixed offsets with dead gaps between them;
/// the `_gap*` arrays make the struct layout byte-identical to the image
/// layout so it can be read straight off the volume. Numeric fields are
/// 32-bit little-endian.
#[derive(IntoBytes, FromBytes, KnownLayout, Immutable, Copy, Clone, Debug)]
#[repr(C, packed)]
pub struct RawVolumeHeader {
    pub system_tag: [u8; 8], // @0
    _gap0: [u8; 2],
    pub version: [u8; 4], // @10
    _gap1: [u8; 6],
    pub volume_label: [u8; 15], // @20
    _gap2: [u8; 5],
    pub cluster_size: u32, // @40
    _gap3: u8,
    pub cluster_count: u32, // @45
    _gap4: u8,
    pub total_cluster_count: u32, // @50
}
