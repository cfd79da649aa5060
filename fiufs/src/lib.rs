// SPDX-License-Identifier: MIT

//! User-space driver for the FiUnamFS flat-volume image format.
//!
//! A single binary file acts as a virtual volume: a fixed-offset header
//! in cluster 0, a flat directory of 64-byte records, and a data region
//! of cluster-aligned file extents. The driver decodes the header,
//! enumerates the directory, extracts content by cluster range, and
//! inserts files by claiming a contiguous run of free clusters.

// Core modules
pub mod allocator;
pub mod constant;
pub mod directory;
pub mod errors;
pub mod header;
mod macros;
pub mod meta;
pub mod timestamp;
pub mod transfer;
pub mod types;
pub mod volume;

// Prelude re-exports (central entrypoint)
pub mod prelude {
    pub use crate::allocator::ExtentAllocator;
    pub use crate::directory::{FileRecord, find_free_slot, list_records, write_record};
    pub use crate::errors::*;
    pub use crate::header::read_meta;
    pub use crate::meta::VolumeMeta;
    pub use crate::timestamp::{decode_timestamp, encode_timestamp, format_timestamp};
    pub use crate::transfer::{read_content, write_content};
    pub use crate::volume::Volume;
    pub use fiuio::prelude::*;
}
