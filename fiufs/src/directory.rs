// SPDX-License-Identifier: MIT

//! Directory region enumeration and record registration.
//!
//! Every call re-reads the image; no directory state is cached between
//! calls. Slot order is physical order, and nothing here assumes entries
//! are contiguous or sorted by cluster.

use core::ops::Range;

use fiuio::prelude::*;
use time::PrimitiveDateTime;

use crate::{
    constant::*,
    ensure,
    errors::*,
    meta::VolumeMeta,
    timestamp::{decode_timestamp, encode_timestamp},
    types::*,
};

/// One occupied directory slot, decoded.
///
/// Materialized fresh on every enumeration; registration writes a new
/// on-disk record instead of mutating one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub size_bytes: u32,
    /// Index of the first data cluster holding this file's bytes.
    pub initial_cluster: u32,
    pub created_at: PrimitiveDateTime,
    pub updated_at: PrimitiveDateTime,
}

impl FileRecord {
    /// Clusters this file spans.
    #[inline]
    pub fn cluster_span(&self, meta: &VolumeMeta) -> u32 {
        meta.cluster_span(self.size_bytes)
    }

    /// Half-open cluster range this file occupies. Disjoint across all
    /// valid records of a well-formed volume.
    #[inline]
    pub fn occupied_clusters(&self, meta: &VolumeMeta) -> Range<u32> {
        let span = self.cluster_span(meta);
        self.initial_cluster..self.initial_cluster.saturating_add(span)
    }
}

/// Scans the directory region and decodes every occupied slot, in slot
/// order. Unmarked slots are skipped, not errors.
pub fn list_records<IO: VolumeIO + ?Sized>(
    io: &mut IO,
    meta: &VolumeMeta,
) -> FsResult<Vec<FileRecord>> {
    let mut records = Vec::new();

    for slot in 0..meta.entry_count() {
        let raw = read_slot(io, meta, slot)?;
        if !raw.is_occupied() {
            continue;
        }
        records.push(decode_record(&raw)?);
    }

    Ok(records)
}

/// Lowest unmarked slot index, or `None` when the directory is full.
pub fn find_free_slot<IO: VolumeIO + ?Sized>(
    io: &mut IO,
    meta: &VolumeMeta,
) -> FsResult<Option<usize>> {
    for slot in 0..meta.entry_count() {
        let raw = read_slot(io, meta, slot)?;
        if !raw.is_occupied() {
            return Ok(Some(slot));
        }
    }
    Ok(None)
}

/// Registers `record` in directory slot `slot`.
///
/// This is the final step of an insertion: it must run only after the
/// content write succeeded, so that a failed write leaves nothing but
/// unregistered clusters behind.
pub fn write_record<IO: VolumeIO + ?Sized>(
    io: &mut IO,
    meta: &VolumeMeta,
    slot: usize,
    record: &FileRecord,
) -> FsResult {
    ensure!(
        slot < meta.entry_count(),
        FsFormatError::Invalid("Directory slot out of range")
    );
    ensure!(
        !record.name.is_empty() && record.name.len() <= ENTRY_NAME_LEN,
        FsTransferError::InvalidName
    );

    let raw = RawDirEntry::occupied(
        &record.name,
        record.size_bytes,
        record.initial_cluster,
        encode_timestamp(record.created_at),
        encode_timestamp(record.updated_at),
    );
    io.write_struct(meta.entry_offset(slot), &raw)?;
    Ok(())
}

fn read_slot<IO: VolumeIO + ?Sized>(
    io: &mut IO,
    meta: &VolumeMeta,
    slot: usize,
) -> FsResult<RawDirEntry> {
    io.read_struct(meta.entry_offset(slot)).map_err(|e| {
        if e.is_short() {
            FsError::Format(FsFormatError::TooShort)
        } else {
            FsError::IO(e)
        }
    })
}

fn decode_record(raw: &RawDirEntry) -> FsResult<FileRecord> {
    let name = ascii_trimmed(&raw.name, "file name")?;
    let created_at = decode_timestamp(&raw.created_at, "creation date")?;
    let updated_at = decode_timestamp(&raw.updated_at, "update date")?;

    Ok(FileRecord {
        name,
        size_bytes: raw.size_bytes,
        initial_cluster: raw.initial_cluster,
        created_at,
        updated_at,
    })
}
