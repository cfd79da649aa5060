// SPDX-License-Identifier: MIT

//! Cluster-aligned content extraction and insertion.
//!
//! Both directions are single positioned transfers at
//! `cluster * cluster_size`. Reads are exact: a volume ending inside the
//! requested range is an error, never truncated bytes.

use fiuio::prelude::*;

use crate::{ensure, errors::*, directory::FileRecord, meta::VolumeMeta};

/// Reads exactly `record.size_bytes` bytes starting at the record's
/// initial cluster.
pub fn read_content<IO: VolumeIO + ?Sized>(
    io: &mut IO,
    meta: &VolumeMeta,
    record: &FileRecord,
) -> FsResult<Vec<u8>> {
    let span_end = record.initial_cluster as u64 + record.cluster_span(meta) as u64;
    ensure!(
        span_end <= meta.total_cluster_count as u64,
        FsFormatError::Invalid("Record extends past the end of the volume")
    );

    let mut buf = vec![0u8; record.size_bytes as usize];
    io.read_at(meta.cluster_offset(record.initial_cluster), &mut buf)?;
    Ok(buf)
}

/// Writes `content` starting at `first_cluster`, leaving the rest of the
/// image untouched. The caller must have reserved
/// `first_cluster..first_cluster + span` through the allocator first.
pub fn write_content<IO: VolumeIO + ?Sized>(
    io: &mut IO,
    meta: &VolumeMeta,
    first_cluster: u32,
    content: &[u8],
) -> FsResult {
    let span = (content.len() as u64).div_ceil(meta.cluster_size as u64);
    ensure!(
        first_cluster as u64 + span <= meta.total_cluster_count as u64,
        FsFormatError::Invalid("Write extends past the end of the volume")
    );

    io.write_at(meta.cluster_offset(first_cluster), content)?;
    Ok(())
}
