// SPDX-License-Identifier: MIT

//! Contiguous free-extent search over the cluster space.
//!
//! The occupancy set is rebuilt from the directory on every insertion;
//! nothing persists between searches, so the result only depends on what
//! the caller reserved.

use core::ops::Range;

use crate::{directory::FileRecord, meta::VolumeMeta};

/// Transient cluster-occupancy view with first-fit run search.
///
/// Feed it the reserved system range and the records currently in the
/// directory, then ask for a run. `find_run` is pure: identical occupancy
/// and request size always yield the identical starting index.
#[derive(Debug, Clone)]
pub struct ExtentAllocator {
    occupied: Vec<bool>,
}

impl ExtentAllocator {
    pub fn new(meta: &VolumeMeta) -> Self {
        Self {
            occupied: vec![false; meta.total_cluster_count as usize],
        }
    }

    /// Marks a cluster range as unavailable. Indices past the end of the
    /// volume are ignored.
    pub fn reserve_range(&mut self, range: Range<u32>) {
        let end = (range.end as usize).min(self.occupied.len());
        for cluster in range.start as usize..end {
            self.occupied[cluster] = true;
        }
    }

    /// Marks every cluster occupied by `records` as unavailable.
    pub fn reserve_records(&mut self, meta: &VolumeMeta, records: &[FileRecord]) {
        for record in records {
            self.reserve_range(record.occupied_clusters(meta));
        }
    }

    /// First-fit search: lowest starting index of `clusters_needed`
    /// pairwise-consecutive free clusters, or `None` when no such run
    /// exists. A zero-cluster request anchors at the lowest free cluster
    /// without reserving anything.
    pub fn find_run(&self, clusters_needed: u32) -> Option<u32> {
        let free: Vec<u32> = (0..self.occupied.len() as u32)
            .filter(|&c| !self.occupied[c as usize])
            .collect();

        let needed = clusters_needed as usize;
        if needed == 0 {
            return free.first().copied();
        }

        free.windows(needed)
            .find(|w| w[needed - 1] == w[0] + clusters_needed - 1)
            .map(|w| w[0])
    }

    /// Clusters currently marked unavailable (system + file extents).
    pub fn used_clusters(&self) -> usize {
        self.occupied.iter().filter(|&&o| o).count()
    }

    /// Clusters still free.
    pub fn free_clusters(&self) -> usize {
        self.occupied.len() - self.used_clusters()
    }
}
