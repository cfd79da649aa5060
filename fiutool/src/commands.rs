// SPDX-License-Identifier: MIT

use std::path::Path;

use colored::Colorize;
use fiufs::prelude::*;

use crate::utils::pretty_bytes;

pub fn info(volume: &Volume) -> anyhow::Result<()> {
    let meta = volume.meta();
    let records = volume.list_files().map_err(|e| anyhow::anyhow!("{e}"))?;

    let mut alloc = ExtentAllocator::new(meta);
    alloc.reserve_range(meta.reserved_clusters());
    alloc.reserve_records(meta, &records);

    println!("{}", format!("{} {}", meta.system_tag, meta.version).bold());
    println!("  label          {}", meta.volume_label);
    println!("  cluster size   {} B", meta.cluster_size);
    println!(
        "  directory      {} clusters, {} entries",
        meta.cluster_count,
        meta.entry_count()
    );
    println!(
        "  volume         {} clusters ({})",
        meta.total_cluster_count,
        pretty_bytes(meta.size_bytes())
    );
    println!(
        "  in use         {} clusters, {} free, {} files",
        alloc.used_clusters(),
        alloc.free_clusters(),
        records.len()
    );
    Ok(())
}

pub fn list(volume: &Volume) -> anyhow::Result<()> {
    let meta = volume.meta();
    let records = volume.list_files().map_err(|e| anyhow::anyhow!("{e}"))?;

    if records.is_empty() {
        crate::log_info!("Volume holds no files.");
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{:<14}  {:>10}  {:>8}  {:<19}  {:<19}",
            "NAME", "SIZE", "CLUSTERS", "CREATED", "UPDATED"
        )
        .bold()
    );
    for record in &records {
        let span = record.occupied_clusters(meta);
        println!(
            "{:<14}  {:>10}  {:>8}  {:<19}  {:<19}",
            record.name,
            pretty_bytes(record.size_bytes as u64),
            format!("{}..{}", span.start, span.end),
            format_timestamp(record.created_at),
            format_timestamp(record.updated_at)
        );
    }
    Ok(())
}

pub fn extract(volume: &Volume, name: &str, out: &Path) -> anyhow::Result<()> {
    let record = volume
        .find(name)
        .map_err(|e| anyhow::anyhow!("{e}"))?
        .ok_or_else(|| anyhow::anyhow!("No file named \"{name}\" in the volume"))?;

    let dest = volume
        .extract_to(&record, out)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    crate::log_info!(
        "{} \"{}\" ({}) -> {}",
        "Extracted".green(),
        record.name,
        pretty_bytes(record.size_bytes as u64),
        dest.display()
    );
    Ok(())
}

pub fn insert(volume: &Volume, source: &Path) -> anyhow::Result<()> {
    let record = volume
        .insert(source)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    crate::log_verbose!(
        "Registered directory entry for \"{}\" at cluster {}",
        record.name,
        record.initial_cluster
    );
    crate::log_info!(
        "{} \"{}\" ({}) at cluster {}",
        "Inserted".green(),
        record.name,
        pretty_bytes(record.size_bytes as u64),
        record.initial_cluster
    );
    Ok(())
}
