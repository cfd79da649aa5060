// SPDX-License-Identifier: MIT

//! Volume session handle.
//!
//! A [`Volume`] is an explicit value holding the image path and the
//! header decoded once at open time. Every operation re-opens the image
//! for the duration of one call and re-reads the directory, so no state
//! can go stale between calls; the file handle is released on all exit
//! paths.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fiuio::prelude::*;
use time::PrimitiveDateTime;

use crate::{
    allocator::ExtentAllocator,
    constant::ENTRY_NAME_LEN,
    directory::{self, FileRecord},
    ensure, header,
    errors::*,
    meta::VolumeMeta,
    timestamp, transfer,
};

/// An opened FiUnamFS image.
#[derive(Debug)]
pub struct Volume {
    path: PathBuf,
    meta: VolumeMeta,
}

impl Volume {
    /// Opens an image and decodes its header.
    pub fn open(path: impl Into<PathBuf>) -> FsResult<Self> {
        let path = path.into();
        let mut file = File::open(&path).map_err(VolumeIOError::from)?;
        let mut io = StdVolumeIO::new(&mut file);
        let meta = header::read_meta(&mut io)?;
        Ok(Self { path, meta })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn meta(&self) -> &VolumeMeta {
        &self.meta
    }

    /// Enumerates the directory. Fresh scan on every call, slot order.
    pub fn list_files(&self) -> FsResult<Vec<FileRecord>> {
        let mut file = File::open(&self.path).map_err(VolumeIOError::from)?;
        let mut io = StdVolumeIO::new(&mut file);
        directory::list_records(&mut io, &self.meta)
    }

    /// Looks a record up by exact name.
    pub fn find(&self, name: &str) -> FsResult<Option<FileRecord>> {
        Ok(self.list_files()?.into_iter().find(|r| r.name == name))
    }

    /// Reads a file's content out of the image.
    pub fn read_file(&self, record: &FileRecord) -> FsResult<Vec<u8>> {
        let mut file = File::open(&self.path).map_err(VolumeIOError::from)?;
        let mut io = StdVolumeIO::new(&mut file);
        transfer::read_content(&mut io, &self.meta, record)
    }

    /// Copies a file out of the image into `dest_dir/<name>`.
    ///
    /// An existing destination fails with
    /// [`FsTransferError::DestinationExists`] and is left untouched.
    pub fn extract_to(&self, record: &FileRecord, dest_dir: &Path) -> FsResult<PathBuf> {
        let dest = dest_dir.join(&record.name);
        let content = self.read_file(record)?;

        let mut out = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&dest)
            .map_err(|e| {
                if e.kind() == ErrorKind::AlreadyExists {
                    FsError::Transfer(FsTransferError::DestinationExists)
                } else {
                    FsError::IO(VolumeIOError::from(e))
                }
            })?;
        out.write_all(&content).map_err(VolumeIOError::from)?;
        Ok(dest)
    }

    /// Copies a local file into the image under its file name.
    pub fn insert(&self, source: &Path) -> FsResult<FileRecord> {
        let name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(FsTransferError::InvalidName)?;
        let content = fs::read(source).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                FsError::Transfer(FsTransferError::SourceMissing)
            } else {
                FsError::IO(VolumeIOError::from(e))
            }
        })?;
        self.insert_bytes(name, &content, timestamp::now())
    }

    /// Inserts in-memory content as a new file.
    ///
    /// Pipeline: enumerate, allocate a contiguous run, write the content,
    /// then register the directory entry. Registration is strictly last:
    /// a failed content write leaves only unregistered clusters behind
    /// and the directory region byte-identical.
    pub fn insert_bytes(
        &self,
        name: &str,
        content: &[u8],
        stamp: PrimitiveDateTime,
    ) -> FsResult<FileRecord> {
        validate_name(name)?;
        ensure!(
            content.len() as u64 <= u32::MAX as u64,
            FsTransferError::Other("Content larger than the volume format allows")
        );

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(VolumeIOError::from)?;
        let mut io = StdVolumeIO::new(&mut file);

        let records = directory::list_records(&mut io, &self.meta)?;
        ensure!(
            records.iter().all(|r| r.name != name),
            FsTransferError::Other("A file with this name already exists in the volume")
        );

        let slot = directory::find_free_slot(&mut io, &self.meta)?
            .ok_or(FsAllocatorError::DirectoryFull)?;

        let mut alloc = ExtentAllocator::new(&self.meta);
        alloc.reserve_range(self.meta.reserved_clusters());
        alloc.reserve_records(&self.meta, &records);

        let needed = self.meta.cluster_span(content.len() as u32);
        let first_cluster = alloc
            .find_run(needed)
            .ok_or(FsAllocatorError::OutOfSpace)?;

        transfer::write_content(&mut io, &self.meta, first_cluster, content)?;

        let record = FileRecord {
            name: name.to_string(),
            size_bytes: content.len() as u32,
            initial_cluster: first_cluster,
            created_at: stamp,
            updated_at: stamp,
        };
        directory::write_record(&mut io, &self.meta, slot, &record)?;
        io.flush()?;

        Ok(record)
    }
}

fn validate_name(name: &str) -> FsTransferResult {
    let printable = name.bytes().all(|b| b.is_ascii_graphic() || b == b' ');
    if name.is_empty() || name.len() > ENTRY_NAME_LEN || !printable || name.trim() != name {
        crate::bail!(FsTransferError::InvalidName);
    }
    Ok(())
}
