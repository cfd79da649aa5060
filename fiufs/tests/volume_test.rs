// SPDX-License-Identifier: MIT

//! End-to-end tests over temp-file images: open, enumerate, extract,
//! insert, and the failure paths that must leave the image untouched.

use std::path::Path;

use fiufs::prelude::*;
use tempfile::{NamedTempFile, tempdir};

const CLUSTER: u32 = 512;
const DIR_CLUSTERS: u32 = 2;
const TOTAL: u32 = 32;
const ENTRY_WIDTH: usize = 64;

fn stamp() -> time::PrimitiveDateTime {
    decode_timestamp(b"20240315120000", "stamp").unwrap()
}

fn blank_image_bytes() -> Vec<u8> {
    let mut img = vec![0u8; (TOTAL * CLUSTER) as usize];
    img[0..8].copy_from_slice(b"FiUnamFS");
    img[10..14].copy_from_slice(b"25-1");
    img[20..35].copy_from_slice(b"E2E TEST VOLUME");
    img[40..44].copy_from_slice(&CLUSTER.to_le_bytes());
    img[45..49].copy_from_slice(&DIR_CLUSTERS.to_le_bytes());
    img[50..54].copy_from_slice(&TOTAL.to_le_bytes());

    let dir_start = CLUSTER as usize;
    let slots = (DIR_CLUSTERS * CLUSTER) as usize / ENTRY_WIDTH;
    for slot in 0..slots {
        let off = dir_start + slot * ENTRY_WIDTH;
        img[off..off + 15].fill(b'.');
    }
    img
}

fn put_record(img: &mut [u8], slot: usize, name: &str, size_bytes: u32, initial_cluster: u32) {
    let off = CLUSTER as usize + slot * ENTRY_WIDTH;
    img[off] = b'-';
    img[off + 1..off + 15].fill(b' ');
    img[off + 1..off + 1 + name.len()].copy_from_slice(name.as_bytes());
    img[off + 16..off + 20].copy_from_slice(&size_bytes.to_le_bytes());
    img[off + 20..off + 24].copy_from_slice(&initial_cluster.to_le_bytes());
    img[off + 24..off + 38].copy_from_slice(b"20221108182600");
    img[off + 38..off + 52].copy_from_slice(b"20230102030405");
}

fn write_image(img: &[u8]) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), img).unwrap();
    file
}

fn directory_region(path: &Path) -> Vec<u8> {
    let img = std::fs::read(path).unwrap();
    let start = CLUSTER as usize;
    img[start..start + (DIR_CLUSTERS * CLUSTER) as usize].to_vec()
}

#[test]
fn test_open_decodes_header() {
    let file = write_image(&blank_image_bytes());
    let vol = Volume::open(file.path()).unwrap();

    let meta = vol.meta();
    assert_eq!(meta.system_tag, "FiUnamFS");
    assert_eq!(meta.version, "25-1");
    assert_eq!(meta.volume_label, "E2E TEST VOLUME");
    assert_eq!(meta.cluster_size, CLUSTER);
    assert_eq!(meta.cluster_count, DIR_CLUSTERS);
    assert_eq!(meta.total_cluster_count, TOTAL);
}

#[test]
fn test_open_missing_image_is_io_error() {
    let err = Volume::open("/nonexistent/volume.img").unwrap_err();
    assert!(matches!(err, FsError::IO(_)));
}

#[test]
fn test_list_preserves_slot_order() {
    let mut img = blank_image_bytes();
    // Slot order deliberately disagrees with cluster order.
    put_record(&mut img, 0, "high.bin", 100, 20);
    put_record(&mut img, 2, "low.bin", 100, 5);
    let file = write_image(&img);

    let vol = Volume::open(file.path()).unwrap();
    let records = vol.list_files().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "high.bin");
    assert_eq!(records[0].initial_cluster, 20);
    assert_eq!(records[1].name, "low.bin");
    assert_eq!(records[1].created_at, decode_timestamp(b"20221108182600", "c").unwrap());
}

#[test]
fn test_insert_then_read_round_trip() {
    let file = write_image(&blank_image_bytes());
    let vol = Volume::open(file.path()).unwrap();

    let content: Vec<u8> = (0..CLUSTER + 1).map(|i| (i % 251) as u8).collect();
    let record = vol.insert_bytes("payload.bin", &content, stamp()).unwrap();

    assert_eq!(record.size_bytes, content.len() as u32);
    assert_eq!(record.cluster_span(vol.meta()), 2);
    // First free cluster after header + directory.
    assert_eq!(record.initial_cluster, DIR_CLUSTERS + 1);

    // The record is discoverable by a later enumeration, and its bytes
    // sit exactly at initial_cluster * cluster_size.
    let listed = vol.find("payload.bin").unwrap().unwrap();
    assert_eq!(listed, record);
    assert_eq!(vol.read_file(&listed).unwrap(), content);

    let raw = std::fs::read(file.path()).unwrap();
    let start = (record.initial_cluster * CLUSTER) as usize;
    assert_eq!(&raw[start..start + content.len()], &content[..]);
}

#[test]
fn test_inserted_extents_are_disjoint() {
    let file = write_image(&blank_image_bytes());
    let vol = Volume::open(file.path()).unwrap();

    vol.insert_bytes("a.bin", &vec![1u8; 700], stamp()).unwrap();
    vol.insert_bytes("b.bin", &vec![2u8; 512], stamp()).unwrap();
    vol.insert_bytes("c.bin", &vec![3u8; 1], stamp()).unwrap();

    let records = vol.list_files().unwrap();
    assert_eq!(records.len(), 3);
    for (i, a) in records.iter().enumerate() {
        for b in &records[i + 1..] {
            let ra = a.occupied_clusters(vol.meta());
            let rb = b.occupied_clusters(vol.meta());
            assert!(
                ra.end <= rb.start || rb.end <= ra.start,
                "{} and {} overlap: {ra:?} vs {rb:?}",
                a.name,
                b.name
            );
        }
    }

    // Content survives the neighbours.
    let a = vol.find("a.bin").unwrap().unwrap();
    assert_eq!(vol.read_file(&a).unwrap(), vec![1u8; 700]);
}

#[test]
fn test_insert_fills_first_hole() {
    let mut img = blank_image_bytes();
    // Data starts at cluster 3. Seeded extents: [3,5) and [7,9),
    // leaving the hole [5,7) and the tail [9,32).
    put_record(&mut img, 0, "left.bin", CLUSTER * 2, 3);
    put_record(&mut img, 1, "right.bin", CLUSTER * 2, 7);
    let file = write_image(&img);

    let vol = Volume::open(file.path()).unwrap();

    let two = vol
        .insert_bytes("hole.bin", &vec![9u8; (CLUSTER * 2) as usize], stamp())
        .unwrap();
    assert_eq!(two.initial_cluster, 5);

    let three = vol
        .insert_bytes("tail.bin", &vec![9u8; (CLUSTER * 3) as usize], stamp())
        .unwrap();
    assert_eq!(three.initial_cluster, 9);
}

#[test]
fn test_zero_byte_file_occupies_no_clusters() {
    let file = write_image(&blank_image_bytes());
    let vol = Volume::open(file.path()).unwrap();

    let empty = vol.insert_bytes("empty", &[], stamp()).unwrap();
    assert_eq!(empty.cluster_span(vol.meta()), 0);
    assert_eq!(vol.read_file(&empty).unwrap(), Vec::<u8>::new());

    // The anchor cluster stays free for the next file.
    let next = vol
        .insert_bytes("next.bin", &[0xAB; 4], stamp())
        .unwrap();
    assert_eq!(next.initial_cluster, empty.initial_cluster);
}

#[test]
fn test_extract_and_destination_guard() {
    let mut img = blank_image_bytes();
    put_record(&mut img, 0, "keep.txt", 11, 4);
    let data_off = (4 * CLUSTER) as usize;
    img[data_off..data_off + 11].copy_from_slice(b"hello world");
    let file = write_image(&img);

    let vol = Volume::open(file.path()).unwrap();
    let record = vol.find("keep.txt").unwrap().unwrap();

    let out = tempdir().unwrap();
    let dest = vol.extract_to(&record, out.path()).unwrap();
    assert_eq!(std::fs::read(&dest).unwrap(), b"hello world");

    // Second extraction must fail and leave the destination untouched.
    std::fs::write(&dest, b"precious local data").unwrap();
    let err = vol.extract_to(&record, out.path()).unwrap_err();
    assert_eq!(err, FsError::Transfer(FsTransferError::DestinationExists));
    assert_eq!(std::fs::read(&dest).unwrap(), b"precious local data");
}

#[test]
fn test_insert_missing_source() {
    let file = write_image(&blank_image_bytes());
    let vol = Volume::open(file.path()).unwrap();

    let err = vol.insert(Path::new("/nonexistent/file.txt")).unwrap_err();
    assert_eq!(err, FsError::Transfer(FsTransferError::SourceMissing));
}

#[test]
fn test_insert_from_local_file() {
    let file = write_image(&blank_image_bytes());
    let vol = Volume::open(file.path()).unwrap();

    let src_dir = tempdir().unwrap();
    let src = src_dir.path().join("note.txt");
    std::fs::write(&src, b"from outside").unwrap();

    let record = vol.insert(&src).unwrap();
    assert_eq!(record.name, "note.txt");
    assert_eq!(vol.read_file(&record).unwrap(), b"from outside");
}

#[test]
fn test_capacity_error_leaves_directory_unchanged() {
    let file = write_image(&blank_image_bytes());
    let vol = Volume::open(file.path()).unwrap();
    vol.insert_bytes("small.bin", &[1, 2, 3], stamp()).unwrap();

    let before = directory_region(file.path());

    // 30 clusters requested, only 28 free after header, directory and
    // the small file.
    let oversized = vec![0u8; (CLUSTER * 30) as usize];
    let err = vol.insert_bytes("big.bin", &oversized, stamp()).unwrap_err();
    assert_eq!(err, FsError::Allocator(FsAllocatorError::OutOfSpace));

    assert_eq!(directory_region(file.path()), before);
}

#[test]
fn test_directory_full() {
    let mut img = blank_image_bytes();
    let slots = (DIR_CLUSTERS * CLUSTER) as usize / ENTRY_WIDTH;
    for slot in 0..slots {
        // One cluster each, packed from the start of the data region.
        put_record(&mut img, slot, &format!("f{slot}.bin"), 1, 3 + slot as u32);
    }
    let file = write_image(&img);

    let vol = Volume::open(file.path()).unwrap();
    let err = vol.insert_bytes("late.bin", &[1], stamp()).unwrap_err();
    assert_eq!(err, FsError::Allocator(FsAllocatorError::DirectoryFull));
}

#[test]
fn test_duplicate_name_rejected() {
    let file = write_image(&blank_image_bytes());
    let vol = Volume::open(file.path()).unwrap();

    vol.insert_bytes("twice.txt", &[1], stamp()).unwrap();
    let err = vol.insert_bytes("twice.txt", &[2], stamp()).unwrap_err();
    assert!(matches!(err, FsError::Transfer(FsTransferError::Other(_))));
}
