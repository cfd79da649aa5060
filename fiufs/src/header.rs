// SPDX-License-Identifier: MIT

//! Volume header decoding.
//!
//! Every field is decoded by its declared type from the fixed layout
//! table, never by trying one decode and falling back to another.

use fiuio::prelude::*;

use crate::{constant::*, ensure, errors::*, meta::VolumeMeta, types::*};

/// Reads and validates the header region of an opened image.
///
/// Fails with [`FsFormatError::TooShort`] when the image ends inside the
/// header, with [`FsFormatError::NotAscii`] when a string field holds
/// non-ASCII bytes, and with [`FsFormatError::Invalid`] when the decoded
/// geometry cannot describe a volume.
pub fn read_meta<IO: VolumeIO + ?Sized>(io: &mut IO) -> FsResult<VolumeMeta> {
    let raw: RawVolumeHeader = io.read_struct(0).map_err(|e| {
        if e.is_short() {
            FsError::Format(FsFormatError::TooShort)
        } else {
            FsError::IO(e)
        }
    })?;

    let system_tag = ascii_trimmed(&raw.system_tag, "system tag")?;
    let version = ascii_trimmed(&raw.version, "version")?;
    let volume_label = ascii_trimmed(&raw.volume_label, "volume label")?;

    let cluster_size = raw.cluster_size;
    let cluster_count = raw.cluster_count;
    let total_cluster_count = raw.total_cluster_count;

    ensure!(
        raw.system_tag == *SYSTEM_TAG,
        FsFormatError::Invalid("Image does not carry the FiUnamFS tag")
    );
    ensure!(
        cluster_size > 0,
        FsFormatError::Invalid("Cluster size is zero")
    );
    ensure!(
        total_cluster_count > cluster_count,
        FsFormatError::Invalid("Volume smaller than its directory region")
    );

    Ok(VolumeMeta {
        system_tag,
        version,
        volume_label,
        cluster_size,
        cluster_count,
        total_cluster_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fiuio::prelude::MemVolumeIO;

    fn header_bytes(cluster_size: u32, cluster_count: u32, total: u32) -> Vec<u8> {
        let mut buf = vec![0u8; HEADER_LEN];
        buf[0..8].copy_from_slice(SYSTEM_TAG);
        buf[10..14].copy_from_slice(b"25-1");
        buf[20..35].copy_from_slice(b"UNIT TEST VOL  ");
        buf[40..44].copy_from_slice(&cluster_size.to_le_bytes());
        buf[45..49].copy_from_slice(&cluster_count.to_le_bytes());
        buf[50..54].copy_from_slice(&total.to_le_bytes());
        buf
    }

    #[test]
    fn test_read_meta() {
        let mut buf = header_bytes(2048, 4, 1440);
        let mut io = MemVolumeIO::new(&mut buf);

        let meta = read_meta(&mut io).unwrap();
        assert_eq!(meta.system_tag, "FiUnamFS");
        assert_eq!(meta.version, "25-1");
        assert_eq!(meta.volume_label, "UNIT TEST VOL");
        assert_eq!(meta.cluster_size, 2048);
        assert_eq!(meta.cluster_count, 4);
        assert_eq!(meta.total_cluster_count, 1440);
    }

    #[test]
    fn test_truncated_image() {
        let mut buf = vec![0u8; 40];
        let mut io = MemVolumeIO::new(&mut buf);
        assert_eq!(
            read_meta(&mut io).unwrap_err(),
            FsError::Format(FsFormatError::TooShort)
        );
    }

    #[test]
    fn test_foreign_tag_rejected() {
        let mut buf = header_bytes(2048, 4, 1440);
        buf[0..8].copy_from_slice(b"NTFS    ");
        let mut io = MemVolumeIO::new(&mut buf);
        assert!(matches!(
            read_meta(&mut io).unwrap_err(),
            FsError::Format(FsFormatError::Invalid(_))
        ));
    }

    #[test]
    fn test_zero_cluster_size_rejected() {
        let mut buf = header_bytes(0, 4, 1440);
        let mut io = MemVolumeIO::new(&mut buf);
        assert!(matches!(
            read_meta(&mut io).unwrap_err(),
            FsError::Format(FsFormatError::Invalid(_))
        ));
    }

    #[test]
    fn test_non_ascii_label_rejected() {
        let mut buf = header_bytes(2048, 4, 1440);
        buf[20] = 0xC3;
        buf[21] = 0xA9;
        let mut io = MemVolumeIO::new(&mut buf);
        assert_eq!(
            read_meta(&mut io).unwrap_err(),
            FsError::Format(FsFormatError::NotAscii("volume label"))
        );
    }
}
