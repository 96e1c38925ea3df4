//! Gunzip a downloaded file next to itself.

use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Read, Write},
    path::{Path, PathBuf},
};

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::errors::YomahaErr;

const BUFFER_SIZE: usize = 64 * 1024;

/// Decompress the gzip file at `src` into `dst`.
///
/// Output goes to a `.part` file next to `dst` and is only renamed into place once the whole
/// stream decoded. If decoding fails the partial output is removed, so `dst` never holds a
/// truncated file.
pub fn decompress_file(src: &Path, dst: &Path) -> Result<(), YomahaErr> {
    let part = part_path(dst);

    match stream_to(src, &part) {
        Ok(num_bytes) => {
            std::fs::rename(&part, dst)?;
            debug!("Decompressed {} bytes into {}", num_bytes, dst.display());
            Ok(())
        }
        Err(err) => {
            // Report the decode error, not the cleanup.
            let _ = std::fs::remove_file(&part);
            Err(err)
        }
    }
}

fn stream_to(src: &Path, part: &Path) -> Result<u64, YomahaErr> {
    let mut decoder = MultiGzDecoder::new(BufReader::new(File::open(src)?));
    let mut writer = BufWriter::new(File::create(part)?);

    let mut buffer = vec![0u8; BUFFER_SIZE];
    let mut total: u64 = 0;

    loop {
        let num_read = match decoder.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(ref err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                return Err(YomahaErr::Decompress {
                    path: src.to_path_buf(),
                    source: err,
                })
            }
        };

        writer.write_all(&buffer[..num_read])?;
        total += num_read as u64;
    }

    writer.flush()?;
    Ok(total)
}

fn part_path(dst: &Path) -> PathBuf {
    let mut name = dst.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".part");
    dst.with_file_name(name)
}

#[cfg(test)]
mod unit {
    use super::*;

    use flate2::{write::GzEncoder, Compression};
    use tempdir::TempDir;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(vec![], Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_decompress_file() {
        let tmp = TempDir::new("yomaha-data-test-gunzip").unwrap();
        let src = tmp.path().join("yomaha07.dat.gz");
        let dst = tmp.path().join("yomaha07.dat");

        let text = "1 2 3\n4 5 6\n".repeat(10_000);
        std::fs::write(&src, gzip(text.as_bytes())).unwrap();

        decompress_file(&src, &dst).unwrap();

        assert_eq!(std::fs::read_to_string(&dst).unwrap(), text);
        assert!(!part_path(&dst).exists());
    }

    #[test]
    fn test_decompress_multi_member() {
        let tmp = TempDir::new("yomaha-data-test-gunzip").unwrap();
        let src = tmp.path().join("two.gz");
        let dst = tmp.path().join("two");

        let mut data = gzip(b"first\n");
        data.extend(gzip(b"second\n"));
        std::fs::write(&src, data).unwrap();

        decompress_file(&src, &dst).unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_truncated_stream() {
        let tmp = TempDir::new("yomaha-data-test-gunzip").unwrap();
        let src = tmp.path().join("yomaha07.dat.gz");
        let dst = tmp.path().join("yomaha07.dat");

        let text = "-999.99 -99.99 12345\n".repeat(5_000);
        let compressed = gzip(text.as_bytes());
        std::fs::write(&src, &compressed[..compressed.len() / 2]).unwrap();

        match decompress_file(&src, &dst) {
            Err(YomahaErr::Decompress { path, .. }) => assert_eq!(path, src),
            other => panic!("unexpected result: {:?}", other),
        }

        assert!(!dst.exists());
        assert!(!part_path(&dst).exists());
    }

    #[test]
    fn test_not_gzip() {
        let tmp = TempDir::new("yomaha-data-test-gunzip").unwrap();
        let src = tmp.path().join("plain.gz");
        let dst = tmp.path().join("plain");

        std::fs::write(&src, b"this is not a gzip stream").unwrap();

        assert!(decompress_file(&src, &dst).is_err());
        assert!(!dst.exists());
    }

    #[test]
    fn test_part_path() {
        assert_eq!(
            part_path(Path::new("/data/yomaha07.dat")),
            PathBuf::from("/data/yomaha07.dat.part")
        );
    }
}
