//! File-level compress and decompress operations.
//!
//! Thin wrappers around the core codec: read the whole file, run the
//! codec, write the whole result. Outputs are written to a temporary
//! sibling path and renamed into place, so a failed operation never
//! leaves a partial file at the target.

use std::fs;
use std::path::{Path, PathBuf};

use huffpack_core::{Error, Result};

use crate::paths;

/// Compress `input` into a `.cpm` container next to it.
///
/// Returns the container path. An existing container at that path is
/// overwritten.
pub fn compress_file(input: &Path) -> Result<PathBuf> {
    let data = read_file(input)?;
    let original_name = file_name(input);

    let container = huffpack_core::compress(&data, &original_name)?;

    let output = paths::container_path(input);
    write_file(&output, &container)?;
    Ok(output)
}

/// Decompress a `.cpm` container into the original bytes.
///
/// The output name comes from the original file name recorded in the
/// header, with the decompressed suffix inserted, next to the container.
pub fn decompress_file(container: &Path) -> Result<PathBuf> {
    let bytes = read_file(container)?;

    let decoded = huffpack_core::decompress(&bytes)?;

    let output = paths::decompressed_path(container, &decoded.original_name);
    write_file(&output, &decoded.data)?;
    Ok(output)
}

/// File name of `path` without its directory, lossily converted so that
/// non-UTF-8 names still produce a usable header entry.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Read a whole file, rejecting empty files up front.
fn read_file(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path)?;
    if data.is_empty() {
        return Err(Error::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(data)
}

/// Write a whole file via a temporary sibling path plus rename.
fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let mut tmp_name = file_name(path);
    tmp_name.push_str(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, data)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scratch directory under the system temp dir, removed on drop.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(tag: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "huffpack-test-{}-{tag}",
                std::process::id()
            ));
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn path(&self, name: &str) -> PathBuf {
            self.0.join(name)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_compress_then_decompress_on_disk() {
        let dir = ScratchDir::new("round-trip");
        let input = dir.path("sample.txt");
        let payload = b"on-disk round trip through the cpm container".repeat(20);
        fs::write(&input, &payload).unwrap();

        let container = compress_file(&input).unwrap();
        assert_eq!(container, dir.path("sample.cpm"));
        assert!(container.exists());

        let output = decompress_file(&container).unwrap();
        assert_eq!(output, dir.path("sample-decompressed.txt"));
        assert_eq!(fs::read(&output).unwrap(), payload);
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = ScratchDir::new("missing");
        let result = compress_file(&dir.path("does-not-exist.txt"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let dir = ScratchDir::new("empty");
        let input = dir.path("empty.txt");
        fs::write(&input, b"").unwrap();

        let result = compress_file(&input);
        assert!(matches!(result, Err(Error::EmptyFile { .. })));
        assert!(!dir.path("empty.cpm").exists());
    }

    #[test]
    fn test_existing_container_is_overwritten() {
        let dir = ScratchDir::new("overwrite");
        let input = dir.path("data.bin");
        fs::write(&input, vec![0x5Au8; 512]).unwrap();
        fs::write(dir.path("data.cpm"), b"stale").unwrap();

        let container = compress_file(&input).unwrap();
        let output = decompress_file(&container).unwrap();
        assert_eq!(fs::read(output).unwrap(), vec![0x5Au8; 512]);
    }

    #[test]
    fn test_malformed_container_writes_nothing() {
        let dir = ScratchDir::new("malformed");
        let container = dir.path("broken.cpm");
        fs::write(&container, [0x01, 0x02, 0x03]).unwrap();

        let result = decompress_file(&container);
        assert!(matches!(result, Err(Error::Container(_))));
        // Only the broken container should exist in the directory.
        let entries = fs::read_dir(&dir.0).unwrap().count();
        assert_eq!(entries, 1);
    }
}
