//! Output path derivation.
//!
//! Compression writes `<dir>/<stem>.cpm` next to the input. Decompression
//! reconstructs the output name from the original file name recorded in
//! the container header: `<stem>-decompressed<.ext>`, placed next to the
//! container.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// File extension for compressed containers.
pub const CONTAINER_EXTENSION: &str = "cpm";

/// Suffix inserted before the extension of decompressed output files.
pub const DECOMPRESSED_SUFFIX: &str = "-decompressed";

/// Path of the container produced for `input`: same directory, the
/// input's stem, `.cpm` extension.
pub fn container_path(input: &Path) -> PathBuf {
    input.with_extension(CONTAINER_EXTENSION)
}

/// Path of the decompressed output for a container, given the original
/// file name from its header.
///
/// Any directory components smuggled into the recorded name are ignored;
/// the output always lands next to the container.
pub fn decompressed_path(container: &Path, original_name: &str) -> PathBuf {
    let original = Path::new(original_name);
    let stem = original
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("output");

    let name = match original.extension().and_then(OsStr::to_str) {
        Some(ext) => format!("{stem}{DECOMPRESSED_SUFFIX}.{ext}"),
        None => format!("{stem}{DECOMPRESSED_SUFFIX}"),
    };

    container.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_path_replaces_extension() {
        assert_eq!(
            container_path(Path::new("/data/report.txt")),
            PathBuf::from("/data/report.cpm")
        );
    }

    #[test]
    fn test_container_path_without_extension() {
        assert_eq!(
            container_path(Path::new("notes")),
            PathBuf::from("notes.cpm")
        );
    }

    #[test]
    fn test_decompressed_path_inserts_suffix() {
        assert_eq!(
            decompressed_path(Path::new("/data/report.cpm"), "report.txt"),
            PathBuf::from("/data/report-decompressed.txt")
        );
    }

    #[test]
    fn test_decompressed_path_no_extension() {
        assert_eq!(
            decompressed_path(Path::new("archive.cpm"), "notes"),
            PathBuf::from("notes-decompressed")
        );
    }

    #[test]
    fn test_decompressed_path_strips_directories_from_name() {
        assert_eq!(
            decompressed_path(Path::new("/safe/archive.cpm"), "../../etc/passwd.txt"),
            PathBuf::from("/safe/passwd-decompressed.txt")
        );
    }
}
