use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("reading media files in {}: {source}", .path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScannerError {
    fn read(path: &Path, source: std::io::Error) -> Self {
        ScannerError::ReadDirectory {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    /// True for real directories; symlinks are never reported as directories
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn new(name: String, is_dir: bool) -> Self {
        Self { name, is_dir }
    }
}

/// List every entry of `target`, sorted by name.
///
/// Files and subdirectories are both returned; callers decide which ones
/// are candidates. Names that are not valid UTF-8 are skipped since they
/// cannot be turned into a target name.
pub fn scan_directory(target: &Path) -> Result<Vec<DirectoryEntry>, ScannerError> {
    debug!(path = ?target, "Scanning directory");

    let read_dir = fs::read_dir(target).map_err(|e| ScannerError::read(target, e))?;

    let mut entries = Vec::new();

    for entry in read_dir {
        let entry = entry.map_err(|e| ScannerError::read(target, e))?;

        trace!(entry = ?entry.path(), "Examining entry");

        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(raw) => {
                warn!(name = ?raw, "Skipping entry with non UTF-8 name");
                continue;
            }
        };

        let file_type = entry
            .file_type()
            .map_err(|e| ScannerError::read(target, e))?;
        entries.push(DirectoryEntry::new(name, file_type.is_dir()));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = entries.len(), "Scan complete");

    Ok(entries)
}
