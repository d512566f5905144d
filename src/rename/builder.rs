use crate::config::RenameOptions;
use crate::parser::parse_file_name;
use crate::progress::Progress;
use crate::scanner::{scan_directory, ScannerError};
use std::fs;
use std::io;
use path_clean::PathClean;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::types::RenameSet;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    DirectoryRead(#[from] ScannerError),

    #[error("calculating absolute path of {}: {source}", .path.display())]
    AbsolutePath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no directory name to use as series title: {}", .path.display())]
    MissingTitle { path: PathBuf },

    #[error("filename collision: both '{existing}' and '{incoming}' map to new filename '{target}'")]
    Collision {
        existing: String,
        incoming: String,
        target: String,
    },

    #[error("file already exists: '{target}'")]
    AlreadyExists { target: String },

    #[error("checking for existing file '{target}': {source}")]
    TargetCheck {
        target: String,
        #[source]
        source: io::Error,
    },
}

/// Compute how to rename the media files in `directory`.
///
/// Nothing on disk is modified. The first collision or pre-existing target
/// aborts the whole build.
pub fn build_rename_set(
    directory: &Path,
    options: &RenameOptions,
    progress: &mut Progress,
) -> Result<RenameSet, BuildError> {
    let entries = scan_directory(directory)?;

    let title = match options.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => {
            let guess = derive_title(directory)?;
            info!(title = %guess, "Derived series title from directory");
            progress.title_guess(&guess);
            guess
        }
    };

    let mut set = RenameSet::new();

    for entry in &entries {
        if entry.is_dir {
            debug!(name = %entry.name, "Skipping directory");
            continue;
        }

        let episode = parse_file_name(&entry.name);
        if !episode.has_extension_in(&options.extensions) {
            debug!(name = %entry.name, extension = %episode.extension, "Skipping non-media file");
            continue;
        }

        let target = episode.target_name(&title, &options.season);

        match fs::metadata(directory.join(&target)) {
            Ok(_) => {
                warn!(target = %target, "Target already exists");
                return Err(BuildError::AlreadyExists { target });
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(BuildError::TargetCheck { target, source: e }),
        }

        if let Err(existing) = set.insert(target.clone(), entry.name.clone()) {
            warn!(target = %target, "Two files map to the same name");
            return Err(BuildError::Collision {
                existing,
                incoming: entry.name.clone(),
                target,
            });
        }

        debug!(from = %entry.name, to = %target, "Planned rename");
    }

    info!(count = set.len(), "Rename set complete");

    Ok(set)
}

/// Final component of the absolute form of `directory`.
///
/// `.` and `..` are resolved textually; symlinks are not followed, so a
/// linked directory keeps the name of the link.
pub fn derive_title(directory: &Path) -> Result<String, BuildError> {
    let absolute = std::path::absolute(directory)
        .map_err(|e| BuildError::AbsolutePath {
            path: directory.to_path_buf(),
            source: e,
        })?
        .clean();

    let title = absolute
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string);

    title.ok_or(BuildError::MissingTitle { path: absolute })
}
