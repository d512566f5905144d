mod codes;

pub use codes::ExitCode;

use crate::rename::{BuildError, RenameError};
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("reading media files in {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("calculating absolute path of {}: {source}", .path.display())]
    AbsolutePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
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
        source: std::io::Error,
    },

    #[error("Rename failed: {from} -> {to}")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryRead { .. }
            | AppError::AbsolutePath { .. }
            | AppError::MissingTitle { .. }
            | AppError::Collision { .. }
            | AppError::AlreadyExists { .. }
            | AppError::TargetCheck { .. }
            | AppError::RenameError { .. }
            | AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::RenameError { from, source, .. } => {
                format!("Failed to rename file {}: {}", from, source)
            }

            AppError::Other(message) => message.clone(),

            _ => format!("Failed to build rename set: {}", self),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::ReadDirectory { path, source } => AppError::DirectoryRead { path, source },
        }
    }
}

impl From<BuildError> for AppError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::DirectoryRead(e) => e.into(),
            BuildError::AbsolutePath { path, source } => AppError::AbsolutePath { path, source },
            BuildError::MissingTitle { path } => AppError::MissingTitle { path },
            BuildError::Collision {
                existing,
                incoming,
                target,
            } => AppError::Collision {
                existing,
                incoming,
                target,
            },
            BuildError::AlreadyExists { target } => AppError::AlreadyExists { target },
            BuildError::TargetCheck { target, source } => AppError::TargetCheck { target, source },
        }
    }
}

impl From<RenameError> for AppError {
    fn from(err: RenameError) -> Self {
        match err {
            RenameError::Failed { from, to, source } => AppError::RenameError { from, to, source },
        }
    }
}
