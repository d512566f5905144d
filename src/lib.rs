pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod progress;
pub mod rename;
pub mod scanner;

pub use config::{RenameOptions, MEDIA_EXTENSIONS};
pub use error::{AppError, ExitCode};
pub use parser::{
    episode_number, extract_extension, extract_first_number, left_pad, parse_file_name,
    EpisodeInfo,
};
pub use rename::{
    apply_rename, apply_rename_set, build_rename_set, BuildError, RenameError, RenameOperation,
    RenameSet,
};
pub use scanner::{scan_directory, DirectoryEntry, ScannerError};
