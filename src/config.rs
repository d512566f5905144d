use crate::cli::Args;

/// Media file extensions eligible for renaming
pub const MEDIA_EXTENSIONS: [&str; 5] = [".avi", ".mp4", ".m4v", ".mkv", ".asf"];

pub const DEFAULT_SEASON: &str = "01";
pub const DEFAULT_DIRECTORY: &str = ".";

/// Minimum width of the episode number in generated names
pub const PAD_WIDTH: usize = 2;
pub const PAD_CHAR: char = '0';

/// Inputs to a rename set build
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Series title; derived from the directory name when `None`
    pub title: Option<String>,
    pub season: String,
    pub extensions: Vec<String>,
}

impl RenameOptions {
    pub fn from_args(args: &Args) -> Self {
        Self {
            // An empty title behaves like no title at all
            title: args.title.clone().filter(|t| !t.is_empty()),
            season: args.season.clone(),
            extensions: media_extensions(),
        }
    }
}

pub fn media_extensions() -> Vec<String> {
    MEDIA_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}
