mod types;

pub use types::*;

use crate::config::{PAD_CHAR, PAD_WIDTH};
use once_cell::sync::Lazy;
use regex::Regex;

// First run of ASCII digits anywhere in the name
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

// Last dot through the end of the name
static EXTENSION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[^.]*$").unwrap());

/// Derive the padded episode number and extension for a file name
pub fn parse_file_name(name: &str) -> EpisodeInfo {
    EpisodeInfo {
        episode: episode_number(name),
        extension: extract_extension(name).to_string(),
    }
}

/// First contiguous run of digits in `name`, or "" if there is none
pub fn extract_first_number(name: &str) -> &str {
    NUMBER_REGEX.find(name).map(|m| m.as_str()).unwrap_or("")
}

/// Extension starting at the last '.', with trailing newlines trimmed
pub fn extract_extension(name: &str) -> &str {
    EXTENSION_REGEX
        .find(name)
        .map(|m| m.as_str().trim_end_matches('\n'))
        .unwrap_or("")
}

/// Left-pad `value` with `pad` until it is at least `width` characters long.
/// Longer values are returned unchanged.
pub fn left_pad(value: &str, pad: char, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let mut padded: String = std::iter::repeat(pad).take(width - len).collect();
    padded.push_str(value);
    padded
}

pub fn episode_number(name: &str) -> String {
    left_pad(extract_first_number(name), PAD_CHAR, PAD_WIDTH)
}
