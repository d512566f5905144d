/// Episode details derived from a single file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeInfo {
    /// Zero-padded episode number ("00" when the name has no digits)
    pub episode: String,
    /// Extension including the leading dot, empty when the name has none
    pub extension: String,
}

impl EpisodeInfo {
    /// Target name for this episode under the given title and season
    pub fn target_name(&self, title: &str, season: &str) -> String {
        format!("{} S{}E{}{}", title, season, self.episode, self.extension)
    }

    pub fn has_extension_in(&self, allowed: &[String]) -> bool {
        allowed.iter().any(|ext| *ext == self.extension)
    }
}
