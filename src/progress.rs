//! Progress output for user-facing status updates.
//!
//! Status lines go to stdout next to the rename listing. When stdout carries
//! machine-readable output (JSON) they are sent to stderr instead.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors on a stream
fn should_use_colors(is_terminal: bool) -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    is_terminal
}

impl Progress {
    /// Create a new progress reporter writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout()),
            silent: false,
            colors_enabled: should_use_colors(io::stdout().is_terminal()),
        }
    }

    /// Create a progress reporter writing to stderr
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(io::stderr()),
            silent: false,
            colors_enabled: should_use_colors(io::stderr().is_terminal()),
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Create a silent progress reporter (for testing)
    #[cfg(test)]
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    /// Report the series title derived from the directory name
    pub fn title_guess(&mut self, title: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} '{}'",
                "Series name guess:".dimmed(),
                title.bold()
            );
        } else {
            let _ = writeln!(self.writer, "Series name guess: '{}'", title);
        }
    }

    /// Report the end of a run
    pub fn rename_complete(&mut self, count: usize, dry_run: bool) {
        if self.silent {
            return;
        }
        if dry_run {
            if count == 0 {
                let _ = writeln!(self.writer, "No media files to rename.");
            } else if self.colors_enabled {
                let _ = writeln!(
                    self.writer,
                    "{}",
                    format!("Dry run: {} files would be renamed. Run with -y to apply.", count)
                        .dimmed()
                );
            } else {
                let _ = writeln!(
                    self.writer,
                    "Dry run: {} files would be renamed. Run with -y to apply.",
                    count
                );
            }
        } else if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                "✓".green().bold(),
                format!("{} files renamed", count).green()
            );
        } else {
            let _ = writeln!(self.writer, "Renamed {} files.", count);
        }
    }
}

/// Writer sharing its buffer with the test that created it
#[cfg(test)]
pub(crate) struct SharedBuffer(pub std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn create_test_progress() -> (Progress, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let progress = Progress::with_writer(Box::new(SharedBuffer(buffer.clone())));
        (progress, buffer)
    }

    fn contents(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_title_guess() {
        let (mut progress, buffer) = create_test_progress();

        progress.title_guess("MyShow");

        assert_eq!(contents(&buffer), "Series name guess: 'MyShow'\n");
    }

    #[test]
    fn test_rename_complete_dry_run() {
        let (mut progress, buffer) = create_test_progress();

        progress.rename_complete(3, true);

        let output = contents(&buffer);
        assert!(output.contains("3 files would be renamed"));
        assert!(output.contains("-y"));
    }

    #[test]
    fn test_rename_complete_nothing_to_do() {
        let (mut progress, buffer) = create_test_progress();

        progress.rename_complete(0, true);

        assert!(contents(&buffer).contains("No media files to rename"));
    }

    #[test]
    fn test_rename_complete_executed() {
        let (mut progress, buffer) = create_test_progress();

        progress.rename_complete(2, false);

        assert!(contents(&buffer).contains("Renamed 2 files"));
    }

    #[test]
    fn test_silent_progress() {
        let mut progress = Progress::silent();
        progress.title_guess("Anything");
        progress.rename_complete(1, false);
    }
}
