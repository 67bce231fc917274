mod render;

pub use render::*;

use std::io::Write;
use tracing::warn;

/// A region the submitter writes progress, results and errors into.
/// Each call replaces whatever the region showed before.
#[cfg_attr(test, mockall::automock)]
pub trait Output: Send + Sync {
    fn show(&self, content: &str);
}

/// Writes each update to stdout, optionally tagged with the region name so
/// interleaved updates in the shell stay readable.
pub struct TerminalOutput {
    label: Option<String>,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { label: None }
    }

    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    fn format(&self, content: &str) -> String {
        match &self.label {
            Some(label) => content
                .lines()
                .map(|line| format!("[{}] {}", label, line))
                .collect::<Vec<_>>()
                .join("\n"),
            None => content.to_string(),
        }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn show(&self, content: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", self.format(content)) {
            warn!("Failed to write output: {}", e);
        }
    }
}
