//! Plain-text tracklist writer.

use std::path::Path;

use crate::error::{MixError, Result};
use crate::types::TimestampEntry;

/// First line of every tracklist file.
pub const TRACKLIST_HEADER: &str = "Auto Music Mix Tracklist";

const SEPARATOR_WIDTH: usize = 30;

/// Renders the tracklist text: header, separator, blank line, then one line per entry.
pub fn render_tracklist(entries: &[TimestampEntry]) -> String {
    let mut text = format!("{}\n{}\n\n", TRACKLIST_HEADER, "=".repeat(SEPARATOR_WIDTH));
    for entry in entries {
        text.push_str(&format!("{} - {} ({} BPM)\n", entry.timestamp, entry.title, entry.bpm));
    }
    text
}

/// Writes the rendered tracklist to `path` as UTF-8.
pub fn write_tracklist(entries: &[TimestampEntry], path: &Path) -> Result<()> {
    std::fs::write(path, render_tracklist(entries))
        .map_err(|e| MixError::export_failed(path.display(), e))
}
