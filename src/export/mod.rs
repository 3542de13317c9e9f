//! Export of finished mixes.
//!
//! Supports:
//! - `tracklist`: a UTF-8 text file with one `MM:SS - Title (BPM BPM)` line per track
//! - `single_file`: names the placeholder audio artifact (no audio is rendered)
//! - `real_time`: acknowledges a live playback request

mod tracklist;

pub use tracklist::{render_tracklist, write_tracklist, TRACKLIST_HEADER};

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::error::{MixError, Result};
use crate::types::{Mix, OutputFormat};

/// Status returned for real-time exports.
pub const REAL_TIME_STATUS: &str = "Real-time playback configured";

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Tracklist written to this path.
    Tracklist(PathBuf),
    /// Name reserved for the mixed audio file.
    AudioFile(PathBuf),
    /// Live playback acknowledgement.
    RealTime(String),
}

impl ExportOutcome {
    /// Returns the artifact path for file-based outcomes.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ExportOutcome::Tracklist(path) | ExportOutcome::AudioFile(path) => Some(path),
            ExportOutcome::RealTime(_) => None,
        }
    }
}

impl fmt::Display for ExportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportOutcome::Tracklist(path) | ExportOutcome::AudioFile(path) => {
                write!(f, "{}", path.display())
            }
            ExportOutcome::RealTime(status) => write!(f, "{}", status),
        }
    }
}

/// Exports `mix` in `format`.
///
/// An explicit `filename` is used verbatim. Otherwise a timestamped name is
/// placed in `output_dir`, which is created for file writes if missing.
pub fn export_mix(
    mix: &Mix,
    format: OutputFormat,
    filename: Option<&Path>,
    output_dir: &Path,
) -> Result<ExportOutcome> {
    match format {
        OutputFormat::Tracklist => {
            let path = match filename {
                Some(path) => path.to_path_buf(),
                None => {
                    std::fs::create_dir_all(output_dir)
                        .map_err(|e| MixError::export_failed(output_dir.display(), e))?;
                    output_dir.join(default_filename("tracklist", "txt"))
                }
            };
            write_tracklist(&mix.timestamps, &path)?;
            info!(path = %path.display(), tracks = mix.timestamps.len(), "tracklist exported");
            Ok(ExportOutcome::Tracklist(path))
        }
        OutputFormat::SingleFile => {
            let path = filename
                .map(Path::to_path_buf)
                .unwrap_or_else(|| output_dir.join(default_filename("auto_mix", "mp3")));
            info!(path = %path.display(), "exporting mix");
            Ok(ExportOutcome::AudioFile(path))
        }
        OutputFormat::RealTime => {
            info!("setting up real-time playback");
            Ok(ExportOutcome::RealTime(REAL_TIME_STATUS.to_string()))
        }
    }
}

/// `{prefix}_YYYYmmdd_HHMMSS.{extension}` in local time.
fn default_filename(prefix: &str, extension: &str) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        Local::now().format("%Y%m%d_%H%M%S"),
        extension
    )
}
