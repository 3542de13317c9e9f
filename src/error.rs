//! Error types for automix.
//!
//! Every failure the engine can report carries an [`ErrorCode`] so that the
//! command line and the JSON-RPC server can react to specific conditions.
//! Empty track pools are not errors and never show up here.

use std::fmt;

/// Error codes reported by the engine and its boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Mix duration is zero.
    InvalidDuration,

    /// Tempo range has min > max, or could not be parsed.
    /// Trigger: `--bpm 140-120`, `bpm_min` larger than `bpm_max`.
    InvalidTempoRange,

    /// An enumerated value (source kind, mixing style, output format) was not recognized.
    InvalidValue,

    /// Requested preset name does not exist.
    UnknownPreset,

    /// Export was requested before any mix was built in this session.
    NoMixBuilt,

    /// Writing an export artifact failed.
    /// Trigger: missing permissions, disk full, invalid path.
    ExportFailed,

    /// The local track library could not be read or parsed.
    CatalogLoadFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDuration => "INVALID_DURATION",
            ErrorCode::InvalidTempoRange => "INVALID_TEMPO_RANGE",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::UnknownPreset => "UNKNOWN_PRESET",
            ErrorCode::NoMixBuilt => "NO_MIX_BUILT",
            ErrorCode::ExportFailed => "EXPORT_FAILED",
            ErrorCode::CatalogLoadFailed => "CATALOG_LOAD_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDuration => "Mix duration must be at least one minute",
            ErrorCode::InvalidTempoRange => "Tempo range must be 'min-max' with min <= max",
            ErrorCode::InvalidValue => "Unrecognized configuration value",
            ErrorCode::UnknownPreset => "No preset with that name exists",
            ErrorCode::NoMixBuilt => "No mix has been created in this session",
            ErrorCode::ExportFailed => "Failed to write the export artifact",
            ErrorCode::CatalogLoadFailed => "Failed to load the local track library",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDuration => "Specify a positive duration in minutes (e.g., --duration 45)",
            ErrorCode::InvalidTempoRange => {
                "Specify the BPM range as 'min-max' or a single value (e.g., --bpm 120-130)"
            }
            ErrorCode::InvalidValue => {
                "Check the spelling of the source, style and output options (see --help)"
            }
            ErrorCode::UnknownPreset => "Use one of: workout, chill, party, focus",
            ErrorCode::NoMixBuilt => "Create a mix first, then export it",
            ErrorCode::ExportFailed => {
                "Check that the output directory exists and is writable, \
                 or pass an explicit filename"
            }
            ErrorCode::CatalogLoadFailed => {
                "Verify the library path and that it contains a JSON object with a 'tracks' array"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for mix operations.
#[derive(Debug)]
pub struct MixError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl MixError {
    /// Creates a new MixError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new MixError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_DURATION error.
    pub fn invalid_duration(minutes: u32) -> Self {
        Self::new(
            ErrorCode::InvalidDuration,
            format!("Invalid duration: {} minutes (must be > 0)", minutes),
        )
    }

    /// Creates an INVALID_TEMPO_RANGE error for an inverted range.
    pub fn inverted_tempo_range(min: u32, max: u32) -> Self {
        Self::new(
            ErrorCode::InvalidTempoRange,
            format!("Invalid BPM range: {}-{} (min must not exceed max)", min, max),
        )
    }

    /// Creates an INVALID_TEMPO_RANGE error for text that is not a range.
    pub fn malformed_tempo_range(text: &str) -> Self {
        Self::new(
            ErrorCode::InvalidTempoRange,
            format!("Invalid BPM range '{}'. Use format 'min-max' or single value", text),
        )
    }

    /// Creates an INVALID_VALUE error for an unrecognized enumerated value.
    pub fn invalid_value(field: &str, value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidValue,
            format!("Unrecognized {}: '{}'", field, value),
        )
    }

    /// Creates an UNKNOWN_PRESET error.
    pub fn unknown_preset(name: &str) -> Self {
        Self::new(ErrorCode::UnknownPreset, format!("Unknown preset: '{}'", name))
    }

    /// Creates a NO_MIX_BUILT error.
    pub fn no_mix_built() -> Self {
        Self::new(
            ErrorCode::NoMixBuilt,
            "No mix created yet. Call create_mix() first",
        )
    }

    /// Creates an EXPORT_FAILED error wrapping an I/O failure.
    pub fn export_failed(path: impl fmt::Display, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::ExportFailed,
            format!("Failed to write {}: {}", path, source),
            source,
        )
    }

    /// Creates a CATALOG_LOAD_FAILED error.
    pub fn catalog_load_failed(
        path: impl fmt::Display,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let message = format!("Failed to load library {}: {}", path, source);
        Self::with_source(ErrorCode::CatalogLoadFailed, message, source)
    }
}

impl fmt::Display for MixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for MixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using MixError.
pub type Result<T> = std::result::Result<T, MixError>;

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CODES: [ErrorCode; 7] = [
        ErrorCode::InvalidDuration,
        ErrorCode::InvalidTempoRange,
        ErrorCode::InvalidValue,
        ErrorCode::UnknownPreset,
        ErrorCode::NoMixBuilt,
        ErrorCode::ExportFailed,
        ErrorCode::CatalogLoadFailed,
    ];

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::InvalidTempoRange.as_str(), "INVALID_TEMPO_RANGE");
        assert_eq!(ErrorCode::NoMixBuilt.as_str(), "NO_MIX_BUILT");
        assert_eq!(ErrorCode::ExportFailed.as_str(), "EXPORT_FAILED");
    }

    #[test]
    fn every_code_has_description_and_hint() {
        for code in ALL_CODES {
            assert!(!code.description().is_empty(), "{code} lacks description");
            assert!(!code.recovery_hint().is_empty(), "{code} lacks hint");
        }
    }

    #[test]
    fn mix_error_display() {
        let err = MixError::inverted_tempo_range(140, 120);
        let text = err.to_string();
        assert!(text.contains("INVALID_TEMPO_RANGE"));
        assert!(text.contains("140-120"));
        assert!(text.contains("Recovery:"));
    }

    #[test]
    fn export_failure_keeps_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = MixError::export_failed("/nope/tracklist.txt", io);
        assert_eq!(err.code, ErrorCode::ExportFailed);
        assert!(err.source().is_some());
    }
}
