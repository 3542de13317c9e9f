//! Wire types for the JSON-RPC mixing protocol.
//!
//! Protocol failures use the standard codes. Mixing failures use -32010 and up,
//! with the `ErrorCode` string in `data.error_code`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, MixError, Result};
use crate::export::ExportOutcome;
use crate::presets::Preset;
use crate::prompt::parse_prompt;
use crate::types::{Mix, MixConfig, MixingStyle, OutputFormat, SourceKind, TempoRange};

/// JSON-RPC version constant.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request identifier, echoed back in the response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RequestId {
    Integer(i64),
    String(String),
}

/// An incoming call.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub id: RequestId,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// A successful reply.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse<T: Serialize> {
    pub jsonrpc: &'static str,
    pub id: RequestId,
    pub result: T,
}

impl<T: Serialize> JsonRpcResponse<T> {
    pub fn new(id: RequestId, result: T) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result,
        }
    }
}

/// A failed reply; `id` is null when the request could not be parsed.
#[derive(Debug, Serialize)]
pub struct JsonRpcErrorResponse {
    pub jsonrpc: &'static str,
    pub id: Option<RequestId>,
    pub error: JsonRpcError,
}

impl JsonRpcErrorResponse {
    pub fn new(id: Option<RequestId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonRpcErrorData>,
}

/// Mixing-error detail: the string error code and the specific message.
#[derive(Debug, Serialize)]
pub struct JsonRpcErrorData {
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

impl JsonRpcError {
    fn protocol(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::protocol(PARSE_ERROR, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::protocol(INVALID_REQUEST, message)
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::protocol(METHOD_NOT_FOUND, format!("Method not found: {}", method))
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::protocol(INVALID_PARAMS, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::protocol(INTERNAL_ERROR, message)
    }
}

/// Application error code for a mixing error (-32010 and up).
pub fn app_error_code(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::InvalidDuration => -32010,
        ErrorCode::InvalidTempoRange => -32011,
        ErrorCode::InvalidValue => -32012,
        ErrorCode::UnknownPreset => -32013,
        ErrorCode::NoMixBuilt => -32014,
        ErrorCode::ExportFailed => -32015,
        ErrorCode::CatalogLoadFailed => -32016,
    }
}

impl From<MixError> for JsonRpcError {
    fn from(err: MixError) -> Self {
        Self {
            code: app_error_code(err.code),
            message: err.code.description().to_string(),
            data: Some(JsonRpcErrorData {
                error_code: err.code.as_str().to_string(),
                details: Some(err.message),
            }),
        }
    }
}

// ============================================================================
// generate_mix
// ============================================================================

/// Parameters for `generate_mix`.
///
/// Every field is optional. The base configuration comes from `prompt`, then
/// `preset`, then the built-in defaults; the remaining fields override it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateMixParams {
    pub prompt: Option<String>,
    pub preset: Option<String>,
    pub duration: Option<u32>,
    pub mood_occasion: Option<String>,
    pub source_type: Option<String>,
    pub source_value: Option<String>,
    pub mixing_style: Option<String>,
    pub energy_flow: Option<String>,
    pub bpm_min: Option<u32>,
    pub bpm_max: Option<u32>,
    pub avoid_elements: Option<Vec<String>>,
    pub include_elements: Option<Vec<String>>,
    pub dynamic_adaptation: Option<bool>,
    pub output_format: Option<String>,
    pub output_platform: Option<String>,
    /// Seed for generative sources; null uses the server's seed or a random one.
    pub seed: Option<u64>,
}

impl GenerateMixParams {
    /// Resolves the parameters into a validated configuration.
    pub fn into_config(self) -> Result<MixConfig> {
        let mut config = if let Some(ref prompt) = self.prompt {
            parse_prompt(prompt)
        } else if let Some(ref preset) = self.preset {
            Preset::parse(preset)?.config()
        } else {
            MixConfig::default()
        };

        if let Some(duration) = self.duration {
            config.duration_minutes = duration;
        }
        if let Some(mood) = self.mood_occasion {
            config.mood = mood;
        }

        if let Some(ref text) = self.source_type {
            let kind = SourceKind::parse(text)
                .ok_or_else(|| MixError::invalid_value("source_type", text))?;
            if kind != config.source_kind && self.source_value.is_none() {
                config.source_value = kind.default_descriptor().to_string();
            }
            config.source_kind = kind;
        }
        if let Some(value) = self.source_value {
            config.source_value = value;
        }

        if let Some(ref text) = self.mixing_style {
            config.mixing_style = MixingStyle::parse(text)
                .ok_or_else(|| MixError::invalid_value("mixing_style", text))?;
        }
        if let Some(energy) = self.energy_flow {
            config.energy_flow = energy;
        }
        if self.bpm_min.is_some() || self.bpm_max.is_some() {
            config.tempo_range = TempoRange::new(
                self.bpm_min.unwrap_or(config.tempo_range.min),
                self.bpm_max.unwrap_or(config.tempo_range.max),
            )?;
        }
        if let Some(avoid) = self.avoid_elements {
            config.avoid = avoid;
        }
        if let Some(include) = self.include_elements {
            config.include = include;
        }
        if let Some(dynamic) = self.dynamic_adaptation {
            config.dynamic_adaptation = dynamic;
        }
        if let Some(ref text) = self.output_format {
            config.output_format = OutputFormat::parse(text)
                .ok_or_else(|| MixError::invalid_value("output_format", text))?;
        }
        if self.output_platform.is_some() {
            config.output_platform = self.output_platform;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Response for `generate_mix`.
#[derive(Debug, Serialize)]
pub struct GenerateMixResult {
    pub track_count: usize,
    pub mix: Mix,
}

// ============================================================================
// export_mix
// ============================================================================

/// Parameters for `export_mix`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExportMixParams {
    /// Output format; defaults to the current mix's configured format.
    pub format: Option<String>,
    /// Explicit artifact path; defaults to a timestamped name.
    pub filename: Option<PathBuf>,
}

impl ExportMixParams {
    /// Parses the requested format, if any.
    pub fn format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|text| OutputFormat::parse(text).ok_or_else(|| MixError::invalid_value("format", text)))
            .transpose()
    }
}

/// Response for `export_mix`.
#[derive(Debug, Serialize)]
pub struct ExportMixResult {
    pub format: OutputFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub status: String,
}

impl ExportMixResult {
    pub fn new(format: OutputFormat, outcome: &ExportOutcome) -> Self {
        let status = match outcome {
            ExportOutcome::RealTime(status) => status.clone(),
            ExportOutcome::Tracklist(_) => "Tracklist written".to_string(),
            ExportOutcome::AudioFile(_) => "Audio file named".to_string(),
        };
        Self {
            format,
            path: outcome.path().map(|p| p.to_string_lossy().to_string()),
            status,
        }
    }
}
