//! JSON-RPC method handlers.

use tracing::info;

use crate::error::MixError;
use crate::presets::list_presets;

use super::server::ServerState;
use super::types::{
    ExportMixParams, ExportMixResult, GenerateMixParams, GenerateMixResult, JsonRpcError,
};

/// Handles a JSON-RPC method call.
pub fn handle_request(
    method: &str,
    params: serde_json::Value,
    state: &mut ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    match method {
        "generate_mix" => handle_generate_mix(params, state),
        "export_mix" => handle_export_mix(params, state),
        "get_presets" => handle_get_presets(),
        "ping" => handle_ping(state),
        "shutdown" => handle_shutdown(state),
        _ => Err(JsonRpcError::method_not_found(method)),
    }
}

/// Handles the ping method for health checks.
fn handle_ping(state: &ServerState) -> Result<serde_json::Value, JsonRpcError> {
    Ok(serde_json::json!({
        "status": "ok",
        "has_mix": state.session.current_mix().is_some(),
    }))
}

/// Handles the shutdown method.
fn handle_shutdown(state: &mut ServerState) -> Result<serde_json::Value, JsonRpcError> {
    state.shutdown();
    Ok(serde_json::json!({ "status": "shutting_down" }))
}

/// Handles the get_presets method.
fn handle_get_presets() -> Result<serde_json::Value, JsonRpcError> {
    to_value(list_presets())
}

/// Handles the generate_mix method.
fn handle_generate_mix(
    params: serde_json::Value,
    state: &mut ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: GenerateMixParams = parse_params(params)?;
    let seed = params.seed.or(state.config.seed);
    let config = params.into_config()?;

    let mix = state.session.create_mix(&config, seed)?;
    to_value(GenerateMixResult {
        track_count: mix.track_count(),
        mix,
    })
}

/// Handles the export_mix method.
///
/// Without an explicit format, the current mix's configured format is used.
fn handle_export_mix(
    params: serde_json::Value,
    state: &mut ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: ExportMixParams = parse_params(params)?;
    let requested = params.format()?;

    let current = state.session.current_mix().ok_or_else(MixError::no_mix_built)?;
    let format = requested.unwrap_or(current.config.output_format);

    let outcome = state.session.export(format, params.filename.as_deref())?;
    info!(format = %format, outcome = %outcome, "mix exported");
    to_value(ExportMixResult::new(format, &outcome))
}

/// Deserializes method params; a missing params member means all defaults.
fn parse_params<T>(params: serde_json::Value) -> Result<T, JsonRpcError>
where
    T: serde::de::DeserializeOwned + Default,
{
    if params.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(params)
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {}", e)))
}

fn to_value<T: serde::Serialize>(value: T) -> Result<serde_json::Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
