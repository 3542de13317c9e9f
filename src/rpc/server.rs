//! Line-delimited JSON-RPC 2.0 server.
//!
//! One request per line in, one response per line out. `run_server` binds the
//! loop to stdin/stdout; `serve` accepts any reader and writer.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::engine::MixSession;
use crate::error::Result;
use crate::sources::SourceRouter;

use super::methods::handle_request;
use super::types::{
    JsonRpcError, JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION,
};

/// Everything a request handler may touch.
pub struct ServerState {
    /// The mixing session; every `generate_mix` replaces its current mix.
    pub session: MixSession<SourceRouter>,
    /// Runtime configuration.
    pub config: AppConfig,
    stop_requested: bool,
}

impl ServerState {
    /// Creates server state, loading the configured track library.
    pub fn new(config: AppConfig) -> Result<Self> {
        let router = SourceRouter::load(config.catalog_path.as_deref())?;
        Ok(Self::with_source(config, router))
    }

    /// Creates server state around an existing source router.
    pub fn with_source(config: AppConfig, router: SourceRouter) -> Self {
        Self {
            session: MixSession::new(router, config.effective_output_dir()),
            config,
            stop_requested: false,
        }
    }

    /// Asks the serve loop to stop after the current response.
    pub fn shutdown(&mut self) {
        self.stop_requested = true;
    }

    pub fn is_shutdown(&self) -> bool {
        self.stop_requested
    }
}

/// Serves requests from stdin until EOF or `shutdown`.
pub fn run_server(state: ServerState) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(stdin.lock(), stdout.lock(), state)
}

/// Serves requests from `reader`, writing responses to `writer`.
///
/// Ends at EOF, after `shutdown`, or when either stream fails.
pub fn serve<R: BufRead, W: Write>(reader: R, mut writer: W, mut state: ServerState) -> Result<()> {
    info!("JSON-RPC server started, waiting for requests");

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "stopping on unreadable input");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = process_request(&line, &mut state);
        if let Err(e) = writeln!(writer, "{}", response).and_then(|_| writer.flush()) {
            warn!(error = %e, "stopping on unwritable output");
            break;
        }

        if state.is_shutdown() {
            info!("shutdown requested");
            break;
        }
    }

    info!("JSON-RPC server stopped");
    Ok(())
}

/// Handles one request line and returns the encoded response.
pub(crate) fn process_request(line: &str, state: &mut ServerState) -> String {
    let request: JsonRpcRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            let error = JsonRpcError::parse_error(format!("Invalid JSON: {}", e));
            return encode(&JsonRpcErrorResponse::new(None, error));
        }
    };

    if request.jsonrpc != JSONRPC_VERSION {
        let error = JsonRpcError::invalid_request(format!(
            "Unsupported JSON-RPC version '{}' (expected {})",
            request.jsonrpc, JSONRPC_VERSION
        ));
        return encode(&JsonRpcErrorResponse::new(Some(request.id), error));
    }

    debug!(method = %request.method, "dispatching");
    match handle_request(&request.method, request.params, state) {
        Ok(result) => encode(&JsonRpcResponse::new(request.id, result)),
        Err(error) => {
            debug!(method = %request.method, code = error.code, "request failed");
            encode(&JsonRpcErrorResponse::new(Some(request.id), error))
        }
    }
}

/// Sent when a response cannot be serialized, so the client still gets a reply.
const ENCODE_FAILURE_FRAME: &str =
    r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32603,"message":"Failed to encode response"}}"#;

fn encode<T: Serialize>(message: &T) -> String {
    serde_json::to_string(message).unwrap_or_else(|e| {
        warn!(error = %e, "failed to encode response");
        ENCODE_FAILURE_FRAME.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state(dir: &std::path::Path) -> ServerState {
        let config = AppConfig {
            output_dir: Some(dir.to_path_buf()),
            catalog_path: None,
            seed: Some(11),
        };
        ServerState::new(config).unwrap()
    }

    fn call(state: &mut ServerState, request: serde_json::Value) -> serde_json::Value {
        serde_json::from_str(&process_request(&request.to_string(), state)).unwrap()
    }

    #[test]
    fn fresh_state() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        assert!(state.session.current_mix().is_none());
        assert_eq!(state.session.output_dir(), dir.path());
        assert!(!state.is_shutdown());
    }

    #[test]
    fn missing_catalog_fails_startup() {
        let config = AppConfig {
            catalog_path: Some("/nonexistent/library.json".into()),
            ..AppConfig::default()
        };
        assert!(ServerState::new(config).is_err());
    }

    #[test]
    fn malformed_requests() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path());

        assert!(process_request("not json", &mut state).contains("-32700"));

        let response = call(&mut state, serde_json::json!({"jsonrpc": "1.0", "method": "ping", "id": 1}));
        assert_eq!(response["error"]["code"], -32600);
        assert_eq!(response["id"], 1);

        let response = call(&mut state, serde_json::json!({"jsonrpc": "2.0", "method": "unknown", "id": "x"}));
        assert_eq!(response["error"]["code"], -32601);
        assert_eq!(response["id"], "x");
    }

    #[test]
    fn generate_then_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path());

        let response = call(&mut state, serde_json::json!({"jsonrpc": "2.0", "method": "export_mix", "id": 1}));
        assert_eq!(response["error"]["data"]["error_code"], "NO_MIX_BUILT");

        let response = call(
            &mut state,
            serde_json::json!({
                "jsonrpc": "2.0",
                "method": "generate_mix",
                "id": 2,
                "params": {"duration": 20, "source_type": "ai_generated", "mixing_style": "crossfaded"}
            }),
        );
        assert_eq!(response["result"]["track_count"], 5);
        assert_eq!(response["result"]["mix"]["seed"], 11);

        let response = call(
            &mut state,
            serde_json::json!({"jsonrpc": "2.0", "method": "export_mix", "id": 3, "params": {"format": "tracklist"}}),
        );
        let path = response["result"]["path"].as_str().unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with(crate::export::TRACKLIST_HEADER));
        assert_eq!(text.lines().count(), 3 + 5);
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refused"))
        }
    }

    #[test]
    fn encode_failure_yields_internal_error() {
        let frame: serde_json::Value = serde_json::from_str(&encode(&Unencodable)).unwrap();
        assert_eq!(frame["jsonrpc"], "2.0");
        assert!(frame["id"].is_null());
        assert_eq!(frame["error"]["code"], crate::rpc::types::INTERNAL_ERROR);
    }

    #[test]
    fn serve_stops_on_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let input = concat!(
            r#"{"jsonrpc":"2.0","method":"ping","id":1}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","method":"shutdown","id":2}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"ping","id":3}"#,
            "\n",
        );
        let mut output = Vec::new();
        serve(input.as_bytes(), &mut output, test_state(dir.path())).unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#""status":"ok""#));
        assert!(lines[1].contains("shutting_down"));
    }
}
