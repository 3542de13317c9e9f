//! JSON-RPC module for daemon communication.
//!
//! Provides the JSON-RPC 2.0 server implementation for:
//! - `generate_mix`: Build a mix and make it the session's current mix
//! - `export_mix`: Export the current mix
//! - `get_presets`: List the built-in presets
//! - `ping`: Health check
//! - `shutdown`: Graceful shutdown

pub mod methods;
pub mod server;
pub mod types;

pub use server::{run_server, serve, ServerState};
pub use types::{
    app_error_code, ExportMixParams, ExportMixResult, GenerateMixParams, GenerateMixResult,
    JsonRpcError, JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse, RequestId,
};
