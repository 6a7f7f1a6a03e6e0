//! JSON-RPC 2.0 envelope data structures.
//!
//! The envelope carries no semantics beyond correlating a request with its
//! response and surfacing a remote error; request/response pairing at the
//! transport level is the collaborator's responsibility, so every request
//! uses the fixed id [`REQUEST_ID`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version tag carried by every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Fixed request id; single-shot correlation is delegated to the transport.
pub const REQUEST_ID: u64 = 1;

/// An outbound JSON-RPC request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
	pub jsonrpc: String,
	pub id: u64,
	pub method: String,
	pub params: Value,
}

impl JsonRpcRequest {
	/// Wraps a method call in a versioned envelope with the fixed id.
	pub fn new(method: impl Into<String>, params: Value) -> Self {
		Self {
			jsonrpc: JSONRPC_VERSION.to_string(),
			id: REQUEST_ID,
			method: method.into(),
			params,
		}
	}
}

/// An inbound JSON-RPC response envelope.
///
/// Exactly one of `result` and `error` is populated by a conforming node;
/// both are kept optional so a malformed envelope still decodes and the
/// missing member is surfaced as a decode failure one step later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
	#[serde(default)]
	pub jsonrpc: Option<String>,
	#[serde(default)]
	pub id: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub result: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<Value>,
}
