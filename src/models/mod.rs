//! Domain models and data structures for log subscriptions.
//!
//! This module contains the core data structures used throughout the crate:
//!
//! - `filter`: Log filter queries, block-number selectors and transport modes
//! - `log`: Normalized log events as returned by an EVM node
//! - `rpc`: JSON-RPC 2.0 request and response envelopes

mod filter;
mod log;
mod rpc;

// Re-export filter types
pub use filter::{BlockCursor, BlockNumber, FilterQuery, TransportMode};

// Re-export log types
pub use log::LogEvent;

// Re-export rpc types
pub use rpc::{JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION, REQUEST_ID};
