//! Filter request construction for log subscriptions.

use alloy::primitives::U256;
use serde_json::{json, Map, Value};

use crate::{
	models::{BlockCursor, BlockNumber, FilterQuery, JsonRpcRequest, TransportMode},
	services::subscription::{
		helpers::{normalize_address, normalize_topic},
		SubscriptionError,
	},
};

/// Renders a log filter definition into JSON-RPC request bytes.
///
/// Owns the filter query and, for pull transports, the poll cursor, for the
/// lifetime of one subscription. Render and parse cycles must be serialized
/// by the caller; the builder provides no internal locking.
#[derive(Debug, Clone)]
pub struct FilterRequestBuilder {
	/// Active transport mode, carrying the poll cursor in pull mode
	mode: TransportMode,
	/// The filter definition rendered into each request
	query: FilterQuery,
}

impl FilterRequestBuilder {
	/// Creates a builder from collaborator-supplied filter input.
	///
	/// Address strings are normalized to canonical 20-byte addresses and
	/// non-empty topic strings to canonical 32-byte hashes. Empty topic
	/// strings are skipped: they mean "no topic configured", not a wildcard
	/// slot. All normalized topics collapse into a single alternatives slot
	/// at position 0; multi-position topic filters are not representable
	/// from this input shape.
	///
	/// # Arguments
	/// * `mode` - Push or pull transport mode
	/// * `addresses` - Contract address strings to match
	/// * `topics` - Topic strings, merged into one alternatives slot
	pub fn new(mode: TransportMode, addresses: &[String], topics: &[String]) -> Self {
		let addresses = addresses
			.iter()
			.map(|address| normalize_address(address))
			.collect();

		let slot: Vec<_> = topics
			.iter()
			.filter(|topic| !topic.is_empty())
			.map(|topic| normalize_topic(topic))
			.collect();

		Self::from_query(
			mode,
			FilterQuery {
				addresses,
				topics: vec![slot],
				..Default::default()
			},
		)
	}

	/// Creates a builder from an already-normalized filter query.
	///
	/// The builder takes exclusive ownership of the query, including the
	/// mutable cursor state, for the lifetime of the subscription.
	pub fn from_query(mode: TransportMode, query: FilterQuery) -> Self {
		Self { mode, query }
	}

	/// The active transport mode.
	pub fn mode(&self) -> &TransportMode {
		&self.mode
	}

	/// The owned filter definition.
	pub fn query(&self) -> &FilterQuery {
		&self.query
	}

	/// The poll cursor, when this subscription uses a pull transport.
	pub fn cursor(&self) -> Option<&BlockCursor> {
		self.mode.cursor()
	}

	/// Moves the pull cursor strictly past an observed block number.
	///
	/// No-op for push transports, which never track a cursor.
	///
	/// # Returns
	/// * `bool` - Whether the cursor moved
	pub(crate) fn advance_cursor(&mut self, observed: U256) -> bool {
		match &mut self.mode {
			TransportMode::Pull(cursor) => cursor.advance_past(observed),
			TransportMode::Push => false,
		}
	}

	/// Renders the filter into JSON-RPC request bytes for the active mode.
	///
	/// Push mode wraps the filter in `eth_subscribe` with params
	/// `["logs", <filter>]`; pull mode uses `eth_getLogs` with params
	/// `[<filter>]`, taking `fromBlock` from the poll cursor (`"latest"`
	/// while the cursor is unset, i.e. for the very first poll).
	///
	/// # Returns
	/// * `Result<Vec<u8>, SubscriptionError>` - Encoded request, or a
	///   configuration/serialization error with no bytes produced
	pub fn render(&self) -> Result<Vec<u8>, SubscriptionError> {
		let filter = self.filter_arg()?;

		let request = match &self.mode {
			TransportMode::Push => {
				JsonRpcRequest::new("eth_subscribe", json!(["logs", filter]))
			}
			TransportMode::Pull(_) => JsonRpcRequest::new("eth_getLogs", json!([filter])),
		};

		serde_json::to_vec(&request).map_err(|e| {
			SubscriptionError::serialization_error(format!(
				"Failed to encode filter request: {}",
				e
			))
		})
	}

	/// Builds the filter object carried in the request params.
	///
	/// `blockHash` and the block-range fields are mutually exclusive; a query
	/// carrying both is a caller configuration error, surfaced rather than
	/// auto-resolved. In pull mode the cursor always supplies `fromBlock`, so
	/// a configured `blockHash` always conflicts.
	fn filter_arg(&self) -> Result<Value, SubscriptionError> {
		let mut filter = Map::new();
		filter.insert("address".to_string(), json!(self.query.addresses));
		filter.insert("topics".to_string(), json!(self.query.topics));

		match (&self.query.block_hash, &self.mode) {
			(Some(_), TransportMode::Pull(_)) => {
				return Err(SubscriptionError::config_error(
					"Cannot specify both blockHash and a block range",
				));
			}
			(Some(block_hash), TransportMode::Push) => {
				if self.query.from_block.is_some() || self.query.to_block.is_some() {
					return Err(SubscriptionError::config_error(
						"Cannot specify both blockHash and a block range",
					));
				}
				filter.insert("blockHash".to_string(), json!(block_hash));
			}
			(None, TransportMode::Pull(cursor)) => {
				filter.insert("fromBlock".to_string(), json!(cursor.to_block_arg()));
				filter.insert("toBlock".to_string(), json!(self.to_block_arg()));
			}
			(None, TransportMode::Push) => {
				let from_block = self
					.query
					.from_block
					.as_ref()
					.map_or_else(|| "0x0".to_string(), BlockNumber::to_block_arg);
				filter.insert("fromBlock".to_string(), json!(from_block));
				filter.insert("toBlock".to_string(), json!(self.to_block_arg()));
			}
		}

		Ok(Value::Object(filter))
	}

	fn to_block_arg(&self) -> String {
		self.query
			.to_block
			.as_ref()
			.map_or_else(|| "latest".to_string(), BlockNumber::to_block_arg)
	}
}
