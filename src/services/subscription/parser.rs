//! Log response parsing for subscription cycles.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
	models::{JsonRpcResponse, LogEvent, TransportMode},
	services::subscription::FilterRequestBuilder,
};

/// Decodes JSON-RPC responses into normalized log events.
///
/// For pull transports the parser also advances the builder's poll cursor
/// from the highest block number observed in a batch; push transports carry
/// their own no-duplicate guarantee, so their records pass through with no
/// cursor interaction.
#[derive(Debug, Clone, Default)]
pub struct LogResponseParser;

impl LogResponseParser {
	/// Creates a new parser.
	pub fn new() -> Self {
		Self
	}

	/// Parses raw response bytes from one subscription cycle.
	///
	/// Two independent fallible decode steps gate the whole batch: the outer
	/// JSON-RPC envelope and its `result` member as an array of log records.
	/// Failure of either yields `(vec![], false)` with no partial events. A
	/// remote `error` envelope carries no `result`, so it fails the second
	/// step. Individual malformed records are skipped without failing the
	/// batch, and an empty batch is not an error.
	///
	/// # Arguments
	/// * `data` - Raw response bytes from the transport
	/// * `builder` - The subscription's builder, for cursor advancement
	///
	/// # Returns
	/// * `(Vec<LogEvent>, bool)` - Normalized events and a success flag
	#[instrument(skip_all)]
	pub fn parse_response(
		&self,
		data: &[u8],
		builder: &mut FilterRequestBuilder,
	) -> (Vec<LogEvent>, bool) {
		let envelope: JsonRpcResponse = match serde_json::from_slice(data) {
			Ok(envelope) => envelope,
			Err(e) => {
				debug!(error = %e, "Failed to decode response envelope");
				return (Vec::new(), false);
			}
		};

		let records = match envelope.result {
			Some(Value::Array(records)) => records,
			_ => {
				debug!("Response result is missing or not an array");
				return (Vec::new(), false);
			}
		};

		let is_pull = matches!(builder.mode(), TransportMode::Pull(_));
		let mut events = Vec::with_capacity(records.len());

		for record in records {
			let event: LogEvent = match serde_json::from_value(record) {
				Ok(event) => event,
				Err(e) => {
					debug!(error = %e, "Skipping undecodable log record");
					continue;
				}
			};

			if is_pull {
				// The cursor only ever sees records with a parsable block
				// number; everything else is skipped outright.
				match event.block_number() {
					Some(observed) => {
						builder.advance_cursor(observed);
						events.push(event);
					}
					None => {
						debug!("Skipping log record with unparsable block number");
					}
				}
			} else {
				events.push(event);
			}
		}

		(events, true)
	}
}
