use alloy::primitives::U256;
use proptest::prelude::*;
use serde_json::Value;

use eth_log_subscriber::{
	models::TransportMode,
	services::subscription::{FilterRequestBuilder, LogResponseParser},
};

use crate::properties::strategies::{
	address_list_strategy, batch_strategy, log_record, malformed_record_strategy,
	response_from_records, topic_list_strategy, valid_record_strategy,
};

fn cursor_position(builder: &FilterRequestBuilder) -> Option<U256> {
	builder.cursor().unwrap().position()
}

proptest! {
	/// The cursor observed across any sequence of parsed batches never
	/// decreases, regardless of out-of-order or duplicate block numbers.
	#[test]
	fn test_cursor_is_monotonic_across_batches(
		batches in prop::collection::vec(batch_strategy(), 1..10)
	) {
		let parser = LogResponseParser::new();
		let mut builder = FilterRequestBuilder::new(TransportMode::pull(), &[], &[]);
		let mut previous = cursor_position(&builder);

		for batch in batches {
			let records = batch
				.iter()
				.map(|number| log_record(&format!("0x{:x}", number)))
				.collect();
			let (_, ok) =
				parser.parse_response(&response_from_records(records), &mut builder);
			prop_assert!(ok);

			let current = cursor_position(&builder);
			match (previous, current) {
				(Some(before), Some(after)) => prop_assert!(after >= before),
				(Some(_), None) => prop_assert!(false, "cursor regressed to unset"),
				_ => {}
			}
			previous = current;
		}
	}

	/// After a batch the cursor sits strictly past the highest observed
	/// block, and every record of the batch is emitted.
	#[test]
	fn test_cursor_lands_past_highest_block(batch in batch_strategy()) {
		let parser = LogResponseParser::new();
		let mut builder = FilterRequestBuilder::new(TransportMode::pull(), &[], &[]);

		let records = batch
			.iter()
			.map(|number| log_record(&format!("0x{:x}", number)))
			.collect();
		let (events, ok) =
			parser.parse_response(&response_from_records(records), &mut builder);

		prop_assert!(ok);
		prop_assert_eq!(events.len(), batch.len());

		match batch.iter().max() {
			Some(&highest) => prop_assert_eq!(
				cursor_position(&builder),
				Some(U256::from(highest) + U256::from(1u64))
			),
			None => prop_assert_eq!(cursor_position(&builder), None),
		}
	}

	/// Addresses and topics survive a render/decode round trip through the
	/// request params, with all topics in a single alternatives slot.
	#[test]
	fn test_filter_round_trips_through_params(
		addresses in address_list_strategy(),
		topics in topic_list_strategy(),
	) {
		let builder =
			FilterRequestBuilder::new(TransportMode::Push, &addresses, &topics);
		let request: Value =
			serde_json::from_slice(&builder.render().unwrap()).unwrap();
		let filter = &request["params"][1];

		let decoded_addresses: Vec<String> =
			serde_json::from_value(filter["address"].clone()).unwrap();
		let decoded_topics: Vec<Vec<String>> =
			serde_json::from_value(filter["topics"].clone()).unwrap();

		prop_assert_eq!(decoded_addresses, addresses);
		prop_assert_eq!(decoded_topics.len(), 1);
		prop_assert_eq!(decoded_topics[0].clone(), topics);
	}

	/// Malformed records are skipped one by one: the batch still succeeds and
	/// emits exactly the well-formed records.
	#[test]
	fn test_malformed_records_never_fail_the_batch(
		valid in prop::collection::vec(valid_record_strategy(), 0..6),
		malformed in prop::collection::vec(malformed_record_strategy(), 0..6),
	) {
		let parser = LogResponseParser::new();
		let mut builder = FilterRequestBuilder::new(TransportMode::pull(), &[], &[]);

		let mut records = valid.clone();
		records.extend(malformed);
		let (events, ok) =
			parser.parse_response(&response_from_records(records), &mut builder);

		prop_assert!(ok);
		prop_assert_eq!(events.len(), valid.len());
	}
}
