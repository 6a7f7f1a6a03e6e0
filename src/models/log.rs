//! Normalized EVM log event data structures.

use alloy::primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// A single log record as returned by an EVM node.
///
/// Field layout mirrors the node's raw JSON shape. The record is created by
/// the response parser and handed to the collaborator as an opaque payload;
/// the core only ever interprets `blockNumber`, which is kept as the raw hex
/// quantity string so cursor advancement owns its parsing (and can skip
/// records carrying a malformed value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
	/// Address of the emitting contract
	#[serde(default)]
	pub address: Option<Address>,
	/// Indexed event topics
	#[serde(default)]
	pub topics: Vec<B256>,
	/// Unindexed event data
	#[serde(default)]
	pub data: Option<Bytes>,
	/// Hash of the containing block
	#[serde(rename = "blockHash", default)]
	pub block_hash: Option<B256>,
	/// Number of the containing block, as a raw hex quantity string
	#[serde(rename = "blockNumber", default)]
	pub block_number: Option<String>,
	/// Hash of the containing transaction
	#[serde(rename = "transactionHash", default)]
	pub transaction_hash: Option<B256>,
	/// Index of the transaction within the block
	#[serde(rename = "transactionIndex", default)]
	pub transaction_index: Option<String>,
	/// Index of the log within the block
	#[serde(rename = "logIndex", default)]
	pub log_index: Option<String>,
	/// Whether the log was removed by a chain reorganization
	#[serde(default)]
	pub removed: Option<bool>,
}

impl LogEvent {
	/// Parses the raw `blockNumber` field as a block number.
	///
	/// Returns `None` when the field is absent or not a valid hex quantity.
	pub fn block_number(&self) -> Option<U256> {
		let raw = self.block_number.as_deref()?;
		let digits = raw.strip_prefix("0x").unwrap_or(raw);
		if digits.is_empty() {
			return None;
		}
		U256::from_str_radix(digits, 16).ok()
	}
}
