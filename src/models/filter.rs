//! Log filter query data structures.

use alloy::primitives::{Address, B256, U256};

/// Block-number selector used in filter queries.
///
/// Either a concrete block number or the node-side `"latest"` tag. An absent
/// selector (`Option::None` at the query level) is rendered as block zero for
/// `fromBlock` and as `"latest"` for `toBlock`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNumber {
	/// The node's current head block
	Latest,
	/// A concrete block number
	Number(U256),
}

impl BlockNumber {
	/// Renders the selector as a JSON-RPC block argument
	/// (`"latest"` or a `0x`-prefixed hex quantity).
	pub fn to_block_arg(&self) -> String {
		match self {
			BlockNumber::Latest => "latest".to_string(),
			BlockNumber::Number(number) => format!("0x{:x}", number),
		}
	}
}

/// A log filter definition: which contract events to retrieve.
///
/// `block_hash` and the `from_block`/`to_block` range are mutually exclusive;
/// a query carrying both is rejected at render time rather than silently
/// resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
	/// Exact-block selector, mutually exclusive with the range fields
	pub block_hash: Option<B256>,
	/// Start of the block range (inclusive)
	pub from_block: Option<BlockNumber>,
	/// End of the block range (inclusive)
	pub to_block: Option<BlockNumber>,
	/// Contract addresses to match (empty = match any)
	pub addresses: Vec<Address>,
	/// Topic slots; each slot holds alternative topic values
	/// (empty slot = wildcard for that position)
	pub topics: Vec<Vec<B256>>,
}

/// Poll cursor for pull transports: the lowest not-yet-queried block number.
///
/// `None` is the unset sentinel, rendered as `"latest"` on the first poll.
/// Once set, the cursor only ever moves forward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockCursor(Option<U256>);

impl BlockCursor {
	/// Creates a new unset cursor.
	pub fn new() -> Self {
		Self(None)
	}

	/// Current cursor position, or `None` when unset.
	pub fn position(&self) -> Option<U256> {
		self.0
	}

	/// Renders the cursor as a JSON-RPC block argument.
	pub fn to_block_arg(&self) -> String {
		match self.0 {
			Some(number) => format!("0x{:x}", number),
			None => "latest".to_string(),
		}
	}

	/// Moves the cursor strictly past an observed block number.
	///
	/// The candidate position is `observed + 1`: logs are inclusive of their
	/// block, so the next poll must start after it. The cursor is updated only
	/// when unset or when the candidate is strictly greater than the current
	/// position, so a batch containing stale blocks can never roll it back.
	///
	/// # Returns
	/// * `bool` - Whether the cursor moved
	pub fn advance_past(&mut self, observed: U256) -> bool {
		let Some(candidate) = observed.checked_add(U256::from(1u64)) else {
			return false;
		};
		match self.0 {
			Some(current) if candidate <= current => false,
			_ => {
				self.0 = Some(candidate);
				true
			}
		}
	}
}

/// How the subscription reaches the node.
///
/// The poll cursor lives inside the `Pull` variant, so push subscriptions
/// cannot touch it by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportMode {
	/// Long-lived node-side subscription; the node streams matches
	Push,
	/// Repeated range queries driven by a poll cursor
	Pull(BlockCursor),
}

impl TransportMode {
	/// Creates a pull mode with an unset cursor.
	pub fn pull() -> Self {
		TransportMode::Pull(BlockCursor::new())
	}

	/// The poll cursor, when this is a pull transport.
	pub fn cursor(&self) -> Option<&BlockCursor> {
		match self {
			TransportMode::Pull(cursor) => Some(cursor),
			TransportMode::Push => None,
		}
	}
}
