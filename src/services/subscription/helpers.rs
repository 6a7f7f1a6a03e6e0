//! Helper functions for normalizing collaborator-supplied filter input.
//!
//! Address and topic strings arrive as arbitrary-length hex, with or without
//! a `0x` prefix. Normalization is lenient and never fails: input is decoded
//! as hex where possible, truncated to the trailing bytes when too long and
//! left-padded with zeroes when too short, yielding a canonical fixed-width
//! value.

use alloy::primitives::{Address, B256};

/// Decodes a hex string leniently: optional `0x`/`0X` prefix, odd-length
/// input padded with a leading nibble, undecodable input treated as empty.
fn lenient_hex_bytes(input: &str) -> Vec<u8> {
	let digits = input
		.strip_prefix("0x")
		.or_else(|| input.strip_prefix("0X"))
		.unwrap_or(input);

	let padded = if digits.len() % 2 == 1 {
		format!("0{}", digits)
	} else {
		digits.to_string()
	};

	hex::decode(padded).unwrap_or_default()
}

/// Fits a byte slice into `N` bytes: keeps the trailing `N` bytes when the
/// input is longer, left-pads with zeroes when shorter.
fn to_fixed_bytes<const N: usize>(bytes: &[u8]) -> [u8; N] {
	let mut out = [0u8; N];
	let tail = if bytes.len() > N {
		&bytes[bytes.len() - N..]
	} else {
		bytes
	};
	out[N - tail.len()..].copy_from_slice(tail);
	out
}

/// Normalizes an address string to a canonical 20-byte address.
pub fn normalize_address(input: &str) -> Address {
	Address::from(to_fixed_bytes::<20>(&lenient_hex_bytes(input)))
}

/// Normalizes a topic string to a canonical 32-byte hash.
pub fn normalize_topic(input: &str) -> B256 {
	B256::from(to_fixed_bytes::<32>(&lenient_hex_bytes(input)))
}
