//! Ethereum event-log subscription core.
//!
//! This crate builds and maintains a log subscription against an EVM node:
//!
//! - `models`: Filter queries, normalized log events and JSON-RPC envelopes
//! - `services`: Request rendering and response parsing, including the
//!   poll-cursor advancement logic for pull transports
//!
//! The network transport is an external collaborator: the subscription
//! services produce request bytes and consume raw response bytes, but never
//! perform I/O themselves. A collaborator drives one render/parse cycle per
//! poll (pull mode) or one render followed by streamed responses (push mode).

pub mod models;
pub mod services;
