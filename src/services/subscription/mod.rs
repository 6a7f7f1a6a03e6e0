//! Log-subscription request building and response parsing.
//!
//! Implements the two halves of one subscription cycle:
//! - Request rendering for push (`eth_subscribe`) and pull (`eth_getLogs`)
//!   transports
//! - Response parsing into normalized log events, with poll-cursor
//!   advancement for pull transports
//! - Chain-specific helper functions for address and topic normalization

mod builder;
mod error;
mod parser;

pub mod helpers;

pub use builder::FilterRequestBuilder;
pub use error::SubscriptionError;
pub use parser::LogResponseParser;
