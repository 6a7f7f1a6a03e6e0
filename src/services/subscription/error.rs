use std::error::Error;
use std::fmt;

use log::error;

/// Represents errors that can occur while rendering a subscription request
#[derive(Debug)]
pub enum SubscriptionError {
	/// The filter definition itself is invalid (e.g. conflicting selectors)
	ConfigError(String),
	/// Internal state could not be serialized into request bytes
	SerializationError(String),
}

impl SubscriptionError {
	fn format_message(&self) -> String {
		match self {
			SubscriptionError::ConfigError(msg) => format!("Configuration error: {}", msg),
			SubscriptionError::SerializationError(msg) => {
				format!("Serialization error: {}", msg)
			}
		}
	}

	pub fn config_error(msg: impl Into<String>) -> Self {
		let error = SubscriptionError::ConfigError(msg.into());
		error!("{}", error.format_message());
		error
	}

	pub fn serialization_error(msg: impl Into<String>) -> Self {
		let error = SubscriptionError::SerializationError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for SubscriptionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for SubscriptionError {}
