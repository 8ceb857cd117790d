use thiserror::Error;

/// Errors produced by the generation API.
///
/// Every operation validates its arguments before drawing anything from the
/// random source, so a returned error never leaves partial side effects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoremError {
	/// A required argument is missing or empty (ex. an empty slice to pick from).
	#[error("invalid argument `{name}`: {reason}")]
	InvalidArgument {
		name: &'static str,
		reason: String,
	},

	/// A numeric or temporal bound violates its invariant
	/// (count lower than 1, or `max < min`).
	#[error("argument `{name}` out of range: {reason}")]
	OutOfRange {
		name: &'static str,
		reason: String,
	},
}

impl LoremError {
	pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
		Self::InvalidArgument { name, reason: reason.into() }
	}

	pub(crate) fn out_of_range(name: &'static str, reason: impl Into<String>) -> Self {
		Self::OutOfRange { name, reason: reason.into() }
	}

	/// Name of the offending parameter.
	pub fn name(&self) -> &'static str {
		match self {
			Self::InvalidArgument { name, .. } | Self::OutOfRange { name, .. } => name,
		}
	}
}

pub type Result<T> = std::result::Result<T, LoremError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_out_of_range() {
		let err = LoremError::out_of_range("word_count", "min must be >= 1, got 0");
		assert_eq!(
			err.to_string(),
			"argument `word_count` out of range: min must be >= 1, got 0"
		);
	}

	#[test]
	fn test_display_invalid_argument() {
		let err = LoremError::invalid_argument("items", "must not be empty");
		assert_eq!(err.to_string(), "invalid argument `items`: must not be empty");
	}

	#[test]
	fn test_name() {
		assert_eq!(LoremError::out_of_range("digits", "0").name(), "digits");
		assert_eq!(LoremError::invalid_argument("items", "empty").name(), "items");
	}
}
