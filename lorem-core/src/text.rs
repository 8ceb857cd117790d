/// Capitalises the first character of `s`.
///
/// - Empty input returns an empty string
/// - Unicode aware: a character may expand to several when uppercased
pub(crate) fn uppercase_first(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Ordered list of literal substring replacements.
///
/// Each rule is applied once, over the whole string, in declaration order.
/// The order matters: a later rule sees the output of the earlier ones.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cleanup {
	rules: &'static [(&'static str, &'static str)],
}

/// Terminal punctuation fix applied to every sentence.
///
/// 1. `",."` → `"."` (comma right before the final period)
/// 2. `".."` → `"."` (doubled period)
pub(crate) const SENTENCE_CLEANUP: Cleanup = Cleanup::new(&[(",.", "."), ("..", ".")]);

impl Cleanup {
	pub(crate) const fn new(rules: &'static [(&'static str, &'static str)]) -> Self {
		Self { rules }
	}

	/// Applies every rule in order and returns the cleaned string.
	pub(crate) fn apply(&self, input: String) -> String {
		self.rules.iter().fold(input, |acc, &(pattern, replacement)| {
			if acc.contains(pattern) {
				acc.replace(pattern, replacement)
			} else {
				acc
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn uppercase_first_letter() {
		assert_eq!(uppercase_first("lorem ipsum"), "Lorem ipsum");
		assert_eq!(uppercase_first(""), "");
		assert_eq!(uppercase_first("ß"), "SS");
	}

	#[test]
	fn sentence_cleanup_removes_comma_before_period() {
		assert_eq!(SENTENCE_CLEANUP.apply("Lorem ipsum,.".to_owned()), "Lorem ipsum.");
	}

	#[test]
	fn sentence_cleanup_collapses_double_period() {
		assert_eq!(SENTENCE_CLEANUP.apply("Lorem ipsum..".to_owned()), "Lorem ipsum.");
	}

	#[test]
	fn sentence_cleanup_order() {
		// Comma fix first: ",.." becomes ".." then "."
		assert_eq!(SENTENCE_CLEANUP.apply("Dolor,..".to_owned()), "Dolor.");
		// A single replace pass, not a collapse loop
		assert_eq!(SENTENCE_CLEANUP.apply("Dolor....".to_owned()), "Dolor..");
	}
}
