use std::fmt::Display;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{LoremError, Result};

/// Inclusive bounds `min..=max`.
///
/// Used for word, sentence and paragraph counts, and for numeric
/// and temporal ranges.
///
/// A single value converts into the degenerate bounds `value..=value`,
/// so `generator.sentence(5)` and `generator.sentence(5..=5)` are the same call.
///
/// # Invariants
/// - Checked lazily by the operation that consumes the bounds
///   (`check_count` or `check_order`), never at construction
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds<T> {
	pub min: T,
	pub max: T,
}

impl<T: Copy> Bounds<T> {
	/// Creates bounds from an explicit pair.
	pub fn new(min: T, max: T) -> Self {
		Self { min, max }
	}

	/// Creates degenerate bounds where `min == max`.
	pub fn exact(value: T) -> Self {
		Self { min: value, max: value }
	}
}

impl<T: PartialOrd + Display> Bounds<T> {
	/// Checks that `max >= min`.
	///
	/// # Errors
	/// Returns `OutOfRange` naming `name` if `max < min`.
	pub fn check_order(&self, name: &'static str) -> Result<()> {
		if self.max < self.min {
			return Err(LoremError::out_of_range(
				name,
				format!("max ({}) must be >= min ({})", self.max, self.min),
			));
		}
		Ok(())
	}
}

impl Bounds<u32> {
	/// Checks bounds used as a count of words, sentences or paragraphs.
	///
	/// # Errors
	/// Returns `OutOfRange` naming `name` if:
	/// - `min < 1`
	/// - `max < 1`
	/// - `max < min`
	pub fn check_count(&self, name: &'static str) -> Result<()> {
		if self.min < 1 {
			return Err(LoremError::out_of_range(
				name,
				format!("min must be >= 1, got {}", self.min),
			));
		}
		if self.max < 1 {
			return Err(LoremError::out_of_range(
				name,
				format!("max must be >= 1, got {}", self.max),
			));
		}
		self.check_order(name)
	}
}

impl<T: Copy> From<T> for Bounds<T> {
	fn from(value: T) -> Self {
		Self::exact(value)
	}
}

impl<T: Copy> From<RangeInclusive<T>> for Bounds<T> {
	fn from(range: RangeInclusive<T>) -> Self {
		Self::new(*range.start(), *range.end())
	}
}

/// Shape of a block of generated text.
///
/// Groups the three count bounds used by `TextGenerator::paragraphs_shaped`.
/// Missing fields fall back to the default shape when deserialized.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct TextShape {
	/// Words per sentence.
	pub words: Bounds<u32>,
	/// Sentences per paragraph.
	pub sentences: Bounds<u32>,
	/// Number of paragraphs.
	pub paragraphs: Bounds<u32>,
}

impl Default for TextShape {
	fn default() -> Self {
		Self {
			words: Bounds::new(5, 12),
			sentences: Bounds::new(3, 6),
			paragraphs: Bounds::new(1, 3),
		}
	}
}

impl TextShape {
	/// Checks all three count bounds, in order words, sentences, paragraphs.
	pub fn check(&self) -> Result<()> {
		self.words.check_count("word_count")?;
		self.sentences.check_count("sentence_count")?;
		self.paragraphs.check_count("paragraph_count")
	}
}
