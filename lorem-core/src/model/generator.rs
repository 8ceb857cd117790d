use std::iter::FusedIterator;
use std::sync::LazyLock;

use log::{debug, trace};

use crate::error::{LoremError, Result};
use crate::model::bounds::{Bounds, TextShape};
use crate::model::corpus::{LatinCorpus, WordCorpus};
use crate::model::random_source::{RandomSource, SeededRandom, SharedRandom};
use crate::text::{self, SENTENCE_CLEANUP};

static SHARED: LazyLock<TextGenerator> = LazyLock::new(TextGenerator::new);

/// High-level generator of placeholder text and random values.
///
/// # Responsibilities
/// - Validate every argument before consuming randomness
/// - Compose words into sentences, sentences into paragraphs
/// - Provide independent random primitives (numbers, dates, picks)
///
/// # Conventions
/// - Every count range is inclusive: `words(3..=3, ..)` yields exactly 3 words
/// - The generator itself holds no mutable state; only the random source advances
#[derive(Debug)]
pub struct TextGenerator<R = SharedRandom, C = LatinCorpus> {
	pub(super) rng: R,
	pub(super) corpus: C,
}

impl TextGenerator {
	/// Creates a generator using the thread-local random source and the Latin corpus.
	pub fn new() -> Self {
		Self::with_parts(SharedRandom, LatinCorpus)
	}

	/// Returns the process-wide default generator.
	///
	/// Initialised on first use; safe to call from any thread.
	pub fn shared() -> &'static Self {
		&SHARED
	}
}

impl Default for TextGenerator {
	fn default() -> Self {
		Self::new()
	}
}

impl TextGenerator<SeededRandom, LatinCorpus> {
	/// Creates a reproducible generator: the same seed yields the same output.
	pub fn seeded(seed: u64) -> Self {
		Self::with_parts(SeededRandom::new(seed), LatinCorpus)
	}
}

impl<R: RandomSource, C: WordCorpus> TextGenerator<R, C> {
	/// Creates a generator from explicit collaborators.
	pub fn with_parts(rng: R, corpus: C) -> Self {
		debug!("text generator created (corpus of {} words)", corpus.len());
		Self { rng, corpus }
	}

	/// Returns the injected random source.
	pub fn random_source(&self) -> &R {
		&self.rng
	}

	/// Returns the injected corpus.
	pub fn corpus(&self) -> &C {
		&self.corpus
	}

	/// Returns a string of words drawn from the corpus.
	///
	/// # Parameters
	/// - `word_count`: number of words, a single value or an inclusive range
	/// - `uppercase_first_letter`: capitalise the first character
	/// - `include_punctuation`: let the corpus interleave commas
	///
	/// # Errors
	/// - `OutOfRange` if a bound is lower than 1 or `max < min`
	/// - `InvalidArgument` if the corpus is empty
	pub fn words(
		&self,
		word_count: impl Into<Bounds<u32>>,
		uppercase_first_letter: bool,
		include_punctuation: bool,
	) -> Result<String> {
		let word_count = word_count.into();
		word_count.check_count("word_count")?;
		self.check_corpus()?;

		Ok(self.build_words(word_count, uppercase_first_letter, include_punctuation))
	}

	/// Returns a capitalised sentence ending with a single period.
	///
	/// The text never contains `",."` nor `".."`.
	///
	/// # Errors
	/// Same as `words`.
	pub fn sentence(&self, word_count: impl Into<Bounds<u32>>) -> Result<String> {
		let word_count = word_count.into();
		word_count.check_count("word_count")?;
		self.check_corpus()?;

		Ok(self.build_sentence(word_count))
	}

	/// Returns a paragraph of sentences joined by single spaces.
	///
	/// Each sentence draws its own word count from `word_count`.
	///
	/// # Errors
	/// `OutOfRange` if either bounds is invalid (`word_count` is checked first),
	/// `InvalidArgument` if the corpus is empty.
	pub fn paragraph(
		&self,
		word_count: impl Into<Bounds<u32>>,
		sentence_count: impl Into<Bounds<u32>>,
	) -> Result<String> {
		let word_count = word_count.into();
		let sentence_count = sentence_count.into();
		word_count.check_count("word_count")?;
		sentence_count.check_count("sentence_count")?;
		self.check_corpus()?;

		Ok(self.build_paragraph(word_count, sentence_count))
	}

	/// Returns a lazy sequence of paragraphs.
	///
	/// The number of paragraphs is drawn once, when this method is called.
	/// Each paragraph is generated on demand and redraws its own sentence
	/// and word counts. Calling `paragraphs` again yields a new, independent draw.
	///
	/// # Errors
	/// `OutOfRange` if any bounds is invalid (checked in order words,
	/// sentences, paragraphs), `InvalidArgument` if the corpus is empty.
	pub fn paragraphs(
		&self,
		word_count: impl Into<Bounds<u32>>,
		sentence_count: impl Into<Bounds<u32>>,
		paragraph_count: impl Into<Bounds<u32>>,
	) -> Result<Paragraphs<'_, R, C>> {
		self.paragraphs_shaped(&TextShape {
			words: word_count.into(),
			sentences: sentence_count.into(),
			paragraphs: paragraph_count.into(),
		})
	}

	/// Same as `paragraphs`, with the bounds taken from a `TextShape`.
	pub fn paragraphs_shaped(&self, shape: &TextShape) -> Result<Paragraphs<'_, R, C>> {
		shape.check()?;
		self.check_corpus()?;

		let remaining = self.draw_count(shape.paragraphs, "paragraphs");
		Ok(Paragraphs {
			generator: self,
			word_count: shape.words,
			sentence_count: shape.sentences,
			remaining,
		})
	}

	/// Fails when the corpus cannot produce a single word.
	pub(super) fn check_corpus(&self) -> Result<()> {
		if self.corpus.is_empty() {
			return Err(LoremError::invalid_argument("corpus", "must contain at least one word"));
		}
		Ok(())
	}

	/// Draws a count in `bounds` (already validated, inclusive).
	fn draw_count(&self, bounds: Bounds<u32>, what: &str) -> usize {
		let count = self.rng.next_i64(i64::from(bounds.min), i64::from(bounds.max));
		trace!("drew {count} {what} in {}..={}", bounds.min, bounds.max);
		count as usize
	}

	/// Words without validation; callers checked `word_count` and the corpus.
	pub(super) fn build_words(
		&self,
		word_count: Bounds<u32>,
		uppercase_first_letter: bool,
		include_punctuation: bool,
	) -> String {
		let count = self.draw_count(word_count, "words");
		let last = i64::try_from(self.corpus.len() - 1).unwrap_or(i64::MAX);
		let start = self.rng.next_i64(0, last) as usize;
		trace!("corpus sequence starts at {start}");

		let words: Vec<_> = self.corpus.sequence(include_punctuation, start).take(count).collect();
		let source = words.join(" ");

		if uppercase_first_letter {
			text::uppercase_first(&source)
		} else {
			source
		}
	}

	fn build_sentence(&self, word_count: Bounds<u32>) -> String {
		let source = format!("{}.", self.build_words(word_count, true, true));
		SENTENCE_CLEANUP.apply(source)
	}

	fn build_paragraph(&self, word_count: Bounds<u32>, sentence_count: Bounds<u32>) -> String {
		let count = self.draw_count(sentence_count, "sentences");
		let sentences: Vec<String> = (0..count).map(|_| self.build_sentence(word_count)).collect();
		sentences.join(" ").trim().to_owned()
	}
}

/// Lazy, finite sequence of paragraphs returned by `TextGenerator::paragraphs`.
///
/// Every item is generated when requested; nothing is cached.
#[derive(Debug)]
pub struct Paragraphs<'a, R, C> {
	generator: &'a TextGenerator<R, C>,
	word_count: Bounds<u32>,
	sentence_count: Bounds<u32>,
	remaining: usize,
}

impl<R: RandomSource, C: WordCorpus> Iterator for Paragraphs<'_, R, C> {
	type Item = String;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;
		Some(self.generator.build_paragraph(self.word_count, self.sentence_count))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<R: RandomSource, C: WordCorpus> ExactSizeIterator for Paragraphs<'_, R, C> {}

impl<R: RandomSource, C: WordCorpus> FusedIterator for Paragraphs<'_, R, C> {}
