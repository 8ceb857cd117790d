use std::borrow::Cow;

/// A comma is appended to every `COMMA_CADENCE`-th word of a punctuated sequence.
pub const COMMA_CADENCE: usize = 8;

/// Fixed vocabulary of lowercase words.
///
/// Implementors only expose the vocabulary; the provided `sequence`
/// turns it into a lazy, infinite, cyclic stream of words.
///
/// # Invariants
/// - `word(i)` is defined for every `i < len()`
/// - Words are lowercase and carry no punctuation of their own
pub trait WordCorpus: Send + Sync {
	/// Number of distinct words in the vocabulary.
	fn len(&self) -> usize;

	/// Returns the word at `index` (`index < len()`).
	fn word(&self, index: usize) -> &str;

	/// Returns `true` if the vocabulary holds no word.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Starts a fresh sequence at vocabulary position `start` (modulo `len()`).
	///
	/// # Parameters
	/// - `include_punctuation`: suffix every `COMMA_CADENCE`-th word with `,`
	/// - `start`: first vocabulary index to produce
	///
	/// The sequence never ends unless the vocabulary is empty,
	/// so callers bound it with `take`.
	fn sequence(&self, include_punctuation: bool, start: usize) -> Sequence<'_, Self> {
		Sequence {
			corpus: self,
			index: if self.is_empty() { 0 } else { start % self.len() },
			produced: 0,
			include_punctuation,
		}
	}
}

/// Lazy cyclic word stream produced by `WordCorpus::sequence`.
#[derive(Debug)]
pub struct Sequence<'a, C: WordCorpus + ?Sized> {
	corpus: &'a C,
	index: usize,
	produced: usize,
	include_punctuation: bool,
}

impl<'a, C: WordCorpus + ?Sized> Iterator for Sequence<'a, C> {
	type Item = Cow<'a, str>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.corpus.is_empty() {
			return None;
		}

		let word = self.corpus.word(self.index);
		self.index = (self.index + 1) % self.corpus.len();
		self.produced += 1;

		if self.include_punctuation && self.produced % COMMA_CADENCE == 0 {
			Some(Cow::Owned(format!("{word},")))
		} else {
			Some(Cow::Borrowed(word))
		}
	}
}

/// The classic lorem-ipsum vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatinCorpus;

impl WordCorpus for LatinCorpus {
	fn len(&self) -> usize {
		LATIN_WORDS.len()
	}

	fn word(&self, index: usize) -> &str {
		LATIN_WORDS[index]
	}
}

const LATIN_WORDS: &[&str] = &[
	"lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
	"sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et",
	"dolore", "magna", "aliqua", "enim", "ad", "minim", "veniam", "quis",
	"nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "ex", "ea",
	"commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit", "voluptate",
	"velit", "esse", "cillum", "eu", "fugiat", "nulla", "pariatur", "excepteur",
	"sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
	"officia", "deserunt", "mollit", "anim", "id", "est", "laborum", "curabitur",
	"pretium", "tincidunt", "lacus", "gravida", "orci", "a", "odio", "nullam",
	"varius", "turpis", "aenean", "mauris", "vitae", "purus", "ante", "ligula",
	"integer", "feugiat", "scelerisque", "sagittis", "vestibulum", "morbi", "blandit", "cursus",
	"risus", "at", "ultrices", "mi", "quam", "pellentesque", "nec", "nam",
	"aliquam", "sem", "etiam", "erat", "imperdiet", "donec", "massa", "sapien",
	"faucibus", "vel", "facilisis", "volutpat", "maecenas", "accumsan", "neque", "viverra",
	"justo", "nunc", "mattis", "rhoncus", "urna", "eget", "fermentum", "posuere",
	"porttitor", "leo", "suspendisse", "potenti", "phasellus", "egestas", "tellus", "rutrum",
];
