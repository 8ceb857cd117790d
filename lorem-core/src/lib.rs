//! Placeholder text ("lorem ipsum") generation library.
//!
//! This crate provides random content for test fixtures and sample data:
//! - Words, sentences, paragraphs and paragraph sequences
//! - Random primitives (chance, integers, hex numbers, letters, enum variants)
//! - Dates, date-times and times inside a range
//! - Email addresses and picks from a slice
//!
//! Every operation lives on [`TextGenerator`], which owns its two
//! collaborators: a [`RandomSource`] and a [`WordCorpus`]. Both are traits,
//! so tests can inject a seeded or counting source.
//!
//! ```
//! use lorem_core::TextGenerator;
//!
//! let generator = TextGenerator::seeded(42);
//! let sentence = generator.sentence(4..=8).unwrap();
//! assert!(sentence.ends_with('.'));
//! ```

/// Text generation models: bounds, collaborators and the generator itself.
pub mod model;

/// Error taxonomy shared by every operation.
pub mod error;

/// String helpers (capitalisation, literal cleanup passes).
///
/// Not exposed
pub(crate) mod text;

pub use error::{LoremError, Result};
pub use model::bounds::{Bounds, TextShape};
pub use model::corpus::{LatinCorpus, Sequence, WordCorpus};
pub use model::generator::{Paragraphs, TextGenerator};
pub use model::random_source::{RandomSource, SeededRandom, SharedRandom};
pub use model::temporal::{DEFAULT_EPOCH, DEFAULT_LATEST_TIME};
pub use model::variants::Variants;
