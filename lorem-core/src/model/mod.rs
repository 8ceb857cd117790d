//! Top-level module for the placeholder generation system.
//!
//! This module provides:
//! - Inclusive bounds for counts, numbers and dates (`Bounds`, `TextShape`)
//! - The injected random source (`RandomSource`)
//! - The word vocabulary (`WordCorpus`)
//! - The high-level generation interface (`TextGenerator`)

/// Inclusive `min..=max` bounds and the serializable text shape.
///
/// Carries the validation rules every operation runs before drawing.
pub mod bounds;

/// Uniform random source abstraction.
///
/// Production code uses the thread-local `rand` generator,
/// tests use a seeded `StdRng`.
pub mod random_source;

/// Fixed vocabulary producing lazy, restartable word sequences.
pub mod corpus;

/// High-level generation interface.
///
/// Words, sentences and paragraphs, plus the independent random primitives.
pub mod generator;

/// Random primitives that do not touch the text pipeline.
mod primitives;

/// Date, date-time and time draws.
pub(crate) mod temporal;

/// Compile-time enum constraint used by `TextGenerator::variant`.
pub mod variants;
