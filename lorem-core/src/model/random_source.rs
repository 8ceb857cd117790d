use std::sync::{Arc, Mutex, PoisonError};

use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Uniform random source consumed by `TextGenerator`.
///
/// Methods take `&self` so a single source can be shared between threads;
/// implementations synchronize internally (or hold no shared state).
///
/// # Conventions
/// - Integer ranges are inclusive on both ends
/// - Integer draws are unbiased for every span, including `i64::MIN..=i64::MAX`
///   (`Uniform` rejection sampling, see `draw_inclusive`)
pub trait RandomSource: Send + Sync {
	/// Returns an integer uniformly distributed in `[min, max]`.
	///
	/// Callers guarantee `min <= max`.
	fn next_i64(&self, min: i64, max: i64) -> i64;

	/// Returns a double uniformly distributed in `[0, 1)`.
	fn next_f64(&self) -> f64;

	/// Fills `buffer` with random bytes.
	fn fill_bytes(&self, buffer: &mut [u8]);
}

/// Draws from `[min, max]` with `Uniform`, which rejects samples outside
/// the widening-multiply zone instead of accepting a small bias.
///
/// `min > max` is a caller error and returns `min`.
pub(crate) fn draw_inclusive<G: Rng + ?Sized>(rng: &mut G, min: i64, max: i64) -> i64 {
	match Uniform::new_inclusive(min, max) {
		Ok(uniform) => uniform.sample(rng),
		Err(_) => min,
	}
}

/// Production source backed by `rand::rng()`.
///
/// Each thread owns its own lazily seeded generator, so concurrent callers
/// never contend on a lock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedRandom;

impl RandomSource for SharedRandom {
	fn next_i64(&self, min: i64, max: i64) -> i64 {
		draw_inclusive(&mut rand::rng(), min, max)
	}

	fn next_f64(&self) -> f64 {
		rand::rng().random()
	}

	fn fill_bytes(&self, buffer: &mut [u8]) {
		rand::rng().fill_bytes(buffer);
	}
}

/// Deterministic source wrapping a seeded `StdRng`.
///
/// Two sources built from the same seed produce the same draws,
/// which makes generated fixtures reproducible.
#[derive(Debug)]
pub struct SeededRandom {
	rng: Mutex<StdRng>,
}

impl SeededRandom {
	/// Creates a source with a fixed seed.
	pub fn new(seed: u64) -> Self {
		Self {
			rng: Mutex::new(StdRng::seed_from_u64(seed)),
		}
	}

	/// Runs `f` on the locked generator.
	///
	/// A poisoned lock is recovered: the generator state stays valid
	/// even if another thread panicked mid-draw.
	fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
		let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
		f(&mut rng)
	}
}

impl RandomSource for SeededRandom {
	fn next_i64(&self, min: i64, max: i64) -> i64 {
		self.with_rng(|rng| draw_inclusive(rng, min, max))
	}

	fn next_f64(&self) -> f64 {
		self.with_rng(|rng| rng.random())
	}

	fn fill_bytes(&self, buffer: &mut [u8]) {
		self.with_rng(|rng| rng.fill_bytes(buffer));
	}
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
	fn next_i64(&self, min: i64, max: i64) -> i64 {
		(**self).next_i64(min, max)
	}

	fn next_f64(&self) -> f64 {
		(**self).next_f64()
	}

	fn fill_bytes(&self, buffer: &mut [u8]) {
		(**self).fill_bytes(buffer)
	}
}

impl<R: RandomSource + ?Sized> RandomSource for Arc<R> {
	fn next_i64(&self, min: i64, max: i64) -> i64 {
		(**self).next_i64(min, max)
	}

	fn next_f64(&self) -> f64 {
		(**self).next_f64()
	}

	fn fill_bytes(&self, buffer: &mut [u8]) {
		(**self).fill_bytes(buffer)
	}
}
