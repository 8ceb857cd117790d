use log::trace;

use crate::error::{LoremError, Result};
use crate::model::bounds::Bounds;
use crate::model::corpus::WordCorpus;
use crate::model::generator::TextGenerator;
use crate::model::random_source::RandomSource;
use crate::model::variants::Variants;

impl<R: RandomSource, C: WordCorpus> TextGenerator<R, C> {
	/// Returns `true` `successes` times out of `attempts`.
	///
	/// Draws an integer in `[1, attempts]` and succeeds if it is `<= successes`,
	/// so `chance(0, n)` is never true and `chance(n, n)` always is.
	///
	/// # Errors
	/// `OutOfRange` if `attempts < 1` or `successes > attempts`.
	pub fn chance(&self, successes: u32, attempts: u32) -> Result<bool> {
		if attempts < 1 {
			return Err(LoremError::out_of_range(
				"attempts",
				format!("must be >= 1, got {attempts}"),
			));
		}
		if successes > attempts {
			return Err(LoremError::out_of_range(
				"successes",
				format!("must be <= attempts ({attempts}), got {successes}"),
			));
		}

		let draw = self.rng.next_i64(1, i64::from(attempts));
		Ok(draw <= i64::from(successes))
	}

	/// Returns an integer uniformly distributed in `[min, max]`.
	///
	/// # Errors
	/// `OutOfRange` if `max < min`.
	pub fn number(&self, min: i64, max: i64) -> Result<i64> {
		Bounds::new(min, max).check_order("max")?;
		Ok(self.rng.next_i64(min, max))
	}

	/// 32-bit variant of `number`.
	pub fn integer(&self, min: i32, max: i32) -> Result<i32> {
		Bounds::new(min, max).check_order("max")?;
		let value = self.rng.next_i64(i64::from(min), i64::from(max));
		// In range by construction
		Ok(i32::try_from(value).unwrap_or(min))
	}

	/// Returns `digits` random uppercase hexadecimal characters.
	///
	/// Random bytes are rendered two characters each; an odd `digits`
	/// adds one extra nibble.
	///
	/// # Errors
	/// `OutOfRange` if `digits < 1`.
	pub fn hex_number(&self, digits: u32) -> Result<String> {
		if digits < 1 {
			return Err(LoremError::out_of_range("digits", "must be >= 1, got 0"));
		}

		let mut buffer = vec![0u8; (digits / 2) as usize];
		self.rng.fill_bytes(&mut buffer);

		let mut result: String = buffer.iter().map(|byte| format!("{byte:02X}")).collect();
		if digits % 2 == 1 {
			let nibble = self.rng.next_i64(0, 15);
			result.push_str(&format!("{nibble:X}"));
		}

		Ok(result)
	}

	/// Returns a lowercase letter between `a` and `z`.
	pub fn letter(&self) -> char {
		let offset = self.rng.next_i64(0, 25) as u8;
		char::from(b'a' + offset)
	}

	/// Returns one of the variants of `T`, uniformly.
	///
	/// # Errors
	/// `InvalidArgument` if `T::VARIANTS` is empty.
	pub fn variant<T: Variants>(&self) -> Result<T> {
		self.pick(T::VARIANTS).copied()
	}

	/// Returns an address of the form `word@word.com`, all lowercase.
	pub fn email(&self) -> Result<String> {
		self.check_corpus()?;
		let user = self.build_words(Bounds::exact(1), false, false);
		let domain = self.build_words(Bounds::exact(1), false, false);
		trace!("email from {user} and {domain}");
		Ok(format!("{user}@{domain}.com"))
	}

	/// Returns a uniformly chosen element of `items`.
	///
	/// # Errors
	/// `InvalidArgument` if `items` is empty.
	pub fn pick<'a, T>(&self, items: &'a [T]) -> Result<&'a T> {
		let Some(last) = items.len().checked_sub(1) else {
			return Err(LoremError::invalid_argument("items", "must not be empty"));
		};
		let drawn = self.rng.next_i64(0, i64::try_from(last).unwrap_or(i64::MAX));
		// Clamped for sources that ignore their bounds
		let index = usize::try_from(drawn).unwrap_or(0).min(last);
		Ok(&items[index])
	}
}
