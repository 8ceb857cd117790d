/// A fieldless enum whose variants can be listed.
///
/// `TextGenerator::variant` is bounded by this trait, so only types that
/// enumerate their values can be picked from. Implement it with the
/// [`variants!`](crate::variants) macro:
///
/// ```
/// use lorem_core::{TextGenerator, variants};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Suit { Hearts, Spades }
///
/// variants!(Suit { Hearts, Spades });
///
/// let suit: Suit = TextGenerator::seeded(1).variant().unwrap();
/// assert!(suit == Suit::Hearts || suit == Suit::Spades);
/// ```
pub trait Variants: Copy + 'static {
	/// Every value of the type.
	const VARIANTS: &'static [Self];
}

/// Implements [`Variants`] for a fieldless enum.
#[macro_export]
macro_rules! variants {
	($ty:ty { $($variant:ident),+ $(,)? }) => {
		impl $crate::Variants for $ty {
			const VARIANTS: &'static [Self] = &[$(Self::$variant),+];
		}
	};
}
