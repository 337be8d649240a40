use std::fmt;

/// A single uppercase ASCII letter acting as a graph node.
///
/// Any of `A`..=`Z` is a valid `Letter`; only sixteen of them have a place on
/// the grid (see [`GridLayout`](super::GridLayout)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
	/// Returns `None` unless `c` is an uppercase ASCII letter.
	pub const fn new(c: char) -> Option<Self> {
		if c.is_ascii_uppercase() {
			Some(Self(c))
		} else {
			None
		}
	}

	/// Like [`Letter::new`], but folds lowercase input first.
	pub fn from_input(c: char) -> Option<Self> {
		Self::new(c.to_ascii_uppercase())
	}

	/// Parses a dataset key such as `"S"`. Multi-character keys are rejected.
	pub fn from_key(key: &str) -> Option<Self> {
		let mut chars = key.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Self::new(c),
			_ => None,
		}
	}

	/// The underlying character.
	pub const fn as_char(self) -> char {
		self.0
	}
}

impl fmt::Display for Letter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
