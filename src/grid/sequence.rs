use super::dataset::Dataset;
use super::error::SequenceError;
use super::letter::Letter;

/// Result of checking a typed sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathCheck {
	Valid,
	Empty,
	/// `to` is not in `from`'s own neighbor list; `index` is the position of
	/// `from` in the input.
	Broken {
		index: usize,
		from: Letter,
		to: Letter,
	},
}

impl PathCheck {
	pub fn is_valid(self) -> bool {
		matches!(self, PathCheck::Valid)
	}
}

/// Uppercases `input` and splits it into letters, ignoring surrounding
/// whitespace.
pub fn parse_sequence(input: &str) -> Result<Vec<Letter>, SequenceError> {
	let trimmed = input.trim();
	if trimmed.is_empty() {
		return Err(SequenceError::Empty);
	}
	trimmed
		.chars()
		.enumerate()
		.map(|(index, ch)| Letter::from_input(ch).ok_or(SequenceError::NotALetter { index, ch }))
		.collect()
}

/// Checks each consecutive pair against the mapping as stored: `b` must
/// appear in `a`'s list. Unlike clicking, a connection listed only from `b`'s
/// side does not count.
pub fn validate_sequence(dataset: &Dataset, letters: &[Letter]) -> PathCheck {
	if letters.is_empty() {
		return PathCheck::Empty;
	}
	letters
		.windows(2)
		.enumerate()
		.find(|(_, pair)| !dataset.links_to(pair[0], pair[1]))
		.map_or(PathCheck::Valid, |(index, pair)| PathCheck::Broken {
			index,
			from: pair[0],
			to: pair[1],
		})
}
