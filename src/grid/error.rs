//! Failures surfaced to the user through the status banner.

/// Why a dataset could not be made active.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
	/// The text was not a valid dataset document
	#[error("invalid dataset JSON: {0}")]
	Parse(#[from] serde_json::Error),

	/// The server answered with a non-success status
	#[error("failed to load {url}: {status} {status_text}")]
	Fetch {
		url: String,
		status: u16,
		status_text: String,
	},

	/// The request never produced a response
	#[error("network error fetching {url}: {message}")]
	Network { url: String, message: String },

	/// A picked file could not be read as text
	#[error("could not read {name}: {message}")]
	FileRead { name: String, message: String },
}

/// Why typed input could not be turned into a letter sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
	#[error("sequence is empty")]
	Empty,

	#[error("'{ch}' at position {index} is not a letter")]
	NotALetter { index: usize, ch: char },
}
