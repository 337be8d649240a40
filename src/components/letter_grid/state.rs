use std::fmt;

use log::{debug, info, warn};

use crate::components::status::StatusMessage;
use crate::config::GridConfig;
use crate::grid::{
	Dataset, DatasetError, GridLayout, Letter, PathCheck, Point, Scene, SelectOutcome, Selection,
	SequenceError, parse_sequence, validate_sequence,
};

/// Where the active dataset came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetSource {
	Sample,
	File(String),
	Url(String),
}

impl fmt::Display for DatasetSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DatasetSource::Sample => f.write_str("sample data"),
			DatasetSource::File(name) | DatasetSource::Url(name) => f.write_str(name),
		}
	}
}

/// Everything the board needs to draw itself and react to input. One value
/// of this lives in a signal owned by the page.
#[derive(Clone, Debug)]
pub struct LetterGridState {
	layout: GridLayout,
	dataset: Dataset,
	source: DatasetSource,
	selection: Selection,
	hover: Option<Letter>,
	show_edges: bool,
	max_side: f64,
}

impl LetterGridState {
	pub fn new(config: &GridConfig) -> Self {
		Self {
			layout: GridLayout::fit(config.board_size),
			dataset: Dataset::sample(),
			source: DatasetSource::Sample,
			selection: Selection::new(),
			hover: None,
			show_edges: true,
			max_side: config.board_size,
		}
	}

	pub fn layout(&self) -> &GridLayout {
		&self.layout
	}

	pub fn dataset(&self) -> &Dataset {
		&self.dataset
	}

	pub fn source(&self) -> &DatasetSource {
		&self.source
	}

	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	pub fn hover(&self) -> Option<Letter> {
		self.hover
	}

	pub fn show_edges(&self) -> bool {
		self.show_edges
	}

	/// Swaps in a freshly parsed dataset, or keeps the current one when the
	/// load failed. Returns the banner to show either way.
	pub fn apply_load(
		&mut self,
		result: Result<Dataset, DatasetError>,
		source: DatasetSource,
	) -> StatusMessage {
		match result {
			Ok(dataset) => {
				if dataset.is_empty() {
					warn!("dataset: {} has no letter entries, nothing will connect", source);
				}
				info!("dataset: loaded {} letters from {}", dataset.len(), source);
				let message =
					StatusMessage::success(format!("Loaded {} ({} letters)", source, dataset.len()));
				self.dataset = dataset;
				self.source = source;
				self.selection.clear();
				message
			}
			Err(err) => {
				warn!("dataset: {} failed to load: {}; keeping {}", source, err, self.source);
				StatusMessage::error(format!("Error loading {}: {}", source, err))
			}
		}
	}

	/// Returns whether the hovered letter changed.
	pub fn set_hover(&mut self, letter: Option<Letter>) -> bool {
		if self.hover == letter {
			return false;
		}
		self.hover = letter;
		true
	}

	pub fn hover_at(&mut self, point: Point) -> bool {
		let letter = self.layout.letter_at(point);
		self.set_hover(letter)
	}

	pub fn select(&mut self, letter: Letter) -> SelectOutcome {
		self.selection.select(letter, &self.dataset)
	}

	/// Selects whatever letter is under `point`; clicks between nodes are
	/// ignored.
	pub fn click_at(&mut self, point: Point) -> Option<SelectOutcome> {
		let letter = self.layout.letter_at(point)?;
		Some(self.select(letter))
	}

	pub fn clear_selection(&mut self) {
		debug!("selection: cleared");
		self.selection.clear();
	}

	/// Returns the new visibility.
	pub fn toggle_edges(&mut self) -> bool {
		self.show_edges = !self.show_edges;
		self.show_edges
	}

	/// Board side for a container `available` pixels wide.
	pub fn fitted_side(&self, available: f64) -> f64 {
		if available.is_finite() && available > 0.0 {
			available.min(self.max_side)
		} else {
			self.max_side
		}
	}

	/// Refits the layout; returns whether anything moved.
	pub fn resize(&mut self, available: f64) -> bool {
		let side = self.fitted_side(available);
		if side == self.layout.side() {
			return false;
		}
		debug!("layout: board resized to {}px", side);
		self.layout = GridLayout::fit(side);
		true
	}

	/// Parses and checks typed input against the directed mapping. Does not
	/// touch the selection.
	pub fn check_sequence(&self, input: &str) -> Result<PathCheck, SequenceError> {
		let letters = parse_sequence(input)?;
		Ok(validate_sequence(&self.dataset, &letters))
	}

	pub fn scene(&self) -> Scene {
		Scene::build(
			&self.layout,
			&self.dataset,
			&self.selection,
			self.hover,
			self.show_edges,
		)
	}
}
