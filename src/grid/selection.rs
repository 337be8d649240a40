use std::collections::BTreeSet;

use log::debug;

use super::dataset::{Dataset, Edge};
use super::letter::Letter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
	Empty,
	Active,
}

/// What a call to [`Selection::select`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
	/// First letter of a new path.
	Started,
	/// The letter continued the path.
	Extended,
	/// The letter was already the head.
	Unchanged,
	/// The letter was not connected to the head and now starts a new path.
	Restarted,
}

/// The user's in-progress path across the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	letters: Vec<Letter>,
}

impl Selection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> SelectionState {
		if self.letters.is_empty() {
			SelectionState::Empty
		} else {
			SelectionState::Active
		}
	}

	pub fn letters(&self) -> &[Letter] {
		&self.letters
	}

	/// Most recently selected letter.
	pub fn head(&self) -> Option<Letter> {
		self.letters.last().copied()
	}

	pub fn contains(&self, letter: Letter) -> bool {
		self.letters.contains(&letter)
	}

	/// Feeds one clicked letter through the path rules. Connectivity is
	/// checked in either direction.
	pub fn select(&mut self, letter: Letter, dataset: &Dataset) -> SelectOutcome {
		let Some(head) = self.head() else {
			self.letters.push(letter);
			debug!("selection: start at {}", letter);
			return SelectOutcome::Started;
		};

		if letter == head {
			return SelectOutcome::Unchanged;
		}

		if dataset.is_connected(head, letter) {
			self.letters.push(letter);
			debug!("selection: {} -> {} ({} letters)", head, letter, self.letters.len());
			SelectOutcome::Extended
		} else {
			self.clear();
			self.letters.push(letter);
			debug!("selection: {} not connected to {}, restarting", letter, head);
			SelectOutcome::Restarted
		}
	}

	pub fn clear(&mut self) {
		self.letters.clear();
	}

	/// Edges between consecutive letters of the path.
	pub fn path_edges(&self) -> BTreeSet<Edge> {
		self.letters
			.windows(2)
			.filter_map(|pair| Edge::new(pair[0], pair[1]))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn l(c: char) -> Letter {
		Letter::new(c).unwrap()
	}

	fn click_all(selection: &mut Selection, dataset: &Dataset, path: &str) -> Vec<SelectOutcome> {
		path.chars()
			.map(|c| selection.select(l(c), dataset))
			.collect()
	}

	#[test]
	fn connected_clicks_extend_the_path() {
		let data = Dataset::sample();
		let mut selection = Selection::new();
		let outcomes = click_all(&mut selection, &data, "SOK");
		assert_eq!(
			outcomes,
			vec![
				SelectOutcome::Started,
				SelectOutcome::Extended,
				SelectOutcome::Extended
			]
		);
		assert_eq!(selection.state(), SelectionState::Active);
		assert_eq!(selection.letters(), &[l('S'), l('O'), l('K')]);

		let marked: Vec<_> = selection.path_edges().into_iter().collect();
		assert_eq!(
			marked,
			vec![
				Edge::new(l('K'), l('O')).unwrap(),
				Edge::new(l('O'), l('S')).unwrap()
			]
		);
		assert!(!selection.path_edges().contains(&Edge::new(l('S'), l('K')).unwrap()));
	}

	#[test]
	fn unconnected_click_restarts_from_that_letter() {
		let data = Dataset::sample();
		let mut selection = Selection::new();
		let outcomes = click_all(&mut selection, &data, "SOH");
		assert_eq!(outcomes[2], SelectOutcome::Restarted);
		assert_eq!(selection.letters(), &[l('H')]);
		assert!(selection.path_edges().is_empty());
	}

	#[test]
	fn clicking_the_head_again_does_nothing() {
		let data = Dataset::sample();
		let mut selection = Selection::new();
		click_all(&mut selection, &data, "SO");
		assert_eq!(selection.select(l('O'), &data), SelectOutcome::Unchanged);
		assert_eq!(selection.letters(), &[l('S'), l('O')]);
	}

	#[test]
	fn click_validation_accepts_one_sided_connections() {
		let data: Dataset = [(l('A'), vec![l('B')])].into_iter().collect();
		let mut selection = Selection::new();
		click_all(&mut selection, &data, "BA");
		assert_eq!(selection.letters(), &[l('B'), l('A')]);
	}

	#[test]
	fn revisiting_an_earlier_letter_is_allowed() {
		let data = Dataset::sample();
		let mut selection = Selection::new();
		click_all(&mut selection, &data, "SOS");
		assert_eq!(selection.letters(), &[l('S'), l('O'), l('S')]);
		assert_eq!(selection.path_edges().len(), 1);
	}

	#[test]
	fn clear_is_idempotent() {
		let data = Dataset::sample();
		let mut selection = Selection::new();
		click_all(&mut selection, &data, "SOKS");
		selection.clear();
		assert_eq!(selection.state(), SelectionState::Empty);
		assert!(selection.path_edges().is_empty());
		selection.clear();
		assert_eq!(selection, Selection::new());
		assert_eq!(selection.select(l('T'), &data), SelectOutcome::Started);
	}
}
