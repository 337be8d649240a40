use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::Deserialize;

use super::error::DatasetError;
use super::letter::Letter;

const SAMPLE: &[(char, &str)] = &[
	('S', "OK"),
	('O', "SKXDP"),
	('P', "OXDY"),
	('Y', "PQ"),
	('K', "SO"),
	('X', "OPDR"),
	('D', "XOPQ"),
	('Q', "DYR"),
	('H', "Z"),
	('A', "ZCU"),
	('R', "XQCT"),
	('W', "UT"),
	('Z', "HAC"),
	('C', "ZARU"),
	('U', "CAWT"),
	('T', "URW"),
];

#[derive(Deserialize)]
struct RawEntry {
	#[serde(default)]
	connections: Vec<serde_json::Value>,
}

/// An undirected connection between two distinct letters, stored with its
/// endpoints sorted so `{A, B}` and `{B, A}` compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
	low: Letter,
	high: Letter,
}

impl Edge {
	/// `None` for a self-pair.
	pub fn new(a: Letter, b: Letter) -> Option<Self> {
		match a.cmp(&b) {
			std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
			std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
			std::cmp::Ordering::Equal => None,
		}
	}

	pub fn endpoints(self) -> (Letter, Letter) {
		(self.low, self.high)
	}

	/// The endpoint that is not `letter`, if `letter` is one of them.
	pub fn other(self, letter: Letter) -> Option<Letter> {
		if self.low == letter {
			Some(self.high)
		} else if self.high == letter {
			Some(self.low)
		} else {
			None
		}
	}
}

/// The adjacency mapping that drives both drawing and path validation.
///
/// Neighbor lists keep the order they were given in. The mapping is directed
/// as stored; [`Dataset::is_connected`] and [`Dataset::edges`] read it
/// symmetrically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
	connections: BTreeMap<Letter, Vec<Letter>>,
}

impl Dataset {
	/// Parses `{ "S": { "connections": ["O", "K"] }, ... }`.
	///
	/// Keys and neighbor entries that are not single uppercase letters are
	/// dropped whatever their value. An entry under a letter key must still
	/// be an object. The result is built in full before it is returned, so callers
	/// never observe a half-loaded mapping.
	pub fn parse(text: &str) -> Result<Self, DatasetError> {
		let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(text)?;
		let mut dropped = 0usize;
		let mut connections = BTreeMap::new();

		for (key, value) in raw {
			let Some(letter) = Letter::from_key(&key) else {
				dropped += 1;
				continue;
			};
			let entry: RawEntry = serde_json::from_value(value)?;
			let neighbors: Vec<Letter> = entry
				.connections
				.iter()
				.filter_map(|n| {
					let parsed = n.as_str().and_then(Letter::from_key);
					if parsed.is_none() {
						dropped += 1;
					}
					parsed
				})
				.collect();
			connections.insert(letter, neighbors);
		}

		if dropped > 0 {
			debug!("dataset: ignored {} unrecognised key(s) or neighbor(s)", dropped);
		}
		Ok(Self { connections })
	}

	/// The built-in dataset used until something else loads.
	pub fn sample() -> Self {
		SAMPLE
			.iter()
			.filter_map(|&(key, neighbors)| {
				let letter = Letter::new(key)?;
				Some((letter, neighbors.chars().filter_map(Letter::new).collect()))
			})
			.collect()
	}

	pub fn len(&self) -> usize {
		self.connections.len()
	}

	pub fn is_empty(&self) -> bool {
		self.connections.is_empty()
	}

	pub fn contains(&self, letter: Letter) -> bool {
		self.connections.contains_key(&letter)
	}

	/// Letters that have an entry, in sorted order.
	pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
		self.connections.keys().copied()
	}

	/// `letter`'s own neighbor list; empty when it has no entry.
	pub fn neighbors(&self, letter: Letter) -> &[Letter] {
		self.connections
			.get(&letter)
			.map(Vec::as_slice)
			.unwrap_or(&[])
	}

	/// Directed test: does `from` list `to`?
	pub fn links_to(&self, from: Letter, to: Letter) -> bool {
		self.neighbors(from).contains(&to)
	}

	/// Either endpoint lists the other.
	pub fn is_connected(&self, a: Letter, b: Letter) -> bool {
		self.links_to(a, b) || self.links_to(b, a)
	}

	/// Every undirected edge exactly once, sorted.
	pub fn edges(&self) -> Vec<Edge> {
		self.connections
			.iter()
			.flat_map(|(&from, neighbors)| neighbors.iter().filter_map(move |&to| Edge::new(from, to)))
			.collect::<BTreeSet<_>>()
			.into_iter()
			.collect()
	}
}

impl FromIterator<(Letter, Vec<Letter>)> for Dataset {
	fn from_iter<I: IntoIterator<Item = (Letter, Vec<Letter>)>>(iter: I) -> Self {
		Self {
			connections: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn l(c: char) -> Letter {
		Letter::new(c).unwrap()
	}

	#[test]
	fn sample_has_every_grid_letter() {
		let sample = Dataset::sample();
		assert_eq!(sample.len(), 16);
		assert_eq!(sample.neighbors(l('S')), &[l('O'), l('K')]);
		assert_eq!(
			sample.neighbors(l('O')),
			&[l('S'), l('K'), l('X'), l('D'), l('P')]
		);
	}

	#[test]
	fn parse_keeps_neighbor_order() {
		let data = Dataset::parse(r#"{"A": {"connections": ["Z", "C", "U"]}}"#).unwrap();
		assert_eq!(data.neighbors(l('A')), &[l('Z'), l('C'), l('U')]);
	}

	#[test]
	fn parse_drops_unknown_keys_and_neighbors() {
		let data = Dataset::parse(
			r#"{
				"S": {"connections": ["O", "oo", "k"]},
				"extra": {"connections": ["S"]},
				"b": {"connections": []}
			}"#,
		)
		.unwrap();
		assert_eq!(data.len(), 1);
		assert_eq!(data.neighbors(l('S')), &[l('O')]);
	}

	#[test]
	fn unknown_keys_with_scalar_values_are_ignored() {
		let data = Dataset::parse(
			r#"{"S": {"connections": ["O"]}, "version": 2, "meta": "v1", "tags": [1, 2]}"#,
		)
		.unwrap();
		assert_eq!(data.len(), 1);
		assert_eq!(data.neighbors(l('S')), &[l('O')]);
	}

	#[test]
	fn non_string_neighbors_are_skipped() {
		let data =
			Dataset::parse(r#"{"S": {"connections": ["O", 5, null, {"to": "K"}, "K"]}}"#).unwrap();
		assert_eq!(data.neighbors(l('S')), &[l('O'), l('K')]);
	}

	#[test]
	fn missing_connections_field_is_empty() {
		let data = Dataset::parse(r#"{"H": {}}"#).unwrap();
		assert!(data.contains(l('H')));
		assert!(data.neighbors(l('H')).is_empty());
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		let err = Dataset::parse("{ \"S\": ").unwrap_err();
		assert!(matches!(err, DatasetError::Parse(_)));
		assert!(err.to_string().starts_with("invalid dataset JSON"));

		let err = Dataset::parse(r#"{"S": 5}"#).unwrap_err();
		assert!(matches!(err, DatasetError::Parse(_)));
	}

	#[test]
	fn absent_letter_has_no_neighbors() {
		let data = Dataset::sample();
		assert!(data.neighbors(l('B')).is_empty());
		assert!(!data.is_connected(l('B'), l('S')));
	}

	#[test]
	fn connection_is_symmetric_even_when_listed_once() {
		let data: Dataset = [(l('A'), vec![l('B')])].into_iter().collect();
		assert!(data.links_to(l('A'), l('B')));
		assert!(!data.links_to(l('B'), l('A')));
		assert!(data.is_connected(l('A'), l('B')));
		assert!(data.is_connected(l('B'), l('A')));
	}

	#[test]
	fn edges_are_deduplicated_and_skip_self_pairs() {
		let data: Dataset = [
			(l('A'), vec![l('B'), l('A'), l('B')]),
			(l('B'), vec![l('A'), l('C')]),
		]
		.into_iter()
		.collect();
		let edges: Vec<_> = data.edges().into_iter().map(Edge::endpoints).collect();
		assert_eq!(edges, vec![(l('A'), l('B')), (l('B'), l('C'))]);
	}

	#[test]
	fn sample_edge_count() {
		// Every sample connection is listed from both sides.
		let sample = Dataset::sample();
		let directed: usize = sample.letters().map(|x| sample.neighbors(x).len()).sum();
		assert_eq!(sample.edges().len() * 2, directed);
	}

	#[test]
	fn edge_other_endpoint() {
		let edge = Edge::new(l('O'), l('S')).unwrap();
		assert_eq!(edge.endpoints(), (l('O'), l('S')));
		assert_eq!(edge.other(l('S')), Some(l('O')));
		assert_eq!(edge.other(l('K')), None);
		assert!(Edge::new(l('Z'), l('Z')).is_none());
	}
}
