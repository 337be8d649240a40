//! One frame's worth of drawing instructions. Renderers consume a [`Scene`]
//! and never look at the dataset or selection directly.

use super::dataset::{Dataset, Edge};
use super::layout::{GridLayout, Point};
use super::letter::Letter;
use super::selection::Selection;

#[derive(Clone, Debug, PartialEq)]
pub struct NodeView {
	pub letter: Letter,
	pub center: Point,
	pub hovered: bool,
	pub selected: bool,
	/// Last letter of the current path.
	pub head: bool,
}

impl NodeView {
	pub fn is_highlighted(&self) -> bool {
		self.hovered || self.selected
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeStyle {
	/// Dashed default.
	Plain,
	/// Leads from the hovered letter to one of its listed neighbors.
	Hovered,
	/// Joins two consecutive letters of the selection.
	OnPath,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeView {
	pub edge: Edge,
	pub from: Point,
	pub to: Point,
	pub style: EdgeStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	pub width: f64,
	pub height: f64,
	pub node_radius: f64,
	pub show_edges: bool,
	pub nodes: Vec<NodeView>,
	pub edges: Vec<EdgeView>,
}

impl Scene {
	pub fn build(
		layout: &GridLayout,
		dataset: &Dataset,
		selection: &Selection,
		hover: Option<Letter>,
		show_edges: bool,
	) -> Self {
		let head = selection.head();
		let nodes = GridLayout::letters()
			.filter_map(|letter| {
				Some(NodeView {
					letter,
					center: layout.position(letter)?,
					hovered: hover == Some(letter),
					selected: selection.contains(letter),
					head: head == Some(letter),
				})
			})
			.collect();

		let path = selection.path_edges();
		let edges = dataset
			.edges()
			.into_iter()
			.filter_map(|edge| {
				let (a, b) = edge.endpoints();
				let (from, to) = (layout.position(a)?, layout.position(b)?);
				let style = if path.contains(&edge) {
					EdgeStyle::OnPath
				} else if hover
					.and_then(|h| edge.other(h).map(|other| dataset.links_to(h, other)))
					.unwrap_or(false)
				{
					EdgeStyle::Hovered
				} else {
					EdgeStyle::Plain
				};
				Some(EdgeView {
					edge,
					from,
					to,
					style,
				})
			})
			.collect();

		Self {
			width: layout.side(),
			height: layout.side(),
			node_radius: layout.node_radius(),
			show_edges,
			nodes,
			edges,
		}
	}

	pub fn node(&self, letter: Letter) -> Option<&NodeView> {
		self.nodes.iter().find(|n| n.letter == letter)
	}

	pub fn edge(&self, edge: Edge) -> Option<&EdgeView> {
		self.edges.iter().find(|e| e.edge == edge)
	}

	/// Edges the renderer should draw at all.
	pub fn visible_edges(&self) -> impl Iterator<Item = &EdgeView> {
		self.edges.iter().filter(move |_| self.show_edges)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn l(c: char) -> Letter {
		Letter::new(c).unwrap()
	}

	fn edge(a: char, b: char) -> Edge {
		Edge::new(l(a), l(b)).unwrap()
	}

	fn scene_for(path: &str, hover: Option<char>) -> Scene {
		let data = Dataset::sample();
		let mut selection = Selection::new();
		for c in path.chars() {
			selection.select(l(c), &data);
		}
		Scene::build(
			&GridLayout::default(),
			&data,
			&selection,
			hover.map(l),
			true,
		)
	}

	#[test]
	fn idle_scene_has_plain_nodes_and_edges() {
		let scene = scene_for("", None);
		assert_eq!(scene.nodes.len(), 16);
		assert_eq!(scene.edges.len(), 25);
		assert!(scene.nodes.iter().all(|n| !n.is_highlighted()));
		assert!(scene.edges.iter().all(|e| e.style == EdgeStyle::Plain));
		assert_eq!((scene.width, scene.height), (600.0, 600.0));
	}

	#[test]
	fn path_edges_are_marked() {
		let scene = scene_for("SOK", None);
		assert_eq!(scene.edge(edge('S', 'O')).unwrap().style, EdgeStyle::OnPath);
		assert_eq!(scene.edge(edge('O', 'K')).unwrap().style, EdgeStyle::OnPath);
		assert_eq!(scene.edge(edge('S', 'K')).unwrap().style, EdgeStyle::Plain);

		let on_path = scene
			.edges
			.iter()
			.filter(|e| e.style == EdgeStyle::OnPath)
			.count();
		assert_eq!(on_path, 2);
		assert!(scene.node(l('K')).unwrap().head);
		assert!(scene.node(l('S')).unwrap().selected);
		assert!(!scene.node(l('X')).unwrap().selected);
	}

	#[test]
	fn hover_marks_node_and_its_connections() {
		let scene = scene_for("", Some('H'));
		assert!(scene.node(l('H')).unwrap().hovered);
		assert_eq!(scene.edge(edge('H', 'Z')).unwrap().style, EdgeStyle::Hovered);
		let hovered = scene
			.edges
			.iter()
			.filter(|e| e.style == EdgeStyle::Hovered)
			.count();
		assert_eq!(hovered, 1);
	}

	#[test]
	fn path_style_wins_over_hover() {
		let scene = scene_for("SO", Some('S'));
		assert_eq!(scene.edge(edge('S', 'O')).unwrap().style, EdgeStyle::OnPath);
		assert_eq!(scene.edge(edge('S', 'K')).unwrap().style, EdgeStyle::Hovered);
	}

	#[test]
	fn edges_to_off_board_letters_are_skipped() {
		let data: Dataset = [(l('S'), vec![l('B'), l('O')])].into_iter().collect();
		let scene = Scene::build(
			&GridLayout::default(),
			&data,
			&Selection::new(),
			None,
			true,
		);
		assert_eq!(scene.edges.len(), 1);
		assert_eq!(scene.edges[0].edge, edge('S', 'O'));
	}

	#[test]
	fn hidden_edges_are_not_drawn() {
		let data = Dataset::sample();
		let scene = Scene::build(
			&GridLayout::default(),
			&data,
			&Selection::new(),
			None,
			false,
		);
		assert_eq!(scene.edges.len(), 25);
		assert_eq!(scene.visible_edges().count(), 0);
	}

	#[test]
	fn rebuilding_is_idempotent() {
		assert_eq!(scene_for("SOX", Some('D')), scene_for("SOX", Some('D')));
	}
}
