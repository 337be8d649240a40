use std::collections::{BTreeMap, HashMap};

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::render::{
	DASH, EDGE_LAYERS, GridRenderer, edge_stroke, font_size, node_fill, node_stroke, paint_order,
};
use crate::grid::{Edge, EdgeStyle, Letter, NodeView, Scene};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

struct NodeHandle {
	circle: Element,
	label: Element,
}

/// Retained-mode renderer: one SVG element per node and per edge, updated in
/// place. Elements are found through the maps, never by querying the DOM.
pub struct SvgRenderer {
	document: Document,
	root: Element,
	edge_layer: Element,
	/// One `<g>` per edge style inside `edge_layer`, in paint order.
	style_layers: Vec<Element>,
	node_layer: Element,
	nodes: HashMap<Letter, NodeHandle>,
	edges: BTreeMap<Edge, Element>,
}

impl SvgRenderer {
	pub fn mount(container: &Element) -> Result<Self, JsValue> {
		let document = container
			.owner_document()
			.ok_or_else(|| JsValue::from_str("container has no document"))?;
		let root = document.create_element_ns(Some(SVG_NS), "svg")?;
		root.set_attribute("class", "letter-grid-svg")?;
		let edge_layer = document.create_element_ns(Some(SVG_NS), "g")?;
		edge_layer.set_attribute("class", "connections")?;
		let mut style_layers = Vec::with_capacity(EDGE_LAYERS);
		for _ in 0..EDGE_LAYERS {
			let layer = document.create_element_ns(Some(SVG_NS), "g")?;
			edge_layer.append_child(&layer)?;
			style_layers.push(layer);
		}
		let node_layer = document.create_element_ns(Some(SVG_NS), "g")?;
		node_layer.set_attribute("class", "letters")?;
		root.append_child(&edge_layer)?;
		root.append_child(&node_layer)?;
		container.append_child(&root)?;

		Ok(Self {
			document,
			root,
			edge_layer,
			style_layers,
			node_layer,
			nodes: HashMap::new(),
			edges: BTreeMap::new(),
		})
	}

	fn create(&self, tag: &str, parent: &Element) -> Result<Element, JsValue> {
		let el = self.document.create_element_ns(Some(SVG_NS), tag)?;
		parent.append_child(&el)?;
		Ok(el)
	}

	/// Rebuilds the line elements when the set of edges changed, e.g. after a
	/// new dataset loaded.
	fn sync_edges(&mut self, scene: &Scene) -> Result<(), JsValue> {
		let unchanged = self.edges.len() == scene.edges.len()
			&& scene.edges.iter().all(|e| self.edges.contains_key(&e.edge));
		if unchanged {
			return Ok(());
		}
		for (_, line) in std::mem::take(&mut self.edges) {
			line.remove();
		}
		for view in &scene.edges {
			let line = self.create("line", &self.style_layers[0])?;
			let (a, b) = view.edge.endpoints();
			line.set_attribute("data-from", &a.to_string())?;
			line.set_attribute("data-to", &b.to_string())?;
			self.edges.insert(view.edge, line);
		}
		Ok(())
	}

	fn node_handle(&mut self, letter: Letter) -> Result<&NodeHandle, JsValue> {
		if !self.nodes.contains_key(&letter) {
			let group = self.create("g", &self.node_layer)?;
			group.set_attribute("class", "letter")?;
			group.set_attribute("data-letter", &letter.to_string())?;
			let circle = self.create("circle", &group)?;
			let label = self.create("text", &group)?;
			label.set_attribute("text-anchor", "middle")?;
			label.set_attribute("dominant-baseline", "central")?;
			label.set_attribute("font-family", "Arial")?;
			label.set_attribute("font-weight", "bold")?;
			label.set_text_content(Some(&letter.to_string()));
			self.nodes.insert(letter, NodeHandle { circle, label });
		}
		self.nodes
			.get(&letter)
			.ok_or_else(|| JsValue::from_str("node handle missing"))
	}

	fn update_node(&mut self, node: &NodeView, scene: &Scene) -> Result<(), JsValue> {
		let handle = self.node_handle(node.letter)?;
		let (cx, cy) = (node.center.x.to_string(), node.center.y.to_string());

		let circle = &handle.circle;
		circle.set_attribute("cx", &cx)?;
		circle.set_attribute("cy", &cy)?;
		circle.set_attribute("r", &scene.node_radius.to_string())?;
		circle.set_attribute("fill", node_fill(node))?;
		circle.set_attribute("stroke", node_stroke(node))?;
		circle.set_attribute("stroke-width", "3")?;

		let label = &handle.label;
		label.set_attribute("x", &cx)?;
		label.set_attribute("y", &cy)?;
		label.set_attribute("font-size", &font_size(scene).to_string())?;
		label.set_attribute("fill", if node.hovered { "#333" } else { "white" })?;

		let classes = circle.class_list();
		classes.toggle_with_force("active", node.selected)?;
		classes.toggle_with_force("hovered", node.hovered)?;
		Ok(())
	}
}

impl GridRenderer for SvgRenderer {
	fn render(&mut self, scene: &Scene) -> Result<(), JsValue> {
		let (w, h) = (scene.width.to_string(), scene.height.to_string());
		self.root.set_attribute("width", &w)?;
		self.root.set_attribute("height", &h)?;
		self.root
			.set_attribute("viewBox", &format!("0 0 {} {}", scene.width, scene.height))?;

		self.sync_edges(scene)?;
		self.edge_layer.set_attribute(
			"visibility",
			if scene.show_edges { "visible" } else { "hidden" },
		)?;
		for view in &scene.edges {
			let Some(line) = self.edges.get(&view.edge) else {
				continue;
			};
			let layer = &self.style_layers[paint_order(view.style)];
			if line.parent_element().as_ref() != Some(layer) {
				layer.append_child(line)?;
			}
			let stroke = edge_stroke(view.style);
			line.set_attribute("x1", &view.from.x.to_string())?;
			line.set_attribute("y1", &view.from.y.to_string())?;
			line.set_attribute("x2", &view.to.x.to_string())?;
			line.set_attribute("y2", &view.to.y.to_string())?;
			line.set_attribute("stroke", stroke.color)?;
			line.set_attribute("stroke-width", &stroke.width.to_string())?;
			if stroke.dashed {
				line.set_attribute("stroke-dasharray", &format!("{} {}", DASH, DASH))?;
			} else {
				line.remove_attribute("stroke-dasharray")?;
			}
			line.set_attribute("class", "connection-line")?;
			line.class_list()
				.toggle_with_force("active", view.style == EdgeStyle::OnPath)?;
		}

		for node in &scene.nodes {
			self.update_node(node, scene)?;
		}
		Ok(())
	}

	fn detach(&mut self) {
		self.root.remove();
		self.nodes.clear();
		self.edges.clear();
	}
}
