use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::grid::{EdgeStyle, EdgeView, NodeView, Scene};

/// Something that can draw a [`Scene`] into a container element. Every call
/// to `render` is a full redraw.
pub trait GridRenderer {
	fn render(&mut self, scene: &Scene) -> Result<(), JsValue>;

	/// Removes everything the renderer added to the page.
	fn detach(&mut self);
}

pub(super) struct Stroke {
	pub color: &'static str,
	pub width: f64,
	pub dashed: bool,
}

pub(super) const DASH: f64 = 5.0;

/// Number of distinct edge styles, one paint layer each.
pub(super) const EDGE_LAYERS: usize = 3;

/// Edges with a higher rank are painted later, so a highlighted line is
/// never covered by a plain one.
pub(super) fn paint_order(style: EdgeStyle) -> usize {
	match style {
		EdgeStyle::Plain => 0,
		EdgeStyle::Hovered => 1,
		EdgeStyle::OnPath => 2,
	}
}

pub(super) fn edge_stroke(style: EdgeStyle) -> Stroke {
	match style {
		EdgeStyle::Plain => Stroke {
			color: "#666",
			width: 2.0,
			dashed: true,
		},
		EdgeStyle::Hovered => Stroke {
			color: "#ff4444",
			width: 3.0,
			dashed: false,
		},
		EdgeStyle::OnPath => Stroke {
			color: "#007bff",
			width: 4.0,
			dashed: false,
		},
	}
}

pub(super) fn node_fill(node: &NodeView) -> &'static str {
	if node.hovered {
		"#ffeb3b"
	} else if node.head {
		"#0056b3"
	} else if node.selected {
		"#007bff"
	} else {
		"#4CAF50"
	}
}

pub(super) fn node_stroke(node: &NodeView) -> &'static str {
	if node.hovered {
		"#f57c00"
	} else if node.is_highlighted() {
		"#003d80"
	} else {
		"#388E3C"
	}
}

pub(super) fn font_size(scene: &Scene) -> f64 {
	(scene.node_radius * 0.8).round()
}

/// Immediate-mode renderer on a 2D canvas.
pub struct CanvasRenderer {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
	pub fn mount(container: &Element) -> Result<Self, JsValue> {
		let document = container
			.owner_document()
			.ok_or_else(|| JsValue::from_str("container has no document"))?;
		let canvas: HtmlCanvasElement = document
			.create_element("canvas")?
			.dyn_into()
			.map_err(JsValue::from)?;
		canvas.set_class_name("letter-grid-canvas");
		container.append_child(&canvas)?;

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or_else(|| JsValue::from_str("2d context unavailable"))?
			.dyn_into()
			.map_err(JsValue::from)?;
		Ok(Self { canvas, ctx })
	}

	fn draw_edge(&self, edge: &EdgeView) -> Result<(), JsValue> {
		let ctx = &self.ctx;
		let stroke = edge_stroke(edge.style);
		let dash = if stroke.dashed {
			js_sys::Array::of2(&JsValue::from_f64(DASH), &JsValue::from_f64(DASH))
		} else {
			js_sys::Array::new()
		};
		ctx.set_line_dash(&dash)?;
		ctx.set_stroke_style_str(stroke.color);
		ctx.set_line_width(stroke.width);
		ctx.begin_path();
		ctx.move_to(edge.from.x, edge.from.y);
		ctx.line_to(edge.to.x, edge.to.y);
		ctx.stroke();
		Ok(())
	}

	fn draw_node(&self, node: &NodeView, scene: &Scene) -> Result<(), JsValue> {
		let ctx = &self.ctx;
		let (x, y) = (node.center.x, node.center.y);

		ctx.begin_path();
		ctx.arc(x, y, scene.node_radius, 0.0, 2.0 * PI)?;
		ctx.set_fill_style_str(node_fill(node));
		ctx.fill();
		ctx.set_stroke_style_str(node_stroke(node));
		ctx.set_line_width(3.0);
		ctx.stroke();

		ctx.set_fill_style_str(if node.hovered { "#333" } else { "white" });
		ctx.set_font(&format!("bold {}px Arial", font_size(scene)));
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		ctx.fill_text(&node.letter.to_string(), x, y)
	}
}

impl GridRenderer for CanvasRenderer {
	fn render(&mut self, scene: &Scene) -> Result<(), JsValue> {
		let (w, h) = (scene.width.round() as u32, scene.height.round() as u32);
		if self.canvas.width() != w || self.canvas.height() != h {
			self.canvas.set_width(w);
			self.canvas.set_height(h);
		}
		self.ctx.clear_rect(0.0, 0.0, scene.width, scene.height);

		// Plain edges first so highlighted ones are never painted over.
		let mut edges: Vec<&EdgeView> = scene.visible_edges().collect();
		edges.sort_by_key(|e| paint_order(e.style));
		for edge in edges {
			self.draw_edge(edge)?;
		}
		self.ctx.set_line_dash(&js_sys::Array::new())?;

		for node in &scene.nodes {
			self.draw_node(node, scene)?;
		}
		Ok(())
	}

	fn detach(&mut self) {
		self.canvas.remove();
	}
}
