use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use super::loader::js_message;
use super::render::{CanvasRenderer, GridRenderer};
use super::state::LetterGridState;
use super::svg::SvgRenderer;
use crate::config::RendererKind;
use crate::grid::Point;

type ActiveRenderer = Option<(RendererKind, Box<dyn GridRenderer>)>;

fn mount_renderer(kind: RendererKind, container: &Element) -> Result<Box<dyn GridRenderer>, JsValue> {
	Ok(match kind {
		RendererKind::Canvas => Box::new(CanvasRenderer::mount(container)?),
		RendererKind::Svg => Box::new(SvgRenderer::mount(container)?),
	})
}

#[component]
pub fn LetterGrid(
	state: RwSignal<LetterGridState>,
	#[prop(into)] renderer: Signal<RendererKind>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let active: Rc<RefCell<ActiveRenderer>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	// Fit the board to its container once mounted, and again on every
	// window resize.
	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let available = container.client_width() as f64;
		state.update(|s| {
			s.resize(available);
		});
		if resize_cb.borrow().is_some() {
			return;
		}

		let container_resize = container.clone();
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let available = container_resize.client_width() as f64;
			let changed = state.with_untracked(|s| s.fitted_side(available) != s.layout().side());
			if changed {
				state.update(|s| {
					s.resize(available);
				});
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), resize_cb.borrow().as_ref()) {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	});

	// Redraw whenever the state or the renderer choice changes.
	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let kind = renderer.get();
		let scene = state.with(LetterGridState::scene);

		let mut active = active.borrow_mut();
		if active.as_ref().map(|(k, _)| *k) != Some(kind) {
			if let Some((_, mut old)) = active.take() {
				old.detach();
			}
			match mount_renderer(kind, &container) {
				Ok(r) => {
					info!("letter grid: drawing with the {} renderer", kind);
					*active = Some((kind, r));
				}
				Err(err) => {
					warn!("letter grid: could not mount {} renderer: {}", kind, js_message(&err));
					return;
				}
			}
		}
		if let Some((_, r)) = active.as_mut() {
			if let Err(err) = r.render(&scene) {
				warn!("letter grid: render failed: {}", js_message(&err));
			}
		}
	});

	let pointer = move |ev: &MouseEvent| -> Option<Point> {
		let container = container_ref.get_untracked()?;
		// The board is centered inside the container.
		let rect = match container.first_element_child() {
			Some(board) => board.get_bounding_client_rect(),
			None => container.get_bounding_client_rect(),
		};
		Some(Point::new(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let on_mousemove = move |ev: MouseEvent| {
		let Some(point) = pointer(&ev) else {
			return;
		};
		// Only notify when the hovered letter actually changes.
		let hovered = state.with_untracked(|s| s.layout().letter_at(point));
		if state.with_untracked(|s| s.hover() != hovered) {
			state.update(|s| {
				s.set_hover(hovered);
			});
		}
	};

	let on_click = move |ev: MouseEvent| {
		let Some(point) = pointer(&ev) else {
			return;
		};
		if state.with_untracked(|s| s.layout().letter_at(point).is_some()) {
			state.update(|s| {
				s.click_at(point);
			});
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		if state.with_untracked(|s| s.hover().is_some()) {
			state.update(|s| {
				s.set_hover(None);
			});
		}
	};

	let cursor = move || {
		if state.with(|s| s.hover().is_some()) {
			"pointer"
		} else {
			"default"
		}
	};

	view! {
		<div
			node_ref=container_ref
			class="letter-grid"
			on:mousemove=on_mousemove
			on:click=on_click
			on:mouseleave=on_mouseleave
			style:cursor=cursor
		/>
	}
}
