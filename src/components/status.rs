//! Short-lived feedback: the status banner and anything else that should
//! disappear on its own after a while.

use std::time::Duration;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
	Success,
	Error,
}

impl StatusKind {
	pub fn css_class(self) -> &'static str {
		match self {
			StatusKind::Success => "success",
			StatusKind::Error => "error",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
	pub kind: StatusKind,
	pub text: String,
}

impl StatusMessage {
	pub fn success(text: impl Into<String>) -> Self {
		Self {
			kind: StatusKind::Success,
			text: text.into(),
		}
	}

	pub fn error(text: impl Into<String>) -> Self {
		Self {
			kind: StatusKind::Error,
			text: text.into(),
		}
	}
}

/// A value that is shown until a timer expires it. Each `show` hands out a
/// ticket; only the ticket of the value currently on screen can expire it,
/// so an old timer never hides a newer message.
#[derive(Clone, Debug)]
pub struct Transient<T> {
	current: Option<T>,
	generation: u64,
}

impl<T> Default for Transient<T> {
	fn default() -> Self {
		Self {
			current: None,
			generation: 0,
		}
	}
}

impl<T> Transient<T> {
	pub fn show(&mut self, value: T) -> u64 {
		self.generation += 1;
		self.current = Some(value);
		self.generation
	}

	/// Returns whether the value was hidden.
	pub fn expire(&mut self, ticket: u64) -> bool {
		if ticket != self.generation || self.current.is_none() {
			return false;
		}
		self.current = None;
		true
	}

	pub fn get(&self) -> Option<&T> {
		self.current.as_ref()
	}
}

/// Shows `value` now and schedules it to disappear after `duration`.
pub fn flash<T>(signal: RwSignal<Transient<T>>, value: T, duration: Duration)
where
	T: Send + Sync + 'static,
{
	let Some(ticket) = signal.try_update(|t| t.show(value)) else {
		return;
	};
	set_timeout(
		move || {
			signal.try_update(|t| t.expire(ticket));
		},
		duration,
	);
}

#[component]
pub fn StatusBanner(banner: RwSignal<Transient<StatusMessage>>) -> impl IntoView {
	move || {
		banner.with(|b| b.get().cloned()).map(|message| {
			view! {
				<div class=format!("status {}", message.kind.css_class())>{message.text}</div>
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn expire_hides_current_value() {
		let mut t = Transient::default();
		let ticket = t.show(StatusMessage::success("ok"));
		assert_eq!(t.get().map(|m| m.kind), Some(StatusKind::Success));
		assert!(t.expire(ticket));
		assert!(t.get().is_none());
		assert!(!t.expire(ticket));
	}

	#[test]
	fn stale_ticket_keeps_newer_value() {
		let mut t = Transient::default();
		let first = t.show(StatusMessage::success("loaded"));
		let second = t.show(StatusMessage::error("broken"));
		assert!(!t.expire(first));
		assert_eq!(t.get().map(|m| m.text.as_str()), Some("broken"));
		assert!(t.expire(second));
	}

	#[test]
	fn status_classes() {
		assert_eq!(StatusKind::Success.css_class(), "success");
		assert_eq!(StatusMessage::error("x").kind.css_class(), "error");
	}
}
