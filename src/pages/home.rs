use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};
use web_sys::HtmlInputElement;

use crate::components::letter_grid::{DatasetSource, LetterGrid, LetterGridState, loader};
use crate::components::status::{StatusBanner, StatusMessage, Transient, flash};
use crate::config::GridConfig;
use crate::grid::{Dataset, DatasetError, PathCheck, SequenceError};

/// Outcome of the last "Check" press, shown on the button for a moment.
#[derive(Clone, Debug, PartialEq)]
struct CheckFeedback {
	valid: bool,
	detail: String,
}

impl CheckFeedback {
	fn from_check(input: &str, check: Result<PathCheck, SequenceError>) -> Option<Self> {
		let (valid, detail) = match check {
			Ok(PathCheck::Valid) => (true, format!("{} is a valid path", input.trim().to_uppercase())),
			Ok(PathCheck::Broken { from, to, .. }) => (false, format!("{} does not lead to {}", from, to)),
			Ok(PathCheck::Empty) | Err(SequenceError::Empty) => return None,
			Err(err) => (false, err.to_string()),
		};
		Some(Self { valid, detail })
	}
}

fn finish_load(
	state: RwSignal<LetterGridState>,
	banner: RwSignal<Transient<StatusMessage>>,
	timeout: Duration,
	result: Result<Dataset, DatasetError>,
	source: DatasetSource,
) {
	if let Some(message) = state.try_update(|s| s.apply_load(result, source)) {
		flash(banner, message, timeout);
	}
}

fn load_from_url(
	state: RwSignal<LetterGridState>,
	banner: RwSignal<Transient<StatusMessage>>,
	timeout: Duration,
	url: String,
) {
	spawn_local(async move {
		let result = loader::fetch_dataset(&url).await;
		finish_load(state, banner, timeout, result, DatasetSource::Url(url));
	});
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = GridConfig::from_location();
	let state = RwSignal::new(LetterGridState::new(&config));
	let renderer = RwSignal::new(config.renderer);
	let banner = RwSignal::new(Transient::<StatusMessage>::default());
	let check = RwSignal::new(Transient::<CheckFeedback>::default());
	let sequence = RwSignal::new(String::new());
	let file_ref = NodeRef::<leptos::html::Input>::new();
	let (status_timeout, check_flash) = (config.status_timeout, config.check_flash);
	let dataset_url = config.dataset_url.clone();

	if config.autoload {
		load_from_url(state, banner, status_timeout, config.dataset_url.clone());
	}

	let on_file_change = move |ev: leptos::ev::Event| {
		let input: HtmlInputElement = event_target(&ev);
		let Some(file) = input.files().and_then(|files| files.get(0)) else {
			return;
		};
		// Allow picking the same file again.
		input.set_value("");
		spawn_local(async move {
			let result = loader::read_dataset_file(&file).await;
			finish_load(state, banner, status_timeout, result, DatasetSource::File(file.name()));
		});
	};

	let run_check = move || {
		let input = sequence.get_untracked();
		let result = state.with_untracked(|s| s.check_sequence(&input));
		match &result {
			Ok(verdict) => info!("sequence check {:?}: {:?}", input, verdict),
			Err(err) => warn!("sequence check {:?}: {}", input, err),
		}
		if let Some(feedback) = CheckFeedback::from_check(&input, result) {
			flash(check, feedback, check_flash);
		}
	};

	let check_state = move |valid: bool| {
		move || check.with(|c| c.get().is_some_and(|f| f.valid == valid))
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="container">
				<h1>"Letter Grid Visualizer"</h1>

				<div class="controls">
					<input
						type="file"
						accept=".json"
						style="display: none;"
						node_ref=file_ref
						on:change=on_file_change
					/>
					<button
						class="file-input"
						on:click=move |_| {
							if let Some(input) = file_ref.get() {
								input.click();
							}
						}
					>
						"Load JSON File"
					</button>
					<button on:click=move |_| {
						load_from_url(state, banner, status_timeout, dataset_url.clone())
					}>"Reload " {config.dataset_url.clone()}</button>
					<button on:click=move |_| {
						state.update(|s| {
							s.toggle_edges();
						})
					}>"Toggle Connections"</button>
					<button on:click=move |_| state.update(LetterGridState::clear_selection)>
						"Clear Selection"
					</button>
					<button on:click=move |_| renderer.update(|k| *k = k.toggled())>
						{move || format!("Renderer: {}", renderer.get())}
					</button>
				</div>

				<StatusBanner banner=banner />

				<LetterGrid state=state renderer=renderer />

				<p class="selection">
					{move || {
						state
							.with(|s| {
								s.selection().letters().iter().map(|l| l.as_char()).collect::<String>()
							})
					}}
				</p>

				<form
					class="sequence"
					on:submit=move |ev: leptos::ev::SubmitEvent| {
						ev.prevent_default();
						run_check();
					}
				>
					<input
						type="text"
						placeholder="e.g. SOK"
						prop:value=move || sequence.get()
						on:input=move |ev| sequence.set(event_target_value(&ev))
					/>
					<button type="submit" class:valid=check_state(true) class:invalid=check_state(false)>
						"Check"
					</button>
					<span class="check-detail">
						{move || check.with(|c| c.get().map(|f| f.detail.clone()))}
					</span>
				</form>

				<p class="source">{move || state.with(|s| format!("Data: {}", s.source()))}</p>
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::grid::Letter;

	#[test]
	fn feedback_for_valid_and_broken_paths() {
		let ok = CheckFeedback::from_check("sok", Ok(PathCheck::Valid)).unwrap();
		assert!(ok.valid);
		assert_eq!(ok.detail, "SOK is a valid path");

		let broken = CheckFeedback::from_check(
			"ZZ",
			Ok(PathCheck::Broken {
				index: 0,
				from: Letter::new('Z').unwrap(),
				to: Letter::new('Z').unwrap(),
			}),
		)
		.unwrap();
		assert!(!broken.valid);
		assert_eq!(broken.detail, "Z does not lead to Z");
	}

	#[test]
	fn blank_input_gives_no_feedback() {
		assert_eq!(CheckFeedback::from_check("  ", Err(SequenceError::Empty)), None);
	}

	#[test]
	fn non_letters_are_invalid() {
		let fb = CheckFeedback::from_check(
			"S1",
			Err(SequenceError::NotALetter { index: 1, ch: '1' }),
		)
		.unwrap();
		assert!(!fb.valid);
		assert_eq!(fb.detail, "'1' at position 1 is not a letter");
	}
}
