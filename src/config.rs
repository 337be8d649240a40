//! Runtime settings, with optional overrides from the page's query string
//! (`?data=other.json&renderer=svg&autoload=0&size=480`).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Which [`GridRenderer`](crate::components::letter_grid::GridRenderer)
/// draws the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RendererKind {
	#[default]
	Canvas,
	Svg,
}

impl RendererKind {
	pub fn toggled(self) -> Self {
		match self {
			RendererKind::Canvas => RendererKind::Svg,
			RendererKind::Svg => RendererKind::Canvas,
		}
	}
}

impl fmt::Display for RendererKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			RendererKind::Canvas => "canvas",
			RendererKind::Svg => "svg",
		})
	}
}

impl FromStr for RendererKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"canvas" => Ok(RendererKind::Canvas),
			"svg" | "dom" => Ok(RendererKind::Svg),
			other => Err(format!("unknown renderer '{}'", other)),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
	/// Largest board side in pixels; the board shrinks to fit its container.
	pub board_size: f64,
	/// Dataset fetched on startup.
	pub dataset_url: String,
	pub autoload: bool,
	pub renderer: RendererKind,
	/// How long a status banner stays up.
	pub status_timeout: Duration,
	/// How long the check button shows its valid/invalid state.
	pub check_flash: Duration,
}

impl Default for GridConfig {
	fn default() -> Self {
		Self {
			board_size: 600.0,
			dataset_url: "main.json".into(),
			autoload: true,
			renderer: RendererKind::Canvas,
			status_timeout: Duration::from_secs(3),
			check_flash: Duration::from_secs(1),
		}
	}
}

impl GridConfig {
	/// Defaults overridden by recognised query parameters. Unknown keys and
	/// unparseable values are ignored.
	pub fn from_query(search: &str) -> Self {
		let mut config = Self::default();
		for pair in search.trim_start_matches('?').split('&') {
			let mut it = pair.splitn(2, '=');
			let (Some(key), value) = (it.next(), it.next().unwrap_or("")) else {
				continue;
			};
			match key {
				"data" if !value.is_empty() => config.dataset_url = value.to_string(),
				"renderer" => {
					if let Ok(kind) = value.parse() {
						config.renderer = kind;
					}
				}
				"autoload" => config.autoload = !matches!(value, "0" | "false" | "no"),
				"size" => {
					if let Ok(size) = value.parse::<f64>() {
						if size.is_finite() && size > 0.0 {
							config.board_size = size;
						}
					}
				}
				_ => {}
			}
		}
		config
	}

	/// Reads overrides from `window.location.search` when running in a
	/// browser.
	pub fn from_location() -> Self {
		web_sys::window()
			.and_then(|w| w.location().search().ok())
			.map(|search| Self::from_query(&search))
			.unwrap_or_default()
	}
}
