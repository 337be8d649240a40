mod component;
pub mod loader;
mod render;
mod state;
mod svg;

pub use component::LetterGrid;
pub use render::{CanvasRenderer, GridRenderer};
pub use state::{DatasetSource, LetterGridState};
pub use svg::SvgRenderer;
