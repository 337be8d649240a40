//! Letter grid model: the fixed 4×4 layout, the adjacency dataset, and the
//! path selection rules built on top of them.
//!
//! Nothing in here touches the DOM, so the whole module is testable on the
//! host.

mod dataset;
mod error;
mod layout;
mod letter;
mod scene;
mod selection;
mod sequence;

pub use dataset::{Dataset, Edge};
pub use error::{DatasetError, SequenceError};
pub use layout::{GRID_LETTERS, GRID_SIZE, GridLayout, Point};
pub use letter::Letter;
pub use scene::{EdgeStyle, EdgeView, NodeView, Scene};
pub use selection::{SelectOutcome, Selection, SelectionState};
pub use sequence::{PathCheck, parse_sequence, validate_sequence};
