//! Browser entry point.

use leptos::prelude::*;
use letter_grid::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
