pub mod letter_grid;
pub mod status;
