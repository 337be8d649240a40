use super::letter::Letter;

/// Rows and columns on the board.
pub const GRID_SIZE: usize = 4;

const fn grid_letter(c: char) -> Letter {
	match Letter::new(c) {
		Some(letter) => letter,
		None => panic!("grid letters must be uppercase ASCII"),
	}
}

/// The fixed board, row by row.
pub const GRID_LETTERS: [[Letter; GRID_SIZE]; GRID_SIZE] = [
	[grid_letter('S'), grid_letter('O'), grid_letter('P'), grid_letter('Y')],
	[grid_letter('K'), grid_letter('X'), grid_letter('D'), grid_letter('Q')],
	[grid_letter('H'), grid_letter('A'), grid_letter('R'), grid_letter('W')],
	[grid_letter('Z'), grid_letter('C'), grid_letter('U'), grid_letter('T')],
];

// Proportions of the classic 600px board.
const REFERENCE_CELL: f64 = 120.0;
const REFERENCE_RADIUS: f64 = 25.0;
const REFERENCE_SIDE: f64 = 600.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Screen geometry of the board: where each letter's node sits and how big
/// it is.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
	cell_size: f64,
	offset: f64,
	node_radius: f64,
}

impl Default for GridLayout {
	fn default() -> Self {
		Self::fit(REFERENCE_SIDE)
	}
}

impl GridLayout {
	/// Layout for a square board of `side` pixels, keeping the reference
	/// proportions: half a cell of margin on every side.
	pub fn fit(side: f64) -> Self {
		let cell_size = side.max(0.0) / (GRID_SIZE as f64 + 1.0);
		Self {
			cell_size,
			offset: cell_size / 2.0,
			node_radius: cell_size * REFERENCE_RADIUS / REFERENCE_CELL,
		}
	}

	pub fn cell_size(&self) -> f64 {
		self.cell_size
	}

	pub fn node_radius(&self) -> f64 {
		self.node_radius
	}

	/// Width and height of the board including margins.
	pub fn side(&self) -> f64 {
		2.0 * self.offset + GRID_SIZE as f64 * self.cell_size
	}

	/// All sixteen grid letters in row-major order.
	pub fn letters() -> impl Iterator<Item = Letter> {
		GRID_LETTERS.into_iter().flatten()
	}

	/// `(row, col)` of a grid letter.
	pub fn cell_of(letter: Letter) -> Option<(usize, usize)> {
		GRID_LETTERS.iter().enumerate().find_map(|(row, letters)| {
			letters
				.iter()
				.position(|&l| l == letter)
				.map(|col| (row, col))
		})
	}

	/// Center of `letter`'s node, or `None` for letters that are not on the
	/// board.
	pub fn position(&self, letter: Letter) -> Option<Point> {
		let (row, col) = Self::cell_of(letter)?;
		let half = self.cell_size / 2.0;
		Some(Point::new(
			self.offset + col as f64 * self.cell_size + half,
			self.offset + row as f64 * self.cell_size + half,
		))
	}

	/// The letter whose node contains `point`, if any.
	pub fn letter_at(&self, point: Point) -> Option<Letter> {
		Self::letters().find(|&letter| {
			self.position(letter)
				.is_some_and(|center| center.distance(point) <= self.node_radius)
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn letter(c: char) -> Letter {
		Letter::new(c).unwrap()
	}

	#[test]
	fn default_layout_matches_reference_board() {
		let layout = GridLayout::default();
		assert_eq!(layout.cell_size(), 120.0);
		assert_eq!(layout.node_radius(), 25.0);
		assert_eq!(layout.side(), 600.0);
		assert_eq!(layout.position(letter('S')), Some(Point::new(120.0, 120.0)));
		assert_eq!(layout.position(letter('Y')), Some(Point::new(480.0, 120.0)));
		assert_eq!(layout.position(letter('T')), Some(Point::new(480.0, 480.0)));
	}

	#[test]
	fn off_board_letters_have_no_position() {
		let layout = GridLayout::default();
		assert_eq!(layout.position(letter('B')), None);
		assert_eq!(GridLayout::cell_of(letter('M')), None);
	}

	#[test]
	fn every_grid_letter_has_a_distinct_position() {
		let layout = GridLayout::default();
		let points: Vec<Point> = GridLayout::letters()
			.map(|l| layout.position(l).unwrap())
			.collect();
		assert_eq!(points.len(), 16);
		for (i, a) in points.iter().enumerate() {
			for b in &points[i + 1..] {
				assert!(a.distance(*b) > 0.0);
			}
		}
	}

	#[test]
	fn hit_test_respects_node_radius() {
		let layout = GridLayout::default();
		assert_eq!(layout.letter_at(Point::new(120.0, 120.0)), Some(letter('S')));
		assert_eq!(layout.letter_at(Point::new(145.0, 120.0)), Some(letter('S')));
		assert_eq!(layout.letter_at(Point::new(146.0, 120.0)), None);
		assert_eq!(layout.letter_at(Point::new(360.0, 240.0)), Some(letter('D')));
		assert_eq!(layout.letter_at(Point::new(0.0, 0.0)), None);
	}

	#[test]
	fn fit_scales_proportionally() {
		let layout = GridLayout::fit(300.0);
		assert_eq!(layout.cell_size(), 60.0);
		assert_eq!(layout.node_radius(), 12.5);
		assert_eq!(layout.side(), 300.0);
		assert_eq!(layout.position(letter('T')), Some(Point::new(240.0, 240.0)));
	}
}
