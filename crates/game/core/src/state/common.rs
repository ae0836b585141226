use std::fmt;

/// Discrete grid position expressed in tile coordinates.
///
/// `x` is the column and `y` the row; `y` grows downwards, so "up" is `y - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by the given delta.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four movement directions on the grid.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardinalDirection {
    Up,
    Right,
    Down,
    Left,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::Up,
        CardinalDirection::Right,
        CardinalDirection::Down,
        CardinalDirection::Left,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::Up => (0, -1),
            CardinalDirection::Right => (1, 0),
            CardinalDirection::Down => (0, 1),
            CardinalDirection::Left => (-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            CardinalDirection::Up => CardinalDirection::Down,
            CardinalDirection::Right => CardinalDirection::Left,
            CardinalDirection::Down => CardinalDirection::Up,
            CardinalDirection::Left => CardinalDirection::Right,
        }
    }
}

/// Fixed bounds of the world grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub rows: u32,
    pub cols: u32,
}

impl GridDimensions {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.cols as i32
            && position.y < self.rows as i32
    }

    /// Number of cells in the grid.
    pub fn area(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Row-major index of an in-bounds position.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.cols as usize + position.x as usize)
    }

    /// Iterates every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows as i32)
            .flat_map(move |y| (0..self.cols as i32).map(move |x| Position::new(x, y)))
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_rejects_negative_and_overflowing_coordinates() {
        let dims = GridDimensions::new(3, 4);
        assert!(dims.contains(Position::new(3, 2)));
        assert!(!dims.contains(Position::new(4, 2)));
        assert!(!dims.contains(Position::new(0, 3)));
        assert!(!dims.contains(Position::new(-1, 0)));
    }

    #[test]
    fn positions_are_row_major() {
        let dims = GridDimensions::new(2, 3);
        let positions: Vec<_> = dims.positions().collect();
        assert_eq!(positions.len(), dims.area());
        assert_eq!(positions[1], Position::new(1, 0));
        assert_eq!(positions[3], Position::new(0, 1));
        assert_eq!(dims.index_of(Position::new(2, 1)), Some(5));
        assert_eq!(dims.index_of(Position::new(3, 1)), None);
    }
}
