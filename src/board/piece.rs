//! Pieces, cells, and movement directions.
//!
//! A piece is a placed tile with a position and an image identity. Cells are
//! addressed as `(row, col)` with the origin in the top-left corner.

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Returns the neighbouring cell one step in `dir`, or `None` when the
    /// step would leave a `rows` x `cols` board.
    pub fn step(self, dir: Direction, rows: usize, cols: usize) -> Option<Cell> {
        let (row, col) = match dir {
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col + 1),
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row + 1, self.col),
        };
        if row < rows && col < cols {
            Some(Cell { row, col })
        } else {
            None
        }
    }
}

/// A placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub cell: Cell,
    /// Index into the image catalog.
    pub image: usize,
    /// Set once the piece has been part of a run; cleared only on reset.
    pub matched: bool,
}

impl Piece {
    pub const fn new(cell: Cell, image: usize) -> Self {
        Piece {
            cell,
            image,
            matched: false,
        }
    }
}

/// A direction a selected piece can be moved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

impl Direction {
    /// Parses a direction from a short name (`left`) or a browser key name
    /// (`ArrowLeft`). Matching is case-insensitive.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key.to_ascii_lowercase().as_str() {
            "left" | "arrowleft" | "h" => Some(Direction::Left),
            "right" | "arrowright" | "l" => Some(Direction::Right),
            "up" | "arrowup" | "k" => Some(Direction::Up),
            "down" | "arrowdown" | "j" => Some(Direction::Down),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_inside_board() {
        let c = Cell::new(1, 1);
        assert_eq!(c.step(Direction::Left, 4, 8), Some(Cell::new(1, 0)));
        assert_eq!(c.step(Direction::Right, 4, 8), Some(Cell::new(1, 2)));
        assert_eq!(c.step(Direction::Up, 4, 8), Some(Cell::new(0, 1)));
        assert_eq!(c.step(Direction::Down, 4, 8), Some(Cell::new(2, 1)));
    }

    #[test]
    fn step_off_edges() {
        assert_eq!(Cell::new(0, 0).step(Direction::Left, 4, 8), None);
        assert_eq!(Cell::new(0, 0).step(Direction::Up, 4, 8), None);
        assert_eq!(Cell::new(3, 7).step(Direction::Right, 4, 8), None);
        assert_eq!(Cell::new(3, 7).step(Direction::Down, 4, 8), None);
    }

    #[test]
    fn direction_from_key_names() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("right"), Some(Direction::Right));
        assert_eq!(Direction::from_key("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_key("arrowdown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("sideways"), None);
    }

    #[test]
    fn direction_name_roundtrip() {
        for dir in ALL_DIRECTIONS {
            assert_eq!(Direction::from_key(dir.name()), Some(dir));
        }
    }

    #[test]
    fn new_piece_is_unmatched() {
        let p = Piece::new(Cell::new(2, 3), 4);
        assert!(!p.matched);
        assert_eq!(p.image, 4);
    }
}
