use rand::Rng;

use super::heading::Heading;

/// A cell on the board, addressed by (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The neighbouring cell one step along `heading`
    pub fn step(&self, heading: Heading) -> Self {
        let (dc, dr) = heading.delta();
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

/// Board geometry in cells. The outermost ring is the wall; everything
/// strictly inside it is playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// True for cells on the wall ring
    pub fn is_wall(&self, cell: Cell) -> bool {
        cell.col == 0
            || cell.row == 0
            || cell.col == self.width - 1
            || cell.row == self.height - 1
    }

    /// True for playable cells strictly inside the wall ring
    pub fn is_interior(&self, cell: Cell) -> bool {
        cell.col > 0 && cell.col < self.width - 1 && cell.row > 0 && cell.row < self.height - 1
    }

    /// A uniformly random interior cell
    pub fn random_interior(&self, rng: &mut impl Rng) -> Cell {
        Cell::new(
            rng.gen_range(1..self.width - 1),
            rng.gen_range(1..self.height - 1),
        )
    }

    /// All interior cells, row by row
    pub fn interior_cells(&self) -> impl Iterator<Item = Cell> {
        let (width, height) = (self.width, self.height);
        (1..height - 1).flat_map(move |row| (1..width - 1).map(move |col| Cell::new(col, row)))
    }
}
