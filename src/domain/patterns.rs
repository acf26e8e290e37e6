use super::Grid;

/// Fixed arrangement of live cells that can be stamped onto a grid.
/// Coordinates are relative to the pattern's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0)
    }

    /// Top-left corner that centers the pattern on (x, y)
    pub fn origin_centered_on(&self, x: i64, y: i64) -> (i64, i64) {
        (x - self.width() as i64 / 2, y - self.height() as i64 / 2)
    }

    /// Absolute positions of the pattern's cells with its corner at (x, y)
    pub fn cells_at(&self, x: i64, y: i64) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.cells
            .iter()
            .map(move |&(dx, dy)| (x + dx as i64, y + dy as i64))
    }

    /// Paint the pattern alive with its corner at (x, y); off-grid cells are dropped
    pub fn place_on(&self, grid: &mut Grid, x: i64, y: i64) {
        self.cells_at(x, y).for_each(|(cx, cy)| grid.set_cell_alive(cx, cy));
    }

    pub fn place_centered(&self, grid: &mut Grid, x: i64, y: i64) {
        let (ox, oy) = self.origin_centered_on(x, y);
        self.place_on(grid, ox, oy);
    }
}

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    description: "period 2 oscillator",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    description: "diagonal spaceship, period 4",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    description: "period 2 oscillator",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    description: "period 2 oscillator",
    cells: &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
};

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    description: "still life",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    description: "long-lived methuselah",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

/// Patterns offered for placement, in selection order
pub static LIBRARY: [Pattern; 6] = [BLINKER, GLIDER, TOAD, BEACON, BLOCK, R_PENTOMINO];
