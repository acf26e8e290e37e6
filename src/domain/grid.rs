use rand::Rng;

use super::{Cell, GridError, RuleError, RuleTable, rules::MAX_NEIGHBORS};

/// Relative positions of the 8 neighbors examined for every cell
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grid manages the 2D cellular automaton board and its rule table.
/// Edges are hard: positions outside the board always count as dead.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    /// Next generation is written here, then swapped with `cells`
    scratch: Vec<Cell>,
    rules: RuleTable,
}

impl Grid {
    /// Create a new all-dead grid governed by the given rule specification
    pub fn new(width: usize, height: usize, rule_spec: &str) -> Result<Self, GridError> {
        let rules = RuleTable::parse(rule_spec)?;
        Self::with_rule_table(width, height, rules)
    }

    /// Create a new all-dead grid using the default decay rules
    pub fn with_default_rules(width: usize, height: usize) -> Result<Self, GridError> {
        Self::with_rule_table(width, height, RuleTable::default())
    }

    /// Create a new all-dead grid from an already parsed table
    pub fn with_rule_table(width: usize, height: usize, rules: RuleTable) -> Result<Self, GridError> {
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;

        let missing = rules.missing_counts(MAX_NEIGHBORS);
        if !missing.is_empty() {
            tracing::warn!(?missing, "rule table does not cover every neighbor count");
        }
        tracing::debug!(width, height, "created grid");

        Ok(Self::blank(width, height, len, rules))
    }

    /// `len` must equal `width * height`
    fn blank(width: usize, height: usize, len: usize, rules: RuleTable) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::DEAD; len],
            scratch: vec![Cell::DEAD; len],
            rules,
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn state_at(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Overwrite a cell with an arbitrary state; out-of-range writes are ignored
    pub fn set_state(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Paint a cell alive (state 1).
    /// Takes signed coordinates because they come straight from mapped
    /// mouse positions; anything off the board is silently ignored.
    pub fn set_cell_alive(&mut self, x: i64, y: i64) {
        if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
            self.set_state(x, y, Cell::ALIVE);
        }
    }

    /// Count neighbors with a non-zero state, treating off-grid positions as dead
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u32 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.state_at(nx, ny)
            })
            .filter(|cell| cell.is_alive())
            .count() as u32
    }

    /// State the cell at (x, y) takes next generation, computed from the
    /// current board only. `None` for off-grid positions.
    pub fn next_state(&self, x: usize, y: usize) -> Option<Result<Cell, RuleError>> {
        self.state_at(x, y).map(|current| self.evolve_cell(x, y, current))
    }

    fn evolve_cell(&self, x: usize, y: usize, current: Cell) -> Result<Cell, RuleError> {
        let neighbors = self.count_live_neighbors(x, y);
        self.rules.lookup(neighbors, current.is_alive())
    }

    /// Advance one generation.
    ///
    /// Every next state is computed into the scratch buffer from the
    /// pre-advance board, then the buffers are swapped. On a failed lookup
    /// the board is left exactly as it was.
    pub fn advance(&mut self) -> Result<(), RuleError> {
        let mut next = std::mem::take(&mut self.scratch);

        let result = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .zip(self.cells.iter().zip(next.iter_mut()))
            .try_for_each(|((x, y), (&current, slot))| {
                self.evolve_cell(x, y, current).map(|cell| *slot = cell)
            });

        match result {
            Ok(()) => {
                self.scratch = std::mem::replace(&mut self.cells, next);
                tracing::trace!(population = self.population(), "advanced generation");
                Ok(())
            }
            Err(err) => {
                self.scratch = next;
                Err(err)
            }
        }
    }

    /// Translate the board contents one cell in the direction of (dx, dy).
    ///
    /// Magnitudes are clamped to one cell. The row or column on the
    /// trailing edge is never written, so it keeps its old state and the
    /// boundary appears duplicated.
    pub fn shift(&mut self, dx: i32, dy: i32) {
        let (w, h) = (self.width, self.height);
        if w == 0 || h == 0 {
            return;
        }

        match dx.signum() {
            1 => {
                for x in (1..w).rev() {
                    for y in 0..h {
                        self.copy_cell((x - 1, y), (x, y));
                    }
                }
            }
            -1 => {
                for x in 0..w - 1 {
                    for y in 0..h {
                        self.copy_cell((x + 1, y), (x, y));
                    }
                }
            }
            _ => {}
        }

        match dy.signum() {
            1 => {
                for y in (1..h).rev() {
                    for x in 0..w {
                        self.copy_cell((x, y - 1), (x, y));
                    }
                }
            }
            -1 => {
                for y in 0..h - 1 {
                    for x in 0..w {
                        self.copy_cell((x, y + 1), (x, y));
                    }
                }
            }
            _ => {}
        }
    }

    fn copy_cell(&mut self, (sx, sy): (usize, usize), (dx, dy): (usize, usize)) {
        let src = self.get_index(sx, sy);
        let dst = self.get_index(dx, dy);
        self.cells[dst] = self.cells[src];
    }

    /// Fresh all-dead grid of the same size using the default rules
    pub fn reset(&self) -> Self {
        tracing::info!(width = self.width, height = self.height, "grid reset");
        Self::blank(self.width, self.height, self.cells.len(), RuleTable::default())
    }

    /// Number of cells with a non-zero state
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Paint random cells alive, each with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(density) {
                Cell::ALIVE
            } else {
                Cell::DEAD
            };
        });
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::blank(100, 100, 100 * 100, RuleTable::default())
    }
}
