/// Cell is the state held by one grid slot.
/// State 0 is dead; every non-zero state counts as alive for neighbor
/// counting, which lets rule tables express aging/decay chains.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell(pub u32);

impl Cell {
    pub const DEAD: Cell = Cell(0);
    pub const ALIVE: Cell = Cell(1);

    /// Check if the cell counts as alive (any state >= 1)
    pub const fn is_alive(self) -> bool {
        self.0 >= 1
    }

    /// Raw integer state
    pub const fn state(self) -> u32 {
        self.0
    }
}

impl From<u32> for Cell {
    fn from(state: u32) -> Self {
        Cell(state)
    }
}
