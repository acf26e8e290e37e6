mod cell;
mod error;
mod grid;
pub mod patterns;
pub mod rules;

pub use cell::Cell;
pub use error::{GridError, RuleError};
pub use grid::Grid;
pub use patterns::Pattern;
pub use rules::{DEFAULT_RULES, MAX_NEIGHBORS, RuleTable};
