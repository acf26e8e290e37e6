// Domain layer - simulation engine
pub mod domain;

// Application layer - configuration and tick coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, Pattern, RuleError, RuleTable};
pub use application::{Camera, GameState, SimConfig};
