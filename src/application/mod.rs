mod camera;
pub mod config;
mod game_state;

pub use camera::{CELL_SIZE, CELL_SLOT, Camera};
pub use config::{Args, ConfigError, SimConfig};
pub use game_state::GameState;
