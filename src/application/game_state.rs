use crate::application::{Camera, SimConfig};
use crate::domain::{Grid, GridError, Pattern, RuleError, patterns};

/// Share of cells painted alive by `randomize`
const RANDOM_DENSITY: f64 = 0.3;

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_evolution_time_ms: f32,
    /// Set when an advance failed; cleared by reset
    pub fault: Option<RuleError>,
    /// Index into the pattern library awaiting placement (None = paint mode)
    pub pending_pattern_index: Option<usize>,
}

impl GameState {
    /// Build the grid described by the configuration
    pub fn new(config: &SimConfig) -> Result<Self, GridError> {
        let grid = Grid::new(config.width, config.height, &config.rule_spec)?;
        Ok(Self::with_grid(grid, config.updates_per_second, !config.start_paused))
    }

    pub fn with_grid(grid: Grid, updates_per_second: f32, is_running: bool) -> Self {
        Self {
            grid,
            is_running,
            generation: 0,
            update_timer: 0.0,
            updates_per_second,
            last_evolution_time_ms: 0.0,
            fault: None,
            pending_pattern_index: None,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running && self.fault.is_none();
        tracing::info!(running = self.is_running, "toggled simulation");
        self
    }

    /// Replace the grid with a fresh one (default rules) and reset counters
    pub fn reset(mut self) -> Self {
        self.grid = self.grid.reset();
        self.generation = 0;
        self.update_timer = 0.0;
        self.fault = None;
        self
    }

    /// Fill the grid with random live cells
    pub fn randomize(mut self) -> Self {
        self.grid.randomize(&mut rand::rng(), RANDOM_DENSITY);
        self.generation = 0;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Paint a cell alive. Painting only takes effect while paused.
    pub fn paint(&mut self, x: i64, y: i64) {
        if !self.is_running {
            self.grid.set_cell_alive(x, y);
        }
    }

    /// Enter placement mode, or move to the next pattern in the library.
    /// Pauses so the pattern lands on a still board.
    pub fn cycle_pattern(mut self) -> Self {
        let next = self
            .pending_pattern_index
            .map_or(0, |idx| (idx + 1) % patterns::LIBRARY.len());
        self.pending_pattern_index = Some(next);
        self.is_running = false;
        tracing::info!(pattern = patterns::LIBRARY[next].name, "selected pattern");
        self
    }

    /// Leave placement mode without stamping
    pub fn cancel_pattern(mut self) -> Self {
        self.pending_pattern_index = None;
        self
    }

    pub fn pending_pattern(&self) -> Option<&'static Pattern> {
        self.pending_pattern_index.and_then(|idx| patterns::LIBRARY.get(idx))
    }

    /// Stamp the pending pattern centered on (x, y) and leave placement mode.
    /// Returns false when no pattern was pending.
    pub fn stamp_pattern(&mut self, x: i64, y: i64) -> bool {
        let Some(pattern) = self.pending_pattern() else {
            return false;
        };
        pattern.place_centered(&mut self.grid, x, y);
        self.pending_pattern_index = None;
        true
    }

    /// Pan the board one cell and keep the camera's offset in step
    pub fn pan(&mut self, camera: &mut Camera, dx: i32, dy: i32) {
        self.grid.shift(dx, dy);
        camera.record_shift(dx, dy);
    }

    /// Run a single generation regardless of timing.
    /// A failed advance pauses the simulation and records the fault.
    pub fn step(&mut self) {
        let start = std::time::Instant::now();
        match self.grid.advance() {
            Ok(()) => {
                self.generation += 1;
            }
            Err(err) => {
                tracing::error!(%err, generation = self.generation, "advance failed; pausing");
                self.fault = Some(err);
                self.is_running = false;
            }
        }
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.step();
            self.update_timer = 0.0;
        }

        self
    }
}
