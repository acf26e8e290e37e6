//! Times one generation of the table-driven engine across grid sizes

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use table_life::{Grid, domain::rules::presets};

fn benchmark_advance(rule_spec: &str, size: usize, iterations: u32) -> Result<f64, table_life::GridError> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::new(size, size, rule_spec)?;
    grid.randomize(&mut rng, 0.3);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.advance()?;
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), table_life::GridError> {
    println!("=== Advance Benchmark ===\n");

    let sizes = [50, 100, 200, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>14}", "Size", "Decay ms", "Conway ms", "Mcells/s");
    println!("{:-<52}", "");

    for size in sizes {
        let decay_ms = benchmark_advance(presets::DEFAULT_RULES, size, iterations)?;
        let conway_ms = benchmark_advance(presets::CONWAY, size, iterations)?;
        let cells = (size * size) as f64;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>14.1}",
            format!("{size}x{size}"),
            decay_ms,
            conway_ms,
            cells / (decay_ms / 1000.0) / 1_000_000.0
        );
    }

    Ok(())
}
