//! Command-line configuration for the simulator binary.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::domain::{GridError, rules::presets};

pub const DEFAULT_WIDTH: usize = 100;
pub const DEFAULT_HEIGHT: usize = 100;
/// Largest accepted side length; keeps `width * height` allocatable
pub const MAX_DIMENSION: usize = 10_000;
/// One generation per frame at the 60 FPS target
pub const DEFAULT_SPEED: f32 = 60.0;

/// Errors raised while turning command-line arguments into a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rule file {path:?}: {source}")]
    RuleFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Table-driven cellular automaton simulator.
#[derive(Debug, Parser)]
#[command(name = "table_life", version)]
pub struct Args {
    /// Grid dimensions as WIDTHxHEIGHT.
    #[arg(long, value_name = "WIDTHxHEIGHT", default_value = "100x100")]
    pub size: GridSize,
    /// File holding `count:dead,alive` rule records, one per line.
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub rules: Option<PathBuf>,
    /// Built-in rule table to use when no rule file is given.
    #[arg(long, value_enum, default_value_t = RulePreset::Decay)]
    pub preset: RulePreset,
    /// Generations per second while running.
    #[arg(long, value_name = "GENERATIONS", default_value_t = DEFAULT_SPEED, value_parser = parse_speed)]
    pub speed: f32,
    /// Start with the simulation paused.
    #[arg(long)]
    pub paused: bool,
}

/// Built-in rule tables selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RulePreset {
    /// Life with a decay chain for newborn cells
    Decay,
    /// Strict B3/S23
    Conway,
    /// B36/S23
    Highlife,
}

impl RulePreset {
    pub fn spec(self) -> &'static str {
        match self {
            RulePreset::Decay => presets::DEFAULT_RULES,
            RulePreset::Conway => presets::CONWAY,
            RulePreset::Highlife => presets::HIGHLIFE,
        }
    }
}

/// Grid dimensions parsed from a WIDTHxHEIGHT argument
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl FromStr for GridSize {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (width, height) = value
            .split_once(['x', 'X'])
            .ok_or_else(|| "expected format WIDTHxHEIGHT".to_string())?;

        let parse = |part: &str| -> Result<usize, String> {
            let n: usize = part
                .trim()
                .parse()
                .map_err(|_| format!("{part:?} is not a valid dimension"))?;
            if n == 0 {
                return Err("dimensions must be positive".to_string());
            }
            if n > MAX_DIMENSION {
                return Err(format!("dimensions must not exceed {MAX_DIMENSION}"));
            }
            Ok(n)
        };

        Ok(Self {
            width: parse(width)?,
            height: parse(height)?,
        })
    }
}

fn parse_speed(value: &str) -> Result<f32, String> {
    let speed: f32 = value
        .parse()
        .map_err(|_| format!("{value:?} is not a number"))?;
    if !(1.0..=60.0).contains(&speed) {
        return Err("speed must be between 1 and 60 generations per second".to_string());
    }
    Ok(speed)
}

/// Resolved simulator settings
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub rule_spec: String,
    pub updates_per_second: f32,
    pub start_paused: bool,
}

impl SimConfig {
    /// Resolve arguments, reading the rule file if one was given
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let rule_spec = match &args.rules {
            Some(path) => std::fs::read_to_string(path).map_err(|source| ConfigError::RuleFile {
                path: path.clone(),
                source,
            })?,
            None => args.preset.spec().to_string(),
        };

        Ok(Self {
            width: args.size.width,
            height: args.size.height,
            rule_spec,
            updates_per_second: args.speed,
            start_paused: args.paused,
        })
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rule_spec: presets::DEFAULT_RULES.to_string(),
            updates_per_second: DEFAULT_SPEED,
            start_paused: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("table_life").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_match_default_config() {
        let config = SimConfig::from_args(parse(&[]).unwrap()).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_size_argument() {
        let args = parse(&["--size", "40x30"]).unwrap();
        assert_eq!(args.size, GridSize { width: 40, height: 30 });
        assert!(parse(&["--size", "40"]).is_err());
        assert!(parse(&["--size", "0x10"]).is_err());
        assert!(parse(&["--size", "ax10"]).is_err());
    }

    #[test]
    fn test_oversized_size_is_rejected() {
        assert!(parse(&["--size", "4294967296x4294967296"]).is_err());
        assert!(parse(&["--size", "100000x100000"]).is_err());

        let edge = format!("{MAX_DIMENSION}x1");
        assert_eq!(parse(&["--size", &edge]).unwrap().size.width, MAX_DIMENSION);
    }

    #[test]
    fn test_argument_errors_convert_to_config_error() {
        let err = ConfigError::from(parse(&["--size", "0x1"]).unwrap_err());
        assert!(matches!(&err, ConfigError::Args(e) if e.use_stderr()));

        // Help is reported through the same path but is not a failure
        let help = ConfigError::from(parse(&["--help"]).unwrap_err());
        assert!(matches!(&help, ConfigError::Args(e) if !e.use_stderr()));
    }

    #[test]
    fn test_preset_selects_rule_text() {
        let config = SimConfig::from_args(parse(&["--preset", "conway"]).unwrap()).unwrap();
        assert_eq!(config.rule_spec, presets::CONWAY);
    }

    #[test]
    fn test_speed_bounds() {
        assert_eq!(parse(&["--speed", "12"]).unwrap().speed, 12.0);
        assert!(parse(&["--speed", "0"]).is_err());
        assert!(parse(&["--speed", "120"]).is_err());
    }

    #[test]
    fn test_rules_conflicts_with_preset() {
        assert!(parse(&["--rules", "r.txt", "--preset", "conway"]).is_err());
    }

    #[test]
    fn test_rule_file_is_read() {
        let path = std::env::temp_dir().join(format!("table_life_rules_{}.txt", std::process::id()));
        std::fs::write(&path, presets::HIGHLIFE).unwrap();

        let args = parse(&["--rules", path.to_str().unwrap(), "--paused"]).unwrap();
        let config = SimConfig::from_args(args).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.rule_spec, presets::HIGHLIFE);
        assert!(config.start_paused);
    }

    #[test]
    fn test_missing_rule_file() {
        let args = parse(&["--rules", "/nonexistent/table_life/rules.txt"]).unwrap();
        assert!(matches!(
            SimConfig::from_args(args),
            Err(ConfigError::RuleFile { .. })
        ));
    }
}
