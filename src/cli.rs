//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigField, DEFAULT_GRAVITY, DEFAULT_PIPE_SPEED, parse_field};
use crate::sim::{BIRD_HEIGHT, PIPE_HEIGHT};

pub const DEFAULT_WORLD_HEIGHT: f64 = 600.0;

#[derive(Parser, Debug)]
#[command(name = "flappy-canvas", version)]
#[command(about = "Click to keep the bird in the air; tune gravity and pipe speed before each run")]
pub struct Cli {
    /// Initial gravity shown on the setup screen (per-frame fall acceleration)
    #[arg(long, default_value_t = DEFAULT_GRAVITY, value_parser = parse_gravity, allow_hyphen_values = true)]
    pub gravity: f64,
    /// Initial pipe speed shown on the setup screen (per-frame scroll)
    #[arg(long, default_value_t = DEFAULT_PIPE_SPEED, value_parser = parse_speed)]
    pub speed: f64,
    /// World height in logical pixels; width follows the terminal's shape
    #[arg(long, default_value_t = DEFAULT_WORLD_HEIGHT, value_parser = parse_height)]
    pub height: f64,
    /// Seed for pipe placement, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
    /// Frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,
    /// Disable sound
    #[arg(long)]
    pub mute: bool,
    /// Write logs here (filter with RUST_LOG, default info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            gravity: self.gravity,
            pipe_speed: self.speed,
        }
    }
}

fn parse_gravity(s: &str) -> Result<f64, crate::config::ConfigError> {
    parse_field(ConfigField::Gravity, s)
}

fn parse_speed(s: &str) -> Result<f64, crate::config::ConfigError> {
    parse_field(ConfigField::Speed, s)
}

/// Tall enough for a full-size pipe plus the bird.
fn parse_height(s: &str) -> Result<f64, String> {
    let min = (PIPE_HEIGHT * 1.25 + BIRD_HEIGHT * 2.0).ceil();
    let h: f64 = s.parse().map_err(|_| format!("{s:?} is not a number"))?;
    if !h.is_finite() || h < min {
        return Err(format!("height must be at least {min}"));
    }
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["flappy-canvas"]).unwrap();
        assert_eq!(cli.config(), Config::default());
        assert_eq!(cli.height, DEFAULT_WORLD_HEIGHT);
        assert_eq!(cli.fps, 60);
        assert!(cli.seed.is_none());
        assert!(!cli.mute);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "flappy-canvas",
            "--gravity",
            "-0.5",
            "--speed",
            "3",
            "--seed",
            "42",
            "--mute",
        ])
        .unwrap();
        assert_eq!(
            cli.config(),
            Config {
                gravity: -0.5,
                pipe_speed: 3.0
            }
        );
        assert_eq!(cli.seed, Some(42));
        assert!(cli.mute);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Cli::try_parse_from(["flappy-canvas", "--speed", "0"]).is_err());
        assert!(Cli::try_parse_from(["flappy-canvas", "--gravity", "fast"]).is_err());
        assert!(Cli::try_parse_from(["flappy-canvas", "--height", "100"]).is_err());
        assert!(Cli::try_parse_from(["flappy-canvas", "--fps", "0"]).is_err());
    }
}
