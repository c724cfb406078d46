//! Flappy Canvas
//!
//! A bird falls under gravity, clicks lift it, pipes scroll in from the right
//! and any collision ends the run. Gravity and pipe speed are chosen on a
//! setup screen before every run.
//!
//! The simulation (`sim`), setup panel (`panel`) and phase machine
//! (`machine`) are terminal-free; `render` and `sound` are the terminal and
//! audio front ends used by the binary.

pub mod cli;
pub mod config;
pub mod machine;
pub mod panel;
pub mod render;
pub mod sim;
pub mod sound;

pub use config::{Config, ConfigError, ConfigField};
pub use machine::{Event, GameOverNotifier, Input, Machine, Phase};
pub use sim::{Collision, GameState, World};
