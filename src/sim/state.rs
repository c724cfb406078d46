//! Game state and world geometry.
//!
//! Coordinates are logical pixels with the origin at the top-left; `y` grows
//! downward. The renderer scales them onto whatever surface it draws to.

use std::collections::VecDeque;

use crate::config::Config;

pub const BIRD_WIDTH: f64 = 30.0;
/// Sprite aspect ratio is 68x48.
pub const BIRD_HEIGHT: f64 = BIRD_WIDTH * 48.0 / 68.0;
/// Upward displacement per click.
pub const ELEVATION: f64 = 30.0;

pub const PIPE_WIDTH: f64 = 39.0;
/// Sprite aspect ratio is 104x640.
pub const PIPE_HEIGHT: f64 = PIPE_WIDTH * 640.0 / 104.0;

/// Screen dimensions the simulation runs in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    pub width: f64,
    pub height: f64,
}

impl World {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A world `height` tall whose width matches a `pw`x`ph` surface.
    pub fn fit(pw: usize, ph: usize, height: f64) -> Self {
        let aspect = if ph == 0 { 1.0 } else { pw as f64 / ph as f64 };
        Self {
            width: (height * aspect).round(),
            height,
        }
    }

    /// Lowest bird `y` allowed; touching it ends the game.
    pub fn ground_y(&self) -> f64 {
        self.height - BIRD_HEIGHT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Fixed horizontal position.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bird {
    pub fn new(world: &World) -> Self {
        Self {
            x: world.width / 4.0,
            y: world.height / 2.0,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
        }
    }
}

/// A top/bottom pipe pair. Heights are fixed at spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub x: f64,
    pub top_height: f64,
    pub bottom_height: f64,
    /// Spawn order, starting from 0 each playthrough.
    pub index: u32,
}

impl Pipe {
    /// Open vertical space between the two halves.
    pub fn gap(&self, world: &World) -> f64 {
        world.height - self.top_height - self.bottom_height
    }
}

/// Everything that changes during a playthrough.
#[derive(Debug, Clone)]
pub struct GameState {
    pub world: World,
    pub config: Config,
    pub frame: u64,
    /// Equals the number of pipes spawned.
    pub score: u32,
    pub bird: Bird,
    /// Oldest first.
    pub pipes: VecDeque<Pipe>,
}

impl GameState {
    pub fn new(world: World, config: Config) -> Self {
        Self {
            world,
            config,
            frame: 0,
            score: 0,
            bird: Bird::new(&world),
            pipes: VecDeque::new(),
        }
    }

    /// Back to initial values, keeping the world and config.
    pub fn reset(&mut self) {
        self.frame = 0;
        self.score = 0;
        self.bird = Bird::new(&self.world);
        self.pipes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(World::new(1200.0, 800.0), Config::default());
        assert_eq!(state.frame, 0);
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.bird.x, 300.0);
        assert_eq!(state.bird.y, 400.0);
    }

    #[test]
    fn test_ground_y() {
        let world = World::new(1200.0, 800.0);
        assert!((world.ground_y() - (800.0 - 30.0 * 48.0 / 68.0)).abs() < 1e-9);
    }

    #[test]
    fn test_world_fit_follows_aspect() {
        let world = World::fit(160, 80, 600.0);
        assert_eq!(world.width, 1200.0);
        assert_eq!(world.height, 600.0);
        assert_eq!(World::fit(10, 0, 600.0).width, 600.0);
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut state = GameState::new(World::new(1200.0, 800.0), Config::default());
        state.frame = 99;
        state.score = 7;
        state.bird.y = 12.0;
        state.pipes.push_back(Pipe {
            x: 10.0,
            top_height: 100.0,
            bottom_height: 100.0,
            index: 0,
        });
        state.reset();
        assert_eq!(state.frame, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.bird.y, 400.0);
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_pipe_gap() {
        let world = World::new(1200.0, 800.0);
        let pipe = Pipe {
            x: 0.0,
            top_height: 200.0,
            bottom_height: 300.0,
            index: 0,
        };
        assert_eq!(pipe.gap(&world), 300.0);
    }
}
