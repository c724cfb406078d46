//! Setup -> Playing -> GameOver -> Setup.
//!
//! One `Machine` owns the game state for the whole session. Input and frame
//! ticks are dispatched on the current phase; nothing is rebound.

use rand::Rng;

use crate::config::{Config, ConfigError, ConfigField};
use crate::panel::ConfigPanel;
use crate::sim::{self, Collision, GameState, World};

#[derive(Debug, Clone)]
pub enum Phase {
    /// Config panel visible, frames idle.
    Setup(ConfigPanel),
    Playing,
    /// Frozen on the colliding frame until the player acknowledges.
    GameOver(Collision),
}

/// Player input, already decoded from raw terminal events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Click,
    Char(char),
    Backspace,
    NextField,
    Focus(ConfigField),
    Start,
}

/// Things that happened, for sound and logging.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Started(Config),
    StartRefused(ConfigError),
    Elevated,
    Crashed { collision: Collision, score: u32 },
    Reset,
}

/// Blocks until the player has seen the game-over notice.
pub trait GameOverNotifier {
    type Error;

    fn acknowledge(&mut self, state: &GameState, collision: Collision) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone)]
pub struct Machine {
    state: GameState,
    phase: Phase,
}

impl Machine {
    /// Starts in `Setup` with `config` pre-filled.
    pub fn new(world: World, config: Config) -> Self {
        Self {
            state: GameState::new(world, config),
            phase: Phase::Setup(ConfigPanel::new(config)),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn handle_input(&mut self, input: Input) -> Option<Event> {
        match &mut self.phase {
            Phase::Setup(panel) => match input {
                Input::Char(c) => {
                    panel.push_char(c);
                    None
                }
                Input::Backspace => {
                    panel.pop_char();
                    None
                }
                Input::NextField => {
                    panel.focus_next();
                    None
                }
                Input::Focus(field) => {
                    panel.focus(field);
                    None
                }
                Input::Start => match panel.start() {
                    Ok(config) => {
                        self.start(config);
                        Some(Event::Started(config))
                    }
                    Err(e) => Some(Event::StartRefused(e)),
                },
                Input::Click => None,
            },
            Phase::Playing => match input {
                Input::Click => {
                    sim::handle_elevate(&mut self.state);
                    Some(Event::Elevated)
                }
                _ => None,
            },
            Phase::GameOver(_) => None,
        }
    }

    /// One render tick.
    pub fn tick<R, N>(&mut self, rng: &mut R, notifier: &mut N) -> Result<Option<Event>, N::Error>
    where
        R: Rng,
        N: GameOverNotifier,
    {
        match self.phase {
            Phase::Setup(_) => Ok(None),
            Phase::Playing => Ok(sim::advance(&mut self.state, rng).map(|collision| {
                let score = self.state.score;
                log::info!("collision {collision:?} at frame {}, score {score}", self.state.frame);
                self.phase = Phase::GameOver(collision);
                Event::Crashed { collision, score }
            })),
            Phase::GameOver(collision) => {
                notifier.acknowledge(&self.state, collision)?;
                self.state.reset();
                self.phase = Phase::Setup(ConfigPanel::new(self.state.config));
                Ok(Some(Event::Reset))
            }
        }
    }

    fn start(&mut self, config: Config) {
        log::info!(
            "starting: gravity {}, speed {}, world {}x{}",
            config.gravity,
            config.pipe_speed,
            self.state.world.width,
            self.state.world.height
        );
        self.state.config = config;
        self.state.reset();
        self.phase = Phase::Playing;
    }
}
