//! Simulation module
//!
//! Everything that decides what happens in a frame lives here. No terminal,
//! audio or clock access: callers supply the RNG and drive the frames.

pub mod policy;
pub mod state;
pub mod tick;

pub use policy::Collision;
pub use state::{
    BIRD_HEIGHT, BIRD_WIDTH, Bird, ELEVATION, GameState, PIPE_HEIGHT, PIPE_WIDTH, Pipe, World,
};
pub use tick::{advance, handle_elevate};
