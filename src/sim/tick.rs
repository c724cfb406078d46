//! Per-frame simulation step and click handling.

use rand::Rng;

use super::policy::{self, Collision};
use super::state::{ELEVATION, GameState, Pipe};

/// Advance the simulation by one frame.
///
/// Returns the collision that ended the playthrough, if any. The state is left
/// exactly as it was on the colliding frame so it can still be drawn.
pub fn advance<R: Rng>(state: &mut GameState, rng: &mut R) -> Option<Collision> {
    let world = state.world;
    let speed = state.config.pipe_speed;

    // Gravity, kept between ceiling and ground
    state.bird.y = (state.bird.y + state.config.gravity).clamp(0.0, world.ground_y());

    // Spawn check uses the frame count before this frame is counted
    let frame = state.frame;
    state.frame += 1;
    if policy::should_spawn(frame, state.pipes.len(), speed) {
        let (top_height, bottom_height) = policy::pipe_heights(&world, rng);
        let index = state.score;
        state.pipes.push_back(Pipe {
            x: world.width,
            top_height,
            bottom_height,
            index,
        });
        state.score += 1;
        log::debug!(
            "frame {frame}: spawned pipe #{index} (top {top_height:.1}, bottom {bottom_height:.1})"
        );
    }

    for pipe in state.pipes.iter_mut() {
        pipe.x -= speed;
    }

    // Oldest first, so everything past the threshold sits at the front
    while state
        .pipes
        .front()
        .is_some_and(|p| !policy::is_visible(p) && policy::is_far_offscreen(p, &world))
    {
        if let Some(pipe) = state.pipes.pop_front() {
            log::trace!("frame {frame}: culled pipe #{}", pipe.index);
        }
    }

    if policy::hits_ground(&state.bird, &world) {
        return Some(Collision::Ground);
    }
    state
        .pipes
        .iter()
        .filter(|p| policy::is_visible(p))
        .find(|p| policy::hits_pipe(&state.bird, p, &world))
        .map(|p| Collision::Pipe(p.index))
}

/// Move the bird up by the fixed elevation, no higher than the ceiling.
pub fn handle_elevate(state: &mut GameState) {
    state.bird.y = (state.bird.y - ELEVATION).max(0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::state::{PIPE_WIDTH, World};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn new_state() -> GameState {
        GameState::new(World::new(1200.0, 800.0), Config::default())
    }

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(12345)
    }

    /// A pipe whose gap spans the whole screen, so only the ground can kill.
    fn harmless_pipe(x: f64, index: u32) -> Pipe {
        Pipe {
            x,
            top_height: 0.0,
            bottom_height: 0.0,
            index,
        }
    }

    #[test]
    fn test_gravity_ten_frames() {
        let mut state = new_state();
        let mut rng = rng();
        let initial_y = state.bird.y;
        for _ in 0..10 {
            // Keep spawned pipes out of the bird's way
            for p in state.pipes.iter_mut() {
                p.top_height = 0.0;
                p.bottom_height = 0.0;
            }
            assert_eq!(advance(&mut state, &mut rng), None);
        }
        assert_eq!(state.bird.y, initial_y + 10.0);
    }

    #[test]
    fn test_first_frame_spawns() {
        let mut state = new_state();
        let mut rng = rng();
        advance(&mut state, &mut rng);
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.frame, 1);
        assert_eq!(state.pipes[0].x, 1200.0 - 2.0);
        assert_eq!(state.pipes[0].index, 0);
    }

    #[test]
    fn test_pipe_position_after_sixty_frames() {
        let mut state = new_state();
        let mut rng = rng();
        for _ in 0..60 {
            for p in state.pipes.iter_mut() {
                p.top_height = 0.0;
                p.bottom_height = 0.0;
            }
            advance(&mut state, &mut rng);
        }
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.pipes[0].x, 1200.0 - 120.0);
    }

    #[test]
    fn test_spawn_cadence_respected() {
        let mut state = new_state();
        let mut rng = rng();
        state.bird.y = 0.0;
        state.config.gravity = 0.0;
        for _ in 0..=90 {
            for p in state.pipes.iter_mut() {
                p.top_height = 0.0;
                p.bottom_height = 0.0;
            }
            advance(&mut state, &mut rng);
        }
        // Frames 0 and 90
        assert_eq!(state.score, 2);
        assert_eq!(state.pipes.len(), 2);
    }

    #[test]
    fn test_cap_blocks_spawning() {
        let mut state = new_state();
        let mut rng = rng();
        for i in 0..12 {
            state.pipes.push_back(harmless_pipe(1000.0 + i as f64, i));
        }
        state.score = 12;
        advance(&mut state, &mut rng);
        assert_eq!(state.pipes.len(), 12);
        assert_eq!(state.score, 12);
    }

    #[test]
    fn test_top_pipe_collision() {
        let mut state = new_state();
        let mut rng = rng();
        state.frame = 1;
        state.bird.y = 50.0;
        state.config.gravity = 0.0;
        state.pipes.push_back(Pipe {
            x: state.bird.x + 2.0,
            top_height: 200.0,
            bottom_height: 100.0,
            index: 4,
        });
        assert_eq!(advance(&mut state, &mut rng), Some(Collision::Pipe(4)));
    }

    #[test]
    fn test_ground_collision_without_pipes() {
        let mut state = new_state();
        let mut rng = rng();
        state.frame = 1;
        state.bird.y = state.world.ground_y() - 0.5;
        assert_eq!(advance(&mut state, &mut rng), Some(Collision::Ground));
        assert_eq!(state.bird.y, state.world.ground_y());
    }

    #[test]
    fn test_invisible_pipe_does_not_collide() {
        let mut state = new_state();
        let mut rng = rng();
        state.frame = 1;
        state.config.gravity = 0.0;
        state.bird.y = 10.0;
        state.bird.x = -45.0;
        state.pipes.push_back(Pipe {
            x: -PIPE_WIDTH + 1.0,
            top_height: 700.0,
            bottom_height: 0.0,
            index: 0,
        });
        assert_eq!(advance(&mut state, &mut rng), None);
    }

    #[test]
    fn test_cull_removes_oldest_only() {
        let mut state = new_state();
        let mut rng = rng();
        state.frame = 1;
        state.config.gravity = 0.0;
        state.pipes.push_back(harmless_pipe(-599.0, 0));
        state.pipes.push_back(harmless_pipe(-599.0, 1));
        state.pipes.push_back(harmless_pipe(-300.0, 2));
        advance(&mut state, &mut rng);
        let left: Vec<u32> = state.pipes.iter().map(|p| p.index).collect();
        assert_eq!(left, vec![2]);
        assert_eq!(state.pipes[0].x, -302.0);
    }

    #[test]
    fn test_elevate() {
        let mut state = new_state();
        handle_elevate(&mut state);
        assert_eq!(state.bird.y, 370.0);
    }

    #[test]
    fn test_elevate_stops_at_ceiling() {
        let mut state = new_state();
        state.bird.y = 10.0;
        handle_elevate(&mut state);
        assert_eq!(state.bird.y, 0.0);
    }

    #[test]
    fn test_negative_gravity_stays_on_screen() {
        let mut state = new_state();
        let mut rng = rng();
        state.config.gravity = -5.0;
        state.bird.y = 2.0;
        advance(&mut state, &mut rng);
        assert_eq!(state.bird.y, 0.0);
    }
}
