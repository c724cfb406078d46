//! Spawn, cull and collision decisions. Pure functions of the current state.

use rand::Rng;

use super::state::{Bird, PIPE_HEIGHT, PIPE_WIDTH, Pipe, World};

/// Only this share of the pipe's width counts for collisions, so grazing the
/// trailing edge is forgiven.
pub const PIPE_HIT_WIDTH_FACTOR: f64 = 0.8;

/// Pipes are discarded once they are this share of the screen width past the left edge.
pub const CULL_DISTANCE_FACTOR: f64 = 0.5;

/// Frames spent scrolling across this distance between spawns, at any speed.
const SPAWN_SPACING_FRAMES: f64 = 180.0;

/// Pipes allowed on screen per unit of speed.
const PIPES_PER_SPEED: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Ground,
    /// Spawn index of the pipe that was hit.
    Pipe(u32),
}

/// Frames between spawns. Faster pipes spawn more often so spacing stays even.
pub fn spawn_cadence(pipe_speed: f64) -> u64 {
    let cadence = (SPAWN_SPACING_FRAMES / pipe_speed).round();
    if cadence.is_finite() && cadence >= 1.0 {
        cadence as u64
    } else {
        1
    }
}

pub fn max_pipes(pipe_speed: f64) -> f64 {
    pipe_speed * PIPES_PER_SPEED
}

/// Spawn on the cadence, as long as one more pipe still fits under the cap.
pub fn should_spawn(frame: u64, pipe_count: usize, pipe_speed: f64) -> bool {
    frame % spawn_cadence(pipe_speed) == 0 && (pipe_count + 1) as f64 <= max_pipes(pipe_speed)
}

/// Random `(top_height, bottom_height)` for a new pipe.
pub fn pipe_heights<R: Rng>(world: &World, rng: &mut R) -> (f64, f64) {
    let top = PIPE_HEIGHT * (0.25 + rng.random::<f64>());
    let bottom = (world.height - top) * rng.random::<f64>().clamp(0.25, 0.75);
    (top, bottom)
}

/// Still overlapping the visible horizontal band.
pub fn is_visible(pipe: &Pipe) -> bool {
    pipe.x > -PIPE_WIDTH
}

pub fn is_far_offscreen(pipe: &Pipe, world: &World) -> bool {
    pipe.x < -world.width * CULL_DISTANCE_FACTOR
}

pub fn hits_ground(bird: &Bird, world: &World) -> bool {
    bird.y >= world.ground_y()
}

pub fn hits_pipe(bird: &Bird, pipe: &Pipe, world: &World) -> bool {
    let in_band = bird.x > pipe.x - bird.width
        && bird.x < pipe.x + PIPE_WIDTH * PIPE_HIT_WIDTH_FACTOR;
    let outside_gap = bird.y < pipe.top_height
        || bird.y > world.height - pipe.bottom_height - bird.height;
    in_band && outside_gap
}

/// Full per-pipe predicate: ground contact or overlap with either pipe half.
pub fn collides(bird: &Bird, pipe: &Pipe, world: &World) -> bool {
    hits_ground(bird, world) || hits_pipe(bird, pipe, world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn world() -> World {
        World::new(1200.0, 800.0)
    }

    fn pipe_at(x: f64, top_height: f64, bottom_height: f64) -> Pipe {
        Pipe {
            x,
            top_height,
            bottom_height,
            index: 0,
        }
    }

    #[test]
    fn test_spawn_cadence() {
        assert_eq!(spawn_cadence(2.0), 90);
        assert_eq!(spawn_cadence(1.0), 180);
        assert_eq!(spawn_cadence(7.0), 26);
        assert_eq!(spawn_cadence(1000.0), 1);
    }

    #[test]
    fn test_max_pipes() {
        assert_eq!(max_pipes(2.0), 12.0);
        assert_eq!(max_pipes(0.5), 3.0);
    }

    #[test]
    fn test_should_spawn() {
        assert!(should_spawn(0, 0, 2.0));
        assert!(should_spawn(90, 3, 2.0));
        assert!(!should_spawn(45, 0, 2.0));
        assert!(!should_spawn(90, 12, 2.0));
        // Cap of 3.6 allows three pipes, not four
        assert!(should_spawn(0, 2, 0.6));
        assert!(!should_spawn(0, 3, 0.6));
    }

    #[test]
    fn test_pipe_heights_ranges() {
        let w = world();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let (top, bottom) = pipe_heights(&w, &mut rng);
            assert!(top >= PIPE_HEIGHT * 0.25 && top < PIPE_HEIGHT * 1.25);
            let rest = w.height - top;
            assert!(bottom >= rest * 0.25 - 1e-9 && bottom <= rest * 0.75 + 1e-9);
        }
    }

    #[test]
    fn test_visibility_and_cull_thresholds() {
        let w = world();
        assert!(is_visible(&pipe_at(-38.0, 100.0, 100.0)));
        assert!(!is_visible(&pipe_at(-39.0, 100.0, 100.0)));
        assert!(!is_far_offscreen(&pipe_at(-600.0, 100.0, 100.0), &w));
        assert!(is_far_offscreen(&pipe_at(-601.0, 100.0, 100.0), &w));
    }

    #[test]
    fn test_ground_collision_ignores_pipes() {
        let w = world();
        let mut bird = Bird::new(&w);
        bird.y = w.ground_y();
        let far = pipe_at(1100.0, 100.0, 100.0);
        assert!(!hits_pipe(&bird, &far, &w));
        assert!(collides(&bird, &far, &w));
        assert!(hits_ground(&bird, &w));
    }

    #[test]
    fn test_hits_top_pipe() {
        let w = world();
        let mut bird = Bird::new(&w);
        bird.y = 50.0;
        let pipe = pipe_at(bird.x, 100.0, 100.0);
        assert!(hits_pipe(&bird, &pipe, &w));
    }

    #[test]
    fn test_hits_bottom_pipe() {
        let w = world();
        let mut bird = Bird::new(&w);
        bird.y = 700.0;
        let pipe = pipe_at(bird.x, 100.0, 200.0);
        assert!(hits_pipe(&bird, &pipe, &w));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let w = world();
        let bird = Bird::new(&w);
        let pipe = pipe_at(bird.x, 100.0, 100.0);
        assert!(!collides(&bird, &pipe, &w));
    }

    #[test]
    fn test_horizontal_band_edges() {
        let w = world();
        let mut bird = Bird::new(&w);
        bird.y = 10.0;
        // Pipe starts exactly one bird width ahead: not yet touching.
        assert!(!hits_pipe(&bird, &pipe_at(bird.x + bird.width, 100.0, 100.0), &w));
        assert!(hits_pipe(&bird, &pipe_at(bird.x + bird.width - 1.0, 100.0, 100.0), &w));
        // Trailing 20% of the pipe is forgiven.
        let x = bird.x - PIPE_WIDTH * PIPE_HIT_WIDTH_FACTOR;
        assert!(!hits_pipe(&bird, &pipe_at(x - 0.5, 100.0, 100.0), &w));
        assert!(hits_pipe(&bird, &pipe_at(x + 0.5, 100.0, 100.0), &w));
    }
}
