#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Seeded system that decides where every snake tries to go each turn.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use snake_pit_core::{Command, Direction, SnakeView};

/// Pure system that draws one uniformly random direction per snake.
///
/// Snakes get no pathfinding and no retry: a direction into the wall simply
/// leaves the snake in place when the world applies the step.
#[derive(Clone, Debug)]
pub struct Slither {
    rng: ChaCha8Rng,
}

impl Slither {
    /// Creates a new system whose draws are fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Emits a single [`Command::AdvanceSnakes`] covering every snake in the view.
    pub fn handle(&mut self, snakes: &SnakeView, out: &mut Vec<Command>) {
        let directions = snakes.iter().map(|_| self.next_direction()).collect();
        out.push(Command::AdvanceSnakes { directions });
    }

    fn next_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }
}
