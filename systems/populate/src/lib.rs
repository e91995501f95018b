#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Seeded setup system that scatters the player and the snakes across the pit.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use snake_pit_core::{Bounds, CellCoord, Command};

/// Pure system that emits the placement commands for a fresh pit.
#[derive(Clone, Debug)]
pub struct Populate {
    rng: ChaCha8Rng,
}

impl Populate {
    /// Creates a new system whose draws are fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Emits one [`Command::PlacePlayer`] followed by `snakes` spawn commands.
    ///
    /// Every cell is drawn uniformly and independently. Snake draws that hit
    /// the player's starting cell are redrawn; snakes may still share cells
    /// with each other. A single-cell pit has no room for snakes, so none are
    /// emitted there.
    pub fn handle(&mut self, bounds: Bounds, snakes: usize, out: &mut Vec<Command>) {
        if bounds.cell_count() == 0 {
            return;
        }

        let player = self.draw_cell(bounds);
        out.push(Command::PlacePlayer { cell: player });

        if bounds.cell_count() < 2 {
            return;
        }

        let mut remaining = snakes;
        while remaining > 0 {
            let cell = self.draw_cell(bounds);
            if cell == player {
                continue;
            }
            out.push(Command::SpawnSnake { cell });
            remaining -= 1;
        }
    }

    fn draw_cell(&mut self, bounds: Bounds) -> CellCoord {
        let row = self.rng.gen_range(1..=bounds.rows());
        let column = self.rng.gen_range(1..=bounds.columns());
        CellCoord::new(row, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_pit_gets_only_the_player() {
        let mut populate = Populate::new(3);
        let mut commands = Vec::new();
        populate.handle(Bounds::new(1, 1), 4, &mut commands);
        assert_eq!(
            commands,
            vec![Command::PlacePlayer {
                cell: CellCoord::new(1, 1)
            }]
        );
    }

    #[test]
    fn empty_bounds_emit_nothing() {
        let mut populate = Populate::new(3);
        let mut commands = Vec::new();
        populate.handle(Bounds::new(0, 5), 4, &mut commands);
        assert!(commands.is_empty());
    }
}
