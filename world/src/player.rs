//! The player token and its movement rules.

use snake_pit_core::{Bounds, CellCoord, ConfigError, Direction, PlayerSnapshot};

use crate::{snake::Nest, History};

/// Result of a single player move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The pit holds no player; nothing happened.
    NoPlayer,
    /// The player stood against the wall in the requested direction.
    BumpedWall,
    /// The adjacent cell was free and the player stepped onto it.
    Moved {
        /// Cell the player left.
        from: CellCoord,
        /// Cell the player arrived at.
        to: CellCoord,
    },
    /// A snake blocked the way and the wall left no room to land beyond it.
    JumpBlocked,
    /// The player jumped a snake, destroyed it and landed on a free cell.
    Eliminated {
        /// Cell the player left.
        from: CellCoord,
        /// Cell of the destroyed snake.
        over: CellCoord,
        /// Cell the elimination was recorded at.
        to: CellCoord,
    },
    /// The player jumped a snake but landed on another one and died.
    LandedOnSnake {
        /// Cell the player left.
        from: CellCoord,
        /// Cell of the destroyed snake.
        over: CellCoord,
        /// Cell the player died on.
        to: CellCoord,
    },
}

/// The player token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    cell: CellCoord,
    age: u32,
    dead: bool,
}

impl Player {
    pub(crate) fn new(bounds: Bounds, cell: CellCoord) -> Result<Self, ConfigError> {
        if !bounds.contains(cell) {
            return Err(ConfigError::PlayerOutOfBounds { cell });
        }
        Ok(Self {
            cell,
            age: 0,
            dead: false,
        })
    }

    /// Cell currently occupied by the player.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }

    /// Number of stand or move commands taken so far.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Whether the player has died. Once set it never clears.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.dead
    }

    /// Captures an immutable snapshot for queries.
    #[must_use]
    pub const fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            cell: self.cell,
            age: self.age,
            dead: self.dead,
        }
    }

    pub(crate) fn stand(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    pub(crate) fn set_dead(&mut self) {
        self.dead = true;
    }

    /// Moves one cell, or jumps two cells over an adjacent snake.
    ///
    /// A jump destroys exactly one snake on the jumped cell. Landing on a cell
    /// that still holds a snake kills the player; otherwise the elimination is
    /// credited in `history` at the landing cell.
    pub(crate) fn move_in(
        &mut self,
        direction: Direction,
        bounds: Bounds,
        nest: &mut Nest,
        history: &mut History,
    ) -> MoveOutcome {
        self.age = self.age.saturating_add(1);

        let from = self.cell;
        let reach = bounds.reach(from, direction);
        let Some(adjacent) = from.step(direction, 1).filter(|_| reach > 0) else {
            return MoveOutcome::BumpedWall;
        };

        if nest.count_at(adjacent) == 0 {
            self.cell = adjacent;
            return MoveOutcome::Moved { from, to: adjacent };
        }

        let Some(landing) = from.step(direction, 2).filter(|_| reach >= 2) else {
            return MoveOutcome::JumpBlocked;
        };

        let _ = nest.remove_one_at(adjacent);
        self.cell = landing;
        if nest.count_at(landing) > 0 {
            self.set_dead();
            return MoveOutcome::LandedOnSnake {
                from,
                over: adjacent,
                to: landing,
            };
        }

        let _ = history.record(landing);
        MoveOutcome::Eliminated {
            from,
            over: adjacent,
            to: landing,
        }
    }
}
