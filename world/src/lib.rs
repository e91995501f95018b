#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative pit state management for Snake Pit.

mod history;
mod player;
mod snake;

use snake_pit_core::{
    Bounds, CellCoord, Command, ConfigError, DeathCause, Direction, Event, PitConfig,
};
use tracing::debug;

pub use history::History;
pub use player::{MoveOutcome, Player};

use snake::{Nest, Snake};

/// Represents the authoritative pit: its bounds, the player, every snake and
/// the elimination ledger.
#[derive(Clone, Debug)]
pub struct Pit {
    bounds: Bounds,
    player: Option<Player>,
    nest: Nest,
    history: History,
}

impl Pit {
    /// Creates an empty pit after validating its dimensions against `config`.
    pub fn new(rows: u32, columns: u32, config: PitConfig) -> Result<Self, ConfigError> {
        let bounds = config.bounds(rows, columns)?;
        Ok(Self {
            bounds,
            player: None,
            nest: Nest::new(config.max_snakes),
            history: History::new(bounds),
        })
    }

    /// Valid coordinate range of the pit.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The player, if one was placed.
    #[must_use]
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// The elimination ledger.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of snakes remaining.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.nest.len()
    }

    /// Number of snakes on `cell`.
    #[must_use]
    pub fn snakes_at(&self, cell: CellCoord) -> usize {
        self.nest.count_at(cell)
    }

    /// Adds a snake at `cell` without regard for other occupants.
    ///
    /// Returns `Ok(false)` when the population is already at capacity, before
    /// the cell is even looked at. Otherwise a cell outside the pit is a
    /// configuration error.
    pub fn add_snake(&mut self, cell: CellCoord) -> Result<bool, ConfigError> {
        if self.nest.is_full() {
            debug!(%cell, "snake population at capacity");
            return Ok(false);
        }
        if !self.bounds.contains(cell) {
            return Err(ConfigError::SnakeOutOfBounds { cell });
        }
        self.nest.push(Snake::new(cell));
        Ok(true)
    }

    /// Places the player at `cell`.
    ///
    /// Returns `Ok(false)` when a player already exists; the existing player
    /// is left untouched.
    pub fn add_player(&mut self, cell: CellCoord) -> Result<bool, ConfigError> {
        if self.player.is_some() {
            debug!(%cell, "player already placed");
            return Ok(false);
        }
        self.player = Some(Player::new(self.bounds, cell)?);
        Ok(true)
    }

    /// Removes one snake on `cell`, reporting whether any was there.
    ///
    /// When several snakes share the cell, which one is removed is
    /// unspecified. The order of the remaining snakes is not preserved.
    pub fn destroy_one_snake(&mut self, cell: CellCoord) -> bool {
        self.nest.remove_one_at(cell)
    }

    /// The player waits one step. Returns the new age, or `None` without a
    /// player.
    pub fn stand_player(&mut self) -> Option<u32> {
        let player = self.player.as_mut()?;
        player.stand();
        Some(player.age())
    }

    /// The player moves, or jumps over an adjacent snake, in `direction`.
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        let Self {
            bounds,
            player,
            nest,
            history,
        } = self;
        let Some(player) = player.as_mut() else {
            return MoveOutcome::NoPlayer;
        };
        player.move_in(direction, *bounds, nest, history)
    }

    /// Steps the i-th snake in `directions[i]`, then kills the player if any
    /// snake ended on its cell.
    ///
    /// Snakes without a matching direction stay put. Returns whether the
    /// player is alive afterwards; a pit without a player reports `true`.
    pub fn advance_snakes(&mut self, directions: &[Direction]) -> bool {
        self.nest.advance(directions, self.bounds);

        let Some(player) = self.player.as_mut() else {
            return true;
        };
        if self.nest.count_at(player.cell()) > 0 {
            player.set_dead();
        }
        !player.is_dead()
    }
}

/// Applies the provided command to the pit, reporting what happened.
///
/// Only construction misuse (cells outside the pit) fails; every gameplay
/// outcome is reported through `out_events`.
pub fn apply(
    pit: &mut Pit,
    command: Command,
    out_events: &mut Vec<Event>,
) -> Result<(), ConfigError> {
    match command {
        Command::PlacePlayer { cell } => {
            if pit.add_player(cell)? {
                out_events.push(Event::PlayerPlaced { cell });
            } else {
                out_events.push(Event::PlayerPlacementRejected { cell });
            }
        }
        Command::SpawnSnake { cell } => {
            if pit.add_snake(cell)? {
                out_events.push(Event::SnakeSpawned { cell });
            } else {
                out_events.push(Event::SnakeSpawnRejected { cell });
            }
        }
        Command::StandPlayer => {
            if let Some(age) = pit.stand_player() {
                out_events.push(Event::PlayerStood { age });
            }
        }
        Command::MovePlayer { direction } => {
            let before = pit.player.as_ref().map(Player::cell);
            match pit.move_player(direction) {
                MoveOutcome::NoPlayer => {}
                MoveOutcome::BumpedWall => {
                    if let Some(cell) = before {
                        out_events.push(Event::PlayerBumpedWall { cell, direction });
                    }
                }
                MoveOutcome::Moved { from, to } => {
                    out_events.push(Event::PlayerMoved { from, to });
                }
                MoveOutcome::JumpBlocked => {
                    if let Some(cell) = before {
                        out_events.push(Event::JumpBlocked { cell, direction });
                    }
                }
                MoveOutcome::Eliminated { from, over, to } => {
                    debug!(%over, landing = %to, "snake eliminated");
                    out_events.push(Event::PlayerJumped { from, over, to });
                    out_events.push(Event::EliminationRecorded { cell: to });
                }
                MoveOutcome::LandedOnSnake { from, over, to } => {
                    debug!(%over, landing = %to, "player landed on a snake");
                    out_events.push(Event::PlayerJumped { from, over, to });
                    out_events.push(Event::PlayerKilled {
                        cell: to,
                        cause: DeathCause::LandedOnSnake,
                    });
                }
            }
        }
        Command::AdvanceSnakes { directions } => {
            let was_alive = pit.player.as_ref().is_some_and(|player| !player.is_dead());
            let alive = pit.advance_snakes(&directions);
            out_events.push(Event::SnakesAdvanced {
                snakes: directions.len().min(pit.snake_count()),
            });
            if was_alive && !alive {
                if let Some(player) = pit.player.as_ref() {
                    debug!(cell = %player.cell(), "player bitten");
                    out_events.push(Event::PlayerKilled {
                        cell: player.cell(),
                        cause: DeathCause::Bitten,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Query functions that provide read-only access to the pit state.
pub mod query {
    use super::Pit;
    use snake_pit_core::{Bounds, CellCoord, HistoryView, PitView, PlayerSnapshot, SnakeView};

    /// Provides the pit's coordinate range.
    #[must_use]
    pub fn bounds(pit: &Pit) -> Bounds {
        pit.bounds
    }

    /// Captures the player's state, if a player was placed.
    #[must_use]
    pub fn player(pit: &Pit) -> Option<PlayerSnapshot> {
        pit.player.as_ref().map(|player| player.snapshot())
    }

    /// Number of snakes remaining in the pit.
    #[must_use]
    pub fn snake_count(pit: &Pit) -> usize {
        pit.nest.len()
    }

    /// Number of snakes on the provided cell.
    #[must_use]
    pub fn snakes_at(pit: &Pit, cell: CellCoord) -> usize {
        pit.nest.count_at(cell)
    }

    /// Captures every snake's cell in storage order.
    #[must_use]
    pub fn snake_view(pit: &Pit) -> SnakeView {
        SnakeView::from_cells(pit.nest.iter().map(|snake| snake.cell()).collect())
    }

    /// Captures a read-only copy of the elimination ledger.
    #[must_use]
    pub fn history_view(pit: &Pit) -> HistoryView {
        pit.history.view()
    }

    /// Captures everything a renderer needs to draw the pit.
    #[must_use]
    pub fn pit_view(pit: &Pit) -> PitView {
        let mut counts = vec![0_u32; pit.bounds.cell_count()];
        for snake in pit.nest.iter() {
            if let Some(slot) = pit
                .bounds
                .index(snake.cell())
                .and_then(|index| counts.get_mut(index))
            {
                *slot = slot.saturating_add(1);
            }
        }
        PitView::new(pit.bounds, counts, pit.nest.len(), player(pit))
    }
}
