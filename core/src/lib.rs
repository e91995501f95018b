#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Snake Pit engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative pit, and pure systems. Systems and the game driver submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then reports [`Event`] values
//! describing what actually happened. Adapters only ever see the read-only
//! views defined here.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest number of rows a pit may be configured with by default.
pub const DEFAULT_MAX_ROWS: u32 = 20;
/// Largest number of columns a pit may be configured with by default.
pub const DEFAULT_MAX_COLUMNS: u32 = 40;
/// Largest snake population a pit accepts by default.
pub const DEFAULT_MAX_SNAKES: usize = 180;
/// Hard ceiling on either pit dimension, whatever the configured maxima say.
pub const MAX_GRID_EXTENT: u32 = 1_000;

/// Commands that express all permissible pit mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Places the single player token at the provided cell.
    PlacePlayer {
        /// Cell the player starts on.
        cell: CellCoord,
    },
    /// Adds one snake at the provided cell. Cells may hold several snakes.
    SpawnSnake {
        /// Cell the snake starts on.
        cell: CellCoord,
    },
    /// The player waits in place for one step.
    StandPlayer,
    /// The player attempts to move (or jump) in the provided direction.
    MovePlayer {
        /// Direction of travel for the attempted move.
        direction: Direction,
    },
    /// Advances every snake one step and resolves collisions with the player.
    AdvanceSnakes {
        /// Direction assigned to each snake, in snake storage order.
        ///
        /// Snakes without a matching entry stay where they are.
        directions: Vec<Direction>,
    },
}

/// Events reported by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the player token entered the pit.
    PlayerPlaced {
        /// Cell the player occupies.
        cell: CellCoord,
    },
    /// Reports that a player placement was ignored because one already exists.
    PlayerPlacementRejected {
        /// Cell provided in the rejected request.
        cell: CellCoord,
    },
    /// Confirms that a snake entered the pit.
    SnakeSpawned {
        /// Cell the snake occupies.
        cell: CellCoord,
    },
    /// Reports that a snake was not added because the population is full.
    SnakeSpawnRejected {
        /// Cell provided in the rejected request.
        cell: CellCoord,
    },
    /// Confirms that the player waited in place.
    PlayerStood {
        /// Step count after the stand.
        age: u32,
    },
    /// Confirms an ordinary single-cell move.
    PlayerMoved {
        /// Cell the player left.
        from: CellCoord,
        /// Cell the player arrived at.
        to: CellCoord,
    },
    /// Reports a move into the wall; only the step count changed.
    PlayerBumpedWall {
        /// Cell the player remains on.
        cell: CellCoord,
        /// Direction of the attempted move.
        direction: Direction,
    },
    /// Reports a jump that had no landing cell before the wall.
    JumpBlocked {
        /// Cell the player remains on.
        cell: CellCoord,
        /// Direction of the attempted jump.
        direction: Direction,
    },
    /// Confirms that the player leapt over a snake, destroying it.
    PlayerJumped {
        /// Cell the player left.
        from: CellCoord,
        /// Cell of the destroyed snake.
        over: CellCoord,
        /// Cell the player landed on.
        to: CellCoord,
    },
    /// Confirms that a jump was credited in the history ledger.
    EliminationRecorded {
        /// Landing cell the elimination was recorded at.
        cell: CellCoord,
    },
    /// Confirms that every snake took its step for the turn.
    SnakesAdvanced {
        /// Number of snakes that moved or attempted to move.
        snakes: usize,
    },
    /// Announces the death of the player.
    PlayerKilled {
        /// Cell the player died on.
        cell: CellCoord,
        /// What killed the player.
        cause: DeathCause,
    },
}

/// Reasons the player may die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    /// A jump ended on a cell that still held a snake.
    LandedOnSnake,
    /// A snake moved onto the player's cell.
    Bitten,
}

/// Input vocabulary accepted by the game driver each turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerCommand {
    /// Wait in place for one turn.
    Stand,
    /// Move (or jump) in the provided direction.
    Move(Direction),
    /// Show the elimination history without consuming a turn.
    ShowHistory,
    /// End the session immediately.
    Quit,
}

impl From<Direction> for PlayerCommand {
    fn from(direction: Direction) -> Self {
        Self::Move(direction)
    }
}

/// Cardinal movement directions available to every token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Every direction, in the order random draws index into.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Location of a single pit cell. Rows and columns are 1-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    row: u32,
    column: u32,
}

impl CellCoord {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// One-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// One-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Returns the cell `distance` steps away in `direction`.
    ///
    /// Yields `None` when the result would fall below row or column one or
    /// overflow; it does not check any upper bound.
    #[must_use]
    pub fn step(self, direction: Direction, distance: u32) -> Option<CellCoord> {
        let (row, column) = match direction {
            Direction::Up => (self.row.checked_sub(distance)?, self.column),
            Direction::Down => (self.row.checked_add(distance)?, self.column),
            Direction::Left => (self.row, self.column.checked_sub(distance)?),
            Direction::Right => (self.row, self.column.checked_add(distance)?),
        };
        if row == 0 || column == 0 {
            return None;
        }
        Some(CellCoord::new(row, column))
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

/// Valid coordinate rectangle of a pit: `[1, rows] x [1, columns]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    rows: u32,
    columns: u32,
}

impl Bounds {
    /// Creates bounds without validating them against any configuration.
    ///
    /// Use [`PitConfig::bounds`] to obtain validated bounds.
    #[must_use]
    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Number of rows in the pit.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the pit.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Total number of cells covered by the bounds.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let cells = u64::from(self.rows) * u64::from(self.columns);
        usize::try_from(cells).unwrap_or(usize::MAX)
    }

    /// Reports whether the cell lies within the bounds.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.row >= 1 && cell.row <= self.rows && cell.column >= 1 && cell.column <= self.columns
    }

    /// Number of cells between `cell` and the wall in `direction`.
    ///
    /// Cells outside the bounds report zero.
    #[must_use]
    pub const fn reach(&self, cell: CellCoord, direction: Direction) -> u32 {
        if !self.contains(cell) {
            return 0;
        }
        match direction {
            Direction::Up => cell.row - 1,
            Direction::Down => self.rows - cell.row,
            Direction::Left => cell.column - 1,
            Direction::Right => self.columns - cell.column,
        }
    }

    /// Row-major dense index of the cell, if it lies within the bounds.
    #[must_use]
    pub fn index(&self, cell: CellCoord) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let row = usize::try_from(cell.row - 1).ok()?;
        let column = usize::try_from(cell.column - 1).ok()?;
        let width = usize::try_from(self.columns).ok()?;
        Some(row * width + column)
    }

    /// Iterator over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let columns = self.columns;
        (1..=self.rows)
            .flat_map(move |row| (1..=columns).map(move |column| CellCoord::new(row, column)))
    }
}

/// Limits a pit and game are validated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitConfig {
    /// Largest accepted number of rows.
    pub max_rows: u32,
    /// Largest accepted number of columns.
    pub max_columns: u32,
    /// Largest snake population the pit holds at once.
    pub max_snakes: usize,
}

impl PitConfig {
    /// Creates a configuration with explicit limits.
    #[must_use]
    pub const fn new(max_rows: u32, max_columns: u32, max_snakes: usize) -> Self {
        Self {
            max_rows,
            max_columns,
            max_snakes,
        }
    }

    /// Validates the requested dimensions and returns the matching bounds.
    ///
    /// Configured maxima above [`MAX_GRID_EXTENT`] are clamped to it.
    pub fn bounds(&self, rows: u32, columns: u32) -> Result<Bounds, ConfigError> {
        let max_rows = self.max_rows.min(MAX_GRID_EXTENT);
        let max_columns = self.max_columns.min(MAX_GRID_EXTENT);
        if rows == 0 || columns == 0 || rows > max_rows || columns > max_columns {
            return Err(ConfigError::InvalidDimensions { rows, columns });
        }
        Ok(Bounds::new(rows, columns))
    }
}

impl Default for PitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROWS, DEFAULT_MAX_COLUMNS, DEFAULT_MAX_SNAKES)
    }
}

/// Misuse of the construction API. Callers are expected to abort on these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The pit dimensions are zero or exceed the configured maximum.
    #[error("pit created with invalid size {rows} by {columns}")]
    InvalidDimensions {
        /// Requested number of rows.
        rows: u32,
        /// Requested number of columns.
        columns: u32,
    },
    /// A snake was placed outside the pit.
    #[error("snake created with invalid coordinates {cell}")]
    SnakeOutOfBounds {
        /// Offending cell.
        cell: CellCoord,
    },
    /// The player was placed outside the pit.
    #[error("player created with invalid coordinates {cell}")]
    PlayerOutOfBounds {
        /// Offending cell.
        cell: CellCoord,
    },
    /// More snakes were requested than the pit can hold.
    #[error("cannot create game with {requested} snakes; only {max} are allowed")]
    TooManySnakes {
        /// Requested population.
        requested: usize,
        /// Configured maximum population.
        max: usize,
    },
    /// Snakes were requested on a 1x1 pit, which the player fills.
    #[error("cannot create game with nowhere to place the snakes")]
    NowhereToPlaceSnakes,
}

/// Immutable representation of the player's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// Cell currently occupied by the player.
    pub cell: CellCoord,
    /// Number of stand or move commands the player has taken.
    pub age: u32,
    /// Whether the player has died.
    pub dead: bool,
}

/// Read-only snapshot of every snake's cell, in storage order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnakeView {
    cells: Vec<CellCoord>,
}

impl SnakeView {
    /// Creates a new snake view from the provided cells.
    #[must_use]
    pub fn from_cells(cells: Vec<CellCoord>) -> Self {
        Self { cells }
    }

    /// Iterator over the captured snake cells in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &CellCoord> {
        self.cells.iter()
    }

    /// Consumes the view, yielding the underlying cells.
    #[must_use]
    pub fn into_vec(self) -> Vec<CellCoord> {
        self.cells
    }
}

/// Read-only copy of the elimination ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryView {
    bounds: Bounds,
    counts: Vec<u32>,
}

impl HistoryView {
    /// Creates a view from row-major counters covering `bounds`.
    ///
    /// Missing trailing counters read as zero.
    #[must_use]
    pub fn new(bounds: Bounds, counts: Vec<u32>) -> Self {
        Self { bounds, counts }
    }

    /// Bounds covered by the ledger.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Eliminations recorded at the cell; zero outside the bounds.
    #[must_use]
    pub fn count(&self, cell: CellCoord) -> u32 {
        self.bounds
            .index(cell)
            .and_then(|index| self.counts.get(index).copied())
            .unwrap_or(0)
    }

    /// Sum of all recorded eliminations.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|count| u64::from(*count)).sum()
    }
}

/// Read-only snapshot of everything a pit renderer needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PitView {
    bounds: Bounds,
    snake_counts: Vec<u32>,
    snake_total: usize,
    player: Option<PlayerSnapshot>,
}

impl PitView {
    /// Captures a view from row-major per-cell snake counts.
    #[must_use]
    pub fn new(
        bounds: Bounds,
        snake_counts: Vec<u32>,
        snake_total: usize,
        player: Option<PlayerSnapshot>,
    ) -> Self {
        Self {
            bounds,
            snake_counts,
            snake_total,
            player,
        }
    }

    /// Bounds of the captured pit.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of snakes on the cell; zero outside the bounds.
    #[must_use]
    pub fn snakes_at(&self, cell: CellCoord) -> u32 {
        self.bounds
            .index(cell)
            .and_then(|index| self.snake_counts.get(index).copied())
            .unwrap_or(0)
    }

    /// Number of snakes remaining in the pit.
    #[must_use]
    pub const fn snake_total(&self) -> usize {
        self.snake_total
    }

    /// Snapshot of the player, if one was placed.
    #[must_use]
    pub const fn player(&self) -> Option<PlayerSnapshot> {
        self.player
    }
}
