#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Turn driver that wires the pit and its systems into a playable session.
//!
//! A [`Game`] owns one [`Pit`]. Setup scatters the player and the snakes with
//! the populate system; every turn afterwards applies one [`PlayerCommand`],
//! lets the slither system move the snakes, and checks whether the session
//! is over.

use snake_pit_core::{
    Command, ConfigError, Event, HistoryView, PitConfig, PitView, PlayerCommand,
};
use snake_pit_system_populate::Populate;
use snake_pit_system_slither::Slither;
use snake_pit_world::{self as world, query, Pit};
use tracing::{debug, info, warn};

/// Mixed into the session seed so snake movement draws from its own stream.
const SLITHER_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Lifecycle of a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    /// The pit is being created and populated.
    Setup,
    /// Commands are being accepted.
    Running,
    /// The session is over; no further commands are applied.
    Ended,
}

/// How a session stands from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The player is alive and snakes remain.
    Running,
    /// Every snake was eliminated.
    Won,
    /// The player died.
    Lost,
    /// The player quit before the session was decided.
    Quit,
}

/// Result of applying a single [`PlayerCommand`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn was played and the session continues.
    Continue,
    /// The ledger requested by [`PlayerCommand::ShowHistory`]. No turn was used.
    History(HistoryView),
    /// The session is over.
    Ended(GameStatus),
}

/// Presentation seam used by [`Game::play`].
pub trait Frontend {
    /// Error raised by the frontend's I/O.
    type Error;

    /// Displays the pit together with the events of the previous turn.
    fn show_pit(&mut self, pit: &PitView, events: &[Event]) -> Result<(), Self::Error>;

    /// Displays the elimination ledger.
    fn show_history(&mut self, history: &HistoryView) -> Result<(), Self::Error>;

    /// Reads the next validated command; `None` means input is exhausted.
    fn next_command(&mut self) -> Result<Option<PlayerCommand>, Self::Error>;
}

/// One game session.
#[derive(Debug)]
pub struct Game {
    pit: Pit,
    slither: Slither,
    state: GameState,
    quit: bool,
    turns: u64,
    last_events: Vec<Event>,
}

impl Game {
    /// Creates and populates a pit of `rows` x `columns` holding `snakes` snakes.
    ///
    /// All randomness derives from `seed`.
    pub fn new(
        rows: u32,
        columns: u32,
        snakes: usize,
        config: PitConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if snakes > config.max_snakes {
            return Err(ConfigError::TooManySnakes {
                requested: snakes,
                max: config.max_snakes,
            });
        }
        if rows == 1 && columns == 1 && snakes > 0 {
            return Err(ConfigError::NowhereToPlaceSnakes);
        }

        let mut game = Self {
            pit: Pit::new(rows, columns, config)?,
            slither: Slither::new(seed ^ SLITHER_SEED_SALT),
            state: GameState::Setup,
            quit: false,
            turns: 0,
            last_events: Vec::new(),
        };

        let mut commands = Vec::new();
        Populate::new(seed).handle(query::bounds(&game.pit), snakes, &mut commands);
        for command in commands {
            world::apply(&mut game.pit, command, &mut game.last_events)?;
        }
        game.last_events.clear();

        info!(rows, columns, snakes, seed, "session started");
        game.state = GameState::Running;
        game.refresh_state();
        Ok(game)
    }

    /// Applies one command and, unless it was turn-free, advances the snakes.
    pub fn turn(&mut self, command: PlayerCommand) -> TurnOutcome {
        if self.state != GameState::Running {
            return TurnOutcome::Ended(self.status());
        }

        let player_command = match command {
            PlayerCommand::ShowHistory => {
                return TurnOutcome::History(query::history_view(&self.pit));
            }
            PlayerCommand::Quit => {
                self.quit = true;
                self.end();
                return TurnOutcome::Ended(GameStatus::Quit);
            }
            PlayerCommand::Stand => Command::StandPlayer,
            PlayerCommand::Move(direction) => Command::MovePlayer { direction },
        };

        self.last_events.clear();
        self.execute(player_command);

        let mut commands = Vec::new();
        self.slither.handle(&query::snake_view(&self.pit), &mut commands);
        for command in commands {
            self.execute(command);
        }

        self.turns = self.turns.saturating_add(1);
        debug!(turn = self.turns, ?command, events = self.last_events.len(), "turn applied");

        self.refresh_state();
        match self.state {
            GameState::Ended => TurnOutcome::Ended(self.status()),
            GameState::Setup | GameState::Running => TurnOutcome::Continue,
        }
    }

    /// Drives the session through `frontend` until it ends.
    ///
    /// Exhausted input counts as quitting. A redraw that follows a turn-free
    /// command carries no events, so old messages are not repeated.
    pub fn play<F>(&mut self, frontend: &mut F) -> Result<GameStatus, F::Error>
    where
        F: Frontend,
    {
        let mut played = true;
        while self.state == GameState::Running {
            frontend.show_pit(&self.view(), self.shown_events(played))?;
            let command = frontend.next_command()?.unwrap_or(PlayerCommand::Quit);
            played = !matches!(command, PlayerCommand::ShowHistory | PlayerCommand::Quit);
            if let TurnOutcome::History(history) = self.turn(command) {
                frontend.show_history(&history)?;
            }
        }
        frontend.show_pit(&self.view(), self.shown_events(played))?;
        Ok(self.status())
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Current outcome from the player's point of view.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.quit {
            return GameStatus::Quit;
        }
        match query::player(&self.pit) {
            Some(player) if player.dead => GameStatus::Lost,
            _ if query::snake_count(&self.pit) == 0 => GameStatus::Won,
            _ => GameStatus::Running,
        }
    }

    /// Read-only access to the pit.
    #[must_use]
    pub const fn pit(&self) -> &Pit {
        &self.pit
    }

    /// Snapshot of the pit for rendering.
    #[must_use]
    pub fn view(&self) -> PitView {
        query::pit_view(&self.pit)
    }

    /// Events produced by the most recent played turn.
    #[must_use]
    pub fn last_events(&self) -> &[Event] {
        &self.last_events
    }

    /// Number of turns played; turn-free commands are not counted.
    #[must_use]
    pub const fn turn_count(&self) -> u64 {
        self.turns
    }

    fn shown_events(&self, played: bool) -> &[Event] {
        if played {
            &self.last_events
        } else {
            &[]
        }
    }

    fn execute(&mut self, command: Command) {
        if let Err(error) = world::apply(&mut self.pit, command, &mut self.last_events) {
            warn!(%error, "gameplay command rejected");
        }
    }

    fn refresh_state(&mut self) {
        if self.state == GameState::Running && self.status() != GameStatus::Running {
            self.end();
        }
    }

    fn end(&mut self) {
        self.state = GameState::Ended;
        info!(
            status = ?self.status(),
            turns = self.turns,
            eliminations = self.pit.history().total(),
            "session ended"
        );
    }
}
