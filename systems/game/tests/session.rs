use std::collections::VecDeque;

use snake_pit_core::{Direction, Event, HistoryView, PitConfig, PitView, PlayerCommand};
use snake_pit_game::{Frontend, Game, GameState, GameStatus, TurnOutcome};
use snake_pit_world::query;

#[derive(Default)]
struct ScriptedFrontend {
    commands: VecDeque<PlayerCommand>,
    pits_shown: usize,
    histories_shown: usize,
    commands_read: usize,
    events_shown: Vec<Vec<Event>>,
}

impl ScriptedFrontend {
    fn with_commands(commands: impl IntoIterator<Item = PlayerCommand>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Frontend for ScriptedFrontend {
    type Error = std::convert::Infallible;

    fn show_pit(&mut self, _pit: &PitView, events: &[Event]) -> Result<(), Self::Error> {
        self.pits_shown += 1;
        self.events_shown.push(events.to_vec());
        Ok(())
    }

    fn show_history(&mut self, _history: &HistoryView) -> Result<(), Self::Error> {
        self.histories_shown += 1;
        Ok(())
    }

    fn next_command(&mut self) -> Result<Option<PlayerCommand>, Self::Error> {
        self.commands_read += 1;
        Ok(self.commands.pop_front())
    }
}

fn classic_game(seed: u64) -> Game {
    Game::new(12, 18, 28, PitConfig::default(), seed).expect("valid game")
}

#[test]
fn setup_places_player_and_every_snake() {
    let game = classic_game(1);
    let pit = game.pit();
    let player = query::player(pit).expect("player placed");

    assert_eq!(game.state(), GameState::Running);
    assert_eq!(query::snake_count(pit), 28);
    assert_eq!(query::snakes_at(pit, player.cell), 0);
    assert_eq!(player.age, 0);
    assert!(!player.dead);
}

#[test]
fn zero_snakes_end_the_session_before_any_command() {
    let mut game = Game::new(4, 4, 0, PitConfig::default(), 5).expect("valid game");
    assert_eq!(game.state(), GameState::Ended);

    let mut frontend = ScriptedFrontend::with_commands([PlayerCommand::Stand]);
    let status = game.play(&mut frontend).expect("infallible");

    assert_eq!(status, GameStatus::Won);
    assert_eq!(frontend.commands_read, 0);
    assert_eq!(frontend.pits_shown, 1);
    assert_eq!(query::player(game.pit()).map(|player| player.age), Some(0));
}

#[test]
fn show_history_does_not_consume_a_turn() {
    let mut game = classic_game(2);
    let snakes_before = query::snake_view(game.pit());
    let player_before = query::player(game.pit());

    let outcome = game.turn(PlayerCommand::ShowHistory);

    match outcome {
        TurnOutcome::History(history) => assert_eq!(history.total(), 0),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(query::snake_view(game.pit()), snakes_before);
    assert_eq!(query::player(game.pit()), player_before);
    assert_eq!(game.turn_count(), 0);
}

#[test]
fn quit_ends_without_moving_the_snakes() {
    let mut game = classic_game(3);
    let snakes_before = query::snake_view(game.pit());

    assert_eq!(game.turn(PlayerCommand::Quit), TurnOutcome::Ended(GameStatus::Quit));

    assert_eq!(game.state(), GameState::Ended);
    assert_eq!(game.status(), GameStatus::Quit);
    assert_eq!(query::snake_view(game.pit()), snakes_before);
    assert_eq!(
        game.turn(PlayerCommand::Stand),
        TurnOutcome::Ended(GameStatus::Quit),
        "ended sessions ignore further commands"
    );
    assert_eq!(query::player(game.pit()).map(|player| player.age), Some(0));
}

#[test]
fn each_played_turn_ages_the_player_and_advances_the_snakes() {
    let mut game = classic_game(4);
    let outcome = game.turn(PlayerCommand::Stand);

    assert!(matches!(outcome, TurnOutcome::Continue | TurnOutcome::Ended(GameStatus::Lost)));
    assert_eq!(query::player(game.pit()).map(|player| player.age), Some(1));
    assert_eq!(game.turn_count(), 1);
    assert!(game
        .last_events()
        .iter()
        .any(|event| matches!(event, Event::SnakesAdvanced { snakes: 28 })));
}

#[test]
fn standing_still_eventually_ends_the_session() {
    let mut game = Game::new(3, 3, 8, PitConfig::default(), 0xabad_cafe).expect("valid game");
    let mut frontend =
        ScriptedFrontend::with_commands(std::iter::repeat(PlayerCommand::Stand).take(10_000));

    let status = game.play(&mut frontend).expect("infallible");

    assert_eq!(status, GameStatus::Lost);
    assert_eq!(game.state(), GameState::Ended);
    assert!(query::player(game.pit()).is_some_and(|player| player.dead));
    assert_eq!(frontend.pits_shown, frontend.commands_read + 1);
}

#[test]
fn exhausted_input_quits() {
    let mut game = classic_game(6);
    let mut frontend = ScriptedFrontend::with_commands([PlayerCommand::ShowHistory]);

    let status = game.play(&mut frontend).expect("infallible");

    assert_eq!(status, GameStatus::Quit);
    assert_eq!(frontend.histories_shown, 1);
    assert_eq!(frontend.commands_read, 2);
    assert_eq!(game.turn_count(), 0);
}

#[test]
fn deterministic_replay_produces_identical_sessions() {
    let script = [
        PlayerCommand::Move(Direction::Up),
        PlayerCommand::Stand,
        PlayerCommand::Move(Direction::Left),
        PlayerCommand::ShowHistory,
        PlayerCommand::Move(Direction::Down),
        PlayerCommand::Move(Direction::Right),
        PlayerCommand::Move(Direction::Right),
        PlayerCommand::Stand,
    ];

    let replay = |seed: u64| {
        let mut game = classic_game(seed);
        let mut log = Vec::new();
        for command in script.iter().cycle().take(64) {
            let outcome = game.turn(*command);
            log.extend(game.last_events().iter().cloned());
            if matches!(outcome, TurnOutcome::Ended(_)) {
                break;
            }
        }
        (log, query::pit_view(game.pit()), game.status())
    };

    assert_eq!(replay(0x4d59_5df4_d0f3_3173), replay(0x4d59_5df4_d0f3_3173));
}

#[test]
fn redraws_after_turn_free_commands_repeat_no_events() {
    let survives_a_stand = |seed: u64| {
        let mut game = classic_game(seed);
        game.turn(PlayerCommand::Stand) == TurnOutcome::Continue
    };
    let seed = (0..64).find(|seed| survives_a_stand(*seed)).expect("some seed survives");

    let mut game = classic_game(seed);
    let mut frontend =
        ScriptedFrontend::with_commands([PlayerCommand::Stand, PlayerCommand::ShowHistory]);
    let status = game.play(&mut frontend).expect("infallible");

    assert_eq!(status, GameStatus::Quit);
    assert_eq!(frontend.histories_shown, 1);
    let frames = &frontend.events_shown;
    assert_eq!(frames.len(), 4);
    assert!(frames[0].is_empty(), "setup events are not shown");
    assert!(frames[1]
        .iter()
        .any(|event| matches!(event, Event::SnakesAdvanced { .. })));
    assert!(frames[2].is_empty(), "history redraw does not repeat the stand");
    assert!(frames[3].is_empty(), "quitting plays no turn");
    assert_eq!(game.last_events(), frames[1].as_slice());
}
