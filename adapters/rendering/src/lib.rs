#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Text rendering of Snake Pit views.
//!
//! Everything here is pure: views go in, strings come out. Adapters decide
//! where the text is written.

use std::fmt::Write as _;

use snake_pit_core::{CellCoord, DeathCause, Event, HistoryView, PitView};

/// Glyph of a cell without snakes, player or eliminations.
pub const EMPTY_GLYPH: char = '.';
/// Glyph of a living player.
pub const PLAYER_GLYPH: char = '@';
/// Glyph of a dead player.
pub const DEAD_PLAYER_GLYPH: char = '*';
/// Glyph of a cell holding exactly one snake.
pub const SNAKE_GLYPH: char = 'S';

/// Glyph for a cell holding `count` snakes.
///
/// One snake shows as `S`, two to eight as their digit, and larger stacks
/// saturate at `9`.
#[must_use]
pub fn snake_glyph(count: u32) -> char {
    match count {
        0 => EMPTY_GLYPH,
        1 => SNAKE_GLYPH,
        2..=8 => char::from_digit(count, 10).unwrap_or('9'),
        _ => '9',
    }
}

/// Glyph for a cell with `count` recorded eliminations.
///
/// Counts map to `A` through `Z` and saturate at `Z`.
#[must_use]
pub fn history_glyph(count: u32) -> char {
    match count {
        0 => EMPTY_GLYPH,
        1..=26 => char::from(b'A' + (count - 1) as u8),
        _ => 'Z',
    }
}

/// Renders the pit grid followed by the status lines.
#[must_use]
pub fn render_pit(view: &PitView, message: &str) -> String {
    let bounds = view.bounds();
    let player = view.player();
    let mut out = String::new();

    for row in 1..=bounds.rows() {
        for column in 1..=bounds.columns() {
            let cell = CellCoord::new(row, column);
            let glyph = match player {
                Some(player) if player.cell == cell && player.dead => DEAD_PLAYER_GLYPH,
                Some(player) if player.cell == cell => PLAYER_GLYPH,
                _ => snake_glyph(view.snakes_at(cell)),
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out.push_str("\n\n");

    if !message.is_empty() {
        let _ = writeln!(out, "{message}");
    }
    let _ = writeln!(out, "There are {} snakes remaining.", view.snake_total());
    match player {
        None => out.push_str("There is no player.\n"),
        Some(player) => {
            if player.age > 0 {
                let _ = writeln!(out, "The player has lasted {} steps.", player.age);
            }
            if player.dead {
                out.push_str("The player is dead.\n");
            }
        }
    }
    out
}

/// Renders the elimination ledger, one line per pit row.
#[must_use]
pub fn render_history(view: &HistoryView) -> String {
    let bounds = view.bounds();
    let mut out = String::new();
    for row in 1..=bounds.rows() {
        for column in 1..=bounds.columns() {
            out.push(history_glyph(view.count(CellCoord::new(row, column))));
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Summarises the notable events of a turn as a short message.
#[must_use]
pub fn turn_message(events: &[Event]) -> String {
    let lines: Vec<String> = events
        .iter()
        .filter_map(|event| match event {
            Event::EliminationRecorded { cell } => {
                Some(format!("You jumped a snake and landed on {cell}."))
            }
            Event::JumpBlocked { .. } => {
                Some("There is no room to land beyond that snake.".to_owned())
            }
            Event::PlayerBumpedWall { .. } => Some("You bumped into the wall.".to_owned()),
            Event::PlayerKilled {
                cause: DeathCause::LandedOnSnake,
                ..
            } => Some("You landed on another snake!".to_owned()),
            Event::PlayerKilled {
                cause: DeathCause::Bitten,
                ..
            } => Some("A snake slithered onto you!".to_owned()),
            _ => None,
        })
        .collect();
    lines.join("\n")
}
