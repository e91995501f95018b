//! Line-oriented terminal frontend.

use std::{
    env,
    io::{self, BufRead, Write},
};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
    tty::IsTty,
};
use snake_pit_core::{Direction, Event, HistoryView, PitView, PlayerCommand};
use snake_pit_game::{Frontend, GameStatus};
use snake_pit_rendering::{render_history, render_pit, turn_message};

const INTRO: &str = "You are the player (represented by '@' symbol) who is stuck in a pit of \
snakes (represented by 'S' or a number signifying how many snakes are at that spot)! You must \
try to kill the randomly moving snakes by jumping over them when they are next to you, the \
player. You navigate the playing field by pressing 'u'(up), 'd'(down), 'l'(left), or 'r'(right) \
to move the player around. You can simply press enter to stand in place and not move. To see \
how many snakes you have killed in what locations press 'h' for history. Happy gaming!";

const START_PROMPT: &str =
    "Press enter to continue or 'q' to quit now or at any point in the game...";
const MOVE_PROMPT: &str = "Move (u/d/l/r//h/q): ";
const HISTORY_PROMPT: &str = "Press enter to continue.";
const BELL: char = '\x07';

/// How the screen is wiped between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScreenMode {
    /// Clear the whole terminal and home the cursor.
    Clear,
    /// A single newline, for pipes and dumb terminals.
    Plain,
}

impl ScreenMode {
    /// Clears only when `stream` is a terminal that is not `TERM=dumb`.
    pub(crate) fn detect(stream: &impl IsTty) -> Self {
        let dumb = env::var("TERM").is_ok_and(|term| term == "dumb");
        if stream.is_tty() && !dumb {
            Self::Clear
        } else {
            Self::Plain
        }
    }
}

/// Translates one input line into a command.
///
/// Only the first character matters; an empty line stands still.
pub(crate) fn parse_command(line: &str) -> Option<PlayerCommand> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(first) = line.chars().next() else {
        return Some(PlayerCommand::Stand);
    };
    match first {
        'u' => Some(Direction::Up.into()),
        'd' => Some(Direction::Down.into()),
        'l' => Some(Direction::Left.into()),
        'r' => Some(Direction::Right.into()),
        'h' => Some(PlayerCommand::ShowHistory),
        'q' => Some(PlayerCommand::Quit),
        _ => None,
    }
}

/// [`Frontend`] over any line reader and writer.
#[derive(Debug)]
pub(crate) struct Terminal<R, W> {
    input: R,
    output: W,
    mode: ScreenMode,
    frame: String,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub(crate) fn new(input: R, output: W, mode: ScreenMode) -> Self {
        Self {
            input,
            output,
            mode,
            frame: String::new(),
        }
    }

    /// Prints the introduction and reports whether the player wants to play.
    pub(crate) fn introduce(&mut self) -> io::Result<bool> {
        writeln!(self.output, "{INTRO}")?;
        writeln!(self.output)?;
        writeln!(self.output, "{START_PROMPT}")?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            Some(line) => line.trim_end_matches(['\r', '\n']) != "q",
            None => false,
        })
    }

    /// Closing line once the session is over; quitting prints nothing.
    pub(crate) fn announce(&mut self, status: GameStatus) -> io::Result<()> {
        match status {
            GameStatus::Won => writeln!(self.output, "You win!")?,
            GameStatus::Lost => writeln!(self.output, "You lose.")?,
            GameStatus::Running | GameStatus::Quit => {}
        }
        self.output.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        match self.mode {
            ScreenMode::Clear => queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?,
            ScreenMode::Plain => writeln!(self.output)?,
        }
        Ok(())
    }

    fn redraw(&mut self) -> io::Result<()> {
        self.clear()?;
        self.output.write_all(self.frame.as_bytes())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Frontend for Terminal<R, W> {
    type Error = io::Error;

    fn show_pit(&mut self, pit: &PitView, events: &[Event]) -> io::Result<()> {
        self.frame = render_pit(pit, &turn_message(events));
        self.redraw()?;
        self.output.flush()
    }

    fn show_history(&mut self, history: &HistoryView) -> io::Result<()> {
        self.clear()?;
        write!(self.output, "{}{HISTORY_PROMPT}", render_history(history))?;
        self.output.flush()?;
        let _ = self.read_line()?;
        Ok(())
    }

    fn next_command(&mut self) -> io::Result<Option<PlayerCommand>> {
        loop {
            writeln!(self.output)?;
            write!(self.output, "{MOVE_PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(command) = parse_command(&line) {
                return Ok(Some(command));
            }
            writeln!(self.output, "{BELL}")?;
            self.redraw()?;
        }
    }
}
