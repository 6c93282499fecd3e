//! Line-oriented interactive game session.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use rookery_core::{GameState, Move, Square, Status};

use crate::command::{Command, parse_command};
use crate::config::SessionConfig;
use crate::error::SessionError;

const HELP: &str = "\
commands:
  new                      start a new game
  board                    print the board
  moves <square>           list legal destinations, e.g. moves e2
  move <from> <to>         play a move, e.g. move e2 e4 (or just e2e4)
  status                   show whose turn it is or how the game ended
  position <placement> [w|b]
                           load a FEN piece placement
  set <option> on|off      options: show_board, coordinates, glyphs
  help                     show this text
  quit                     leave";

/// Whether the read loop keeps going after a command.
enum Flow {
    Continue,
    Quit,
}

/// A single game driven by text commands.
///
/// Reads commands from any [`BufRead`] and writes responses to any [`Write`].
/// A command that fails is reported on the output and the session continues;
/// only I/O errors end it early.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: GameState,
    config: SessionConfig,
}

impl Session {
    /// Create a session on a new game with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session on a new game with the given options.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            game: GameState::new(),
            config,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The current display options.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run the read loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), SessionError> {
        info!("session started");
        if self.config.show_board {
            self.print_board(&mut out)?;
        }

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                debug!(cmd = %trimmed, "received command");
            }

            let flow = parse_command(trimmed).and_then(|cmd| self.execute(cmd, &mut out));
            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err @ SessionError::Io { .. }) => return Err(err),
                Err(err) => {
                    debug!(error = %err, "command failed");
                    writeln!(out, "error: {err}")?;
                }
            }
            out.flush()?;
        }

        info!("session ended");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, SessionError> {
        match cmd {
            Command::Empty => {}
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::New => {
                self.game = GameState::new();
                info!("new game");
                self.print_board(out)?;
            }
            Command::Board => self.print_board(out)?,
            Command::Status => self.print_status(out)?,
            Command::Moves(sq) => self.print_moves(sq, out)?,
            Command::Move(mv) => self.play(mv, out)?,
            Command::Position { board, turn } => {
                self.game = GameState::from_board(board, turn);
                info!(placement = %board.placement(), %turn, "position loaded");
                self.print_board(out)?;
                self.print_status(out)?;
            }
            Command::Set(option) => {
                self.config.apply(option);
                debug!(?option, "option set");
                writeln!(out, "ok")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn play<W: Write>(&mut self, mv: Move, out: &mut W) -> Result<(), SessionError> {
        let outcome = self.game.play(mv)?;

        match outcome.captured {
            Some(captured) => writeln!(out, "{} {mv} takes {}", outcome.piece, captured.kind())?,
            None => writeln!(out, "{} {mv}", outcome.piece)?,
        }
        if self.config.show_board {
            self.print_board(out)?;
        }
        match outcome.status.message() {
            Some(message) => writeln!(out, "{message}")?,
            None if self.game.in_check() => writeln!(out, "{} is in check.", self.game.turn())?,
            None => {}
        }
        Ok(())
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        let pretty = self
            .game
            .board()
            .pretty()
            .coordinates(self.config.coordinates)
            .glyphs(self.config.glyphs);
        writeln!(out, "{pretty}")?;
        Ok(())
    }

    fn print_status<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        match self.game.status() {
            Status::Ongoing => {
                let turn = self.game.turn();
                if self.game.in_check() {
                    writeln!(out, "ongoing, {turn} to move (in check)")?;
                } else {
                    writeln!(out, "ongoing, {turn} to move")?;
                }
            }
            status => {
                if let Some(message) = status.message() {
                    writeln!(out, "{message}")?;
                }
            }
        }
        Ok(())
    }

    fn print_moves<W: Write>(&self, sq: Square, out: &mut W) -> Result<(), SessionError> {
        let Some(piece) = self.game.board().get(sq) else {
            writeln!(out, "no piece on {sq}")?;
            return Ok(());
        };
        let moves = self.game.legal_moves(sq);
        if moves.is_empty() {
            writeln!(out, "{piece} on {sq} has no legal moves")?;
        } else {
            writeln!(out, "{piece} on {sq}: {moves}")?;
        }
        Ok(())
    }
}
