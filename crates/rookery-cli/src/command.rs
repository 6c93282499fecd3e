//! Session command parsing.

use rookery_core::{Board, Color, Move, Square};

use crate::config::SessionOption;
use crate::error::SessionError;

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- start a fresh game from the standard position.
    New,
    /// `board` -- print the board.
    Board,
    /// `moves <square>` -- list legal destinations for the piece there.
    Moves(Square),
    /// `move <from> <to>`, `move <from><to>` or a bare `<from><to>`.
    Move(Move),
    /// `status` -- report whose turn it is or how the game ended.
    Status,
    /// `position <placement> [w|b]` -- load a position.
    Position {
        /// The parsed piece placement.
        board: Board,
        /// Side to move, White when omitted.
        turn: Color,
    },
    /// `set <option> <on|off>` -- change a display option.
    Set(SessionOption),
    /// `help` -- list commands.
    Help,
    /// `quit` -- end the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, SessionError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&first, rest)) = tokens.split_first() else {
        return Ok(Command::Empty);
    };

    match first {
        "new" => Ok(Command::New),
        "board" => Ok(Command::Board),
        "status" => Ok(Command::Status),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "moves" => {
            let text = rest.first().ok_or(SessionError::MissingArgument {
                command: "moves",
                argument: "a square",
            })?;
            Ok(Command::Moves(parse_square(text)?))
        }
        "move" => parse_move(rest),
        "position" => parse_position(rest),
        "set" => parse_set(rest),
        other => match Move::from_coords(other) {
            Some(mv) if rest.is_empty() => Ok(Command::Move(mv)),
            _ => Err(SessionError::UnknownCommand {
                command: other.to_string(),
            }),
        },
    }
}

fn parse_square(text: &str) -> Result<Square, SessionError> {
    Square::from_algebraic(text).ok_or_else(|| SessionError::InvalidSquare {
        text: text.to_string(),
    })
}

/// Parse the `move` command arguments.
///
/// Accepts either two squares (`move e2 e4`) or one coordinate pair (`move e2e4`).
fn parse_move(tokens: &[&str]) -> Result<Command, SessionError> {
    match tokens {
        [] => Err(SessionError::MissingArgument {
            command: "move",
            argument: "a source and destination square",
        }),
        [pair] if pair.len() == 4 => Move::from_coords(pair)
            .map(Command::Move)
            .ok_or_else(|| SessionError::InvalidSquare {
                text: pair.to_string(),
            }),
        [from] => {
            parse_square(from)?;
            Err(SessionError::MissingArgument {
                command: "move",
                argument: "a destination square",
            })
        }
        [from, to, ..] => Ok(Command::Move(Move::new(parse_square(from)?, parse_square(to)?))),
    }
}

/// Parse the `position` command arguments.
///
/// The placement is the piece-placement field of FEN. A full FEN record is
/// accepted as well; only its side-to-move field is used beyond the placement.
fn parse_position(tokens: &[&str]) -> Result<Command, SessionError> {
    let placement = tokens.first().ok_or(SessionError::MissingArgument {
        command: "position",
        argument: "a piece placement",
    })?;
    let board = Board::from_placement(placement)?;
    let turn = match tokens.get(1) {
        Some(field) => field.parse::<Color>()?,
        None => Color::White,
    };
    Ok(Command::Position { board, turn })
}

/// Parse the `set` command arguments: `set <option> <on|off>`.
fn parse_set(tokens: &[&str]) -> Result<Command, SessionError> {
    let (Some(name), Some(value)) = (tokens.first(), tokens.get(1)) else {
        return Err(SessionError::MissingArgument {
            command: "set",
            argument: "an option name and on|off",
        });
    };

    let on = match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => true,
        "off" | "false" | "no" => false,
        _ => {
            return Err(SessionError::InvalidSwitch {
                value: value.to_string(),
            });
        }
    };

    match *name {
        "show_board" => Ok(Command::Set(SessionOption::ShowBoard(on))),
        "coordinates" => Ok(Command::Set(SessionOption::Coordinates(on))),
        "glyphs" => Ok(Command::Set(SessionOption::Glyphs(on))),
        _ => Err(SessionError::UnknownOption {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("new").unwrap(), Command::New);
        assert_eq!(parse_command("board").unwrap(), Command::Board);
        assert_eq!(parse_command("status").unwrap(), Command::Status);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_empty_line() {
        assert_eq!(parse_command("").unwrap(), Command::Empty);
        assert_eq!(parse_command("   ").unwrap(), Command::Empty);
    }

    #[test]
    fn parse_moves() {
        assert_eq!(parse_command("moves e2").unwrap(), Command::Moves(Square::E2));
    }

    #[test]
    fn parse_moves_missing_square() {
        assert!(matches!(
            parse_command("moves"),
            Err(SessionError::MissingArgument { command: "moves", .. })
        ));
    }

    #[test]
    fn parse_moves_bad_square() {
        assert!(matches!(
            parse_command("moves z9"),
            Err(SessionError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn parse_move_two_squares() {
        let cmd = parse_command("move g1 f3").unwrap();
        assert_eq!(cmd, Command::Move(Move::new(Square::G1, Square::F3)));
    }

    #[test]
    fn parse_move_pair() {
        let cmd = parse_command("move e2e4").unwrap();
        assert_eq!(cmd, Command::Move(Move::new(Square::E2, Square::E4)));
    }

    #[test]
    fn parse_bare_coordinates() {
        let cmd = parse_command("e7e5").unwrap();
        assert_eq!(cmd, Command::Move(Move::new(Square::E7, Square::E5)));
    }

    #[test]
    fn parse_move_missing_destination() {
        assert!(matches!(
            parse_command("move e2"),
            Err(SessionError::MissingArgument { command: "move", .. })
        ));
        assert!(matches!(
            parse_command("move"),
            Err(SessionError::MissingArgument { command: "move", .. })
        ));
    }

    #[test]
    fn parse_move_bad_square() {
        assert!(matches!(
            parse_command("move e2 e9"),
            Err(SessionError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn parse_position_defaults_to_white() {
        let cmd = parse_command("position 8/8/8/8/8/5k2/6q1/7K").unwrap();
        match cmd {
            Command::Position { board, turn } => {
                assert_eq!(turn, Color::White);
                assert_eq!(board.placement(), "8/8/8/8/8/5k2/6q1/7K");
            }
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn parse_position_with_side() {
        let cmd = parse_command("position rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b").unwrap();
        assert!(matches!(cmd, Command::Position { turn: Color::Black, .. }));
    }

    #[test]
    fn parse_position_full_fen_record() {
        let cmd =
            parse_command("position rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        assert!(matches!(cmd, Command::Position { turn: Color::Black, .. }));
    }

    #[test]
    fn parse_position_invalid() {
        assert!(matches!(
            parse_command("position invalid"),
            Err(SessionError::Placement(_))
        ));
        assert!(matches!(
            parse_command("position 8/8/8/8/8/8/8/8 x"),
            Err(SessionError::Placement(_))
        ));
        assert!(matches!(
            parse_command("position"),
            Err(SessionError::MissingArgument { .. })
        ));
    }

    #[test]
    fn parse_set_options() {
        assert_eq!(
            parse_command("set show_board off").unwrap(),
            Command::Set(SessionOption::ShowBoard(false))
        );
        assert_eq!(
            parse_command("set coordinates ON").unwrap(),
            Command::Set(SessionOption::Coordinates(true))
        );
        assert_eq!(
            parse_command("set glyphs on").unwrap(),
            Command::Set(SessionOption::Glyphs(true))
        );
    }

    #[test]
    fn parse_set_errors() {
        assert!(matches!(
            parse_command("set colour on"),
            Err(SessionError::UnknownOption { .. })
        ));
        assert!(matches!(
            parse_command("set coordinates maybe"),
            Err(SessionError::InvalidSwitch { .. })
        ));
        assert!(matches!(
            parse_command("set coordinates"),
            Err(SessionError::MissingArgument { .. })
        ));
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(
            parse_command("foobar"),
            Err(SessionError::UnknownCommand { .. })
        ));
        assert!(matches!(
            parse_command("e2e4 now"),
            Err(SessionError::UnknownCommand { .. })
        ));
    }
}
