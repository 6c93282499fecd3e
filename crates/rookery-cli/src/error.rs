//! Session errors.

use rookery_core::{MoveError, PlacementError};

/// Errors that can occur while running an interactive session.
///
/// Everything except [`SessionError::Io`] is reported to the user and the
/// session carries on.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The first word of the line is not a known command.
    #[error("unknown command: {command} (try `help`)")]
    UnknownCommand {
        /// The unrecognized word.
        command: String,
    },

    /// A command was given without one of its required arguments.
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
        /// Description of what is missing.
        argument: &'static str,
    },

    /// A square could not be parsed from algebraic notation.
    #[error("invalid square: {text}")]
    InvalidSquare {
        /// The text that failed to parse.
        text: String,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name given.
        name: String,
    },

    /// `set` was given something other than `on` or `off`.
    #[error("expected on or off, found {value}")]
    InvalidSwitch {
        /// The value given.
        value: String,
    },

    /// A position could not be loaded.
    #[error("invalid position: {0}")]
    Placement(#[from] PlacementError),

    /// The game rejected a move.
    #[error("move rejected: {0}")]
    Move(#[from] MoveError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
