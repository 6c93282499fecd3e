//! Text front end for rookery: command parsing and an interactive game session.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use config::{SessionConfig, SessionOption};
pub use error::SessionError;
pub use session::Session;
