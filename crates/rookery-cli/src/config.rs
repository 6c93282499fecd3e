//! Display options adjustable at runtime with `set`.

/// Presentation settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after every applied move.
    pub show_board: bool,
    /// Print rank digits and file letters around the board.
    pub coordinates: bool,
    /// Draw pieces as Unicode chess symbols.
    pub glyphs: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            coordinates: true,
            glyphs: false,
        }
    }
}

/// A single option change requested with `set <name> <on|off>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// `set show_board on|off`
    ShowBoard(bool),
    /// `set coordinates on|off`
    Coordinates(bool),
    /// `set glyphs on|off`
    Glyphs(bool),
}

impl SessionConfig {
    /// Apply an option change.
    pub fn apply(&mut self, option: SessionOption) {
        match option {
            SessionOption::ShowBoard(on) => self.show_board = on,
            SessionOption::Coordinates(on) => self.coordinates = on,
            SessionOption::Glyphs(on) => self.glyphs = on,
        }
    }
}
