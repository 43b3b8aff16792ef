//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples the line editor from terminal libraries so the same state
/// machine runs under any frontend and in simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character, including space.
    Char(char),
    /// Enter/Return key (submit).
    Enter,
    /// Backspace key (delete last character).
    Backspace,
    /// Up arrow key (recall older).
    Up,
    /// Down arrow key (recall newer).
    Down,
    /// Escape key (quit).
    Esc,
    /// Ctrl+C (quit).
    Interrupt,
}
