//! Terminal-independent key events.
//!
//! The TUI converts crossterm events into [`InputKey`] at its boundary, so the
//! update function and its tests never see crossterm types.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// A typed character, including space
    Char(char),
    /// Ctrl plus a character, always lowercase (`CharCtrl('s')` for Ctrl+S)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// F1 to F12
    F(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_differs_from_plain() {
        assert_ne!(InputKey::CharCtrl('s'), InputKey::Char('s'));
        assert_eq!(InputKey::F(5), InputKey::F(5));
    }
}
