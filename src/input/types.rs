//! Core types for terminal key input: KeyEvent, KeyCode, KeyModifier

use std::fmt;

/// Modifier reported alongside a key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyModifier {
    Control,
    Shift,
    Alt,
    /// A modifier field was present but did not name a known modifier
    None,
}

impl KeyModifier {
    /// Map the modifier parameter of `ESC [ n ; m X` (xterm encoding)
    pub fn from_csi_param(param: u8) -> Self {
        match param {
            2 => KeyModifier::Shift,
            3 => KeyModifier::Alt,
            5 => KeyModifier::Control,
            _ => KeyModifier::None,
        }
    }
}

impl fmt::Display for KeyModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyModifier::Control => write!(f, "Ctrl"),
            KeyModifier::Shift => write!(f, "Shift"),
            KeyModifier::Alt => write!(f, "Alt"),
            KeyModifier::None => write!(f, "None"),
        }
    }
}

/// A decoded key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Bytes that did not decode to a known key
    Undefined,

    // Named keys
    Backspace,
    Enter,
    Tab,
    BackTab,
    Delete,
    Insert,
    Esc,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,

    // Function keys
    F(u8), // F1-F12

    /// A printable character
    Char(char),
}

impl KeyCode {
    /// Translate the final byte / numeric parameter of an escape sequence
    pub fn from_sequence_number(number: u8) -> Self {
        match number {
            72 => KeyCode::Home,    // ESC [ H
            2 => KeyCode::Insert,   // ESC [ 2 ~
            3 => KeyCode::Delete,   // ESC [ 3 ~
            4 => KeyCode::End,      // ESC [ 4 ~
            5 => KeyCode::PageUp,   // ESC [ 5 ~
            6 => KeyCode::PageDown, // ESC [ 6 ~
            80 => KeyCode::F(1),    // ESC O P
            81 => KeyCode::F(2),    // ESC O Q
            82 => KeyCode::F(3),    // ESC O R
            83 => KeyCode::F(4),    // ESC O S
            15 => KeyCode::F(5),    // ESC [ 15 ~
            17 => KeyCode::F(6),    // ESC [ 17 ~
            18 => KeyCode::F(7),    // ESC [ 18 ~
            19 => KeyCode::F(8),    // ESC [ 19 ~
            20 => KeyCode::F(9),    // ESC [ 20 ~
            21 => KeyCode::F(10),   // ESC [ 21 ~
            23 => KeyCode::F(11),   // ESC [ 23 ~
            24 => KeyCode::F(12),   // ESC [ 24 ~
            65 => KeyCode::Up,      // ESC [ A
            66 => KeyCode::Down,    // ESC [ B
            67 => KeyCode::Right,   // ESC [ C
            68 => KeyCode::Left,    // ESC [ D
            90 => KeyCode::BackTab, // ESC [ Z
            _ => KeyCode::Undefined,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Undefined => write!(f, "Undefined"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::BackTab => write!(f, "BackTab"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Insert => write!(f, "Insert"),
            KeyCode::Esc => write!(f, "Esc"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Char(c) => write!(f, "{}", c),
        }
    }
}

/// A single keystroke: a key with an optional modifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifier>,
}

impl KeyEvent {
    /// Create a keystroke with no modifier
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: None,
        }
    }

    /// Create a keystroke with a modifier
    pub const fn with_modifier(code: KeyCode, modifier: KeyModifier) -> Self {
        Self {
            code,
            modifiers: Some(modifier),
        }
    }

    /// The decode-failure sentinel
    pub const fn undefined() -> Self {
        Self::new(KeyCode::Undefined)
    }

    pub fn is_undefined(&self) -> bool {
        self.code == KeyCode::Undefined
    }

    /// Control chord on a character, e.g. Ctrl+S
    pub fn is_ctrl_char(&self, c: char) -> bool {
        self.code == KeyCode::Char(c) && self.modifiers == Some(KeyModifier::Control)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modifiers {
            Some(modifier) if modifier != KeyModifier::None => {
                write!(f, "{}+{}", modifier, self.code)
            }
            _ => write!(f, "{}", self.code),
        }
    }
}
