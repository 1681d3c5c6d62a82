//! Raw TTY bytes → key events
//!
//! Possible buffer shapes handled here:
//!
//! ```text
//! [ASCII]                     printable char (uppercase implies Shift)
//! [UTF-8 lead, cont...]       multi-byte printable char
//! [C0]                        Ctrl + letter
//! [ESC]                       Escape
//! [ESC, [, letter]            arrows, Home
//! [ESC, [, digit, ~]          Insert/Delete/End/PageUp/PageDown
//! [ESC, [, digit, digit, ~]   F5..F12
//! [ESC, [, digit, ;, mod, letter]   modified arrows
//! [ESC, O, letter]            F1..F4
//! ```

use std::collections::VecDeque;

use super::types::{KeyCode, KeyEvent, KeyModifier};

const ESC: u8 = 0x1B;
/// Control Sequence Introducer, the `[` after ESC
const CSI: u8 = b'[';
/// Single Shift Select of G3, the `O` after ESC
const SS3: u8 = b'O';
const TAB: u8 = 0x09;
const LF: u8 = 0x0A;
const CR: u8 = 0x0D;
const DEL: u8 = 0x7F;

/// Stateless decoder; all state lives in the caller's byte buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct EventParser;

impl EventParser {
    pub fn new() -> Self {
        Self
    }

    /// Decode one key event from the front of `buffer`, consuming its bytes.
    ///
    /// Returns `None` only when the buffer is empty. Unrecognized escape
    /// sequences decode to `KeyCode::Undefined` and discard the rest of the
    /// buffer, since their length cannot be known.
    pub fn parse(&self, buffer: &mut VecDeque<u8>) -> Option<KeyEvent> {
        let byte = buffer.pop_front()?;
        let event = match byte {
            ESC => self.parse_escape(buffer),
            TAB => KeyEvent::new(KeyCode::Tab),
            CR | LF => KeyEvent::new(KeyCode::Enter),
            DEL => KeyEvent::new(KeyCode::Backspace),
            b if is_control(b) => control_key(b),
            lead => parse_char(lead, buffer),
        };
        Some(event)
    }

    /// Decode every event in `bytes`
    pub fn parse_all(&self, bytes: &[u8]) -> Vec<KeyEvent> {
        let mut buffer: VecDeque<u8> = bytes.iter().copied().collect();
        std::iter::from_fn(|| self.parse(&mut buffer)).collect()
    }

    fn parse_escape(&self, buffer: &mut VecDeque<u8>) -> KeyEvent {
        let Some(&introducer) = buffer.front() else {
            return KeyEvent::new(KeyCode::Esc);
        };

        let event = match introducer {
            CSI => {
                buffer.pop_front();
                parse_csi(buffer)
            }
            SS3 => {
                buffer.pop_front();
                parse_ss3(buffer)
            }
            _ => None,
        };

        event.unwrap_or_else(|| {
            tracing::debug!(remaining = buffer.len(), "unrecognized escape sequence");
            buffer.clear();
            KeyEvent::undefined()
        })
    }
}

fn is_control(byte: u8) -> bool {
    byte < 0x20 || byte == DEL
}

/// Caret-notation inverse: recover the key pressed together with Ctrl
fn control_key(byte: u8) -> KeyEvent {
    let ch = match byte {
        0 => ' ',
        1..=26 => (b'a' + byte - 1) as char,
        _ => (b'4' + (byte - 28)) as char,
    };
    KeyEvent::with_modifier(KeyCode::Char(ch), KeyModifier::Control)
}

fn parse_csi(buffer: &mut VecDeque<u8>) -> Option<KeyEvent> {
    let first = *buffer.front()?;

    // ESC [ <letter>
    if first.is_ascii_alphabetic() {
        buffer.pop_front();
        return Some(KeyEvent::new(KeyCode::from_sequence_number(first)));
    }
    if !first.is_ascii_digit() {
        return None;
    }

    let second = buffer.get(1).copied();
    let third = buffer.get(2).copied();
    let fourth = buffer.get(3).copied();

    match (second, third, fourth) {
        // ESC [ <digit> ~
        (Some(b'~'), _, _) => {
            buffer.drain(..2);
            Some(KeyEvent::new(KeyCode::from_sequence_number(first - b'0')))
        }
        // ESC [ <digit><digit> ~
        (Some(d), Some(b'~'), _) if d.is_ascii_digit() => {
            buffer.drain(..3);
            let number = (first - b'0') * 10 + (d - b'0');
            Some(KeyEvent::new(KeyCode::from_sequence_number(number)))
        }
        // ESC [ <digit> ; <modifier> <letter>
        (Some(b';'), Some(m), Some(letter))
            if m.is_ascii_digit() && letter.is_ascii_alphabetic() =>
        {
            buffer.drain(..4);
            Some(KeyEvent::with_modifier(
                KeyCode::from_sequence_number(letter),
                KeyModifier::from_csi_param(m - b'0'),
            ))
        }
        _ => None,
    }
}

fn parse_ss3(buffer: &mut VecDeque<u8>) -> Option<KeyEvent> {
    let letter = *buffer.front()?;
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    buffer.pop_front();
    Some(KeyEvent::new(KeyCode::from_sequence_number(letter)))
}

/// Length of the UTF-8 sequence started by `lead`, or 0 if it cannot start one
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn parse_char(lead: u8, buffer: &mut VecDeque<u8>) -> KeyEvent {
    let width = utf8_width(lead);
    if width == 0 || buffer.len() < width - 1 {
        return KeyEvent::undefined();
    }

    let mut bytes = [lead, 0, 0, 0];
    for slot in bytes.iter_mut().take(width).skip(1) {
        *slot = buffer.pop_front().unwrap_or_default();
    }

    let Some(ch) = std::str::from_utf8(&bytes[..width])
        .ok()
        .and_then(|s| s.chars().next())
    else {
        return KeyEvent::undefined();
    };

    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: ch.is_uppercase().then_some(KeyModifier::Shift),
    }
}
