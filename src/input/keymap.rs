//! Key-to-character mapping.
//!
//! Translates a physical key plus modifier state into the printable
//! character the player intended, honoring shift, caps lock and AltGr.

use super::{Key, Modifiers};

/// Shifted characters for the digit row, indexed by digit.
const SHIFTED_DIGITS: [char; 10] = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];

/// Map a pressed key to a printable character, if it has one.
///
/// Letters follow shift/caps-lock for case, the digit row produces shifted
/// symbols, punctuation keys carry shift-aware alternates, and AltGr plus
/// the apostrophe key yields a plain apostrophe. Keys with no printable
/// mapping return `None`.
pub fn key_to_char(key: Key, modifiers: Modifiers) -> Option<char> {
    if modifiers.alt_gr && key == Key::Apostrophe {
        return Some('\'');
    }

    if let Some(index) = letter_index(key) {
        let uppercase = modifiers.shift || modifiers.caps_lock;
        return Some(if uppercase {
            (b'A' + index) as char
        } else {
            (b'a' + index) as char
        });
    }

    if let Some(digit) = digit_index(key) {
        if modifiers.shift {
            return Some(SHIFTED_DIGITS[digit as usize]);
        }
        return Some((b'0' + digit) as char);
    }

    match key {
        Key::Period => Some('.'),
        Key::Comma => Some(','),
        Key::Slash => Some(if modifiers.shift { '?' } else { '/' }),
        Key::Semicolon => Some(if modifiers.shift { ':' } else { ';' }),
        Key::Apostrophe => Some(if modifiers.shift { '"' } else { '\'' }),
        Key::OpenBracket => Some(if modifiers.shift { '{' } else { '[' }),
        Key::CloseBracket => Some(if modifiers.shift { '}' } else { ']' }),
        Key::Minus => Some(if modifiers.shift { '_' } else { '-' }),
        Key::Equals => Some(if modifiers.shift { '+' } else { '=' }),
        Key::Backslash => Some(if modifiers.shift { '|' } else { '\\' }),
        Key::Space => Some(' '),
        _ => None,
    }
}

/// Inverse mapping: the key and modifiers that produce a character.
///
/// Used by scripted drivers and tests to synthesize keystrokes for a target
/// sentence. Characters with no producing key return `None`.
pub fn char_to_key(ch: char) -> Option<(Key, Modifiers)> {
    if ch.is_ascii_lowercase() {
        return Some((letter_key(ch.to_ascii_uppercase()), Modifiers::NONE));
    }
    if ch.is_ascii_uppercase() {
        return Some((letter_key(ch), Modifiers::SHIFT));
    }
    if let Some(digit) = ch.to_digit(10) {
        return Some((digit_key(digit as u8), Modifiers::NONE));
    }
    if let Some(digit) = SHIFTED_DIGITS.iter().position(|&s| s == ch) {
        return Some((digit_key(digit as u8), Modifiers::SHIFT));
    }

    let (key, shifted) = match ch {
        '.' => (Key::Period, false),
        ',' => (Key::Comma, false),
        '/' => (Key::Slash, false),
        '?' => (Key::Slash, true),
        ';' => (Key::Semicolon, false),
        ':' => (Key::Semicolon, true),
        '\'' => (Key::Apostrophe, false),
        '"' => (Key::Apostrophe, true),
        '[' => (Key::OpenBracket, false),
        '{' => (Key::OpenBracket, true),
        ']' => (Key::CloseBracket, false),
        '}' => (Key::CloseBracket, true),
        '-' => (Key::Minus, false),
        '_' => (Key::Minus, true),
        '=' => (Key::Equals, false),
        '+' => (Key::Equals, true),
        '\\' => (Key::Backslash, false),
        '|' => (Key::Backslash, true),
        ' ' => (Key::Space, false),
        _ => return None,
    };

    let modifiers = if shifted {
        Modifiers::SHIFT
    } else {
        Modifiers::NONE
    };
    Some((key, modifiers))
}

fn letter_index(key: Key) -> Option<u8> {
    let index = match key {
        Key::A => 0,
        Key::B => 1,
        Key::C => 2,
        Key::D => 3,
        Key::E => 4,
        Key::F => 5,
        Key::G => 6,
        Key::H => 7,
        Key::I => 8,
        Key::J => 9,
        Key::K => 10,
        Key::L => 11,
        Key::M => 12,
        Key::N => 13,
        Key::O => 14,
        Key::P => 15,
        Key::Q => 16,
        Key::R => 17,
        Key::S => 18,
        Key::T => 19,
        Key::U => 20,
        Key::V => 21,
        Key::W => 22,
        Key::X => 23,
        Key::Y => 24,
        Key::Z => 25,
        _ => return None,
    };
    Some(index)
}

fn letter_key(ch: char) -> Key {
    match ch {
        'A' => Key::A,
        'B' => Key::B,
        'C' => Key::C,
        'D' => Key::D,
        'E' => Key::E,
        'F' => Key::F,
        'G' => Key::G,
        'H' => Key::H,
        'I' => Key::I,
        'J' => Key::J,
        'K' => Key::K,
        'L' => Key::L,
        'M' => Key::M,
        'N' => Key::N,
        'O' => Key::O,
        'P' => Key::P,
        'Q' => Key::Q,
        'R' => Key::R,
        'S' => Key::S,
        'T' => Key::T,
        'U' => Key::U,
        'V' => Key::V,
        'W' => Key::W,
        'X' => Key::X,
        'Y' => Key::Y,
        _ => Key::Z,
    }
}

fn digit_index(key: Key) -> Option<u8> {
    let digit = match key {
        Key::Num0 => 0,
        Key::Num1 => 1,
        Key::Num2 => 2,
        Key::Num3 => 3,
        Key::Num4 => 4,
        Key::Num5 => 5,
        Key::Num6 => 6,
        Key::Num7 => 7,
        Key::Num8 => 8,
        Key::Num9 => 9,
        _ => return None,
    };
    Some(digit)
}

fn digit_key(digit: u8) -> Key {
    match digit {
        0 => Key::Num0,
        1 => Key::Num1,
        2 => Key::Num2,
        3 => Key::Num3,
        4 => Key::Num4,
        5 => Key::Num5,
        6 => Key::Num6,
        7 => Key::Num7,
        8 => Key::Num8,
        _ => Key::Num9,
    }
}
