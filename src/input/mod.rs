//! Keyboard snapshot types consumed by the simulation.
//!
//! The simulation never polls the OS directly. A front-end captures the set
//! of currently-down keys (in its polling order) together with modifier
//! state once per frame and hands the snapshot in as a [`KeyboardState`].

pub mod keymap;

pub use keymap::{char_to_key, key_to_char};

use serde::{Deserialize, Serialize};

/// A physical key the game cares about.
///
/// Modifier keys (shift, caps lock, alt-gr) are not listed here; they are
/// reported separately in [`Modifiers`] and never appear in the pressed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    Period,
    Comma,
    Slash,
    Semicolon,
    Apostrophe,
    OpenBracket,
    CloseBracket,
    Minus,
    Equals,
    Backslash,
    Space,
    Tab,
    Enter,
    Escape,
}

/// Modifier state captured alongside the pressed keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Either shift key is held.
    pub shift: bool,
    /// Caps lock is engaged.
    pub caps_lock: bool,
    /// Right alt (AltGr) is held.
    pub alt_gr: bool,
}

impl Modifiers {
    /// No modifiers active.
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        caps_lock: false,
        alt_gr: false,
    };

    /// Shift held, nothing else.
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        caps_lock: false,
        alt_gr: false,
    };
}

/// Snapshot of the keyboard for one simulation tick.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: Vec<Key>,
    modifiers: Modifiers,
}

impl KeyboardState {
    /// Build a snapshot from the currently-down keys in polling order.
    pub fn new(pressed: Vec<Key>, modifiers: Modifiers) -> Self {
        Self { pressed, modifiers }
    }

    /// Snapshot with a single key held and no modifiers.
    pub fn single(key: Key) -> Self {
        Self::new(vec![key], Modifiers::NONE)
    }

    /// The first currently-down key in polling order, if any.
    pub fn first_pressed(&self) -> Option<Key> {
        self.pressed.first().copied()
    }

    /// Whether the given key is currently down.
    pub fn is_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Whether no key is down.
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    /// Modifier state for this tick.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}
