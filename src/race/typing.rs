//! Keystroke-to-progress mapping for the player car.
//!
//! One keystroke is recognized per distinct keydown transition: only the
//! first currently-down key (in polling order) is examined each tick, and
//! only when it differs from the previous tick's first key. Correct
//! characters speed the car up, wrong or unmappable ones slow it down, and
//! with no key held the car coasts down under a randomized friction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use tracing::debug;

use crate::input::{key_to_char, Key, KeyboardState};
use crate::text::TextTask;

use super::car::Car;

/// Speed gained for each correctly typed character.
const CORRECT_SPEED_BONUS: f32 = 10.0;
/// Speed lost for each incorrect keystroke.
const ERROR_SPEED_PENALTY: f32 = 5.0;
/// Per-second friction decay band applied while no key is down.
const IDLE_DECAY_RANGE: Range<i32> = 30..60;

/// Progress through the current sentence.
#[derive(Debug, Clone)]
pub struct TypingProgress {
    /// The sentence the player is typing.
    pub current_sentence: String,
    /// Characters typed correctly so far.
    pub typed: String,
    /// Index of the next expected character (in chars, not bytes).
    pub cursor: usize,
    /// Whether the most recent keystroke was wrong.
    pub error_flag: bool,
    /// Total wrong keystrokes this race.
    pub error_count: u32,
}

/// Consumes keyboard snapshots and drives the player car's speed.
#[derive(Debug)]
pub struct PlayerInput {
    text_task: TextTask,
    progress: TypingProgress,
    /// First pressed key observed last tick, for the keydown latch.
    last_key: Option<Key>,
    rng: StdRng,
}

impl PlayerInput {
    /// Create the input handler and draw the first sentence.
    pub fn new(mut text_task: TextTask) -> Self {
        let current_sentence = text_task.random_sentence();

        Self {
            text_task,
            progress: TypingProgress {
                current_sentence,
                typed: String::new(),
                cursor: 0,
                error_flag: false,
                error_count: 0,
            },
            last_key: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Current typing progress, for the HUD.
    pub fn progress(&self) -> &TypingProgress {
        &self.progress
    }

    /// Process one tick of keyboard state against the player car.
    pub fn update(&mut self, dt: f32, keyboard: &KeyboardState, player_car: &mut Car) {
        match keyboard.first_pressed() {
            Some(key) => {
                if Some(key) != self.last_key {
                    self.process_keystroke(key, keyboard, player_car);
                    self.last_key = Some(key);
                }
            }
            None => {
                self.process_idle(dt, player_car);
                self.last_key = None;
            }
        }
    }

    fn process_keystroke(&mut self, key: Key, keyboard: &KeyboardState, player_car: &mut Car) {
        let expected = self
            .progress
            .current_sentence
            .chars()
            .nth(self.progress.cursor);

        match key_to_char(key, keyboard.modifiers()) {
            Some(ch) if expected == Some(ch) => self.process_correct(ch, player_car),
            // Mismatch, or a held key with no printable mapping.
            _ => self.process_incorrect(player_car),
        }
    }

    fn process_correct(&mut self, ch: char, player_car: &mut Car) {
        self.progress.typed.push(ch);
        self.progress.cursor += 1;
        self.progress.error_flag = false;

        player_car.set_speed(player_car.speed() + CORRECT_SPEED_BONUS);

        if self.progress.cursor == self.progress.current_sentence.chars().count() {
            debug!(
                sentence = %self.progress.current_sentence,
                errors = self.progress.error_count,
                "sentence completed"
            );
            self.progress.current_sentence = self.text_task.random_sentence();
            self.progress.typed.clear();
            self.progress.cursor = 0;
        }
    }

    fn process_incorrect(&mut self, player_car: &mut Car) {
        self.progress.error_flag = true;
        self.progress.error_count += 1;

        player_car.set_speed(player_car.speed() - ERROR_SPEED_PENALTY);
    }

    fn process_idle(&mut self, dt: f32, player_car: &mut Car) {
        let decay = self.rng.gen_range(IDLE_DECAY_RANGE) as f32 * dt;
        player_car.set_speed(player_car.speed() - decay);
    }
}
