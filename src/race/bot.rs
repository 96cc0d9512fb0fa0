//! Bot speed control.
//!
//! Each bot car carries a relative-speed mode (slower/equal/faster than the
//! difficulty baseline). For the first ten simulated seconds bots ramp up
//! smoothly toward their mode's band; after that, modes are re-rolled every
//! three seconds and the speed is snapped to a freshly sampled target within
//! the band on every tick, so bot speeds jitter inside the band between mode
//! changes.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::debug;

use super::car::Car;

/// Duration of the initial smooth acceleration window, in seconds.
pub const RAMP_SECONDS: f32 = 10.0;
/// Interval between bot mode re-rolls, in seconds.
pub const MODE_CHANGE_INTERVAL: f32 = 3.0;
/// Range bot spawn speeds are sampled from.
const SPAWN_SPEED_RANGE: Range<i32> = 20..101;
/// Lane y-offsets for the bot cars, in creation order.
const BOT_LANES: [f32; 2] = [340.0, 140.0];

/// Bot difficulty level, selecting the target-speed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl std::fmt::Display for BotDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotDifficulty::Easy => write!(f, "easy"),
            BotDifficulty::Medium => write!(f, "medium"),
            BotDifficulty::Hard => write!(f, "hard"),
        }
    }
}

/// A bot's current speed bracket relative to the difficulty baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotMode {
    Slower,
    Equal,
    Faster,
}

/// Drives the speed of every bot car in the race.
#[derive(Debug)]
pub struct BotController {
    difficulty: BotDifficulty,
    /// One mode per bot car, parallel to the bot car slice.
    modes: Vec<BotMode>,
    /// Simulated seconds since the controller was created.
    elapsed: f32,
    /// Simulated time of the last mode re-roll.
    last_mode_change: f32,
    rng: StdRng,
}

impl BotController {
    /// Create a controller for `player_count` total racers (1-3); every
    /// racer beyond the player is a bot.
    pub fn new(player_count: u32, difficulty: BotDifficulty) -> Self {
        let bot_count = player_count.saturating_sub(1).min(BOT_LANES.len() as u32);

        Self {
            difficulty,
            modes: vec![BotMode::Slower; bot_count as usize],
            elapsed: 0.0,
            last_mode_change: 0.0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Number of bot cars this controller drives.
    pub fn bot_count(&self) -> usize {
        self.modes.len()
    }

    /// Current mode of each bot, in creation order.
    pub fn modes(&self) -> &[BotMode] {
        &self.modes
    }

    /// The target-speed band for a difficulty/mode pair (half-open).
    pub fn speed_range(difficulty: BotDifficulty, mode: BotMode) -> Range<i32> {
        match difficulty {
            BotDifficulty::Easy => match mode {
                BotMode::Slower => 150..199,
                BotMode::Equal => 200..249,
                BotMode::Faster => 250..299,
            },
            BotDifficulty::Medium => match mode {
                BotMode::Slower => 200..249,
                BotMode::Equal => 250..299,
                BotMode::Faster => 300..349,
            },
            BotDifficulty::Hard => match mode {
                BotMode::Slower => 250..299,
                BotMode::Equal => 300..349,
                BotMode::Faster => 350..400,
            },
        }
    }

    /// Create the bot cars at their lane positions with a random spawn speed.
    pub fn spawn_cars(&mut self) -> Vec<Car> {
        let mut cars = Vec::with_capacity(self.bot_count());

        for lane in BOT_LANES.iter().take(self.bot_count()) {
            let mut car = Car::new(Vec2::new(0.0, *lane));
            car.set_speed(self.rng.gen_range(SPAWN_SPEED_RANGE) as f32);
            cars.push(car);
        }

        cars
    }

    /// Sample a target speed for the given mode from the difficulty table.
    pub fn sample_target_speed(&mut self, mode: BotMode) -> f32 {
        self.rng.gen_range(Self::speed_range(self.difficulty, mode)) as f32
    }

    /// Advance the bots by one tick. `bot_cars` must be the bot cars in
    /// creation order, without the player car.
    pub fn update(&mut self, dt: f32, bot_cars: &mut [Car]) {
        self.elapsed += dt;

        if self.elapsed < RAMP_SECONDS {
            // Ramp window: interpolate toward a per-tick sampled target.
            for (i, car) in bot_cars.iter_mut().enumerate() {
                let target = self.sample_target_speed(self.modes[i]);
                let acceleration = (target - car.speed()) / RAMP_SECONDS;
                car.set_speed(car.speed() + acceleration * dt);
            }
            return;
        }

        if self.elapsed - self.last_mode_change > MODE_CHANGE_INTERVAL {
            for i in 0..self.modes.len() {
                self.modes[i] = self.random_mode();
            }
            self.last_mode_change = self.elapsed;
            debug!(modes = ?self.modes, "bot modes re-rolled");
        }

        // Snap to a fresh sample within the band every tick.
        for (i, car) in bot_cars.iter_mut().enumerate() {
            let target = self.sample_target_speed(self.modes[i]);
            car.set_speed(target);
        }
    }

    fn random_mode(&mut self) -> BotMode {
        match self.rng.gen_range(0..3) {
            0 => BotMode::Slower,
            1 => BotMode::Equal,
            _ => BotMode::Faster,
        }
    }
}
