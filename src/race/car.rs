//! Car state: position along the track and current speed.

use glam::Vec2;

/// Maximum speed any car can reach, in track units per second.
pub const MAX_SPEED: f32 = 380.0;

/// A car on the track.
///
/// Position advances by `speed * dt` each simulation tick. Speed is clamped
/// to `[0, MAX_SPEED]` on every write.
#[derive(Debug, Clone)]
pub struct Car {
    /// Track-space position: x is distance along the track, y is the lane.
    position: Vec2,
    speed: f32,
}

impl Car {
    /// Create a car at the given starting position, standing still.
    pub fn new(start_position: Vec2) -> Self {
        Self {
            position: start_position,
            speed: 0.0,
        }
    }

    /// Current position in track space.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current speed in track units per second.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the speed, clamped to `[0, MAX_SPEED]`.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(0.0, MAX_SPEED);
    }

    /// Advance the car along the track by one tick.
    pub fn advance(&mut self, dt: f32) {
        self.position.x += self.speed * dt;
    }
}
