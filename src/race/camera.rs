//! Side-scrolling camera that follows the player car.

use glam::Vec2;

/// Fraction of the remaining distance closed per second.
const SMOOTHING_RATE: f32 = 2.0;

/// Horizontal follow camera with exponential smoothing.
///
/// The camera eases toward a point that keeps the player car centered in
/// the viewport and never pans left of the start line.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec2,
    half_viewport_width: f32,
}

impl Camera {
    /// Create a camera at the origin for the given viewport width.
    pub fn new(viewport_width: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            half_viewport_width: viewport_width / 2.0,
        }
    }

    /// Current camera position (top-left corner of the viewport).
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Ease toward the player car by one tick.
    pub fn follow(&mut self, player_x: f32, dt: f32) {
        let target_x = player_x - self.half_viewport_width;
        self.position.x += (target_x - self.position.x) * SMOOTHING_RATE * dt;

        if self.position.x < 0.0 {
            self.position.x = 0.0;
        }
    }
}
