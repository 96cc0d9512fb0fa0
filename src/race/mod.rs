//! Race simulation: cars, bot speed control, typing input, camera and the
//! race state machine.

pub mod bot;
pub mod camera;
pub mod car;
pub mod screen;
pub mod typing;
