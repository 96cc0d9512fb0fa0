//! Race orchestration: countdown, racing, pause and finish.
//!
//! `GameScreen` owns the car list and delegates each tick to the typing
//! input (player car) and the bot controller (bot cars). Control flow back
//! to the owning front-end is an explicit [`ScreenCommand`] return value;
//! there are no callbacks or event subscriptions.

use glam::Vec2;
use tracing::info;

use crate::config::GameConfig;
use crate::input::{Key, KeyboardState};
use crate::text::TextTask;

use super::bot::BotController;
use super::camera::Camera;
use super::car::Car;
use super::typing::PlayerInput;

/// Countdown length before the race starts, in seconds.
const COUNTDOWN_SECONDS: f64 = 3.0;
/// Track length when racing bots.
const MULTIPLAYER_TRACK_LENGTH: f32 = 10_000.0;
/// Effectively unbounded track for solo practice (no finish line).
const SINGLE_PLAYER_TRACK_LENGTH: f32 = 999_999.0;
/// Width of the finish line strip at the end of the track.
const FINISH_LINE_WIDTH: f32 = 100.0;
/// Viewport width the camera centers the player within.
const VIEWPORT_WIDTH: f32 = 1280.0;
/// Lane y-offset of the player car.
const PLAYER_LANE_Y: f32 = 530.0;

/// Phase of the race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceState {
    /// Pre-race countdown; simulation frozen.
    Countdown,
    /// Live simulation.
    Racing,
    /// Simulation frozen; pause menu live.
    Paused,
    /// Terminal: a car crossed the finish line.
    Finished,
}

/// Which car crossed the finish line first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceWinner {
    /// The human player won.
    Player,
    /// A bot won; the index is its position in the car list (1 or 2).
    Bot(usize),
}

impl RaceWinner {
    /// Banner color for this winner (RGB).
    pub fn color(&self) -> [u8; 3] {
        match self {
            RaceWinner::Player => [0, 128, 0],
            RaceWinner::Bot(_) => [255, 0, 0],
        }
    }
}

/// Pause/finish menu selection handed in by the owning front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Continue,
    Restart,
    BackToMenu,
    Exit,
}

/// What the orchestrator should do after a tick or menu interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenCommand {
    /// Keep running this screen.
    #[default]
    Continue,
    /// Tear down and rebuild the race with the same settings.
    Restart,
    /// Collapse back to the menu.
    ExitToMenu,
    /// Quit the application.
    ExitToDesktop,
}

/// The race screen: state machine, car list and camera.
#[derive(Debug)]
pub struct GameScreen {
    state: RaceState,
    countdown_remaining: f64,
    /// Cars in creation order: player first, then bots.
    cars: Vec<Car>,
    player_input: PlayerInput,
    bot_controller: BotController,
    camera: Camera,
    track_length: f32,
    winner: Option<RaceWinner>,
    pause_key: Key,
    pause_key_was_down: bool,
}

impl GameScreen {
    /// Build a race from the session settings.
    pub fn new(config: &GameConfig) -> Self {
        let text_task = TextTask::load(
            &config.assets_dir,
            &config.difficulty.to_string(),
            config.randomizer,
        );

        let mut bot_controller = BotController::new(config.player_count, config.difficulty);

        let mut cars = vec![Car::new(Vec2::new(0.0, PLAYER_LANE_Y))];
        cars.extend(bot_controller.spawn_cars());

        let track_length = if cars.len() > 1 {
            MULTIPLAYER_TRACK_LENGTH
        } else {
            SINGLE_PLAYER_TRACK_LENGTH
        };

        info!(
            difficulty = %config.difficulty,
            racers = cars.len(),
            randomizer = config.randomizer,
            "race created"
        );

        Self {
            state: RaceState::Countdown,
            countdown_remaining: COUNTDOWN_SECONDS,
            cars,
            player_input: PlayerInput::new(text_task),
            bot_controller,
            camera: Camera::new(VIEWPORT_WIDTH),
            track_length,
            winner: None,
            pause_key: config.pause_key,
            pause_key_was_down: false,
        }
    }

    /// Current race phase.
    pub fn state(&self) -> RaceState {
        self.state
    }

    /// Seconds left on the pre-race countdown.
    pub fn countdown_remaining(&self) -> f64 {
        self.countdown_remaining
    }

    /// Cars in creation order: player first, then bots.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Typing input handler, for the HUD.
    pub fn player_input(&self) -> &PlayerInput {
        &self.player_input
    }

    /// Follow camera, for the renderer.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Total track length for this session.
    pub fn track_length(&self) -> f32 {
        self.track_length
    }

    /// Where the finish line starts, if this session has one.
    pub fn finish_line_x(&self) -> Option<f32> {
        self.is_multiplayer()
            .then(|| self.track_length - FINISH_LINE_WIDTH)
    }

    /// The recorded winner once the race has finished.
    pub fn winner(&self) -> Option<RaceWinner> {
        self.winner
    }

    /// Whether this session races against bots.
    pub fn is_multiplayer(&self) -> bool {
        self.cars.len() > 1
    }

    /// Advance the screen by one tick.
    pub fn update(&mut self, dt: f32, keyboard: &KeyboardState) -> ScreenCommand {
        match self.state {
            RaceState::Countdown => self.update_countdown(dt),
            RaceState::Racing => {
                if self.pause_toggled(keyboard) {
                    info!("race paused");
                    self.state = RaceState::Paused;
                } else {
                    self.simulate(dt, keyboard);
                }
            }
            RaceState::Paused => {
                if self.pause_toggled(keyboard) {
                    info!("race resumed");
                    self.state = RaceState::Racing;
                }
            }
            RaceState::Finished => {}
        }

        ScreenCommand::Continue
    }

    /// Apply a pause/finish menu selection.
    pub fn apply_menu_choice(&mut self, choice: MenuChoice) -> ScreenCommand {
        match choice {
            MenuChoice::Continue => {
                if self.state == RaceState::Paused {
                    self.state = RaceState::Racing;
                }
                ScreenCommand::Continue
            }
            MenuChoice::Restart => ScreenCommand::Restart,
            MenuChoice::BackToMenu => ScreenCommand::ExitToMenu,
            MenuChoice::Exit => ScreenCommand::ExitToDesktop,
        }
    }

    fn update_countdown(&mut self, dt: f32) {
        self.countdown_remaining -= dt as f64;
        if self.countdown_remaining <= 0.0 {
            info!("countdown finished, racing");
            self.state = RaceState::Racing;
        }
    }

    /// One live simulation tick.
    fn simulate(&mut self, dt: f32, keyboard: &KeyboardState) {
        let (player, bots) = self.cars.split_at_mut(1);
        self.player_input.update(dt, keyboard, &mut player[0]);
        self.bot_controller.update(dt, bots);

        for car in &mut self.cars {
            car.advance(dt);
        }

        if self.is_multiplayer() {
            self.check_finish();
        }

        self.camera.follow(self.cars[0].position().x, dt);
    }

    /// Rising-edge pause detection, debounced on key release.
    fn pause_toggled(&mut self, keyboard: &KeyboardState) -> bool {
        if keyboard.is_down(self.pause_key) {
            if !self.pause_key_was_down {
                self.pause_key_was_down = true;
                return true;
            }
        } else {
            self.pause_key_was_down = false;
        }
        false
    }

    /// First car past the line (in creation order) wins.
    fn check_finish(&mut self) {
        let finish_x = self.track_length - FINISH_LINE_WIDTH;

        for (index, car) in self.cars.iter().enumerate() {
            if car.position().x >= finish_x {
                let winner = if index == 0 {
                    RaceWinner::Player
                } else {
                    RaceWinner::Bot(index)
                };
                info!(?winner, "race finished");
                self.winner = Some(winner);
                self.state = RaceState::Finished;
                break;
            }
        }
    }
}
