//! Typeracer - headless demo driver.
//!
//! Runs a race without a front-end: a scripted typist presses the expected
//! key on every other tick (the off ticks release the keyboard so the
//! keydown latch can fire again) while the bots run their usual speed
//! program. Exercises the whole simulation from config to finish line.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use typeracer::input::{char_to_key, KeyboardState};
use typeracer::{GameConfig, GameScreen, RaceState, ScreenCommand};

/// Fixed simulation timestep (60 Hz).
const TICK_SECONDS: f32 = 1.0 / 60.0;
/// Give up if nobody finishes within this much simulated time.
const MAX_RACE_SECONDS: f32 = 600.0;
/// Log a progress line this often.
const PROGRESS_LOG_INTERVAL_TICKS: u64 = 300;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting typeracer v{}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::load_or_default();
    let mut screen = GameScreen::new(&config);

    let mut ticks: u64 = 0;
    while screen.state() != RaceState::Finished {
        if ticks as f32 * TICK_SECONDS > MAX_RACE_SECONDS {
            tracing::warn!("race hit the time cap without a finisher");
            break;
        }

        let keyboard = if screen.state() == RaceState::Racing && ticks % 2 == 0 {
            scripted_keystroke(&screen)
        } else {
            KeyboardState::default()
        };

        match screen.update(TICK_SECONDS, &keyboard) {
            ScreenCommand::Continue => {}
            command => {
                tracing::info!(?command, "screen requested exit");
                break;
            }
        }

        ticks += 1;
        if ticks % PROGRESS_LOG_INTERVAL_TICKS == 0 {
            log_progress(&screen, ticks);
        }
    }

    match screen.winner() {
        Some(winner) => tracing::info!(
            ?winner,
            errors = screen.player_input().progress().error_count,
            seconds = ticks as f32 * TICK_SECONDS,
            "race over"
        ),
        None => tracing::info!("race ended without a winner"),
    }

    Ok(())
}

/// Keyboard snapshot holding the key for the next expected character.
fn scripted_keystroke(screen: &GameScreen) -> KeyboardState {
    let progress = screen.player_input().progress();
    let expected = progress.current_sentence.chars().nth(progress.cursor);

    match expected.and_then(char_to_key) {
        Some((key, modifiers)) => KeyboardState::new(vec![key], modifiers),
        None => KeyboardState::default(),
    }
}

fn log_progress(screen: &GameScreen, ticks: u64) {
    let positions: Vec<f32> = screen
        .cars()
        .iter()
        .map(|car| car.position().x.round())
        .collect();
    let speeds: Vec<f32> = screen.cars().iter().map(|car| car.speed().round()).collect();

    tracing::info!(
        seconds = ticks as f32 * TICK_SECONDS,
        ?positions,
        ?speeds,
        "race progress"
    );
}
