//! Race state machine flow: countdown, pause, finish and menu commands.

use typeracer::input::{Key, KeyboardState};
use typeracer::{GameConfig, GameScreen, MenuChoice, RaceState, ScreenCommand};

const DT: f32 = 1.0 / 60.0;

fn config(player_count: u32) -> GameConfig {
    GameConfig {
        player_count,
        ..GameConfig::default()
    }
}

fn tab() -> KeyboardState {
    KeyboardState::single(Key::Tab)
}

fn idle() -> KeyboardState {
    KeyboardState::default()
}

/// The countdown starts at 3.0 s and is left exactly once after 3.1 s of
/// elapsed ticks.
#[test]
fn test_countdown_leaves_exactly_once() {
    let mut screen = GameScreen::new(&config(1));
    assert_eq!(screen.state(), RaceState::Countdown);
    assert!((screen.countdown_remaining() - 3.0).abs() < f64::EPSILON);

    let mut transitions = 0;
    let mut previous = screen.state();
    for _ in 0..31 {
        screen.update(0.1, &idle());
        if previous == RaceState::Countdown && screen.state() != RaceState::Countdown {
            transitions += 1;
        }
        previous = screen.state();
    }

    assert_eq!(transitions, 1);
    assert_eq!(screen.state(), RaceState::Racing);
}

#[test]
fn test_pause_key_rising_edge_toggles() {
    let mut screen = GameScreen::new(&config(1));
    while screen.state() == RaceState::Countdown {
        screen.update(0.1, &idle());
    }

    // Press and hold: one transition to Paused, no bouncing.
    screen.update(DT, &tab());
    assert_eq!(screen.state(), RaceState::Paused);
    for _ in 0..10 {
        screen.update(DT, &tab());
        assert_eq!(screen.state(), RaceState::Paused);
    }

    // Release, press again: back to Racing.
    screen.update(DT, &idle());
    screen.update(DT, &tab());
    assert_eq!(screen.state(), RaceState::Racing);
}

#[test]
fn test_paused_simulation_is_frozen() {
    let mut screen = GameScreen::new(&config(3));
    while screen.state() == RaceState::Countdown {
        screen.update(0.1, &idle());
    }

    // Let the bots pick up some speed, then pause.
    for _ in 0..120 {
        screen.update(DT, &idle());
    }
    screen.update(DT, &tab());
    assert_eq!(screen.state(), RaceState::Paused);

    let positions: Vec<f32> = screen.cars().iter().map(|c| c.position().x).collect();
    for _ in 0..60 {
        screen.update(DT, &idle());
    }
    let after: Vec<f32> = screen.cars().iter().map(|c| c.position().x).collect();

    assert_eq!(positions, after);
}

#[test]
fn test_menu_choices_map_to_commands() {
    let mut screen = GameScreen::new(&config(1));

    assert_eq!(
        screen.apply_menu_choice(MenuChoice::Restart),
        ScreenCommand::Restart
    );
    assert_eq!(
        screen.apply_menu_choice(MenuChoice::BackToMenu),
        ScreenCommand::ExitToMenu
    );
    assert_eq!(
        screen.apply_menu_choice(MenuChoice::Exit),
        ScreenCommand::ExitToDesktop
    );
    assert_eq!(
        screen.apply_menu_choice(MenuChoice::Continue),
        ScreenCommand::Continue
    );
}

#[test]
fn test_menu_continue_resumes_from_pause() {
    let mut screen = GameScreen::new(&config(1));
    while screen.state() == RaceState::Countdown {
        screen.update(0.1, &idle());
    }

    screen.update(DT, &tab());
    assert_eq!(screen.state(), RaceState::Paused);

    let command = screen.apply_menu_choice(MenuChoice::Continue);
    assert_eq!(command, ScreenCommand::Continue);
    assert_eq!(screen.state(), RaceState::Racing);
}

/// Multi-player races end; the bots alone are enough to cross the line.
#[test]
fn test_multiplayer_race_finishes_with_a_winner() {
    let mut screen = GameScreen::new(&config(2));

    // Bots average at least ~150 u/s post-ramp, so 10k units falls well
    // inside two simulated minutes.
    let max_ticks = (120.0 / DT) as usize;
    for _ in 0..max_ticks {
        screen.update(DT, &idle());
        if screen.state() == RaceState::Finished {
            break;
        }
    }

    assert_eq!(screen.state(), RaceState::Finished);
    let winner = screen.winner().expect("finished race records a winner");

    let finish_x = screen.finish_line_x().expect("multiplayer finish line");
    let winner_index = match winner {
        typeracer::RaceWinner::Player => 0,
        typeracer::RaceWinner::Bot(index) => index,
    };
    assert!(screen.cars()[winner_index].position().x >= finish_x);
}

#[test]
fn test_single_player_has_no_finish_line() {
    let mut screen = GameScreen::new(&config(1));
    assert!(!screen.is_multiplayer());
    assert_eq!(screen.finish_line_x(), None);

    while screen.state() == RaceState::Countdown {
        screen.update(0.1, &idle());
    }
    for _ in 0..(30.0 / DT) as usize {
        screen.update(DT, &idle());
    }

    assert_eq!(screen.state(), RaceState::Racing);
}
