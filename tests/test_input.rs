use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use rand::rngs::StdRng;
use rand::SeedableRng;

use sideways::compute::{init_state, update};
use sideways::entities::{default_game_area, Mode, MotionModel, PlayerInput, Sprites};
use sideways::input::*;

const FRAME: f32 = 1.0 / 60.0;

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn repeat(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat))
}

fn release(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release))
}

/// Step the sampler through `seconds` of `frame`-long frames.
fn advance(sampler: &mut InputSampler, seconds: f32, frame: f32) {
    for _ in 0..(seconds / frame).round() as u32 {
        sampler.begin_frame(frame);
    }
}

#[test]
fn starts_idle() {
    let sampler = InputSampler::new();
    assert_eq!(sampler.snapshot(), PlayerInput::default());
}

#[test]
fn press_and_release_toggle_controls() {
    let mut sampler = InputSampler::with_release_events();
    sampler.begin_frame(FRAME);
    sampler.handle_event(&press(KeyCode::Enter));
    sampler.handle_event(&press(KeyCode::Char('w')));
    let input = sampler.snapshot();
    assert!(input.fire && input.up);
    assert!(!input.down && !input.left && !input.right);

    sampler.begin_frame(FRAME);
    sampler.handle_event(&release(KeyCode::Enter));
    let input = sampler.snapshot();
    assert!(!input.fire);
    assert!(input.up);
}

#[test]
fn keys_stay_held_between_events() {
    let mut sampler = InputSampler::with_release_events();
    sampler.begin_frame(FRAME);
    sampler.handle_event(&press(KeyCode::Char('s')));
    for _ in 0..100 {
        sampler.begin_frame(FRAME);
    }
    assert!(sampler.snapshot().down);
}

#[test]
fn wasd_and_arrows_map_to_same_controls() {
    let mut sampler = InputSampler::new();
    sampler.begin_frame(FRAME);
    sampler.handle_event(&press(KeyCode::Left));
    sampler.handle_event(&press(KeyCode::Char('d')));
    let input = sampler.snapshot();
    assert!(input.left && input.right);
}

#[test]
fn without_release_events_keys_expire() {
    let mut sampler = InputSampler::new();
    sampler.begin_frame(FRAME);
    sampler.handle_event(&press(KeyCode::Char('a')));
    advance(&mut sampler, 0.05, FRAME);
    assert!(sampler.snapshot().left);
    advance(&mut sampler, 0.1, FRAME);
    assert!(!sampler.snapshot().left);
}

#[test]
fn hold_expiry_is_measured_in_seconds() {
    for frame in [1.0 / 10.0, 1.0 / 60.0, 1.0 / 240.0] {
        let mut sampler = InputSampler::new();
        sampler.begin_frame(frame);
        sampler.handle_event(&press(KeyCode::Char('a')));
        advance(&mut sampler, 0.02, frame);
        assert!(sampler.snapshot().left, "dropped early at {frame}s frames");
        advance(&mut sampler, 0.2, frame);
        assert!(!sampler.snapshot().left, "still held at {frame}s frames");
    }
}

#[test]
fn fire_press_outlasts_initial_repeat_delay() {
    let mut sampler = InputSampler::new();
    sampler.begin_frame(FRAME);
    sampler.handle_event(&press(KeyCode::Enter));
    advance(&mut sampler, 0.6, FRAME);
    assert!(sampler.snapshot().fire);
    advance(&mut sampler, 0.2, FRAME);
    assert!(!sampler.snapshot().fire);
}

#[test]
fn repeats_refresh_hold() {
    let mut sampler = InputSampler::new();
    sampler.begin_frame(FRAME);
    sampler.handle_event(&press(KeyCode::Enter));
    advance(&mut sampler, 0.5, FRAME);
    for _ in 0..30 {
        sampler.handle_event(&repeat(KeyCode::Enter));
        advance(&mut sampler, 0.05, FRAME);
        assert!(sampler.snapshot().fire);
    }
    // Once repeating, silence ends the hold quickly.
    advance(&mut sampler, 0.2, FRAME);
    assert!(!sampler.snapshot().fire);
}

/// Drive a playing session from a classic terminal where Enter is pressed
/// at `presses` (seconds) and auto-repeats as further presses every 33 ms
/// after a 500 ms delay until `held_until`.
fn shots_fired(presses: &[f32], held_until: f32, total: f32) -> usize {
    let mut rng = StdRng::seed_from_u64(3);
    let mut state = init_state(Sprites::default(), default_game_area(), MotionModel::Mixed, &mut rng);
    state.mode = Mode::Playing;
    let mut sampler = InputSampler::new();

    let mut shots = 0;
    let mut next_repeat: Option<f32> = None;
    let mut pending = presses.to_vec();
    let mut t = 0.0f32;
    while t < total {
        sampler.begin_frame(FRAME);
        if pending.first().is_some_and(|&p| p <= t) {
            pending.remove(0);
            sampler.handle_event(&press(KeyCode::Enter));
            next_repeat = Some(t + 0.5);
        }
        if let Some(at) = next_repeat {
            if t >= held_until {
                next_repeat = None;
            } else if at <= t {
                sampler.handle_event(&press(KeyCode::Enter));
                next_repeat = Some(at + 0.033);
            }
        }
        // Keep the player alive so every press is free to fire.
        state.alien_shots.clear();
        let before = state.player_shots.len();
        state = update(&state, &sampler.snapshot(), FRAME, &mut rng);
        if state.player_shots.len() > before {
            shots += 1;
        }
        t += FRAME;
    }
    shots
}

#[test]
fn held_enter_fires_exactly_once() {
    assert_eq!(shots_fired(&[0.0], 6.0, 6.0), 1);
}

#[test]
fn releasing_and_pressing_again_fires_again() {
    // Held for three seconds, silent for one, then a fresh press.
    assert_eq!(shots_fired(&[0.0, 4.0], 3.0, 6.0), 2);
}

#[test]
fn first_release_switches_to_release_mode() {
    let mut sampler = InputSampler::new();
    sampler.begin_frame(FRAME);
    sampler.handle_event(&release(KeyCode::Char('x')));
    sampler.handle_event(&press(KeyCode::Char('w')));
    advance(&mut sampler, 2.0, FRAME);
    assert!(sampler.snapshot().up);
}

#[test]
fn quit_keys_request_stop() {
    for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('Q')] {
        let mut sampler = InputSampler::new();
        sampler.begin_frame(FRAME);
        sampler.handle_event(&press(code));
        assert!(sampler.snapshot().stop);
    }
    let mut sampler = InputSampler::new();
    sampler.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(sampler.snapshot().stop);
}

#[test]
fn plain_c_does_not_quit() {
    let mut sampler = InputSampler::new();
    sampler.handle_event(&press(KeyCode::Char('c')));
    assert!(!sampler.snapshot().stop);
}

#[test]
fn unknown_keys_and_events_are_ignored() {
    let mut sampler = InputSampler::new();
    sampler.begin_frame(FRAME);
    sampler.handle_event(&press(KeyCode::Char('z')));
    sampler.handle_event(&press(KeyCode::Tab));
    sampler.handle_event(&Event::FocusGained);
    sampler.handle_event(&Event::Resize(80, 24));
    assert_eq!(sampler.snapshot(), PlayerInput::default());
}

#[test]
fn request_stop_sets_flag() {
    let mut sampler = InputSampler::new();
    sampler.request_stop();
    assert!(sampler.snapshot().stop);
}
