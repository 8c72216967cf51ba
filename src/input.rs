/// Keyboard sampling.
///
/// Folds each frame's queue of terminal events into a `PlayerInput`
/// snapshot with held-key semantics: a key stays on from its press until
/// its release.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol, Ghostty, …): proper
///   `Press` / `Repeat` / `Release` events, so keys drop on release.
/// * **Classic terminals**: only `Press` events, with OS key-repeat showing
///   up as repeated presses.  A key expires after a stretch of silence
///   measured in seconds, so the frame rate does not matter.  Once repeats
///   are flowing the stretch is `REPEAT_HOLD`, longer than the OS repeat
///   interval.  A fresh fire press waits `FIRE_PRESS_HOLD`, longer than the
///   OS initial repeat delay, so holding fire reads as one unbroken press.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::PlayerInput;

/// Seconds a key stays held after a repeat when the terminal never reports
/// releases.
pub const REPEAT_HOLD: f64 = 0.1;

/// Seconds fire stays held after a fresh press on such terminals; covers
/// the 250–600 ms the OS waits before it starts repeating.
pub const FIRE_PRESS_HOLD: f64 = 0.65;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Control {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

impl Control {
    fn hold_after(self, repeating: bool) -> f64 {
        match self {
            Control::Fire if !repeating => FIRE_PRESS_HOLD,
            _ => REPEAT_HOLD,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Hold {
    last_seen: f64,
    repeating: bool,
}

fn control_for(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Control::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Control::Right),
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Control::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Control::Down),
        KeyCode::Enter => Some(Control::Fire),
        _ => None,
    }
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Per-session input state.  Call `begin_frame`, feed every pending event
/// to `handle_event`, then read `snapshot`.
#[derive(Debug, Default)]
pub struct InputSampler {
    /// Each held control → when it was last seen (press or repeat).
    held: HashMap<Control, Hold>,
    /// Set once a release event arrives; from then on releases are trusted
    /// and the hold window no longer applies.
    reports_release: bool,
    stop: bool,
    /// Seconds since the sampler was created, summed from frame deltas.
    clock: f64,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a terminal that is known to report key releases.
    pub fn with_release_events() -> Self {
        InputSampler { reports_release: true, ..Self::default() }
    }

    /// Advance the sampler's clock by the frame's elapsed seconds.
    pub fn begin_frame(&mut self, dt: f32) {
        self.clock += dt as f64;
    }

    fn touch(&mut self, control: Control, repeat: bool) {
        // On classic terminals an auto-repeat arrives as another press.
        let repeating = repeat || self.is_held(control);
        self.held.insert(control, Hold { last_seen: self.clock, repeating });
    }

    pub fn handle_event(&mut self, event: &Event) {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
            return;
        };
        match kind {
            KeyEventKind::Press => {
                if is_quit(*code, *modifiers) {
                    self.stop = true;
                }
                if let Some(control) = control_for(*code) {
                    self.touch(control, false);
                }
            }
            KeyEventKind::Repeat => {
                if let Some(control) = control_for(*code) {
                    self.touch(control, true);
                }
            }
            KeyEventKind::Release => {
                self.reports_release = true;
                if let Some(control) = control_for(*code) {
                    self.held.remove(&control);
                }
            }
        }
    }

    /// Window-close equivalent, e.g. the input thread lost the terminal.
    pub fn request_stop(&mut self) {
        self.stop = true;
    }

    fn is_held(&self, control: Control) -> bool {
        self.held
            .get(&control)
            .map(|hold| {
                self.reports_release
                    || self.clock - hold.last_seen <= control.hold_after(hold.repeating)
            })
            .unwrap_or(false)
    }

    pub fn snapshot(&self) -> PlayerInput {
        PlayerInput {
            stop: self.stop,
            left: self.is_held(Control::Left),
            right: self.is_held(Control::Right),
            up: self.is_held(Control::Up),
            down: self.is_held(Control::Down),
            fire: self.is_held(Control::Fire),
        }
    }
}
