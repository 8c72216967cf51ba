/// All game entity types — pure data, no logic.

use crate::geometry::{Rect, Rgb};

// ── World geometry ────────────────────────────────────────────────────────────

/// Virtual window size in world units.
pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
/// Height of the status strip above the play area.
pub const STATUS_HEIGHT: i32 = 40;

pub const STARTING_LIVES: u32 = 2;

/// The play area used by the frame loop: full width, everything below the
/// status strip.
pub fn default_game_area() -> Rect {
    Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT - STATUS_HEIGHT)
}

// ── Session mode ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Waiting,
    Playing,
    GameOver,
    /// Consumed by the frame loop, which builds a fresh `GameState`.
    Restart,
}

/// How the fixed per-frame movers (player, player shots, aliens) advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionModel {
    /// Player, player shots and aliens move a fixed number of pixels per
    /// frame; stars and alien shots scale with elapsed time.
    #[default]
    Mixed,
    /// Everything scales with elapsed time, using 60 Hz as the reference
    /// rate for the per-frame speeds.
    Elapsed,
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Sprite bounds.  The simulation only ever needs the size of each image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprites {
    pub player: (i32, i32),
    pub player_shot: (i32, i32),
    pub alien: (i32, i32),
    pub alien_shot: (i32, i32),
}

impl Default for Sprites {
    fn default() -> Self {
        Sprites {
            player: (64, 32),
            player_shot: (24, 8),
            alien: (48, 32),
            alien_shot: (12, 12),
        }
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub stop: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

// ── Player & projectiles ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Pixels per frame.
    pub speed: i32,
    pub alive: bool,
}

impl Player {
    pub fn new(rect: Rect) -> Self {
        Player { rect, speed: 2, alive: true }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerShot {
    pub rect: Rect,
    /// Pixels per frame, rightward.
    pub speed: i32,
}

impl PlayerShot {
    pub fn new(rect: Rect) -> Self {
        PlayerShot { rect, speed: 5 }
    }
}

/// An enemy projectile.  The float position is the source of truth; `rect`
/// is its rounded copy used for collisions.
#[derive(Clone, Debug, PartialEq)]
pub struct AlienShot {
    pub rect: Rect,
    pub x: f32,
    pub y: f32,
    /// Units per second.
    pub speed_x: f32,
    pub speed_y: f32,
}

impl AlienShot {
    pub fn new(rect: Rect, speed_x: f32, speed_y: f32) -> Self {
        AlienShot {
            rect,
            x: rect.x as f32,
            y: rect.y as f32,
            speed_x,
            speed_y,
        }
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub rect: Rect,
    /// Patrol band.
    pub movement_area: Rect,
    /// Pixels per frame; always at least 1.
    pub speed: i32,
    pub moving_left: bool,
}

impl Alien {
    pub fn new(rect: Rect, movement_area: Rect, extra_speed: i32) -> Self {
        Alien {
            rect,
            movement_area,
            speed: 1 + extra_speed,
            moving_left: true,
        }
    }
}

// ── Background & effects ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: i32,
    pub radius: i32,
    pub color: Rgb,
    /// Units per second, leftward.
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    pub x: i32,
    pub y: i32,
    pub max_radius: i32,
    pub current_radius: i32,
    pub color: Rgb,
    pub grow_speed: i32,
    pub shrink_speed: i32,
    pub growing: bool,
}

impl Explosion {
    pub fn new(center: (i32, i32), max_radius: i32, color: Rgb) -> Self {
        Explosion {
            x: center.0,
            y: center.1,
            max_radius,
            current_radius: 0,
            color,
            grow_speed: 5,
            shrink_speed: 1,
            growing: true,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub mode: Mode,
    pub sprites: Sprites,
    pub player: Player,
    pub player_shots: Vec<PlayerShot>,
    pub alien_shots: Vec<AlienShot>,
    pub aliens: Vec<Alien>,
    pub stars: Vec<Star>,
    pub explosions: Vec<Explosion>,
    pub game_area: Rect,
    pub wave_number: u32,
    pub lives: u32,
    /// Set while the fire key that produced the last shot is still held.
    pub has_shot: bool,
    /// Seconds since the session was created, advanced by each update.
    pub clock: f64,
    pub time_of_death: Option<f64>,
    pub gameover_time: Option<f64>,
    pub motion: MotionModel,
}
