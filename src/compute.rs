/// Pure game-logic functions.
///
/// `update` takes an immutable reference to the current `GameState` (plus
/// the frame's input, elapsed seconds and an RNG handle) and returns a
/// brand-new `GameState`.  Side effects are limited to the injected RNG.

use log::{debug, info, warn};
use rand::Rng;

use crate::entities::{
    AlienShot, Explosion, GameState, Mode, MotionModel, Player, PlayerInput, PlayerShot,
    Sprites, STARTING_LIVES,
};
use crate::geometry::{Rect, Rgb};
use crate::stars::{initial_field, random_star_for_x, should_have_star};
use crate::wave::make_wave;

// ── Tuning constants ─────────────────────────────────────────────────────────

/// Frame rate the per-frame speeds were designed for.
pub const REFERENCE_FPS: f32 = 60.0;

pub const RESPAWN_DELAY: f64 = 1.0;
pub const RESTART_DELAY: f64 = 2.0;

/// An alien fires when a roll in `1..=ALIEN_FIRE_ROLL` exceeds this.
const ALIEN_FIRE_THRESHOLD: u32 = 9990;
const ALIEN_FIRE_ROLL: u32 = 10000;
const ALIEN_SHOT_SPEED_X: f32 = 500.0;
/// Half-width of the band the vertical shot speed is drawn from.
const ALIEN_SHOT_SPREAD_Y: f32 = 100.0;
const ALIEN_SHOT_BIAS_Y: f32 = 80.0;

pub const ALIEN_EXPLOSION_RADIUS: i32 = 60;
pub const ALIEN_EXPLOSION_COLOR: Rgb = Rgb(255, 200, 0);
pub const PLAYER_EXPLOSION_RADIUS: i32 = 200;
pub const PLAYER_EXPLOSION_COLOR: Rgb = Rgb(255, 50, 0);

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session in `Waiting` mode: player centred, wave 0 queued
/// off-screen, and a starfield already spread across the play area.
pub fn init_state(
    sprites: Sprites,
    game_area: Rect,
    motion: MotionModel,
    rng: &mut impl Rng,
) -> GameState {
    let (pw, ph) = sprites.player;
    let player_rect = Rect::from_center(game_area.w / 2, game_area.h / 2, pw, ph);
    GameState {
        mode: Mode::Waiting,
        sprites,
        player: Player::new(player_rect),
        player_shots: Vec::new(),
        alien_shots: Vec::new(),
        aliens: make_wave(&sprites, game_area, 0),
        stars: initial_field(game_area.w, game_area.h, rng),
        explosions: Vec::new(),
        game_area,
        wave_number: 0,
        lives: STARTING_LIVES,
        has_shot: false,
        clock: 0.0,
        time_of_death: None,
        gameover_time: None,
        motion,
    }
}

/// A new session that keeps only the sprites, play area and motion model.
pub fn restart_state(state: &GameState, rng: &mut impl Rng) -> GameState {
    init_state(state.sprites, state.game_area, state.motion, rng)
}

// ── Mode dispatch ────────────────────────────────────────────────────────────

/// Advance the session by one frame of `dt` seconds.  All randomness comes
/// through `rng` so callers control determinism.
pub fn update(
    state: &GameState,
    input: &PlayerInput,
    dt: f32,
    rng: &mut impl Rng,
) -> GameState {
    let mut next = state.clone();
    next.clock += dt as f64;
    match next.mode {
        Mode::Waiting => update_waiting(&mut next, input),
        Mode::Playing => update_playing(&mut next, input, dt, rng),
        Mode::GameOver => update_gameover(&mut next),
        Mode::Restart => {}
    }
    next
}

fn update_waiting(state: &mut GameState, input: &PlayerInput) {
    if input.fire {
        info!("session started");
        state.mode = Mode::Playing;
        // The starting press must not also fire.
        state.has_shot = true;
    }
}

fn update_gameover(state: &mut GameState) {
    let Some(since) = state.gameover_time else {
        warn!("game over without a timestamp, restart delay starts now");
        state.gameover_time = Some(state.clock);
        return;
    };
    if state.clock - since >= RESTART_DELAY {
        info!("restarting session");
        state.mode = Mode::Restart;
    }
}

fn update_playing(state: &mut GameState, input: &PlayerInput, dt: f32, rng: &mut impl Rng) {
    respawn_if_due(state);

    if state.aliens.is_empty() {
        state.wave_number += 1;
        state.aliens = make_wave(&state.sprites, state.game_area, state.wave_number);
        info!("wave {} incoming", state.wave_number);
    }

    if !state.player.alive && state.lives == 0 {
        state.mode = Mode::GameOver;
        state.gameover_time = Some(state.clock);
        info!("game over on wave {}", state.wave_number);
    }

    move_player(state, input, dt);
    handle_fire(state, input);
    scroll_stars(state, dt, rng);
    move_player_shots(state, dt);
    move_alien_shots(state, dt);
    move_aliens(state, dt, rng);
    resolve_player_shots(state);
    resolve_alien_shots(state);
    state.explosions = state.explosions.iter().filter_map(animate_explosion).collect();
}

// ── Motion helpers ───────────────────────────────────────────────────────────

/// Pixels a per-frame mover covers this frame under `motion`.
pub fn frame_pixels(motion: MotionModel, per_frame: i32, dt: f32) -> i32 {
    match motion {
        MotionModel::Mixed => per_frame,
        MotionModel::Elapsed => (per_frame as f32 * REFERENCE_FPS * dt).round() as i32,
    }
}

// ── Playing sub-steps ────────────────────────────────────────────────────────

fn respawn_if_due(state: &mut GameState) {
    let Some(died_at) = state.time_of_death else {
        return;
    };
    if state.player.alive || state.lives == 0 || state.clock - died_at < RESPAWN_DELAY {
        return;
    }
    state.alien_shots.clear();
    state.aliens = make_wave(&state.sprites, state.game_area, state.wave_number);
    state.player.rect = state.player.rect.with_midleft(0, state.game_area.h / 2);
    state.player.alive = true;
    state.lives -= 1;
    info!("player respawned, {} lives left", state.lives);
}

fn move_player(state: &mut GameState, input: &PlayerInput, dt: f32) {
    let area = state.game_area;
    let motion = state.motion;
    let step = frame_pixels(motion, state.player.speed, dt);
    let rect = &mut state.player.rect;
    if input.down && rect.bottom() < area.bottom() {
        rect.y += step;
    }
    if input.up && rect.top() > area.top() {
        rect.y -= step;
    }
    if input.right && rect.right() < area.right() {
        rect.x += step;
    }
    if input.left && rect.left() > area.left() {
        rect.x -= step;
    }
    // A long frame's step can overshoot by more than the one pixel the
    // per-frame model allows.
    if motion == MotionModel::Elapsed {
        rect.x = rect.x.min(area.right() - rect.w).max(area.left());
        rect.y = rect.y.min(area.bottom() - rect.h).max(area.top());
    }
}

fn handle_fire(state: &mut GameState, input: &PlayerInput) {
    if !input.fire {
        state.has_shot = false;
        return;
    }
    let may_fire = !state.has_shot && state.player.alive && state.player_shots.is_empty();
    if may_fire {
        let (cx, cy) = state.player.rect.midright();
        let (w, h) = state.sprites.player_shot;
        state.player_shots.push(PlayerShot::new(Rect::from_center(cx, cy, w, h)));
        state.has_shot = true;
    }
}

fn scroll_stars(state: &mut GameState, dt: f32, rng: &mut impl Rng) {
    for star in &mut state.stars {
        star.x -= star.speed * dt;
    }
    if should_have_star(rng) {
        let star = random_star_for_x(state.game_area.w, state.game_area.h, rng);
        state.stars.push(star);
    }
    let left = state.game_area.left() as f32;
    state.stars.retain(|s| s.x + s.radius as f32 >= left);
}

fn move_player_shots(state: &mut GameState, dt: f32) {
    let motion = state.motion;
    for shot in &mut state.player_shots {
        shot.rect.x += frame_pixels(motion, shot.speed, dt);
    }
    let area = state.game_area;
    state.player_shots.retain(|s| area.intersects(&s.rect));
}

fn move_alien_shots(state: &mut GameState, dt: f32) {
    for shot in &mut state.alien_shots {
        shot.x += shot.speed_x * dt;
        shot.y += shot.speed_y * dt;
        shot.rect.x = shot.x.round() as i32;
        shot.rect.y = shot.y.round() as i32;
    }
    let area = state.game_area;
    state.alien_shots.retain(|s| area.intersects(&s.rect));
}

fn move_aliens(state: &mut GameState, dt: f32, rng: &mut impl Rng) {
    let motion = state.motion;
    let mut fired = Vec::new();
    for alien in &mut state.aliens {
        // Direction only flips leftward at the band's right edge once the
        // alien is already heading right.
        if alien.rect.left() <= alien.movement_area.left() {
            alien.moving_left = false;
        }
        if alien.rect.right() >= alien.movement_area.right() && !alien.moving_left {
            alien.moving_left = true;
        }
        let step = frame_pixels(motion, alien.speed, dt);
        alien.rect.x += if alien.moving_left { -step } else { step };

        if rng.gen_range(1..=ALIEN_FIRE_ROLL) > ALIEN_FIRE_THRESHOLD {
            fired.push(alien.rect);
        }
    }
    for alien_rect in fired {
        let shot = aim_alien_shot(&state.sprites, alien_rect, state.player.rect, rng);
        debug!("alien shot from {:?} at ({}, {})", alien_rect.center(), shot.speed_x, shot.speed_y);
        state.alien_shots.push(shot);
    }
}

/// A shot from `alien` biased toward `player`: hard left/right choice, and a
/// vertical speed drawn from a band shifted toward the player.
pub fn aim_alien_shot(sprites: &Sprites, alien: Rect, player: Rect, rng: &mut impl Rng) -> AlienShot {
    let (cx, cy) = alien.center();
    let (w, h) = sprites.alien_shot;
    let direction_x = if alien.left() < player.right() { 1.0 } else { -1.0 };
    let direction_y = if alien.top() < player.bottom() { 1.0 } else { -1.0 };
    let bias = ALIEN_SHOT_BIAS_Y * direction_y;
    let speed_y = rng.gen_range((bias - ALIEN_SHOT_SPREAD_Y)..(bias + ALIEN_SHOT_SPREAD_Y));
    AlienShot::new(
        Rect::from_center(cx, cy, w, h),
        direction_x * ALIEN_SHOT_SPEED_X,
        speed_y,
    )
}

// ── Collisions ───────────────────────────────────────────────────────────────

fn resolve_player_shots(state: &mut GameState) {
    let mut used_shots: Vec<usize> = Vec::new();
    let mut killed_aliens: Vec<usize> = Vec::new();

    for (si, shot) in state.player_shots.iter().enumerate() {
        let hit = state
            .aliens
            .iter()
            .enumerate()
            .find(|(ai, alien)| !killed_aliens.contains(ai) && shot.rect.intersects(&alien.rect));
        if let Some((ai, alien)) = hit {
            used_shots.push(si);
            killed_aliens.push(ai);
            state.explosions.push(Explosion::new(
                alien.rect.center(),
                ALIEN_EXPLOSION_RADIUS,
                ALIEN_EXPLOSION_COLOR,
            ));
        }
    }

    let mut index = 0;
    state.player_shots.retain(|_| {
        index += 1;
        !used_shots.contains(&(index - 1))
    });
    let mut index = 0;
    state.aliens.retain(|_| {
        index += 1;
        !killed_aliens.contains(&(index - 1))
    });
}

fn resolve_alien_shots(state: &mut GameState) {
    if !state.player.alive {
        return;
    }
    let player_rect = state.player.rect;
    let Some(hit) = state
        .alien_shots
        .iter()
        .position(|s| s.rect.intersects(&player_rect))
    else {
        return;
    };

    state.alien_shots.remove(hit);
    state.player.alive = false;
    state.time_of_death = Some(state.clock);
    state.explosions.push(Explosion::new(
        player_rect.center(),
        PLAYER_EXPLOSION_RADIUS,
        PLAYER_EXPLOSION_COLOR,
    ));
    info!("player hit, {} lives in reserve", state.lives);
}

// ── Effects ──────────────────────────────────────────────────────────────────

/// One frame of explosion animation; `None` once it has fully shrunk.
pub fn animate_explosion(explosion: &Explosion) -> Option<Explosion> {
    let mut e = explosion.clone();
    if e.growing {
        e.current_radius = (e.current_radius + e.grow_speed).min(e.max_radius);
        if e.current_radius >= e.max_radius {
            e.growing = false;
        }
        Some(e)
    } else {
        e.current_radius = (e.current_radius - e.shrink_speed).max(0);
        (e.current_radius > 0).then_some(e)
    }
}
