/// Rendering layer — all terminal I/O lives here.
///
/// `draw_list` turns an immutable view of the game state into world-space
/// draw commands; `Canvas` rasterises them onto cells; `present` translates
/// the canvas into terminal commands.  No game logic is performed here.

pub mod canvas;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{GameState, Mode, STATUS_HEIGHT};
use crate::geometry::{Rect, Rgb};

pub use canvas::{Canvas, Cell};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Rgb = Rgb(255, 255, 255);
const C_PLAYER_SHOT: Rgb = Rgb(0, 255, 255);
const C_ALIEN: Rgb = Rgb(0, 220, 0);
const C_ALIEN_SHOT: Rgb = Rgb(255, 0, 255);
const C_STATUS: Rgb = Rgb(150, 150, 150);
const C_BANNER: Rgb = Rgb(255, 0, 0);

/// Vertical offset of the lives counter from the top of the window.
const STATUS_TEXT_DY: i32 = 8;

// ── Draw commands ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    PlayerShot,
    Alien,
    AlienShot,
}

impl SpriteKind {
    fn glyph(&self) -> (char, Rgb) {
        match self {
            SpriteKind::Player => ('█', C_PLAYER),
            SpriteKind::PlayerShot => ('═', C_PLAYER_SHOT),
            SpriteKind::Alien => ('▓', C_ALIEN),
            SpriteKind::AlienShot => ('●', C_ALIEN_SHOT),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Centred in the window.
    Center,
    /// Right-aligned against the window's right edge, `dy` units down.
    TopRight { dy: i32 },
}

/// One drawing instruction in window coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Sprite { kind: SpriteKind, rect: Rect },
    Circle { center: (i32, i32), radius: i32, color: Rgb, glyph: char },
    Text { text: String, anchor: TextAnchor, color: Rgb },
}

/// Window size in world units for a given play area.
pub fn window_size(state: &GameState) -> (i32, i32) {
    (state.game_area.w, state.game_area.h + STATUS_HEIGHT)
}

/// Build the frame's draw list.  One handler per mode.
pub fn draw_list(state: &GameState) -> Vec<DrawCommand> {
    match state.mode {
        Mode::Playing => draw_playing(state),
        Mode::Waiting => vec![banner("Press fire to play")],
        Mode::GameOver => vec![banner("Game Over")],
        Mode::Restart => Vec::new(),
    }
}

fn banner(text: &str) -> DrawCommand {
    DrawCommand::Text {
        text: text.to_string(),
        anchor: TextAnchor::Center,
        color: C_BANNER,
    }
}

fn draw_playing(state: &GameState) -> Vec<DrawCommand> {
    // The play area sits directly below the status strip.
    let dy = STATUS_HEIGHT;
    let mut cmds = Vec::new();

    for star in &state.stars {
        cmds.push(DrawCommand::Circle {
            center: (star.x as i32, star.y + dy),
            radius: star.radius,
            color: star.color,
            glyph: if star.radius > 1 { '*' } else { '·' },
        });
    }

    if state.player.alive {
        cmds.push(sprite(SpriteKind::Player, state.player.rect, dy));
    }
    for shot in &state.player_shots {
        cmds.push(sprite(SpriteKind::PlayerShot, shot.rect, dy));
    }
    for alien in &state.aliens {
        cmds.push(sprite(SpriteKind::Alien, alien.rect, dy));
    }
    for shot in &state.alien_shots {
        cmds.push(sprite(SpriteKind::AlienShot, shot.rect, dy));
    }
    for explosion in &state.explosions {
        cmds.push(DrawCommand::Circle {
            center: (explosion.x, explosion.y + dy),
            radius: explosion.current_radius,
            color: explosion.color,
            glyph: '▒',
        });
    }

    cmds.push(DrawCommand::Text {
        text: format!("Lives: {}", state.lives),
        anchor: TextAnchor::TopRight { dy: STATUS_TEXT_DY },
        color: C_STATUS,
    });
    cmds
}

fn sprite(kind: SpriteKind, rect: Rect, dy: i32) -> DrawCommand {
    DrawCommand::Sprite { kind, rect: rect.translate(0, dy) }
}

// ── Rasterising ───────────────────────────────────────────────────────────────

/// Paint `cmds` onto `canvas` in order; later commands overwrite earlier ones.
pub fn rasterize(canvas: &mut Canvas, cmds: &[DrawCommand]) {
    for cmd in cmds {
        match cmd {
            DrawCommand::Sprite { kind, rect } => {
                let (ch, fg) = kind.glyph();
                canvas.fill_rect(*rect, ch, fg);
            }
            DrawCommand::Circle { center, radius, color, glyph } => {
                canvas.fill_circle(*center, *radius, *glyph, *color);
            }
            DrawCommand::Text { text, anchor, color } => {
                let len = text.chars().count() as i32;
                let (col, row) = match anchor {
                    TextAnchor::Center => {
                        (canvas.cols() as i32 / 2 - len / 2, canvas.rows() as i32 / 2)
                    }
                    TextAnchor::TopRight { dy } => (canvas.cols() as i32 - len, canvas.row_for(*dy)),
                };
                canvas.put_text(col, row, text, *color);
            }
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a `cols × rows` terminal.
pub fn render<W: Write>(out: &mut W, state: &GameState, cols: u16, rows: u16) -> std::io::Result<()> {
    let (world_w, world_h) = window_size(state);
    let mut canvas = Canvas::new(cols, rows, world_w, world_h);
    rasterize(&mut canvas, &draw_list(state));
    present(out, &canvas)
}

/// Write the canvas to the terminal, one colour run at a time.
pub fn present<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for row in 0..canvas.rows() {
        out.queue(cursor::MoveTo(0, row))?;
        let mut current: Option<Rgb> = None;
        let mut run = String::new();
        for col in 0..canvas.cols() {
            let Some(cell) = canvas.cell(col, row) else {
                continue;
            };
            if current != Some(cell.fg) && cell.ch != ' ' {
                if !run.is_empty() {
                    out.queue(Print(&run))?;
                    run.clear();
                }
                out.queue(style::SetForegroundColor(to_color(cell.fg)))?;
                current = Some(cell.fg);
            }
            run.push(cell.ch);
        }
        if !run.is_empty() {
            out.queue(Print(&run))?;
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, canvas.rows().saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb { r: rgb.0, g: rgb.1, b: rgb.2 }
}
