/// Wave factory.
///
/// Layouts cycle every three waves; each full cycle adds one pixel per frame
/// to every alien's speed.

use crate::entities::{Alien, Sprites};
use crate::geometry::Rect;

const LAYOUT_LINE: &[(i32, i32)] = &[(10, 0), (100, 0), (200, 0), (300, 0), (400, 0)];

const LAYOUT_ARROW: &[(i32, i32)] = &[(10, 0), (100, 50), (100, -50), (200, 100), (200, -100)];

const LAYOUT_BLOCK: &[(i32, i32)] = &[
    (10, 0),
    (100, -50),
    (100, 0),
    (100, 50),
    (200, -100),
    (200, -50),
    (200, 0),
    (200, 50),
    (200, 100),
];

/// Centre offsets from `(area.width, area.height / 2)` for a wave.
pub fn layout_for(wave_number: u32) -> &'static [(i32, i32)] {
    match wave_number % 3 {
        0 => LAYOUT_LINE,
        1 => LAYOUT_ARROW,
        _ => LAYOUT_BLOCK,
    }
}

/// Speed bonus shared by every alien of a wave.
pub fn extra_speed(wave_number: u32) -> i32 {
    (wave_number / 3) as i32
}

/// Build the aliens for `wave_number`, entering from beyond the right edge
/// of `game_area` and patrolling the whole of it.
pub fn make_wave(sprites: &Sprites, game_area: Rect, wave_number: u32) -> Vec<Alien> {
    let (w, h) = sprites.alien;
    let bonus = extra_speed(wave_number);
    layout_for(wave_number)
        .iter()
        .map(|&(dx, dy)| {
            let rect = Rect::from_center(game_area.w + dx, game_area.h / 2 + dy, w, h);
            Alien::new(rect, game_area, bonus)
        })
        .collect()
}
