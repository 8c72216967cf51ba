/// Parallax starfield generation.

use rand::Rng;

use crate::entities::Star;
use crate::geometry::Rgb;

/// One-in-seven roll used both for the initial field and per-frame spawns.
pub fn should_have_star(rng: &mut impl Rng) -> bool {
    rng.gen_ratio(1, 7)
}

/// A star at column `x` with random row, size, warm/blue tint and speed.
pub fn random_star_for_x(x: i32, height: i32, rng: &mut impl Rng) -> Star {
    let radius = rng.gen_range(0..=2);
    let y = rng.gen_range(0..=height);
    let red = rng.gen_range(230..=255);
    let blue: u8 = rng.gen_range(100..=255);
    let green = rng.gen_range((blue as u16 + 50).min(255) as u8..=255);
    let speed = rng.gen_range(10..=100) as f32;
    Star {
        x: x as f32,
        y,
        radius,
        color: Rgb(red, green, blue),
        speed,
    }
}

/// Seed a full-width field: every column gets the same one-in-seven chance.
pub fn initial_field(width: i32, height: i32, rng: &mut impl Rng) -> Vec<Star> {
    let mut stars = Vec::new();
    for x in 0..width {
        if should_have_star(rng) {
            stars.push(random_star_for_x(x, height, rng));
        }
    }
    stars
}
