use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sideways::compute::*;
use sideways::entities::*;
use sideways::geometry::{Rect, Rgb};
use sideways::wave::extra_speed;

fn input_strategy() -> impl Strategy<Value = PlayerInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left, right, up, down, fire)| PlayerInput { stop: false, left, right, up, down, fire },
    )
}

fn frames_strategy() -> impl Strategy<Value = Vec<(PlayerInput, f32)>> {
    prop::collection::vec((input_strategy(), 0.0f32..0.05), 1..300)
}

fn playing_state(seed: u64, motion: MotionModel) -> (GameState, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut s = init_state(Sprites::default(), default_game_area(), motion, &mut rng);
    s.mode = Mode::Playing;
    (s, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn session_invariants_hold(seed in any::<u64>(), frames in frames_strategy(), elapsed in any::<bool>()) {
        let motion = if elapsed { MotionModel::Elapsed } else { MotionModel::Mixed };
        let (mut s, mut rng) = playing_state(seed, motion);
        for (input, dt) in frames {
            s = update(&s, &input, dt, &mut rng);
            prop_assert!(s.player_shots.len() <= 1);
            prop_assert!(s.lives <= STARTING_LIVES);
            let floor = 1 + extra_speed(s.wave_number);
            prop_assert!(s.aliens.iter().all(|a| a.speed >= floor));
            prop_assert!(s
                .explosions
                .iter()
                .all(|e| e.current_radius >= 0 && e.current_radius <= e.max_radius));
        }
    }

    #[test]
    fn shrinking_explosion_never_grows(max_radius in 1i32..300) {
        let mut e = Explosion::new((0, 0), max_radius, Rgb(255, 50, 0));
        let mut shrinking_from: Option<i32> = None;
        while let Some(next) = animate_explosion(&e) {
            prop_assert!(next.current_radius >= 0 && next.current_radius <= max_radius);
            if let Some(prev) = shrinking_from {
                prop_assert!(!next.growing);
                prop_assert!(next.current_radius <= prev);
            }
            if !next.growing {
                shrinking_from = Some(next.current_radius);
            }
            e = next;
        }
    }

    #[test]
    fn idle_zero_dt_leaves_time_scaled_entities(seed in any::<u64>(), sx in -600.0f32..600.0, sy in -200.0f32..200.0) {
        let (mut s, mut rng) = playing_state(seed, MotionModel::Mixed);
        s.alien_shots = vec![AlienShot::new(Rect::new(200, 60, 12, 12), sx, sy)];
        let next = update(&s, &PlayerInput::default(), 0.0, &mut rng);
        prop_assert_eq!(&next.player, &s.player);
        prop_assert_eq!(&next.stars[..s.stars.len()], &s.stars[..]);
        prop_assert_eq!(&next.alien_shots[0], &s.alien_shots[0]);
    }
}
