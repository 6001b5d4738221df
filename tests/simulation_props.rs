//! Property tests: invariants that hold for any input sequence.

use glam::Vec2;
use proptest::prelude::*;

use brick_breaker::GameConfig;
use brick_breaker::consts::TICK_MS;
use brick_breaker::sim::{
    Ball, GameEvent, GameState, TickInput, TargetKind, detect_target_hits, generate, tick,
};
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn arb_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>()).prop_map(|(left, right)| TickInput { left, right })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn lives_never_increase_and_score_never_decreases(
        seed in any::<u64>(),
        inputs in prop::collection::vec(arb_input(), 1..3000),
    ) {
        let mut state = GameState::new(GameConfig::default(), seed);
        let mut lives = state.progression.lives;
        let mut score = state.progression.score;
        let mut game_overs = 0;

        for (i, input) in inputs.iter().enumerate() {
            let events = tick(&mut state, input, i as f64 * TICK_MS);
            game_overs += events
                .iter()
                .filter(|e| matches!(e, GameEvent::GameOver { .. }))
                .count();

            prop_assert!(state.progression.lives <= lives);
            prop_assert!(state.progression.score >= score);
            lives = state.progression.lives;
            score = state.progression.score;

            let width = state.config.arena_width;
            prop_assert!(state.paddle.x >= 0.0);
            prop_assert!(state.paddle.x <= width - state.paddle.width);
        }

        prop_assert!(game_overs <= 1);
        prop_assert_eq!(game_overs == 1, state.is_over());
    }

    #[test]
    fn point_inside_exactly_one_target(
        seed in any::<u64>(),
        column in 0usize..8,
        row in 0usize..5,
        fx in 0.01f32..0.99,
        fy in 0.05f32..0.95,
    ) {
        let config = GameConfig::default();
        let mut grid = generate(8, 5, 0.1, &mut Pcg32::seed_from_u64(seed));
        grid.layout(&config.layout);

        let origin = config.layout.origin(column, row);
        let pos = origin + Vec2::new(
            fx * config.layout.target_width,
            fy * config.layout.target_height,
        );
        let ball = Ball { pos, vel: Vec2::new(4.0, -4.0), radius: 10.0 };

        prop_assert_eq!(detect_target_hits(&ball, &grid), vec![(column, row)]);
    }

    #[test]
    fn power_fraction_tracks_probability(
        seed in any::<u64>(),
        p in 0.0f64..=1.0,
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let grid = generate(100, 100, p, &mut rng);
        let fraction = grid.count_kind(TargetKind::Power) as f64 / 10_000.0;
        // Six standard deviations at worst case p = 0.5
        prop_assert!((fraction - p).abs() < 0.03, "p={} observed={}", p, fraction);
    }
}
