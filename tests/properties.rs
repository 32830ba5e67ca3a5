//! Property-based checks over the simulation core

use glam::Vec2;
use ledge_runner::audio::SilentSpeaker;
use ledge_runner::consts::{MAX_JUMPS, SIM_DT};
use ledge_runner::sim::{GamePhase, LevelGenerator, Platform, RunState, TickInput, cull, cull_threshold, tick};
use ledge_runner::tuning::LevelTuning;
use ledge_runner::Tuning;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

const EPS: f32 = 0.01;

fn playing(seed: u64) -> RunState {
    let mut state = RunState::new(seed, Tuning::default(), Vec2::new(800.0, 480.0));
    let start = TickInput {
        start_pressed: true,
        ..Default::default()
    };
    tick(&mut state, &start, SIM_DT, &SilentSpeaker);
    state
}

fn lefts(platforms: &[Platform]) -> Vec<f32> {
    platforms.iter().map(|p| p.bounds.x).collect()
}

proptest! {
    #[test]
    fn jump_budget_stays_bounded(
        seed in 0u64..1000,
        moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 10..300)
    ) {
        let mut state = playing(seed);
        for (sprint, jump) in moves {
            let input = TickInput {
                sprint_held: sprint,
                jump_pressed: jump,
                ..Default::default()
            };
            tick(&mut state, &input, SIM_DT, &SilentSpeaker);
            prop_assert!(state.player.jumps_remaining <= MAX_JUMPS);
        }
    }

    #[test]
    fn score_never_decreases_within_a_run(
        seed in 0u64..1000,
        moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 10..400)
    ) {
        let mut state = playing(seed);
        let mut last = state.score;
        for (sprint, jump) in moves {
            let input = TickInput {
                sprint_held: sprint,
                jump_pressed: jump,
                ..Default::default()
            };
            tick(&mut state, &input, SIM_DT, &SilentSpeaker);
            prop_assert!(state.score >= last);
            last = state.score;
        }
    }

    #[test]
    fn equal_seeds_generate_equal_levels(
        seed in any::<u64>(),
        targets in proptest::collection::vec(0.0f32..5000.0, 1..10)
    ) {
        let mut gen_a = LevelGenerator::new(LevelTuning::default());
        let mut gen_b = LevelGenerator::new(LevelTuning::default());
        let mut rng_a = Pcg32::seed_from_u64(seed);
        let mut rng_b = Pcg32::seed_from_u64(seed);

        prop_assert_eq!(lefts(&gen_a.reset(&mut rng_a)), lefts(&gen_b.reset(&mut rng_b)));
        let mut ahead = 0.0;
        for step in targets {
            ahead += step;
            let a = gen_a.generate(&mut rng_a, ahead);
            let b = gen_b.generate(&mut rng_b, ahead);
            prop_assert_eq!(lefts(&a), lefts(&b));
        }
    }

    #[test]
    fn generated_gaps_stay_in_range(seed in any::<u64>()) {
        let tuning = LevelTuning::default();
        let mut generator = LevelGenerator::new(tuning.clone());
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut platforms = generator.reset(&mut rng);
        platforms.extend(generator.generate(&mut rng, 20_000.0));
        prop_assert!(generator.frontier() >= 20_000.0);

        for pair in platforms.windows(2) {
            let (a, b) = (&pair[0].bounds, &pair[1].bounds);
            let gap = b.left() - a.right();
            prop_assert!(b.left() > a.left());
            // Far from the origin, subtracting edges back out loses a few ulps
            prop_assert!(gap >= tuning.min_gap - EPS && gap <= tuning.max_gap + EPS, "gap {gap}");
            prop_assert!(b.width >= tuning.min_width && b.width <= tuning.max_width);
            prop_assert!((b.y - tuning.base_y).abs() <= tuning.y_variation + EPS);
        }
    }

    #[test]
    fn cull_keeps_everything_reachable(
        seed in any::<u64>(),
        player_x in 0.0f32..10_000.0
    ) {
        let mut generator = LevelGenerator::new(LevelTuning::default());
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut platforms = generator.reset(&mut rng);
        platforms.extend(generator.generate(&mut rng, 12_000.0));
        let before = platforms.len();

        let removed = cull(&mut platforms, player_x, 800.0);
        let threshold = cull_threshold(player_x, 800.0);

        prop_assert_eq!(removed.len() + platforms.len(), before);
        prop_assert!(removed.iter().all(|p| p.bounds.right() < threshold));
        prop_assert!(platforms.iter().all(|p| p.bounds.right() >= threshold));
        prop_assert!(platforms.windows(2).all(|w| w[0].bounds.x < w[1].bounds.x));
    }
}

#[test]
fn title_screen_is_stable() {
    let mut state = RunState::new(3, Tuning::default(), Vec2::new(800.0, 480.0));
    for _ in 0..60 {
        tick(&mut state, &TickInput::default(), SIM_DT, &SilentSpeaker);
    }
    assert_eq!(state.phase, GamePhase::TitleScreen);
    assert_eq!(state.score, 0);
}
