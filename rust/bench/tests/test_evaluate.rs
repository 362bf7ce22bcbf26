use tablestakes_ai::baseline::BaselineAI;
use tablestakes_ai::create_ai;
use tablestakes_bench::BenchError;
use tablestakes_bench::cancel::CancelToken;
use tablestakes_bench::config::BenchmarkConfig;
use tablestakes_bench::evaluate::{evaluate_multiway, evaluate_strategy_vs_benchmark};
use tablestakes_engine::player::PlayerAction;
use tablestakes_engine::strategy::{Observation, Strategy};

fn small_config() -> BenchmarkConfig {
    BenchmarkConfig {
        hands_per_match: 25,
        num_duplicate_seed_sets: 2,
        base_seed: 1234,
        ..BenchmarkConfig::default()
    }
}

#[test]
fn self_play_scores_zero() {
    let summary = evaluate_strategy_vs_benchmark(
        Box::new(BaselineAI::new()),
        "baseline",
        &small_config(),
        &CancelToken::new(),
    )
    .unwrap();
    assert_eq!(summary.hands_played, 100);
    assert!(summary.bb_per_100.abs() < 1e-9);
    assert!(summary.ci95.abs() < 1e-9);
}

#[test]
fn evaluation_is_reproducible() {
    let config = small_config();
    let run = || {
        evaluate_strategy_vs_benchmark(
            create_ai("tight").unwrap(),
            "calling_station",
            &config,
            &CancelToken::new(),
        )
        .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn multiway_counts_every_rotation() {
    let summary = evaluate_multiway(
        create_ai("baseline").unwrap(),
        &["calling_station", "loose"],
        &small_config(),
        &CancelToken::new(),
    )
    .unwrap();
    assert_eq!(summary.hands_played, 50 * 3);
    assert!(summary.bb_per_100.is_finite());
    assert!(summary.ci95 >= 0.0);
}

#[test]
fn unknown_opponent_is_an_error() {
    let err = evaluate_strategy_vs_benchmark(
        create_ai("baseline").unwrap(),
        "nobody",
        &small_config(),
        &CancelToken::new(),
    )
    .unwrap_err();
    assert!(matches!(err, BenchError::Strategy(_)));
}

#[test]
fn too_many_opponents_is_an_error() {
    let err = evaluate_multiway(
        create_ai("baseline").unwrap(),
        &["baseline"; 6],
        &small_config(),
        &CancelToken::new(),
    )
    .unwrap_err();
    assert!(matches!(err, BenchError::InvalidConfig(_)));
}

#[test]
fn cancelled_before_start_plays_nothing() {
    let token = CancelToken::new();
    token.cancel();
    let err = evaluate_strategy_vs_benchmark(
        create_ai("baseline").unwrap(),
        "baseline",
        &small_config(),
        &token,
    )
    .unwrap_err();
    assert!(matches!(err, BenchError::Cancelled { hands_played: 0 }));
}

#[test]
fn cancellation_stops_between_hands() {
    let token = CancelToken::new();
    let trigger = token.clone();
    let mut decisions = 0u32;
    let candidate: Box<dyn Strategy> = Box::new(move |obs: &Observation| {
        decisions += 1;
        if decisions == 30 {
            trigger.cancel();
        }
        if obs.to_call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        }
    });
    let err = evaluate_strategy_vs_benchmark(candidate, "calling_station", &small_config(), &token)
        .unwrap_err();
    match err {
        BenchError::Cancelled { hands_played } => {
            assert!(hands_played > 0);
            assert!(hands_played < 100);
        }
        other => panic!("expected cancellation, got {:?}", other),
    }
}

#[test]
fn invalid_config_is_rejected() {
    let config = BenchmarkConfig {
        hands_per_match: 0,
        ..BenchmarkConfig::default()
    };
    let err = evaluate_strategy_vs_benchmark(
        create_ai("baseline").unwrap(),
        "baseline",
        &config,
        &CancelToken::new(),
    )
    .unwrap_err();
    assert!(matches!(err, BenchError::Config(_)));
}
