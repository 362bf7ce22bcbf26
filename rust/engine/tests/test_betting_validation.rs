use tablestakes_engine::errors::GameError;
use tablestakes_engine::player::PlayerAction as A;
use tablestakes_engine::rules::{normalize_action, validate_action, ValidatedAction};

#[test]
fn bet_zero_is_invalid() {
    let err = validate_action(
        10_000,
        /*to_call*/ 0,
        /*min_raise*/ 100,
        A::Bet(0),
    )
    .unwrap_err();
    match err {
        GameError::InvalidBetAmount { .. } => {}
        _ => panic!("expected InvalidBetAmount"),
    }
}

#[test]
fn bet_over_stack_becomes_allin() {
    let va = validate_action(50, 0, 100, A::Bet(100)).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(50));
}

#[test]
fn call_with_insufficient_stack_is_allin_call() {
    let va = validate_action(60, 100, 100, A::Call).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(60));
}

#[test]
fn short_raise_becomes_allin_without_error() {
    // to_call=100, min_raise=100, stack=130, Raise(50) -> AllIn(130)
    let va = validate_action(130, 100, 100, A::Raise(50)).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(130));
}

#[test]
fn strict_validation_rejects_check_facing_bet() {
    let err = validate_action(500, 20, 20, A::Check).unwrap_err();
    assert_eq!(err, GameError::InsufficientChips);
}

#[test]
fn strict_validation_rejects_under_minimum_raise() {
    let err = validate_action(1000, 20, 40, A::Raise(10)).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidBetAmount {
            amount: 10,
            minimum: 40
        }
    );
}

#[test]
fn normalisation_never_rejects() {
    let cases = [
        (A::Fold, ValidatedAction::Fold),
        (A::Check, ValidatedAction::Fold),
        (A::Call, ValidatedAction::Call(20)),
        (A::Bet(0), ValidatedAction::Call(20)),
        (A::Raise(1), ValidatedAction::Raise(10)),
        (A::Raise(30), ValidatedAction::Raise(30)),
        (A::Raise(5_000), ValidatedAction::AllIn(300)),
        (A::AllIn, ValidatedAction::AllIn(300)),
    ];
    for (action, expected) in cases {
        assert_eq!(
            normalize_action(300, 20, 10, true, action),
            expected,
            "{:?}",
            action
        );
    }
}

#[test]
fn bet_into_unopened_pot_is_a_bet() {
    assert_eq!(
        normalize_action(300, 0, 10, true, A::Raise(25)),
        ValidatedAction::Bet(25)
    );
    assert_eq!(
        normalize_action(300, 0, 10, true, A::Check),
        ValidatedAction::Check
    );
}

#[test]
fn empty_stack_can_only_check_or_fold() {
    assert_eq!(
        normalize_action(0, 0, 10, true, A::AllIn),
        ValidatedAction::Check
    );
    assert_eq!(
        normalize_action(0, 10, 10, true, A::Call),
        ValidatedAction::Fold
    );
}
