use tablestakes_engine::cards::parse_cards;
use tablestakes_engine::config::TableConfig;
use tablestakes_engine::deal::Deal;
use tablestakes_engine::engine::simulate_hand_from_deal;
use tablestakes_engine::errors::{DealError, GameError};
use tablestakes_engine::player::PlayerAction;
use tablestakes_engine::strategy::{Observation, Strategy};

fn holes(list: &[&str]) -> Vec<Vec<tablestakes_engine::cards::Card>> {
    list.iter().map(|h| parse_cards(h).unwrap()).collect()
}

#[test]
fn duplicate_card_is_rejected() {
    let err = Deal::new(
        holes(&["As Kd", "As 2c"]),
        parse_cards("3h 4h 5h 6h 7h").unwrap(),
        0,
    )
    .unwrap_err();
    assert_eq!(err, DealError::DuplicateCard("As".parse().unwrap()));
}

#[test]
fn duplicate_between_hole_and_board_is_rejected() {
    let err = Deal::new(
        holes(&["As Kd", "Qs 2c"]),
        parse_cards("3h 4h 5h 6h Kd").unwrap(),
        1,
    )
    .unwrap_err();
    assert!(matches!(err, DealError::DuplicateCard(_)));
}

#[test]
fn wrong_card_counts_are_rejected() {
    let err = Deal::new(
        holes(&["As Kd", "Qs"]),
        parse_cards("3h 4h 5h 6h 7h").unwrap(),
        0,
    )
    .unwrap_err();
    assert_eq!(err, DealError::WrongHoleCardCount { seat: 1, count: 1 });

    let err = Deal::new(
        holes(&["As Kd", "Qs Qd"]),
        parse_cards("3h 4h 5h 6h").unwrap(),
        0,
    )
    .unwrap_err();
    assert_eq!(err, DealError::WrongCommunityCount(4));
}

#[test]
fn button_out_of_range_is_rejected() {
    let err = Deal::new(
        holes(&["As Kd", "Qs Qd"]),
        parse_cards("3h 4h 5h 6h 7h").unwrap(),
        2,
    )
    .unwrap_err();
    assert_eq!(
        err,
        DealError::ButtonOutOfRange {
            button: 2,
            players: 2
        }
    );
    assert!(matches!(
        Deal::from_seed(1, 3, 3),
        Err(GameError::InvalidDeal(DealError::ButtonOutOfRange { .. }))
    ));
}

#[test]
fn seat_count_outside_two_to_six_is_rejected() {
    assert!(matches!(
        Deal::new(holes(&["As Kd"]), parse_cards("3h 4h 5h 6h 7h").unwrap(), 0),
        Err(DealError::InvalidPlayerCount(1))
    ));
    assert_eq!(
        Deal::from_seed(1, 7, 0).unwrap_err(),
        GameError::InvalidPlayerCount(7)
    );
}

#[test]
fn seeded_deals_are_reproducible_and_distinct() {
    let a = Deal::from_seed(31337, 6, 4).unwrap();
    let b = Deal::from_seed(31337, 6, 4).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.num_players(), 6);
    assert_eq!(a.button(), 4);
    assert!(a.validate().is_ok());
    assert_ne!(a, Deal::from_seed(31338, 6, 4).unwrap());
}

#[test]
fn invalid_deal_fails_before_simulation() {
    let mut strategies: Vec<Box<dyn Strategy>> = vec![
        Box::new(|_: &Observation| PlayerAction::Call),
        Box::new(|_: &Observation| PlayerAction::Call),
        Box::new(|_: &Observation| PlayerAction::Call),
    ];
    let deal = Deal::from_seed(5, 2, 0).unwrap();
    let err = simulate_hand_from_deal(&deal, &TableConfig::default(), &[100, 100], &mut strategies)
        .unwrap_err();
    assert_eq!(
        err,
        GameError::StrategyCountMismatch {
            expected: 2,
            actual: 3
        }
    );
}
