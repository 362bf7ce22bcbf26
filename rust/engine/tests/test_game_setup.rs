use tablestakes_engine::config::TableConfig;
use tablestakes_engine::errors::{DealError, GameError};
use tablestakes_engine::game::GameState;
use tablestakes_engine::logger::{ActionKind, Street};
use tablestakes_engine::player::PlayerAction;

#[test]
fn heads_up_button_posts_small_blind_and_acts_first() {
    let gs = GameState::new(TableConfig::default(), &[1000, 1000], 0, 1).unwrap();
    assert_eq!(gs.small_blind_seat(), 0);
    assert_eq!(gs.big_blind_seat(), 1);
    assert_eq!(gs.players()[0].current_bet(), 5);
    assert_eq!(gs.players()[1].current_bet(), 10);
    assert_eq!(gs.pot(), 15);
    assert_eq!(gs.current_player(), Some(0));
    assert_eq!(gs.current_round(), Street::Preflop);
    assert!(gs.community_cards().is_empty());
    assert_eq!(gs.min_raise(), 10);
}

#[test]
fn three_handed_blinds_sit_left_of_button() {
    let gs = GameState::new(TableConfig::default(), &[1000, 1000, 1000], 1, 1).unwrap();
    assert_eq!(gs.small_blind_seat(), 2);
    assert_eq!(gs.big_blind_seat(), 0);
    // first to act preflop is left of the big blind
    assert_eq!(gs.current_player(), Some(1));
}

#[test]
fn postflop_action_starts_left_of_button() {
    let mut gs = GameState::new(TableConfig::default(), &[1000, 1000, 1000], 0, 3).unwrap();
    gs.apply_action(0, PlayerAction::Call).unwrap();
    gs.apply_action(1, PlayerAction::Call).unwrap();
    gs.apply_action(2, PlayerAction::Check).unwrap();
    assert_eq!(gs.current_player(), None);
    gs.advance_round().unwrap();
    assert_eq!(gs.current_round(), Street::Flop);
    assert_eq!(gs.community_cards().len(), 3);
    assert_eq!(gs.current_player(), Some(1));
}

#[test]
fn heads_up_postflop_big_blind_acts_first() {
    let mut gs = GameState::new(TableConfig::default(), &[1000, 1000], 1, 3).unwrap();
    assert_eq!(gs.current_player(), Some(1));
    gs.apply_action(1, PlayerAction::Call).unwrap();
    gs.apply_action(0, PlayerAction::Check).unwrap();
    gs.advance_round().unwrap();
    assert_eq!(gs.current_player(), Some(0));
}

#[test]
fn antes_are_posted_before_blinds() {
    let config = TableConfig::default().with_ante(1);
    let gs = GameState::new(config, &[100, 100, 100, 100], 0, 8).unwrap();
    let kinds: Vec<ActionKind> = gs.betting_history().iter().map(|a| a.action).collect();
    assert_eq!(
        kinds,
        vec![
            ActionKind::Ante,
            ActionKind::Ante,
            ActionKind::Ante,
            ActionKind::Ante,
            ActionKind::SmallBlind,
            ActionKind::BigBlind,
        ]
    );
    assert_eq!(gs.pot(), 4 + 5 + 10);
    // antes do not count toward the street bet
    assert_eq!(gs.players()[3].current_bet(), 0);
    assert_eq!(gs.to_call(3), 10);
}

#[test]
fn short_blind_posts_what_it_has() {
    let gs = GameState::new(TableConfig::default(), &[100, 3, 100], 0, 2).unwrap();
    let sb = &gs.players()[1];
    assert_eq!(sb.current_bet(), 3);
    assert!(sb.is_all_in());
    assert_eq!(gs.pot(), 13);
}

#[test]
fn zero_energy_seat_is_dealt_in_but_never_asked() {
    let gs = GameState::new(TableConfig::default(), &[100, 100, 0], 0, 4).unwrap();
    let broke = &gs.players()[2];
    assert!(broke.is_all_in());
    assert!(broke.is_active());
    assert_eq!(broke.total_bet(), 0);
    assert_eq!(gs.current_player(), Some(0));
}

#[test]
fn invalid_setups_are_rejected() {
    assert_eq!(
        GameState::new(TableConfig::default(), &[100], 0, 1).unwrap_err(),
        GameError::InvalidPlayerCount(1)
    );
    assert_eq!(
        GameState::new(TableConfig::default(), &[100; 7], 0, 1).unwrap_err(),
        GameError::InvalidPlayerCount(7)
    );
    assert_eq!(
        GameState::new(TableConfig::default(), &[100, 100], 2, 1).unwrap_err(),
        GameError::InvalidDeal(DealError::ButtonOutOfRange {
            button: 2,
            players: 2
        })
    );
    assert_eq!(
        GameState::new(TableConfig::with_blinds(20, 10), &[100, 100], 0, 1).unwrap_err(),
        GameError::InvalidBlinds {
            small_blind: 20,
            big_blind: 10
        }
    );
}
