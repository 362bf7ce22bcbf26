use tablestakes_engine::cards::{parse_cards, Card, Rank as R, Suit as S};
use tablestakes_engine::hand::{compare_hands, evaluate, evaluate_hand, Category, PokerHand};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

fn hand(s: &str) -> PokerHand {
    evaluate_hand(&parse_cards(s).unwrap())
}

#[test]
fn detects_royal_flush() {
    let cards = [
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
    ];
    let hs = evaluate_hand(&cards);
    assert_eq!(hs.category, Category::RoyalFlush);
    assert_eq!(hs.rank_value(), 10);
}

#[test]
fn royal_flush_beats_every_other_category() {
    let royal = hand("Ts Js Qs Ks As");
    for other in [
        "9h Th Jh Qh Kh",
        "Ac Ad Ah As Kc",
        "Kc Kd Kh Qc Qd",
        "2h 7h Jh Qh 9h",
        "Tc Jd Qh Ks Ac",
        "Qc Qh Qd 2s 3c",
        "Ac Ad Kc Kd 2h",
        "Ac Ad 4c 5d 9h",
        "Ac Kd 9h 8s 3c",
    ] {
        assert!(royal.beats(&hand(other)), "royal should beat {}", other);
    }
}

#[test]
fn category_ordering_is_correct() {
    let quads = hand("Ac Ad Ah As Kc Qd 2h");
    let full_house = hand("Kc Kd Kh Qc Qd 2h 3s");
    assert_eq!(quads.category, Category::FourOfAKind);
    assert_eq!(full_house.category, Category::FullHouse);
    assert!(compare_hands(&quads, &full_house).is_gt());
}

#[test]
fn straight_beats_three_of_a_kind() {
    let straight = hand("5c 6h 7c 8h 9d 2s 3c");
    let trips = hand("Qc Qh Qd 2s 3c 4h 8d");
    assert_eq!(straight.category, Category::Straight);
    assert!(straight.beats(&trips));
}

#[test]
fn flush_beats_straight_and_is_detected() {
    let flush = hand("2h 7h Jh Qh 9h Ac Kd");
    let straight = hand("5c 6h 7c 8h 9d 2s 3c");
    assert_eq!(flush.category, Category::Flush);
    assert_eq!(flush.primary_ranks, vec![12, 11, 9, 7, 2]);
    assert!(flush.beats(&straight));
}

#[test]
fn wheel_is_five_high_and_loses_to_six_high() {
    let wheel = hand("Ac 2d 3h 4s 5c 9d Kh");
    assert_eq!(wheel.category, Category::Straight);
    assert_eq!(wheel.primary_ranks, vec![5]);

    let six_high = hand("2d 3h 4s 5c 6d");
    assert!(six_high.beats(&wheel));
    let broadway = hand("Tc Jd Qh Ks Ac");
    assert!(broadway.beats(&wheel));
}

#[test]
fn steel_wheel_is_a_straight_flush_not_royal() {
    let steel = hand("Ah 2h 3h 4h 5h Kc Qd");
    assert_eq!(steel.category, Category::StraightFlush);
    assert_eq!(steel.primary_ranks, vec![5]);
}

#[test]
fn pair_kickers_break_ties() {
    let a = hand("Ac Ah Kd 9s 4c 3d 2h");
    let b = hand("Ad As Qd 9c 4h 3c 2s");
    assert_eq!(a.category, Category::OnePair);
    assert_eq!(a.primary_ranks, vec![14]);
    assert_eq!(a.kickers, vec![13, 9, 4]);
    assert!(a.beats(&b));
    assert!(!b.beats(&a));
}

#[test]
fn two_pair_uses_best_two_pairs_and_kicker() {
    let h = hand("Kc Kd 8h 8s 4c 4d Ah");
    assert_eq!(h.category, Category::TwoPair);
    assert_eq!(h.primary_ranks, vec![13, 8]);
    assert_eq!(h.kickers, vec![14]);
}

#[test]
fn two_trips_make_the_higher_full_house() {
    let h = hand("9c 9d 9h 5s 5c 5d 2h");
    assert_eq!(h.category, Category::FullHouse);
    assert_eq!(h.primary_ranks, vec![9, 5]);
}

#[test]
fn identical_boards_tie() {
    let board = parse_cards("Tc Jd Qh Ks Ac").unwrap();
    let a = evaluate(&parse_cards("2s 3s").unwrap(), &board);
    let b = evaluate(&parse_cards("4h 6h").unwrap(), &board);
    assert!(a.ties(&b));
    assert!(b.ties(&a));
    assert!(!a.beats(&b) && !b.beats(&a));
}

#[test]
fn evaluation_is_pure() {
    let cards = parse_cards("7c 7d Kh 2s 9c Td 3h").unwrap();
    let first = evaluate_hand(&cards);
    for _ in 0..5 {
        assert_eq!(evaluate_hand(&cards), first);
    }
}

#[test]
fn six_card_input_picks_best_subset() {
    let h = evaluate(
        &parse_cards("Ah Kh").unwrap(),
        &parse_cards("Qh Jh Th 2c").unwrap(),
    );
    assert_eq!(h.category, Category::RoyalFlush);
}

#[test]
fn fewer_than_five_cards_is_provisional_high_card() {
    let h = evaluate(&parse_cards("Ah Ad").unwrap(), &[]);
    assert_eq!(h.category, Category::HighCard);
    assert_eq!(h.primary_ranks, vec![14]);
    assert_eq!(h.kickers, vec![14]);
}

#[test]
fn comparison_is_a_total_preorder() {
    let hands: Vec<PokerHand> = [
        "Ac Kd 9h 8s 3c",
        "Ac Ad 4c 5d 9h",
        "Ac Ad Kc Kd 2h",
        "Qc Qh Qd 2s 3c",
        "Tc Jd Qh Ks Ac",
        "Ac 2d 3h 4s 5c",
        "2h 7h Jh Qh 9h",
        "Kc Kd Kh Qc Qd",
        "Ac Ad Ah As Kc",
        "9h Th Jh Qh Kh",
        "Ts Js Qs Ks As",
        "Td Jc Qs Kh Ad",
    ]
    .iter()
    .map(|s| hand(s))
    .collect();

    for a in &hands {
        assert!(a.ties(a));
        for b in &hands {
            // exactly one of beats / ties / loses
            let outcomes = [a.beats(b), a.ties(b), b.beats(a)];
            assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1);
            for c in &hands {
                if a.beats(b) && b.beats(c) {
                    assert!(a.beats(c), "ordering must be transitive");
                }
            }
        }
    }
}
