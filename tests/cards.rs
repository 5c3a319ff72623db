//! Card, container, trick and scoring tests.

mod common;

use std::collections::HashSet;

use belote::score::{self, settle};
use belote::{
    Card, CardError, CardSetError, DECK_SIZE, Hand, Rank, Seat, Stock, Suit, Trick, TrickError,
    resolve_trick,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use common::{card, parse};

fn trick(codes: [&str; 4]) -> Trick {
    Trick::from_cards(&codes.map(parse)).unwrap()
}

#[test]
fn card_parsing_and_display() {
    assert_eq!(parse("JC"), card(Suit::Clubs, Rank::Jack));
    assert_eq!(parse("th"), card(Suit::Hearts, Rank::Ten));
    assert_eq!(parse("7S"), card(Suit::Spades, Rank::Seven));

    assert_eq!("AX".parse::<Card>().unwrap_err(), CardError::InvalidSuit('X'));
    assert_eq!("2D".parse::<Card>().unwrap_err(), CardError::InvalidRank('2'));
    assert_eq!("10D".parse::<Card>().unwrap_err(), CardError::InvalidCode);
    assert_eq!("".parse::<Card>().unwrap_err(), CardError::InvalidCode);

    assert_eq!(parse("AC").to_string(), "Ace of Clubs");
    assert_eq!(parse("KD").to_string(), "King of Diamonds");
    assert_eq!(parse("QH").to_string(), "Queen of Hearts");
    assert_eq!(parse("TS").to_string(), "10 of Spades");
}

#[test]
fn ranking_tables() {
    let trump = Suit::Hearts;
    let expect_trump = [
        (Rank::Seven, 0, 0),
        (Rank::Eight, 1, 0),
        (Rank::Nine, 6, 14),
        (Rank::Ten, 4, 10),
        (Rank::Jack, 7, 20),
        (Rank::Queen, 2, 3),
        (Rank::King, 3, 4),
        (Rank::Ace, 5, 11),
    ];
    for (rank, order, points) in expect_trump {
        let ranked = card(trump, rank).rank_relative_to(trump);
        assert!(ranked.is_trump());
        assert_eq!((ranked.order(), ranked.points()), (order, points), "{rank}");
    }

    let expect_plain = [
        (Rank::Seven, 0, 0),
        (Rank::Eight, 1, 0),
        (Rank::Nine, 2, 0),
        (Rank::Ten, 6, 10),
        (Rank::Jack, 3, 2),
        (Rank::Queen, 4, 3),
        (Rank::King, 5, 4),
        (Rank::Ace, 7, 11),
    ];
    for (rank, order, points) in expect_plain {
        let ranked = card(Suit::Spades, rank).rank_relative_to(trump);
        assert!(!ranked.is_trump());
        assert_eq!((ranked.order(), ranked.points()), (order, points), "{rank}");
    }
}

#[test]
fn deck_is_worth_152_under_every_trump() {
    for trump in Suit::ALL {
        let mut deck = Stock::full_deck();
        deck.rank_relative_to(trump);
        assert_eq!(deck.total_points(), 152);

        for suit in Suit::ALL {
            let suit_points: u32 = deck
                .ranked_cards()
                .filter(|c| c.suit() == suit)
                .map(|c| u32::from(c.points()))
                .sum();
            let expected = if suit == trump { 62 } else { 30 };
            assert_eq!(suit_points, expected, "{suit} with {trump} trump");
        }
    }
}

#[test]
fn trump_beats_plain_and_order_decides_within_suit() {
    let trump = Suit::Diamonds;
    let seven_trump = parse("7D").rank_relative_to(trump);
    let ace_plain = parse("AS").rank_relative_to(trump);
    let jack_trump = parse("JD").rank_relative_to(trump);
    let nine_trump = parse("9D").rank_relative_to(trump);
    let ten_plain = parse("TS").rank_relative_to(trump);

    assert!(seven_trump.beats(&ace_plain));
    assert!(!ace_plain.beats(&seven_trump));
    assert!(jack_trump.beats(&nine_trump));
    assert!(!nine_trump.beats(&jack_trump));
    assert!(ace_plain.beats(&ten_plain));
    assert!(!ten_plain.beats(&ace_plain));
}

#[test]
fn container_rejects_duplicates_and_overflow() {
    let mut hand = Hand::new();
    hand.add(parse("AC")).unwrap();
    assert_eq!(
        hand.add(parse("AC")).unwrap_err(),
        CardSetError::Duplicate(parse("AC"))
    );
    assert_eq!(hand.len(), 1);

    for code in ["7C", "8C", "9C", "TC", "JC", "QC", "KC"] {
        hand.add(parse(code)).unwrap();
    }
    assert!(hand.is_full());
    assert_eq!(
        hand.add(parse("7D")).unwrap_err(),
        CardSetError::CapacityExceeded(8)
    );
    assert_eq!(hand.len(), 8);
    assert!(!hand.contains(parse("7D")));

    assert!(Trick::from_cards(&[parse("7C"), parse("7C")]).is_err());
    assert!(Trick::from_cards(&["7C", "8C", "9C", "TC", "JC"].map(parse)).is_err());
}

#[test]
fn container_remove_and_draw_first() {
    let mut stock = Stock::from_cards(&["9H", "7S", "AD"].map(parse)).unwrap();
    stock.remove(parse("7S")).unwrap();
    assert_eq!(
        stock.remove(parse("7S")).unwrap_err(),
        CardSetError::NotFound(parse("7S"))
    );

    assert_eq!(stock.draw_first().unwrap(), parse("9H"));
    assert_eq!(stock.draw_first().unwrap(), parse("AD"));
    assert_eq!(stock.draw_first().unwrap_err(), CardSetError::Empty);
}

#[test]
fn unranked_container_is_worth_nothing() {
    let mut hand = Hand::from_cards(&["JH", "9H", "AS"].map(parse)).unwrap();
    assert_eq!(hand.total_points(), 0);
    assert_eq!(hand.ranked_cards().count(), 0);

    hand.rank_relative_to(Suit::Hearts);
    assert_eq!(hand.total_points(), 20 + 14 + 11);
    hand.add(parse("TC")).unwrap();
    assert_eq!(hand.total_points(), 20 + 14 + 11 + 10);
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let mut first = Stock::full_deck();
    let mut second = Stock::full_deck();
    let mut other = Stock::full_deck();
    first.shuffle_seeded(Some(42));
    second.shuffle_seeded(Some(42));
    other.shuffle_seeded(Some(42 * 42));

    assert_eq!(first, second);
    assert_ne!(first, other);

    let distinct: HashSet<Card> = first.cards().iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
    assert_ne!(first, Stock::full_deck());
}

#[test]
fn unseeded_shuffle_keeps_a_valid_deck() {
    let mut deck = Stock::full_deck();
    deck.shuffle_seeded(None);
    assert_eq!(deck.len(), DECK_SIZE);
    let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
}

#[test]
fn trump_jack_takes_the_trick() {
    let played = trick(["8C", "TC", "JC", "QC"]);
    assert_eq!(
        resolve_trick(&played, Suit::Clubs, Seat::new(1)).unwrap(),
        Seat::new(3)
    );
}

#[test]
fn off_suit_cards_never_win() {
    // Hearts demanded, spades trump: the ace of diamonds is neither.
    let played = trick(["7H", "AD", "KH", "8H"]);
    assert_eq!(
        resolve_trick(&played, Suit::Spades, Seat::new(0)).unwrap(),
        Seat::new(2)
    );

    let all_off = trick(["7H", "AD", "AC", "JD"]);
    assert_eq!(
        resolve_trick(&all_off, Suit::Spades, Seat::new(2)).unwrap(),
        Seat::new(2)
    );
}

#[test]
fn lowest_trump_beats_demanded_ace_and_is_overtrumped() {
    let played = trick(["AH", "7S", "TH", "8S"]);
    assert_eq!(
        resolve_trick(&played, Suit::Spades, Seat::new(3)).unwrap(),
        Seat::new(2)
    );

    let led_trump = trick(["9S", "JS", "AS", "AH"]);
    assert_eq!(
        resolve_trick(&led_trump, Suit::Spades, Seat::new(0)).unwrap(),
        Seat::new(1)
    );
}

#[test]
fn winner_follows_the_leader_around_the_table() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let mut deck = Stock::full_deck();
        deck.shuffle(&mut rng);
        let played = Trick::from_cards(&deck.cards()[..4]).unwrap();

        for trump in Suit::ALL {
            let base = resolve_trick(&played, trump, Seat::new(0)).unwrap();
            for k in 1..4 {
                let shifted = resolve_trick(&played, trump, Seat::new(k)).unwrap();
                assert_eq!(shifted, base.offset(k));
            }
        }
    }
}

#[test]
fn incomplete_trick_is_rejected() {
    let played = Trick::from_cards(&["8C", "TC", "JC"].map(parse)).unwrap();
    assert_eq!(
        resolve_trick(&played, Suit::Clubs, Seat::new(0)).unwrap_err(),
        TrickError::Incomplete(3)
    );
}

#[test]
fn contract_rule() {
    // Declarer short of 82: nothing for them, 162 for the defense.
    assert_eq!(settle(60, true), 0);
    assert_eq!(settle(102, false), score::ROUND_TOTAL);

    // Declarer makes it: both keep their tallies.
    assert_eq!(settle(90, true), 90);
    assert_eq!(settle(72, false), 72);
    assert_eq!(settle(90 + score::LAST_TRICK_BONUS, true), 100);
    assert_eq!(settle(62, false), 62);

    // Boundaries.
    assert_eq!(settle(82, true), 82);
    assert_eq!(settle(80, false), 80);
    assert_eq!(settle(81, true), 0);
    assert_eq!(settle(81, false), 162);
}
