//! Game integration tests.

mod common;

use belote::{FirstLegalCard, Game, GameOptions, NoopObserver, RoundOutcome, Seat, TeamId};

use common::{Bidder, init_logging, players};

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_target_score(300)
        .with_max_rounds(7)
        .with_first_leader(Seat::new(3));

    assert_eq!(options.target_score, 300);
    assert_eq!(options.max_rounds, 7);
    assert_eq!(options.first_leader, Seat::new(3));

    let defaults = GameOptions::default();
    assert_eq!(defaults.target_score, 1000);
    assert_eq!(defaults.first_leader, Seat::new(0));
}

#[test]
fn game_runs_until_a_team_passes_the_target() {
    init_logging();
    let mut game = Game::new(players(FirstLegalCard), GameOptions::default(), 42);
    let result = game.play(&mut NoopObserver).unwrap();

    assert!(game.is_finished());
    assert!(result.team_a > 1000 || result.team_b > 1000);
    assert_eq!(result.rounds_played, game.rounds_played());
    // Every scored round hands out exactly 162 points.
    assert_eq!(result.team_a + result.team_b, 162 * result.rounds_played);
    if result.team_a != result.team_b {
        let leader = if result.team_a > result.team_b {
            TeamId::A
        } else {
            TeamId::B
        };
        assert_eq!(result.winner, Some(leader));
    }
}

#[test]
fn leader_rotates_each_round() {
    let options = GameOptions::default().with_first_leader(Seat::new(1));
    let mut game = Game::new(players(FirstLegalCard), options, 5);

    for round in 0..6 {
        let leader = game.next_leader();
        assert_eq!(leader, Seat::new(1 + round));
        let outcome = game.play_round(&mut NoopObserver).unwrap();
        let RoundOutcome::Scored(score) = outcome else {
            panic!("round {round} was abandoned");
        };
        assert_eq!(score.declarer, leader.team());
    }
    assert_eq!(game.rounds_played(), 6);
}

#[test]
fn same_seed_same_game() {
    let options = GameOptions::default().with_target_score(500);
    let first = Game::new(players(FirstLegalCard), options, 2024)
        .play(&mut NoopObserver)
        .unwrap();
    let second = Game::new(players(FirstLegalCard), options, 2024)
        .play(&mut NoopObserver)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn abandoned_rounds_stop_at_the_round_limit() {
    let options = GameOptions::default().with_max_rounds(5);
    let mut game = Game::new(players(Bidder::PASS), options, 1);
    let result = game.play(&mut NoopObserver).unwrap();

    assert_eq!(result.rounds_played, 5);
    assert_eq!(result.winner, None);
    assert_eq!((result.team_a, result.team_b), (0, 0));
    for team in game.table().teams().iter() {
        assert_eq!(team.total_points(), 0);
    }
}
