use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{
    Cell, GameEngine, Marker, MatchStatus, MoveError, MoveOutcome, Player, RandomPlayer,
    BOARD_CELLS,
};

fn count_marks(engine: &GameEngine, marker: Marker) -> usize {
    engine
        .board()
        .cells()
        .iter()
        .filter(|c| **c == Cell::Marked(marker))
        .count()
}

/// One full round: the player marks the lowest empty cell, then the pending
/// opponent reply (if any) is delivered immediately.
fn play_round(engine: &mut GameEngine, rng: &mut SmallRng) {
    let index = engine
        .board()
        .empty_cells()
        .next()
        .expect("active match always has an empty cell");
    match engine.apply_player_move(index) {
        MoveOutcome::Applied { pending, .. } => {
            if let Some(token) = pending {
                assert!(engine.opponent_move(rng, token).is_some());
            }
        }
        MoveOutcome::Rejected(err) => panic!("unexpected rejection: {}", err),
    }
}

#[test]
fn test_full_match_reaches_a_terminal_status() {
    for seed in 0..25u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new();
        engine.start_match(Marker::X);

        let mut rounds = 0;
        while engine.status() == MatchStatus::Active {
            rounds += 1;
            assert!(rounds <= BOARD_CELLS, "seed {} did not terminate", seed);
            play_round(&mut engine, &mut rng);

            // the player opens every round, so it never trails the opponent
            let player = count_marks(&engine, engine.player_marker());
            let opponent = count_marks(&engine, engine.opponent_marker());
            assert!(player == opponent || player == opponent + 1);
            if engine.status() == MatchStatus::Active {
                assert_eq!(engine.turn(), engine.player_marker());
            }
        }

        match engine.status() {
            MatchStatus::Won(m) => assert_eq!(engine.board().winning_marker(), Some(m)),
            MatchStatus::Draw => {
                assert!(engine.board().is_full());
                assert_eq!(engine.board().winning_marker(), None);
            }
            MatchStatus::Active => unreachable!(),
        }
    }
}

#[test]
fn test_random_vs_random_matches_terminate() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut seat = RandomPlayer::new();
    let mut engine = GameEngine::new();

    for game in 0..50 {
        let marker = if game % 2 == 0 { Marker::X } else { Marker::O };
        engine.start_match(marker);

        let mut turns = 0;
        while engine.status() == MatchStatus::Active {
            turns += 1;
            assert!(turns <= BOARD_CELLS, "game {} took too many turns", game);
            let index = seat.select_cell(&mut rng, engine.board()).unwrap();
            if let MoveOutcome::Applied {
                pending: Some(token),
                ..
            } = engine.apply_player_move(index)
            {
                engine.opponent_move(&mut rng, token);
            }
        }
        assert!(matches!(
            engine.status(),
            MatchStatus::Won(_) | MatchStatus::Draw
        ));
    }
}

#[test]
fn test_finished_match_ignores_further_input() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut engine = GameEngine::new();
    engine.start_match(Marker::X);

    while engine.status() == MatchStatus::Active {
        play_round(&mut engine, &mut rng);
    }
    let terminal = engine.state();

    for index in 0..BOARD_CELLS {
        match engine.apply_player_move(index) {
            MoveOutcome::Rejected(MoveError::CellOccupied | MoveError::MatchOver) => {}
            other => panic!("expected rejection, got {:?}", other),
        }
    }
    assert_eq!(engine.state(), terminal);

    // a restart brings back a playable board with the same markers
    engine.restart_match();
    assert_eq!(engine.status(), MatchStatus::Active);
    assert_eq!(engine.player_marker(), Marker::X);
    assert!(engine.apply_player_move(0).is_applied());
}

#[test]
fn test_scripted_match_against_seeded_opponent() {
    // choose X, then trade moves with a seed-fixed opponent: every reply must
    // land exactly one opponent marker on a previously empty cell
    let mut rng = SmallRng::seed_from_u64(5);
    let mut engine = GameEngine::new();
    engine.start_match(Marker::X);

    while engine.status() == MatchStatus::Active {
        let index = engine.board().empty_cells().next().unwrap();
        let before_opponent = count_marks(&engine, Marker::O);
        let outcome = engine.apply_player_move(index);
        assert!(outcome.is_applied());
        assert_eq!(engine.board().cell(index), Some(Cell::Marked(Marker::X)));

        if let MoveOutcome::Applied {
            pending: Some(token),
            ..
        } = outcome
        {
            let reply = engine.opponent_move(&mut rng, token).unwrap();
            assert_ne!(reply, index);
            assert_eq!(engine.board().cell(reply), Some(Cell::Marked(Marker::O)));
            assert_eq!(count_marks(&engine, Marker::O), before_opponent + 1);
        }
    }
}
