//! Session tests: full games through the human-vs-engine loop.

use tictac_engine::core::{Difficulty, EngineConfig, GameRng, Mark};
use tictac_engine::error::{EngineError, IllegalMoveReason};
use tictac_engine::rules::GameStatus;
use tictac_engine::session::{ScoreTally, Session};

fn session(difficulty: Difficulty, seed: u64) -> Session {
    Session::new(
        EngineConfig::default()
            .with_difficulty(difficulty)
            .with_seed(seed),
    )
    .unwrap()
}

/// Play random human moves until the current game ends.
fn play_out_randomly(session: &mut Session, rng: &mut GameRng) -> GameStatus {
    loop {
        let moves = session.game().legal_moves();
        let index = *rng.choose(&moves).expect("in-progress game has moves");
        let outcome = session.play_human(index).unwrap();
        if outcome.status.is_terminal() {
            return outcome.status;
        }
    }
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_human_win_is_counted_once() {
    // Find a seed where Easy lets the top row through.
    for seed in 0..100 {
        let mut s = session(Difficulty::Easy, seed);
        let mut won = false;
        for index in [0, 1, 2, 3, 4, 5, 6, 7, 8] {
            match s.try_play_human(index) {
                Some(outcome) if outcome.status.winner() == Some(Mark::X) => {
                    won = true;
                    break;
                }
                Some(outcome) if outcome.status.is_terminal() => break,
                _ => {}
            }
        }
        if !won {
            continue;
        }

        assert_eq!(s.tally().player_wins, 1);
        assert_eq!(s.tally().total(), 1);

        // Further input is rejected and does not touch the tally.
        let err = s.play_human(8).unwrap_err();
        assert!(matches!(
            err,
            EngineError::IllegalMove {
                reason: IllegalMoveReason::GameOver | IllegalMoveReason::Occupied(_),
                ..
            }
        ));
        assert_eq!(s.tally().total(), 1);
        return;
    }
    panic!("no seed produced a human win against Easy");
}

#[test]
fn test_tally_counts_every_game() {
    let mut s = session(Difficulty::Medium, 7);
    let mut human = GameRng::new(1);
    let mut expected = ScoreTally::default();

    for _ in 0..30 {
        let status = play_out_randomly(&mut s, &mut human);
        expected.record(&status);
        assert_eq!(s.tally(), expected);
        s.restart();
    }

    assert_eq!(s.tally().total(), 30);
}

#[test]
fn test_impossible_session_never_loses_to_random_human() {
    let mut s = session(Difficulty::Impossible, 3);
    let mut human = GameRng::new(11);

    for _ in 0..50 {
        play_out_randomly(&mut s, &mut human);
        s.restart();
    }

    let tally = s.tally();
    assert_eq!(tally.player_wins, 0);
    assert_eq!(tally.total(), 50);
    assert!(tally.engine_wins > 0);
}

#[test]
fn test_reset_scores() {
    let mut s = session(Difficulty::Impossible, 0);
    let mut human = GameRng::new(2);
    play_out_randomly(&mut s, &mut human);
    assert_eq!(s.tally().total(), 1);

    s.play_human(4).unwrap_err();
    s.reset_scores();

    assert_eq!(s.tally(), ScoreTally::default());
    assert!(s.game().history().is_empty());
    assert_eq!(s.game().status(), GameStatus::InProgress);
}

#[test]
fn test_difficulty_change_keeps_tally() {
    let mut s = session(Difficulty::Impossible, 0);
    let mut human = GameRng::new(5);
    play_out_randomly(&mut s, &mut human);

    s.set_difficulty(Difficulty::Easy);
    assert_eq!(s.difficulty(), Difficulty::Easy);
    assert_eq!(s.config().difficulty, Difficulty::Easy);
    assert_eq!(s.tally().total(), 1);
    assert_eq!(s.game().legal_moves().len(), 9);
}

#[test]
fn test_loaded_config_is_validated() {
    let good = r#"{"difficulty":"easy","seed":3,"medium_optimal_probability":0.6,"alpha_beta":true}"#;
    let config: EngineConfig = serde_json::from_str(good).unwrap();
    let s = Session::new(config).unwrap();
    assert_eq!(s.difficulty(), Difficulty::Easy);

    let bad = r#"{"difficulty":"medium","seed":42,"medium_optimal_probability":1.5,"alpha_beta":true}"#;
    assert!(serde_json::from_str::<EngineConfig>(bad).is_err());

    // Fields are public, so an out-of-range value can still be set directly.
    let mut config: EngineConfig = serde_json::from_str(good).unwrap();
    config.medium_optimal_probability = 1.5;
    assert!(matches!(
        Session::new(config),
        Err(EngineError::InvalidConfig(_))
    ));
}

// =============================================================================
// Turn handling
// =============================================================================

#[test]
fn test_engine_can_open() {
    let mut s = session(Difficulty::Impossible, 0);
    s.restart_with(Mark::O);

    let opening = s.engine_move().unwrap();
    assert_eq!(s.game().board().mark_at(opening), Some(Mark::O));
    assert_eq!(s.game().to_move(), Mark::X);

    let outcome = s.play_human(if opening == 4 { 0 } else { 4 }).unwrap();
    assert!(outcome.engine_move.is_some());
}

#[test]
fn test_engine_move_after_game_over() {
    let mut s = session(Difficulty::Impossible, 0);
    let mut human = GameRng::new(8);
    play_out_randomly(&mut s, &mut human);

    assert!(matches!(
        s.engine_move(),
        Err(EngineError::InvariantViolation(_))
    ));
}

#[test]
fn test_try_play_human_ignores_bad_cells() {
    let mut s = session(Difficulty::Easy, 0);
    assert!(s.try_play_human(42).is_none());
    assert!(s.game().history().is_empty());

    let outcome = s.try_play_human(4).unwrap();
    let reply = outcome.engine_move.unwrap();
    assert!(s.try_play_human(reply).is_none());
    assert_eq!(s.game().history(), &[4, reply]);
}

#[test]
fn test_same_seed_same_games() {
    let mut a = session(Difficulty::Medium, 77);
    let mut b = session(Difficulty::Medium, 77);

    for index in [4, 0, 8, 2, 6] {
        let oa = a.try_play_human(index);
        let ob = b.try_play_human(index);
        assert_eq!(oa, ob);
    }
    assert_eq!(a.game(), b.game());
}
