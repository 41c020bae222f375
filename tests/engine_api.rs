//! End-to-end games through the public engine API

use std::sync::Arc;
use std::thread;
use word_tower::config::EngineConfig;
use word_tower::engine::TowerEngine;
use word_tower::error::{EngineError, GameError};
use word_tower::lexicon::Lexicon;

fn engine() -> TowerEngine {
    let lexicon = Lexicon::from_words([
        "art", "rat", "tar", "tart", "rats", "star", "start", "stare", "tears", "taster", "cat",
        "quiz", "quizs",
    ])
    .unwrap();
    TowerEngine::new(
        Arc::new(lexicon),
        EngineConfig {
            seed: Some(2024),
            ..EngineConfig::default()
        },
    )
}

#[test]
fn full_game_from_start_to_score() {
    let engine = engine();
    let id = engine.create_session(Some("art")).unwrap();

    let added = engine.add_word(&id, "rats").unwrap();
    assert!(added.success);
    assert_eq!(added.added_letter, Some('s'));
    assert_eq!(added.message, "Added letter: S");

    assert!(engine.add_word(&id, "stare").unwrap().success);
    assert!(engine.add_word(&id, "taster").unwrap().success);

    let state = engine.get_state(&id).unwrap();
    assert_eq!(state.height, 4);
    assert_eq!(state.current_word.text(), "taster");

    let summary = engine.end(&id).unwrap();
    assert_eq!(summary.height, 4);
    assert_eq!(summary.starting_word.text(), "art");
    // 3×1 + 4×2 + 5×3 + 6×4
    assert_eq!(summary.score.base_score, 50);
    assert_eq!(summary.score.breakdown.len(), 4);
    assert!(summary.score.total_score >= summary.score.base_score);
}

#[test]
fn rejections_leave_the_tower_untouched() {
    let engine = engine();
    let id = engine.create_session(Some("art")).unwrap();

    let cases = [
        ("zzzz", "not a valid word"),
        ("art", "already been used"),
        ("cat", "letters long"),
        ("start", "letters long"),
    ];
    for (word, reason) in cases {
        let response = engine.add_word(&id, word).unwrap();
        assert!(!response.success, "{word} should be rejected");
        assert!(
            response.message.contains(reason),
            "{word}: '{}' should mention '{reason}'",
            response.message
        );
    }
    assert_eq!(engine.get_state(&id).unwrap().height, 1);

    let undo = engine.undo(&id).unwrap();
    assert!(!undo.success);
    assert_eq!(undo.error, Some(GameError::CannotUndoStart));
}

#[test]
fn hints_until_the_top() {
    let engine = engine();
    let id = engine.create_session(Some("quiz")).unwrap();

    let hint = engine.hint(&id, "length").unwrap();
    assert!(hint.success);
    assert_eq!(hint.candidate_count, Some(1));
    assert_eq!(
        hint.hint_text.as_deref(),
        Some("The next word should be 5 letters long")
    );

    assert!(engine.add_word(&id, "quizs").unwrap().success);
    let top = engine.hint(&id, "smart").unwrap();
    assert!(top.no_moves_available);
    assert!(top.message.is_some());

    let summary = engine.end(&id).unwrap();
    assert_eq!(summary.hints_used, 2);
    // q and z are uncommon in both words
    assert_eq!(summary.score.letter_bonus, 20);
}

#[test]
fn finished_tower_reports_no_moves_after_end() {
    let engine = engine();
    let id = engine.create_session(Some("quiz")).unwrap();
    assert!(engine.add_word(&id, "quizs").unwrap().success);
    engine.end(&id).unwrap();

    let hint = engine.hint(&id, "smart").unwrap();
    assert!(hint.no_moves_available);
    assert_eq!(hint.hint_text, None);
    assert_eq!(hint.candidate_count, Some(0));
    assert_eq!(engine.get_state(&id).unwrap().height, 2);
}

#[test]
fn ended_games_reject_play_until_reset() {
    let engine = engine();
    let id = engine.create_session(Some("art")).unwrap();
    assert!(engine.add_word(&id, "tart").unwrap().success);
    engine.end(&id).unwrap();

    let response = engine.add_word(&id, "start").unwrap();
    assert_eq!(response.error, Some(GameError::GameEnded));
    assert!(matches!(
        engine.end(&id),
        Err(EngineError::Game(GameError::GameEnded))
    ));

    engine.reset(&id).unwrap();
    let state = engine.get_state(&id).unwrap();
    assert!(state.is_active);
    assert_eq!(state.height, 1);
    assert_eq!(state.hints_used, 0);
}

#[test]
fn closed_sessions_are_gone() {
    let engine = engine();
    let id = engine.create_session(None).unwrap();
    assert!(engine.close_session(&id));
    assert!(matches!(
        engine.get_state(&id),
        Err(EngineError::SessionNotFound(_))
    ));
}

#[test]
fn sessions_are_independent_across_threads() {
    let engine = Arc::new(engine());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let id = engine.create_session(Some("art")).unwrap();
                assert!(engine.add_word(&id, "tart").unwrap().success);
                if i % 2 == 0 {
                    assert!(engine.add_word(&id, "start").unwrap().success);
                }
                engine.get_state(&id).unwrap().height
            })
        })
        .collect();

    let heights: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(heights.iter().filter(|&&h| h == 3).count(), 4);
    assert_eq!(heights.iter().filter(|&&h| h == 2).count(), 4);
    assert_eq!(engine.sessions().len(), 8);
}
