//! End-to-end: config, catalog draw, play, report, record.

use image_guesser::catalog::{Catalog, Category};
use image_guesser::core::{GameRng, MatchConfig, PlayerSlot};
use image_guesser::round::{GuessOutcome, RoundEngine};
use image_guesser::rules::{MatchReport, MatchResult, Outcome};
use image_guesser::store::{ScoreStore, SortKey, SortOrder, SortState};

fn start(config: &MatchConfig) -> RoundEngine {
    let mut rng = GameRng::new(config.seed().unwrap_or(42));
    let items = Catalog::builtin()
        .draw(config.category(), config.image_count(), &mut rng)
        .unwrap();
    RoundEngine::from_config(config, items).unwrap()
}

/// Guess right on the attempt number given per item (0 = first try,
/// 3 = never).
fn play(engine: &mut RoundEngine, misses: &[u8]) {
    for &miss in misses {
        for _ in 0..miss.min(3) {
            engine.submit_guess("xyzzy").unwrap();
            engine.notify_external_unlock();
        }
        if miss < 3 {
            let answer = engine.current_item().unwrap().answer.clone();
            engine.submit_guess(&answer).unwrap();
        }
    }
}

#[test]
fn test_single_player_flow() {
    let config = MatchConfig::builder("Alice")
        .category(Category::Animals)
        .seed(7)
        .build()
        .unwrap();
    let mut engine = start(&config);
    assert_eq!(engine.item_count(), 2);

    play(&mut engine, &[0, 1]);
    assert!(engine.is_finished());

    let report = MatchReport::from_engine(&engine, &config).unwrap();
    assert_eq!(report.result(), MatchResult::Solo(15));

    let mut store = ScoreStore::in_memory();
    report.record(&mut store).unwrap();

    let alice = store.get("Alice").unwrap();
    assert_eq!(alice.total_points, 15);
    assert_eq!(alice.games_played, 1);
    assert_eq!(alice.best_score, 15);
    assert_eq!((alice.wins, alice.losses, alice.ties), (0, 0, 0));
}

#[test]
fn test_two_player_flow_records_win_and_loss() {
    let config = MatchConfig::builder("P1")
        .opponent("P2")
        .category(Category::Random)
        .image_count(6)
        .seed(3)
        .build()
        .unwrap();
    let mut engine = start(&config);
    assert_eq!(engine.item_count(), 6);

    // P1: 10 + 5 + 5 = 20, P2: 10 + 10 + 10 = 30.
    play(&mut engine, &[0, 0, 1, 0, 1, 0]);

    let scores = engine.final_scores().unwrap();
    assert_eq!(scores[PlayerSlot::One], 20);
    assert_eq!(scores[PlayerSlot::Two], 30);

    let report = MatchReport::from_engine(&engine, &config).unwrap();
    assert_eq!(report.player(PlayerSlot::One).unwrap().outcome, Outcome::Loss);
    assert_eq!(report.player(PlayerSlot::Two).unwrap().outcome, Outcome::Win);
    assert_eq!(report.headline(), "P2 Wins!");

    let mut store = ScoreStore::in_memory();
    report.record(&mut store).unwrap();
    assert_eq!(store.get("P1").unwrap().losses, 1);
    assert_eq!(store.get("P2").unwrap().wins, 1);

    let mut sort = SortState::default();
    sort.select(SortKey::TotalPoints);
    sort.select(SortKey::TotalPoints);
    assert_eq!(sort.order, SortOrder::Descending);
    let rows = sort.apply(store.list_leaderboard());
    assert_eq!(rows[0].player_name, "P2");
}

#[test]
fn test_timed_flow_with_timeouts() {
    let config = MatchConfig::builder("Alice")
        .opponent("Bob")
        .category(Category::Logos)
        .timer_secs(15)
        .build()
        .unwrap();
    let mut engine = start(&config);

    let answer = engine.current_item().unwrap().answer.clone();
    match engine.notify_time_expired().unwrap() {
        GuessOutcome::Exhausted { answer: revealed, match_finished } => {
            assert_eq!(revealed, answer);
            assert!(!match_finished);
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    assert_eq!(engine.current_turn(), PlayerSlot::Two);
    play(&mut engine, &[0]);

    let report = MatchReport::from_engine(&engine, &config).unwrap();
    assert_eq!(report.result(), MatchResult::Winner(PlayerSlot::Two));
}

#[test]
fn test_exhausted_items_score_nothing() {
    let config = MatchConfig::builder("Alice").opponent("Bob").build().unwrap();
    let mut engine = start(&config);
    play(&mut engine, &[3, 3]);

    let report = MatchReport::from_engine(&engine, &config).unwrap();
    assert_eq!(report.result(), MatchResult::Tie);
    assert_eq!(report.headline(), "It's a Tie!");

    let mut store = ScoreStore::in_memory();
    report.record(&mut store).unwrap();
    assert_eq!(store.get("Alice").unwrap().ties, 1);
    assert_eq!(store.get("Bob").unwrap().ties, 1);
    assert_eq!(store.get("Bob").unwrap().best_score, 0);
}

#[test]
fn test_failed_record_can_be_retried_once() {
    let config = MatchConfig::builder("Alice").opponent("Bob").build().unwrap();
    let mut engine = start(&config);
    play(&mut engine, &[0, 1]);

    let mut store = ScoreStore::in_memory();
    store.record_outcome("Alice", 7, Outcome::None).unwrap();
    let saves = store.backend().saves();
    store.backend_mut().fail_after(saves);

    let err = MatchReport::from_engine(&engine, &config)
        .unwrap()
        .record(&mut store)
        .unwrap_err();
    assert!(matches!(err, image_guesser::Error::Storage(_)));
    assert_eq!(store.backend().records(), store.list_leaderboard());
    assert_eq!(store.get("Alice").unwrap().games_played, 1);
    assert!(store.get("Bob").is_none());

    store.backend_mut().set_fail_writes(false);
    MatchReport::from_engine(&engine, &config)
        .unwrap()
        .record(&mut store)
        .unwrap();
    assert_eq!(store.get("Alice").unwrap().games_played, 2);
    assert_eq!(store.get("Bob").unwrap().games_played, 1);
    assert_eq!(store.backend().saves(), saves + 1);
}
