mod common;

use std::sync::Arc;

use cf_companion::services::reconcile::Reconciler;
use cf_companion::store::Store;

use common::fakes::{FakeJudge, Failure};
use common::fixtures::{solved_set, submission};

fn open_store(dir: &tempfile::TempDir) -> Arc<Store> {
    Arc::new(Store::open(dir.path().join("reconcile.sled").to_str().unwrap()).unwrap())
}

#[tokio::test]
async fn it_trusts_a_non_empty_cache_without_fetching() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let cached = solved_set("42", &["100A", "100B"]);
    store.put_solved_set(&cached).unwrap();

    let judge = Arc::new(FakeJudge {
        submissions: vec![submission(999, "Z", "OK")],
        ..Default::default()
    });
    let reconciler = Reconciler::new(store, judge.clone());

    let solved = reconciler.reconcile("42", "tourist").await;
    assert_eq!(solved.problem_ids, cached.problem_ids);
    assert_eq!(judge.history_calls(), 0);
}

#[tokio::test]
async fn it_rebuilds_from_accepted_history_when_cache_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let judge = Arc::new(FakeJudge {
        submissions: vec![
            submission(1, "A", "OK"),
            submission(1, "B", "WRONG_ANSWER"),
            submission(1, "A", "OK"),
        ],
        ..Default::default()
    });
    let reconciler = Reconciler::new(store.clone(), judge.clone());

    let solved = reconciler.reconcile("42", "tourist").await;
    let tokens: Vec<&str> = solved.problem_ids.iter().map(String::as_str).collect();
    assert_eq!(tokens, vec!["1A"]);
    assert_eq!(judge.history_calls(), 1);

    // Writing back is the caller's job.
    assert!(store.get_solved_set("42").unwrap().is_none());
}

#[tokio::test]
async fn it_refetches_when_the_stored_set_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    store.put_solved_set(&solved_set("42", &[])).unwrap();

    let judge = Arc::new(FakeJudge {
        submissions: vec![submission(7, "C", "OK")],
        ..Default::default()
    });
    let reconciler = Reconciler::new(store, judge.clone());

    let solved = reconciler.reconcile("42", "tourist").await;
    assert!(solved.contains("7C"));
    assert_eq!(judge.history_calls(), 1);
}

#[tokio::test]
async fn it_degrades_to_empty_on_history_failure() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let judge = Arc::new(FakeJudge {
        history_failure: Some(Failure::Network),
        ..Default::default()
    });
    let reconciler = Reconciler::new(store, judge.clone());

    let solved = reconciler.reconcile("42", "ghost").await;
    assert!(solved.is_empty());
    assert_eq!(solved.user_id, "42");
}

#[tokio::test]
async fn it_treats_an_unreadable_cache_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    store
        .solved_problems
        .insert(b"42".as_slice(), b"{broken".as_slice())
        .unwrap();

    let judge = Arc::new(FakeJudge {
        submissions: vec![submission(5, "E", "OK")],
        ..Default::default()
    });
    let reconciler = Reconciler::new(store, judge.clone());

    let solved = reconciler.reconcile("42", "tourist").await;
    assert!(solved.contains("5E"));
    assert_eq!(judge.history_calls(), 1);
}
