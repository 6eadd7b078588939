use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio_test::{assert_pending, assert_ready_eq, task};

use trakt_cache::models::{Movie, Show, TraktId, WatchlistItem, WatchlistMovie, WatchlistShow};
use trakt_cache::{ChangeEvent, WatchlistStore};

fn show(id: i64) -> WatchlistShow {
    WatchlistShow::new(Show::new(id, format!("Show {id}")), Utc::now())
}

fn movie(id: i64) -> WatchlistMovie {
    WatchlistMovie::new(Movie::new(id, format!("Movie {id}")), Utc::now())
}

fn sorted_show_ids(items: &[WatchlistShow]) -> Vec<i64> {
    let mut ids: Vec<i64> = items.iter().map(|s| s.show.id.value()).collect();
    ids.sort();
    ids
}

#[tokio::test]
async fn test_end_to_end_watchlist_flow() {
    let store = WatchlistStore::new();
    let mut sub = store.subscribe();

    store.set_shows(vec![show(1), show(2)], false).await;
    assert_eq!(sorted_show_ids(&store.get_shows().await), vec![1, 2]);
    assert_eq!(sub.try_next(), None);

    store.add_shows(vec![show(3)], true).await;
    assert_eq!(store.get_all().await.len(), 3);
    assert!(matches!(sub.try_next(), Some(ChangeEvent::Updated(_))));
    assert_eq!(sub.try_next(), None);

    store.remove_shows(&HashSet::from([TraktId(1)]), false).await;
    assert_eq!(sorted_show_ids(&store.get_shows().await), vec![2, 3]);
    assert_eq!(sub.try_next(), None);

    store.clear().await;
    assert!(store.get_all().await.is_empty());
    assert!(!store.is_shows_loaded().await);
    assert_eq!(sub.try_next(), Some(ChangeEvent::Invalidated));
}

#[tokio::test]
async fn test_loaded_but_empty_differs_from_unloaded() {
    let store = WatchlistStore::new();
    assert!(!store.is_movies_loaded().await);
    assert!(store.get_movies().await.is_empty());

    store.set_movies(Vec::new(), false).await;
    assert!(store.is_movies_loaded().await);
    assert!(store.get_movies().await.is_empty());
    assert!(!store.contains_movie(TraktId(1)).await);
}

#[tokio::test]
async fn test_clear_always_notifies_even_without_prior_emissions() {
    let store = WatchlistStore::new();
    let mut sub = store.subscribe();

    store.set_movies(vec![movie(1)], false).await;
    store.clear().await;
    assert_eq!(sub.try_next(), Some(ChangeEvent::Invalidated));

    // A second clear on an already unloaded store still emits
    let mut next = task::spawn(sub.next());
    assert_pending!(next.poll());
    store.clear().await;
    assert!(next.is_woken());
    assert_ready_eq!(next.poll(), Some(ChangeEvent::Invalidated));
}

#[tokio::test]
async fn test_subscriber_replay_semantics() {
    let store = WatchlistStore::new();

    let mut early = store.subscribe();
    assert_eq!(early.try_next(), None);

    store.add_movies(vec![movie(1)], true).await;
    let first = early.try_next();
    assert!(first.is_some());

    let mut late = store.subscribe();
    assert_eq!(late.try_next(), first);
    assert_eq!(late.try_next(), None);

    store.remove_movies(&HashSet::from([TraktId(1)]), true).await;
    let second = late.try_next();
    assert!(matches!(second, Some(ChangeEvent::Updated(_))));
    assert_eq!(early.try_next(), second);
}

#[tokio::test]
async fn test_get_all_merges_movies_then_shows() {
    let store = WatchlistStore::new();
    store.set_shows(vec![show(7)], false).await;
    store.set_movies(vec![movie(7), movie(8)], false).await;

    let all = store.get_all().await;
    assert_eq!(all.len(), 3);
    assert!(matches!(all[0], WatchlistItem::Movie(_)));
    assert!(matches!(all[1], WatchlistItem::Movie(_)));
    assert!(matches!(all[2], WatchlistItem::Show(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_replacements_never_tear() {
    let store = Arc::new(WatchlistStore::new());
    let mut writers = Vec::new();

    for i in 0..16i64 {
        let store = store.clone();
        writers.push(tokio::spawn(async move {
            for round in 0..20i64 {
                let base = (i * 100 + round) * 2;
                store.set_shows(vec![show(base), show(base + 1)], round % 2 == 0).await;
                tokio::task::yield_now().await;
            }
        }));
    }

    let reader = {
        let store = store.clone();
        tokio::spawn(async move {
            for _ in 0..200 {
                let ids = sorted_show_ids(&store.get_shows().await);
                if !ids.is_empty() {
                    assert_eq!(ids.len(), 2);
                    assert_eq!(ids[0] % 2, 0);
                    assert_eq!(ids[1], ids[0] + 1);
                }
                tokio::task::yield_now().await;
            }
        })
    };

    for writer in writers {
        writer.await.unwrap();
    }
    reader.await.unwrap();

    let ids = sorted_show_ids(&store.get_shows().await);
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[1], ids[0] + 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_are_not_lost() {
    let store = Arc::new(WatchlistStore::new());
    let mut tasks = Vec::new();

    for i in 0..32i64 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            store.add_movies(vec![movie(i)], false).await;
            store.add_shows(vec![show(i)], true).await;
        }));
    }

    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(store.len().await, (32, 32));
    for i in 0..32 {
        assert!(store.contains_movie(TraktId(i)).await);
        assert!(store.contains_show(TraktId(i)).await);
    }
}

#[tokio::test]
async fn test_stores_are_independent() {
    let first = WatchlistStore::new();
    let second = WatchlistStore::new();
    let mut second_sub = second.subscribe();

    first.set_movies(vec![movie(1)], true).await;
    first.clear().await;

    assert!(!second.is_movies_loaded().await);
    assert_eq!(second_sub.try_next(), None);
}

#[tokio::test]
async fn test_random_operations_match_reference_map() {
    let store = WatchlistStore::new();
    let mut sub = store.subscribe();
    let mut model: Option<HashMap<i64, String>> = None;
    let mut rng = StdRng::seed_from_u64(42);

    for step in 0..400 {
        let notify = rng.gen_bool(0.5);
        let batch: Vec<i64> = (0..rng.gen_range(0..5)).map(|_| rng.gen_range(0..12)).collect();
        let title = format!("Show {step}");
        let items = || {
            batch
                .iter()
                .map(|&id| WatchlistShow::new(Show::new(id, title.clone()), Utc::now()))
                .collect::<Vec<_>>()
        };

        let expected = match rng.gen_range(0..8) {
            0..=1 => {
                store.set_shows(items(), notify).await;
                model = Some(batch.iter().map(|&id| (id, title.clone())).collect());
                notify.then_some(true)
            }
            2..=4 => {
                store.add_shows(items(), notify).await;
                let map = model.get_or_insert_with(HashMap::new);
                map.extend(batch.iter().map(|&id| (id, title.clone())));
                notify.then_some(true)
            }
            5..=6 => {
                let ids: HashSet<TraktId> = batch.iter().copied().map(TraktId).collect();
                store.remove_shows(&ids, notify).await;
                if let Some(map) = model.as_mut() {
                    for id in &batch {
                        map.remove(id);
                    }
                }
                notify.then_some(true)
            }
            _ => {
                store.clear().await;
                model = None;
                Some(false)
            }
        };

        match (expected, sub.try_next()) {
            (None, None) => {}
            (Some(true), Some(ChangeEvent::Updated(_))) => {}
            (Some(false), Some(ChangeEvent::Invalidated)) => {}
            (expected, got) => panic!("step {step}: expected {expected:?}, got {got:?}"),
        }

        assert_eq!(store.is_shows_loaded().await, model.is_some(), "step {step}");

        let mut cached: Vec<(i64, String)> = store
            .get_shows()
            .await
            .into_iter()
            .map(|s| (s.show.id.value(), s.show.title))
            .collect();
        cached.sort();
        let mut modelled: Vec<(i64, String)> = model
            .iter()
            .flatten()
            .map(|(id, title)| (*id, title.clone()))
            .collect();
        modelled.sort();
        assert_eq!(cached, modelled, "step {step}");
    }
}
