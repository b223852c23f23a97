mod common;

use cachegate::cache::structs::cache_value::CacheValue;
use cachegate::cache::traits::cache_backend::CacheBackend;
use cachegate::stampede::LOCAL_FALLBACK_TTL;
use cachegate::stampede::enums::hot_read_state::HotReadState;
use futures_util::future::join_all;
use std::time::Duration;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_hot_misses_elect_exactly_one_recomputer() {
    let (facade, _provider) = common::create_test_facade(common::PRIMARY_AND_BACKUP, true);
    let key = common::random_key();
    let handles: Vec<_> = (0..64)
        .map(|_| {
            let facade = facade.clone();
            let key = key.clone();
            tokio::spawn(async move { facade.read(&key, true, "").await.state })
        })
        .collect();
    let mut acquired = 0;
    for handle in handles {
        match handle.await.unwrap() {
            HotReadState::MissHotLockAcquired => acquired += 1,
            HotReadState::MissHotLockDenied => {}
            state => panic!("unexpected state {:?}", state),
        }
    }
    assert_eq!(acquired, 1);
}

#[tokio::test]
async fn test_recompute_then_everyone_hits() {
    let (facade, _provider) = common::create_test_facade("10.0.0.1:11211", false);
    let key = common::random_key();
    assert_eq!(facade.read(&key, true, "").await.state, HotReadState::MissHotLockAcquired);
    facade.set(&key, b"fresh".to_vec(), 60, "").await.unwrap();

    let outcomes = join_all((0..8).map(|_| facade.read(&key, true, ""))).await;
    assert!(outcomes.iter().all(|outcome| outcome.is_hit()));
    assert!(outcomes.iter().all(|outcome| outcome.value.as_deref() == Some(b"fresh".as_slice())));
}

#[tokio::test(start_paused = true)]
async fn test_local_fallback_serves_for_a_simulated_day() {
    let (facade, _provider) = common::create_test_facade("10.0.0.1:11211", false);
    facade.set("feed", b"v1".to_vec(), 60, "").await.unwrap();
    assert!(facade.read("feed", true, "").await.is_hit());

    // entry expires, somebody else is recomputing
    tokio::time::advance(Duration::from_secs(61)).await;
    facade
        .clients()
        .write
        .add("feed_lock", &CacheValue::new(b"1".to_vec(), 0))
        .await
        .unwrap();

    let outcome = facade.read("feed", true, "").await;
    assert_eq!(outcome.state, HotReadState::MissHotLockDenied);
    assert_eq!(outcome.value, Some(b"v1".to_vec()));

    tokio::time::advance(LOCAL_FALLBACK_TTL - Duration::from_secs(62)).await;
    assert_eq!(facade.get_hot("feed", true, "").await, Some(b"v1".to_vec()));

    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(facade.get_hot("feed", true, "").await, None);
}

#[tokio::test]
async fn test_non_hot_reads_never_lock() {
    let (facade, _provider) = common::create_test_facade("10.0.0.1:11211", false);
    assert_eq!(facade.read("cold", false, "").await.state, HotReadState::MissNotHot);
    assert_eq!(facade.clients().write.get("cold_lock").await.unwrap(), None);
}
