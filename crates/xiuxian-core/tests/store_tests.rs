//! Integration tests for the progression store with the autoplay sequencer
//! running, exercising the full command/observe surface end to end with
//! short configured tick intervals.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tokio::sync::broadcast::Receiver;
use tokio::time::timeout;
use xiuxian_core::{RealmStore, SimulatorConfig};
use xiuxian_types::{InteractionMode, NodeId, ProgressBroadcast, Realm};

/// A config with fast autoplay ticks so runs finish in milliseconds.
fn fast_config(realm: Realm, interval_ms: u64) -> SimulatorConfig {
    let mut config = SimulatorConfig::default();
    config.simulator.starting_realm = realm;
    config.autoplay.start_delay_ms = 1;
    for r in Realm::ALL {
        config.autoplay.interval_overrides.insert(r, interval_ms);
    }
    config
}

/// Receive the next broadcast, failing the test after five seconds.
async fn next_update(rx: &mut Receiver<ProgressBroadcast>) -> ProgressBroadcast {
    let received = timeout(Duration::from_secs(5), rx.recv()).await;
    assert!(received.is_ok(), "timed out waiting for a progress broadcast");
    received.unwrap().unwrap()
}

/// Drain broadcasts until animation stops, returning the activated node
/// ids in the order they were announced plus the final update.
async fn run_to_completion(
    rx: &mut Receiver<ProgressBroadcast>,
) -> (Vec<NodeId>, ProgressBroadcast) {
    let mut activated = Vec::new();
    loop {
        let update = next_update(rx).await;
        if let Some(id) = update.activated.clone() {
            activated.push(id);
        }
        if !update.is_animating {
            return (activated, update);
        }
    }
}

#[tokio::test]
async fn autoplay_activates_every_node_in_declared_order() {
    let store = Arc::new(RealmStore::new(&fast_config(Realm::LianQi, 5)));
    let mut rx = store.subscribe();

    store.start_autoplay();
    assert!(store.is_animating());
    assert_eq!(store.mode(), InteractionMode::Auto);

    let (activated, last) = run_to_completion(&mut rx).await;

    let declared: Vec<NodeId> = store.snapshot().nodes.iter().map(|n| n.id.clone()).collect();
    assert_eq!(activated, declared);
    assert_eq!(last.current_step, 5);
    assert_eq!(last.total_steps, 5);
    assert_eq!(last.progress_percent, Decimal::ONE_HUNDRED);

    let snap = store.snapshot();
    assert!(snap.is_complete());
    assert!(!snap.is_animating);
    assert!(snap.paths.iter().all(|p| p.progress == Decimal::ONE));
}

#[tokio::test]
async fn autoplay_completes_a_sequential_realm() {
    let store = Arc::new(RealmStore::new(&fast_config(Realm::ZhuJi, 5)));
    let mut rx = store.subscribe();

    store.start_autoplay();
    let (activated, last) = run_to_completion(&mut rx).await;

    assert_eq!(activated.len(), 8);
    assert_eq!(last.progress_percent, Decimal::ONE_HUNDRED);
    // Declaration order satisfies the realm's sequential policy.
    let declared: Vec<NodeId> = store.snapshot().nodes.iter().map(|n| n.id.clone()).collect();
    assert_eq!(activated, declared);
}

#[tokio::test]
async fn stop_autoplay_prevents_any_further_activation() {
    // A slow tick leaves a wide window to stop between activations.
    let store = Arc::new(RealmStore::new(&fast_config(Realm::LianQi, 100)));
    let mut rx = store.subscribe();

    store.start_autoplay();

    // Wait for the second activation, then stop mid-sequence.
    let mut seen = 0;
    while seen < 2 {
        if next_update(&mut rx).await.activated.is_some() {
            seen += 1;
        }
    }
    store.stop_autoplay();

    // Give the cancelled ticks ample time to have fired if they were going to.
    tokio::time::sleep(Duration::from_millis(350)).await;

    let snap = store.snapshot();
    assert_eq!(snap.current_step, 2);
    assert!(!snap.is_animating);
    // The stop broadcast is the only remaining message; no activation follows.
    while let Ok(update) = rx.try_recv() {
        assert!(update.activated.is_none());
    }
}

#[tokio::test]
async fn switch_realm_cancels_autoplay() {
    let store = Arc::new(RealmStore::new(&fast_config(Realm::LianQi, 50)));
    let mut rx = store.subscribe();

    store.start_autoplay();
    // Let the run get underway.
    let mut seen = 0;
    while seen < 1 {
        if next_update(&mut rx).await.activated.is_some() {
            seen += 1;
        }
    }

    store.switch_realm(Realm::ZhuJi);
    tokio::time::sleep(Duration::from_millis(200)).await;

    let snap = store.snapshot();
    assert_eq!(snap.realm, Realm::ZhuJi);
    assert_eq!(snap.current_step, 0);
    assert!(!snap.is_animating);
    // No stale tick activated anything in the new realm.
    while let Ok(update) = rx.try_recv() {
        assert!(!(update.realm == Realm::ZhuJi && update.activated.is_some()));
    }
}

#[tokio::test]
async fn manual_activation_interleaves_with_autoplay() {
    let store = Arc::new(RealmStore::new(&fast_config(Realm::JinDan, 5)));
    let mut rx = store.subscribe();

    store.start_autoplay();
    // A free-order manual click lands while the sequencer runs; the
    // sequencer skips the already-active node when it reaches it.
    store.activate_node(&NodeId::from("outer_6"));

    let (_, last) = run_to_completion(&mut rx).await;
    assert_eq!(last.current_step, 21);
    assert_eq!(last.progress_percent, Decimal::ONE_HUNDRED);

    let snap = store.snapshot();
    assert!(snap.is_complete());
    assert_eq!(snap.active_nodes.len(), 21);
    // No duplicate activations.
    let mut ids: Vec<&str> = snap.active_nodes.iter().map(NodeId::as_str).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 21);
}

#[tokio::test]
async fn starting_autoplay_twice_runs_one_sequencer() {
    let store = Arc::new(RealmStore::new(&fast_config(Realm::LianQi, 5)));
    let mut rx = store.subscribe();

    store.start_autoplay();
    store.start_autoplay();

    let (activated, _) = run_to_completion(&mut rx).await;
    // One activation per node: a second sequencer would have doubled the
    // broadcasts or tripped on already-active nodes.
    assert_eq!(activated.len(), 5);
}

#[tokio::test]
async fn reset_during_autoplay_stops_and_clears() {
    let store = Arc::new(RealmStore::new(&fast_config(Realm::LianQi, 50)));
    let mut rx = store.subscribe();

    store.start_autoplay();
    let mut seen = 0;
    while seen < 1 {
        if next_update(&mut rx).await.activated.is_some() {
            seen += 1;
        }
    }

    store.reset_realm();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let snap = store.snapshot();
    assert_eq!(snap.realm, Realm::LianQi);
    assert_eq!(snap.current_step, 0);
    assert_eq!(snap.progress_percent, Decimal::ZERO);
    assert!(!snap.is_animating);
    // Autoplay had set auto mode; reset preserves it.
    assert_eq!(snap.mode, InteractionMode::Auto);
}

#[tokio::test]
async fn setting_mode_stops_autoplay() {
    let store = Arc::new(RealmStore::new(&fast_config(Realm::LianQi, 50)));
    store.start_autoplay();
    assert!(store.is_animating());

    store.set_mode(InteractionMode::Manual);
    tokio::time::sleep(Duration::from_millis(150)).await;

    let snap = store.snapshot();
    assert!(!snap.is_animating);
    assert_eq!(snap.mode, InteractionMode::Manual);
    // The sequencer is gone: nothing advances anymore.
    let step = snap.current_step;
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(store.snapshot().current_step, step);
}

#[tokio::test]
async fn restarting_autoplay_after_completion_is_harmless() {
    let store = Arc::new(RealmStore::new(&fast_config(Realm::LianQi, 5)));
    let mut rx = store.subscribe();

    store.start_autoplay();
    let _ = run_to_completion(&mut rx).await;

    // Starting again on a complete realm finishes immediately with no
    // further activations.
    store.start_autoplay();
    let (activated, last) = run_to_completion(&mut rx).await;
    assert!(activated.is_empty());
    assert_eq!(last.current_step, 5);
    assert!(!store.is_animating());
}
