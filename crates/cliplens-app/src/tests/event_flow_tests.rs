use std::sync::Arc;
use std::time::Duration;

use cliplens_config::Config;
use cliplens_types::AppEvent;
use tokio::time::timeout;

use crate::events::event_loop;
use crate::state::AppState;

#[tokio::test]
async fn test_quit_is_forwarded_to_ui() {
    let state = Arc::new(AppState::new(Config::default()));
    let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async::<AppEvent>(8);
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async::<AppEvent>(8);

    let handle = tokio::spawn(event_loop(state, ui_to_app_rx, app_to_ui_tx));

    ui_to_app_tx.send(AppEvent::Quit).await.unwrap();

    let forwarded = timeout(Duration::from_secs(2), app_to_ui_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(forwarded, AppEvent::Quit));

    // Quit terminates the loop cleanly
    let result = timeout(Duration::from_secs(2), handle).await.unwrap().unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_ui_bound_events_are_skipped() {
    let state = Arc::new(AppState::new(Config::default()));
    let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async::<AppEvent>(8);
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async::<AppEvent>(8);

    let handle = tokio::spawn(event_loop(state, ui_to_app_rx, app_to_ui_tx));

    // A stray UI-bound event must not be echoed back or kill the loop
    ui_to_app_tx
        .send(AppEvent::ShowResult {
            text: "stray".to_string(),
            links: vec![],
        })
        .await
        .unwrap();
    ui_to_app_tx.send(AppEvent::Quit).await.unwrap();

    let first = timeout(Duration::from_secs(2), app_to_ui_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(first, AppEvent::Quit));

    let result = timeout(Duration::from_secs(2), handle).await.unwrap().unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_trigger_from_sync_context() {
    // Hotkey callbacks run in a sync context and hand off via tokio::spawn
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    let sync_callback = move || {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::TriggerOcr).await.expect("send failed");
        });
    };
    sync_callback();

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout waiting for trigger")
        .unwrap();
    assert!(matches!(event, AppEvent::TriggerOcr));
}

#[tokio::test]
async fn test_try_send_from_blocking_watcher() {
    // The watcher thread uses try_send; make sure it reaches the async side
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);

    tokio::task::spawn_blocking(move || {
        tx.try_send(AppEvent::TriggerOcr).unwrap();
    })
    .await
    .unwrap();

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(event, AppEvent::TriggerOcr));
}
