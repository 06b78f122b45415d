use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use cliplens_config::Config;
use cliplens_io::ClipboardError;
use cliplens_types::AppEvent;
use tokio::time::timeout;

use crate::events::trigger_ocr::run_ocr_pass;
use crate::state::AppState;

#[tokio::test]
async fn test_no_image_notices_without_recognition() {
    let state = Arc::new(AppState::new(Config::default()));
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async::<AppEvent>(8);

    let recognized = Arc::new(AtomicBool::new(false));
    let flag = recognized.clone();
    run_ocr_pass(state.clone(), &app_to_ui_tx, move || {
        // Mirrors the real pass: the clipboard read fails before any
        // recognition work happens.
        let read_result: Result<String, ClipboardError> = Err(ClipboardError::NoImage);
        let text = read_result?;
        flag.store(true, Ordering::SeqCst);
        Ok(text)
    })
    .await
    .unwrap();

    let event = timeout(Duration::from_secs(2), app_to_ui_rx.recv())
        .await
        .unwrap()
        .unwrap();
    match event {
        AppEvent::ShowNotice(message) => assert_eq!(message, "Content is not an image"),
        other => panic!("expected notice, got {other:?}"),
    }
    assert!(!recognized.load(Ordering::SeqCst));
    // The gate is re-armed after a failed pass
    assert!(!state.ocr_busy());
}

#[tokio::test]
async fn test_recognized_text_arrives_annotated() {
    let state = Arc::new(AppState::new(Config::default()));
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async::<AppEvent>(8);

    run_ocr_pass(state, &app_to_ui_tx, || {
        Ok("visit example.com today".to_string())
    })
    .await
    .unwrap();

    let event = timeout(Duration::from_secs(2), app_to_ui_rx.recv())
        .await
        .unwrap()
        .unwrap();
    match event {
        AppEvent::ShowResult { text, links } => {
            assert_eq!(text, "visit example.com today");
            assert_eq!(links.len(), 1);
            assert_eq!(links[0].url, "https://example.com");
            assert_eq!(&text[links[0].start..links[0].end], "example.com");
        }
        other => panic!("expected result, got {other:?}"),
    }
}

#[tokio::test]
async fn test_blank_text_shows_notice() {
    let state = Arc::new(AppState::new(Config::default()));
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async::<AppEvent>(8);

    run_ocr_pass(state, &app_to_ui_tx, || Ok("  \n\t ".to_string()))
        .await
        .unwrap();

    let event = timeout(Duration::from_secs(2), app_to_ui_rx.recv())
        .await
        .unwrap()
        .unwrap();
    match event {
        AppEvent::ShowNotice(message) => assert_eq!(message, "No text found in image"),
        other => panic!("expected notice, got {other:?}"),
    }
}

#[tokio::test]
async fn test_pass_dropped_while_busy() {
    let state = Arc::new(AppState::new(Config::default()));
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async::<AppEvent>(8);

    assert!(state.begin_ocr());

    let ran = Arc::new(AtomicBool::new(false));
    let flag = ran.clone();
    run_ocr_pass(state.clone(), &app_to_ui_tx, move || {
        flag.store(true, Ordering::SeqCst);
        Ok("ignored".to_string())
    })
    .await
    .unwrap();

    assert!(!ran.load(Ordering::SeqCst));
    // No notice and no result for a dropped trigger
    assert!(matches!(app_to_ui_rx.try_recv(), Ok(None)));
    // The in-flight pass still owns the gate
    assert!(state.ocr_busy());
}
