use std::sync::Arc;

use cliplens_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

pub mod trigger_ocr;

use trigger_ocr::handle_ocr_trigger;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("event loop started, waiting for triggers");
    loop {
        let event = ui_to_app_rx.recv().await?;
        if !handle_event(state.clone(), &app_to_ui_tx, event).await? {
            return Ok(());
        }
    }
}

/// Returns false once the loop should stop.
async fn handle_event(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::TriggerOcr => {
            handle_ocr_trigger(state, app_to_ui_tx).await?;
        }
        AppEvent::CopyAll(text) => {
            let result = tokio::task::spawn_blocking(move || cliplens_io::write_text(&text)).await;
            match result {
                Ok(Ok(())) => tracing::debug!("copied displayed text to clipboard"),
                Ok(Err(e)) => tracing::warn!("clipboard write failed: {e}"),
                Err(e) => tracing::error!("clipboard task panicked: {e}"),
            }
        }
        AppEvent::OpenLink(url) => {
            tracing::info!("opening {url}");
            let result = tokio::task::spawn_blocking(move || open::that(&url)).await;
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::warn!("failed to open link: {e}"),
                Err(e) => tracing::error!("open task panicked: {e}"),
            }
        }
        AppEvent::Quit => {
            tracing::info!("quit requested");
            let _ = app_to_ui_tx.send(AppEvent::Quit).await;
            return Ok(false);
        }
        // ShowResult and ShowNotice are UI-bound, nothing to do here
        _ => {}
    }

    Ok(true)
}
