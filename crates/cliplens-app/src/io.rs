use std::sync::Arc;
use std::time::Duration;

use cliplens_types::AppEvent;
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;
use crate::tray::{self, TrayAction, TrayMenuIds};

/// Poll the process-wide hotkey and tray menu receivers and turn presses
/// into app events. The hotkey registration and the tray icon themselves
/// live on the main thread; only their event channels are touched here.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
    hotkey_id: Option<u32>,
    tray_ids: TrayMenuIds,
) -> anyhow::Result<()> {
    let poll_interval = {
        let config = state.config.read().await;
        Duration::from_millis(config.poll_ms)
    };

    tokio::task::spawn_blocking(move || {
        if hotkey_id.is_some() {
            tracing::info!("watcher started, hotkey armed");
        } else {
            tracing::info!("watcher started, tray menu only");
        }

        loop {
            if cancel.is_cancelled() {
                break;
            }

            if let Some(id) = hotkey_id
                && cliplens_ocr::poll_pressed(id)
            {
                tracing::info!("hotkey pressed, requesting OCR");
                if event_tx.try_send(AppEvent::TriggerOcr).is_err() {
                    tracing::error!("event channel closed");
                    break;
                }
            }

            match tray::poll(&tray_ids) {
                Some(TrayAction::Recognize) => {
                    tracing::info!("tray menu requested OCR");
                    if event_tx.try_send(AppEvent::TriggerOcr).is_err() {
                        tracing::error!("event channel closed");
                        break;
                    }
                }
                Some(TrayAction::Quit) => {
                    let _ = event_tx.try_send(AppEvent::Quit);
                    break;
                }
                None => {}
            }

            std::thread::sleep(poll_interval);
        }

        tracing::info!("watcher stopping");
    })
    .await?;

    Ok(())
}
