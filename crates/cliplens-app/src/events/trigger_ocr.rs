use std::sync::Arc;

use cliplens_types::AppEvent;
use kanal::AsyncSender;

use crate::state::AppState;

/// One full OCR pass: clipboard image -> PNG -> recognition -> link
/// annotation -> display event.
///
/// At most one pass runs at a time; triggers arriving while one is in
/// flight are dropped. Every failure path produces exactly one notice and
/// leaves the system idle and re-armed.
pub async fn handle_ocr_trigger(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let ocr_config = {
        let config = state.config.read().await;
        config.ocr.clone()
    };

    run_ocr_pass(state, app_to_ui_tx, move || {
        let payload = cliplens_io::read_image()?;
        let png = cliplens_ocr::encode_png(
            &payload.rgba,
            payload.width as u32,
            payload.height as u32,
        )?;
        let text = cliplens_ocr::recognize(&png, &ocr_config)?;
        Ok(text)
    })
    .await
}

/// Drive one pass through the busy gate, running `pass` off the async
/// runtime and turning its outcome into the single UI event.
pub(crate) async fn run_ocr_pass<F>(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    pass: F,
) -> anyhow::Result<()>
where
    F: FnOnce() -> anyhow::Result<String> + Send + 'static,
{
    if !state.begin_ocr() {
        tracing::debug!("OCR already in flight, dropping trigger");
        return Ok(());
    }

    let result = tokio::task::spawn_blocking(pass).await;

    state.finish_ocr();

    match result {
        Ok(Ok(text)) if text.trim().is_empty() => {
            let _ = app_to_ui_tx
                .send(AppEvent::ShowNotice("No text found in image".to_string()))
                .await;
        }
        Ok(Ok(text)) => {
            let links: Vec<_> = cliplens_core::annotate(&text).collect();
            tracing::debug!("OCR produced {} chars, {} links", text.len(), links.len());
            let _ = app_to_ui_tx.send(AppEvent::ShowResult { text, links }).await;
        }
        Ok(Err(e)) => {
            tracing::warn!("OCR pass failed: {e:#}");
            let _ = app_to_ui_tx.send(AppEvent::ShowNotice(e.to_string())).await;
        }
        Err(e) => {
            tracing::error!("OCR task panicked: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::ShowNotice("OCR failed unexpectedly".to_string()))
                .await;
        }
    }

    Ok(())
}
