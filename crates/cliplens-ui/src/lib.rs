use std::sync::Arc;

use cliplens_config::Config;
use cliplens_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use slint::ComponentHandle;
use tokio::sync::RwLock;

pub mod events;

slint::include_modules!();

/// Run the result window event loop.
///
/// The window is created up front but stays hidden until the first result or
/// notice arrives; later events update it in place rather than opening a
/// second surface. Returns once [`AppEvent::Quit`] has been delivered.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let window = ResultsWindow::new()?;

    {
        let config = config.read().await;
        window.set_window_title(config.ui.window_title.as_str().into());
        window.window().set_size(slint::WindowSize::Logical(slint::LogicalSize::new(
            config.ui.window_width as f32,
            config.ui.window_height as f32,
        )));
    }

    // Copy-all sends the currently displayed text back to the app, which
    // owns all clipboard access.
    {
        let tx = ui_to_app_tx.clone();
        let window_weak = window.as_weak();
        window.on_copy_all(move || {
            if let Some(w) = window_weak.upgrade() {
                let text = w.get_result_text().to_string();
                let tx = tx.clone();
                slint::spawn_local(async move {
                    let _ = tx.send(AppEvent::CopyAll(text)).await;
                })
                .unwrap();
            }
        });
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_open_link(move |url| {
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::OpenLink(url.to_string())).await;
            })
            .unwrap();
        });
    }

    // Closing dismisses the window; the app keeps running in the tray.
    {
        let window_weak = window.as_weak();
        window.on_close_requested(move || {
            if let Some(w) = window_weak.upgrade() {
                w.hide().ok();
            }
        });
    }

    // Deliver app events to the window
    {
        let window_weak = window.as_weak();
        slint::spawn_local(async move {
            while let Ok(event) = app_to_ui_rx.recv().await {
                if !events::handle_events(event, &window_weak) {
                    break;
                }
            }
        })
        .unwrap();
    }

    slint::run_event_loop()?;
    Ok(())
}
