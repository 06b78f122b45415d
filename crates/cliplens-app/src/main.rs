use std::sync::Arc;

use cliplens_app::controller::AppController;
use cliplens_app::state::AppState;
use cliplens_app::tray::Tray;
use cliplens_app::ui;
use cliplens_config::Config;
use cliplens_ocr::HotkeySubscription;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::new();
    let combo = config.hotkey.combo.clone();
    let state = Arc::new(AppState::new(config));

    // The hotkey registration and tray icon must be created on the main
    // thread; the watcher task only polls their process-wide receivers.
    let hotkey = match HotkeySubscription::register(&combo) {
        Ok(subscription) => {
            tracing::info!("global hotkey registered ({combo})");
            Some(subscription)
        }
        Err(e) => {
            tracing::warn!("global hotkey unavailable, tray menu only: {e:#}");
            None
        }
    };
    let tray = Tray::build(&combo)?;

    let controller = AppController::new(state.clone());
    let mut tasks = controller.spawn_tasks(hotkey.as_ref().map(|h| h.id()), tray.ids());

    // The Slint event loop owns the main thread until quit.
    let (app_to_ui_rx, ui_to_app_tx) = controller.ui_channels();
    let ui_result = ui::ui_loop(app_to_ui_rx, ui_to_app_tx, state.config.clone()).await;

    controller.shutdown();
    tasks.abort_all();
    while tasks.join_next().await.is_some() {}

    ui_result
}
