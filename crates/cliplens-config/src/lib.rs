use std::env;

use serde::{Deserialize, Serialize};

use self::hotkey::HotkeyConfig;
use self::ocr::OcrConfig;
use self::ui::UiConfig;

pub mod hotkey;
pub mod ocr;
pub mod ui;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub hotkey: HotkeyConfig,
    pub ocr: OcrConfig,
    pub ui: UiConfig,

    /// Watcher poll interval for hotkey and tray menu events
    pub poll_ms: u64,
}

impl Config {
    pub fn new() -> Self {
        let poll_ms = env::var("CLIPLENS_POLL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        Config {
            hotkey: HotkeyConfig::new(),
            ocr: OcrConfig::new(),
            ui: UiConfig::new(),
            poll_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
