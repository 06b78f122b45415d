use std::env;

use serde::{Deserialize, Serialize};

fn default_combo() -> String {
    if cfg!(target_os = "macos") {
        "cmd+shift+o".to_string()
    } else {
        "ctrl+shift+o".to_string()
    }
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HotkeyConfig {
    /// Global key chord, e.g. "cmd+shift+o"
    #[serde(default = "default_combo")]
    pub combo: String,
}

impl HotkeyConfig {
    pub fn new() -> Self {
        let combo = env::var("CLIPLENS_HOTKEY").unwrap_or_else(|_| default_combo());
        Self { combo }
    }
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            combo: default_combo(),
        }
    }
}
