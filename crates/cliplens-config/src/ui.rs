use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "OCR Result".to_string()
}

fn default_width() -> u32 {
    600
}

fn default_height() -> u32 {
    400
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub window_title: String,
    #[serde(default = "default_width")]
    pub window_width: u32,
    #[serde(default = "default_height")]
    pub window_height: u32,
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_title: default_title(),
            window_width: default_width(),
            window_height: default_height(),
        }
    }
}
