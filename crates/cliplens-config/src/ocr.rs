use std::env;

use serde::{Deserialize, Serialize};

fn default_languages() -> Vec<String> {
    vec!["en-US".to_string()]
}

fn default_accurate() -> bool {
    true
}

fn default_language_correction() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    /// Recognition language hints, BCP 47 tags
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Accurate recognition level; false trades quality for speed
    #[serde(default = "default_accurate")]
    pub accurate: bool,
    #[serde(default = "default_language_correction")]
    pub language_correction: bool,
}

impl OcrConfig {
    pub fn new() -> Self {
        let languages = env::var("CLIPLENS_OCR_LANGUAGES")
            .ok()
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_languages);

        let accurate = env::var("CLIPLENS_OCR_FAST").is_err();

        Self {
            languages,
            accurate,
            language_correction: default_language_correction(),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            accurate: default_accurate(),
            language_correction: default_language_correction(),
        }
    }
}
