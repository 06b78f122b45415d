use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Hotkey or tray menu asked for an OCR pass over the clipboard
    TriggerOcr,
    /// Recognized text plus the links detected inside it
    ShowResult {
        text: String,
        links: Vec<LinkSpan>,
    },
    /// Short user-visible message shown in place of a result
    ShowNotice(String),
    /// Replace the clipboard with the displayed text
    CopyAll(String),
    /// Open a normalized URL in the system default handler
    OpenLink(String),
    Quit,
}

/// A byte range of recognized text identified as a URL.
///
/// Spans produced for one text are sorted by `start` and never overlap.
/// `url` is the normalized absolute form (scheme always present).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSpan {
    pub start: usize,
    pub end: usize,
    pub url: String,
}
