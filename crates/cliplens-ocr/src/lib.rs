pub mod encode;
pub mod hotkey;
pub mod ocr;

pub use encode::encode_png;
pub use hotkey::{HotkeySubscription, parse_combo, poll_pressed};
pub use ocr::{OcrError, recognize};
