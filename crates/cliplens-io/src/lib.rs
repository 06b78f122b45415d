pub mod clipboard;

pub use clipboard::{ClipboardError, ImagePayload, read_image, write_text};
