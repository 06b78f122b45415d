use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The clipboard holds no recognizable image payload. Surfaced to the
    /// user verbatim, so the message is the user-facing text.
    #[error("Content is not an image")]
    NoImage,
    #[error("clipboard unavailable: {0}")]
    Unavailable(arboard::Error),
}

/// Decoded clipboard bitmap, straight from the platform clipboard.
pub struct ImagePayload {
    pub width: usize,
    pub height: usize,
    /// RGBA8, row-major, `width * height * 4` bytes
    pub rgba: Vec<u8>,
}

/// Read the current clipboard image, if any.
pub fn read_image() -> Result<ImagePayload, ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;

    match clipboard.get_image() {
        Ok(image) => {
            tracing::debug!("clipboard image: {}x{}", image.width, image.height);
            Ok(ImagePayload {
                width: image.width,
                height: image.height,
                rgba: image.bytes.into_owned(),
            })
        }
        Err(arboard::Error::ContentNotAvailable) => Err(ClipboardError::NoImage),
        Err(e) => Err(ClipboardError::Unavailable(e)),
    }
}

/// Replace the clipboard contents with plain text.
pub fn write_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
    clipboard
        .set_text(text)
        .map_err(ClipboardError::Unavailable)?;
    Ok(())
}
