use cliplens_config::ocr::OcrConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Invalid image format")]
    InvalidImage,
    #[error("text recognition failed: {0}")]
    Engine(String),
    #[error("OCR is not supported on this platform")]
    Unsupported,
}

#[cfg(target_os = "macos")]
unsafe extern "C" {
    fn cliplens_vision_recognize(
        data: *const u8,
        len: i32,
        accurate: bool,
        language_correction: bool,
        languages: *const std::ffi::c_char,
    ) -> *mut std::ffi::c_char;
    fn cliplens_vision_free(ptr: *mut std::ffi::c_char);
}

/// Recognize text in a PNG image via the Apple Vision shim.
///
/// Blocking; callers dispatch this off the UI thread. An image containing
/// no text is a successful empty-string result, not an error.
#[cfg(target_os = "macos")]
pub fn recognize(png_bytes: &[u8], config: &OcrConfig) -> Result<String, OcrError> {
    use std::ffi::{CStr, CString};

    let languages = CString::new(config.languages.join(","))
        .map_err(|_| OcrError::Engine("language hint contains a NUL byte".into()))?;

    let start = std::time::Instant::now();
    let ptr = unsafe {
        cliplens_vision_recognize(
            png_bytes.as_ptr(),
            png_bytes.len() as i32,
            config.accurate,
            config.language_correction,
            languages.as_ptr(),
        )
    };
    if ptr.is_null() {
        return Err(OcrError::Engine("vision recognition request failed".into()));
    }

    let text = unsafe { CStr::from_ptr(ptr).to_string_lossy().into_owned() };
    unsafe { cliplens_vision_free(ptr) };

    tracing::debug!(
        "OCR finished in {:?}, {} chars recognized",
        start.elapsed(),
        text.len()
    );
    Ok(text)
}

#[cfg(not(target_os = "macos"))]
pub fn recognize(_png_bytes: &[u8], _config: &OcrConfig) -> Result<String, OcrError> {
    Err(OcrError::Unsupported)
}
