use image::ImageEncoder;

use crate::OcrError;

/// Encode a raw RGBA8 clipboard bitmap as PNG for the recognition engine.
pub fn encode_png(rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>, OcrError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4));
    if expected != Some(rgba.len()) {
        return Err(OcrError::InvalidImage);
    }

    let mut buffer = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(rgba, width, height, image::ExtendedColorType::Rgba8)
        .map_err(|_| OcrError::InvalidImage)?;
    Ok(buffer)
}
