use fixgen_core::{Canvas, CanvasEncoder, EncodeError, TargetFormat};
use image::{DynamicImage, ImageFormat, Limits, Rgb, RgbImage};
use std::io::Cursor;

/// Encodes canvases with the `image` crate's default encoder settings
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageEncoder;

/// Map an encoder identifier onto an `image` container format
pub fn image_format(encoder: &str) -> Result<ImageFormat, EncodeError> {
    match encoder {
        "jpeg" => Ok(ImageFormat::Jpeg),
        "png" => Ok(ImageFormat::Png),
        "webp" => Ok(ImageFormat::WebP),
        "tiff" => Ok(ImageFormat::Tiff),
        "gif" => Ok(ImageFormat::Gif),
        other => Err(EncodeError::UnsupportedFormat(other.to_string())),
    }
}

/// Whether the RGB buffer for `canvas` stays within `image`'s default allocation limit
fn fits_allocation_limit(canvas: &Canvas) -> bool {
    let max_alloc = Limits::default().max_alloc.unwrap_or(u64::MAX);
    u64::from(canvas.width)
        .checked_mul(u64::from(canvas.height))
        .and_then(|pixels| pixels.checked_mul(3))
        .is_some_and(|bytes| bytes <= max_alloc)
}

impl CanvasEncoder for ImageEncoder {
    fn encode(&self, canvas: &Canvas, format: &TargetFormat) -> Result<Vec<u8>, EncodeError> {
        let image_format = image_format(format.encoder)?;
        if canvas.is_empty() || !fits_allocation_limit(canvas) {
            return Err(EncodeError::InvalidDimensions {
                width: canvas.width,
                height: canvas.height,
            });
        }

        let pixels = RgbImage::from_pixel(canvas.width, canvas.height, Rgb(canvas.fill));
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(pixels)
            .write_to(&mut buffer, image_format)
            .map_err(|e| EncodeError::Codec(e.to_string()))?;

        Ok(buffer.into_inner())
    }
}
