//! Decode, resize, and encode.
//!
//! Sources are decoded through the `image` crate and normalized to RGB8:
//! `DynamicImage::to_rgb8` copies the pixels into a freshly allocated
//! buffer, which both flattens alpha/palette modes for the JPEG path and
//! guarantees that no metadata block from the source container can ride
//! along into the encoded outputs.
//!
//! JPEG encoding goes through the `image` crate at a caller-chosen quality.
//! WebP is encoded lossy through the `webp` crate, since `image` 0.25 only
//! ships a lossless WebP encoder.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Load a source image and normalize it to an RGB8 pixel buffer.
///
/// Any color mode (alpha, palette, grayscale) is converted; the result is
/// always a bare RGB buffer with nothing carried over but pixels.
pub fn load_rgb(path: &Path) -> Result<RgbImage, CodecError> {
    let img = ImageReader::open(path)?
        .decode()
        .map_err(|e| CodecError::Decode(format!("{}: {}", path.display(), e)))?;
    Ok(img.to_rgb8())
}

/// Resize with a high-quality Lanczos3 filter.
///
/// Callers only invoke this when downscaling; dimension policy lives in
/// [`scaled_dimensions`](super::scaled_dimensions).
pub fn resize(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    imageops::resize(img, width, height, FilterType::Lanczos3)
}

/// Encode as JPEG at the given quality.
pub fn encode_jpeg(img: &RgbImage, path: &Path, quality: u8) -> Result<(), CodecError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(writer, quality)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| CodecError::Encode(format!("{}: {}", path.display(), e)))
}

/// Encode as lossy WebP at the given quality.
pub fn encode_webp(img: &RgbImage, path: &Path, quality: u8) -> Result<(), CodecError> {
    let encoded = webp::Encoder::from_rgb(img.as_raw(), img.width(), img.height())
        .encode(f32::from(quality));
    std::fs::write(path, &*encoded)?;
    Ok(())
}
