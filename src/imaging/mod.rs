//! Image operations for the optimizer — pure Rust, statically linked.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, WebP) | `image` crate |
//! | Color normalization | `DynamicImage::to_rgb8` (fresh RGB buffer) |
//! | Resize | `image::imageops::resize` with `Lanczos3` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |
//! | Encode → WebP (lossy) | `webp::Encoder` |
//!
//! The module is split into:
//! - **Calculations**: pure dimension math (unit testable without I/O)
//! - **Codec**: decode, resize, and encode against the filesystem

pub mod calculations;
pub mod codec;

pub use calculations::scaled_dimensions;
pub use codec::{CodecError, encode_jpeg, encode_webp, load_rgb, resize};
