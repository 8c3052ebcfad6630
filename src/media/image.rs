// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, Result};
use image_rs::{ColorType, ImageError, RgbaImage};
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A decoded source image: RGBA pixels plus the format metadata the viewport
/// engine caches at load time.
///
/// Pixels are normalized to RGBA8 (the layout the rendering backend consumes)
/// while `pixel_format` records the layout the file actually carried.
#[derive(Debug, Clone)]
pub struct ImageData {
    rgba: Arc<RgbaImage>,
    pub width: u32,
    pub height: u32,
    pub pixel_format: ColorType,
}

impl ImageData {
    /// Creates a new `ImageData` from already-decoded RGBA pixels.
    ///
    /// The pixels are stored in an Arc so sharing them with the viewport
    /// engine does not copy the buffer.
    #[must_use]
    pub fn from_rgba8(rgba: RgbaImage, pixel_format: ColorType) -> Self {
        let width = rgba.width();
        let height = rgba.height();
        Self {
            rgba: Arc::new(rgba),
            width,
            height,
            pixel_format,
        }
    }

    /// Returns a reference to the decoded RGBA pixels.
    #[must_use]
    pub fn rgba(&self) -> &RgbaImage {
        &self.rgba
    }

    /// Returns a shared handle to the pixel buffer.
    #[must_use]
    pub fn share_pixels(&self) -> Arc<RgbaImage> {
        Arc::clone(&self.rgba)
    }
}

/// Load an image from the given path and return its data.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
/// SVG files are rasterized with resvg.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Decode`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        let svg_data = fs::read(path)?;
        let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
            .map_err(|e| Error::Svg(e.to_string()))?;

        let pixmap_size = tree.size().to_int_size();
        let width = pixmap_size.width();
        let height = pixmap_size.height();
        if width == 0 || height == 0 {
            return Err(Error::Svg("SVG has empty dimensions".into()));
        }

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let rgba = RgbaImage::from_raw(width, height, pixmap.data().to_vec())
            .ok_or_else(|| Error::Svg("SVG pixmap size mismatch".into()))?;

        Ok(ImageData::from_rgba8(rgba, ColorType::Rgba8))
    } else {
        let img_bytes = fs::read(path).map_err(|e| Error::Io(e.to_string()))?;

        let img =
            image_rs::load_from_memory(&img_bytes).map_err(|e| Error::Decode(e.to_string()))?;

        let pixel_format = img.color();
        Ok(ImageData::from_rgba8(img.into_rgba8(), pixel_format))
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgb, RgbImage, Rgba};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn load_caches_source_pixel_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("opaque.png");

        // An RGB png without alpha must still report its on-disk layout even
        // though the decoded pixels are normalized to RGBA8.
        let image = RgbImage::from_pixel(3, 3, Rgb([10, 20, 30]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.pixel_format, ColorType::Rgb8);
        assert_eq!(data.rgba().get_pixel(1, 1), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn load_svg_image_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        let data = load_image(&svg_path).expect("svg should load successfully");
        assert_eq!(data.width, 6);
        assert_eq!(data.height, 3);
        assert_eq!(data.pixel_format, ColorType::Rgba8);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_svg_returns_svg_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_svg_path = temp_dir.path().join("broken.svg");
        fs::write(&bad_svg_path, "<svg>oops").expect("failed to write invalid svg");

        match load_image(&bad_svg_path) {
            Err(Error::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }

    #[test]
    fn load_svg_with_zero_dimensions_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("zero.svg");
        let svg = r"<svg xmlns='http://www.w3.org/2000/svg' width='0' height='10'></svg>";
        fs::write(&svg_path, svg).expect("write svg");

        match load_image(&svg_path) {
            Err(Error::Svg(_)) => {}
            other => panic!("expected Svg error, got {other:?}"),
        }
    }

    #[test]
    fn image_error_conversion_returns_decode_variant() {
        let io_err = std::io::Error::other("decode failed");
        let image_error = ImageError::IoError(io_err);
        let error: Error = image_error.into();
        match error {
            Error::Decode(message) => assert!(message.contains("decode failed")),
            other => panic!("expected Decode variant from ImageError, got {other:?}"),
        }
    }

    #[test]
    fn share_pixels_does_not_copy() {
        let data = ImageData::from_rgba8(
            RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4])),
            ColorType::Rgba8,
        );
        let shared = data.share_pixels();
        assert!(Arc::ptr_eq(&shared, &data.share_pixels()));
    }
}
