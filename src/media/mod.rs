// SPDX-License-Identifier: MPL-2.0
//! Image file handling: format detection and decoding.

pub mod image;

use std::path::Path;

pub use image::{load_image, ImageData};

/// File extensions the viewer will pick up when scanning a directory.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp", "ico", "svg",
];

/// Checks whether a path carries a supported image extension
/// (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
