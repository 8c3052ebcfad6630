// SPDX-License-Identifier: MPL-2.0
//! Letterboxing: aspect-ratio-preserving canvas sizing and the centered,
//! flipped blit of the source image into it.

use crate::config::CANVAS_MAX_DIMENSION;
use crate::error::ViewportError;
use image_rs::{imageops, Rgba, RgbaImage};

use super::FlipMode;

/// Border fill behind the letterboxed image. Opaque black keeps the image
/// boundary visible against typical content.
pub(crate) const BACKGROUND_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Computes the adapted canvas dimensions for an image displayed in a
/// viewport.
///
/// When the image fits inside the viewport on both axes the canvas simply
/// takes the viewport dimensions and the image is centered inside it.
/// Otherwise the more constrained axis keeps the image dimension and the
/// other axis is padded out so the canvas matches the viewport's aspect
/// ratio. All divisions truncate; the percentages are fixed-point with two
/// implied decimal digits.
pub(crate) fn adapted_dimensions(
    image_width: i32,
    image_height: i32,
    viewport_width: i32,
    viewport_height: i32,
) -> (i32, i32) {
    if image_width < viewport_width && image_height < viewport_height {
        (viewport_width, viewport_height)
    } else {
        // How much larger (in percent) the image is than the viewport,
        // per axis.
        let horizontal_pct = (100 * image_width) / viewport_width;
        let vertical_pct = (100 * image_height) / viewport_height;

        if horizontal_pct > vertical_pct {
            // Width is the constrained axis: keep it, pad the height.
            (image_width, (viewport_height * horizontal_pct) / 100)
        } else {
            // Height is the constrained axis: keep it, pad the width.
            ((viewport_width * vertical_pct) / 100, image_height)
        }
    }
}

/// Builds a fresh adapted canvas of `adjusted_width x adjusted_height`,
/// border-filled, with the flipped source stretched into a centered
/// `(blit_width - 1) x (blit_height - 1)` destination rectangle.
///
/// The canvas is fully constructed before being returned so the caller can
/// swap it in atomically; on error nothing has been published.
pub(crate) fn render_adapted(
    source: &RgbaImage,
    flip_mode: FlipMode,
    blit_width: i32,
    blit_height: i32,
    adjusted_width: i32,
    adjusted_height: i32,
) -> Result<RgbaImage, ViewportError> {
    if adjusted_width <= 0
        || adjusted_height <= 0
        || adjusted_width > CANVAS_MAX_DIMENSION
        || adjusted_height > CANVAS_MAX_DIMENSION
    {
        return Err(ViewportError::AllocationFailed {
            width: adjusted_width,
            height: adjusted_height,
        });
    }

    let mut canvas = RgbaImage::from_pixel(
        adjusted_width as u32,
        adjusted_height as u32,
        BACKGROUND_COLOR,
    );

    let destination_x = adjusted_width / 2 - blit_width / 2;
    let destination_y = adjusted_height / 2 - blit_height / 2;
    // 1-pixel sources still get a visible blit.
    let destination_width = (blit_width - 1).max(1);
    let destination_height = (blit_height - 1).max(1);

    let oriented = flip_mode.apply(source);
    let stretched = imageops::resize(
        &oriented,
        destination_width as u32,
        destination_height as u32,
        imageops::FilterType::Nearest,
    );
    imageops::replace(
        &mut canvas,
        &stretched,
        i64::from(destination_x),
        i64::from(destination_y),
    );

    Ok(canvas)
}
