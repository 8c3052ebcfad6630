// SPDX-License-Identifier: MPL-2.0
//! The four-valued flipping mode applied when the source image is blitted
//! into the adapted canvas.

use crate::error::ViewportError;
use image_rs::{imageops, RgbaImage};

/// Mirroring applied to the source image during adaptation.
///
/// The mode cycles `Normal → Horizontal → Vertical → Both → Normal`. It is
/// deliberately not settable in isolation: changing it requires a full
/// re-adaptation of the canvas, which [`crate::viewport::Viewport`] enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipMode {
    /// Flipping is disabled.
    #[default]
    Normal,
    /// Horizontal flipping.
    Horizontal,
    /// Vertical flipping.
    Vertical,
    /// Both horizontal and vertical flipping.
    Both,
}

impl FlipMode {
    /// Returns the next mode in the cycle, wrapping `Both` back to `Normal`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FlipMode::Normal => FlipMode::Horizontal,
            FlipMode::Horizontal => FlipMode::Vertical,
            FlipMode::Vertical => FlipMode::Both,
            FlipMode::Both => FlipMode::Normal,
        }
    }

    /// Returns a copy of `image` with this mirroring applied.
    pub(crate) fn apply(self, image: &RgbaImage) -> RgbaImage {
        match self {
            FlipMode::Normal => image.clone(),
            FlipMode::Horizontal => imageops::flip_horizontal(image),
            FlipMode::Vertical => imageops::flip_vertical(image),
            FlipMode::Both => {
                let mut flipped = imageops::flip_horizontal(image);
                imageops::flip_vertical_in_place(&mut flipped);
                flipped
            }
        }
    }
}

impl TryFrom<i32> for FlipMode {
    type Error = ViewportError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FlipMode::Normal),
            1 => Ok(FlipMode::Horizontal),
            2 => Ok(FlipMode::Vertical),
            3 => Ok(FlipMode::Both),
            other => Err(ViewportError::InvalidFlipMode(other)),
        }
    }
}
