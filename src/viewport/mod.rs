// SPDX-License-Identifier: MPL-2.0
//! The stateful viewport engine.
//!
//! A [`Viewport`] owns everything needed to display one image on a resizable
//! surface: the bound source pixels, the letterboxed offscreen canvas, the
//! incremental zoom window into that canvas, and the flipping mode applied
//! when the canvas is rebuilt. All operations are synchronous and run on the
//! thread owning the display context; none of the state is shared.
//!
//! Canvas rebuilds follow a build-new-then-swap discipline: the replacement
//! canvas (and on image loads, the replacement source) is fully constructed
//! before any existing state is released, so a failed operation always leaves
//! the previously displayed state intact.

mod flip;
mod letterbox;
mod zoom;

pub use flip::FlipMode;

use zoom::ZoomWindow;

use crate::config::CANVAS_MAX_DIMENSION;
use crate::error::ViewportError;
use crate::media::ImageData;
use iced::widget::image::Handle;
use image_rs::{imageops, ColorType, RgbaImage};
use std::sync::Arc;

/// The sub-rectangle of the adapted canvas currently sampled for display,
/// in adapted-canvas pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// The bound source image: decoded pixels plus the metadata cached at load
/// time.
#[derive(Debug)]
struct SourceImage {
    pixels: Arc<RgbaImage>,
    width: i32,
    height: i32,
    pixel_format: ColorType,
}

impl SourceImage {
    fn from_data(image: &ImageData) -> Result<Self, ViewportError> {
        let (width, height) = validate_source_dimensions(image.width, image.height)?;
        Ok(Self {
            pixels: image.share_pixels(),
            width,
            height,
            pixel_format: image.pixel_format,
        })
    }
}

fn validate_source_dimensions(width: u32, height: u32) -> Result<(i32, i32), ViewportError> {
    let clamp = |value: u32| value.min(i32::MAX as u32) as i32;
    let (w, h) = (clamp(width), clamp(height));
    if width >= 1
        && height >= 1
        && width <= CANVAS_MAX_DIMENSION as u32
        && height <= CANVAS_MAX_DIMENSION as u32
    {
        Ok((w, h))
    } else {
        Err(ViewportError::InvalidDimensions {
            width: w,
            height: h,
        })
    }
}

/// One image-viewing session: owns the source, the adapted canvas, and the
/// zoom/flip state, and exposes the operations the event loop maps input to.
#[derive(Debug)]
pub struct Viewport {
    max_zoom_factor: i32,
    title: String,
    viewport_width: i32,
    viewport_height: i32,
    source: Option<SourceImage>,
    adjusted_width: i32,
    adjusted_height: i32,
    flip_mode: FlipMode,
    view_rect: ViewRect,
    zoom: ZoomWindow,
    adapted_canvas: Option<RgbaImage>,
}

impl Viewport {
    /// Creates an empty session with the given zoom ceiling.
    ///
    /// `max_zoom_factor` must be a power of two within
    /// `[1, CANVAS_MAX_DIMENSION]`.
    pub fn new(max_zoom_factor: i32) -> Result<Self, ViewportError> {
        zoom::validate_factor(max_zoom_factor, CANVAS_MAX_DIMENSION)?;
        Ok(Self {
            max_zoom_factor,
            title: String::new(),
            viewport_width: 0,
            viewport_height: 0,
            source: None,
            adjusted_width: 0,
            adjusted_height: 0,
            flip_mode: FlipMode::Normal,
            view_rect: ViewRect::default(),
            zoom: ZoomWindow::default(),
            adapted_canvas: None,
        })
    }

    /// Binds a new source image, replacing any previously bound one.
    ///
    /// The flipping mode and zoom window are reset for the new image. If the
    /// display surface dimensions are already known the canvas is adapted
    /// immediately; otherwise adaptation is deferred to the first
    /// [`Viewport::set_dimensions`] call.
    ///
    /// Either everything succeeds and the new image fully replaces the old
    /// state, or the call fails and the previous state (if any) remains
    /// displayed.
    pub fn initialize(&mut self, title: &str, image: &ImageData) -> Result<(), ViewportError> {
        let replacement = SourceImage::from_data(image)?;

        if self.viewport_width > 0 && self.viewport_height > 0 {
            let (adjusted_width, adjusted_height) = letterbox::adapted_dimensions(
                replacement.width,
                replacement.height,
                self.viewport_width,
                self.viewport_height,
            );
            // Build the replacement canvas before publishing anything.
            let canvas = letterbox::render_adapted(
                &replacement.pixels,
                FlipMode::Normal,
                replacement.width,
                replacement.height,
                adjusted_width,
                adjusted_height,
            )?;
            self.source = Some(replacement);
            self.flip_mode = FlipMode::Normal;
            self.commit_adapted(adjusted_width, adjusted_height, canvas);
        } else {
            self.source = Some(replacement);
            self.flip_mode = FlipMode::Normal;
            self.adjusted_width = 0;
            self.adjusted_height = 0;
            self.adapted_canvas = None;
            self.zoom = ZoomWindow::default();
            self.view_rect = ViewRect::default();
        }

        self.title = title.to_owned();
        Ok(())
    }

    /// Updates the display surface dimensions and re-letterboxes the bound
    /// image, resetting the zoom window.
    pub fn set_dimensions(&mut self, width: i32, height: i32) -> Result<(), ViewportError> {
        if width <= 0 || height <= 0 {
            return Err(ViewportError::InvalidDimensions { width, height });
        }
        self.viewport_width = width;
        self.viewport_height = height;

        if self.source.is_some() {
            self.adapt_source()?;
        }
        Ok(())
    }

    /// Moves the zoom window for a new `(pointer, factor)` pair.
    ///
    /// `factor` must be a power of two within `[1, max]`; anything else is
    /// rejected before the zoom history mutates.
    ///
    /// The window is rebased on the previous `(rectangle, factor)` pair, so
    /// factor changes beyond one doubling must step through every
    /// intermediate power of two with the same pointer coordinates — and
    /// pointer tracking while zoomed re-runs the same stepping sequence at
    /// the new position. Skipping steps silently diverges from the rectangle
    /// a continuous zoom would have produced.
    ///
    /// Calling with the current factor (above 1) leaves the window unchanged.
    pub fn set_zoomed_area(
        &mut self,
        pointer_x: i32,
        pointer_y: i32,
        factor: i32,
    ) -> Result<(), ViewportError> {
        zoom::validate_factor(factor, self.max_zoom_factor)?;
        if self.adapted_canvas.is_none() {
            return Err(ViewportError::NotInitialized);
        }

        if let Some(rect) = self.zoom.rebase(
            pointer_x,
            pointer_y,
            factor,
            self.adjusted_width,
            self.adjusted_height,
            self.viewport_width,
            self.viewport_height,
            self.max_zoom_factor,
        ) {
            self.view_rect = rect;
        }
        Ok(())
    }

    /// Sets the flipping mode and rebuilds the canvas with the new
    /// orientation. The rebuild resets the zoom window.
    pub fn set_flipping_mode(&mut self, mode: FlipMode) -> Result<(), ViewportError> {
        if self.source.is_none() {
            return Err(ViewportError::NotInitialized);
        }

        let previous = self.flip_mode;
        self.flip_mode = mode;
        if let Err(error) = self.adapt_source() {
            // Keep the displayed canvas and the mode in sync.
            self.flip_mode = previous;
            return Err(error);
        }
        Ok(())
    }

    /// Advances to the next flipping mode and returns it.
    pub fn cycle_flipping_mode(&mut self) -> Result<FlipMode, ViewportError> {
        let next = self.flip_mode.next();
        self.set_flipping_mode(next)?;
        Ok(next)
    }

    /// Scales an image smaller than the viewport up to fill it, preserving
    /// the aspect ratio, then re-letterboxes at the scaled size.
    ///
    /// Does nothing when the image already covers the viewport on either
    /// axis. Invoking it twice in a row produces the same view rectangle
    /// because the zoom window is normalized to factor 1 first.
    pub fn scale_image(&mut self) -> Result<(), ViewportError> {
        let Some(source) = self.source.as_ref() else {
            return Err(ViewportError::NotInitialized);
        };
        let (source_width, source_height) = (source.width, source.height);

        // Normalize the zoom window so the slack math starts from the full
        // canvas view.
        self.set_zoomed_area(0, 0, 1)?;

        if source_width < self.viewport_width && source_height < self.viewport_height {
            // Unused pixels per axis; the smaller slack bounds the upscale so
            // the ratio is preserved.
            let horizontal_slack = self.viewport_width - source_width;
            let vertical_slack = self.viewport_height - source_height;

            let (scaled_width, scaled_height) = if horizontal_slack < vertical_slack {
                let scaling_pct = (100 * (source_width + horizontal_slack)) / source_width;
                (
                    source_width + horizontal_slack,
                    (source_height * scaling_pct) / 100,
                )
            } else {
                let scaling_pct = (100 * (source_height + vertical_slack)) / source_height;
                (
                    (source_width * scaling_pct) / 100,
                    source_height + vertical_slack,
                )
            };

            // Re-letterbox at the scaled size; any residual ratio mismatch
            // becomes border.
            self.adapt(scaled_width, scaled_height)?;
        }
        Ok(())
    }

    /// Samples the current view rectangle of the adapted canvas for
    /// presentation. Has no effect on state.
    ///
    /// Returns `None` until an image has been bound and adapted.
    #[must_use]
    pub fn render_view(&self) -> Option<Handle> {
        let canvas = self.adapted_canvas.as_ref()?;
        let rect = self.view_rect;

        // Deep zooms into a tiny canvas can shrink the rectangle to nothing;
        // still sample one pixel.
        let width = rect.width.max(1) as u32;
        let height = rect.height.max(1) as u32;
        let sample =
            imageops::crop_imm(canvas, rect.x.max(0) as u32, rect.y.max(0) as u32, width, height)
                .to_image();

        Some(Handle::from_rgba(
            sample.width(),
            sample.height(),
            sample.into_raw(),
        ))
    }

    /// Re-letterboxes the bound source image at its own dimensions.
    fn adapt_source(&mut self) -> Result<(), ViewportError> {
        let (width, height) = self
            .source
            .as_ref()
            .map(|source| (source.width, source.height))
            .ok_or(ViewportError::NotInitialized)?;
        self.adapt(width, height)
    }

    /// Rebuilds the adapted canvas, treating `image_width x image_height` as
    /// the dimensions to letterbox (usually the source size, or the scaled
    /// size for [`Viewport::scale_image`]).
    fn adapt(&mut self, image_width: i32, image_height: i32) -> Result<(), ViewportError> {
        if self.viewport_width <= 0 || self.viewport_height <= 0 {
            return Err(ViewportError::NotInitialized);
        }
        let source = self.source.as_ref().ok_or(ViewportError::NotInitialized)?;

        let (adjusted_width, adjusted_height) = letterbox::adapted_dimensions(
            image_width,
            image_height,
            self.viewport_width,
            self.viewport_height,
        );
        let canvas = letterbox::render_adapted(
            &source.pixels,
            self.flip_mode,
            image_width,
            image_height,
            adjusted_width,
            adjusted_height,
        )?;
        self.commit_adapted(adjusted_width, adjusted_height, canvas);
        Ok(())
    }

    /// Publishes a fully built canvas and resets the zoom window to cover it.
    /// The previous canvas is released only here, after its replacement
    /// exists.
    fn commit_adapted(&mut self, adjusted_width: i32, adjusted_height: i32, canvas: RgbaImage) {
        self.adjusted_width = adjusted_width;
        self.adjusted_height = adjusted_height;
        self.adapted_canvas = Some(canvas);

        if let Some(rect) = self.zoom.rebase(
            0,
            0,
            1,
            adjusted_width,
            adjusted_height,
            self.viewport_width,
            self.viewport_height,
            self.max_zoom_factor,
        ) {
            self.view_rect = rect;
        }
    }

    /// Title supplied by the last successful [`Viewport::initialize`] call.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether an image is currently bound.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.source.is_some()
    }

    #[must_use]
    pub fn view_rect(&self) -> ViewRect {
        self.view_rect
    }

    /// Adapted canvas dimensions; `(0, 0)` before the first adaptation.
    #[must_use]
    pub fn adjusted_dimensions(&self) -> (i32, i32) {
        (self.adjusted_width, self.adjusted_height)
    }

    #[must_use]
    pub fn viewport_dimensions(&self) -> (i32, i32) {
        (self.viewport_width, self.viewport_height)
    }

    #[must_use]
    pub fn source_dimensions(&self) -> Option<(i32, i32)> {
        self.source.as_ref().map(|s| (s.width, s.height))
    }

    /// Pixel layout the bound image carried on disk, cached at load time.
    #[must_use]
    pub fn source_pixel_format(&self) -> Option<ColorType> {
        self.source.as_ref().map(|s| s.pixel_format)
    }

    #[must_use]
    pub fn flipping_mode(&self) -> FlipMode {
        self.flip_mode
    }

    #[must_use]
    pub fn max_zoom_factor(&self) -> i32 {
        self.max_zoom_factor
    }

    /// The `(x, y, factor)` history the next zoom computation will rebase on.
    #[must_use]
    pub fn zoom_history(&self) -> (i32, i32, i32) {
        self.zoom.history()
    }
}
