// SPDX-License-Identifier: MPL-2.0
//! Incremental zoom-window tracking.
//!
//! The view rectangle is never derived from an absolute `(pointer, factor)`
//! pair; every change is rebased on the rectangle and factor of the previous
//! call. Callers changing the factor by more than one doubling therefore must
//! step through every intermediate power of two (see
//! [`crate::viewport::Viewport::set_zoomed_area`]).
//!
//! All arithmetic is truncating `i32` fixed-point. The truncation is part of
//! the contract, not a rounding artifact.

use crate::error::ViewportError;

use super::ViewRect;

/// The minimal history needed to rebase the next zoom computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomWindow {
    prev_x: i32,
    prev_y: i32,
    prev_factor: i32,
}

impl Default for ZoomWindow {
    fn default() -> Self {
        Self {
            prev_x: 0,
            prev_y: 0,
            prev_factor: 1,
        }
    }
}

/// Validates that `factor` is a power of two within `[1, max_factor]`.
pub(crate) fn validate_factor(factor: i32, max_factor: i32) -> Result<(), ViewportError> {
    if factor >= 1 && factor <= max_factor && factor.count_ones() == 1 {
        Ok(())
    } else {
        Err(ViewportError::ZoomOutOfRange {
            factor,
            max: max_factor,
        })
    }
}

impl ZoomWindow {
    /// Returns the `(x, y, factor)` history of the last accepted rebase.
    #[must_use]
    pub fn history(&self) -> (i32, i32, i32) {
        (self.prev_x, self.prev_y, self.prev_factor)
    }

    /// Rebases the view rectangle for a new `(pointer, factor)` pair.
    ///
    /// Returns the new rectangle, or `None` when the call is an intentional
    /// no-op:
    /// - both the previous and requested factor (above 1) sit at the ceiling
    ///   (repeating the computation there would overflow the origin), or
    /// - the factor is unchanged and above 1 (the window is already where a
    ///   continuous zoom would have put it).
    ///
    /// `factor` must have been validated with [`validate_factor`] first.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn rebase(
        &mut self,
        pointer_x: i32,
        pointer_y: i32,
        factor: i32,
        adjusted_width: i32,
        adjusted_height: i32,
        viewport_width: i32,
        viewport_height: i32,
        max_factor: i32,
    ) -> Option<ViewRect> {
        // Factor 1 always recomputes, even under a degenerate ceiling of 1
        // where zooming is disabled entirely.
        if factor != 1 && self.prev_factor == max_factor && factor == max_factor {
            return None;
        }

        let (x, y) = if factor == 1 {
            // No zooming: the view rectangle covers the whole canvas.
            (0, 0)
        } else if self.prev_factor < factor {
            // Zooming in: advance the previous origin by the pointer offset
            // scaled to the new factor.
            (
                self.prev_x + ((pointer_x / factor) * adjusted_width) / viewport_width,
                self.prev_y + ((pointer_y / factor) * adjusted_height) / viewport_height,
            )
        } else if self.prev_factor > factor {
            // Zooming out: retreat by the pointer offset scaled to the factor
            // that produced the previous origin.
            (
                self.prev_x - ((pointer_x / self.prev_factor) * adjusted_width) / viewport_width,
                self.prev_y - ((pointer_y / self.prev_factor) * adjusted_height) / viewport_height,
            )
        } else {
            return None;
        };

        let x = x.max(0);
        let y = y.max(0);

        let rect = ViewRect {
            x,
            y,
            width: (adjusted_width / factor) - 1,
            height: (adjusted_height / factor) - 1,
        };

        self.prev_x = x;
        self.prev_y = y;
        self.prev_factor = factor;

        Some(rect)
    }
}
