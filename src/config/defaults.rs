// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom factor bounds
//! - **Canvas**: Adapted canvas allocation limits
//! - **Window**: Window sizing
//! - **Slideshow**: Automatic slide advancing

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Smallest allowed zoom factor (no zoom).
pub const MIN_ZOOM_FACTOR: i32 = 1;

/// Default ceiling for the zoom factor. Must be a power of two; can be
/// overridden per-user through `max_zoom_factor` in `settings.toml`.
pub const DEFAULT_MAX_ZOOM_FACTOR: i32 = 256;

// ==========================================================================
// Canvas Defaults
// ==========================================================================

/// Largest adapted canvas edge the renderer is asked to allocate, matching
/// the texture-size ceiling of common GPU backends. Adaptation requests
/// beyond this fail cleanly instead of exhausting memory.
pub const CANVAS_MAX_DIMENSION: i32 = 16_384;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 640;

/// Initial window height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 480;

/// Window minimum width in pixels. Smaller surfaces can prevent the adapted
/// canvas from being sampled correctly.
pub const MIN_WINDOW_WIDTH: u32 = 100;

/// Window minimum height in pixels.
pub const MIN_WINDOW_HEIGHT: u32 = 100;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default delay between automatic slide advances (in seconds).
pub const DEFAULT_SLIDESHOW_INTERVAL_SECS: u64 = 5;

/// Minimum slideshow interval (in seconds).
pub const MIN_SLIDESHOW_INTERVAL_SECS: u64 = 1;

/// Maximum slideshow interval (in seconds).
pub const MAX_SLIDESHOW_INTERVAL_SECS: u64 = 3_600;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM_FACTOR == 1);
    assert!(DEFAULT_MAX_ZOOM_FACTOR >= MIN_ZOOM_FACTOR);
    assert!(DEFAULT_MAX_ZOOM_FACTOR.count_ones() == 1);
    assert!(DEFAULT_MAX_ZOOM_FACTOR <= CANVAS_MAX_DIMENSION);

    // Canvas validation
    assert!(CANVAS_MAX_DIMENSION > 0);

    // Window validation
    assert!(MIN_WINDOW_WIDTH > 0);
    assert!(MIN_WINDOW_HEIGHT > 0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);

    // Slideshow validation
    assert!(MIN_SLIDESHOW_INTERVAL_SECS > 0);
    assert!(MAX_SLIDESHOW_INTERVAL_SECS >= MIN_SLIDESHOW_INTERVAL_SECS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_SECS >= MIN_SLIDESHOW_INTERVAL_SECS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_SECS <= MAX_SLIDESHOW_INTERVAL_SECS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_defaults_are_valid() {
        assert_eq!(DEFAULT_MAX_ZOOM_FACTOR, 256);
        assert!((DEFAULT_MAX_ZOOM_FACTOR as u32).is_power_of_two());
        assert!(DEFAULT_MAX_ZOOM_FACTOR >= MIN_ZOOM_FACTOR);
    }

    #[test]
    fn window_defaults_are_valid() {
        assert_eq!(DEFAULT_WINDOW_WIDTH, 640);
        assert_eq!(DEFAULT_WINDOW_HEIGHT, 480);
        assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
        assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn slideshow_defaults_are_valid() {
        assert_eq!(DEFAULT_SLIDESHOW_INTERVAL_SECS, 5);
        assert!(DEFAULT_SLIDESHOW_INTERVAL_SECS >= MIN_SLIDESHOW_INTERVAL_SECS);
        assert!(DEFAULT_SLIDESHOW_INTERVAL_SECS <= MAX_SLIDESHOW_INTERVAL_SECS);
    }

    #[test]
    fn canvas_ceiling_accommodates_max_zoom() {
        assert!(CANVAS_MAX_DIMENSION >= DEFAULT_MAX_ZOOM_FACTOR);
    }
}
