// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A native event routed from the subscription (resize, wheel scroll,
    /// pointer motion, keyboard).
    RawEvent(iced::event::Event),
    /// Result of decoding an image off the UI thread.
    ImageLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// Periodic tick advancing the slideshow.
    SlideshowTick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional image file or directory to open on startup.
    pub path: Option<PathBuf>,
    /// Start with timed random slide advancing enabled.
    pub slideshow: bool,
    /// Optional slideshow interval override in seconds.
    pub slideshow_interval_secs: Option<u64>,
}
