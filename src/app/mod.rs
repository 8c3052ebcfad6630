// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the viewport engine to the directory navigator and
//! translates native events (resize, wheel, pointer, keys) into engine
//! operations. Policy decisions (zoom doubling, the pointer stepping
//! protocol, slideshow cadence) live here, next to the update loop, so the
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, SortOrder};
use crate::image_navigation::ImageNavigator;
use crate::viewport::Viewport;
use iced::widget::image::Handle;
use iced::{window, Size, Subscription, Task};
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    /// The viewport engine owning the adapted canvas and zoom window.
    viewport: Viewport,
    /// Scanned image list plus the current position in it.
    navigator: ImageNavigator,
    sort_order: SortOrder,
    /// Wheel-accumulated zoom factor; mirrored into the viewport one
    /// doubling at a time.
    zoom_factor: i32,
    /// Last reported pointer position, in viewport coordinates.
    cursor_position: Option<iced::Point>,
    /// Cached presentation of the current view rectangle.
    frame: Option<Handle>,
    slideshow_enabled: bool,
    slideshow_interval: Duration,
    /// Last user-visible warning, shown while no image is displayed.
    status: Option<String>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(
            config::DEFAULT_WINDOW_WIDTH as f32,
            config::DEFAULT_WINDOW_HEIGHT as f32,
        ),
        // Too small a surface can prevent the adapted canvas from being
        // sampled correctly.
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// image loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            eprintln!("Failed to load config: {error}");
            Config::default()
        });

        let viewport = Viewport::new(config.effective_max_zoom_factor()).unwrap_or_else(|error| {
            // effective_max_zoom_factor already validated the value, so this
            // only fires if the defaults themselves are broken.
            eprintln!("Rejected zoom ceiling: {error}");
            Viewport::new(config::DEFAULT_MAX_ZOOM_FACTOR)
                .expect("default zoom ceiling is a valid power of two")
        });

        let slideshow_interval = match flags.slideshow_interval_secs {
            Some(secs) => Duration::from_secs(secs.clamp(
                config::defaults::MIN_SLIDESHOW_INTERVAL_SECS,
                config::MAX_SLIDESHOW_INTERVAL_SECS,
            )),
            None => config.effective_slideshow_interval(),
        };

        let mut app = App {
            viewport,
            navigator: ImageNavigator::new(),
            sort_order: config.effective_sort_order(),
            zoom_factor: 1,
            cursor_position: None,
            frame: None,
            slideshow_enabled: flags.slideshow,
            slideshow_interval,
            status: None,
        };

        let task = match flags.path {
            Some(path) => app.open_path(&path),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        if self.viewport.is_initialized() {
            self.viewport.title().to_owned()
        } else {
            String::from("Lightbox")
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_slideshow_subscription(
                self.slideshow_enabled && !self.navigator.is_empty(),
                self.slideshow_interval,
            ),
        ])
    }
}
