// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Native events map onto the viewport engine the same way the classic
//! event loop does: resize re-letterboxes (and resets zoom), a wheel tick
//! doubles or halves the factor at the cursor, pointer motion while zoomed
//! replays the power-of-two stepping sequence so the incremental zoom
//! history stays consistent, `f` cycles flipping, `s` scales to fit.

use super::{App, Message};
use crate::error::Error;
use crate::media::{self, ImageData};
use iced::{event, keyboard, mouse, window, Point, Task};
use std::path::{Path, PathBuf};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RawEvent(event) => self.handle_raw_event(event),
            Message::ImageLoaded { path, result } => self.handle_image_loaded(&path, result),
            Message::SlideshowTick(_) => self.advance_random(),
        }
    }

    /// Scans the given file's directory (or a whole directory tree) and
    /// starts loading the selected image.
    pub(super) fn open_path(&mut self, path: &Path) -> Task<Message> {
        let scan_result = if path.is_dir() {
            self.navigator.scan_tree(path, self.sort_order)
        } else {
            self.navigator.scan_directory(path, self.sort_order)
        };

        match scan_result {
            Ok(()) => match self.navigator.current_image_path() {
                Some(current) => load_image_task(current.to_path_buf()),
                None => {
                    self.status = Some(format!("No images found in {}", path.display()));
                    Task::none()
                }
            },
            Err(error) => {
                eprintln!("Failed to scan {}: {error}", path.display());
                self.status = Some(error.to_string());
                Task::none()
            }
        }
    }

    fn handle_image_loaded(
        &mut self,
        path: &Path,
        result: Result<ImageData, Error>,
    ) -> Task<Message> {
        match result {
            Ok(image) => {
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unnamed");
                let title = format!("Lightbox - {name}");

                if let Err(error) = self.viewport.initialize(&title, &image) {
                    // The previously displayed image stays intact.
                    eprintln!("Failed to display {}: {error}", path.display());
                    self.status = Some(format!("{}: {error}", path.display()));
                } else {
                    self.zoom_factor = 1;
                    self.status = None;
                    self.refresh_frame();
                }
            }
            Err(error) => {
                eprintln!("Failed to load {}: {error}", path.display());
                self.status = Some(format!("{}: {error}", path.display()));
            }
        }
        Task::none()
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Task<Message> {
        match event {
            event::Event::Window(window_event) => {
                match window_event {
                    window::Event::Opened { size, .. } => {
                        self.handle_resize(size.width as i32, size.height as i32);
                    }
                    window::Event::Resized(size) => {
                        self.handle_resize(size.width as i32, size.height as i32);
                    }
                    _ => {}
                }
                Task::none()
            }
            event::Event::Mouse(mouse_event) => {
                match mouse_event {
                    mouse::Event::WheelScrolled { delta } => self.handle_wheel_zoom(delta),
                    mouse::Event::CursorMoved { position } => self.handle_cursor_moved(position),
                    mouse::Event::CursorLeft => self.cursor_position = None,
                    _ => {}
                }
                Task::none()
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key_pressed(key)
            }
            _ => Task::none(),
        }
    }

    fn handle_resize(&mut self, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            return;
        }
        if let Err(error) = self.viewport.set_dimensions(width, height) {
            eprintln!("Failed to adapt image to {width}x{height}: {error}");
            self.status = Some(error.to_string());
        }
        // Re-letterboxing resets the zoom window; mirror that here.
        self.zoom_factor = 1;
        self.refresh_frame();
    }

    fn handle_wheel_zoom(&mut self, delta: mouse::ScrollDelta) {
        if self.frame.is_none() {
            return;
        }
        let vertical = match delta {
            mouse::ScrollDelta::Lines { y, .. } => y,
            mouse::ScrollDelta::Pixels { y, .. } => y,
        };

        if vertical > 0.0 {
            // Wheel rotated toward the user: one doubling, capped at the
            // ceiling.
            if self.zoom_factor < self.viewport.max_zoom_factor() {
                self.zoom_factor *= 2;
            }
        } else if vertical < 0.0 {
            if self.zoom_factor > 1 {
                self.zoom_factor /= 2;
            }
        } else {
            return;
        }

        let (x, y) = self.cursor_coordinates();
        if let Err(error) = self.viewport.set_zoomed_area(x, y, self.zoom_factor) {
            eprintln!("Zoom failed: {error}");
        }
        self.refresh_frame();
    }

    fn handle_cursor_moved(&mut self, position: Point) {
        self.cursor_position = Some(position);

        // Nothing to recompute while unzoomed.
        if self.zoom_factor > 1 && self.frame.is_some() {
            // Replay the factor sequence at the new pointer position so the
            // incremental zoom history stays consistent.
            let (x, y) = (position.x as i32, position.y as i32);
            let mut factor = 1;
            while factor <= self.zoom_factor {
                if let Err(error) = self.viewport.set_zoomed_area(x, y, factor) {
                    eprintln!("Zoom tracking failed: {error}");
                    break;
                }
                factor <<= 1;
            }
            self.refresh_frame();
        }
    }

    fn handle_key_pressed(&mut self, key: keyboard::Key) -> Task<Message> {
        match key {
            keyboard::Key::Character(ref c) if c.as_str() == "f" => {
                self.handle_flip();
                Task::none()
            }
            keyboard::Key::Character(ref c) if c.as_str() == "s" => {
                self.handle_scale_to_fit();
                Task::none()
            }
            keyboard::Key::Character(ref c) if c.as_str() == "q" => quit(),
            keyboard::Key::Named(keyboard::key::Named::Escape) => quit(),
            keyboard::Key::Named(keyboard::key::Named::Space) => self.advance_random(),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                let selection = self.navigator.navigate_next();
                self.load_selected(selection)
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                let selection = self.navigator.navigate_previous();
                self.load_selected(selection)
            }
            _ => Task::none(),
        }
    }

    fn handle_flip(&mut self) {
        if self.frame.is_none() {
            return;
        }
        match self.viewport.cycle_flipping_mode() {
            // The re-blit reset the zoom window.
            Ok(_) => self.zoom_factor = 1,
            Err(error) => {
                eprintln!("Flip failed: {error}");
                self.status = Some(error.to_string());
            }
        }
        self.refresh_frame();
    }

    fn handle_scale_to_fit(&mut self) {
        if self.frame.is_none() {
            return;
        }
        match self.viewport.scale_image() {
            Ok(()) => self.zoom_factor = 1,
            Err(error) => {
                eprintln!("Scale to fit failed: {error}");
                self.status = Some(error.to_string());
            }
        }
        self.refresh_frame();
    }

    fn advance_random(&mut self) -> Task<Message> {
        let selection = self.navigator.navigate_random();
        self.load_selected(selection)
    }

    fn load_selected(&mut self, selection: Option<PathBuf>) -> Task<Message> {
        match selection {
            Some(path) => load_image_task(path),
            None => Task::none(),
        }
    }

    fn cursor_coordinates(&self) -> (i32, i32) {
        self.cursor_position
            .map(|p| (p.x as i32, p.y as i32))
            .unwrap_or((0, 0))
    }

    /// Re-samples the view rectangle into the cached presentation handle.
    fn refresh_frame(&mut self) {
        self.frame = self.viewport.render_view();
    }
}

fn load_image_task(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let result = media::load_image(&path);
            (path, result)
        },
        |(path, result)| Message::ImageLoaded { path, result },
    )
}

fn quit() -> Task<Message> {
    window::latest().and_then(window::close)
}
