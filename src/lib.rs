// SPDX-License-Identifier: MPL-2.0
//! `lightbox` is a lightweight image viewer built with the Iced GUI
//! framework.
//!
//! Every image is letterboxed into an aspect-preserving offscreen canvas;
//! a pointer-anchored, power-of-two zoom window samples that canvas for
//! display. Axis flips, scale-to-fit, and directory slideshows round out the
//! viewer.

#![doc(html_root_url = "https://docs.rs/lightbox/0.1.0")]

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod image_navigation;
pub mod media;
pub mod viewport;
