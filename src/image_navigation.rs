// SPDX-License-Identifier: MPL-2.0
//! Image navigation module for managing image lists and navigation state.
//!
//! This module provides an `ImageNavigator` that owns the scanned image list
//! and the current image path, keeping a single source of truth for
//! sequential (next/previous) and random (slideshow) navigation.

use crate::config::SortOrder;
use crate::directory_scanner::ImageList;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Manages navigation through a list of images.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageNavigator {
    /// List of scanned images.
    image_list: ImageList,
    /// Path to the currently selected image.
    current_image_path: Option<PathBuf>,
}

impl ImageNavigator {
    /// Creates a new empty ImageNavigator.
    pub fn new() -> Self {
        Self {
            image_list: ImageList::new(),
            current_image_path: None,
        }
    }

    /// Scans the directory containing the given image file and updates the
    /// image list.
    pub fn scan_directory(&mut self, current_file: &Path, sort_order: SortOrder) -> Result<()> {
        self.image_list = ImageList::scan_directory(current_file, sort_order)?;
        self.current_image_path = Some(current_file.to_path_buf());
        Ok(())
    }

    /// Recursively scans an image tree; the first image found becomes
    /// current.
    pub fn scan_tree(&mut self, root: &Path, sort_order: SortOrder) -> Result<()> {
        self.image_list = ImageList::scan_tree(root, sort_order)?;
        self.current_image_path = self.image_list.current().map(Path::to_path_buf);
        Ok(())
    }

    /// Returns the path to the current image, if set.
    pub fn current_image_path(&self) -> Option<&Path> {
        self.current_image_path.as_deref()
    }

    /// Navigates to the next image and returns its path.
    ///
    /// Returns `None` if there are no images in the list.
    /// Wraps around to the first image when at the last image.
    pub fn navigate_next(&mut self) -> Option<PathBuf> {
        let next_path = self.image_list.next()?.to_path_buf();
        self.select(next_path.clone());
        Some(next_path)
    }

    /// Navigates to the previous image and returns its path.
    ///
    /// Returns `None` if there are no images in the list.
    /// Wraps around to the last image when at the first image.
    pub fn navigate_previous(&mut self) -> Option<PathBuf> {
        let prev_path = self.image_list.previous()?.to_path_buf();
        self.select(prev_path.clone());
        Some(prev_path)
    }

    /// Jumps to a uniformly random image and returns its path.
    ///
    /// Returns `None` if there are no images in the list. The same image may
    /// be selected twice in a row.
    pub fn navigate_random(&mut self) -> Option<PathBuf> {
        if self.image_list.is_empty() {
            return None;
        }
        let index = rand::random_range(0..self.image_list.len());
        let path = self.image_list.get(index)?.to_path_buf();
        self.select(path.clone());
        Some(path)
    }

    fn select(&mut self, path: PathBuf) {
        self.image_list.set_current(&path);
        self.current_image_path = Some(path);
    }

    /// Returns the total number of images in the list.
    pub fn len(&self) -> usize {
        self.image_list.len()
    }

    /// Checks if the image list is empty.
    pub fn is_empty(&self) -> bool {
        self.image_list.is_empty()
    }

    /// Returns the current index in the image list, if set.
    pub fn current_index(&self) -> Option<usize> {
        self.image_list.current_index()
    }
}

impl Default for ImageNavigator {
    fn default() -> Self {
        Self::new()
    }
}
