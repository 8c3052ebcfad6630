// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting image files.
//!
//! This module scans a directory (or a whole tree) for supported image
//! formats, filters them, and sorts them according to the configured sort
//! order.

use crate::config::SortOrder;
use crate::error::Result;
use crate::media;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Represents a list of image files with navigation capabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageList {
    image_files: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl ImageList {
    /// Creates a new empty ImageList.
    pub fn new() -> Self {
        Self {
            image_files: Vec::new(),
            current_index: None,
        }
    }

    /// Scans the directory containing `current_file` for supported images
    /// and sorts them. If the current file does not appear in the scan
    /// result the scan still succeeds but `current_index` will be `None`.
    pub fn scan_directory(current_file: &Path, sort_order: SortOrder) -> Result<Self> {
        let parent = current_file
            .parent()
            .ok_or_else(|| crate::error::Error::Io("No parent directory".into()))?;

        let mut image_files = Vec::new();

        for entry in std::fs::read_dir(parent)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && media::is_supported_image(&path) {
                image_files.push(path);
            }
        }

        sort_image_files(&mut image_files, sort_order);

        let current_index = image_files.iter().position(|p| p == current_file);

        Ok(Self {
            image_files,
            current_index,
        })
    }

    /// Recursively scans `root` for supported images and sorts them. The
    /// first file (if any) becomes current. Unreadable subdirectories are
    /// skipped rather than failing the whole scan.
    pub fn scan_tree(root: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut image_files = Vec::new();

        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if entry.file_type().is_file() && media::is_supported_image(path) {
                image_files.push(path.to_path_buf());
            }
        }

        sort_image_files(&mut image_files, sort_order);

        let current_index = if image_files.is_empty() { None } else { Some(0) };

        Ok(Self {
            image_files,
            current_index,
        })
    }

    /// Returns the current image path.
    pub fn current(&self) -> Option<&Path> {
        self.current_index
            .and_then(|idx| self.image_files.get(idx))
            .map(|p| p.as_path())
    }

    /// Returns the next image path, wrapping around to the start.
    pub fn next(&self) -> Option<&Path> {
        if self.image_files.is_empty() {
            return None;
        }
        let next_index = match self.current_index {
            Some(idx) => (idx + 1) % self.image_files.len(),
            None => 0,
        };
        self.image_files.get(next_index).map(|p| p.as_path())
    }

    /// Returns the previous image path, wrapping around to the end.
    pub fn previous(&self) -> Option<&Path> {
        if self.image_files.is_empty() {
            return None;
        }
        let len = self.image_files.len();
        let prev_index = match self.current_index {
            Some(idx) => (idx + len - 1) % len,
            None => len - 1,
        };
        self.image_files.get(prev_index).map(|p| p.as_path())
    }

    /// Returns the total number of image files in the list.
    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    /// Checks if the image list is empty.
    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }

    /// Updates the current index to the given path if it exists in the list.
    pub fn set_current(&mut self, path: &Path) {
        self.current_index = self.image_files.iter().position(|p| p == path);
    }

    /// Returns the current index if set.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.image_files.get(index).map(|p| p.as_path())
    }
}

impl Default for ImageList {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorts image file paths according to the specified sort order.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_finds_all_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_test_image(temp_dir.path(), "a.jpg");
        let _img2 = create_test_image(temp_dir.path(), "b.png");
        let _img3 = create_test_image(temp_dir.path(), "c.gif");
        create_test_image(temp_dir.path(), "not_image.txt");

        let list = ImageList::scan_directory(&img1, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.len(), 3);
        assert_eq!(list.current(), Some(img1.as_path()));
    }

    #[test]
    fn scan_directory_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_test_image(temp_dir.path(), "c.jpg");
        let img_a = create_test_image(temp_dir.path(), "a.jpg");
        let img_b = create_test_image(temp_dir.path(), "b.jpg");

        let list = ImageList::scan_directory(&img_a, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.get(0), Some(img_a.as_path()));
        assert_eq!(list.get(1), Some(img_b.as_path()));
        assert_eq!(list.get(2), Some(img_c.as_path()));
    }

    #[test]
    fn scan_directory_without_current_file_still_succeeds() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        let missing = temp_dir.path().join("deleted.jpg");

        let list = ImageList::scan_directory(&missing, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.len(), 1);
        assert_eq!(list.current_index(), None);
    }

    #[test]
    fn scan_tree_recurses_into_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("deep").join("nested");
        fs::create_dir_all(&nested).expect("failed to create nested dirs");
        let top = create_test_image(temp_dir.path(), "top.jpg");
        create_test_image(&nested, "bottom.png");
        create_test_image(&nested, "ignored.txt");

        let list = ImageList::scan_tree(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan tree");

        assert_eq!(list.len(), 2);
        assert_eq!(list.current_index(), Some(0));
        // "bottom.png" sorts before "top.jpg" by file name.
        assert_eq!(list.get(1), Some(top.as_path()));
    }

    #[test]
    fn scan_tree_of_empty_directory_is_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let list = ImageList::scan_tree(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan tree");

        assert!(list.is_empty());
        assert_eq!(list.current_index(), None);
    }

    #[test]
    fn next_wraps_around_to_first() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_test_image(temp_dir.path(), "a.jpg");
        let _img2 = create_test_image(temp_dir.path(), "b.jpg");
        let img3 = create_test_image(temp_dir.path(), "c.jpg");

        let list = ImageList::scan_directory(&img3, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.current(), Some(img3.as_path()));
        assert_eq!(list.next(), Some(img1.as_path()));
    }

    #[test]
    fn previous_wraps_around_to_last() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_test_image(temp_dir.path(), "a.jpg");
        let _img2 = create_test_image(temp_dir.path(), "b.jpg");
        let img3 = create_test_image(temp_dir.path(), "c.jpg");

        let list = ImageList::scan_directory(&img1, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.current(), Some(img1.as_path()));
        assert_eq!(list.previous(), Some(img3.as_path()));
    }

    #[test]
    fn empty_list_navigation_returns_none() {
        let list = ImageList::new();
        assert!(list.current().is_none());
        assert!(list.next().is_none());
        assert!(list.previous().is_none());
    }

    #[test]
    fn single_image_navigation_returns_same_image() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_test_image(temp_dir.path(), "only.jpg");

        let list = ImageList::scan_directory(&img1, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.current(), Some(img1.as_path()));
        assert_eq!(list.next(), Some(img1.as_path()));
        assert_eq!(list.previous(), Some(img1.as_path()));
    }

    #[test]
    fn set_current_updates_the_index() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_test_image(temp_dir.path(), "a.jpg");
        let img2 = create_test_image(temp_dir.path(), "b.jpg");

        let mut list = ImageList::scan_directory(&img1, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        list.set_current(&img2);
        assert_eq!(list.current_index(), Some(1));
        assert_eq!(list.current(), Some(img2.as_path()));
    }
}
