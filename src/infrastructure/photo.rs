// SPDX-License-Identifier: MPL-2.0
//! Bounded photo loading.
//!
//! Picked photos can be arbitrarily large; both the on-screen preview and
//! the compositor only ever need the composition frame's worth of detail.
//! Photos are therefore clamped to a maximum edge length right after
//! decode, which keeps memory flat no matter what the user picks.

use crate::error::Result;
use image_rs::RgbaImage;
use std::path::Path;

/// Longest edge a loaded photo may have. Larger inputs are downscaled,
/// preserving aspect ratio.
pub const MAX_PHOTO_EDGE: u32 = 2048;

/// Decodes the photo at `path`, downscaling so that neither edge exceeds
/// [`MAX_PHOTO_EDGE`].
pub fn load_bounded(path: &Path) -> Result<RgbaImage> {
    let image = image_rs::open(path)?;
    let bounded = if image.width().max(image.height()) > MAX_PHOTO_EDGE {
        image.thumbnail(MAX_PHOTO_EDGE, MAX_PHOTO_EDGE)
    } else {
        image
    };
    Ok(bounded.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([200, 100, 50, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn oversized_photo_is_clamped_to_the_maximum_edge() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huge.png");
        write_png(&path, 3000, 1500);

        let loaded = load_bounded(&path).unwrap();
        assert!(loaded.width().max(loaded.height()) <= MAX_PHOTO_EDGE);
        assert_eq!((loaded.width(), loaded.height()), (2048, 1024));
    }

    #[test]
    fn small_photo_keeps_its_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("small.png");
        write_png(&path, 100, 50);

        let loaded = load_bounded(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (100, 50));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_bounded(Path::new("/no/such/photo.png")).is_err());
    }
}
