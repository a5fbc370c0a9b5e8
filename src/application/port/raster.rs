// SPDX-License-Identifier: MPL-2.0
//! Rasterization port: flattening the on-screen composition into pixels.

use crate::error::Result;
use crate::stickers::StickerId;
use std::path::PathBuf;

/// Logical size of the on-screen composition frame. Exports are fixed to
/// this aspect; source photos are letterbox-fit inside it, never the other
/// way around.
pub const COMPOSITION_WIDTH: u32 = 320;
pub const COMPOSITION_HEIGHT: u32 = 440;

/// What is currently displayed: a background photo (or the placeholder when
/// `None`) plus zero-or-one overlay sticker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Composition {
    pub background: Option<PathBuf>,
    pub sticker: Option<StickerId>,
}

/// Capture request parameters.
///
/// `width` of `None` means "implied by the composition's own layout", the
/// way a native view capture constrains only the height. `quality` is the
/// encoder quality the caller intends for the resulting pixels; it is part
/// of the request so adapters that encode in one step (the browser path)
/// receive it with the dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterParams {
    pub width: Option<u32>,
    pub height: u32,
    pub quality: f32,
}

/// A flattened composition: tightly packed RGBA8 pixels.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Converts a live composition into a raster image.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, composition: &Composition, params: &RasterParams) -> Result<RasterImage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_defaults_to_placeholder_and_no_sticker() {
        let composition = Composition::default();
        assert!(composition.background.is_none());
        assert!(composition.sticker.is_none());
    }
}
