// SPDX-License-Identifier: MPL-2.0
//! Software rasterizer for the composition.
//!
//! Flattens the background photo (or the bundled placeholder) and the
//! optional sticker overlay into an RGBA buffer, reproducing what the
//! screen shows: photo letterbox-fit over the app background color, sticker
//! anchored in the lower third. SVG artwork is rendered through resvg onto
//! a tiny-skia pixmap, the same way the window icon is produced.

use crate::application::port::raster::{
    Composition, RasterImage, RasterParams, Rasterizer, COMPOSITION_HEIGHT, COMPOSITION_WIDTH,
};
use crate::error::{Error, Result};
use crate::stickers;
use image_rs::imageops::{self, FilterType};
use image_rs::{Rgba, RgbaImage};
use resvg::usvg;

/// App background color (#25292e), visible where the photo letterboxes.
const CANVAS_COLOR: Rgba<u8> = Rgba([0x25, 0x29, 0x2e, 0xff]);

/// Sticker edge relative to the composition height (the 96-of-440 overlay).
const STICKER_HEIGHT_FRACTION: f32 = 96.0 / 440.0;

/// Vertical anchor of the sticker center, as a fraction of the height.
const STICKER_CENTER_Y: f32 = 0.70;

#[derive(Debug, Default)]
pub struct SoftwareRasterizer;

impl SoftwareRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for SoftwareRasterizer {
    fn rasterize(&self, composition: &Composition, params: &RasterParams) -> Result<RasterImage> {
        let height = params.height.max(1);
        // A view capture constrains only the height; the width follows from
        // the composition frame's own aspect.
        let width = params.width.unwrap_or_else(|| implied_width(height)).max(1);

        let mut canvas = RgbaImage::from_pixel(width, height, CANVAS_COLOR);

        match &composition.background {
            Some(path) => {
                let photo = super::photo::load_bounded(path)?;
                blit_contained(&mut canvas, &photo);
            }
            None => {
                let placeholder = render_svg_cover(stickers::placeholder_svg(), width, height)?;
                imageops::overlay(&mut canvas, &placeholder, 0, 0);
            }
        }

        if let Some(id) = composition.sticker {
            let edge = ((height as f32) * STICKER_HEIGHT_FRACTION).round().max(1.0) as u32;
            let sticker = render_svg_contained(stickers::get(id).svg_bytes(), edge, edge)?;
            let x = (i64::from(width) - i64::from(sticker.width())) / 2;
            let y = ((height as f32) * STICKER_CENTER_Y - (sticker.height() as f32) / 2.0)
                .round() as i64;
            imageops::overlay(&mut canvas, &sticker, x, y);
        }

        Ok(RasterImage {
            width,
            height,
            pixels: canvas.into_raw(),
        })
    }
}

/// Width implied by the composition frame aspect for a given height.
fn implied_width(height: u32) -> u32 {
    let scaled = u64::from(height) * u64::from(COMPOSITION_WIDTH);
    ((scaled + u64::from(COMPOSITION_HEIGHT) / 2) / u64::from(COMPOSITION_HEIGHT)) as u32
}

/// Scales `photo` to fit entirely inside the canvas and draws it centered.
fn blit_contained(canvas: &mut RgbaImage, photo: &RgbaImage) {
    let (cw, ch) = canvas.dimensions();
    let (pw, ph) = photo.dimensions();
    if pw == 0 || ph == 0 {
        return;
    }
    let scale = (cw as f32 / pw as f32).min(ch as f32 / ph as f32);
    let tw = ((pw as f32 * scale).round() as u32).max(1);
    let th = ((ph as f32 * scale).round() as u32).max(1);
    let resized = imageops::resize(photo, tw, th, FilterType::Triangle);
    let x = (i64::from(cw) - i64::from(tw)) / 2;
    let y = (i64::from(ch) - i64::from(th)) / 2;
    imageops::overlay(canvas, &resized, x, y);
}

/// Renders SVG data scaled to fit inside `width`×`height` (letterboxed).
fn render_svg_contained(data: &[u8], width: u32, height: u32) -> Result<RgbaImage> {
    render_svg(data, width, height, ScaleMode::Contain)
}

/// Renders SVG data scaled to cover `width`×`height` (cropped, centered).
fn render_svg_cover(data: &[u8], width: u32, height: u32) -> Result<RgbaImage> {
    render_svg(data, width, height, ScaleMode::Cover)
}

#[derive(Clone, Copy)]
enum ScaleMode {
    Contain,
    Cover,
}

fn render_svg(data: &[u8], width: u32, height: u32, mode: ScaleMode) -> Result<RgbaImage> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| Error::Raster(format!("invalid SVG: {e}")))?;

    let size = tree.size();
    let sx = width as f32 / size.width();
    let sy = height as f32 / size.height();
    let scale = match mode {
        ScaleMode::Contain => sx.min(sy),
        ScaleMode::Cover => sx.max(sy),
    };
    let tx = (width as f32 - size.width() * scale) / 2.0;
    let ty = (height as f32 - size.height() * scale) / 2.0;
    let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(tx, ty);

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Raster(format!("cannot allocate {width}x{height} pixmap")))?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap_to_rgba(&pixmap)
}

/// Converts a premultiplied tiny-skia pixmap into a straight-alpha image.
fn pixmap_to_rgba(pixmap: &tiny_skia::Pixmap) -> Result<RgbaImage> {
    let mut data = Vec::with_capacity((pixmap.width() * pixmap.height() * 4) as usize);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .ok_or_else(|| Error::Raster("pixmap buffer size mismatch".into()))
}
