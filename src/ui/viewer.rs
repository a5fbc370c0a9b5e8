// SPDX-License-Identifier: MPL-2.0
//! The composition frame: background photo (or placeholder) with the
//! optional sticker overlay, clipped to a fixed 320x440 viewport.
//!
//! Pure display; the viewer emits no messages of its own.

use crate::application::port::raster::{COMPOSITION_HEIGHT, COMPOSITION_WIDTH};
use crate::stickers::{self, StickerId};
use crate::ui::design_tokens::sizing;
use crate::ui::styles;
use iced::widget::{image, svg, Container, Stack};
use iced::{alignment, ContentFit, Element, Length, Padding};
use std::path::Path;

/// Bottom padding that anchors the sticker's center at 70% of the frame
/// height: 0.30 * 440 - 96 / 2.
const STICKER_BOTTOM_PADDING: f32 =
    0.30 * COMPOSITION_HEIGHT as f32 - sizing::STICKER_OVERLAY / 2.0;

/// Renders the composed view. `preview` is the bounded decode of the
/// selected photo; the raw path is only used when no preview exists.
pub fn view<'a, M: 'a>(
    selected: Option<&Path>,
    preview: Option<&image::Handle>,
    sticker: Option<StickerId>,
) -> Element<'a, M> {
    let background: Element<'a, M> = match (preview, selected) {
        (Some(handle), _) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (None, Some(path)) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (None, None) => svg(svg::Handle::from_memory(stickers::placeholder_svg()))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let mut layers = Stack::new().push(background);

    if let Some(id) = sticker {
        let overlay = svg(svg::Handle::from_memory(stickers::get(id).svg_bytes()))
            .width(Length::Fixed(sizing::STICKER_OVERLAY))
            .height(Length::Fixed(sizing::STICKER_OVERLAY));
        layers = layers.push(
            Container::new(overlay)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Bottom)
                .padding(Padding {
                    bottom: STICKER_BOTTOM_PADDING,
                    ..Padding::ZERO
                }),
        );
    }

    Container::new(layers)
        .width(Length::Fixed(COMPOSITION_WIDTH as f32))
        .height(Length::Fixed(COMPOSITION_HEIGHT as f32))
        .clip(true)
        .style(styles::container::frame)
        .into()
}
