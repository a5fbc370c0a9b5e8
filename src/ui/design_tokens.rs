// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, spacing, sizing, typography.
//!
//! The palette keeps the original app's look: near-black background
//! (#25292e), yellow accent (#ffd33d), slate sheet for the picker overlay.

use iced::Color;

pub mod palette {
    use super::Color;

    /// App background, #25292e.
    pub const APP_BACKGROUND: Color = Color::from_rgb(0.145, 0.161, 0.180);
    /// Accent yellow, #ffd33d.
    pub const ACCENT: Color = Color::from_rgb(1.0, 0.827, 0.239);
    /// Bottom-sheet background, #464c55.
    pub const SHEET: Color = Color::from_rgb(0.275, 0.298, 0.333);
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic colors (toasts)
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// Size of the sticker overlay inside the 440-high composition frame.
    pub const STICKER_OVERLAY: f32 = 96.0;
    /// Edge of a sticker thumbnail in the picker grid.
    pub const PICKER_THUMB: f32 = 64.0;
    /// Height of the sticker picker bottom sheet.
    pub const PICKER_SHEET_HEIGHT: f32 = 200.0;
    /// Diameter of the circular add-sticker button.
    pub const CIRCLE_BUTTON: f32 = 84.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const TITLE: f32 = 16.0;
    pub const CIRCLE_GLYPH: f32 = 38.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 10.0;
    /// Half of `sizing::CIRCLE_BUTTON`, producing a circle.
    pub const CIRCLE: f32 = 42.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    pub const WIDTH_LG: f32 = 4.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_colors_are_distinct() {
        let colors = [
            palette::SUCCESS_500,
            palette::INFO_500,
            palette::WARNING_500,
            palette::ERROR_500,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn circle_radius_matches_button_size() {
        assert_eq!(radius::CIRCLE * 2.0, sizing::CIRCLE_BUTTON);
    }
}
