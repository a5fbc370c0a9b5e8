// SPDX-License-Identifier: MPL-2.0
//! Shared widget style functions.

use crate::ui::design_tokens::{border, palette, radius};
use iced::{Border, Color, Theme};

pub mod button {
    use super::*;
    use iced::widget::button::{Status, Style};

    /// Primary call-to-action: white fill, yellow outline, dark label.
    pub fn primary(_theme: &Theme, status: Status) -> Style {
        let background = match status {
            Status::Hovered | Status::Pressed => Color {
                a: 0.9,
                ..palette::WHITE
            },
            _ => palette::WHITE,
        };
        Style {
            background: Some(iced::Background::Color(background)),
            text_color: palette::APP_BACKGROUND,
            border: Border {
                color: palette::ACCENT,
                width: border::WIDTH_LG,
                radius: radius::MD.into(),
            },
            ..Style::default()
        }
    }

    /// Secondary action: no fill, white label.
    pub fn plain(_theme: &Theme, status: Status) -> Style {
        let background = match status {
            Status::Hovered | Status::Pressed => Some(iced::Background::Color(Color {
                a: 0.1,
                ..palette::WHITE
            })),
            _ => None,
        };
        Style {
            background,
            text_color: palette::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..Style::default()
        }
    }

    /// The circular add-sticker button: white ring, white fill on hover.
    pub fn circle(_theme: &Theme, status: Status) -> Style {
        let (background, text_color) = match status {
            Status::Hovered | Status::Pressed => (
                Some(iced::Background::Color(palette::WHITE)),
                palette::APP_BACKGROUND,
            ),
            _ => (None, palette::WHITE),
        };
        Style {
            background,
            text_color,
            border: Border {
                color: palette::ACCENT,
                width: border::WIDTH_LG,
                radius: radius::CIRCLE.into(),
            },
            ..Style::default()
        }
    }

    /// Borderless thumbnail button in the sticker picker.
    pub fn thumbnail(_theme: &Theme, status: Status) -> Style {
        let background = match status {
            Status::Hovered | Status::Pressed => Some(iced::Background::Color(Color {
                a: 0.15,
                ..palette::WHITE
            })),
            _ => None,
        };
        Style {
            background,
            text_color: palette::WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..Style::default()
        }
    }
}

pub mod container {
    use super::*;
    use iced::widget::container::Style;

    /// The 320x440 composition frame.
    pub fn frame(_theme: &Theme) -> Style {
        Style {
            background: Some(iced::Background::Color(palette::APP_BACKGROUND)),
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Style::default()
        }
    }

    /// The sticker picker bottom sheet.
    pub fn sheet(_theme: &Theme) -> Style {
        Style {
            background: Some(iced::Background::Color(palette::SHEET)),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            text_color: Some(palette::WHITE),
            ..Style::default()
        }
    }

    /// The application backdrop.
    pub fn backdrop(_theme: &Theme) -> Style {
        Style {
            background: Some(iced::Background::Color(palette::APP_BACKGROUND)),
            text_color: Some(palette::WHITE),
            ..Style::default()
        }
    }
}
