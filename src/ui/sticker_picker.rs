// SPDX-License-Identifier: MPL-2.0
//! Sticker selection overlay: a bottom sheet listing the fixed catalog.
//!
//! Whether the sheet is shown is session state owned by the screen; this
//! module only renders it and reports the user's choice upward.

use crate::i18n::fluent::I18n;
use crate::stickers::{self, StickerId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, svg, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the picker, forwarded to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// An entry was selected; the screen records it and closes the sheet.
    Select(StickerId),
    /// The sheet was closed without selecting.
    Close,
}

/// Renders the bottom sheet.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("picker-title")).size(typography::TITLE);

    let close = button(Text::new(i18n.tr("picker-close")).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::plain)
        .on_press(Message::Close);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Container::new(title).width(Length::Fill))
        .push(close);

    let mut entries = Row::new().spacing(spacing::MD);
    for (id, sticker) in stickers::catalog() {
        let thumb = svg(svg::Handle::from_memory(sticker.svg_bytes()))
            .width(Length::Fixed(sizing::PICKER_THUMB))
            .height(Length::Fixed(sizing::PICKER_THUMB));
        entries = entries.push(
            button(thumb)
                .padding(spacing::XS)
                .style(styles::button::thumbnail)
                .on_press(Message::Select(id)),
        );
    }

    let sheet = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(entries);

    Container::new(sheet)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PICKER_SHEET_HEIGHT))
        .padding(spacing::LG)
        .style(styles::container::sheet)
        .into()
}
