// SPDX-License-Identifier: MPL-2.0
//! The two control sets below the composition frame.
//!
//! `Empty` phase shows the footer (choose / use this photo); `Editing`
//! shows the options row (reset, add sticker, save). Which one renders is
//! decided by the caller from the session phase.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Footer shown before a photo is confirmed.
pub fn footer(i18n: &I18n) -> Element<'_, Message> {
    let choose = button(Text::new(i18n.tr("footer-choose-photo")))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary)
        .on_press(Message::ChoosePhoto);

    let use_photo = button(Text::new(i18n.tr("footer-use-photo")))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::plain)
        .on_press(Message::ConfirmPhoto);

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(choose)
        .push(use_photo)
        .into()
}

/// Options row shown once editing is active.
pub fn options_row(i18n: &I18n) -> Element<'_, Message> {
    let reset = labeled_action(i18n.tr("options-reset"), Message::Reset);

    let add_sticker = button(
        Container::new(Text::new("+").size(typography::CIRCLE_GLYPH))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(sizing::CIRCLE_BUTTON))
    .height(Length::Fixed(sizing::CIRCLE_BUTTON))
    .style(styles::button::circle)
    .on_press(Message::AddSticker);

    let save = labeled_action(i18n.tr("options-save"), Message::Export);

    Row::new()
        .spacing(spacing::XL)
        .align_y(alignment::Vertical::Center)
        .push(reset)
        .push(add_sticker)
        .push(save)
        .into()
}

fn labeled_action(label: String, message: Message) -> Element<'static, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::plain)
        .on_press(message)
        .into()
}
