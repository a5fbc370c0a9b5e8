// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: the composition frame over a dark backdrop, with the
//! footer or options row below it, plus the sticker picker sheet and toast
//! overlays stacked on top.

use super::{App, Message, Phase};
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::Toast;
use crate::ui::styles;
use crate::ui::{controls, sticker_picker, viewer};
use iced::widget::{column, container, Stack};
use iced::{alignment, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let frame = viewer::view(
        app.session.selected_image(),
        app.preview.as_ref(),
        app.session.chosen_sticker(),
    );

    let actions: Element<'_, Message> = match app.session.phase() {
        Phase::Empty => controls::footer(&app.i18n),
        Phase::Editing | Phase::EditingPicking => controls::options_row(&app.i18n),
    };

    let content = column![frame, actions]
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center);

    let base = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::backdrop);

    let mut layers = Stack::new().push(base);

    if app.session.picker_open() {
        let sheet = container(sticker_picker::view(&app.i18n).map(Message::Picker))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Bottom);
        layers = layers.push(sheet);
    }

    if app.notifications.has_notifications() {
        layers = layers.push(
            Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification),
        );
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}
