// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message, PickedPhoto};
use crate::error::Error;
use crate::export::ExportOutcome;
use crate::infrastructure::photo;
use crate::ui::notifications::Notification;
use crate::ui::sticker_picker;
use iced::widget::image;
use iced::Task;
use std::path::Path;

/// Handles a single message, mutating state and producing follow-up tasks.
pub fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ChoosePhoto => choose_photo(app),
        Message::PhotoPicked(result) => {
            photo_picked(app, result);
            Task::none()
        }
        Message::ConfirmPhoto => {
            app.session.confirm();
            Task::none()
        }
        Message::AddSticker => {
            app.session.open_picker();
            Task::none()
        }
        Message::Picker(picker_message) => {
            match picker_message {
                sticker_picker::Message::Select(id) => app.session.choose_sticker(id),
                sticker_picker::Message::Close => app.session.close_picker(),
            }
            Task::none()
        }
        Message::Reset => {
            app.session.reset();
            app.preview = None;
            Task::none()
        }
        Message::Export => export(app),
        Message::ExportFinished(result) => {
            export_finished(app, result);
            Task::none()
        }
        Message::Notification(notification_message) => {
            app.notifications.handle_message(&notification_message);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
    }
}

/// Opens the native file dialog restricted to raster image formats. The
/// picked photo is decoded off the executor thread into a bounded preview.
fn choose_photo(app: &App) -> Task<Message> {
    let title = app.i18n.tr("dialog-pick-image-title");
    let filter_name = app.i18n.tr("dialog-image-filter");

    Task::perform(
        async move {
            let path = rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                .pick_file()
                .await?
                .path()
                .to_path_buf();
            let preview = {
                let path = path.clone();
                tokio::task::spawn_blocking(move || load_preview(&path))
                    .await
                    .ok()
                    .flatten()
            };
            Some(PickedPhoto { path, preview })
        },
        Message::PhotoPicked,
    )
}

/// Decodes the bounded preview shown by the viewer.
pub(crate) fn load_preview(path: &Path) -> Option<image::Handle> {
    match photo::load_bounded(path) {
        Ok(decoded) => {
            let (width, height) = decoded.dimensions();
            Some(image::Handle::from_rgba(width, height, decoded.into_raw()))
        }
        Err(error) => {
            eprintln!("Failed to decode picked photo: {error}");
            None
        }
    }
}

fn photo_picked(app: &mut App, result: Option<PickedPhoto>) {
    match result {
        Some(picked) => {
            app.preview = picked.preview;
            app.session.set_selected_image(picked.path);
        }
        // Cancelling leaves the session exactly as it was.
        None => app
            .notifications
            .push(Notification::warning("notification-pick-cancelled")),
    }
}

/// Kicks off the configured export strategy on a background task.
///
/// Ignored outside the editing phase and while a previous export is still
/// running. The permission gate is not consulted here; it was settled at
/// startup and the sink reports its own failures.
fn export(app: &mut App) -> Task<Message> {
    if !app.session.options_visible() || app.export_in_flight {
        return Task::none();
    }
    app.export_in_flight = true;

    let rasterizer = app.rasterizer.clone();
    let exporter = app.exporter.clone();
    let composition = app.session.composition();

    // Rasterizing, encoding and writing are all blocking work; keep them
    // off the executor thread.
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                exporter.export(rasterizer.as_ref(), &composition)
            })
            .await
            .map_err(|error| Error::Export(format!("export task aborted: {error}")))?
        },
        Message::ExportFinished,
    )
}

fn export_finished(app: &mut App, result: Result<ExportOutcome, Error>) {
    app.export_in_flight = false;
    match result {
        Ok(_outcome) => {
            app.notifications
                .push(Notification::success("notification-export-saved"));
        }
        Err(error) => {
            // Absorbed: the session keeps its composition so the user can
            // retry, and no success toast appears.
            eprintln!("Export failed: {error}");
        }
    }
}
