// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::export::ExportOutcome;
use crate::ui::notifications;
use crate::ui::sticker_picker;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the system file dialog to pick a photo.
    ChoosePhoto,
    /// Result from the photo dialog; `None` means the user cancelled.
    PhotoPicked(Option<PickedPhoto>),
    /// Confirm the current photo (or the placeholder) and start editing.
    ConfirmPhoto,
    /// Open the sticker picker overlay.
    AddSticker,
    /// Sticker picker interactions.
    Picker(sticker_picker::Message),
    /// Clear the session back to its initial state.
    Reset,
    /// Run the export pipeline on the current composition.
    Export,
    /// Export pipeline finished (either path).
    ExportFinished(Result<ExportOutcome, Error>),
    Notification(notifications::Message),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// A photo picked through the dialog.
#[derive(Debug, Clone)]
pub struct PickedPhoto {
    pub path: PathBuf,
    /// Pre-decoded preview, bounded to the maximum photo edge; `None` when
    /// decoding failed (the viewer then falls back to the raw path).
    pub preview: Option<iced::widget::image::Handle>,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional photo path to preload on startup.
    pub image_path: Option<PathBuf>,
}
