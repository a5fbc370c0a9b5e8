// SPDX-License-Identifier: MPL-2.0
//! Session state for the composition screen.
//!
//! Four fields, mutated only by the owning screen's handlers, never by
//! collaborators. The screen moves through three phases:
//!
//! `Empty` (no photo confirmed) → `Editing` (options visible) →
//! `Editing+Picking` (sticker overlay open).
//!
//! Invariant: the picker can only be open while the editing options are
//! visible. All mutators preserve it; `reset` restores every field in one
//! synchronous step so no partial-reset state is observable.

use crate::application::port::raster::Composition;
use crate::stickers::StickerId;
use std::path::{Path, PathBuf};

/// Where the screen currently is in its interaction flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Editing,
    EditingPicking,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    selected_image: Option<PathBuf>,
    options_visible: bool,
    chosen_sticker: Option<StickerId>,
    picker_open: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (self.options_visible, self.picker_open) {
            (false, _) => Phase::Empty,
            (true, false) => Phase::Editing,
            (true, true) => Phase::EditingPicking,
        }
    }

    pub fn selected_image(&self) -> Option<&Path> {
        self.selected_image.as_deref()
    }

    pub fn options_visible(&self) -> bool {
        self.options_visible
    }

    pub fn chosen_sticker(&self) -> Option<StickerId> {
        self.chosen_sticker
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    /// Records a picked photo. The screen stays in `Empty` until the user
    /// confirms; picking alone does not reveal the editing options.
    pub fn set_selected_image(&mut self, path: PathBuf) {
        self.selected_image = Some(path);
    }

    /// Confirms the current photo (or the placeholder) and reveals the
    /// editing options.
    pub fn confirm(&mut self) {
        self.options_visible = true;
    }

    /// Opens the sticker picker. Ignored while the options are hidden,
    /// which is what keeps `picker_open ⇒ options_visible` true.
    pub fn open_picker(&mut self) {
        if self.options_visible {
            self.picker_open = true;
        }
    }

    /// Chooses a sticker and closes the picker.
    pub fn choose_sticker(&mut self, id: StickerId) {
        self.chosen_sticker = Some(id);
        self.picker_open = false;
    }

    /// Closes the picker without touching the chosen sticker.
    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }

    /// Returns every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The current composition, as the export pipeline sees it.
    pub fn composition(&self) -> Composition {
        Composition {
            background: self.selected_image.clone(),
            sticker: self.chosen_sticker,
        }
    }
}
