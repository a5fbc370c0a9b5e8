// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the composition screen.
//!
//! The `App` struct wires the session state to the external collaborators
//! (file dialog, permission gate, rasterizer, export strategy) and
//! translates messages into side effects. Collaborators are injected as
//! trait objects so tests can substitute them.

mod message;
pub mod session;
mod update;
mod view;

pub use message::{Flags, Message, PickedPhoto};
pub use session::{Phase, Session};

use crate::application::port::permission::{PermissionGate, PermissionStatus};
use crate::application::port::raster::Rasterizer;
use crate::config;
use crate::export::{self, ExportStrategy};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{LibraryPermissions, PicturesLibrary, SoftwareRasterizer};
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    pub(crate) session: Session,
    /// Bounded decode of the selected photo, cached for the viewer.
    pub(crate) preview: Option<iced::widget::image::Handle>,
    pub(crate) notifications: notifications::Manager,
    pub(crate) rasterizer: Arc<dyn Rasterizer>,
    pub(crate) exporter: Arc<dyn ExportStrategy>,
    pub(crate) permissions: Box<dyn PermissionGate>,
    /// Single-flight guard: a second export is ignored while one runs.
    pub(crate) export_in_flight: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("export_in_flight", &self.export_in_flight)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config and flags, wires the
    /// configured export strategy, and eagerly requests the media-library
    /// permission when it is still undetermined.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let target = config.export_target.unwrap_or_default();
        let exporter = export::strategy_for(target);

        let mut permissions: Box<dyn PermissionGate> =
            Box::new(LibraryPermissions::new(PicturesLibrary::default_dir()));
        if permissions.status() == PermissionStatus::Undetermined {
            // Asked once, eagerly; the export path later proceeds no matter
            // how this settled.
            permissions.request();
        }

        let mut session = Session::new();
        let mut preview = None;
        if let Some(path) = flags.image_path {
            preview = update::load_preview(&path);
            session.set_selected_image(path);
        }

        let app = App {
            i18n,
            session,
            preview,
            notifications: notifications::Manager::new(),
            rasterizer: Arc::new(SoftwareRasterizer::new()),
            exporter,
            permissions,
            export_in_flight: false,
        };
        (app, Task::none())
    }

    /// Media-library permission as settled at startup. Informational only;
    /// the export path proceeds regardless and lets the sink report errors.
    pub fn permission_status(&self) -> PermissionStatus {
        self.permissions.status()
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Ticks only while toasts are on screen.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.notifications.has_notifications() {
            iced::time::every(Duration::from_millis(250)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}
