// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Non-intrusive toasts inform the user about actions ("no selection made",
//! "saved") without blocking interaction. Messages carry i18n keys that are
//! resolved at render time.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, Severity};
pub use toast::Toast;
