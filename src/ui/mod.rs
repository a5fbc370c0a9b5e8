// SPDX-License-Identifier: MPL-2.0
//! UI components for the composition screen.

pub mod controls;
pub mod design_tokens;
pub mod notifications;
pub mod sticker_picker;
pub mod styles;
pub mod viewer;
