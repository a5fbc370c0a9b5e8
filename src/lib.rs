// SPDX-License-Identifier: MPL-2.0
//! Sticker Smash is a small photo decoration app: pick a photo, drop an
//! emoji sticker on it, and save the composition as an image.
//!
//! The crate is split into a UI layer built on Iced, an application layer
//! that owns the session state machine and the ports to the outside world,
//! and an infrastructure layer that implements those ports with a software
//! rasterizer and the local filesystem.

pub mod app;
pub mod application;
pub mod config;
pub mod error;
pub mod export;
pub mod i18n;
mod icon;
pub mod infrastructure;
pub mod stickers;
pub mod ui;
