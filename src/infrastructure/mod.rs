// SPDX-License-Identifier: MPL-2.0
//! Concrete adapters behind the application ports.
//!
//! Everything here touches the real platform: the filesystem, the software
//! rasterizer, and the user's Pictures/Downloads directories.

pub mod compositor;
pub mod downloads;
pub mod library;
pub mod permissions;
pub mod photo;

pub use compositor::SoftwareRasterizer;
pub use downloads::DownloadsFolder;
pub use library::PicturesLibrary;
pub use permissions::LibraryPermissions;
