// SPDX-License-Identifier: MPL-2.0
//! Capability ports for the composition screen's external collaborators.
//!
//! Each port follows the same shape: a small trait describing exactly what
//! the screen needs, implemented by an adapter in `infrastructure` and by
//! mocks in tests. The screen never reaches for ambient platform state
//! directly.

pub mod permission;
pub mod raster;
pub mod sink;

pub use permission::{PermissionGate, PermissionStatus};
pub use raster::{Composition, RasterImage, RasterParams, Rasterizer};
pub use sink::{DownloadSink, MediaLibrary};
