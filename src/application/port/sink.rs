// SPDX-License-Identifier: MPL-2.0
//! Persistence ports for exported compositions.
//!
//! Two delivery mechanisms exist, mirroring the two platforms the original
//! application ran on. Exactly one is wired in at startup, chosen by the
//! configured export target.

use crate::error::Result;
use std::path::PathBuf;

/// Saves an encoded image into the device's media library.
pub trait MediaLibrary: Send + Sync {
    /// Persists `bytes` under `file_name` and returns the stored path.
    fn save_to_library(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Browser-style download trigger.
///
/// Receives a `data:` URI rather than raw bytes, matching the DOM-to-image
/// contract this port was modeled on. No success signal is observed by the
/// application beyond the returned `Result`.
pub trait DownloadSink: Send + Sync {
    fn download(&self, file_name: &str, data_uri: &str) -> Result<()>;
}
