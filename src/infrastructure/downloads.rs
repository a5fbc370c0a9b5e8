// SPDX-License-Identifier: MPL-2.0
//! Download sink adapter: the browser "save a data URI as a file" analog,
//! writing into the user's Downloads directory.

use crate::application::port::sink::DownloadSink;
use crate::error::{Error, Result};
use base64::Engine as _;
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
pub struct DownloadsFolder {
    dir: PathBuf,
}

impl DownloadsFolder {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn default_dir() -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl DownloadSink for DownloadsFolder {
    fn download(&self, file_name: &str, data_uri: &str) -> Result<()> {
        let bytes = decode_data_uri(data_uri)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(file_name), bytes)?;
        Ok(())
    }
}

/// Extracts the payload from a `data:<mime>;base64,<payload>` URI.
fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let payload = uri
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, payload)| payload)
        .ok_or_else(|| Error::Export("not a base64 data URI".into()))?;
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| Error::Export(format!("malformed data URI payload: {e}")))
}
