// SPDX-License-Identifier: MPL-2.0
//! Media library adapter: the user's Pictures directory.

use crate::application::port::sink::MediaLibrary;
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

const LIBRARY_SUBDIR: &str = "Sticker Smash";

#[derive(Debug)]
pub struct PicturesLibrary {
    dir: PathBuf,
}

impl PicturesLibrary {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Default library location: `<Pictures>/Sticker Smash`, falling back to
    /// the current directory when the platform reports no Pictures dir.
    pub fn default_dir() -> PathBuf {
        dirs::picture_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(LIBRARY_SUBDIR)
    }
}

impl MediaLibrary for PicturesLibrary {
    fn save_to_library(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;
        Ok(path)
    }
}
