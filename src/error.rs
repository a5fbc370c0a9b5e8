// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Application-wide error type.
///
/// Export-pipeline failures (`Raster`, `Export`) are absorbed at the
/// pipeline boundary: they are logged and never crash the screen.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Flattening the composition into pixels failed.
    Raster(String),
    /// Delivering the encoded image (library save or download) failed.
    Export(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Raster(e) => write!(f, "Raster Error: {}", e),
            Error::Export(e) => write!(f, "Export Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Raster(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
