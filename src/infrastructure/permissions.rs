// SPDX-License-Identifier: MPL-2.0
//! Filesystem-backed permission gate.
//!
//! Desktop platforms have no media-library permission dialog; the closest
//! equivalent of "granted" is that the library directory exists and is
//! writable. The probe runs once, when a grant is requested.

use crate::application::port::permission::{PermissionGate, PermissionStatus};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub struct LibraryPermissions {
    dir: PathBuf,
    status: PermissionStatus,
}

impl LibraryPermissions {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            status: PermissionStatus::Undetermined,
        }
    }
}

impl PermissionGate for LibraryPermissions {
    fn status(&self) -> PermissionStatus {
        self.status
    }

    fn request(&mut self) -> PermissionStatus {
        if self.status == PermissionStatus::Undetermined {
            self.status = match probe_writable(&self.dir) {
                Ok(()) => PermissionStatus::Granted,
                Err(_) => PermissionStatus::Denied,
            };
        }
        self.status
    }
}

/// Creates the directory if needed and round-trips a probe file.
fn probe_writable(dir: &PathBuf) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let probe = dir.join(".write-probe");
    fs::write(&probe, b"")?;
    fs::remove_file(&probe)?;
    Ok(())
}
