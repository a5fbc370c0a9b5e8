// SPDX-License-Identifier: MPL-2.0
//! Media-library write permission port.
//!
//! Permission status is ambient platform state; abstracting it behind a
//! trait keeps the screen testable and makes the acquisition policy (ask
//! once, eagerly, at startup) explicit instead of implicit.

/// Authorization state for writing to the media library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Neither granted nor denied yet; a request should be issued.
    Undetermined,
    Granted,
    Denied,
}

/// Grants or denies access to save media.
///
/// The export pipeline does not consult the gate at save time: the save is
/// attempted regardless and may fail at the collaborator level, matching
/// the original application's behavior.
pub trait PermissionGate: Send + Sync {
    /// Current authorization status.
    fn status(&self) -> PermissionStatus;

    /// Issues a grant request and returns the resulting status.
    ///
    /// Called once per undetermined→determined transition; calling it again
    /// after the status is determined is a no-op returning the settled
    /// status.
    fn request(&mut self) -> PermissionStatus;
}
