// SPDX-License-Identifier: MPL-2.0
//! Application-layer seams.
//!
//! The [`port`] module defines the capability traits the composition screen
//! depends on. Concrete adapters live in `infrastructure`; tests substitute
//! mocks.

pub mod port;
