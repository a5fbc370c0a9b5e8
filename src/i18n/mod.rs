// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system: `.ftl` resources are embedded in the
//! binary and the locale is resolved from the CLI, the config file, or the OS
//! settings, in that order, with `en-US` as the final fallback.

pub mod fluent;
