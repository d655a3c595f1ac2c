// SPDX-License-Identifier: PMPL-1.0-or-later

//! nobuild: a localized no-op build step.
//!
//! Integration packages without frontend assets still get run through
//! asset pipelines that expect a build command to succeed. This crate is
//! that command: it works out the user's language from the locale
//! environment, prints a short status in it and exits cleanly.
//!
//! PIECES:
//! 1. **i18n**: the message catalog and the supported languages.
//! 2. **locale**: `LC_ALL` / `LC_MESSAGES` / `LANG` detection.
//! 3. **reporter**: the status lines and the fault line.
//! 4. **bundler**: an esbuild-shaped config whose plugin hooks print
//!    instead of compiling.
//! 5. **manifest**: the equivalent Frappe build manifest.

pub mod bundler;
pub mod i18n;
pub mod locale;
pub mod manifest;
pub mod reporter;
pub mod settings;
