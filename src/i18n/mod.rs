// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for nobuild.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | ru   | Russian  | Русский     |
//! | es   | Spanish  | Español     |
//! | uz   | Uzbek    | Oʻzbekcha   |
//!
//! ## Design
//!
//! Every user-facing line is a [`Message`] looked up in a [`Catalog`]. The
//! tables are embedded at compile time; a `Catalog` is built once in `main`
//! and borrowed by the reporter and the bundler shim alike. Lookups are
//! strict: a missing entry is an error, not an English fallback, so a broken
//! table surfaces as a fault instead of silently printing the wrong language.

mod catalog;

pub use catalog::{Catalog, Lang, Message};
