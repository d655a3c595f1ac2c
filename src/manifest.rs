// SPDX-License-Identifier: PMPL-1.0-or-later

//! Frappe build manifest: tells the bench build that this app has nothing
//! to build.

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildManifest {
    pub build: bool,
    pub assets: Vec<PathBuf>,
    pub apps: Vec<String>,
    pub hooks: BuildHooks,
}

/// Shell commands run around the build. Both are always `null` here.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BuildHooks {
    pub before_build: Option<String>,
    pub after_build: Option<String>,
}

impl BuildManifest {
    pub fn no_assets() -> Self {
        Self {
            build: false,
            assets: Vec::new(),
            apps: Vec::new(),
            hooks: BuildHooks::default(),
        }
    }
}
