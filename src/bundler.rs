// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bundler-shaped shim for hosts that insist on running an esbuild-style
//! build.
//!
//! [`BundlerConfig::no_assets`] describes a build with no inputs and one
//! [`NoAssetsPlugin`]. [`run_build`] plays the host's part: it fires every
//! plugin's start hook, "compiles" the (empty) entry point list and fires
//! every end hook. Nothing here touches the filesystem.

use crate::i18n::{Catalog, Lang, Message};
use anyhow::{bail, Context, Result};
use serde::{Serialize, Serializer};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Browser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Iife,
}

/// State handed to plugin hooks.
pub struct HookContext<'a> {
    pub catalog: &'a Catalog,
    pub lang: Lang,
    pub app_name: &'a str,
    pub out: &'a mut dyn Write,
}

impl HookContext<'_> {
    /// Print `message` in the context language, prefixed with the app name.
    pub fn say(&mut self, message: Message) -> Result<()> {
        let text = self.catalog.get(self.lang, message)?;
        writeln!(self.out, "{}: {}", self.app_name, text).context("writing hook output")?;
        Ok(())
    }
}

/// Result of a host build.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOutcome {
    pub outputs: Vec<PathBuf>,
}

/// A plugin with the two lifecycle hooks a bundler host calls.
pub trait BuildPlugin {
    fn name(&self) -> &str;

    fn on_start(&self, ctx: &mut HookContext<'_>) -> Result<()>;

    fn on_end(&self, ctx: &mut HookContext<'_>, outcome: &BuildOutcome) -> Result<()>;
}

/// Announces that there is nothing to bundle, then that the build finished.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAssetsPlugin;

impl NoAssetsPlugin {
    pub const NAME: &'static str = "freedompay-no-assets";
}

impl BuildPlugin for NoAssetsPlugin {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn on_start(&self, ctx: &mut HookContext<'_>) -> Result<()> {
        ctx.say(Message::BundlerSkipped)
    }

    fn on_end(&self, ctx: &mut HookContext<'_>, _outcome: &BuildOutcome) -> Result<()> {
        ctx.say(Message::BuildCompleted)
    }
}

/// esbuild-style build configuration.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    pub entry_points: Vec<PathBuf>,
    pub bundle: bool,
    /// Always empty: nothing is written.
    pub outfile: PathBuf,
    pub platform: Platform,
    pub format: Format,
    #[serde(serialize_with = "plugin_names")]
    pub plugins: Vec<Box<dyn BuildPlugin>>,
}

impl BundlerConfig {
    /// Empty inputs, bundling off, a single [`NoAssetsPlugin`].
    pub fn no_assets() -> Self {
        Self {
            entry_points: Vec::new(),
            bundle: false,
            outfile: PathBuf::new(),
            platform: Platform::Browser,
            format: Format::Iife,
            plugins: vec![Box::new(NoAssetsPlugin)],
        }
    }
}

fn plugin_names<S>(plugins: &[Box<dyn BuildPlugin>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(plugins.iter().map(|p| p.name()))
}

/// Drive `config` through start hooks, compilation and end hooks.
///
/// There is no compiler behind this shim, so a config with entry points is
/// refused after the start hooks have run.
pub fn run_build(config: &BundlerConfig, ctx: &mut HookContext<'_>) -> Result<BuildOutcome> {
    for plugin in &config.plugins {
        plugin
            .on_start(ctx)
            .with_context(|| format!("plugin '{}' failed in on_start", plugin.name()))?;
    }

    if !config.entry_points.is_empty() {
        bail!(
            "{} entry point(s) configured but this build step cannot compile assets",
            config.entry_points.len()
        );
    }
    let outcome = BuildOutcome::default();

    for plugin in &config.plugins {
        plugin
            .on_end(ctx, &outcome)
            .with_context(|| format!("plugin '{}' failed in on_end", plugin.name()))?;
    }

    ctx.out.flush().context("flushing hook output")?;
    Ok(outcome)
}
