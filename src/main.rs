// SPDX-License-Identifier: PMPL-1.0-or-later

//! nobuild: stand-in build command for packages with no frontend assets.
//!
//! With no arguments it prints a localized "no build required" status and
//! exits 0. Any fault is reported once, in English, and exits 1.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use nobuild::bundler::{self, BundlerConfig, HookContext};
use nobuild::i18n::{Catalog, Lang};
use nobuild::locale;
use nobuild::manifest::BuildManifest;
use nobuild::reporter;
use nobuild::settings::{Settings, DEFAULT_APP_NAME};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nobuild")]
#[command(version)]
#[command(about = "Localized no-op build step for packages without frontend assets")]
#[command(long_about = None)]
struct Cli {
    /// Output language (en, ru, es, uz); overrides LC_ALL, LC_MESSAGES and LANG
    #[arg(long, global = true, value_name = "CODE")]
    lang: Option<String>,

    /// Name printed in front of every status line
    #[arg(long, global = true, value_name = "NAME")]
    app_name: Option<String>,

    /// Replace the message catalog with an empty one to exercise the fault path
    #[arg(long, global = true, hide = true)]
    inject_fault: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the localized "no build required" status (default)
    Run {
        /// Omit the "build skipped" line
        #[arg(long)]
        brief: bool,
    },

    /// Run the bundler plugin hooks against an empty build
    Bundle,

    /// Emit the build configuration a host pipeline reads
    Config {
        /// Which host the configuration is for
        #[arg(short, long, value_enum, default_value = "esbuild")]
        target: ConfigTarget,

        /// Serialization format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List supported languages, marking the detected one
    Languages,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ConfigTarget {
    Esbuild,
    Frappe,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let app_name = cli
        .app_name
        .clone()
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            reporter::report_fault(&app_name, &err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Run { brief: false });
    let show_skipped = !matches!(command, Commands::Run { brief: true });
    let settings = Settings::resolve(
        cli.lang.as_deref(),
        cli.app_name,
        show_skipped,
        locale::detect_lang,
    )?;

    let catalog = if cli.inject_fault {
        Catalog::empty()
    } else {
        Catalog::builtin()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Run { .. } => reporter::report_status(&mut out, &catalog, &settings)?,

        Commands::Bundle => {
            let config = BundlerConfig::no_assets();
            let mut ctx = HookContext {
                catalog: &catalog,
                lang: settings.lang,
                app_name: &settings.app_name,
                out: &mut out,
            };
            bundler::run_build(&config, &mut ctx)?;
        }

        Commands::Config {
            target,
            format,
            output,
        } => {
            let rendered = match target {
                ConfigTarget::Esbuild => render(&BundlerConfig::no_assets(), format)?,
                ConfigTarget::Frappe => render(&BuildManifest::no_assets(), format)?,
            };

            if let Some(output_path) = output {
                std::fs::write(&output_path, rendered)
                    .with_context(|| format!("writing {}", output_path.display()))?;
                writeln!(out, "Configuration saved to: {}", output_path.display())?;
            } else {
                out.write_all(rendered.as_bytes())?;
            }
        }

        Commands::Languages => {
            for lang in Lang::all() {
                let marker = if *lang == settings.lang {
                    "*".green().bold()
                } else {
                    " ".normal()
                };
                writeln!(
                    out,
                    "{} {}  {:<8} {}",
                    marker,
                    lang.code(),
                    lang.english_name(),
                    lang.native_name()
                )?;
            }
        }
    }

    Ok(())
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
