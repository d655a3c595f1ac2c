// SPDX-License-Identifier: PMPL-1.0-or-later

//! Status reporting for the no-op build step.

use crate::i18n::{Catalog, Lang, Message};
use crate::settings::Settings;
use anyhow::{Context, Result};
use colored::*;
use std::io::{self, IsTerminal, Write};

/// Used only if the built-in English table itself is broken.
const FALLBACK_ERROR: &str = "An error occurred during build";

/// Write the status lines for `settings` to `out`.
///
/// Both lookups happen before anything is written, so a catalog fault never
/// leaves half a report on stdout.
pub fn report_status<W: Write>(out: &mut W, catalog: &Catalog, settings: &Settings) -> Result<()> {
    let mut lines = vec![catalog.get(settings.lang, Message::NoBuildRequired)?];
    if settings.show_skipped {
        lines.push(catalog.get(settings.lang, Message::BuildSkipped)?);
    }

    for line in lines {
        writeln!(out, "{}: {}", settings.app_name, line).context("writing status to stdout")?;
    }
    out.flush().context("flushing stdout")?;
    Ok(())
}

/// The single diagnostic line printed on the fault path. Always English.
pub fn fault_line(app_name: &str, err: &anyhow::Error) -> String {
    let prefix = Catalog::builtin()
        .get(Lang::En, Message::ErrorOccurred)
        .unwrap_or(FALLBACK_ERROR);
    format!("{}: {}: {:#}", app_name, prefix, err)
}

/// Print [`fault_line`] to stderr, highlighted only when stderr is a terminal.
pub fn report_fault(app_name: &str, err: &anyhow::Error) {
    let line = fault_line(app_name, err);
    if io::stderr().is_terminal() {
        eprintln!("{}", line.red().bold());
    } else {
        eprintln!("{}", line);
    }
}
