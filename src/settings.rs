// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run settings resolved from command-line flags and the environment.

use crate::i18n::Lang;
use anyhow::{bail, Result};

/// Display prefix used when `--app-name` is not given.
pub const DEFAULT_APP_NAME: &str = "FreedomPay Integration";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub lang: Lang,
    pub app_name: String,
    /// Print `buildSkipped` after `noBuildRequired`.
    pub show_skipped: bool,
}

impl Settings {
    /// Resolve settings. An explicit `lang_override` wins over `detect`
    /// (normally [`crate::locale::detect_lang`]), but must name a supported
    /// language; `detect` is only called when there is no override.
    pub fn resolve<F>(
        lang_override: Option<&str>,
        app_name: Option<String>,
        show_skipped: bool,
        detect: F,
    ) -> Result<Self>
    where
        F: FnOnce() -> Lang,
    {
        let lang = match lang_override {
            Some(code) => match Lang::from_code(code) {
                Some(lang) => lang,
                None => bail!(
                    "unsupported language '{}' (expected one of: {})",
                    code,
                    Lang::all()
                        .iter()
                        .map(Lang::code)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            },
            None => detect(),
        };

        Ok(Self {
            lang,
            app_name: app_name.unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            show_skipped,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            app_name: DEFAULT_APP_NAME.to_string(),
            show_skipped: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::resolve_lang;

    fn no_env() -> Lang {
        resolve_lang(|_| None)
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let settings = Settings::resolve(None, None, true, no_env).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn lang_flag_beats_environment() {
        let settings = Settings::resolve(Some("uz"), None, true, || {
            panic!("detection must not run when --lang is given")
        })
        .unwrap();
        assert_eq!(settings.lang, Lang::Uz);
    }

    #[test]
    fn environment_used_without_flag() {
        let settings = Settings::resolve(None, None, false, || {
            resolve_lang(|var| (var == "LANG").then(|| "es_AR.UTF-8".to_string()))
        })
        .unwrap();
        assert_eq!(settings.lang, Lang::Es);
        assert!(!settings.show_skipped);
    }

    #[test]
    fn unsupported_lang_flag_is_rejected() {
        let err = Settings::resolve(Some("fr"), None, true, no_env).unwrap_err();
        assert!(err.to_string().contains("unsupported language 'fr'"));
        assert!(err.to_string().contains("en, ru, es, uz"));
    }

    #[test]
    fn custom_app_name() {
        let settings =
            Settings::resolve(None, Some("Acme Payments".into()), true, no_env).unwrap();
        assert_eq!(settings.app_name, "Acme Payments");
    }
}
