// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language detection from the POSIX locale environment.

use crate::i18n::Lang;

/// Locale variables in priority order. The first non-empty one decides.
pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Resolve the output language from an environment lookup.
///
/// `lookup` is `std::env::var(..).ok()` in production; tests pass a map so
/// the real process environment is never touched.
pub fn resolve_lang<F>(lookup: F) -> Lang
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.is_empty())
        .map(|value| Lang::from_locale(&value))
        .unwrap_or_default()
}

/// [`resolve_lang`] against the current process environment.
pub fn detect_lang() -> Lang {
    resolve_lang(|var| std::env::var(var).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn nothing_set_is_english() {
        assert_eq!(resolve_lang(env(&[])), Lang::En);
    }

    #[test]
    fn lang_alone() {
        assert_eq!(resolve_lang(env(&[("LANG", "ru_RU.UTF-8")])), Lang::Ru);
        assert_eq!(resolve_lang(env(&[("LANG", "uz_UZ")])), Lang::Uz);
        assert_eq!(resolve_lang(env(&[("LANG", "fr_FR")])), Lang::En);
    }

    #[test]
    fn lc_all_beats_lang() {
        let lookup = env(&[("LC_ALL", "es_ES"), ("LANG", "ru_RU")]);
        assert_eq!(resolve_lang(lookup), Lang::Es);
    }

    #[test]
    fn lc_messages_beats_lang() {
        let lookup = env(&[("LC_MESSAGES", "uz_UZ.UTF-8"), ("LANG", "es_MX")]);
        assert_eq!(resolve_lang(lookup), Lang::Uz);
    }

    #[test]
    fn empty_values_are_skipped() {
        let lookup = env(&[("LC_ALL", ""), ("LC_MESSAGES", ""), ("LANG", "ru_UA")]);
        assert_eq!(resolve_lang(lookup), Lang::Ru);
    }

    #[test]
    fn unsupported_first_match_does_not_fall_through() {
        // The first non-empty variable decides even when it maps to English.
        let lookup = env(&[("LC_ALL", "de_DE"), ("LANG", "ru_RU")]);
        assert_eq!(resolve_lang(lookup), Lang::En);
    }

    #[test]
    fn resolver_is_total() {
        for value in ["", "C", "POSIX", "ru", "r", "es", "uzbek", "en_US", "\u{fffd}"] {
            let lang = resolve_lang(env(&[("LANG", value)]));
            assert!(Lang::all().contains(&lang));
        }
    }
}
