// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalog for nobuild.
//!
//! Embeds all user-facing strings for the supported languages as static
//! tables. There are only a handful of keys, so lookup is a linear scan.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add its arms to `Lang::code()`, `Lang::from_code()` and the name methods
//! 3. Teach `Lang::from_locale()` its locale prefix
//! 4. Create a `const XX: &[(Message, &str)]` table below
//! 5. Register the table in `Catalog::builtin()`
//!
//! ## Adding a new message
//!
//! 1. Add a variant to [`Message`] and list it in `Message::all()`
//! 2. Add an entry to every table (the tests reject incomplete tables)

use anyhow::{anyhow, Result};
use serde::Serialize;

/// Languages nobuild can print its status lines in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Ru,
    Es,
    Uz,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ru => "ru",
            Lang::Es => "es",
            Lang::Uz => "uz",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "ru" => Some(Lang::Ru),
            "es" => Some(Lang::Es),
            "uz" => Some(Lang::Uz),
            _ => None,
        }
    }

    /// Map a POSIX locale value such as `ru_RU.UTF-8` to a language.
    ///
    /// This is a case-sensitive prefix test; anything unrecognised,
    /// including the empty string, `C` and `POSIX`, is English.
    pub fn from_locale(value: &str) -> Lang {
        if value.starts_with("ru") {
            Lang::Ru
        } else if value.starts_with("es") {
            Lang::Es
        } else if value.starts_with("uz") {
            Lang::Uz
        } else {
            Lang::En
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Ru, Lang::Es, Lang::Uz]
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ru => "Russian",
            Lang::Es => "Spanish",
            Lang::Uz => "Uzbek",
        }
    }

    /// Name of the language written in the language itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ru => "Русский",
            Lang::Es => "Español",
            Lang::Uz => "Oʻzbekcha",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Named status strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    NoBuildRequired,
    BuildSkipped,
    ErrorOccurred,
    /// Printed by the bundler plugin when the host build starts.
    BundlerSkipped,
    /// Printed by the bundler plugin when the host build ends.
    BuildCompleted,
}

impl Message {
    /// Stable identifier used in diagnostics.
    pub fn key(&self) -> &'static str {
        match self {
            Message::NoBuildRequired => "noBuildRequired",
            Message::BuildSkipped => "buildSkipped",
            Message::ErrorOccurred => "errorOccurred",
            Message::BundlerSkipped => "bundlerSkipped",
            Message::BuildCompleted => "buildCompleted",
        }
    }

    pub fn all() -> &'static [Message] {
        &[
            Message::NoBuildRequired,
            Message::BuildSkipped,
            Message::ErrorOccurred,
            Message::BundlerSkipped,
            Message::BuildCompleted,
        ]
    }
}

type Table = &'static [(Message, &'static str)];

/// Read-only mapping from language to its message table.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: Vec<(Lang, Table)>,
}

impl Catalog {
    /// The catalog compiled into the binary, covering every [`Lang`].
    pub fn builtin() -> Self {
        Self {
            tables: vec![(Lang::En, EN), (Lang::Ru, RU), (Lang::Es, ES), (Lang::Uz, UZ)],
        }
    }

    /// A catalog with no tables. Every lookup fails.
    pub fn empty() -> Self {
        Self { tables: Vec::new() }
    }

    /// Look up `message` in `lang`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nobuild::i18n::{Catalog, Lang, Message};
    /// let catalog = Catalog::builtin();
    /// assert_eq!(
    ///     catalog.get(Lang::Es, Message::BuildSkipped).unwrap(),
    ///     "Paso de compilación omitido"
    /// );
    /// assert!(Catalog::empty().get(Lang::En, Message::BuildSkipped).is_err());
    /// ```
    pub fn get(&self, lang: Lang, message: Message) -> Result<&'static str> {
        let table = self
            .tables
            .iter()
            .find(|(l, _)| *l == lang)
            .map(|(_, table)| *table)
            .ok_or_else(|| anyhow!("no message table for language '{}'", lang))?;

        table
            .iter()
            .find(|(m, _)| *m == message)
            .map(|(_, text)| *text)
            .ok_or_else(|| anyhow!("message '{}' missing for language '{}'", message.key(), lang))
    }

    pub fn languages(&self) -> impl Iterator<Item = Lang> + '_ {
        self.tables.iter().map(|(lang, _)| *lang)
    }
}

// ─── Tables ─────────────────────────────────────────────────────────

const EN: Table = &[
    (Message::NoBuildRequired, "No build required (no frontend assets)"),
    (Message::BuildSkipped, "Build step skipped"),
    (Message::ErrorOccurred, "An error occurred during build"),
    (Message::BundlerSkipped, "No frontend assets to build - skipping esbuild"),
    (Message::BuildCompleted, "Build completed successfully (no assets)"),
];

const RU: Table = &[
    (Message::NoBuildRequired, "Сборка не требуется (нет фронтенд-активов)"),
    (Message::BuildSkipped, "Шаг сборки пропущен"),
    (Message::ErrorOccurred, "Во время сборки произошла ошибка"),
    (Message::BundlerSkipped, "Нет фронтенд-активов для сборки - пропуск esbuild"),
    (Message::BuildCompleted, "Сборка успешно завершена (нет активов)"),
];

const ES: Table = &[
    (Message::NoBuildRequired, "No se requiere compilación (sin activos frontend)"),
    (Message::BuildSkipped, "Paso de compilación omitido"),
    (Message::ErrorOccurred, "Se produjo un error durante la compilación"),
    (Message::BundlerSkipped, "Sin activos frontend para compilar - omitiendo esbuild"),
    (Message::BuildCompleted, "Compilación completada con éxito (sin activos)"),
];

const UZ: Table = &[
    (Message::NoBuildRequired, "Yigʻish talab qilinmaydi (frontend aktivlari yoʻq)"),
    (Message::BuildSkipped, "Yigʻish bosqichi oʻtkazib yuborildi"),
    (Message::ErrorOccurred, "Yigʻish paytida xatolik yuz berdi"),
    (
        Message::BundlerSkipped,
        "Yigʻish uchun frontend aktivlari mavjud emas - esbuildni oʻtkazib yuborish",
    ),
    (Message::BuildCompleted, "Yigʻish muvaffaqiyatli yakunlandi (aktivlar yoʻq)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_every_message() {
        let catalog = Catalog::builtin();
        for lang in Lang::all() {
            for message in Message::all() {
                let text = catalog
                    .get(*lang, *message)
                    .unwrap_or_else(|e| panic!("{lang}/{}: {e}", message.key()));
                assert!(!text.is_empty(), "{lang}/{} is empty", message.key());
            }
        }
    }

    #[test]
    fn tables_have_no_duplicate_entries() {
        for table in [EN, RU, ES, UZ] {
            assert_eq!(table.len(), Message::all().len());
        }
    }

    #[test]
    fn builtin_covers_all_languages() {
        let langs: Vec<Lang> = Catalog::builtin().languages().collect();
        assert_eq!(langs, Lang::all());
    }

    #[test]
    fn translations_differ_from_english() {
        let catalog = Catalog::builtin();
        let en = catalog.get(Lang::En, Message::NoBuildRequired).unwrap();
        for lang in [Lang::Ru, Lang::Es, Lang::Uz] {
            assert_ne!(catalog.get(lang, Message::NoBuildRequired).unwrap(), en);
        }
    }

    #[test]
    fn empty_catalog_reports_language() {
        let err = Catalog::empty()
            .get(Lang::Uz, Message::NoBuildRequired)
            .unwrap_err();
        assert!(err.to_string().contains("'uz'"));
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
        assert_eq!(Lang::from_code("EN"), None);
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn locale_prefixes() {
        assert_eq!(Lang::from_locale("ru_RU.UTF-8"), Lang::Ru);
        assert_eq!(Lang::from_locale("es_ES"), Lang::Es);
        assert_eq!(Lang::from_locale("uz_UZ"), Lang::Uz);
        assert_eq!(Lang::from_locale("fr_FR"), Lang::En);
        assert_eq!(Lang::from_locale("RU_ru"), Lang::En);
        assert_eq!(Lang::from_locale("C.UTF-8"), Lang::En);
        assert_eq!(Lang::from_locale(""), Lang::En);
    }

    #[test]
    fn lang_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Lang::Uz).unwrap(), "\"uz\"");
    }
}
