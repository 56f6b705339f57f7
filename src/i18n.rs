//! Display language and translated strings.
//!
//! The terminal only needs two things from here: the boot lines and the
//! prompt for the current language. The page chrome also reads the title,
//! description and theme toggle labels. Everything except the description
//! falls back to a built-in default when the catalog has nothing for a
//! language, so a broken catalog never blocks the boot sequence.

use std::collections::HashMap;

use serde::Deserialize;

use crate::config::{
    APP_NAME, DEFAULT_BOOT_LINES, DEFAULT_PROMPT, I18N_CATALOG, LANG_STORAGE_KEY, theme_labels,
};
use crate::core::error::{CatalogError, StorageError};
use crate::theme::Theme;
use crate::utils::dom;

// =============================================================================
// Language
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    /// Short code used in the catalog and in localStorage.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    /// Value for the `<html lang>` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh-CN",
        }
    }

    /// Pick a language from a BCP 47 tag such as `navigator.language`.
    pub fn from_browser_tag(tag: &str) -> Self {
        if tag.starts_with("zh") { Self::Zh } else { Self::En }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }
}

/// Read the persisted language, falling back to the browser preference.
///
/// Unknown stored values are ignored.
pub fn load_lang() -> Lang {
    let stored = dom::local_storage()
        .and_then(|s| s.get_item(LANG_STORAGE_KEY).ok().flatten())
        .and_then(|code| Lang::from_code(&code));
    stored.unwrap_or_else(|| {
        dom::window()
            .and_then(|w| w.navigator().language())
            .map(|tag| Lang::from_browser_tag(&tag))
            .unwrap_or_default()
    })
}

/// Persist the selected language.
pub fn save_lang(lang: Lang) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .set_item(LANG_STORAGE_KEY, lang.code())
        .map_err(|_| StorageError::WriteFailed)
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Clone, Debug, Default, Deserialize)]
struct TerminalStrings {
    line1: Option<String>,
    line2: Option<String>,
    line3: Option<String>,
    line4: Option<String>,
    prompt: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct ThemeStrings {
    light: Option<String>,
    dark: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct LangStrings {
    title: Option<String>,
    description: Option<String>,
    theme: Option<ThemeStrings>,
    terminal: Option<TerminalStrings>,
}

/// Translated strings keyed by language.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: HashMap<Lang, LangStrings>,
}

impl Catalog {
    /// Parse a catalog of the form `{ "<code>": { "title": .., "terminal": {..} } }`.
    ///
    /// Entries for unsupported language codes are skipped.
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, LangStrings> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .filter_map(|(code, strings)| Lang::from_code(&code).map(|lang| (lang, strings)))
            .collect();
        Ok(Self { entries })
    }

    /// The catalog compiled into the binary, or an empty one if it is invalid.
    pub fn builtin() -> Self {
        Self::parse(I18N_CATALOG).unwrap_or_else(|e| {
            log::warn!("i18n: {}; using built-in defaults", e);
            Self::default()
        })
    }

    fn terminal(&self, lang: Lang) -> Option<&TerminalStrings> {
        self.entries.get(&lang)?.terminal.as_ref()
    }

    /// Boot lines for `lang`; defaults unless all four lines are present.
    pub fn boot_lines(&self, lang: Lang) -> Vec<String> {
        let lines = self.terminal(lang).and_then(|t| {
            [&t.line1, &t.line2, &t.line3, &t.line4]
                .into_iter()
                .map(Option::clone)
                .collect::<Option<Vec<String>>>()
        });
        lines.unwrap_or_else(|| {
            log::warn!("i18n: no boot lines for '{}'", lang.code());
            DEFAULT_BOOT_LINES.iter().map(|s| s.to_string()).collect()
        })
    }

    pub fn prompt(&self, lang: Lang) -> String {
        self.terminal(lang)
            .and_then(|t| t.prompt.clone())
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
    }

    /// Document title for `lang`.
    pub fn title(&self, lang: Lang) -> String {
        self.entries
            .get(&lang)
            .and_then(|s| s.title.clone())
            .unwrap_or_else(|| APP_NAME.to_string())
    }

    /// Page description for `lang`, if the catalog has one.
    pub fn description(&self, lang: Lang) -> Option<String> {
        self.entries.get(&lang)?.description.clone()
    }

    /// Label for a button switching to `target`.
    pub fn theme_label(&self, lang: Lang, target: Theme) -> String {
        let strings = self.entries.get(&lang).and_then(|s| s.theme.as_ref());
        let (label, fallback) = match target {
            Theme::Light => (strings.and_then(|t| t.light.clone()), theme_labels::LIGHT),
            Theme::Dark => (strings.and_then(|t| t.dark.clone()), theme_labels::DARK),
        };
        label.unwrap_or_else(|| fallback.to_string())
    }
}
