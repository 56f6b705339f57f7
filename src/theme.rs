//! Color theme selection.
//!
//! An explicit choice is persisted in localStorage. Without one the theme
//! follows the system color-scheme preference, including live changes.

use crate::config::THEME_STORAGE_KEY;
use crate::core::error::StorageError;
use crate::utils::dom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn code(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Pick the theme from a stored code, falling back to the system
    /// preference when nothing valid is stored.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored
            .and_then(Self::from_code)
            .unwrap_or_else(|| Self::from_prefers_dark(prefers_dark))
    }

    /// Value of the `data-theme` attribute. Dark is the stylesheet default
    /// and carries no attribute.
    pub fn data_attr(self) -> Option<&'static str> {
        match self {
            Self::Dark => None,
            Self::Light => Some("light"),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

fn stored_code() -> Option<String> {
    dom::local_storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()
}

/// Whether the user picked a valid theme explicitly.
pub fn has_stored_theme() -> bool {
    stored_code().as_deref().and_then(Theme::from_code).is_some()
}

/// Read the persisted theme, falling back to the system preference.
pub fn load_theme() -> Theme {
    Theme::resolve(stored_code().as_deref(), dom::prefers_dark())
}

/// Persist an explicit theme choice.
pub fn save_theme(theme: Theme) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .set_item(THEME_STORAGE_KEY, theme.code())
        .map_err(|_| StorageError::WriteFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_theme_wins() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn test_invalid_or_missing_falls_back_to_system() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some("solarized"), false), Theme::Light);
    }

    #[test]
    fn test_data_attr_only_for_light() {
        assert_eq!(Theme::Dark.data_attr(), None);
        assert_eq!(Theme::Light.data_attr(), Some("light"));
    }

    #[test]
    fn test_toggle_and_codes() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::from_code(Theme::Light.code()), Some(Theme::Light));
    }
}
