//! Light/dark theme preference.

use serde::{Deserialize, Serialize};

use super::preferences::{PreferenceError, PreferenceStore};

/// Preference key the theme is stored under.
pub const THEME_KEY: &str = "theme";

/// Color theme of the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid theme: {s}")),
        }
    }
}

/// Theme state backed by a preference store.
///
/// The stored value is read once in [`ThemeStore::init`] and written on
/// every [`ThemeStore::toggle`]. Unknown stored values fall back to light.
pub struct ThemeStore<P> {
    prefs: P,
    theme: Theme,
}

impl<P: PreferenceStore> ThemeStore<P> {
    pub fn init(prefs: P) -> Self {
        let theme = prefs
            .get(THEME_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Self { prefs, theme }
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it.
    ///
    /// # Errors
    ///
    /// Returns `PreferenceError` if the new value could not be stored; the
    /// in-memory theme is left unchanged in that case.
    pub fn toggle(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.theme.toggled();
        self.prefs.set(THEME_KEY, next.as_str())?;
        self.theme = next;
        Ok(next)
    }

    /// Hand back the preference store, e.g. to flush cookie writes.
    pub fn into_preferences(self) -> P {
        self.prefs
    }
}
