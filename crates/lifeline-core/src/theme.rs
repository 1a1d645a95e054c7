//! Light/dark theme preference.

use std::fmt;
use std::str::FromStr;

use crate::error::{LifelineError, LifelineResult};
use crate::storage::PreferenceStore;

/// Storage key holding the persisted theme
pub const THEME_KEY: &str = "theme";

/// Visual mode of the page
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value used for the `data-theme` attribute and in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle icon classes: a moon offers dark mode, a sun offers light mode
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "fa-solid fa-moon",
            Theme::Dark => "fa-solid fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = LifelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(LifelineError::InvalidTheme(other.to_string())),
        }
    }
}

/// Theme applied at startup
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RestoredTheme {
    pub theme: Theme,
    /// False when the default was used; the default is not written back
    pub persisted: bool,
}

/// Reads and writes the theme preference
pub struct ThemeController<S> {
    store: S,
    default: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, default: Theme) -> Self {
        Self { store, default }
    }

    pub fn default_theme(&self) -> Theme {
        self.default
    }

    /// Restore the persisted theme, falling back to the default.
    ///
    /// Unreadable storage and unknown stored values both fall back.
    pub fn restore(&self) -> RestoredTheme {
        let stored = match self.store.get(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                None
            }
        };

        match stored.as_deref().map(Theme::from_str) {
            Some(Ok(theme)) => RestoredTheme {
                theme,
                persisted: true,
            },
            Some(Err(e)) => {
                tracing::warn!("Ignoring stored theme: {}", e);
                self.fallback()
            }
            None => self.fallback(),
        }
    }

    /// Flip `current`, persist the result and return it
    pub fn toggle(&self, current: Theme) -> LifelineResult<Theme> {
        let next = current.toggled();
        self.persist(next)?;
        Ok(next)
    }

    /// Write `theme` under [`THEME_KEY`]
    pub fn persist(&self, theme: Theme) -> LifelineResult<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        tracing::debug!(theme = %theme, "Theme preference saved");
        Ok(())
    }

    fn fallback(&self) -> RestoredTheme {
        RestoredTheme {
            theme: self.default,
            persisted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_theme_strings() {
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light\n".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_icons_match_theme() {
        assert_eq!(Theme::Light.icon_class(), "fa-solid fa-moon");
        assert_eq!(Theme::Dark.icon_class(), "fa-solid fa-sun");
    }

    #[test]
    fn test_restore_default_is_not_persisted() {
        let store = MemoryStore::new();
        let controller = ThemeController::new(store.clone(), Theme::Dark);

        let restored = controller.restore();
        assert_eq!(restored.theme, Theme::Dark);
        assert!(!restored.persisted);
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_restore_reads_stored_value() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        let controller = ThemeController::new(store, Theme::Light);

        let restored = controller.restore();
        assert_eq!(restored.theme, Theme::Dark);
        assert!(restored.persisted);
    }

    #[test]
    fn test_restore_ignores_garbage() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "neon").unwrap();
        let controller = ThemeController::new(store, Theme::Light);

        assert_eq!(controller.restore().theme, Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::new();
        let controller = ThemeController::new(store.clone(), Theme::Light);

        let next = controller.toggle(Theme::Light).unwrap();
        assert_eq!(next, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("dark".to_string()));

        let next = controller.toggle(next).unwrap();
        assert_eq!(next, Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("light".to_string()));
    }
}
