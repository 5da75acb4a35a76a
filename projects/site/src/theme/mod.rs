//! Site colour theme with a single owner for the current value and its
//! persistence.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Error)]
#[error("UnknownTheme: {value}")]
pub struct UnknownTheme {
    pub value: String,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value persistence for the chosen theme.
pub trait ThemeStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    saved: Option<String>,
}

impl MemoryThemeStore {
    pub fn with_saved(value: impl Into<String>) -> Self {
        Self {
            saved: Some(value.into()),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self, _key: &str) -> Option<String> {
        self.saved.clone()
    }

    fn save(&mut self, _key: &str, value: &str) {
        self.saved = Some(value.to_string());
    }
}

pub struct ThemeController<S: ThemeStore> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Starts from the persisted theme; missing or unknown values mean dark.
    pub fn new(store: S) -> Self {
        let current = store
            .load(THEME_KEY)
            .and_then(|saved| saved.parse().ok())
            .unwrap_or_default();

        Self { store, current }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        debug!(%theme, "Theme changed");
        self.current = theme;
        self.store.save(THEME_KEY, theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
