//! Accessibility and appearance flags persisted through a [`PreferenceStore`].
//!
//! Values are loaded once when a session starts and written back on every
//! toggle, before the toggle returns.

use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use storage::PreferenceStore;
use tracing::info;

pub const HIGH_CONTRAST_KEY: &str = "accessibility-high-contrast";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` reads as the light default.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityPreferences {
    pub high_contrast: bool,
    pub theme: Theme,
}

impl AccessibilityPreferences {
    pub async fn load(store: &dyn PreferenceStore) -> Result<Self> {
        let high_contrast = store.get(HIGH_CONTRAST_KEY).await?;
        let theme = store.get(THEME_KEY).await?;
        Ok(Self {
            high_contrast: high_contrast.as_deref() == Some("true"),
            theme: Theme::from_stored(theme.as_deref()),
        })
    }

    pub async fn toggle_contrast(&mut self, store: &dyn PreferenceStore) -> Result<bool> {
        let next = !self.high_contrast;
        store
            .set(HIGH_CONTRAST_KEY, if next { "true" } else { "false" })
            .await?;
        self.high_contrast = next;
        info!(high_contrast = next, "high contrast toggled");
        Ok(next)
    }

    pub async fn toggle_theme(&mut self, store: &dyn PreferenceStore) -> Result<Theme> {
        let next = self.theme.toggled();
        store.set(THEME_KEY, next.as_str()).await?;
        self.theme = next;
        info!(theme = %next, "theme toggled");
        Ok(next)
    }
}

#[cfg(test)]
#[path = "tests/preferences_tests.rs"]
mod tests;
