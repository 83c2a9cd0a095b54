//! User preferences persisted to a key/value store: favorite pairs, fee
//! percentage and theme. Each lives under its own key and is written only by
//! the action that changes it.

use crate::core::series::Pair;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

pub const FAVORITES_KEY: &str = "favorites";
pub const FEE_KEY: &str = "fee";
pub const THEME_KEY: &str = "theme";

/// Storage capability for small string values.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(anyhow!("Invalid theme: {} (expected light or dark)", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub favorites: Vec<Pair>,
    pub fee_percent: f64,
    pub theme: Theme,
}

impl Preferences {
    /// Reads every preference once. Missing or unreadable entries fall back
    /// to defaults; corrupt favorites become an empty list.
    pub fn load(store: &dyn KeyValueStore, default_fee: f64) -> Self {
        let favorites = read(store, FAVORITES_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .map(|list| list.iter().filter_map(|p| p.parse().ok()).collect())
            .unwrap_or_default();

        let fee_percent = read(store, FEE_KEY)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|fee| fee.is_finite())
            .unwrap_or(default_fee);

        let theme = read(store, THEME_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();

        Preferences {
            favorites,
            fee_percent,
            theme,
        }
    }

    /// Returns false when the pair was already a favorite.
    pub fn add_favorite(&mut self, store: &dyn KeyValueStore, pair: Pair) -> Result<bool> {
        if self.favorites.contains(&pair) {
            return Ok(false);
        }
        self.favorites.push(pair);
        self.save_favorites(store)?;
        Ok(true)
    }

    /// Returns false when the pair was not a favorite.
    pub fn remove_favorite(&mut self, store: &dyn KeyValueStore, pair: &Pair) -> Result<bool> {
        let before = self.favorites.len();
        self.favorites.retain(|p| p != pair);
        if self.favorites.len() == before {
            return Ok(false);
        }
        self.save_favorites(store)?;
        Ok(true)
    }

    pub fn set_fee(&mut self, store: &dyn KeyValueStore, fee_percent: f64) -> Result<()> {
        if !fee_percent.is_finite() || fee_percent < 0.0 {
            return Err(anyhow!("Invalid fee percentage: {}", fee_percent));
        }
        self.fee_percent = fee_percent;
        store.set(FEE_KEY, &fee_percent.to_string())
    }

    pub fn set_theme(&mut self, store: &dyn KeyValueStore, theme: Theme) -> Result<()> {
        self.theme = theme;
        store.set(THEME_KEY, &theme.to_string())
    }

    pub fn toggle_theme(&mut self, store: &dyn KeyValueStore) -> Result<Theme> {
        let theme = self.theme.toggled();
        self.set_theme(store, theme)?;
        Ok(theme)
    }

    fn save_favorites(&self, store: &dyn KeyValueStore) -> Result<()> {
        if self.favorites.is_empty() {
            return store.remove(FAVORITES_KEY);
        }
        let list: Vec<String> = self.favorites.iter().map(|p| p.to_string()).collect();
        store.set(FAVORITES_KEY, &serde_json::to_string(&list)?)
    }
}

fn read(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            debug!("Failed to read preference {}: {}", key, e);
            None
        }
    }
}
