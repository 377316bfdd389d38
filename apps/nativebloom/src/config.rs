use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use catalog::{CatalogLatency, DEFAULT_INVASIVE_LATENCY, DEFAULT_NATIVE_LATENCY};
use client_core::tracker::DEFAULT_GOAL_SQFT;
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "nativebloom.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub database_url: String,
    pub native_latency_ms: u64,
    pub invasive_latency_ms: u64,
    pub tracker_goal_sqft: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "sqlite://./data/nativebloom.db".into(),
            native_latency_ms: DEFAULT_NATIVE_LATENCY.as_millis() as u64,
            invasive_latency_ms: DEFAULT_INVASIVE_LATENCY.as_millis() as u64,
            tracker_goal_sqft: DEFAULT_GOAL_SQFT,
        }
    }
}

impl Settings {
    pub fn catalog_latency(&self) -> CatalogLatency {
        CatalogLatency {
            native: Duration::from_millis(self.native_latency_ms),
            invasive: Duration::from_millis(self.invasive_latency_ms),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    database_url: Option<String>,
    native_latency_ms: Option<u64>,
    invasive_latency_ms: Option<u64>,
    tracker_goal_sqft: Option<f64>,
}

/// Defaults, then the TOML file, then environment variables.
///
/// An explicit `config_path` must exist; the default `nativebloom.toml` is
/// optional.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();

    match config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            apply_file(&mut settings, &raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?;
        }
        None => {
            if let Ok(raw) = fs::read_to_string(DEFAULT_CONFIG_FILE) {
                apply_file(&mut settings, &raw)
                    .with_context(|| format!("invalid config file '{DEFAULT_CONFIG_FILE}'"))?;
            }
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> Result<()> {
    let file: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file.database_url {
        settings.database_url = v;
    }
    if let Some(v) = file.native_latency_ms {
        settings.native_latency_ms = v;
    }
    if let Some(v) = file.invasive_latency_ms {
        settings.invasive_latency_ms = v;
    }
    if let Some(v) = file.tracker_goal_sqft {
        settings.tracker_goal_sqft = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("NATIVEBLOOM_DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = var("APP__DATABASE_URL") {
        settings.database_url = v;
    }

    if let Some(v) = var("APP__NATIVE_LATENCY_MS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.native_latency_ms = parsed,
            Err(_) => warn!(value = %v, "ignoring APP__NATIVE_LATENCY_MS"),
        }
    }
    if let Some(v) = var("APP__INVASIVE_LATENCY_MS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.invasive_latency_ms = parsed,
            Err(_) => warn!(value = %v, "ignoring APP__INVASIVE_LATENCY_MS"),
        }
    }
    if let Some(v) = var("APP__TRACKER_GOAL_SQFT") {
        match v.parse::<f64>() {
            Ok(parsed) => settings.tracker_goal_sqft = parsed,
            Err(_) => warn!(value = %v, "ignoring APP__TRACKER_GOAL_SQFT"),
        }
    }
}

/// Normalizes the URL and creates the parent directory of a sqlite file.
pub fn prepare_database_url(raw_database_url: &str) -> Result<String> {
    let database_url = normalize_database_url(raw_database_url);
    if let Some(parent) = sqlite_file(&database_url).and_then(Path::parent) {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create '{}' for '{database_url}'", parent.display())
            })?;
        }
    }
    Ok(database_url)
}

/// File path of a sqlite URL; `None` for in-memory and non-sqlite URLs.
fn sqlite_file(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    if rest.starts_with(":memory:") {
        return None;
    }
    let path = rest.split_once('?').map_or(rest, |(path, _)| path);
    (!path.is_empty()).then(|| Path::new(path))
}

pub fn normalize_database_url(raw_database_url: &str) -> String {
    let raw_database_url = raw_database_url.trim();

    if raw_database_url.is_empty() {
        return Settings::default().database_url;
    }

    if raw_database_url.starts_with("sqlite::memory:") || raw_database_url.contains("://") {
        return raw_database_url.to_string();
    }

    if let Some(path) = raw_database_url.strip_prefix("sqlite:") {
        return format!("sqlite://{}", path.replace('\\', "/"));
    }

    format!("sqlite://{}", raw_database_url.replace('\\', "/"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
