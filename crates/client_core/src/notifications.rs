//! Toast-style notices published alongside controller transitions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::domain::{LocationKey, INVALID_ZIP_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    InvalidLocation,
    Submitted,
    Loading,
    Loaded,
    FetchFailed,
    ResultsCleared,
    HabitatRestored,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub at: DateTime<Utc>,
}

impl Notification {
    fn new(
        kind: NotificationKind,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            title: title.into(),
            description: description.into(),
            at: Utc::now(),
        }
    }

    pub fn invalid_location() -> Self {
        Self::new(
            NotificationKind::InvalidLocation,
            Severity::Destructive,
            "Invalid Zip Code",
            INVALID_ZIP_MESSAGE,
        )
    }

    pub fn submitted(location: &LocationKey) -> Self {
        Self::new(
            NotificationKind::Submitted,
            Severity::Info,
            "Location Submitted!",
            format!("Fetching data for {location}."),
        )
    }

    pub fn loading(location: &LocationKey) -> Self {
        Self::new(
            NotificationKind::Loading,
            Severity::Info,
            "Loading",
            format!("Loading data for {location}..."),
        )
    }

    pub fn loaded(location: &LocationKey, native_count: usize, invasive_count: usize) -> Self {
        Self::new(
            NotificationKind::Loaded,
            Severity::Info,
            "Results Ready",
            format!(
                "Found {native_count} native plants and {invasive_count} invasive species for {location}."
            ),
        )
    }

    pub fn fetch_failed() -> Self {
        Self::new(
            NotificationKind::FetchFailed,
            Severity::Destructive,
            "Data Fetch Error",
            "Could not retrieve plant data. Please try again later.",
        )
    }

    pub fn results_cleared() -> Self {
        Self::new(
            NotificationKind::ResultsCleared,
            Severity::Info,
            "Results Cleared",
            "Enter a zip code to find native plants.",
        )
    }

    pub fn habitat_restored(total_sqft: f64) -> Self {
        Self::new(
            NotificationKind::HabitatRestored,
            Severity::Info,
            "Habitat Restored!",
            format!("You've now restored {total_sqft} sq ft."),
        )
    }
}
