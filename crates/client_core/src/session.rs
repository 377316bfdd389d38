//! The boundary a presentation layer drives: one controller, the two
//! calculators, and the accessibility flags with their backing store.

use std::sync::Arc;

use anyhow::Result;
use shared::{
    domain::{AlternativeLink, InvasiveRecord, PlantRecord},
    error::BloomError,
};
use storage::PreferenceStore;
use tokio::sync::broadcast;

use crate::{
    estimator::{ImpactEstimate, ImpactEstimator},
    notifications::Notification,
    preferences::{AccessibilityPreferences, Theme},
    tracker::HabitatTracker,
    PlantRetrieval, QueryController, QueryOutcome, QueryState,
};

pub const INTRO_HEADLINE: &str =
    "Discover plants native to your region to support local ecosystems.";
pub const NO_LOCATION_HEADLINE: &str = "Enter a zip code to find native plants.";

pub struct Session {
    controller: Arc<QueryController>,
    tracker: HabitatTracker,
    estimator: ImpactEstimator,
    preferences: AccessibilityPreferences,
    store: Arc<dyn PreferenceStore>,
}

impl Session {
    /// Loads preferences from `store` once; later toggles write through.
    pub async fn start(
        retrieval: Arc<dyn PlantRetrieval>,
        store: Arc<dyn PreferenceStore>,
        tracker: HabitatTracker,
    ) -> Result<Self> {
        let preferences = AccessibilityPreferences::load(store.as_ref()).await?;
        Ok(Self {
            controller: QueryController::new(retrieval),
            tracker,
            estimator: ImpactEstimator::new(),
            preferences,
            store,
        })
    }

    pub fn controller(&self) -> Arc<QueryController> {
        Arc::clone(&self.controller)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.controller.subscribe()
    }

    pub async fn submit(&self, raw: &str) -> Result<QueryOutcome, BloomError> {
        self.controller.submit(raw).await
    }

    pub async fn state(&self) -> QueryState {
        self.controller.state().await
    }

    pub async fn select_plant(&self, scientific_name: &str) -> Option<PlantRecord> {
        self.controller.select_plant(scientific_name).await
    }

    pub async fn selected_plant(&self) -> Option<PlantRecord> {
        self.controller.selected_plant().await
    }

    pub async fn close_detail(&self) {
        self.controller.close_detail().await;
    }

    pub async fn alternatives_for(&self, invasive: &InvasiveRecord) -> Vec<AlternativeLink> {
        self.controller.alternatives_for(invasive).await
    }

    pub fn log_area(&mut self, delta: f64) -> Result<f64, BloomError> {
        let total = self.tracker.log_area(delta)?;
        self.controller
            .publish(Notification::habitat_restored(total));
        Ok(total)
    }

    pub fn log_area_input(&mut self, raw: &str) -> Result<f64, BloomError> {
        self.tracker.set_input(raw);
        let total = self.tracker.submit_input()?;
        self.controller
            .publish(Notification::habitat_restored(total));
        Ok(total)
    }

    pub fn tracker(&self) -> &HabitatTracker {
        &self.tracker
    }

    pub fn estimator_mut(&mut self) -> &mut ImpactEstimator {
        &mut self.estimator
    }

    pub fn estimate(&mut self, raw: &str) -> Result<ImpactEstimate, BloomError> {
        self.estimator.set_input(raw);
        self.estimator.submit()
    }

    pub fn preferences(&self) -> AccessibilityPreferences {
        self.preferences
    }

    pub async fn toggle_contrast(&mut self) -> Result<bool> {
        self.preferences
            .toggle_contrast(self.store.as_ref())
            .await
    }

    pub async fn toggle_theme(&mut self) -> Result<Theme> {
        self.preferences.toggle_theme(self.store.as_ref()).await
    }

    /// Header text: an intro before the first search, then the active zip.
    pub async fn headline(&self) -> String {
        if !self.controller.has_submitted().await {
            return INTRO_HEADLINE.to_string();
        }
        match self.controller.location().await {
            Some(location) => format!("Showing results for {location}"),
            None => NO_LOCATION_HEADLINE.to_string(),
        }
    }
}
