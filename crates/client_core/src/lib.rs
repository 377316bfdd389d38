use std::sync::Arc;

use async_trait::async_trait;
use catalog::PlantCatalog;
use serde::Serialize;
use shared::{
    domain::{AlternativeLink, InvasiveRecord, LocationKey, PlantRecord},
    error::BloomError,
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

mod area;
pub mod estimator;
pub mod notifications;
pub mod preferences;
pub mod session;
pub mod tracker;

pub use estimator::{estimate_impact, ImpactEstimate, ImpactEstimator};
pub use notifications::{Notification, NotificationKind, Severity};
pub use preferences::{AccessibilityPreferences, Theme};
pub use session::Session;
pub use tracker::HabitatTracker;

const NOTIFICATION_CAPACITY: usize = 64;

/// Source of the two independent plant result sets for a location.
#[async_trait]
pub trait PlantRetrieval: Send + Sync {
    async fn fetch_native(&self, location: &LocationKey) -> Result<Vec<PlantRecord>, BloomError>;
    async fn fetch_invasive(
        &self,
        location: &LocationKey,
    ) -> Result<Vec<InvasiveRecord>, BloomError>;
}

pub struct UnavailableRetrieval;

#[async_trait]
impl PlantRetrieval for UnavailableRetrieval {
    async fn fetch_native(&self, _location: &LocationKey) -> Result<Vec<PlantRecord>, BloomError> {
        Err(BloomError::retrieval("native plant data source is unavailable"))
    }

    async fn fetch_invasive(
        &self,
        _location: &LocationKey,
    ) -> Result<Vec<InvasiveRecord>, BloomError> {
        Err(BloomError::retrieval(
            "invasive plant data source is unavailable",
        ))
    }
}

#[async_trait]
impl<T> PlantRetrieval for T
where
    T: PlantCatalog,
{
    async fn fetch_native(&self, location: &LocationKey) -> Result<Vec<PlantRecord>, BloomError> {
        self.native_plants(location).await
    }

    async fn fetch_invasive(
        &self,
        location: &LocationKey,
    ) -> Result<Vec<InvasiveRecord>, BloomError> {
        self.invasive_plants(location).await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlantResults {
    pub native: Vec<PlantRecord>,
    pub invasive: Vec<InvasiveRecord>,
}

impl PlantResults {
    pub fn is_empty(&self) -> bool {
        self.native.is_empty() && self.invasive.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryPhase {
    Idle,
    Submitting,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum QueryState {
    #[default]
    Idle,
    Submitting,
    Loading,
    /// Both lists as returned, possibly empty.
    Success { results: PlantResults },
    Error { reason: String },
}

impl QueryState {
    pub fn phase(&self) -> QueryPhase {
        match self {
            Self::Idle => QueryPhase::Idle,
            Self::Submitting => QueryPhase::Submitting,
            Self::Loading => QueryPhase::Loading,
            Self::Success { .. } => QueryPhase::Success,
            Self::Error { .. } => QueryPhase::Error,
        }
    }

    pub fn results(&self) -> Option<&PlantResults> {
        match self {
            Self::Success { results } => Some(results),
            _ => None,
        }
    }
}

/// How a single `submit` call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Loaded(PlantResults),
    Failed(BloomError),
    /// A newer query (or a clear) took over before this one settled.
    Superseded,
}

#[derive(Default)]
struct ControllerState {
    state: QueryState,
    location: Option<LocationKey>,
    generation: u64,
    submitted_once: bool,
    selected: Option<String>,
}

impl ControllerState {
    fn natives(&self) -> &[PlantRecord] {
        self.state
            .results()
            .map(|results| results.native.as_slice())
            .unwrap_or_default()
    }
}

/// Owns the lookup lifecycle for one session: validation, the concurrent
/// fetch, and reconciliation into [`QueryState`].
pub struct QueryController {
    retrieval: Arc<dyn PlantRetrieval>,
    inner: Mutex<ControllerState>,
    events: broadcast::Sender<Notification>,
}

impl QueryController {
    pub fn new(retrieval: Arc<dyn PlantRetrieval>) -> Arc<Self> {
        let (events, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        Arc::new(Self {
            retrieval,
            inner: Mutex::new(ControllerState::default()),
            events,
        })
    }

    pub fn without_retrieval() -> Arc<Self> {
        Self::new(Arc::new(UnavailableRetrieval))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.events.subscribe()
    }

    pub(crate) fn publish(&self, notification: Notification) {
        let _ = self.events.send(notification);
    }

    pub async fn state(&self) -> QueryState {
        self.inner.lock().await.state.clone()
    }

    pub async fn location(&self) -> Option<LocationKey> {
        self.inner.lock().await.location.clone()
    }

    pub async fn has_submitted(&self) -> bool {
        self.inner.lock().await.submitted_once
    }

    pub async fn submit(&self, raw: &str) -> Result<QueryOutcome, BloomError> {
        let location = match LocationKey::parse(raw) {
            Ok(location) => location,
            Err(err) => {
                warn!(input = raw, "rejected zip code submission");
                self.publish(Notification::invalid_location());
                return Err(err);
            }
        };

        let generation = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            inner.submitted_once = true;
            inner.location = Some(location.clone());
            inner.selected = None;

            inner.state = QueryState::Submitting;
            self.publish(Notification::submitted(&location));

            inner.state = QueryState::Loading;
            self.publish(Notification::loading(&location));
            inner.generation
        };
        info!(zip = %location, generation, "plant lookup started");

        let fetched = futures::future::try_join(
            self.retrieval.fetch_native(&location),
            self.retrieval.fetch_invasive(&location),
        )
        .await;

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            debug!(
                zip = %location,
                generation,
                current = inner.generation,
                "discarding superseded lookup"
            );
            return Ok(QueryOutcome::Superseded);
        }

        match fetched {
            Ok((native, invasive)) => {
                info!(
                    zip = %location,
                    native = native.len(),
                    invasive = invasive.len(),
                    "plant lookup succeeded"
                );
                self.publish(Notification::loaded(&location, native.len(), invasive.len()));
                let results = PlantResults { native, invasive };
                inner.state = QueryState::Success {
                    results: results.clone(),
                };
                Ok(QueryOutcome::Loaded(results))
            }
            Err(err) => {
                warn!(zip = %location, error = %err, "plant lookup failed");
                let reason = format!(
                    "Failed to fetch data for zip code {location}. {}",
                    err.message
                );
                self.publish(Notification::fetch_failed());
                inner.state = QueryState::Error {
                    reason: reason.clone(),
                };
                Ok(QueryOutcome::Failed(BloomError::retrieval(reason)))
            }
        }
    }

    /// Drops the current location. Results are emptied and any in-flight
    /// lookup is superseded; the phase never returns to `Idle`.
    pub async fn clear_location(&self) {
        let mut inner = self.inner.lock().await;
        if !inner.submitted_once {
            return;
        }
        inner.location = None;
        inner.selected = None;
        inner.generation += 1;
        if !matches!(inner.state, QueryState::Error { .. }) {
            inner.state = QueryState::Success {
                results: PlantResults::default(),
            };
        }
        info!(generation = inner.generation, "location cleared");
        self.publish(Notification::results_cleared());
    }

    pub async fn results(&self) -> PlantResults {
        let inner = self.inner.lock().await;
        inner.state.results().cloned().unwrap_or_default()
    }

    /// Selects a native plant from the current results by scientific name.
    pub async fn select_plant(&self, scientific_name: &str) -> Option<PlantRecord> {
        let mut inner = self.inner.lock().await;
        let found = inner
            .natives()
            .iter()
            .find(|plant| plant.scientific_name == scientific_name)
            .cloned();
        match &found {
            Some(plant) => inner.selected = Some(plant.scientific_name.clone()),
            None => debug!(scientific_name, "selected plant not in current results"),
        }
        found
    }

    /// Resolves the selection against the live result set. Any new submit
    /// drops the selection.
    pub async fn selected_plant(&self) -> Option<PlantRecord> {
        let inner = self.inner.lock().await;
        let selected = inner.selected.as_deref()?;
        inner
            .natives()
            .iter()
            .find(|plant| plant.scientific_name == selected)
            .cloned()
    }

    pub async fn close_detail(&self) {
        self.inner.lock().await.selected = None;
    }

    pub async fn alternatives_for(&self, invasive: &InvasiveRecord) -> Vec<AlternativeLink> {
        let inner = self.inner.lock().await;
        let natives = inner.natives();
        invasive
            .native_alternatives
            .iter()
            .map(|name| AlternativeLink::resolve(name, natives))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
