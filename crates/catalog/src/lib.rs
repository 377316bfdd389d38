//! Static plant catalog keyed by zip code region, with simulated lookup latency.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{
    domain::{InvasiveRecord, LocationKey, PlantRecord},
    error::BloomError,
};
use tracing::{debug, warn};

mod data;

pub const DEFAULT_NATIVE_LATENCY: Duration = Duration::from_millis(800);
pub const DEFAULT_INVASIVE_LATENCY: Duration = Duration::from_millis(1200);

/// Coarse region derived from the first digit of a zip code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Northeast,
    Southeast,
    Midwest,
    SouthCentral,
    Mountain,
    Pacific,
}

impl Region {
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' | '1' | '2' => Some(Self::Northeast),
            '3' => Some(Self::Southeast),
            '4' | '5' | '6' => Some(Self::Midwest),
            '7' => Some(Self::SouthCentral),
            '8' => Some(Self::Mountain),
            '9' => Some(Self::Pacific),
            _ => None,
        }
    }

    pub fn for_location(location: &LocationKey) -> Option<Self> {
        Self::from_digit(location.region_digit())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Northeast => "Northeast & Mid-Atlantic",
            Self::Southeast => "Southeast",
            Self::Midwest => "Midwest",
            Self::SouthCentral => "South Central",
            Self::Mountain => "Mountains & Southwest",
            Self::Pacific => "West Coast & Pacific",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[async_trait]
pub trait PlantCatalog: Send + Sync {
    async fn native_plants(&self, location: &LocationKey) -> Result<Vec<PlantRecord>, BloomError>;
    async fn invasive_plants(
        &self,
        location: &LocationKey,
    ) -> Result<Vec<InvasiveRecord>, BloomError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLatency {
    pub native: Duration,
    pub invasive: Duration,
}

impl Default for CatalogLatency {
    fn default() -> Self {
        Self {
            native: DEFAULT_NATIVE_LATENCY,
            invasive: DEFAULT_INVASIVE_LATENCY,
        }
    }
}

impl CatalogLatency {
    pub fn none() -> Self {
        Self {
            native: Duration::ZERO,
            invasive: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    latency: CatalogLatency,
}

impl StaticCatalog {
    pub fn new(latency: CatalogLatency) -> Self {
        Self { latency }
    }

    /// Validates raw text before any simulated latency is spent.
    pub async fn native_plants_for_zip(&self, raw: &str) -> Result<Vec<PlantRecord>, BloomError> {
        let location = parse_for_lookup(raw, "native")?;
        self.native_plants(&location).await
    }

    pub async fn invasive_plants_for_zip(
        &self,
        raw: &str,
    ) -> Result<Vec<InvasiveRecord>, BloomError> {
        let location = parse_for_lookup(raw, "invasive")?;
        self.invasive_plants(&location).await
    }
}

fn parse_for_lookup(raw: &str, kind: &str) -> Result<LocationKey, BloomError> {
    LocationKey::parse(raw).map_err(|_| {
        warn!(zip = raw, kind, "rejected malformed zip code");
        BloomError::invalid_location(format!(
            "Invalid zip code format provided for {kind} plants."
        ))
    })
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl PlantCatalog for StaticCatalog {
    async fn native_plants(&self, location: &LocationKey) -> Result<Vec<PlantRecord>, BloomError> {
        debug!(zip = %location, "fetching native plants");
        simulate_latency(self.latency.native).await;

        let Some(region) = Region::for_location(location) else {
            warn!(zip = %location, "zip code does not map to a known region");
            return Ok(Vec::new());
        };
        Ok(data::natives_for(region)
            .iter()
            .map(|entry| entry.to_record())
            .collect())
    }

    async fn invasive_plants(
        &self,
        location: &LocationKey,
    ) -> Result<Vec<InvasiveRecord>, BloomError> {
        debug!(zip = %location, "fetching invasive plants");
        simulate_latency(self.latency.invasive).await;

        let Some(region) = Region::for_location(location) else {
            warn!(zip = %location, "zip code does not map to a known region");
            return Ok(Vec::new());
        };
        Ok(data::invasives_for(region)
            .iter()
            .map(|entry| entry.to_record())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{domain::find_native_by_name, error::ErrorCode};
    use tokio::time::Instant;

    fn zip(raw: &str) -> LocationKey {
        LocationKey::parse(raw).expect("zip")
    }

    #[test]
    fn every_digit_maps_to_a_region() {
        for digit in '0'..='9' {
            assert!(Region::from_digit(digit).is_some(), "digit {digit}");
        }
        assert_eq!(Region::from_digit('x'), None);
        assert_eq!(Region::for_location(&zip("02139")), Some(Region::Northeast));
        assert_eq!(Region::for_location(&zip("60601")), Some(Region::Midwest));
    }

    #[tokio::test]
    async fn returns_regional_natives_in_table_order() {
        let catalog = StaticCatalog::new(CatalogLatency::none());
        let natives = catalog.native_plants(&zip("94110")).await.expect("natives");
        let names: Vec<_> = natives.iter().map(|p| p.common_name.as_str()).collect();
        assert_eq!(
            names,
            [
                "California Poppy",
                "Coast Live Oak",
                "Toyon",
                "California Buckwheat"
            ]
        );
        assert_eq!(
            natives[0].image_url,
            "https://picsum.photos/seed/capoppy/400/300"
        );
    }

    #[tokio::test]
    async fn every_region_has_natives_and_invasives_with_identity_fields() {
        let catalog = StaticCatalog::new(CatalogLatency::none());
        for digit in '0'..='9' {
            let location = zip(&format!("{digit}0000"));
            let natives = catalog.native_plants(&location).await.expect("natives");
            let invasives = catalog.invasive_plants(&location).await.expect("invasives");
            assert!(!natives.is_empty(), "natives for {digit}");
            assert!(!invasives.is_empty(), "invasives for {digit}");
            assert!(natives
                .iter()
                .all(|p| !p.common_name.is_empty() && !p.scientific_name.is_empty()));
        }
    }

    #[tokio::test]
    async fn some_alternatives_reference_natives_outside_the_result_set() {
        let catalog = StaticCatalog::new(CatalogLatency::none());
        let location = zip("10001");
        let natives = catalog.native_plants(&location).await.expect("natives");
        let invasives = catalog.invasive_plants(&location).await.expect("invasives");

        let knotweed = &invasives[0];
        assert!(knotweed
            .native_alternatives
            .iter()
            .all(|name| find_native_by_name(&natives, name).is_some()));

        let garlic_mustard = &invasives[1];
        assert!(garlic_mustard
            .native_alternatives
            .iter()
            .all(|name| find_native_by_name(&natives, name).is_none()));
    }

    #[tokio::test(start_paused = true)]
    async fn malformed_zip_is_rejected_before_latency() {
        let catalog = StaticCatalog::default();
        let started = Instant::now();

        let err = catalog
            .native_plants_for_zip("1234")
            .await
            .expect_err("should reject");
        assert_eq!(err.code, ErrorCode::InvalidLocationFormat);
        assert_eq!(err.message, "Invalid zip code format provided for native plants.");

        let err = catalog
            .invasive_plants_for_zip("abcde")
            .await
            .expect_err("should reject");
        assert_eq!(err.code, ErrorCode::InvalidLocationFormat);

        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn valid_lookups_wait_for_configured_latency() {
        let catalog = StaticCatalog::default();
        let started = Instant::now();
        catalog
            .native_plants_for_zip("30301")
            .await
            .expect("natives");
        assert!(started.elapsed() >= DEFAULT_NATIVE_LATENCY);

        let started = Instant::now();
        catalog
            .invasive_plants_for_zip("30301-1234")
            .await
            .expect("invasives");
        assert!(started.elapsed() >= DEFAULT_INVASIVE_LATENCY);
    }
}
