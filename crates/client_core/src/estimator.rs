//! Yard impact estimate for converting lawn to native plantings.

use serde::Serialize;
use shared::error::BloomError;

use crate::area::{parse_area, validate_area};

pub const WATER_GALLONS_PER_SQFT: f64 = 25.0;
pub const EMISSIONS_LBS_PER_SQFT: f64 = 0.1;
pub const CARBON_LBS_PER_SQFT: f64 = 0.5;

const INVALID_AREA_MESSAGE: &str = "Please enter a valid positive number for the lawn area.";

/// Yearly figures. Water and carbon are whole units; emissions carry one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactEstimate {
    pub water_gallons: f64,
    pub emissions_lbs: f64,
    pub carbon_lbs: f64,
}

impl ImpactEstimate {
    fn is_finite(&self) -> bool {
        self.water_gallons.is_finite()
            && self.emissions_lbs.is_finite()
            && self.carbon_lbs.is_finite()
    }
}

pub fn estimate_impact(area_sqft: f64) -> Result<ImpactEstimate, BloomError> {
    let area = validate_area(area_sqft, INVALID_AREA_MESSAGE)?;
    let estimate = ImpactEstimate {
        water_gallons: (area * WATER_GALLONS_PER_SQFT).round(),
        emissions_lbs: (area * EMISSIONS_LBS_PER_SQFT * 10.0).round() / 10.0,
        carbon_lbs: (area * CARBON_LBS_PER_SQFT).round(),
    };
    if !estimate.is_finite() {
        return Err(BloomError::validation(INVALID_AREA_MESSAGE));
    }
    Ok(estimate)
}

pub fn estimate_impact_from_input(raw: &str) -> Result<ImpactEstimate, BloomError> {
    estimate_impact(parse_area(raw, INVALID_AREA_MESSAGE)?)
}

/// Input field plus the last displayed estimate.
#[derive(Debug, Clone, Default)]
pub struct ImpactEstimator {
    input: String,
    estimate: Option<ImpactEstimate>,
}

impl ImpactEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn estimate(&self) -> Option<ImpactEstimate> {
        self.estimate
    }

    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.input = raw.into();
        if parse_area(&self.input, INVALID_AREA_MESSAGE).is_err() {
            self.estimate = None;
        }
    }

    pub fn submit(&mut self) -> Result<ImpactEstimate, BloomError> {
        match estimate_impact_from_input(&self.input) {
            Ok(estimate) => {
                self.estimate = Some(estimate);
                Ok(estimate)
            }
            Err(err) => {
                self.estimate = None;
                Err(err)
            }
        }
    }
}
