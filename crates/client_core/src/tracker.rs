//! "Lawn-to-Local" running total of lawn converted to native habitat.

use serde::Serialize;
use shared::error::BloomError;
use tracing::info;

use crate::area::{parse_area, validate_area};

pub const DEFAULT_GOAL_SQFT: f64 = 500.0;

const INVALID_AREA_MESSAGE: &str = "Please enter a valid positive number for the area converted.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerSnapshot {
    pub total_sqft: f64,
    pub goal_sqft: f64,
    pub progress: f64,
    pub progress_percent: u32,
}

#[derive(Debug, Clone)]
pub struct HabitatTracker {
    total_sqft: f64,
    goal_sqft: f64,
    input: String,
}

impl Default for HabitatTracker {
    fn default() -> Self {
        Self::new(DEFAULT_GOAL_SQFT)
    }
}

impl HabitatTracker {
    pub fn new(goal_sqft: f64) -> Self {
        let goal_sqft = if goal_sqft.is_finite() && goal_sqft > 0.0 {
            goal_sqft
        } else {
            DEFAULT_GOAL_SQFT
        };
        Self {
            total_sqft: 0.0,
            goal_sqft,
            input: String::new(),
        }
    }

    /// Seeds the total, e.g. from a value the owning context persisted.
    pub fn with_initial_total(mut self, total_sqft: f64) -> Self {
        if total_sqft.is_finite() && total_sqft >= 0.0 {
            self.total_sqft = total_sqft;
        }
        self
    }

    pub fn total(&self) -> f64 {
        self.total_sqft
    }

    pub fn goal(&self) -> f64 {
        self.goal_sqft
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.input = raw.into();
    }

    /// Adds `delta` and returns the new total. Invalid deltas leave the
    /// tracker untouched.
    pub fn log_area(&mut self, delta: f64) -> Result<f64, BloomError> {
        let delta = validate_area(delta, INVALID_AREA_MESSAGE)?;
        let total = self.total_sqft + delta;
        if !total.is_finite() {
            return Err(BloomError::validation(INVALID_AREA_MESSAGE));
        }
        self.total_sqft = total;
        self.input.clear();
        info!(delta, total = self.total_sqft, "habitat area logged");
        Ok(self.total_sqft)
    }

    pub fn submit_input(&mut self) -> Result<f64, BloomError> {
        let delta = parse_area(&self.input, INVALID_AREA_MESSAGE)?;
        self.log_area(delta)
    }

    pub fn progress(&self) -> f64 {
        (self.total_sqft / self.goal_sqft).min(1.0)
    }

    pub fn progress_percent(&self) -> u32 {
        (self.progress() * 100.0).round() as u32
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            total_sqft: self.total_sqft,
            goal_sqft: self.goal_sqft,
            progress: self.progress(),
            progress_percent: self.progress_percent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn rejects_zero_negative_and_nan_without_changing_total() {
        let mut tracker = HabitatTracker::default();
        tracker.log_area(20.0).expect("seed");

        for delta in [0.0, -5.0, f64::NAN] {
            let err = tracker.log_area(delta).expect_err("should reject");
            assert_eq!(err.code, ErrorCode::ValidationFailure);
            assert_eq!(tracker.total(), 20.0);
        }
    }

    #[test]
    fn logging_fifty_from_zero_is_ten_percent_of_goal() {
        let mut tracker = HabitatTracker::default();
        assert_eq!(tracker.log_area(50.0), Ok(50.0));
        assert_eq!(tracker.total(), 50.0);
        assert!((tracker.progress() - 0.1).abs() < f64::EPSILON);
        assert_eq!(tracker.progress_percent(), 10);
    }

    #[test]
    fn progress_caps_at_one() {
        let mut tracker = HabitatTracker::default().with_initial_total(450.0);
        tracker.log_area(300.0).expect("log");
        assert_eq!(tracker.total(), 750.0);
        assert_eq!(tracker.progress(), 1.0);
        assert_eq!(tracker.progress_percent(), 100);
    }

    #[test]
    fn submitting_input_clears_it_only_on_success() {
        let mut tracker = HabitatTracker::default();

        tracker.set_input("lots");
        assert!(tracker.submit_input().is_err());
        assert_eq!(tracker.input(), "lots");
        assert_eq!(tracker.total(), 0.0);

        tracker.set_input("75.5");
        assert_eq!(tracker.submit_input(), Ok(75.5));
        assert_eq!(tracker.input(), "");
    }

    #[test]
    fn total_that_would_overflow_is_rejected() {
        let mut tracker = HabitatTracker::default();
        assert_eq!(tracker.log_area(f64::MAX), Ok(f64::MAX));

        let err = tracker.log_area(f64::MAX).expect_err("should reject");
        assert_eq!(err.code, ErrorCode::ValidationFailure);
        assert_eq!(tracker.total(), f64::MAX);
        assert_eq!(tracker.progress(), 1.0);
    }

    #[test]
    fn invalid_goal_falls_back_to_default() {
        assert_eq!(HabitatTracker::new(0.0).goal(), DEFAULT_GOAL_SQFT);
        assert_eq!(HabitatTracker::new(1000.0).goal(), 1000.0);
    }
}
