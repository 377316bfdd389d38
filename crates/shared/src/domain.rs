use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::BloomError;

static ZIP_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("zip code pattern compiles"));

pub const INVALID_ZIP_MESSAGE: &str = "Please enter a valid 5-digit US zip code.";

/// A validated US zip code (`NNNNN` or `NNNNN-NNNN`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationKey(String);

impl LocationKey {
    pub fn parse(raw: &str) -> Result<Self, BloomError> {
        if is_valid_zip_code(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(BloomError::invalid_location(INVALID_ZIP_MESSAGE))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First digit of the zip code; the catalog buckets regions by it.
    pub fn region_digit(&self) -> char {
        self.0.chars().next().unwrap_or('0')
    }
}

pub fn is_valid_zip_code(raw: &str) -> bool {
    ZIP_CODE_PATTERN.is_match(raw)
}

impl FromStr for LocationKey {
    type Err = BloomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LocationKey {
    type Error = BloomError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LocationKey> for String {
    fn from(value: LocationKey) -> Self {
        value.0
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub common_name: String,
    pub scientific_name: String,
    pub description: String,
    pub image_url: String,
    pub growing_conditions: String,
    pub ecosystem_benefits: String,
    pub bloom_time: String,
    pub maintenance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvasiveRecord {
    pub common_name: String,
    pub scientific_name: String,
    pub description: String,
    pub image_url: String,
    /// Common names of suggested natives. Matched by name only; may not exist
    /// in the same result set.
    #[serde(default)]
    pub native_alternatives: Vec<String>,
}

/// Case-insensitive common-name lookup against a native result set.
pub fn find_native_by_name<'a>(natives: &'a [PlantRecord], name: &str) -> Option<&'a PlantRecord> {
    natives
        .iter()
        .find(|plant| plant.common_name.eq_ignore_ascii_case(name))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeLink {
    pub name: String,
    pub matched: Option<PlantRecord>,
}

impl AlternativeLink {
    pub fn resolve(name: &str, natives: &[PlantRecord]) -> Self {
        Self {
            name: name.to_string(),
            matched: find_native_by_name(natives, name).cloned(),
        }
    }

    pub fn title(&self) -> String {
        match &self.matched {
            Some(plant) => format!("{} ({})", self.name, plant.scientific_name),
            None => format!("Native alternative: {}", self.name),
        }
    }
}
