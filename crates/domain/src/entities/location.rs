//! Location the pipeline reports on

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{GeoLocation, Timezone};

/// A named place with coordinates and the timezone its local times are expressed in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    country: String,
    coordinates: GeoLocation,
    timezone: Timezone,
}

impl Location {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        coordinates: GeoLocation,
        timezone: Timezone,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            coordinates,
            timezone,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub const fn coordinates(&self) -> GeoLocation {
        self.coordinates
    }

    #[must_use]
    pub const fn timezone(&self) -> &Timezone {
        &self.timezone
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}
