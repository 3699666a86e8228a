//! Timezone value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// An IANA timezone name, validated against the tz database
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timezone(String);

impl Timezone {
    /// Create a validated timezone
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the name is not a known IANA zone.
    pub fn new(tz: impl Into<String>) -> Result<Self, DomainError> {
        let tz = tz.into();
        tz.parse::<chrono_tz::Tz>()
            .map_err(|_| DomainError::InvalidTimezone(tz.clone()))?;
        Ok(Self(tz))
    }

    /// Get the timezone string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Timezone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Timezone> for String {
    fn from(tz: Timezone) -> Self {
        tz.0
    }
}
