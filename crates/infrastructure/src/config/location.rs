//! Location configuration

use domain::{DomainError, GeoLocation, Location, Timezone};
use serde::{Deserialize, Serialize};

/// The place the pipeline reports on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_country")]
    pub country: String,

    /// Latitude (-90.0 to 90.0)
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Longitude (-180.0 to 180.0)
    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// IANA timezone name; provider times are reported in this zone
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_name() -> String {
    "Toronto".to_string()
}

fn default_country() -> String {
    "Canada".to_string()
}

const fn default_latitude() -> f64 {
    43.6532
}

const fn default_longitude() -> f64 {
    -79.3832
}

fn default_timezone() -> String {
    "America/Toronto".to_string()
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            country: default_country(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            timezone: default_timezone(),
        }
    }
}

impl LocationConfig {
    /// Convert to a validated domain `Location`
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of range or the timezone
    /// is not a known IANA name.
    pub fn to_location(&self) -> Result<Location, DomainError> {
        let coordinates = GeoLocation::new(self.latitude, self.longitude)?;
        let timezone = Timezone::new(self.timezone.clone())?;
        Ok(Location::new(
            self.name.clone(),
            self.country.clone(),
            coordinates,
            timezone,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_toronto() {
        let location = LocationConfig::default().to_location().unwrap();
        assert_eq!(location.to_string(), "Toronto, Canada");
        assert_eq!(location.timezone().as_str(), "America/Toronto");
        assert!((location.coordinates().latitude() - 43.6532).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let config = LocationConfig {
            latitude: 91.0,
            ..Default::default()
        };
        assert!(matches!(
            config.to_location(),
            Err(DomainError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        let config = LocationConfig {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.to_location(),
            Err(DomainError::InvalidTimezone(_))
        ));
    }
}
