//! Weather condition derived from WMO weather codes

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Per-code description of a WMO weather code, including intensity
///
/// Unlisted codes render as `Unknown weather code: {code}`.
#[must_use]
pub fn wmo_description(code: u8) -> Cow<'static, str> {
    let text = match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => return Cow::Owned(format!("Unknown weather code: {code}")),
    };
    Cow::Borrowed(text)
}

/// Weather condition derived from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky (WMO 0)
    ClearSky,
    /// Mainly clear (WMO 1)
    MainlyClear,
    /// Partly cloudy (WMO 2)
    PartlyCloudy,
    /// Overcast (WMO 3)
    Overcast,
    /// Fog (WMO 45, 48)
    Fog,
    /// Drizzle (WMO 51, 53, 55)
    Drizzle,
    /// Freezing drizzle (WMO 56, 57)
    FreezingDrizzle,
    /// Rain (WMO 61, 63, 65)
    Rain,
    /// Freezing rain (WMO 66, 67)
    FreezingRain,
    /// Snow (WMO 71, 73, 75)
    Snow,
    /// Snow grains (WMO 77)
    SnowGrains,
    /// Rain showers (WMO 80, 81, 82)
    RainShowers,
    /// Snow showers (WMO 85, 86)
    SnowShowers,
    /// Thunderstorm (WMO 95)
    Thunderstorm,
    /// Thunderstorm with hail (WMO 96, 99)
    ThunderstormWithHail,
    /// Unknown condition
    Unknown,
}

/// Coarse grouping used when summarising a week of forecasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkyCategory {
    Clear,
    Cloudy,
    Rainy,
    Snowy,
}

impl WeatherCondition {
    /// Convert WMO weather code to `WeatherCondition`
    ///
    /// See: <https://open-meteo.com/en/docs> for WMO code reference
    #[must_use]
    pub const fn from_wmo_code(code: u8) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::FreezingDrizzle,
            61 | 63 | 65 => Self::Rain,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 => Self::Snow,
            77 => Self::SnowGrains,
            80..=82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::ThunderstormWithHail,
            _ => Self::Unknown,
        }
    }

    /// Family label of the condition; see [`wmo_description`] for the per-code text
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::FreezingDrizzle => "Freezing drizzle",
            Self::Rain => "Rain",
            Self::FreezingRain => "Freezing rain",
            Self::Snow => "Snow",
            Self::SnowGrains => "Snow grains",
            Self::RainShowers => "Rain showers",
            Self::SnowShowers => "Snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormWithHail => "Thunderstorm with hail",
            Self::Unknown => "Unknown",
        }
    }

    /// Get an emoji representation of the weather condition
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::ClearSky => "☀️",
            Self::MainlyClear => "🌤️",
            Self::PartlyCloudy => "⛅",
            Self::Overcast => "☁️",
            Self::Fog => "🌫️",
            Self::Drizzle | Self::Rain | Self::RainShowers => "🌧️",
            Self::FreezingDrizzle | Self::FreezingRain => "🌨️",
            Self::Snow | Self::SnowGrains | Self::SnowShowers => "❄️",
            Self::Thunderstorm | Self::ThunderstormWithHail => "⛈️",
            Self::Unknown => "❓",
        }
    }

    /// Sky category for week summaries; fog, thunderstorms and unknown codes have none
    #[must_use]
    pub const fn sky_category(&self) -> Option<SkyCategory> {
        match self {
            Self::ClearSky | Self::MainlyClear => Some(SkyCategory::Clear),
            Self::PartlyCloudy | Self::Overcast => Some(SkyCategory::Cloudy),
            Self::Drizzle
            | Self::FreezingDrizzle
            | Self::Rain
            | Self::FreezingRain
            | Self::RainShowers => Some(SkyCategory::Rainy),
            Self::Snow | Self::SnowGrains | Self::SnowShowers => Some(SkyCategory::Snowy),
            Self::Fog | Self::Thunderstorm | Self::ThunderstormWithHail | Self::Unknown => None,
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_wmo_code_known_codes() {
        assert_eq!(WeatherCondition::from_wmo_code(0), WeatherCondition::ClearSky);
        assert_eq!(WeatherCondition::from_wmo_code(3), WeatherCondition::Overcast);
        assert_eq!(WeatherCondition::from_wmo_code(48), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_wmo_code(63), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(81), WeatherCondition::RainShowers);
        assert_eq!(WeatherCondition::from_wmo_code(86), WeatherCondition::SnowShowers);
        assert_eq!(WeatherCondition::from_wmo_code(95), WeatherCondition::Thunderstorm);
        assert_eq!(
            WeatherCondition::from_wmo_code(99),
            WeatherCondition::ThunderstormWithHail
        );
    }

    #[test]
    fn wmo_description_covers_every_code() {
        let table: [(u8, &str); 28] = [
            (0, "Clear sky"),
            (1, "Mainly clear"),
            (2, "Partly cloudy"),
            (3, "Overcast"),
            (45, "Fog"),
            (48, "Depositing rime fog"),
            (51, "Light drizzle"),
            (53, "Moderate drizzle"),
            (55, "Dense drizzle"),
            (56, "Light freezing drizzle"),
            (57, "Dense freezing drizzle"),
            (61, "Slight rain"),
            (63, "Moderate rain"),
            (65, "Heavy rain"),
            (66, "Light freezing rain"),
            (67, "Heavy freezing rain"),
            (71, "Slight snow"),
            (73, "Moderate snow"),
            (75, "Heavy snow"),
            (77, "Snow grains"),
            (80, "Slight rain showers"),
            (81, "Moderate rain showers"),
            (82, "Violent rain showers"),
            (85, "Slight snow showers"),
            (86, "Heavy snow showers"),
            (95, "Thunderstorm"),
            (96, "Thunderstorm with slight hail"),
            (99, "Thunderstorm with heavy hail"),
        ];

        for (code, expected) in table {
            assert_eq!(wmo_description(code), expected, "code {code}");
            assert_ne!(WeatherCondition::from_wmo_code(code), WeatherCondition::Unknown);
        }
    }

    #[test]
    fn wmo_description_unknown_code_names_the_code() {
        assert_eq!(wmo_description(4), "Unknown weather code: 4");
        assert_eq!(wmo_description(100), "Unknown weather code: 100");
        assert!(matches!(wmo_description(0), Cow::Borrowed(_)));
    }

    #[test]
    fn from_wmo_code_unknown() {
        assert_eq!(WeatherCondition::from_wmo_code(4), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_wmo_code(255), WeatherCondition::Unknown);
    }

    #[test]
    fn display_uses_description() {
        assert_eq!(WeatherCondition::PartlyCloudy.to_string(), "Partly cloudy");
        assert_eq!(WeatherCondition::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn emoji_groups() {
        assert_eq!(WeatherCondition::ClearSky.emoji(), "☀️");
        assert_eq!(WeatherCondition::SnowGrains.emoji(), "❄️");
        assert_eq!(WeatherCondition::ThunderstormWithHail.emoji(), "⛈️");
    }

    #[test]
    fn sky_categories() {
        assert_eq!(
            WeatherCondition::MainlyClear.sky_category(),
            Some(SkyCategory::Clear)
        );
        assert_eq!(
            WeatherCondition::Overcast.sky_category(),
            Some(SkyCategory::Cloudy)
        );
        assert_eq!(
            WeatherCondition::FreezingRain.sky_category(),
            Some(SkyCategory::Rainy)
        );
        assert_eq!(
            WeatherCondition::SnowShowers.sky_category(),
            Some(SkyCategory::Snowy)
        );
        assert_eq!(WeatherCondition::Fog.sky_category(), None);
        assert_eq!(WeatherCondition::Thunderstorm.sky_category(), None);
    }

    #[test]
    fn serde_snake_case() {
        let json = serde_json::to_string(&WeatherCondition::RainShowers).unwrap();
        assert_eq!(json, r#""rain_showers""#);
        let parsed: WeatherCondition = serde_json::from_str(r#""clear_sky""#).unwrap();
        assert_eq!(parsed, WeatherCondition::ClearSky);
    }
}
