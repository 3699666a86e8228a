//! Test fixtures for snapshot and report testing.

use application::TransformService;
use chrono::NaiveDate;
use domain::{
    ForecastEntry, GeoLocation, Humidity, Location, Timezone, WeatherCondition, WeatherRecord,
    WeatherReport, WeatherSnapshot,
};

fn day(d: u32, max: f64, min: f64, precip: f64, probability: Option<u8>, code: u8) -> ForecastEntry {
    ForecastEntry {
        date: NaiveDate::from_ymd_opt(2024, 7, d).expect("valid date"),
        temperature_max: max,
        temperature_min: min,
        precipitation_sum: precip,
        precipitation_probability: probability,
        wind_speed_max: 18.5,
        wind_direction_dominant: 225,
        weather_code: code,
        condition: WeatherCondition::from_wmo_code(code),
    }
}

/// Toronto with its real coordinates and timezone
#[must_use]
pub fn sample_location() -> Location {
    Location::new(
        "Toronto",
        "Canada",
        GeoLocation::toronto(),
        Timezone::new("America/Toronto").expect("valid timezone"),
    )
}

/// Mid-summer week: warming, one wet day, one day without a probability
#[must_use]
pub fn sample_snapshot() -> WeatherSnapshot {
    let current = WeatherRecord {
        observed_at: NaiveDate::from_ymd_opt(2024, 7, 1)
            .and_then(|d| d.and_hms_opt(14, 0, 0))
            .expect("valid timestamp"),
        temperature: 22.4,
        apparent_temperature: 23.1,
        humidity: Humidity::new(55).expect("valid humidity"),
        wind_speed: 9.7,
        wind_direction: 240,
        precipitation: 0.0,
        weather_code: 1,
        condition: WeatherCondition::MainlyClear,
    };

    let forecast = vec![
        day(1, 26.0, 17.2, 0.0, Some(5), 1),
        day(2, 27.5, 18.0, 0.0, Some(10), 2),
        day(3, 25.1, 16.4, 6.2, Some(70), 63),
        day(4, 28.3, 18.9, 0.0, None, 0),
        day(5, 29.0, 19.5, 0.4, Some(20), 3),
        day(6, 30.2, 20.1, 0.0, Some(5), 0),
        day(7, 30.8, 21.0, 0.0, Some(0), 1),
    ];

    WeatherSnapshot::new(sample_location(), current, forecast).expect("ordered forecast")
}

/// `sample_snapshot` run through the default transformer
#[must_use]
pub fn sample_report() -> WeatherReport {
    TransformService::default().transform(sample_snapshot())
}
