//! Property-based tests for the transformer
//!
//! Random forecasts are pushed through `TransformService` to check the
//! invariants that hold for every input.

use application::{AlertThresholds, TransformService, trend};
use chrono::{Days, NaiveDate};
use domain::{
    ForecastEntry, GeoLocation, Humidity, Location, Timezone, Trend, WeatherCondition,
    WeatherRecord, WeatherSnapshot,
};
use proptest::prelude::*;

fn location() -> Location {
    Location::new(
        "Toronto",
        "Canada",
        GeoLocation::toronto(),
        Timezone::new("America/Toronto").unwrap(),
    )
}

fn current(temperature: f64, humidity: u8) -> WeatherRecord {
    WeatherRecord {
        observed_at: NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        temperature,
        apparent_temperature: temperature,
        humidity: Humidity::new(humidity).unwrap(),
        wind_speed: 10.0,
        wind_direction: 180,
        precipitation: 0.0,
        weather_code: 0,
        condition: WeatherCondition::ClearSky,
    }
}

fn day_strategy() -> impl Strategy<Value = (f64, f64, f64, u8)> {
    (
        -30.0f64..45.0,
        0.0f64..15.0,
        0.0f64..40.0,
        prop_oneof![Just(0u8), Just(3), Just(61), Just(75), Just(95), Just(99)],
    )
}

fn forecast(days: &[(f64, f64, f64, u8)]) -> Vec<ForecastEntry> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    days.iter()
        .enumerate()
        .map(|(i, &(max, spread, precip, code))| ForecastEntry {
            date: start + Days::new(i as u64),
            temperature_max: max,
            temperature_min: max - spread,
            precipitation_sum: precip,
            precipitation_probability: None,
            wind_speed_max: 20.0,
            wind_direction_dominant: 90,
            weather_code: code,
            condition: WeatherCondition::from_wmo_code(code),
        })
        .collect()
}

fn snapshot(days: &[(f64, f64, f64, u8)]) -> WeatherSnapshot {
    WeatherSnapshot::new(location(), current(20.0, 50), forecast(days)).unwrap()
}

proptest! {
    #[test]
    fn analysis_is_deterministic(days in prop::collection::vec(day_strategy(), 0..10)) {
        let service = TransformService::default();
        let snap = snapshot(&days);
        prop_assert_eq!(service.analyze(&snap), service.analyze(&snap));
    }

    #[test]
    fn trend_needs_two_days(days in prop::collection::vec(day_strategy(), 0..10)) {
        let entries = forecast(&days);
        let insufficient = trend(&entries) == Trend::InsufficientData;
        prop_assert_eq!(insufficient, entries.len() < 2);
    }

    #[test]
    fn heat_alerts_match_hot_days(days in prop::collection::vec(day_strategy(), 0..10)) {
        let service = TransformService::default();
        let entries = forecast(&days);
        let alerts = service.alerts(&entries);

        let hot_days = entries.iter().filter(|d| d.temperature_max > 35.0).count();
        let heat_alerts = alerts.iter().filter(|a| a.starts_with("Heat alert")).count();
        prop_assert_eq!(hot_days, heat_alerts);
    }

    #[test]
    fn at_most_four_alerts_per_day(days in prop::collection::vec(day_strategy(), 0..10)) {
        let service = TransformService::default();
        let entries = forecast(&days);
        prop_assert!(service.alerts(&entries).len() <= entries.len() * 4);
    }

    #[test]
    fn raising_thresholds_never_adds_alerts(days in prop::collection::vec(day_strategy(), 0..10)) {
        let entries = forecast(&days);
        let default_alerts = TransformService::default().alerts(&entries).len();

        let lenient = TransformService::new(AlertThresholds {
            heat_max: 100.0,
            cold_min: -100.0,
            heavy_precipitation_mm: 1000.0,
            thunderstorm_code: u8::MAX,
        });
        prop_assert!(lenient.alerts(&entries).len() <= default_alerts);
    }

    #[test]
    fn temperature_range_brackets_every_day(days in prop::collection::vec(day_strategy(), 1..10)) {
        let snap = snapshot(&days);
        let analysis = TransformService::default().analyze(&snap);
        let range = analysis.forecast.temperature_range.unwrap();

        for day in snap.forecast() {
            prop_assert!(day.temperature_max <= range.highest);
            prop_assert!(day.temperature_min >= range.lowest);
        }
    }

    #[test]
    fn rainy_days_never_exceed_horizon(days in prop::collection::vec(day_strategy(), 0..10)) {
        let snap = snapshot(&days);
        let analysis = TransformService::default().analyze(&snap);
        prop_assert!(analysis.forecast.precipitation.rainy_days <= snap.forecast().len());
        prop_assert_eq!(analysis.forecast.days, snap.forecast().len());
    }
}
