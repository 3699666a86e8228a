//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod humidity;
mod timezone;
mod weather_condition;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use humidity::{Humidity, InvalidHumidity};
pub use timezone::Timezone;
pub use weather_condition::{SkyCategory, WeatherCondition, wmo_description};
