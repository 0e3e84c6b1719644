//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod sound_id;
mod weather_category;

pub use geo_location::{COORDINATE_PRECISION, GeoLocation};
pub use sound_id::SoundId;
pub use weather_category::WeatherCategory;
