pub use crate::dataset::weather::{load_weather, load_weather_owned};
