use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::day::DayIteration;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Locations of the inventory files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    #[serde(default = "default_hotels_path")]
    pub hotels_path: PathBuf,
    #[serde(default = "default_bookings_path")]
    pub bookings_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            hotels_path: default_hotels_path(),
            bookings_path: default_bookings_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EngineConfig {
    /// How booking stays are walked day by day.
    #[serde(default)]
    pub day_iteration: DayIteration,
}

fn default_hotels_path() -> PathBuf {
    PathBuf::from("hotels.json")
}

fn default_bookings_path() -> PathBuf {
    PathBuf::from("bookings.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.data.hotels_path, PathBuf::from("hotels.json"));
        assert_eq!(config.data.bookings_path, PathBuf::from("bookings.json"));
        assert_eq!(config.engine.day_iteration, DayIteration::Integer);
    }

    #[test]
    fn config_serde_roundtrip() {
        let mut original = Config::default();
        original.engine.day_iteration = DayIteration::Calendar;
        let yaml = serde_yml::to_string(&original).unwrap();
        let restored: Config = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(restored.data.hotels_path, original.data.hotels_path);
        assert_eq!(restored.engine.day_iteration, DayIteration::Calendar);
    }

    #[test]
    fn config_deserialize_with_overrides() {
        let yaml = "data:\n  hotels_path: /srv/hotels.json";
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.data.hotels_path, PathBuf::from("/srv/hotels.json"));
        // Other fields get defaults
        assert_eq!(config.data.bookings_path, PathBuf::from("bookings.json"));
        assert_eq!(config.engine.day_iteration, DayIteration::Integer);
    }

    #[test]
    fn config_rejects_unknown_day_iteration() {
        let yaml = "engine:\n  day_iteration: lunar";
        assert!(serde_yml::from_str::<Config>(yaml).is_err());
    }
}
