//! Weather conditions and per-link travel times.
//!
//! Seed files carry four travel times per link: one for clear weather and
//! one each for rain, snow and storms. The graph itself only holds the
//! current weight; the alternatives live in a [`WeatherTable`] so a link
//! can be switched to a condition later.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A road condition.
///
/// Parses English names and the Spanish names used in seed files,
/// case-insensitively.
///
/// # Examples
///
/// ```
/// use u_roadnet::weather::Weather;
///
/// assert_eq!("lluvia".parse::<Weather>().unwrap(), Weather::Rain);
/// assert_eq!("Storm".parse::<Weather>().unwrap(), Weather::Storm);
/// assert!("fog".parse::<Weather>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Normal,
    Rain,
    Snow,
    Storm,
}

impl Weather {
    /// All conditions, in seed-file column order.
    pub const ALL: [Weather; 4] = [Weather::Normal, Weather::Rain, Weather::Snow, Weather::Storm];
}

impl FromStr for Weather {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Weather::Normal),
            "rain" | "lluvia" => Ok(Weather::Rain),
            "snow" | "nieve" => Ok(Weather::Snow),
            "storm" | "tormenta" => Ok(Weather::Storm),
            _ => Err(ParseError::UnknownWeather(s.to_string())),
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Weather::Normal => "normal",
            Weather::Rain => "rain",
            Weather::Snow => "snow",
            Weather::Storm => "storm",
        })
    }
}

/// Travel times for one link under each condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherTimes {
    pub normal: f64,
    pub rain: f64,
    pub snow: f64,
    pub storm: f64,
}

impl WeatherTimes {
    /// Travel time under `weather`.
    pub fn time(&self, weather: Weather) -> f64 {
        match weather {
            Weather::Normal => self.normal,
            Weather::Rain => self.rain,
            Weather::Snow => self.snow,
            Weather::Storm => self.storm,
        }
    }
}

/// Weather profiles keyed by ordered `(from, to)` pair.
#[derive(Debug, Clone, Default)]
pub struct WeatherTable {
    profiles: BTreeMap<(String, String), WeatherTimes>,
}

impl WeatherTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the profile for `from → to`, replacing any previous one.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>, times: WeatherTimes) {
        self.profiles.insert((from.into(), to.into()), times);
    }

    /// Profile for `from → to`, if one was recorded.
    pub fn get(&self, from: &str, to: &str) -> Option<&WeatherTimes> {
        self.profiles.get(&(from.to_string(), to.to_string()))
    }

    /// Number of recorded profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` if no profile was recorded.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times() -> WeatherTimes {
        WeatherTimes {
            normal: 10.0,
            rain: 15.0,
            snow: 20.0,
            storm: 50.0,
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("NIEVE".parse::<Weather>(), Ok(Weather::Snow));
        assert_eq!("tormenta".parse::<Weather>(), Ok(Weather::Storm));
        assert_eq!("normal".parse::<Weather>(), Ok(Weather::Normal));
        assert!("clear".parse::<Weather>().is_err());
        assert_eq!(
            "granizo".parse::<Weather>(),
            Err(ParseError::UnknownWeather("granizo".into()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for w in Weather::ALL {
            assert_eq!(w.to_string().parse::<Weather>(), Ok(w));
        }
    }

    #[test]
    fn test_time_per_condition() {
        let t = times();
        assert_eq!(t.time(Weather::Normal), 10.0);
        assert_eq!(t.time(Weather::Storm), 50.0);
    }

    #[test]
    fn test_table_is_directed() {
        let mut table = WeatherTable::new();
        table.insert("A", "B", times());
        assert_eq!(table.len(), 1);
        assert!(table.get("A", "B").is_some());
        assert!(table.get("B", "A").is_none());
    }
}
