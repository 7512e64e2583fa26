//! Seed-file loader.
//!
//! The seed format is plain text: one header line, then one link per line
//! with six whitespace-separated fields:
//!
//! ```text
//! origin destination normal rain snow storm
//! ```
//!
//! All four times are non-negative integers. The normal time becomes the link weight;
//! the rest go into the [`WeatherTable`].
//!
//! Loading never panics and never silently truncates. A malformed line stops
//! the load; the returned [`SeedLoad`] keeps every link read before it and
//! names the failure. A missing file yields an empty network and an
//! [`SeedError::Io`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::SeedError;
use crate::network::Network;
use crate::weather::{WeatherTable, WeatherTimes};

const FIELDS: usize = 6;

/// One parsed seed line.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRecord {
    pub from: String,
    pub to: String,
    pub times: WeatherTimes,
}

/// Outcome of a load: whatever was built, plus the failure that stopped it.
#[derive(Debug, Default)]
pub struct SeedLoad {
    pub network: Network,
    pub weather: WeatherTable,
    pub error: Option<SeedError>,
}

impl SeedLoad {
    /// Returns `true` if every line was read.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Converts into a `Result`, discarding the partial network on failure.
    pub fn into_result(self) -> Result<(Network, WeatherTable), SeedError> {
        match self.error {
            None => Ok((self.network, self.weather)),
            Some(e) => Err(e),
        }
    }
}

/// Parses one data line. `line` is the 1-based line number for messages.
///
/// # Examples
///
/// ```
/// use u_roadnet::seed::parse_line;
///
/// let rec = parse_line(2, "BuenosAires SaoPaulo 10 15 20 50").unwrap();
/// assert_eq!(rec.from, "BuenosAires");
/// assert_eq!(rec.times.normal, 10.0);
/// assert!(parse_line(3, "BuenosAires SaoPaulo diez 15 20 50").is_err());
/// ```
pub fn parse_line(line: usize, text: &str) -> Result<SeedRecord, SeedError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != FIELDS {
        return Err(SeedError::Malformed {
            line,
            reason: format!("expected {FIELDS} fields, found {}", fields.len()),
        });
    }

    let time = |idx: usize, name: &str| -> Result<f64, SeedError> {
        fields[idx]
            .parse::<i64>()
            .map(|t| t as f64)
            .map_err(|_| SeedError::Malformed {
                line,
                reason: format!("{name} time {:?} is not an integer", fields[idx]),
            })
    };
    // The normal time is checked by the network when the link is added;
    // the weather times never reach it, so they are checked here.
    let weather_time = |idx: usize, name: &str| -> Result<f64, SeedError> {
        let t = time(idx, name)?;
        if t < 0.0 {
            return Err(SeedError::Malformed {
                line,
                reason: format!("{name} time {t} is negative"),
            });
        }
        Ok(t)
    };

    Ok(SeedRecord {
        from: fields[0].to_string(),
        to: fields[1].to_string(),
        times: WeatherTimes {
            normal: time(2, "normal")?,
            rain: weather_time(3, "rain")?,
            snow: weather_time(4, "snow")?,
            storm: weather_time(5, "storm")?,
        },
    })
}

/// Loads seed data from a buffered reader.
#[tracing::instrument(skip_all)]
pub fn load_reader<R: BufRead>(reader: R) -> SeedLoad {
    let mut load = SeedLoad::default();
    let mut lines = reader.lines();

    match lines.next() {
        None => {
            load.error = Some(SeedError::MissingHeader);
            return load;
        }
        Some(Err(e)) => {
            load.error = Some(read_error(1, e));
            return load;
        }
        Some(Ok(_header)) => {}
    }

    for (idx, text) in lines.enumerate() {
        let line = idx + 2;
        let text = match text {
            Ok(text) => text,
            Err(e) => {
                let e = read_error(line, e);
                tracing::warn!(line, error = %e, "seed load stopped");
                load.error = Some(e);
                break;
            }
        };
        if text.trim().is_empty() {
            continue;
        }
        if let Err(e) = add_line(&mut load, line, &text) {
            tracing::warn!(line, error = %e, "seed load stopped");
            load.error = Some(e);
            break;
        }
    }

    tracing::debug!(
        nodes = load.network.node_count(),
        edges = load.network.edge_count(),
        complete = load.is_complete(),
        "seed loaded"
    );
    load
}

/// Loads seed data from a string.
pub fn load_str(text: &str) -> SeedLoad {
    load_reader(text.as_bytes())
}

/// Loads seed data from a file.
pub fn load_path(path: impl AsRef<Path>) -> SeedLoad {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => load_reader(BufReader::new(file)),
        Err(source) => {
            tracing::warn!(path = %path.display(), error = %source, "seed file unavailable");
            SeedLoad {
                error: Some(SeedError::Io {
                    path: path.to_path_buf(),
                    source,
                }),
                ..SeedLoad::default()
            }
        }
    }
}

/// `BufRead::lines` reports invalid UTF-8 as `InvalidData`; that is bad
/// input on a known line, not an I/O failure.
fn read_error(line: usize, e: std::io::Error) -> SeedError {
    if e.kind() == std::io::ErrorKind::InvalidData {
        SeedError::Malformed {
            line,
            reason: "not valid UTF-8".to_string(),
        }
    } else {
        SeedError::Read(e)
    }
}

fn add_line(load: &mut SeedLoad, line: usize, text: &str) -> Result<(), SeedError> {
    let rec = parse_line(line, text)?;
    load.network
        .add_edge(rec.from.as_str(), rec.to.as_str(), rec.times.normal)
        .map_err(|source| SeedError::Network { line, source })?;
    load.weather.insert(rec.from, rec.to, rec.times);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Ciudad1 Ciudad2 tiempoNormal tiempoLluvia tiempoNieve tiempoTormenta
BuenosAires SaoPaulo 10 15 20 50
BuenosAires Lima 15 20 30 70
Lima Quito 10 12 15 20
";

    #[test]
    fn test_load_sample() {
        let load = load_str(SAMPLE);
        assert!(load.is_complete());
        assert_eq!(load.network.node_count(), 4);
        assert_eq!(load.network.edge_count(), 3);
        assert_eq!(load.network.edge_weight("Lima", "Quito"), Some(10.0));
        assert_eq!(load.weather.len(), 3);
        let times = load.weather.get("BuenosAires", "Lima").expect("profile");
        assert_eq!(times.storm, 70.0);
    }

    #[test]
    fn test_header_is_skipped() {
        let load = load_str("A B 1 2 3 4\nC D 5 6 7 8\n");
        assert!(!load.network.has_node("A"));
        assert!(load.network.has_node("C"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let load = load_str("header\n\nA B 1 2 3 4\n   \n");
        assert!(load.is_complete());
        assert_eq!(load.network.edge_count(), 1);
    }

    #[test]
    fn test_malformed_keeps_preceding_lines() {
        let load = load_str("header\nA B 1 2 3 4\nB C 2 3 4\nC D 1 1 1 1\n");
        assert_eq!(load.network.edge_count(), 1);
        assert!(!load.network.has_node("D"));
        match load.error {
            Some(SeedError::Malformed { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("found 5"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_non_integer_weight() {
        let load = load_str("header\nA B 1.5 2 3 4\n");
        assert!(load.network.is_empty());
        assert!(matches!(
            load.error,
            Some(SeedError::Malformed { line: 2, .. })
        ));
    }

    #[test]
    fn test_negative_weight_rejected_by_network() {
        let load = load_str("header\nA B -3 2 3 4\n");
        assert!(matches!(
            load.error,
            Some(SeedError::Network { line: 2, .. })
        ));
        assert_eq!(load.network.edge_count(), 0);
        assert!(load.weather.is_empty());
    }

    #[test]
    fn test_negative_weather_time_rejected() {
        let load = load_str("header\nA B 1 2 3 4\nA C 5 -3 2 1\n");
        assert_eq!(load.network.edge_count(), 1);
        assert_eq!(load.weather.len(), 1);
        match load.error {
            Some(SeedError::Malformed { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("rain"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_names_line() {
        let bytes: &[u8] = b"header\nA B 1 2 3 4\n\xff\xfe C 1 2 3 4\n";
        let load = load_reader(bytes);
        assert_eq!(load.network.edge_count(), 1);
        match load.error {
            Some(SeedError::Malformed { line, reason }) => {
                assert_eq!(line, 3);
                assert_eq!(reason, "not valid UTF-8");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let load = load_str("");
        assert!(matches!(load.error, Some(SeedError::MissingHeader)));
        assert!(load.network.is_empty());
    }

    #[test]
    fn test_missing_file_gives_empty_network() {
        let dir = tempfile::tempdir().expect("tempdir");
        let load = load_path(dir.path().join("logistica.txt"));
        assert!(load.network.is_empty());
        assert!(matches!(load.error, Some(SeedError::Io { .. })));
        assert!(load.into_result().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(SAMPLE.as_bytes()).expect("write");
        let (network, weather) = load_path(file.path()).into_result().expect("complete");
        assert_eq!(network.edge_count(), 3);
        assert_eq!(weather.len(), 3);
    }
}
