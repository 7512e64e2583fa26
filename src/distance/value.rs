//! Shortest-distance values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A shortest travel time, or the absence of any path.
///
/// Ordering places every finite distance before `Unreachable`.
///
/// # Examples
///
/// ```
/// use u_roadnet::distance::Distance;
///
/// assert!(Distance::Finite(8.0) < Distance::Unreachable);
/// assert_eq!(Distance::from_raw(f64::INFINITY), Distance::Unreachable);
/// assert_eq!(Distance::Finite(8.0).value(), Some(8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    /// A path exists with this total weight.
    Finite(f64),
    /// No path exists.
    Unreachable,
}

impl Distance {
    /// Converts a raw matrix entry, mapping infinity to `Unreachable`.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_finite() {
            Distance::Finite(raw)
        } else {
            Distance::Unreachable
        }
    }

    /// The travel time, if a path exists.
    pub fn value(&self) -> Option<f64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Unreachable => None,
        }
    }

    /// Returns `true` if a path exists.
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => f.write_str("inf"),
        }
    }
}
