//! Directed link type.

use serde::{Deserialize, Serialize};

/// A directed, weighted link between two locations.
///
/// # Examples
///
/// ```
/// use u_roadnet::network::Edge;
///
/// let e = Edge::new("Guatemala", "Zacapa", 120.0);
/// assert_eq!(e.source(), "Guatemala");
/// assert_eq!(e.target(), "Zacapa");
/// assert_eq!(e.weight(), 120.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    from: String,
    to: String,
    weight: f64,
}

impl Edge {
    /// Creates a link from `from` to `to`.
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Source location.
    pub fn source(&self) -> &str {
        &self.from
    }

    /// Destination location.
    pub fn target(&self) -> &str {
        &self.to
    }

    /// Travel time.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}
