//! Eccentricity and graph center.

use serde::Serialize;

use super::{Distance, DistanceMatrix};
use crate::error::Result;

/// The most central node of a network and its eccentricity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Center {
    node: String,
    eccentricity: Distance,
}

impl Center {
    /// The center node.
    pub fn node(&self) -> &str {
        &self.node
    }

    /// Longest shortest distance from the center to any node.
    pub fn eccentricity(&self) -> Distance {
        self.eccentricity
    }
}

impl DistanceMatrix {
    /// Longest shortest distance from `node` to any node.
    ///
    /// `Unreachable` if some node cannot be reached from `node`.
    pub fn eccentricity(&self, node: &str) -> Result<Distance> {
        let i = self.index_of(node)?;
        Ok(self.eccentricity_at(i))
    }

    /// Eccentricity of every node, in canonical order.
    pub fn eccentricities(&self) -> impl Iterator<Item = (&str, Distance)> + '_ {
        self.nodes()
            .iter()
            .enumerate()
            .map(|(i, node)| (node.as_str(), self.eccentricity_at(i)))
    }

    /// The node with the smallest eccentricity.
    ///
    /// Ties go to the node that comes first in canonical (lexicographic)
    /// order. If no node reaches every other node, the first node is
    /// returned with an `Unreachable` eccentricity. Returns `None` for an
    /// empty network.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_roadnet::network::Network;
    /// use u_roadnet::distance::{Distance, DistanceMatrix};
    ///
    /// let mut net = Network::new();
    /// for (a, b) in [("A", "B"), ("B", "A"), ("B", "C"), ("C", "B")] {
    ///     net.add_edge(a, b, 1.0).unwrap();
    /// }
    ///
    /// let center = DistanceMatrix::compute(&net).center().unwrap();
    /// assert_eq!(center.node(), "B");
    /// assert_eq!(center.eccentricity(), Distance::Finite(1.0));
    /// ```
    pub fn center(&self) -> Option<Center> {
        let mut best: Option<(usize, f64)> = None;
        for i in 0..self.size() {
            let ecc = self.row_max(i);
            if best.is_none_or(|(_, b)| ecc < b) {
                best = Some((i, ecc));
            }
        }
        best.map(|(i, ecc)| Center {
            node: self.nodes()[i].clone(),
            eccentricity: Distance::from_raw(ecc),
        })
    }

    fn eccentricity_at(&self, i: usize) -> Distance {
        Distance::from_raw(self.row_max(i))
    }

    fn row_max(&self, i: usize) -> f64 {
        self.row(i).iter().copied().fold(0.0, f64::max)
    }
}
