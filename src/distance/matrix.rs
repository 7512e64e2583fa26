//! Dense all-pairs distance matrix.
//!
//! # Algorithm
//!
//! Floyd–Warshall. Starting from direct link weights (zero on the diagonal,
//! infinity where no link exists), every node `k` in turn is tried as an
//! intermediate stop:
//!
//! ```text
//! d(i, j) = min(d(i, j), d(i, k) + d(k, j))
//! ```
//!
//! Unreachable entries are `f64::INFINITY`, so sums involving them stay
//! infinite and never win the comparison.
//!
//! # Complexity
//!
//! O(V³) time, O(V²) space.
//!
//! # Reference
//!
//! Floyd, R.W. (1962). "Algorithm 97: Shortest path",
//! *Communications of the ACM* 5(6), 345.

use std::time::Instant;

use super::Distance;
use crate::error::{NetworkError, Result};
use crate::network::Network;

/// Shortest travel times between every ordered pair of nodes, stored
/// row-major in canonical node order.
///
/// The matrix is a snapshot: editing the network afterwards does not change
/// it. [`is_current`](DistanceMatrix::is_current) reports whether the
/// network has moved on since the snapshot was taken.
///
/// # Examples
///
/// ```
/// use u_roadnet::network::Network;
/// use u_roadnet::distance::{Distance, DistanceMatrix};
///
/// let mut net = Network::new();
/// net.add_edge("A", "B", 5.0).unwrap();
/// net.add_edge("B", "C", 3.0).unwrap();
/// net.add_edge("A", "C", 10.0).unwrap();
///
/// let dm = DistanceMatrix::compute(&net);
/// assert_eq!(dm.shortest_distance("A", "C").unwrap(), Distance::Finite(8.0));
/// assert_eq!(dm.shortest_distance("C", "A").unwrap(), Distance::Unreachable);
/// assert!(dm.is_current(&net));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    nodes: Vec<String>,
    data: Vec<f64>,
    size: usize,
    network_id: u64,
    revision: u64,
}

impl DistanceMatrix {
    /// Computes all-pairs shortest distances for the current network.
    #[tracing::instrument(skip_all, fields(nodes = network.node_count(), edges = network.edge_count()))]
    pub fn compute(network: &Network) -> Self {
        let start = Instant::now();
        let (nodes, weights) = network.adjacency_matrix().into_parts();
        let n = nodes.len();
        let mut data = vec![f64::INFINITY; n * n];

        for (i, row) in weights.iter().enumerate() {
            for (j, weight) in row.iter().enumerate() {
                if let Some(w) = weight {
                    data[i * n + j] = *w;
                }
            }
            data[i * n + i] = 0.0;
        }

        for k in 0..n {
            for i in 0..n {
                let via = data[i * n + k];
                if via.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = via + data[k * n + j];
                    if candidate < data[i * n + j] {
                        data[i * n + j] = candidate;
                    }
                }
            }
        }

        tracing::debug!(elapsed = ?start.elapsed(), revision = network.revision(), "floyd_warshall");
        Self {
            nodes,
            data,
            size: n,
            network_id: network.id(),
            revision: network.revision(),
        }
    }

    /// Shortest travel time from `from` to `to`.
    ///
    /// Fails with [`NetworkError::UnknownNode`] if either node was not in
    /// the network when the matrix was computed.
    pub fn shortest_distance(&self, from: &str, to: &str) -> Result<Distance> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        Ok(self.get(i, j))
    }

    /// Distance between the nodes at canonical positions `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Distance {
        Distance::from_raw(self.raw(from, to))
    }

    /// Node ids covered by this matrix, in canonical order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Network revision this snapshot was computed from.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if this snapshot was computed from `network` and the
    /// network has not changed since.
    pub fn is_current(&self, network: &Network) -> bool {
        self.network_id == network.id() && self.revision == network.revision()
    }

    /// Fails with [`NetworkError::StaleDistances`] unless the snapshot is current.
    pub fn ensure_current(&self, network: &Network) -> Result<()> {
        if self.is_current(network) {
            Ok(())
        } else {
            Err(NetworkError::StaleDistances {
                computed: self.revision,
                current: network.revision(),
            })
        }
    }

    /// Re-tags a current snapshot for an unchanged copy of its network.
    pub(crate) fn rebind(&mut self, network: &Network) {
        self.network_id = network.id();
    }

    pub(crate) fn raw(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub(crate) fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    pub(crate) fn index_of(&self, id: &str) -> Result<usize> {
        self.nodes
            .binary_search_by(|probe| probe.as_str().cmp(id))
            .map_err(|_| NetworkError::UnknownNode {
                node: id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Network {
        let mut net = Network::new();
        net.add_edge("A", "B", 5.0).expect("valid");
        net.add_edge("B", "C", 3.0).expect("valid");
        net.add_edge("A", "C", 10.0).expect("valid");
        net
    }

    #[test]
    fn test_shortest_via_intermediate() {
        let dm = DistanceMatrix::compute(&triangle());
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.shortest_distance("A", "C"), Ok(Distance::Finite(8.0)));
        assert_eq!(dm.shortest_distance("A", "B"), Ok(Distance::Finite(5.0)));
        assert_eq!(dm.shortest_distance("B", "A"), Ok(Distance::Unreachable));
    }

    #[test]
    fn test_diagonal_is_zero() {
        let mut net = triangle();
        net.add_edge("A", "A", 4.0).expect("valid");
        let dm = DistanceMatrix::compute(&net);
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), Distance::Finite(0.0));
        }
    }

    #[test]
    fn test_remove_then_recompute() {
        let mut net = triangle();
        let before = DistanceMatrix::compute(&net);
        net.remove_edge("B", "C").expect("exists");

        // the old snapshot is untouched and now stale
        assert_eq!(before.shortest_distance("A", "C"), Ok(Distance::Finite(8.0)));
        assert!(!before.is_current(&net));

        let after = DistanceMatrix::compute(&net);
        assert!(after.is_current(&net));
        assert_eq!(after.shortest_distance("A", "C"), Ok(Distance::Finite(10.0)));
    }

    #[test]
    fn test_isolated_node() {
        let mut net = triangle();
        net.add_node("D");
        let dm = DistanceMatrix::compute(&net);
        assert_eq!(dm.shortest_distance("D", "D"), Ok(Distance::Finite(0.0)));
        for other in ["A", "B", "C"] {
            assert_eq!(dm.shortest_distance("D", other), Ok(Distance::Unreachable));
            assert_eq!(dm.shortest_distance(other, "D"), Ok(Distance::Unreachable));
        }
    }

    #[test]
    fn test_cycle_distances() {
        let mut net = Network::new();
        net.add_edge("A", "B", 1.0).expect("valid");
        net.add_edge("B", "C", 1.0).expect("valid");
        net.add_edge("C", "A", 1.0).expect("valid");
        let dm = DistanceMatrix::compute(&net);
        assert_eq!(dm.shortest_distance("A", "C"), Ok(Distance::Finite(2.0)));
        assert_eq!(dm.shortest_distance("C", "B"), Ok(Distance::Finite(2.0)));
        assert_eq!(dm.shortest_distance("B", "C"), Ok(Distance::Finite(1.0)));
    }

    #[test]
    fn test_unknown_node() {
        let dm = DistanceMatrix::compute(&triangle());
        assert_eq!(
            dm.shortest_distance("A", "Z"),
            Err(NetworkError::UnknownNode { node: "Z".into() })
        );
    }

    #[test]
    fn test_node_added_after_compute_is_unknown() {
        let mut net = triangle();
        let dm = DistanceMatrix::compute(&net);
        net.add_edge("C", "D", 1.0).expect("valid");
        assert!(dm.shortest_distance("A", "D").is_err());
        assert_eq!(
            dm.ensure_current(&net),
            Err(NetworkError::StaleDistances {
                computed: dm.revision(),
                current: net.revision(),
            })
        );
    }

    #[test]
    fn test_snapshot_of_clone_is_stale_for_original() {
        let mut original = Network::new();
        original.add_edge("A", "B", 1.0).expect("valid");
        let mut copy = original.clone();
        copy.update_edge_weight("A", "B", 100.0).expect("exists");
        let snapshot = DistanceMatrix::compute(&copy);
        original.remove_edge("A", "B").expect("exists");

        // same revision count, different graph
        assert_eq!(original.revision(), copy.revision());
        assert!(snapshot.is_current(&copy));
        assert!(!snapshot.is_current(&original));
        assert!(snapshot.ensure_current(&original).is_err());
    }

    #[test]
    fn test_unrelated_networks_are_not_current() {
        let mut a = Network::new();
        let mut b = Network::new();
        a.add_edge("X", "Y", 1.0).expect("valid");
        b.add_edge("X", "Y", 9.0).expect("valid");
        assert!(!DistanceMatrix::compute(&a).is_current(&b));
    }

    #[test]
    fn test_empty_network() {
        let dm = DistanceMatrix::compute(&Network::new());
        assert_eq!(dm.size(), 0);
        assert!(dm.nodes().is_empty());
    }

    #[test]
    fn test_asymmetric_links() {
        let mut net = Network::new();
        net.add_edge("A", "B", 10.0).expect("valid");
        net.add_edge("B", "A", 15.0).expect("valid");
        let dm = DistanceMatrix::compute(&net);
        assert_eq!(dm.shortest_distance("A", "B"), Ok(Distance::Finite(10.0)));
        assert_eq!(dm.shortest_distance("B", "A"), Ok(Distance::Finite(15.0)));
    }
}
