//! Weighted directed graph store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{AdjacencyMatrix, Edge};
use crate::error::{NetworkError, Result};

/// A directed network of named locations joined by weighted links.
///
/// Nodes are kept in lexicographic order, which is the canonical order used
/// by every algorithm in this crate. Each successful mutation bumps the
/// [`revision`](Network::revision). Every network, clones included, also
/// carries a process-unique identity, so a distance snapshot can tell
/// whether it still describes this exact graph.
///
/// # Examples
///
/// ```
/// use u_roadnet::network::Network;
///
/// let mut net = Network::new();
/// net.add_edge("Mixco", "Antigua", 30.0).unwrap();
/// net.add_edge("Antigua", "Escuintla", 45.0).unwrap();
///
/// assert!(net.has_node("Escuintla"));
/// assert_eq!(net.node_count(), 3);
/// assert_eq!(net.edge_weight("Mixco", "Antigua"), Some(30.0));
/// assert_eq!(net.edge_weight("Antigua", "Mixco"), None);
/// ```
#[derive(Debug)]
pub struct Network {
    id: u64,
    adjacency: BTreeMap<String, BTreeMap<String, f64>>,
    revision: u64,
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

impl Default for Network {
    fn default() -> Self {
        Self {
            id: next_id(),
            adjacency: BTreeMap::new(),
            revision: 0,
        }
    }
}

// A clone is a separate graph that can diverge, so it gets its own identity.
impl Clone for Network {
    fn clone(&self) -> Self {
        Self {
            id: next_id(),
            adjacency: self.adjacency.clone(),
            revision: self.revision,
        }
    }
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with no outgoing links.
    ///
    /// Returns `false` if the node already existed; the network is left
    /// untouched in that case.
    pub fn add_node(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return false;
        }
        tracing::trace!(node = %id, "add_node");
        self.adjacency.insert(id, BTreeMap::new());
        self.revision += 1;
        true
    }

    /// Adds a link, creating either endpoint if needed.
    ///
    /// Overwrites the weight if the link already exists and returns the
    /// previous one.
    pub fn add_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: f64,
    ) -> Result<Option<f64>> {
        let weight = validate_weight(weight)?;
        let from = from.into();
        let to = to.into();
        self.add_node(to.clone());
        tracing::trace!(%from, %to, weight, "add_edge");
        let previous = self
            .adjacency
            .entry(from)
            .or_default()
            .insert(to, weight);
        self.revision += 1;
        Ok(previous)
    }

    /// Removes the link `from → to` and returns its weight.
    ///
    /// Nodes are never removed, even when they lose their last link.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<f64> {
        self.require_node(to)?;
        let links = self.links_mut(from)?;
        let weight = links.remove(to).ok_or_else(|| unknown_edge(from, to))?;
        tracing::trace!(from, to, weight, "remove_edge");
        self.revision += 1;
        Ok(weight)
    }

    /// Sets the weight of `from → to`, creating the link if it does not exist.
    ///
    /// Both endpoints must already be in the network.
    pub fn set_edge_weight(&mut self, from: &str, to: &str, weight: f64) -> Result<Option<f64>> {
        let weight = validate_weight(weight)?;
        self.require_node(to)?;
        let previous = self.links_mut(from)?.insert(to.to_string(), weight);
        tracing::trace!(from, to, weight, ?previous, "set_edge_weight");
        self.revision += 1;
        Ok(previous)
    }

    /// Changes the weight of an existing link `from → to`.
    ///
    /// Fails with [`NetworkError::UnknownEdge`] when the endpoints exist but
    /// are not linked in that direction.
    pub fn update_edge_weight(&mut self, from: &str, to: &str, weight: f64) -> Result<f64> {
        let weight = validate_weight(weight)?;
        self.require_node(to)?;
        let slot = self
            .links_mut(from)?
            .get_mut(to)
            .ok_or_else(|| unknown_edge(from, to))?;
        let previous = std::mem::replace(slot, weight);
        tracing::trace!(from, to, weight, previous, "update_edge_weight");
        self.revision += 1;
        Ok(previous)
    }

    /// Returns `true` if the node is in the network.
    pub fn has_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Outgoing links of `id` as `(destination, weight)` pairs.
    pub fn neighbors<'a>(&'a self, id: &str) -> Result<impl Iterator<Item = (&'a str, f64)> + 'a> {
        let links = self.adjacency.get(id).ok_or_else(|| unknown_node(id))?;
        Ok(links.iter().map(|(to, &w)| (to.as_str(), w)))
    }

    /// Weight of the link `from → to`, if there is one.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Weight of the link `from → to`, with a typed error if it is missing.
    pub fn link_weight(&self, from: &str, to: &str) -> Result<f64> {
        self.require_node(to)?;
        let links = self.adjacency.get(from).ok_or_else(|| unknown_node(from))?;
        links.get(to).copied().ok_or_else(|| unknown_edge(from, to))
    }

    /// Node ids in canonical (lexicographic) order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// All links, ordered by source then destination.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(from, links)| {
            links
                .iter()
                .map(move |(to, &weight)| Edge::new(from.clone(), to.clone(), weight))
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed links.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Returns `true` if the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Mutation counter; changes whenever the graph changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Process-unique identity of this network instance.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Dense view of the direct links, rows and columns in canonical order.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let nodes: Vec<String> = self.adjacency.keys().cloned().collect();
        let weights = self
            .adjacency
            .values()
            .map(|links| nodes.iter().map(|to| links.get(to).copied()).collect())
            .collect();
        AdjacencyMatrix::new(nodes, weights)
    }

    fn require_node(&self, id: &str) -> Result<()> {
        if self.has_node(id) {
            Ok(())
        } else {
            Err(unknown_node(id))
        }
    }

    fn links_mut(&mut self, from: &str) -> Result<&mut BTreeMap<String, f64>> {
        self.adjacency
            .get_mut(from)
            .ok_or_else(|| unknown_node(from))
    }
}

fn validate_weight(weight: f64) -> Result<f64> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(NetworkError::InvalidWeight { weight })
    }
}

fn unknown_node(id: &str) -> NetworkError {
    NetworkError::UnknownNode {
        node: id.to_string(),
    }
}

fn unknown_edge(from: &str, to: &str) -> NetworkError {
    NetworkError::UnknownEdge {
        from: from.to_string(),
        to: to.to_string(),
    }
}
