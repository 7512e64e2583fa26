//! Random network generation.
//!
//! Produces synthetic networks for stress tests and benchmarks. Each ordered
//! pair of distinct nodes gets a link with probability `density`; weights
//! are integers drawn uniformly from the configured range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::network::Network;

/// Builder for random networks.
///
/// # Examples
///
/// ```
/// use u_roadnet::random::RandomNetwork;
///
/// let net = RandomNetwork::new(8)
///     .with_density(0.5)
///     .with_weight_range(1, 20)
///     .with_seed(42)
///     .generate();
/// assert_eq!(net.node_count(), 8);
///
/// let again = RandomNetwork::new(8)
///     .with_density(0.5)
///     .with_weight_range(1, 20)
///     .with_seed(42)
///     .generate();
/// assert_eq!(net.edges().collect::<Vec<_>>(), again.edges().collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone)]
pub struct RandomNetwork {
    nodes: usize,
    density: f64,
    min_weight: u32,
    max_weight: u32,
    seed: Option<u64>,
}

impl RandomNetwork {
    /// Creates a builder for `nodes` nodes.
    ///
    /// Default: density 0.3, weights 1..=100, entropy-seeded.
    pub fn new(nodes: usize) -> Self {
        Self {
            nodes,
            density: 0.3,
            min_weight: 1,
            max_weight: 100,
            seed: None,
        }
    }

    /// Sets the link probability, clamped to `[0, 1]`.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self
    }

    /// Sets the inclusive weight range. The bounds may be given in either order.
    pub fn with_weight_range(mut self, a: u32, b: u32) -> Self {
        self.min_weight = a.min(b);
        self.max_weight = a.max(b);
        self
    }

    /// Fixes the RNG seed for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates a network using the configured seed.
    pub fn generate(&self) -> Network {
        match self.seed {
            Some(seed) => self.generate_with(&mut StdRng::seed_from_u64(seed)),
            None => self.generate_with(&mut rand::rng()),
        }
    }

    /// Generates a network drawing from `rng`.
    ///
    /// Nodes are named `N0`, `N1`, ... zero-padded so that canonical order
    /// matches numeric order.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Network {
        let width = self.nodes.saturating_sub(1).to_string().len();
        let names: Vec<String> = (0..self.nodes).map(|i| format!("N{i:0width$}")).collect();

        let mut net = Network::new();
        for name in &names {
            net.add_node(name.as_str());
        }
        for from in &names {
            for to in &names {
                if from == to || !rng.random_bool(self.density) {
                    continue;
                }
                let weight = rng.random_range(self.min_weight..=self.max_weight);
                if let Err(e) = net.add_edge(from.as_str(), to.as_str(), f64::from(weight)) {
                    tracing::warn!(error = %e, "skipped generated link");
                }
            }
        }
        tracing::debug!(
            nodes = net.node_count(),
            edges = net.edge_count(),
            "random network generated"
        );
        net
    }
}
