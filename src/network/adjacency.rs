//! Dense adjacency view for display.

use std::fmt;

use serde::Serialize;

/// Direct link weights laid out as a square table.
///
/// Row `i`, column `j` holds the weight of `nodes[i] → nodes[j]`, or `None`
/// if there is no such link. Displays as tab-separated rows with `-` for
/// missing links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyMatrix {
    nodes: Vec<String>,
    weights: Vec<Vec<Option<f64>>>,
}

impl AdjacencyMatrix {
    pub(crate) fn new(nodes: Vec<String>, weights: Vec<Vec<Option<f64>>>) -> Self {
        Self { nodes, weights }
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<Vec<Option<f64>>>) {
        (self.nodes, self.weights)
    }

    /// Row and column labels.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Weight at row `from`, column `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.weights[from][to]
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "\t{node}")?;
        }
        writeln!(f)?;
        for (node, row) in self.nodes.iter().zip(&self.weights) {
            write!(f, "{node}")?;
            for cell in row {
                match cell {
                    Some(w) => write!(f, "\t{w}")?,
                    None => write!(f, "\t-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
