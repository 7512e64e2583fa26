//! All-pairs shortest distances and centrality.
//!
//! [`DistanceMatrix::compute`] runs Floyd–Warshall over a
//! [`Network`](crate::network::Network) and keeps the result as a snapshot
//! tagged with the network revision it was computed from. Eccentricity and
//! graph-center queries are answered from that snapshot.

mod center;
mod matrix;
mod value;

pub use center::Center;
pub use matrix::DistanceMatrix;
pub use value::Distance;
