//! # u-roadnet
//!
//! Weighted directed road networks with all-pairs shortest distances,
//! graph-center queries, and runtime link edits.
//!
//! ## Modules
//!
//! - [`network`] — Graph store (locations, directed weighted links, edits)
//! - [`distance`] — Floyd–Warshall distance matrix, eccentricity, graph center
//! - [`session`] — Network plus distance snapshot with explicit recomputation
//! - [`seed`] — Plain-text seed file loader
//! - [`weather`] — Weather conditions and per-link alternative travel times
//! - [`random`] — Random network generation
//! - [`logging`] — Tracing subscriber setup for binaries
//!
//! ## Staleness
//!
//! Distances are never updated behind the caller's back. A
//! [`DistanceMatrix`](distance::DistanceMatrix) records the network revision
//! it was computed from, and a [`Session`](session::Session) refuses distance
//! queries after an edit until it is recomputed.

pub mod distance;
pub mod error;
pub mod logging;
pub mod network;
pub mod random;
pub mod seed;
pub mod session;
pub mod weather;
