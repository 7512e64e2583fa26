//! Query and edit surface over one network.
//!
//! - [`Session`] — A network paired with its last distance snapshot
//! - [`Edit`] — A single link edit, parseable from text

mod edit;
mod state;

pub use edit::Edit;
pub use state::Session;
