//! Catalog module: the fixed list of ambient tracks offered by the player.
//!
//! The catalog is built once at startup from a sounds directory and never
//! changes afterwards.

mod model;
mod probe;

pub use model::*;
pub use probe::{AssetInfo, probe_asset};

#[cfg(test)]
mod tests;
