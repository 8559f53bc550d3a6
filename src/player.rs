//! Player module: the component that owns selection, playback and volume
//! state and keeps the Media Output in step with it.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
