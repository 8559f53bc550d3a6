//! Audio module: the Media Output contract and its `rodio` implementation.
//!
//! `AudioPlayer` forwards commands to a dedicated audio thread that owns the
//! output stream and the single sink. Playback lifecycle notifications come
//! back on a channel, tagged with the binding generation that produced them.

mod error;
mod player;
mod sink;
mod thread;
mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use error::AudioError;
pub use player::AudioPlayer;
pub use types::*;

#[cfg(test)]
mod tests;
