//! Application module: exposes the UI model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and wraps the `Player` together with
//! keyboard focus and other presentation-only state.

mod model;

pub use model::*;
