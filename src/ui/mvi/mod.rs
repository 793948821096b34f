//! Model-View-Intent primitives for the viewer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ compose/draw
//!    ↑                                  │
//!    └──────────── input ───────────────┘
//! ```
//!
//! The page itself is never part of the state: it is recomposed from the
//! profile on every change. Only host concerns (scroll, focus, notices) live
//! here.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
