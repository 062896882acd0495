//! Unidirectional data flow primitives.
//!
//! Every state change in the crate goes through this cycle:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └────── effects (HTTP) ◄───────┘
//! ```
//!
//! - **State**: an independently reduced slice of the application state
//! - **Intent**: a plain-data description of something that happened
//! - **Reducer**: a pure function that transforms a slice based on intents
//!
//! Side effects (HTTP calls, navigation) live in the per-slice effects
//! modules and communicate with reducers only by dispatching intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
