//! Unidirectional state container primitives.
//!
//! Every screen in the client is modelled as a state machine driven by this
//! module.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └──→ Effects (network, timers)
//!    └───────────────────┘
//! ```
//!
//! - **State**: snapshot of one screen, owned by its [`Store`]
//! - **Action**: user intentions, binding mutations, effect completions
//! - **Reducer**: the only place state transitions happen; may schedule
//!   effects
//! - **Effect**: deferred async work that resolves to exactly one follow-up
//!   action
//! - **Store**: serializes action processing and publishes snapshots

mod action;
mod effect;
mod identified;
mod reducer;
mod runtime;
mod state;
mod teardown;

pub use action::Action;
pub use effect::{map_effects, none, Effect, Effects};
pub use identified::{Identifiable, IdentifiedList};
pub use reducer::Reducer;
pub use runtime::Store;
pub use state::FeatureState;
pub use teardown::Teardown;
