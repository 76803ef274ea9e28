//! Headless core of a photo/text social-feed client.
//!
//! The crate contains everything a frontend needs except the rendering:
//! per-screen state machines built on a unidirectional state container
//! ([`store`]), pure input validation ([`validation`]), typed JSON requests
//! ([`net`]) and the domain model ([`model`]).
//!
//! Views dispatch [`store::Action`]s into a [`store::Store`] and observe
//! state snapshots; all mutation happens inside reducers.

pub mod clipboard;
pub mod config;
pub mod feature;
pub mod logging;
pub mod model;
pub mod net;
pub mod store;
pub mod validation;
