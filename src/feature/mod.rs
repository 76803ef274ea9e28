//! Per-screen state machines.
//!
//! Each feature follows the same layout: `state` (the snapshot a view
//! renders), `action` (everything that can happen on the screen) and
//! `reducer` (the transition function plus its effects). Parents compose
//! children by routing wrapped actions to the matching state slice.

pub mod bottom_sheet;
pub mod feed;
pub mod home;
pub mod profile_setting;
pub mod setting;
pub mod tab_bar;
pub mod upload;
