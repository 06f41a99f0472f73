//! Progression engine for Arturo Clicker — a browser incremental game where
//! clicking Arturo's head grows hair, hair buys upgrades, and upgrades grow
//! more hair.
//!
//! The crate is UI-free: a host (typically a WASM front end) drives the
//! [`engine::ProgressionEngine`] with explicit millisecond timestamps and
//! renders whatever it reads back. All game rules live here so they can be
//! tested deterministically without a browser.

pub mod catalog;
pub mod clock;
pub mod combo;
pub mod cost;
pub mod engine;
pub mod format;
pub mod save;
pub mod state;

#[cfg(test)]
mod simulator;
