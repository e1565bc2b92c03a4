//! Monstro (workspace facade crate).
//!
//! The engine lives in dedicated crates under `crates/`; this package
//! re-exports them as `monstro::{core,types}` and hosts the headless
//! simulation driver used by the `monstro-sim` binary.

pub mod sim;

pub use monstro_core as core;
pub use monstro_types as types;
