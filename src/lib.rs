//! Terminal Game of Life (workspace facade crate).
//!
//! The engine, terminal layer, and shared constants live in dedicated crates
//! under `crates/`; this package re-exports them as
//! `term_life::{core, term, types}` and adds the command-line configuration
//! used by the `term-life` binary.

pub mod config;

pub use term_life_core as core;
pub use term_life_term as term;
pub use term_life_types as types;
