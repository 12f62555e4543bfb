//! TUI Pairs (workspace facade crate).
//!
//! Exposes `tui_pairs::{core,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use tui_pairs_core as core;
pub use tui_pairs_input as input;
pub use tui_pairs_term as term;
pub use tui_pairs_types as types;
