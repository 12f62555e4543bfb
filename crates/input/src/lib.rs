//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key, mouse and resize events into [`crate::types::InputEvent`]
//! so the game session never sees terminal types.

pub mod map;

pub use tui_pairs_types as types;

pub use map::{handle_key_event, handle_mouse_event, map_event, should_quit};
