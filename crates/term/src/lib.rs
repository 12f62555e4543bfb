//! Terminal front end for the pairs game.
//!
//! Renders a `GameSession` into a simple framebuffer that is diffed and
//! flushed to the terminal, and turns gameplay cues into sound. No widget
//! toolkit is involved: every cell is placed by `GameView`.
//!
//! - [`fb`]: styled cell framebuffer
//! - [`wrap`]: word wrapping for card faces
//! - [`game_view`]: pure session → framebuffer mapping
//! - [`renderer`]: terminal setup/teardown and diffed output
//! - [`render_throttle`]: decides when a frame is worth drawing
//! - [`audio`]: bell / sound-file cue playback

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;
pub mod wrap;

pub use tui_pairs_core as core;
pub use tui_pairs_types as types;

pub use audio::{AudioCues, CuePlayer, CueSound, NullCues, SoundMode};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use wrap::{wrap_into, wrap_text};
