//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board generation and the turn/timing state
//! machine. It has **no dependencies** on terminal I/O or audio, making it:
//!
//! - **Deterministic**: Same seed deals identical boards
//! - **Testable**: Time is passed in, never read, so timers can be driven by hand
//! - **Portable**: Can run behind any renderer (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`bank`]: the fixed list of split sentences
//! - [`board`]: `Card`, card layout, and the shuffling `BoardGenerator`
//! - [`buttons`]: on-screen button rectangles shared with the renderer
//! - [`clock`]: clock capability (`MonotonicClock`, `ManualClock`)
//! - [`error`]: configuration errors
//! - [`rng`]: seeded RNG with an unbiased Fisher-Yates shuffle
//! - [`session`]: `GameSession`, the flip/lock/peek/game-over state machine
//!
//! # Game Rules
//!
//! - Two cards are turned per move; a pair stays face up for good
//! - A mismatch locks the board for 1200ms, then both cards flip back
//! - Peek reveals every unmatched card for 3000ms, once per game
//! - The game ends when every card is matched
//!
//! # Example
//!
//! ```
//! use tui_pairs_core::{GameSession, Phase, SentenceBank, SimpleRng};
//! use tui_pairs_types::Difficulty;
//!
//! let mut session = GameSession::new(SentenceBank::builtin(), SimpleRng::new(7), 80, 24)?;
//! session.start(Difficulty::Easy, 0);
//! assert_eq!(session.phase(), Phase::Idle);
//!
//! session.select_card(0, 16);
//! assert_eq!(session.phase(), Phase::OneSelected);
//! # Ok::<(), tui_pairs_core::BoardError>(())
//! ```

pub mod bank;
pub mod board;
pub mod buttons;
pub mod clock;
pub mod error;
pub mod rng;
pub mod session;

pub use tui_pairs_types as types;

// Re-export commonly used types for convenience
pub use bank::{SentenceBank, BUILTIN_FRAGMENTS};
pub use board::{BoardGenerator, Card, CardLayout};
pub use buttons::ButtonLayout;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::BoardError;
pub use rng::SimpleRng;
pub use session::{GameResult, GameSession, Phase, Rank, Timing};
