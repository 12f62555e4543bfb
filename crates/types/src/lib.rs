//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Every position is expressed in screen cells (one terminal character cell).
//! `x` grows to the right, `y` grows downwards, `(0, 0)` is the top-left corner.
//! Rectangles use `i32` origins so a board wider than the screen can still be
//! laid out (the renderer clips).
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `FLIP_DELAY_MS` | 1200 | Mismatched cards stay face up this long |
//! | `PEEK_DURATION_MS` | 3000 | Whole board stays revealed this long |
//!
//! # Card Layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CARD_WIDTH` | 12 | Card width in cells |
//! | `CARD_HEIGHT` | 4 | Card height in cells |
//! | `CARD_GAP` | 1 | Gap between neighbouring cards |
//! | `MIN_TOP_MARGIN` | 2 | Rows kept free above the board for the HUD |
//!
//! # Examples
//!
//! ```
//! use tui_pairs_types::{Cue, Difficulty, Rect};
//!
//! let difficulty = Difficulty::from_str("hard").unwrap();
//! assert_eq!(difficulty.pair_count(), 12);
//! assert_eq!(difficulty.card_count(), 24);
//!
//! let rect = Rect::new(2, 3, 4, 2);
//! assert!(rect.contains(2, 3));
//! assert!(!rect.contains(6, 3));
//!
//! assert_eq!(Cue::Match.as_str(), "match");
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// How long a mismatched pair stays face up before flipping back.
pub const FLIP_DELAY_MS: u64 = 1200;

/// How long a peek keeps the whole board revealed.
pub const PEEK_DURATION_MS: u64 = 3000;

/// Card width in screen cells
pub const CARD_WIDTH: u16 = 12;

/// Card height in screen cells
pub const CARD_HEIGHT: u16 = 4;

/// Gap between cards in screen cells
pub const CARD_GAP: u16 = 1;

/// Rows reserved above the board (HUD line plus spacing).
pub const MIN_TOP_MARGIN: i32 = 2;


/// One half of a split two-part sentence.
///
/// Fragments sharing a `pair_id` complete each other and form a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fragment {
    pub text: &'static str,
    pub pair_id: u32,
}

impl Fragment {
    pub const fn new(text: &'static str, pair_id: u32) -> Self {
        Self { text, pair_id }
    }
}

/// Axis-aligned rectangle in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Check whether a point lies inside the rectangle (right/bottom edges excluded).
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Check whether two rectangles share at least one cell.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Board size presets offered in the menu.
///
/// - **Easy**: 4 x 3 grid, 6 pairs
/// - **Normal**: 4 x 4 grid, 8 pairs
/// - **Hard**: 6 x 4 grid, 12 pairs (every sentence in the bank)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// All presets in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn columns(&self) -> u16 {
        match self {
            Difficulty::Easy | Difficulty::Normal => 4,
            Difficulty::Hard => 6,
        }
    }

    pub fn rows(&self) -> u16 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Normal | Difficulty::Hard => 4,
        }
    }

    pub fn pair_count(&self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Normal => 8,
            Difficulty::Hard => 12,
        }
    }

    /// Number of cards dealt for this preset (`pair_count * 2`).
    pub fn card_count(&self) -> usize {
        self.pair_count() * 2
    }

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pairs_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("medium"), Some(Difficulty::Normal));
    /// assert_eq!(Difficulty::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "1" => Some(Difficulty::Easy),
            "normal" | "medium" | "2" => Some(Difficulty::Normal),
            "hard" | "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Title-case label for menus and the HUD.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Sound cue emitted by the game for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A card was turned face up by the player
    Flip,
    /// Two cards formed a pair
    Match,
    /// The last pair was found
    Win,
}

impl Cue {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flip" => Some(Cue::Flip),
            "match" => Some(Cue::Match),
            "win" => Some(Cue::Win),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Flip => "flip",
            Cue::Match => "match",
            Cue::Win => "win",
        }
    }
}

/// Discrete input events understood by the game session.
///
/// Pointer clicks carry screen-cell coordinates. The keyboard shortcuts are
/// aliases for the on-screen buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave the game
    Quit,
    /// Pointer click at a screen cell
    Click { x: i32, y: i32 },
    /// Activate the once-per-game peek
    Peek,
    /// Start a new board after game over
    PlayAgain,
    /// Start a new board with the current difficulty at any time
    Restart,
    /// Return to the difficulty menu
    Menu,
    /// Pick a difficulty (only meaningful in the menu)
    SelectDifficulty(Difficulty),
    /// The screen changed size
    Resize { width: u16, height: u16 },
}
