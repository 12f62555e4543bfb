//! Board generation - shuffling fragments into a centered grid of cards
//!
//! A board is an ordered `Vec<Card>`. Position `i` in the vector is grid cell
//! `(i % columns, i / columns)`, so the layout can be recomputed at any time
//! (terminal resize) without touching the deal.

use tracing::debug;

use crate::bank::select_fragments;
use crate::error::BoardError;
use crate::rng::SimpleRng;
use crate::types::{
    Difficulty, Fragment, Rect, CARD_GAP, CARD_HEIGHT, CARD_WIDTH, MIN_TOP_MARGIN,
};

/// A single board tile.
///
/// The flags are only changed through the session, which keeps
/// `is_matched ⇒ is_flipped` true at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    text: &'static str,
    pair_id: u32,
    rect: Rect,
    is_flipped: bool,
    is_matched: bool,
}

impl Card {
    pub fn new(fragment: Fragment, rect: Rect) -> Self {
        Self {
            text: fragment.text,
            pair_id: fragment.pair_id,
            rect,
            is_flipped: false,
            is_matched: false,
        }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn pair_id(&self) -> u32 {
        self.pair_id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    /// Face up (either flipped or matched).
    pub fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }

    /// Can the player turn this card over?
    pub fn is_selectable(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }

    pub(crate) fn flip_up(&mut self) {
        self.is_flipped = true;
    }

    /// Turn face down. Matched cards stay up.
    pub(crate) fn flip_down(&mut self) {
        if !self.is_matched {
            self.is_flipped = false;
        }
    }

    pub(crate) fn mark_matched(&mut self) {
        self.is_flipped = true;
        self.is_matched = true;
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

/// Fixed card geometry in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub card_width: u16,
    pub card_height: u16,
    pub gap: u16,
    /// Smallest allowed board top edge.
    pub min_top_margin: i32,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            gap: CARD_GAP,
            min_top_margin: MIN_TOP_MARGIN,
        }
    }
}

impl CardLayout {
    /// Total board width for `difficulty` (no trailing gap).
    pub fn board_width(&self, difficulty: Difficulty) -> i32 {
        let cols = difficulty.columns() as i32;
        cols * (self.card_width as i32 + self.gap as i32) - self.gap as i32
    }

    /// Total board height for `difficulty` (no trailing gap).
    pub fn board_height(&self, difficulty: Difficulty) -> i32 {
        let rows = difficulty.rows() as i32;
        rows * (self.card_height as i32 + self.gap as i32) - self.gap as i32
    }

    /// Top-left corner of the board, centered on screen.
    ///
    /// The vertical start never goes above `min_top_margin`.
    pub fn origin(&self, difficulty: Difficulty, screen_w: u16, screen_h: u16) -> (i32, i32) {
        let start_x = (screen_w as i32 - self.board_width(difficulty)) / 2;
        let start_y = (screen_h as i32 - self.board_height(difficulty)) / 2;
        (start_x, start_y.max(self.min_top_margin))
    }

    /// Rectangle of the card dealt at `index` (row-major).
    pub fn cell_rect(&self, difficulty: Difficulty, index: usize, screen_w: u16, screen_h: u16) -> Rect {
        let (start_x, start_y) = self.origin(difficulty, screen_w, screen_h);
        let cols = difficulty.columns().max(1) as usize;
        let col = (index % cols) as i32;
        let row = (index / cols) as i32;
        Rect::new(
            start_x + col * (self.card_width as i32 + self.gap as i32),
            start_y + row * (self.card_height as i32 + self.gap as i32),
            self.card_width,
            self.card_height,
        )
    }
}

/// Deals shuffled boards with a fixed card layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardGenerator {
    layout: CardLayout,
}

impl BoardGenerator {
    pub fn new(layout: CardLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    /// Build a fresh board.
    ///
    /// Takes the first `pair_count * 2` fragments, shuffles them and assigns
    /// each a grid cell. Only the shuffle is random.
    pub fn generate(
        &self,
        fragments: &[Fragment],
        difficulty: Difficulty,
        screen_w: u16,
        screen_h: u16,
        rng: &mut SimpleRng,
    ) -> Result<Vec<Card>, BoardError> {
        let selected = select_fragments(fragments, difficulty)?;

        let mut deck = selected.to_vec();
        rng.shuffle(&mut deck);

        let cards: Vec<Card> = deck
            .into_iter()
            .enumerate()
            .map(|(i, fragment)| {
                Card::new(
                    fragment,
                    self.layout.cell_rect(difficulty, i, screen_w, screen_h),
                )
            })
            .collect();

        debug!(
            difficulty = difficulty.as_str(),
            cards = cards.len(),
            screen_w,
            screen_h,
            "board generated"
        );
        Ok(cards)
    }

    /// Recompute card rectangles for a new screen size, keeping the deal.
    pub fn relayout(&self, cards: &mut [Card], difficulty: Difficulty, screen_w: u16, screen_h: u16) {
        for (i, card) in cards.iter_mut().enumerate() {
            card.set_rect(self.layout.cell_rect(difficulty, i, screen_w, screen_h));
        }
    }
}
