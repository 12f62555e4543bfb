//! Game session - the turn/timing state machine
//!
//! The session owns the board and every piece of turn state. It is driven by
//! two calls per frame:
//!
//! 1. [`GameSession::handle_input`] for each input event polled this tick
//! 2. [`GameSession::update`] once, with the clock sampled for the tick
//!
//! Timers are deadlines compared with `>=`, so a late tick resolves them on
//! the next frame without any drift bookkeeping.
//!
//! # Phases
//!
//! | Phase | Meaning |
//! |-------|---------|
//! | `Menu` | Difficulty selection, no board |
//! | `Idle` | Board unlocked, nothing selected |
//! | `OneSelected` | One card turned by the player |
//! | `Resolving` | Board locked: mismatch waiting to flip back, or peek active |
//! | `GameOver` | Every card matched, waiting for play-again |
//! | `Terminated` | Quit requested |

use tracing::{debug, error, info};

use crate::bank::SentenceBank;
use crate::board::{BoardGenerator, Card};
use crate::buttons::ButtonLayout;
use crate::error::BoardError;
use crate::rng::SimpleRng;
use crate::types::{Cue, Difficulty, InputEvent, FLIP_DELAY_MS, PEEK_DURATION_MS};

/// Observable state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Menu,
    Idle,
    OneSelected,
    Resolving,
    GameOver,
    Terminated,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Idle => "idle",
            Phase::OneSelected => "one_selected",
            Phase::Resolving => "resolving",
            Phase::GameOver => "game_over",
            Phase::Terminated => "terminated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Menu,
    Playing,
    Terminated,
}

/// Delay settings, overridable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub flip_delay_ms: u64,
    pub peek_duration_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            flip_delay_ms: FLIP_DELAY_MS,
            peek_duration_ms: PEEK_DURATION_MS,
        }
    }
}

/// Letter grade for a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Rank {
    #[default]
    C,
    B,
    A,
    S,
}

impl Rank {
    /// Grade by moves per pair: S ≤ 1.25, A ≤ 1.75, B ≤ 2.5, else C.
    ///
    /// Using the peek caps the grade at A.
    pub fn grade(moves: u32, pairs: usize, peek_used: bool) -> Self {
        let pairs = pairs.max(1) as u64;
        let per_pair_x100 = moves as u64 * 100 / pairs;
        let rank = if per_pair_x100 <= 125 {
            Rank::S
        } else if per_pair_x100 <= 175 {
            Rank::A
        } else if per_pair_x100 <= 250 {
            Rank::B
        } else {
            Rank::C
        };
        if peek_used {
            rank.min(Rank::A)
        } else {
            rank
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
        }
    }
}

/// Summary of a finished playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub difficulty: Difficulty,
    pub moves: u32,
    pub elapsed_ms: u64,
    pub peek_used: bool,
    pub rank: Rank,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    bank: SentenceBank,
    generator: BoardGenerator,
    rng: SimpleRng,
    timing: Timing,
    screen_w: u16,
    screen_h: u16,
    buttons: ButtonLayout,
    mode: Mode,
    difficulty: Difficulty,
    cards: Vec<Card>,
    first_selected: Option<usize>,
    second_selected: Option<usize>,
    board_locked: bool,
    moves_count: u32,
    is_game_over: bool,
    peek_used: bool,
    is_peeking: bool,
    peek_end_time: u64,
    unflip_deadline: u64,
    started_at: u64,
    finished_at: Option<u64>,
    /// Increments on every new board.
    episode_id: u32,
    /// Increments on every visible change (drives render throttling).
    revision: u64,
    cues: Vec<Cue>,
}

impl GameSession {
    /// Create a session sitting in the menu.
    ///
    /// Fails if the bank cannot deal every difficulty preset, so a bad bank is
    /// caught at startup rather than on a menu click.
    pub fn new(
        bank: SentenceBank,
        rng: SimpleRng,
        screen_w: u16,
        screen_h: u16,
    ) -> Result<Self, BoardError> {
        bank.validate()?;
        Ok(Self {
            bank,
            generator: BoardGenerator::default(),
            rng,
            timing: Timing::default(),
            screen_w,
            screen_h,
            buttons: ButtonLayout::new(screen_w, screen_h),
            mode: Mode::Menu,
            difficulty: Difficulty::default(),
            cards: Vec::new(),
            first_selected: None,
            second_selected: None,
            board_locked: false,
            moves_count: 0,
            is_game_over: false,
            peek_used: false,
            is_peeking: false,
            peek_end_time: 0,
            unflip_deadline: 0,
            started_at: 0,
            finished_at: None,
            episode_id: 0,
            revision: 0,
            cues: Vec::new(),
        })
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    // ---- accessors ----

    pub fn phase(&self) -> Phase {
        match self.mode {
            Mode::Menu => Phase::Menu,
            Mode::Terminated => Phase::Terminated,
            Mode::Playing if self.is_game_over => Phase::GameOver,
            Mode::Playing if self.board_locked => Phase::Resolving,
            Mode::Playing if self.first_selected.is_some() => Phase::OneSelected,
            Mode::Playing => Phase::Idle,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.mode == Mode::Terminated
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn buttons(&self) -> &ButtonLayout {
        &self.buttons
    }

    pub fn screen_size(&self) -> (u16, u16) {
        (self.screen_w, self.screen_h)
    }

    pub fn first_selected(&self) -> Option<usize> {
        self.first_selected
    }

    pub fn second_selected(&self) -> Option<usize> {
        self.second_selected
    }

    pub fn board_locked(&self) -> bool {
        self.board_locked
    }

    pub fn moves_count(&self) -> u32 {
        self.moves_count
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn peek_used(&self) -> bool {
        self.peek_used
    }

    pub fn is_peeking(&self) -> bool {
        self.is_peeking
    }

    pub fn peek_end_time(&self) -> u64 {
        self.peek_end_time
    }

    pub fn unflip_deadline(&self) -> u64 {
        self.unflip_deadline
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Can the peek button do anything right now?
    pub fn peek_available(&self) -> bool {
        self.mode == Mode::Playing && !self.is_game_over && !self.peek_used && !self.board_locked
    }

    /// Milliseconds left in the active peek (0 when not peeking).
    pub fn peek_remaining_ms(&self, now: u64) -> u64 {
        if self.is_peeking {
            self.peek_end_time.saturating_sub(now)
        } else {
            0
        }
    }

    /// Play time so far (frozen once the game is won).
    pub fn elapsed_ms(&self, now: u64) -> u64 {
        match self.mode {
            Mode::Playing => self
                .finished_at
                .unwrap_or(now)
                .saturating_sub(self.started_at),
            _ => 0,
        }
    }

    /// Result of the finished game, if any.
    pub fn result(&self) -> Option<GameResult> {
        let finished_at = self.finished_at?;
        if !self.is_game_over {
            return None;
        }
        Some(GameResult {
            difficulty: self.difficulty,
            moves: self.moves_count,
            elapsed_ms: finished_at.saturating_sub(self.started_at),
            peek_used: self.peek_used,
            rank: Rank::grade(self.moves_count, self.cards.len() / 2, self.peek_used),
        })
    }

    /// Take every cue emitted since the last drain, oldest first.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Index of the card under a screen point.
    pub fn card_at(&self, x: i32, y: i32) -> Option<usize> {
        self.cards.iter().position(|c| c.rect().contains(x, y))
    }

    // ---- lifecycle ----

    /// Deal a board for `difficulty` and start playing.
    pub fn start(&mut self, difficulty: Difficulty, now: u64) {
        if self.mode == Mode::Terminated {
            return;
        }
        self.difficulty = difficulty;
        self.deal(now);
    }

    /// New shuffled board with the current difficulty; counters and peek reset.
    pub fn reset(&mut self, now: u64) {
        if self.mode == Mode::Terminated {
            return;
        }
        self.deal(now);
    }

    /// Drop the board and go back to difficulty selection.
    pub fn back_to_menu(&mut self) {
        if self.mode != Mode::Playing {
            return;
        }
        self.mode = Mode::Menu;
        self.cards.clear();
        self.clear_turn_state();
        debug!("back to menu");
        self.touch();
    }

    pub fn quit(&mut self) {
        if self.mode == Mode::Terminated {
            return;
        }
        self.mode = Mode::Terminated;
        info!(moves = self.moves_count, "quit requested");
        self.touch();
    }

    /// Track a new screen size: buttons move, cards keep their deal.
    pub fn resize(&mut self, screen_w: u16, screen_h: u16) {
        if (screen_w, screen_h) == (self.screen_w, self.screen_h) {
            return;
        }
        self.screen_w = screen_w;
        self.screen_h = screen_h;
        self.buttons = ButtonLayout::new(screen_w, screen_h);
        self.generator
            .relayout(&mut self.cards, self.difficulty, screen_w, screen_h);
        self.touch();
    }

    fn deal(&mut self, now: u64) {
        // The bank was validated in `new`, so every preset can be dealt.
        let rng_state = self.rng.state();
        let cards = match self.generator.generate(
            self.bank.fragments(),
            self.difficulty,
            self.screen_w,
            self.screen_h,
            &mut self.rng,
        ) {
            Ok(cards) => cards,
            Err(err) => {
                error!(%err, "board generation failed");
                return;
            }
        };

        self.cards = cards;
        self.clear_turn_state();
        self.mode = Mode::Playing;
        self.started_at = now;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(
            difficulty = self.difficulty.as_str(),
            episode = self.episode_id,
            rng_state,
            "new game"
        );
        self.touch();
    }

    fn clear_turn_state(&mut self) {
        self.first_selected = None;
        self.second_selected = None;
        self.board_locked = false;
        self.moves_count = 0;
        self.is_game_over = false;
        self.peek_used = false;
        self.is_peeking = false;
        self.peek_end_time = 0;
        self.unflip_deadline = 0;
        self.finished_at = None;
    }

    // ---- input ----

    /// Apply one input event.
    pub fn handle_input(&mut self, event: InputEvent, now: u64) {
        match event {
            InputEvent::Quit => self.quit(),
            InputEvent::Resize { width, height } => self.resize(width, height),
            InputEvent::Click { x, y } => self.click(x, y, now),
            InputEvent::Peek => {
                self.activate_peek(now);
            }
            InputEvent::PlayAgain => {
                if self.phase() == Phase::GameOver {
                    self.reset(now);
                }
            }
            InputEvent::Restart => {
                if self.mode == Mode::Playing {
                    self.reset(now);
                }
            }
            InputEvent::Menu => self.back_to_menu(),
            InputEvent::SelectDifficulty(difficulty) => {
                if self.mode == Mode::Menu {
                    self.start(difficulty, now);
                }
            }
        }
    }

    /// Pointer click. Anything outside a card or button is ignored.
    pub fn click(&mut self, x: i32, y: i32, now: u64) {
        match self.mode {
            Mode::Terminated => {}
            Mode::Menu => {
                if let Some(difficulty) = self.buttons.difficulty_at(x, y) {
                    self.start(difficulty, now);
                }
            }
            Mode::Playing => {
                if self.is_game_over {
                    if self.buttons.play_again().contains(x, y) {
                        self.reset(now);
                    } else if self.buttons.menu().contains(x, y) {
                        self.back_to_menu();
                    }
                    return;
                }
                if self.buttons.menu().contains(x, y) {
                    self.back_to_menu();
                } else if self.buttons.peek().contains(x, y) {
                    self.activate_peek(now);
                } else if let Some(index) = self.card_at(x, y) {
                    self.select_card(index, now);
                }
            }
        }
    }

    /// Turn over the card at `index`.
    ///
    /// Returns `false` (and changes nothing) when the board is locked, the
    /// game is not in play, or the card is already face up.
    pub fn select_card(&mut self, index: usize, now: u64) -> bool {
        if self.mode != Mode::Playing || self.is_game_over || self.board_locked {
            return false;
        }
        let Some(card) = self.cards.get_mut(index) else {
            return false;
        };
        if !card.is_selectable() {
            return false;
        }

        card.flip_up();
        let pair_id = card.pair_id();
        self.emit(Cue::Flip);
        debug!(card = index, pair_id, "card flipped");

        match self.first_selected {
            None => {
                self.first_selected = Some(index);
            }
            Some(first) => {
                self.second_selected = Some(index);
                self.moves_count += 1;
                self.resolve_pair(first, index, now);
            }
        }
        self.touch();
        true
    }

    fn resolve_pair(&mut self, first: usize, second: usize, now: u64) {
        if self.cards[first].pair_id() == self.cards[second].pair_id() {
            self.cards[first].mark_matched();
            self.cards[second].mark_matched();
            self.first_selected = None;
            self.second_selected = None;
            self.emit(Cue::Match);
            debug!(pair_id = self.cards[first].pair_id(), "pair matched");

            if self.cards.iter().all(Card::is_matched) {
                self.is_game_over = true;
                self.finished_at = Some(now);
                self.emit(Cue::Win);
                info!(
                    moves = self.moves_count,
                    elapsed_ms = now.saturating_sub(self.started_at),
                    "board cleared"
                );
            }
        } else {
            self.board_locked = true;
            self.unflip_deadline = now.saturating_add(self.timing.flip_delay_ms);
            debug!(first, second, deadline = self.unflip_deadline, "mismatch");
        }
    }

    /// Reveal the whole board once per playthrough.
    ///
    /// Inert while the board is locked, after the peek was used, or outside
    /// play. Returns whether the peek started.
    pub fn activate_peek(&mut self, now: u64) -> bool {
        if !self.peek_available() {
            return false;
        }

        self.peek_used = true;
        self.is_peeking = true;
        self.board_locked = true;
        self.peek_end_time = now.saturating_add(self.timing.peek_duration_ms);
        for card in self.cards.iter_mut().filter(|c| !c.is_matched()) {
            card.flip_up();
        }
        debug!(until = self.peek_end_time, "peek started");
        self.touch();
        true
    }

    // ---- timers ----

    /// Advance timers to `now`.
    pub fn update(&mut self, now: u64) {
        if self.mode != Mode::Playing {
            return;
        }

        if self.is_peeking {
            if now >= self.peek_end_time {
                self.end_peek();
            }
            return;
        }

        if self.board_locked && now >= self.unflip_deadline {
            self.flip_back_mismatch();
        }
    }

    fn end_peek(&mut self) {
        let held = [self.first_selected, self.second_selected];
        for (i, card) in self.cards.iter_mut().enumerate() {
            if !held.contains(&Some(i)) {
                card.flip_down();
            }
        }
        self.is_peeking = false;
        self.board_locked = false;
        debug!("peek ended");
        self.touch();
    }

    fn flip_back_mismatch(&mut self) {
        for index in [self.first_selected, self.second_selected]
            .into_iter()
            .flatten()
        {
            if let Some(card) = self.cards.get_mut(index) {
                card.flip_down();
            }
        }
        self.first_selected = None;
        self.second_selected = None;
        self.board_locked = false;
        debug!("mismatch flipped back");
        self.touch();
    }

    fn emit(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
