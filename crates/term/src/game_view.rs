//! GameView: maps a `GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Card, GameSession, Phase};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Difficulty, Rect};
use crate::wrap::wrap_into;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const SCREEN: CellStyle = CellStyle::new(Rgb::new(200, 200, 210), Rgb::new(18, 18, 24));
const HUD: CellStyle = CellStyle::new(Rgb::new(210, 210, 220), Rgb::new(40, 40, 52));
const HINT: CellStyle = SCREEN.dim();
const TITLE: CellStyle = CellStyle::new(Rgb::new(255, 215, 120), Rgb::new(18, 18, 24)).bold();

const BUTTON: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(70, 70, 100)).bold();
const BUTTON_OFF: CellStyle = CellStyle::new(Rgb::new(140, 140, 150), Rgb::new(40, 40, 52)).dim();
const PEEKING: CellStyle = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(255, 200, 90)).bold();
const PLAY_AGAIN: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 150, 80)).bold();

const CARD_BACK: CellStyle = CellStyle::new(Rgb::new(200, 220, 255), Rgb::new(30, 90, 200)).bold();
const CARD_FACE: CellStyle = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(235, 235, 225));
const CARD_HELD: CellStyle = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(255, 225, 140));
const CARD_MATCHED: CellStyle = CellStyle::new(Rgb::new(15, 45, 15), Rgb::new(150, 215, 150));

const PANEL: CellStyle = CellStyle::new(Rgb::new(230, 230, 240), Rgb::new(34, 34, 50));
const PANEL_WIDTH: u16 = 36;
const PANEL_HEIGHT: u16 = 11;

/// A lightweight terminal renderer for the pairs game.
#[derive(Debug, Clone, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the session into an existing framebuffer.
    ///
    /// `now` is the same millisecond clock the session is driven with; it
    /// feeds the play timer and the peek countdown.
    pub fn render_into(
        &self,
        session: &GameSession,
        now: u64,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(SCREEN.into_cell(' '));

        match session.phase() {
            Phase::Terminated => {}
            Phase::Menu => self.draw_menu(fb, session, viewport),
            phase => {
                self.draw_hud(fb, session, now, viewport);
                self.draw_cards(fb, session);
                if phase == Phase::GameOver {
                    self.draw_game_over(fb, session, viewport);
                } else {
                    self.draw_hint(
                        fb,
                        viewport,
                        "click two cards   p peek   r restart   esc menu   q quit",
                    );
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession, now: u64, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, now, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, session: &GameSession, now: u64, viewport: Viewport) {
        fb.fill_rect(Rect::new(0, 0, viewport.width, 1), ' ', HUD);

        let buttons = session.buttons();
        draw_button(fb, buttons.menu(), "Menu", BUTTON);

        let mut x = buttons.menu().right() + 2;
        x += fb.put_str(x, 0, "Moves ", HUD);
        x += fb.put_u32(x, 0, session.moves_count(), HUD.bold());
        x += 3;
        x += fb.put_str(x, 0, session.difficulty().label(), HUD);
        x += 3;
        put_clock(fb, x, 0, session.elapsed_ms(now), HUD);

        let peek = buttons.peek();
        if session.is_peeking() {
            fb.fill_rect(peek, ' ', PEEKING);
            let secs = session.peek_remaining_ms(now).div_ceil(1000) as u32;
            let mut px = peek.x + 1;
            px += fb.put_str(px, peek.y, "Peek ", PEEKING);
            px += fb.put_u32(px, peek.y, secs, PEEKING);
            fb.put_char(px, peek.y, 's', PEEKING);
        } else if session.peek_available() {
            draw_button(fb, peek, "Peek", BUTTON);
        } else {
            draw_button(fb, peek, "Peek", BUTTON_OFF);
        }
    }

    fn draw_cards(&self, fb: &mut FrameBuffer, session: &GameSession) {
        let held = session.first_selected();
        let mut lines = Vec::with_capacity(8);
        for (i, card) in session.cards().iter().enumerate() {
            draw_card(fb, card, held == Some(i), &mut lines);
        }
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, session: &GameSession, viewport: Viewport) {
        let buttons = session.buttons();
        let first = buttons.difficulty(Difficulty::Easy);
        let w = viewport.width as i32;

        fb.put_str_centered(0, w, first.y - 3, "SENTENCE PAIRS", TITLE);
        fb.put_str_centered(
            0,
            w,
            first.y - 2,
            "Match the two halves of each sentence",
            SCREEN,
        );

        for (i, difficulty) in Difficulty::ALL.into_iter().enumerate() {
            let rect = buttons.difficulty(difficulty);
            fb.fill_rect(rect, ' ', BUTTON);
            let row = rect.y + rect.height as i32 / 2;
            let mut x = rect.x + 2;
            x += fb.put_u32(x, row, i as u32 + 1, BUTTON);
            fb.put_str(x + 2, row, difficulty.label(), BUTTON);

            let pairs_x = rect.right() - 9;
            let n = fb.put_u32(pairs_x, row, difficulty.pair_count() as u32, BUTTON);
            fb.put_str(pairs_x + n, row, " pairs", BUTTON);
        }

        self.draw_hint(fb, viewport, "click a difficulty or press 1-3   q quit");
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, session: &GameSession, viewport: Viewport) {
        let Some(result) = session.result() else {
            return;
        };

        let w = viewport.width as i32;
        let h = viewport.height as i32;
        let panel = Rect::new(
            (w - PANEL_WIDTH as i32) / 2,
            h / 2 - 5,
            PANEL_WIDTH,
            PANEL_HEIGHT,
        );
        fb.fill_rect(panel, ' ', PANEL);
        fb.put_str_centered(panel.x, panel.width as i32, h / 2 - 4, "All pairs found!", PANEL.bold());

        let label_x = panel.x + 10;
        let value_x = label_x + 8;
        fb.put_str(label_x, h / 2 - 2, "Moves", PANEL);
        fb.put_u32(value_x, h / 2 - 2, result.moves, PANEL.bold());
        fb.put_str(label_x, h / 2 - 1, "Time", PANEL);
        put_clock(fb, value_x, h / 2 - 1, result.elapsed_ms, PANEL.bold());
        fb.put_str(label_x, h / 2, "Rank", PANEL);
        fb.put_str(value_x, h / 2, result.rank.as_str(), PANEL.bold());
        if result.peek_used {
            fb.put_str(value_x + 2, h / 2, "(peeked)", PANEL.dim());
        }

        let play_again = session.buttons().play_again();
        fb.fill_rect(play_again, ' ', PLAY_AGAIN);
        fb.put_str_centered(
            play_again.x,
            play_again.width as i32,
            play_again.y + play_again.height as i32 / 2,
            "Play again",
            PLAY_AGAIN,
        );

        self.draw_hint(fb, viewport, "enter play again   esc menu   q quit");
    }

    fn draw_hint(&self, fb: &mut FrameBuffer, viewport: Viewport, text: &str) {
        if viewport.height < 2 {
            return;
        }
        let y = viewport.height as i32 - 1;
        fb.put_str_centered(0, viewport.width as i32, y, text, HINT);
    }
}

fn draw_button(fb: &mut FrameBuffer, rect: Rect, label: &str, style: CellStyle) {
    fb.fill_rect(rect, ' ', style);
    fb.put_str_centered(
        rect.x,
        rect.width as i32,
        rect.y + rect.height as i32 / 2,
        label,
        style,
    );
}

fn draw_card<'a>(fb: &mut FrameBuffer, card: &'a Card, held: bool, lines: &mut Vec<&'a str>) {
    let rect = card.rect();
    if !card.is_face_up() {
        fb.fill_rect(rect, ' ', CARD_BACK);
        fb.put_char(
            rect.x + rect.width as i32 / 2,
            rect.y + rect.height as i32 / 2,
            '?',
            CARD_BACK,
        );
        return;
    }

    let style = if card.is_matched() {
        CARD_MATCHED
    } else if held {
        CARD_HELD
    } else {
        CARD_FACE
    };
    fb.fill_rect(rect, ' ', style);

    let inner_w = rect.width.saturating_sub(2) as usize;
    wrap_into(card.text(), inner_w, lines);
    let shown = lines.len().min(rect.height as usize);
    let top = rect.y + (rect.height as i32 - shown as i32) / 2;
    for (row, line) in lines.iter().take(shown).enumerate() {
        fb.put_str_centered(rect.x + 1, inner_w as i32, top + row as i32, line, style);
    }
}

/// Draw `m:ss`; returns the columns used.
fn put_clock(fb: &mut FrameBuffer, x: i32, y: i32, elapsed_ms: u64, style: CellStyle) -> i32 {
    let secs = elapsed_ms / 1000;
    let minutes = (secs / 60).min(u32::MAX as u64) as u32;
    let rem = (secs % 60) as u32;
    let mut cx = x + fb.put_u32(x, y, minutes, style);
    fb.put_char(cx, y, ':', style);
    cx += 1;
    if rem < 10 {
        fb.put_char(cx, y, '0', style);
        cx += 1;
    }
    cx += fb.put_u32(cx, y, rem, style);
    cx - x
}
