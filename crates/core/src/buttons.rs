//! On-screen button rectangles.
//!
//! Hit-testing happens in the session and drawing happens in the terminal
//! view; both read the same `ButtonLayout` so they cannot drift apart.

use crate::types::{Difficulty, Rect};

/// Width of the HUD buttons (`[ Menu ]`, `[ Peek ]`).
pub const HUD_BUTTON_WIDTH: u16 = 8;

/// Size of the play-again button on the game-over overlay.
pub const PLAY_AGAIN_WIDTH: u16 = 20;
pub const PLAY_AGAIN_HEIGHT: u16 = 3;

/// Size of each difficulty button in the menu.
pub const MENU_BUTTON_WIDTH: u16 = 24;
pub const MENU_BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLayout {
    menu: Rect,
    peek: Rect,
    play_again: Rect,
    difficulties: [Rect; 3],
}

impl ButtonLayout {
    pub fn new(screen_w: u16, screen_h: u16) -> Self {
        let w = screen_w as i32;
        let h = screen_h as i32;

        let menu = Rect::new(1, 0, HUD_BUTTON_WIDTH, 1);
        let peek = Rect::new(
            (w - HUD_BUTTON_WIDTH as i32 - 1).max(0),
            0,
            HUD_BUTTON_WIDTH,
            1,
        );
        let play_again = Rect::new(
            (w - PLAY_AGAIN_WIDTH as i32) / 2,
            h / 2 + 2,
            PLAY_AGAIN_WIDTH,
            PLAY_AGAIN_HEIGHT,
        );

        let step = MENU_BUTTON_HEIGHT as i32 + 1;
        let first_y = (h / 2 - step).max(4);
        let mut difficulties = [Rect::default(); 3];
        for (i, rect) in difficulties.iter_mut().enumerate() {
            *rect = Rect::new(
                (w - MENU_BUTTON_WIDTH as i32) / 2,
                first_y + i as i32 * step,
                MENU_BUTTON_WIDTH,
                MENU_BUTTON_HEIGHT,
            );
        }

        Self {
            menu,
            peek,
            play_again,
            difficulties,
        }
    }

    pub fn menu(&self) -> Rect {
        self.menu
    }

    pub fn peek(&self) -> Rect {
        self.peek
    }

    pub fn play_again(&self) -> Rect {
        self.play_again
    }

    /// Button rectangle for a difficulty preset.
    pub fn difficulty(&self, difficulty: Difficulty) -> Rect {
        let i = Difficulty::ALL
            .iter()
            .position(|d| *d == difficulty)
            .unwrap_or(0);
        self.difficulties[i]
    }

    /// Which difficulty button, if any, is under the point.
    pub fn difficulty_at(&self, x: i32, y: i32) -> Option<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .zip(self.difficulties)
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(d, _)| d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_buttons_sit_on_the_first_row() {
        let buttons = ButtonLayout::new(80, 24);
        assert_eq!(buttons.menu().y, 0);
        assert_eq!(buttons.peek().y, 0);
        assert_eq!(buttons.peek().right(), 79);
        assert!(!buttons.menu().intersects(&buttons.peek()));
    }

    #[test]
    fn difficulty_buttons_do_not_overlap() {
        let buttons = ButtonLayout::new(80, 24);
        let rects: Vec<Rect> = Difficulty::ALL.iter().map(|d| buttons.difficulty(*d)).collect();
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                assert!(!a.intersects(b));
            }
        }
    }

    #[test]
    fn difficulty_hit_test() {
        let buttons = ButtonLayout::new(80, 24);
        let normal = buttons.difficulty(Difficulty::Normal);
        assert_eq!(
            buttons.difficulty_at(normal.x + 1, normal.y + 1),
            Some(Difficulty::Normal)
        );
        assert_eq!(buttons.difficulty_at(0, 23), None);
    }
}
