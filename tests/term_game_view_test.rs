use tui_pairs::core::{GameSession, SentenceBank, SimpleRng};
use tui_pairs::term::{FrameBuffer, GameView, Viewport};
use tui_pairs::types::{Difficulty, PEEK_DURATION_MS};

fn session(seed: u64) -> GameSession {
    GameSession::new(SentenceBank::builtin(), SimpleRng::new(seed), 80, 24).unwrap()
}

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
}

fn partner(s: &GameSession, index: usize) -> usize {
    let pair_id = s.cards()[index].pair_id();
    s.cards()
        .iter()
        .enumerate()
        .position(|(i, c)| i != index && c.pair_id() == pair_id)
        .unwrap()
}

#[test]
fn term_view_menu_lists_difficulties() {
    let s = session(1);
    let fb = GameView::default().render(&s, 0, Viewport::new(80, 24));
    let text = fb.to_text();

    assert!(text.contains("SENTENCE PAIRS"));
    assert!(text.contains("Easy"));
    assert!(text.contains("Normal"));
    assert!(text.contains("Hard"));
    assert!(text.contains("12 pairs"));

    let normal = s.buttons().difficulty(Difficulty::Normal);
    let row = row_text(&fb, (normal.y + 1) as u16);
    assert!(row.contains("2  Normal"), "{row:?}");
}

#[test]
fn term_view_hud_shows_moves_and_peek() {
    let mut s = session(2);
    s.start(Difficulty::Easy, 0);
    let fb = GameView::default().render(&s, 65_000, Viewport::new(80, 24));
    let hud = row_text(&fb, 0);

    assert!(hud.contains("Menu"), "{hud:?}");
    assert!(hud.contains("Moves 0"), "{hud:?}");
    assert!(hud.contains("Easy"), "{hud:?}");
    assert!(hud.contains("1:05"), "{hud:?}");
    assert!(hud.contains("Peek"), "{hud:?}");
}

#[test]
fn term_view_peek_counts_down() {
    let mut s = session(3);
    s.start(Difficulty::Easy, 0);
    s.activate_peek(1_000);

    let view = GameView::default();
    let fb = view.render(&s, 1_000, Viewport::new(80, 24));
    assert!(row_text(&fb, 0).contains("Peek 3s"));

    let fb = view.render(&s, 1_000 + PEEK_DURATION_MS - 1_500, Viewport::new(80, 24));
    assert!(row_text(&fb, 0).contains("Peek 2s"));
}

#[test]
fn term_view_face_up_card_shows_wrapped_text() {
    let mut s = session(4);
    s.start(Difficulty::Hard, 0);
    let index = s
        .cards()
        .iter()
        .position(|c| c.text() == "on an important project right now.")
        .unwrap();
    s.select_card(index, 10);

    let fb = GameView::default().render(&s, 10, Viewport::new(80, 24));
    let rect = s.cards()[index].rect();
    let lines: Vec<String> = (rect.y..rect.bottom())
        .map(|y| {
            (rect.x..rect.right())
                .map(|x| fb.get(x as u16, y as u16).unwrap().ch)
                .collect::<String>()
                .trim()
                .to_string()
        })
        .collect();
    assert_eq!(lines, vec!["on an", "important", "project", "right now."]);
}

#[test]
fn term_view_game_over_overlay() {
    let mut s = session(5);
    s.start(Difficulty::Easy, 0);
    let mut now = 0;
    while let Some(i) = s.cards().iter().position(|c| !c.is_matched()) {
        let j = partner(&s, i);
        now += 1_000;
        s.select_card(i, now);
        s.select_card(j, now);
    }

    let fb = GameView::default().render(&s, now + 5_000, Viewport::new(80, 24));
    let text = fb.to_text();
    assert!(text.contains("All pairs found!"));
    assert!(text.contains("Play again"));
    assert!(text.contains("Rank"));
    // Time is frozen at the winning move.
    assert!(text.contains("0:06"), "{text}");

    let again = s.buttons().play_again();
    let label_row = row_text(&fb, (again.y + 1) as u16);
    assert!(label_row.contains("Play again"));
}

#[test]
fn term_view_render_into_reuses_and_resizes() {
    let mut s = session(6);
    s.start(Difficulty::Normal, 0);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);

    view.render_into(&s, 0, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    let first = fb.clone();

    view.render_into(&s, 0, Viewport::new(80, 24), &mut fb);
    assert_eq!(fb, first);

    s.resize(100, 30);
    view.render_into(&s, 0, Viewport::new(100, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (100, 30));
}

#[test]
fn term_view_small_terminal_does_not_panic() {
    let mut s = GameSession::new(SentenceBank::builtin(), SimpleRng::new(7), 20, 6).unwrap();
    let view = GameView::default();
    view.render(&s, 0, Viewport::new(20, 6));
    s.start(Difficulty::Hard, 0);
    s.activate_peek(0);
    view.render(&s, 0, Viewport::new(20, 6));
    view.render(&s, 0, Viewport::new(0, 0));
}
