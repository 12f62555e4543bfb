//! GameSession behaviour through the public API.

use tui_pairs::core::{GameSession, Phase, Rank, SentenceBank, SimpleRng};
use tui_pairs::types::{Cue, Difficulty, InputEvent, FLIP_DELAY_MS, PEEK_DURATION_MS};

fn started(difficulty: Difficulty, seed: u64) -> GameSession {
    let mut s = GameSession::new(SentenceBank::builtin(), SimpleRng::new(seed), 80, 24).unwrap();
    s.start(difficulty, 0);
    s
}

fn partner(s: &GameSession, index: usize) -> usize {
    let pair_id = s.cards()[index].pair_id();
    s.cards()
        .iter()
        .enumerate()
        .position(|(i, c)| i != index && c.pair_id() == pair_id)
        .unwrap()
}

fn stranger(s: &GameSession, index: usize) -> usize {
    let pair_id = s.cards()[index].pair_id();
    s.cards().iter().position(|c| c.pair_id() != pair_id).unwrap()
}

fn center(s: &GameSession, index: usize) -> InputEvent {
    let r = s.cards()[index].rect();
    InputEvent::Click {
        x: r.x + r.width as i32 / 2,
        y: r.y + r.height as i32 / 2,
    }
}

fn assert_invariants(s: &GameSession) {
    for card in s.cards() {
        assert!(!card.is_matched() || card.is_flipped(), "matched card face down");
    }
    if s.is_game_over() {
        assert!(s.cards().iter().all(|c| c.is_matched()));
    }
    if !s.is_peeking() {
        let face_up_unmatched = s
            .cards()
            .iter()
            .filter(|c| c.is_flipped() && !c.is_matched())
            .count();
        assert!(face_up_unmatched <= 2, "{face_up_unmatched} unmatched cards face up");
    }
}

/// Solve the board pair by pair, draining cues as the game loop would.
fn solve(s: &mut GameSession, now: &mut u64) -> Vec<Cue> {
    let mut cues = Vec::new();
    while let Some(i) = s.cards().iter().position(|c| !c.is_matched()) {
        let j = partner(s, i);
        *now += 16;
        assert!(s.select_card(i, *now));
        *now += 16;
        assert!(s.select_card(j, *now));
        s.update(*now);
        cues.extend(s.drain_cues());
        assert_invariants(s);
    }
    cues
}

#[test]
fn test_reset_twice_gives_fresh_board() {
    let mut s = started(Difficulty::Normal, 4);
    s.select_card(0, 10);
    s.activate_peek(20);

    s.reset(100);
    s.reset(200);

    assert_eq!(s.phase(), Phase::Idle);
    assert_eq!(s.cards().len(), 16);
    assert_eq!(s.moves_count(), 0);
    assert!(!s.peek_used());
    assert!(!s.is_peeking());
    assert!(!s.board_locked());
    assert!(s.cards().iter().all(|c| !c.is_flipped() && !c.is_matched()));
    assert_eq!(s.first_selected(), None);
}

#[test]
fn test_scenario_match() {
    let mut s = started(Difficulty::Easy, 1);
    let j = partner(&s, 0);
    s.select_card(0, 10);
    s.select_card(j, 20);

    assert!(s.cards()[0].is_matched());
    assert!(s.cards()[j].is_matched());
    assert_eq!(s.moves_count(), 1);
    assert!(!s.board_locked());
    assert_eq!(s.phase(), Phase::Idle);
}

#[test]
fn test_scenario_mismatch_flip_back_at_deadline() {
    let mut s = started(Difficulty::Easy, 1);
    let k = stranger(&s, 0);
    s.select_card(0, 100);
    s.select_card(k, 200);
    assert!(s.board_locked());
    assert_eq!(s.moves_count(), 1);
    assert_eq!(s.phase(), Phase::Resolving);

    s.update(200 + FLIP_DELAY_MS - 1);
    assert!(s.cards()[0].is_flipped());

    s.update(200 + FLIP_DELAY_MS);
    assert!(!s.cards()[0].is_flipped());
    assert!(!s.cards()[k].is_flipped());
    assert!(!s.board_locked());
    assert!(s.cards().iter().all(|c| !c.is_matched()));
}

#[test]
fn test_scenario_peek_on_easy_board() {
    let mut s = started(Difficulty::Easy, 2);
    assert!(s.activate_peek(1_000));
    assert!(s.cards().iter().all(|c| c.is_flipped()));
    assert!(s.board_locked());

    s.update(1_000 + PEEK_DURATION_MS);
    assert!(s.cards().iter().all(|c| !c.is_flipped()));
    assert!(s.peek_used());
    assert!(!s.board_locked());
    assert!(!s.activate_peek(10_000));
}

#[test]
fn test_scenario_last_pair_wins_once() {
    let mut s = started(Difficulty::Normal, 8);
    let mut now = 0;
    let cues = solve(&mut s, &mut now);

    assert!(s.is_game_over());
    assert_eq!(s.phase(), Phase::GameOver);
    assert_eq!(cues.iter().filter(|c| **c == Cue::Win).count(), 1);
    assert_eq!(cues.iter().filter(|c| **c == Cue::Match).count(), 8);
    assert_eq!(cues.iter().filter(|c| **c == Cue::Flip).count(), 16);

    // Nothing more happens after the win.
    assert!(!s.select_card(0, now + 16));
    s.update(now + 10_000);
    assert!(s.drain_cues().is_empty());

    let result = s.result().unwrap();
    assert_eq!(result.moves, 8);
    assert_eq!(result.rank, Rank::S);
    assert_eq!(result.difficulty, Difficulty::Normal);
}

#[test]
fn test_win_cue_survives_undrained_burst() {
    let mut s = started(Difficulty::Normal, 13);
    let mut now = 0;

    // A few pairs drained as they happen, the rest in one burst of clicks.
    for _ in 0..3 {
        let i = s.cards().iter().position(|c| !c.is_matched()).unwrap();
        let j = partner(&s, i);
        now += 16;
        s.handle_input(center(&s, i), now);
        s.handle_input(center(&s, j), now);
        s.drain_cues();
    }
    while let Some(i) = s.cards().iter().position(|c| !c.is_matched()) {
        let j = partner(&s, i);
        s.handle_input(center(&s, i), now);
        s.handle_input(center(&s, j), now);
    }
    assert!(s.is_game_over());

    let cues = s.drain_cues();
    assert_eq!(cues.iter().filter(|c| **c == Cue::Flip).count(), 10);
    assert_eq!(cues.iter().filter(|c| **c == Cue::Match).count(), 5);
    assert_eq!(cues.iter().filter(|c| **c == Cue::Win).count(), 1);
    assert_eq!(cues.last(), Some(&Cue::Win));
}

#[test]
fn test_clicks_on_flipped_or_matched_cards_do_nothing() {
    let mut s = started(Difficulty::Easy, 3);
    let j = partner(&s, 0);
    s.handle_input(center(&s, 0), 10);
    let revision = s.revision();
    s.handle_input(center(&s, 0), 20);
    assert_eq!(s.revision(), revision);
    assert_eq!(s.moves_count(), 0);

    s.handle_input(center(&s, j), 30);
    assert_eq!(s.moves_count(), 1);
    s.handle_input(center(&s, j), 40);
    assert_eq!(s.moves_count(), 1);
    assert_eq!(s.first_selected(), None);
}

#[test]
fn test_click_driven_game_from_menu_to_play_again() {
    let mut s = GameSession::new(SentenceBank::builtin(), SimpleRng::new(6), 80, 24).unwrap();
    let easy = s.buttons().difficulty(Difficulty::Easy);
    s.handle_input(InputEvent::Click { x: easy.x + 1, y: easy.y + 1 }, 0);
    assert_eq!(s.phase(), Phase::Idle);
    assert_eq!(s.difficulty(), Difficulty::Easy);

    let mut now = 0;
    while let Some(i) = s.cards().iter().position(|c| !c.is_matched()) {
        let j = partner(&s, i);
        now += 16;
        s.handle_input(center(&s, i), now);
        now += 16;
        s.handle_input(center(&s, j), now);
    }
    assert_eq!(s.phase(), Phase::GameOver);
    let episode = s.episode_id();

    let again = s.buttons().play_again();
    s.handle_input(InputEvent::Click { x: again.x + 1, y: again.y + 1 }, now + 500);
    assert_eq!(s.phase(), Phase::Idle);
    assert_eq!(s.moves_count(), 0);
    assert_ne!(s.episode_id(), episode);
}

#[test]
fn test_random_play_keeps_invariants() {
    for seed in 0..20 {
        let mut s = started(Difficulty::Hard, seed);
        let mut rng = SimpleRng::new(seed + 1000);
        let mut now = 0;
        for _ in 0..600 {
            now += 16 + rng.next_range(400) as u64;
            match rng.next_range(20) {
                0 => {
                    s.activate_peek(now);
                }
                1 => s.handle_input(InputEvent::Restart, now),
                _ => {
                    let i = rng.next_range(s.cards().len() as u32) as usize;
                    s.select_card(i, now);
                }
            }
            s.update(now);
            s.drain_cues();
            assert_invariants(&s);
            if s.is_game_over() {
                s.reset(now);
            }
        }
    }
}

#[test]
fn test_restart_and_menu_keys() {
    let mut s = started(Difficulty::Hard, 5);
    s.select_card(0, 10);
    s.handle_input(InputEvent::Restart, 20);
    assert_eq!(s.difficulty(), Difficulty::Hard);
    assert!(s.cards().iter().all(|c| !c.is_flipped()));

    s.handle_input(InputEvent::Menu, 30);
    assert_eq!(s.phase(), Phase::Menu);
    assert!(s.cards().is_empty());

    // Restart means nothing in the menu.
    s.handle_input(InputEvent::Restart, 40);
    assert_eq!(s.phase(), Phase::Menu);

    s.handle_input(InputEvent::SelectDifficulty(Difficulty::Normal), 50);
    assert_eq!(s.cards().len(), 16);
}

#[test]
fn test_resize_moves_cards_not_state() {
    let mut s = started(Difficulty::Easy, 12);
    s.select_card(0, 10);
    let before = s.cards()[0].rect();

    s.handle_input(InputEvent::Resize { width: 140, height: 50 }, 20);

    assert_eq!(s.screen_size(), (140, 50));
    assert_ne!(s.cards()[0].rect(), before);
    assert!(s.cards()[0].is_flipped());
    assert_eq!(s.first_selected(), Some(0));
    assert_eq!(s.card_at(s.cards()[3].rect().x, s.cards()[3].rect().y), Some(3));
}

#[test]
fn test_quit_terminates() {
    let mut s = started(Difficulty::Easy, 1);
    s.handle_input(InputEvent::Quit, 5);
    assert!(s.is_terminated());
    assert_eq!(s.phase(), Phase::Terminated);
    assert!(!s.select_card(0, 10));
}
