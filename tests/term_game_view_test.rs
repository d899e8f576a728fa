use stonefall::core::{GameSnapshot, GameState, SequenceSource};
use stonefall::term::{FrameBuffer, GameView, Overlay, Viewport};
use stonefall::types::{Button, GameAction, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board = 10*2 by 22*1 => 20x22, plus border => 22x24, plus 20 for the panel.
    let fb = view.render(&snap, &Overlay::default(), Viewport::new(42, 24));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 23).unwrap().ch, '└');
    assert_eq!(fb.get(21, 23).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    // Put a settled I cell at bottom-left.
    snap.board[21 * 10] = PieceKind::I.color();
    snap.active = None;

    let fb = GameView::default().render(&snap, &Overlay::default(), Viewport::new(42, 24));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    assert_eq!(fb.get(1, 22).unwrap().ch, '█');
    assert_eq!(fb.get(2, 22).unwrap().ch, '█');
    assert_eq!(fb.get(3, 22).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_side_panel() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let fb = GameView::default().render(&snap, &Overlay::default(), Viewport::new(60, 24));
    let all = screen_text(&fb);
    assert!(all.contains("Next:"));
    assert!(all.contains("Score: 1234"));
    assert!(all.contains("Level: 2"));
    assert!(all.contains("Lines: 10"));
    assert!(all.contains("Pause"));
    assert!(all.contains("Exit"));
}

#[test]
fn term_view_hides_board_while_paused() {
    let mut state = GameState::new(3);
    state.apply_action(GameAction::TogglePause);
    let overlay = Overlay {
        pointer: None,
        countdown: Some((Button::Unpause, 1)),
    };
    let fb = GameView::default().render(&state.snapshot(), &overlay, Viewport::new(42, 24));
    let all = screen_text(&fb);

    assert!(all.contains("Paused"));
    assert!(all.contains("Unpausing in 1"));
    assert!(!all.contains('█'));
    assert!(!all.contains("Score"));
}

#[test]
fn term_view_shows_final_score_after_game_over() {
    let mut state = GameState::with_source(10, 22, SequenceSource::repeat(PieceKind::O));
    while !state.snapshot().game_over() {
        state.hard_drop();
    }
    let score = state.score();
    let fb = GameView::default().render(&state.snapshot(), &Overlay::default(), Viewport::new(42, 24));
    let all = screen_text(&fb);

    assert!(all.contains("Game Over!"));
    assert!(all.contains(&format!("Your score: {}", score)));
    assert!(all.contains("Continue"));
}

#[test]
fn term_view_centers_board_on_large_viewports() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, &Overlay::default(), Viewport::new(82, 30));

    // start_x = (82 - 42) / 2 = 20, start_y = (30 - 24) / 2 = 3.
    assert_eq!(fb.get(20, 3).unwrap().ch, '┌');
}

#[test]
fn term_view_survives_tiny_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(
        &snap,
        &Overlay {
            pointer: Some((500, 500)),
            countdown: None,
        },
        Viewport::new(5, 3),
    );
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
