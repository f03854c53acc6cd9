use falling_blocks::core::{Board, GameSnapshot, GameState, Phase, Piece};
use falling_blocks::term::{AnchorY, FrameBuffer, GameView, HudView, Rgb, Viewport};
use falling_blocks::types::PieceKind;

fn screen_contains(fb: &FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::I));
    let snap = GameSnapshot {
        board,
        ..GameSnapshot::default()
    };

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    let left = fb.get(x0, y0).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(left.style.fg, Rgb::from_hex(PieceKind::I.color()).unwrap());
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_current_piece_and_ghost() {
    let mut game = GameState::new(1);
    game.init_game();
    game.toggle_play();
    game.load_current(Some(Piece::new(PieceKind::O)));

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));

    // O at x=4..5, rows 0..1; ghost on rows 18..19.
    assert_eq!(fb.get(1 + 4 * 2, 1).unwrap().ch, '█');
    assert_eq!(fb.get(1 + 5 * 2 + 1, 2).unwrap().ch, '█');
    assert_eq!(fb.get(1 + 4 * 2, 1 + 18).unwrap().ch, '░');
    assert_eq!(fb.get(1 + 5 * 2, 1 + 19).unwrap().ch, '░');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = GameState::new(1).with_high_score(98765);
    game.init_game();
    let mut snap = game.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.held = Some(Piece::new(PieceKind::T));

    let hints = vec!["Left   ArrowLeft".to_string()];
    let hud = HudView {
        prompt: None,
        hints: &hints,
    };
    let fb = GameView::default().render_with_hud(&snap, &hud, Viewport::new(60, 24));

    for label in ["NEXT", "HOLD", "SCORE", "HIGH SCORE", "LEVEL", "1234", "98765", "ArrowLeft"] {
        assert!(screen_contains(&fb, label), "missing {:?}", label);
    }
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(30, 22));
    assert!(!screen_contains(&fb, "SCORE"));
}

#[test]
fn term_view_overlays_match_phase() {
    let mut game = GameState::new(1);
    game.init_game();
    let view = GameView::default();
    let vp = Viewport::new(40, 22);

    let paused = view.render(&game.snapshot(), vp);
    assert!(screen_contains(&paused, "PAUSED"));

    game.toggle_play();
    let playing = view.render(&game.snapshot(), vp);
    assert!(!screen_contains(&playing, "PAUSED"));

    let mut over = game.snapshot();
    over.phase = Phase::GameOver;
    assert!(screen_contains(&view.render(&over, vp), "GAME OVER"));
}

#[test]
fn term_view_prompt_replaces_banner() {
    let mut game = GameState::new(1);
    game.init_game();
    let hud = HudView {
        prompt: Some("Key for Hold?"),
        hints: &[],
    };

    let fb = GameView::default().render_with_hud(&game.snapshot(), &hud, Viewport::new(40, 22));
    assert!(screen_contains(&fb, "Key for Hold?"));
    assert!(!screen_contains(&fb, "PAUSED"));
}

#[test]
fn term_view_top_anchor_starts_at_row_zero() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(22, 40));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_reuses_framebuffer() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, &HudView::default(), Viewport::new(22, 22), &mut fb);
    let first = fb.clone();
    view.render_into(&snap, &HudView::default(), Viewport::new(22, 22), &mut fb);
    assert_eq!(fb, first);
}
