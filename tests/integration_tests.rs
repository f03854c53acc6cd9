//! Integration tests for the game state machine

use falling_blocks::core::{Board, GameState, Phase, Piece};
use falling_blocks::types::{GameAction, PieceKind, SPAWN_X};

/// A game that is playing, with the given board and pieces in place.
fn playing_with(board: Board, current: Piece, next: Piece) -> GameState {
    let mut game = GameState::new(12345);
    game.init_game();
    game.toggle_play();
    game.load_board(board);
    game.load_current(Some(current));
    game.load_next(Some(next));
    game
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new(12345);
    assert_eq!(game.phase(), Phase::Uninitialized);

    game.init_game();
    assert_eq!(game.phase(), Phase::Paused);
    assert!(game.current().is_some());
    assert!(game.next().is_some());
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);

    game.toggle_play();
    assert_eq!(game.phase(), Phase::Playing);
    game.toggle_play();
    assert_eq!(game.phase(), Phase::Paused);
}

#[test]
fn test_toggle_from_uninitialized_starts_a_game() {
    let mut game = GameState::new(9);
    game.apply_action(GameAction::Pause);
    assert_eq!(game.phase(), Phase::Playing);
    assert!(game.current().is_some());
}

#[test]
fn test_paused_game_ignores_moves() {
    let mut game = GameState::new(3);
    game.init_game();
    let before = game.snapshot();

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Hold,
    ] {
        game.apply_action(action);
    }
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_o_piece_hard_drop_lands_on_floor() {
    let mut game = playing_with(
        Board::new(),
        Piece::new(PieceKind::O),
        Piece::new(PieceKind::T),
    );

    game.hard_drop();

    let board = game.board();
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(board.get(x, y), Some(Some(PieceKind::O)), "({}, {})", x, y);
    }
    assert_eq!(board.filled_count(), 4);
    assert_eq!(game.current().map(|p| p.kind()), Some(PieceKind::T));
    assert_eq!(game.score(), 0);
}

#[test]
fn test_o_piece_falls_one_row_per_move_down_until_lock() {
    let mut game = playing_with(
        Board::new(),
        Piece::new(PieceKind::O),
        Piece::new(PieceKind::T),
    );

    let mut y = game.current().unwrap().y;
    assert_eq!(y, 0);
    let mut steps = 0;
    while game.current().map(|p| p.kind()) == Some(PieceKind::O) {
        game.move_down();
        steps += 1;
        match game.current() {
            Some(piece) if piece.kind() == PieceKind::O => {
                assert_eq!(piece.y, y + 1);
                y = piece.y;
            }
            _ => break,
        }
        assert!(steps < 30, "piece never locked");
    }

    // 18 falls, then one more call locks it at y = H - 2.
    assert_eq!(y, 18);
    assert_eq!(steps, 19);
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(game.board().get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(game.current().map(|p| p.kind()), Some(PieceKind::T));
}

/// Clear row 19 with a horizontal I dropped into a four-cell gap.
fn clear_single(game: &mut GameState) -> u32 {
    let mut board = Board::new();
    board.fill_row_except(19, PieceKind::Z, &[3, 4, 5, 6]);
    game.load_board(board);
    game.load_current(Some(Piece::new(PieceKind::I).at(3, 0)));
    game.load_next(Some(Piece::new(PieceKind::T)));
    game.hard_drop();
    game.take_last_event().map(|e| e.points).unwrap_or(0)
}

#[test]
fn test_points_use_level_before_the_lock() {
    let mut game = playing_with(Board::new(), Piece::new(PieceKind::T), Piece::new(PieceKind::T));

    for _ in 0..24 {
        assert_eq!(clear_single(&mut game), 40);
    }
    assert_eq!(game.score(), 960);
    assert_eq!(game.level(), 1);

    // Reaches 1000 and level 2, but is still scored at level 1.
    assert_eq!(clear_single(&mut game), 40);
    assert_eq!(game.score(), 1000);
    assert_eq!(game.level(), 2);

    assert_eq!(clear_single(&mut game), 80);
    assert_eq!(game.score(), 1080);
    assert_eq!(game.level(), 2);
}

#[test]
fn test_walls_block_moves() {
    let mut game = playing_with(
        Board::new(),
        Piece::new(PieceKind::O),
        Piece::new(PieceKind::T),
    );

    for _ in 0..10 {
        game.move_left();
    }
    assert_eq!(game.current().map(|p| p.x), Some(0));

    for _ in 0..10 {
        game.move_right();
    }
    assert_eq!(game.current().map(|p| p.x), Some(8));
}

#[test]
fn test_single_line_clear() {
    let mut board = Board::new();
    board.fill_row_except(19, PieceKind::Z, &[3, 4, 5, 6]);
    let mut game = playing_with(
        board,
        Piece::new(PieceKind::I).at(3, 0),
        Piece::new(PieceKind::T),
    );

    game.hard_drop();

    assert_eq!(game.score(), 40);
    assert_eq!(game.board().filled_count(), 0);
    assert_eq!(game.board().rows().count(), 20);
    let event = game.take_last_event().unwrap();
    assert_eq!(event.lines_cleared, 1);
    assert_eq!(event.points, 40);
    assert!(!event.game_over);
    assert_eq!(game.take_last_event(), None);
}

#[test]
fn test_tetris_raises_level() {
    let mut board = Board::new();
    for y in 16..20 {
        board.fill_row_except(y, PieceKind::L, &[0]);
    }
    let mut game = playing_with(board, Piece::new(PieceKind::I), Piece::new(PieceKind::T));

    game.rotate();
    for _ in 0..SPAWN_X + 2 {
        game.move_left();
    }
    assert_eq!(game.current().map(|p| p.x), Some(-2));
    game.hard_drop();

    assert_eq!(game.score(), 1200);
    assert_eq!(game.level(), 2);
    assert_eq!(game.drop_interval_ms(), 900);
    assert_eq!(game.board().filled_count(), 0);
}

#[test]
fn test_rotation_blocked_by_wall_is_rejected() {
    let mut game = playing_with(Board::new(), Piece::new(PieceKind::I), Piece::new(PieceKind::T));

    game.rotate();
    for _ in 0..10 {
        game.move_left();
    }
    let before = game.current();
    // Rotating back would put the horizontal bar left of the board.
    game.rotate();
    assert_eq!(game.current(), before);
}

#[test]
fn test_hold_then_second_hold_is_ignored() {
    let mut game = playing_with(Board::new(), Piece::new(PieceKind::S), Piece::new(PieceKind::J));

    game.hold_piece();
    assert_eq!(game.held().map(|p| p.kind()), Some(PieceKind::S));
    assert_eq!(game.current().map(|p| p.kind()), Some(PieceKind::J));
    assert!(!game.can_hold());

    let before = game.snapshot();
    game.hold_piece();
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_hold_swaps_after_lock() {
    let mut game = playing_with(Board::new(), Piece::new(PieceKind::S), Piece::new(PieceKind::J));
    game.hold_piece();
    game.hard_drop();
    assert!(game.can_hold());

    let current = game.current().map(|p| p.kind());
    game.hold_piece();
    assert_eq!(game.current().map(|p| p.kind()), Some(PieceKind::S));
    assert_eq!(game.held().map(|p| p.kind()), current);
    let held = game.held().unwrap();
    assert_eq!((held.x, held.y), (SPAWN_X, 0));
}

#[test]
fn test_blocked_spawn_ends_game() {
    let mut board = Board::new();
    board.set(4, 1, Some(PieceKind::Z));
    let mut game = playing_with(
        board,
        Piece::new(PieceKind::O).at(0, 0),
        Piece::new(PieceKind::O),
    )
    .with_high_score(500);

    game.hard_drop();

    assert_eq!(game.phase(), Phase::GameOver);
    assert!(!game.is_playing());
    assert_eq!(game.score(), 0);
    assert_eq!(game.high_score(), 500);
    // The final piece is not merged.
    assert_eq!(game.board().filled_count(), 1);
    assert!(game.take_last_event().unwrap().game_over);

    let before = game.snapshot();
    game.move_left();
    game.hold_piece();
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_final_clear_counts_toward_high_score() {
    let mut board = Board::new();
    board.fill_row_except(19, PieceKind::T, &[0, 1]);
    // Drops to row 1 after the clear, under the next spawn.
    board.set(4, 0, Some(PieceKind::Z));
    let mut game = playing_with(
        board,
        Piece::new(PieceKind::O).at(0, 0),
        Piece::new(PieceKind::O),
    );

    game.hard_drop();

    assert!(game.is_game_over());
    assert_eq!(game.score(), 0);
    assert_eq!(game.high_score(), 40);
}

#[test]
fn test_restart_after_game_over_keeps_high_score() {
    let mut board = Board::new();
    board.set(4, 1, Some(PieceKind::Z));
    let mut game = playing_with(
        board,
        Piece::new(PieceKind::O).at(0, 0),
        Piece::new(PieceKind::O),
    )
    .with_high_score(77);
    game.hard_drop();
    assert!(game.is_game_over());

    game.toggle_play();
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.board().filled_count(), 0);
    assert_eq!(game.high_score(), 77);
    assert!(game.held().is_none());
}

#[test]
fn test_gravity_locks_resting_piece() {
    let mut game = playing_with(
        Board::new(),
        Piece::new(PieceKind::O).at(0, 18),
        Piece::new(PieceKind::T),
    );

    game.move_down();
    assert_eq!(game.board().filled_count(), 4);
    assert_eq!(game.current().map(|p| p.kind()), Some(PieceKind::T));
}

#[test]
fn test_ghost_only_while_playing() {
    let mut game = GameState::new(5);
    game.init_game();
    assert_eq!(game.ghost_y(), None);
    assert!(game.snapshot().ghost.is_none());

    game.toggle_play();
    let ghost = game.snapshot().ghost.unwrap();
    assert!(ghost.y > 0);
    assert_eq!(ghost.kind(), game.current().unwrap().kind());
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(4242);
    let mut b = GameState::new(4242);
    for game in [&mut a, &mut b] {
        game.toggle_play();
        for _ in 0..20 {
            game.apply_action(GameAction::MoveLeft);
            game.apply_action(GameAction::HardDrop);
        }
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
