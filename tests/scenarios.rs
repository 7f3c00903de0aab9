use lib::chess::{Board, Color, Move, Outcome, Piece, Role, Square};
use lib::session::{Event, Session};
use proptest::{collection::vec, option::weighted, prelude::*, sample::select};
use test_strategy::proptest;

fn piece() -> impl Strategy<Value = Piece> {
    (select(Role::ALL.to_vec()), color()).prop_map(|(r, c)| Piece::new(r, c))
}

fn color() -> impl Strategy<Value = Color> {
    select(Color::ALL.to_vec())
}

fn board() -> impl Strategy<Value = Board> {
    vec(weighted(0.25, piece()), 64).prop_map(|v| {
        let mut board = Board::empty();
        for (sq, p) in Square::iter().zip(v) {
            board.set(sq, p);
        }

        board
    })
}

#[test]
fn pawn_double_step_from_the_initial_layout() {
    let mut board = Board::initial();
    let m = Move::new(Square::new(6, 4), Square::new(4, 4));

    assert!(board.is_legal(Piece::WhitePawn, m));
    assert_eq!(board.make(Piece::WhitePawn, m), Ok(None));
    assert_eq!(board.piece_at(6, 4), Ok(None));
    assert_eq!(board.piece_at(4, 4), Ok(Some(Piece::WhitePawn)));
}

#[test]
fn rook_is_blocked_by_its_own_pawn() {
    let board = Board::initial();
    let m = Move::new(Square::new(7, 0), Square::new(5, 0));
    assert!(!board.is_legal(Piece::WhiteRook, m));
}

#[test]
fn lone_king_is_checked_by_a_rook_on_the_same_file() {
    let mut board = Board::empty();
    board.set(Square::new(7, 4), Some(Piece::WhiteKing));
    board.set(Square::new(0, 4), Some(Piece::BlackRook));

    assert!(board.is_check(Square::new(7, 4), Color::Black));
    assert_eq!(board.checked_king(), Some(Square::new(7, 4)));
}

#[test]
fn game_ends_when_a_king_leaves_the_board() {
    let mut board = Board::empty();
    board.set(Square::new(7, 4), Some(Piece::WhiteKing));
    board.set(Square::new(0, 4), Some(Piece::BlackKing));
    assert!(!board.is_game_over());

    board.take(Square::new(0, 4));
    assert!(board.is_game_over());
    assert_eq!(board.outcome(), Some(Outcome::KingCaptured(Color::White)));
}

#[test]
fn scholars_mate_pattern_ends_with_the_king_taken() {
    let mut s = Session::new();

    for m in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7", "a7a6"] {
        let m: Move = m.parse().unwrap();
        assert!(matches!(s.play(m), Event::Moved { .. }), "{m}");
    }

    assert_eq!(s.checked_king(), Some("e8".parse().unwrap()));

    let event = s.play("f7e8".parse().unwrap());
    assert!(matches!(
        event,
        Event::Moved {
            capture: Some(Piece::BlackKing),
            outcome: Some(Outcome::KingCaptured(Color::White)),
            ..
        }
    ));
}

#[proptest]
fn moves_are_exactly_the_legal_moves(
    #[strategy(board())] b: Board,
    #[strategy(color())] c: Color,
) {
    let moves = b.moves(c);

    for &m in &moves {
        let p = b[m.whence()].unwrap();
        assert_eq!(p.color(), c);
        assert!(b.is_legal(p, m));
    }

    let expected = b
        .iter()
        .filter(|(_, p)| p.color() == c)
        .flat_map(|(whence, p)| Square::iter().map(move |whither| (p, Move::new(whence, whither))))
        .filter(|&(p, m)| b.is_legal(p, m))
        .count();

    assert_eq!(moves.len(), expected);
}

#[proptest]
fn making_a_legal_move_relocates_the_piece(
    #[strategy(board())] b: Board,
    #[strategy(color())] c: Color,
    #[strategy(0usize..64)] i: usize,
) {
    let moves = b.moves(c);

    if let Some(&m) = moves.get(i % moves.len().max(1)) {
        let p = b[m.whence()].unwrap();
        let mut next = b;

        assert_eq!(next.make(p, m), Ok(b[m.whither()]));
        assert_eq!(next[m.whence()], None);
        assert_eq!(next[m.whither()], Some(p));

        for sq in Square::iter().filter(|&sq| sq != m.whence() && sq != m.whither()) {
            assert_eq!(next[sq], b[sq]);
        }
    }
}

#[proptest]
fn pieces_never_land_on_their_own_color(
    #[strategy(board())] b: Board,
    #[strategy(color())] c: Color,
) {
    for m in b.moves(c) {
        assert_ne!(b[m.whither()].map(|p| p.color()), Some(c));
    }
}

#[proptest]
fn king_and_pawn_moves_stay_within_reach(
    #[strategy(board())] b: Board,
    #[strategy(color())] c: Color,
) {
    for m in b.moves(c) {
        let (dr, _) = m.whither() - m.whence();
        match b[m.whence()].map(|p| p.role()) {
            Some(Role::King) => assert!(dr.abs() <= 1),
            Some(Role::Pawn) => assert!(dr == c.forward() || dr == 2 * c.forward()),
            _ => {}
        }
    }
}
