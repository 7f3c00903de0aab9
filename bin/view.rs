use lib::chess::Square;
use lib::session::{Phase, Session};
use std::fmt::{self, Display};

/// Renders a [`Session`] as a grid of squares followed by its status line.
///
/// The selected piece is drawn as `[♙]` and the king in check as `(♔)`.
#[derive(Debug, Copy, Clone)]
pub struct View<'a>(pub &'a Session);

impl<'a> View<'a> {
    fn selected(&self) -> Option<Square> {
        match self.0.phase() {
            Phase::PieceSelected(_, sq) => Some(sq),
            _ => None,
        }
    }
}

impl<'a> Display for View<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FILES: &str = "     a   b   c   d   e   f   g   h";
        const RULE: &str = "   +---+---+---+---+---+---+---+---+";

        let board = self.0.board();
        let selected = self.selected();
        let checked = self.0.checked_king();

        writeln!(f, "{FILES}")?;
        writeln!(f, "{RULE}")?;

        for row in 0..8 {
            let rank = 8 - row;
            write!(f, " {rank} |")?;

            for col in 0..8 {
                let sq = Square::new(row, col);
                let (l, r) = if Some(sq) == selected {
                    ('[', ']')
                } else if Some(sq) == checked {
                    ('(', ')')
                } else {
                    (' ', ' ')
                };

                match board[sq] {
                    None => write!(f, "{l} {r}|")?,
                    Some(p) => write!(f, "{l}{p:#}{r}|")?,
                }
            }

            writeln!(f, " {rank}")?;
            writeln!(f, "{RULE}")?;
        }

        writeln!(f, "{FILES}")?;
        write!(f, "{}", self.0.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::chess::{Board, Color};

    #[test]
    fn initial_view_shows_both_armies_and_the_status() {
        let s = Session::new();
        let view = View(&s).to_string();
        let lines: Vec<_> = view.lines().collect();

        assert_eq!(lines.len(), 20);
        assert_eq!(lines[2], " 8 | ♜ | ♞ | ♝ | ♛ | ♚ | ♝ | ♞ | ♜ | 8");
        assert_eq!(lines[4], " 7 | ♟ | ♟ | ♟ | ♟ | ♟ | ♟ | ♟ | ♟ | 7");
        assert_eq!(lines[6], " 6 |   |   |   |   |   |   |   |   | 6");
        assert_eq!(lines[16], " 1 | ♖ | ♘ | ♗ | ♕ | ♔ | ♗ | ♘ | ♖ | 1");
        assert_eq!(lines[19], "White's Turn");
    }

    #[test]
    fn selected_piece_is_bracketed() {
        let mut s = Session::new();
        s.activate("g1".parse().unwrap());

        let view = View(&s).to_string();
        let lines: Vec<_> = view.lines().collect();
        assert_eq!(lines[16], " 1 | ♖ | ♘ | ♗ | ♕ | ♔ | ♗ |[♘]| ♖ | 1");
    }

    #[test]
    fn checked_king_is_parenthesized() {
        let board: Board = "4k3/8/8/8/8/8/8/r3K3".parse().unwrap();
        let s = Session::with_board(board, Color::White);

        let view = View(&s).to_string();
        let lines: Vec<_> = view.lines().collect();
        assert_eq!(lines[16], " 1 | ♜ |   |   |   |(♔)|   |   |   | 1");
        assert_eq!(lines[2], " 8 |   |   |   |   | ♚ |   |   |   | 8");
    }

    #[test]
    fn finished_game_shows_game_over() {
        let board: Board = "8/8/8/8/8/8/8/4K3".parse().unwrap();
        let s = Session::with_board(board, Color::Black);
        assert!(View(&s).to_string().ends_with("Game Over"));
    }
}
