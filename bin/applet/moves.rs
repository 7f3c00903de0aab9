use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Board, Color};
use std::io::{empty, stdout, Read, Write};
use tracing::{info, instrument};

/// List every move available to one side.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Moves {
    /// The placement of the pieces in FEN notation.
    #[clap(short, long, default_value_t)]
    board: Board,

    /// The side whose moves to list.
    side: Color,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        self.report(&mut Io::new(stdout(), empty()))
    }

    fn report<W: Write, R: Read>(&self, io: &mut Io<W, R>) -> Result<(), Anyhow> {
        let moves = self.board.moves(self.side);
        let check = self.board.checked_king();
        let outcome = self.board.outcome();

        for m in &moves {
            io.send(m)?;
        }

        if let Some(king) = check {
            io.send(format_args!("the king on {king} is in check"))?;
        }

        if let Some(o) = outcome {
            io.send(format_args!("game over, {o}"))?;
        }

        io.flush()?;

        info!(side = %self.side, moves = moves.len(), ?check, ?outcome);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str;

    fn report(board: &str, side: Color) -> Vec<String> {
        let moves = Moves {
            board: board.parse().unwrap(),
            side,
        };

        let mut buf = Vec::new();
        moves.report(&mut Io::new(&mut buf, empty())).unwrap();
        str::from_utf8(&buf)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn lists_one_move_per_line() {
        let lines = report("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", Color::White);
        assert_eq!(lines.len(), 20);
        assert!(lines.contains(&"e2e4".to_string()));
        assert!(lines.contains(&"g1f3".to_string()));
    }

    #[test]
    fn reports_the_outcome_for_a_side_without_pieces() {
        assert_eq!(
            report("4k3/8/8/8/8/8/8/8", Color::White),
            ["game over, the black player captured the opposing king"]
        );
    }

    #[test]
    fn reports_the_king_in_check() {
        let lines = report("4k3/8/8/8/8/8/8/r3K3", Color::Black);
        assert_eq!(lines.last().map(String::as_str), Some("the king on e1 is in check"));
        assert!(lines.contains(&"a1e1".to_string()));
    }
}
