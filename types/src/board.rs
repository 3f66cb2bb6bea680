use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{mark::Mark, square::Square};

/// The eight winning triples: three rows, three columns, two diagonals.
/// `winner` scans them in this order and reports the first complete one.
pub const LINES: [[Square; 3]; 8] = [
    [Square(0), Square(1), Square(2)],
    [Square(3), Square(4), Square(5)],
    [Square(6), Square(7), Square(8)],
    [Square(0), Square(3), Square(6)],
    [Square(1), Square(4), Square(7)],
    [Square(2), Square(5), Square(8)],
    [Square(0), Square(4), Square(8)],
    [Square(2), Square(4), Square(6)],
];

/// One snapshot of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; 9],
}

impl Board {
    pub const EMPTY: Self = Self { cells: [None; 9] };

    #[must_use]
    pub const fn cells(&self) -> &[Option<Mark>; 9] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, square: Square) -> Option<Mark> {
        if square.on_board() {
            self.cells[square.0 as usize]
        } else {
            None
        }
    }

    /// Whether `square` is a legal target for a move.
    /// Off-board squares are never open.
    #[must_use]
    pub fn is_open(&self, square: Square) -> bool {
        square.on_board() && self.cells[square.0 as usize].is_none()
    }

    /// Returns the snapshot with `square` set to `mark`.
    #[must_use]
    pub fn with(&self, square: Square, mark: Mark) -> Self {
        let mut next = *self;
        if square.on_board() {
            next.cells[square.0 as usize] = Some(mark);
        }
        next
    }

    /// The mark holding a complete line, if any. Checks the eight fixed
    /// triples in order and returns the first match. A full board with no
    /// line reports no winner, same as a board still in progress.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        for [a, b, c] in LINES {
            if let Some(mark) = self.get(a) {
                if self.get(b) == Some(mark) && self.get(c) == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for column in 0..3 {
                match self.get(Square::from_row_column(row, column)) {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, ".")?,
                }
                if column < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::ALL_MARKS;

    fn board_with(marks: &[(u8, Mark)]) -> Board {
        let mut board = Board::EMPTY;
        for &(idx, mark) in marks {
            board = board.with(Square(idx), mark);
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(Board::EMPTY.winner(), None);
        assert!(!Board::EMPTY.is_full());
    }

    #[test]
    fn each_line_wins() {
        for line in LINES {
            for mark in ALL_MARKS {
                let mut board = Board::EMPTY;
                for sq in line {
                    board = board.with(sq, mark);
                }
                assert_eq!(board.winner(), Some(mark), "line {line:?}");
            }
        }
    }

    #[test]
    fn full_board_without_line_is_not_a_win() {
        // X O X
        // X O O
        // O X X
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn off_board_squares_are_closed() {
        assert!(Board::EMPTY.is_open(Square(8)));
        assert!(!Board::EMPTY.is_open(Square(9)));
        assert_eq!(Board::EMPTY.with(Square(42), Mark::X), Board::EMPTY);
    }
}
