use itertools::Itertools;
use serde::{Deserialize, Serialize};
use ttt_types::{Board, Square};

use crate::game::Game;

/// A saved game as its move log. Replaying the log through the normal play
/// operation rebuilds the snapshot history, so a stale or hand-edited file
/// can only produce skipped moves, never a broken game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub moves: Vec<Square>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// The move log of every snapshot transition in `game`, including any
    /// steps after the current pointer.
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        let moves = game
            .history()
            .windows(2)
            .filter_map(|pair| changed_square(&pair[0], &pair[1]))
            .collect_vec();
        Self { moves }
    }

    #[must_use]
    pub fn game_with_history(&self) -> Game {
        let mut game = Game::new();
        for &square in &self.moves {
            game.play(square);
        }
        game
    }
}

/// The square that was filled between two consecutive snapshots.
fn changed_square(before: &Board, after: &Board) -> Option<Square> {
    (0..9)
        .map(Square)
        .find(|&sq| before.get(sq).is_none() && after.get(sq).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_types::Mark;

    #[test]
    fn log_round_trips_through_replay() {
        let mut game = Game::new();
        for idx in [4, 0, 8, 2, 6] {
            game.play(Square(idx));
        }
        let history = History::from_game(&game);
        assert_eq!(
            history.moves,
            vec![Square(4), Square(0), Square(8), Square(2), Square(6)]
        );
        assert_eq!(history.game_with_history(), game);
    }

    #[test]
    fn replay_skips_illegal_moves() {
        let history = History {
            moves: vec![Square(4), Square(4), Square(12), Square(0)],
        };
        let game = history.game_with_history();
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current().get(Square(4)), Some(Mark::X));
        assert_eq!(game.current().get(Square(0)), Some(Mark::O));
    }

    #[test]
    fn log_captures_the_whole_line_even_when_rewound() {
        let mut game = Game::new();
        for idx in [0, 3, 1] {
            game.play(Square(idx));
        }
        game.jump(1);
        let history = History::from_game(&game);
        assert_eq!(history.moves, vec![Square(0), Square(3), Square(1)]);
    }
}
