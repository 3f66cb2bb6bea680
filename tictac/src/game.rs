use ttt_types::{Board, Mark, Square};

/// The move/history state machine.
///
/// Holds every board snapshot reached so far plus a step pointer into that
/// list. Playing from a past step truncates the snapshots after it before
/// appending, so the list always describes one line of play ending at the
/// last entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<Board>,
    step: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: vec![Board::EMPTY],
            step: 0,
        }
    }

    /// All snapshots from the initial empty board to the latest move.
    #[must_use]
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// The snapshot the step pointer currently rests on.
    #[must_use]
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// The mark that moves next from the current step.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Winner at the current step, if the current snapshot holds a line.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.current().winner()
    }

    /// Plays the next mark onto `square`.
    ///
    /// A no-op (returns `false`) when the current snapshot already has a
    /// winner or the square is not open. Otherwise drops any snapshots
    /// after the step pointer, appends the new snapshot and moves the
    /// pointer onto it.
    pub fn play(&mut self, square: Square) -> bool {
        if self.winner().is_some() || !self.current().is_open(square) {
            return false;
        }
        let next = self.current().with(square, self.to_move());
        self.history.truncate(self.step + 1);
        self.history.push(next);
        self.step = self.history.len() - 1;
        true
    }

    /// Moves the step pointer without touching the snapshots.
    /// Out-of-range steps are ignored.
    pub fn jump(&mut self, step: usize) {
        if step < self.history.len() {
            self.step = step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(squares: &[u8]) -> Game {
        let mut game = Game::new();
        for &idx in squares {
            game.play(Square(idx));
        }
        game
    }

    #[test]
    fn starts_empty() {
        let game = Game::new();
        assert_eq!(game.history(), &[Board::EMPTY]);
        assert_eq!(game.step(), 0);
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn legal_play_extends_history_and_flips_turn() {
        let mut game = Game::new();
        assert!(game.play(Square(4)));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.step(), 1);
        assert_eq!(game.to_move(), Mark::O);
        assert_eq!(game.current().get(Square(4)), Some(Mark::X));
        // history[0] stays the empty board
        assert_eq!(game.history()[0], Board::EMPTY);
    }

    #[test]
    fn occupied_square_is_a_no_op() {
        let mut game = played(&[0]);
        let before = game.clone();
        assert!(!game.play(Square(0)));
        assert_eq!(game, before);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current().get(Square(0)), Some(Mark::X));
    }

    #[test]
    fn top_row_win_for_x() {
        let game = played(&[0, 3, 1, 4, 2]);
        assert_eq!(game.winner(), Some(Mark::X));
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn no_play_past_a_finished_game() {
        let mut game = played(&[0, 3, 1, 4, 2]);
        let before = game.clone();
        assert!(!game.play(Square(5)));
        assert_eq!(game, before);
    }

    #[test]
    fn jump_sets_turn_by_parity() {
        let mut game = played(&[0, 3, 1, 4]);
        let history = game.history().to_vec();
        for step in 0..game.history().len() {
            game.jump(step);
            assert_eq!(game.step(), step);
            assert_eq!(game.to_move(), Mark::for_step(step));
            assert_eq!(game.history(), history.as_slice());
        }
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut game = played(&[0, 3]);
        game.jump(7);
        assert_eq!(game.step(), 2);
    }

    #[test]
    fn playing_from_the_past_truncates_the_future() {
        let mut game = played(&[0, 3, 1, 4, 8]);
        assert_eq!(game.history().len(), 6);
        game.jump(2);
        assert!(game.play(Square(6)));
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.step(), 3);
        // moves 3 onward were discarded, the new branch ends in X's move
        assert_eq!(game.current().get(Square(6)), Some(Mark::X));
        assert_eq!(game.current().get(Square(1)), None);
        assert_eq!(game.current().get(Square(4)), None);
    }

    #[test]
    fn rewinding_shows_the_old_snapshot() {
        let mut game = played(&[0, 3, 1]);
        game.jump(1);
        assert_eq!(game.current().get(Square(0)), Some(Mark::X));
        assert_eq!(game.current().get(Square(3)), None);
    }
}
