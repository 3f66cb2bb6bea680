use ratatui::widgets::{Block, Paragraph, Widget};
use tictac::Game;

pub struct StatusView;

impl StatusView {
    pub fn draw(&self, game: &Game) -> impl Widget {
        let text = match game.winner() {
            Some(mark) => format!("Winner: {mark}!"),
            None => format!("Next player: {}", game.to_move()),
        };
        Paragraph::new(text).block(Block::bordered().title("Status"))
    }
}
