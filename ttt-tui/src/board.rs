use ratatui::{
    crossterm::event::{Event, KeyCode},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use tictac::Game;
use ttt_types::{Mark, Square};

use crate::app::Message;

pub struct BoardView {
    cells: [Option<Mark>; 9],
    focused: Square,
}

impl BoardView {
    pub fn new(game: &Game) -> Self {
        Self {
            cells: *game.current().cells(),
            focused: Square(4),
        }
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Left => {
                    if self.focused.column() > 0 {
                        self.focused = Square(self.focused.0 - 1);
                    }
                }
                KeyCode::Right => {
                    if self.focused.column() < 2 {
                        self.focused = Square(self.focused.0 + 1);
                    }
                }
                KeyCode::Up => {
                    if self.focused.row() > 0 {
                        self.focused = Square(self.focused.0 - 3);
                    }
                }
                KeyCode::Down => {
                    if self.focused.row() < 2 {
                        self.focused = Square(self.focused.0 + 3);
                    }
                }
                // 1-9 map onto the grid top-left to bottom-right
                KeyCode::Char(c @ '1'..='9') => {
                    self.focused = Square(c as u8 - b'1');
                }
                KeyCode::Enter => {
                    return Some(Message::Play(self.focused));
                }
                _ => {}
            }
        }
        None
    }

    pub fn on_state_change(&mut self, game: &Game) {
        self.cells = *game.current().cells();
    }

    fn cell(&self, square: Square) -> String {
        let inner = match self.cells[square.0 as usize] {
            Some(mark) => mark.to_string(),
            None => ".".to_owned(),
        };
        if square == self.focused {
            format!("[{inner}]")
        } else {
            format!(" {inner} ")
        }
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let mut lines = Vec::new();
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|column| self.cell(Square::from_row_column(row, column)))
                .collect();
            lines.push(Line::raw(cells.join("|")));
            if row < 2 {
                lines.push(Line::raw("---+---+---"));
            }
        }
        Paragraph::new(lines)
            .centered()
            .block(Block::bordered().title("Board"))
    }
}
