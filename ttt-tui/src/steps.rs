use ratatui::{
    crossterm::event::{Event, KeyCode},
    text::Line,
    widgets::{Block, Borders, List, Widget},
};
use tictac::Game;

use crate::app::Message;

/// The time-travel list. One entry per snapshot in the history, labeled the
/// way the move log reads: "Start over" for the empty board, "Move #N" after.
pub struct StepList {
    labels: Vec<String>,
    selected: usize,
    current: usize,
}

impl StepList {
    pub fn new(game: &Game) -> Self {
        let labels = (0..game.history().len())
            .map(|step| {
                if step == 0 {
                    "Start over".to_owned()
                } else {
                    format!("Move #{step}")
                }
            })
            .collect();
        Self {
            labels,
            selected: game.step(),
            current: game.step(),
        }
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected = (self.selected + 1).min(self.labels.len() - 1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Enter => {
                    return Some(Message::JumpTo(self.selected));
                }
                _ => {}
            }
        }
        None
    }

    pub fn on_state_change(&mut self, game: &Game) {
        *self = StepList::new(game);
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let block = Block::new()
            .borders(Borders::ALL)
            .title(Line::raw("History").left_aligned());
        let items = self.labels.iter().enumerate().map(|(step, label)| {
            format!(
                "{}{}{}",
                if step == self.selected { '>' } else { ' ' },
                if step == self.current { '*' } else { ' ' },
                label,
            )
        });
        List::new(items).block(block)
    }
}
