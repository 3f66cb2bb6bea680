use std::fs;

use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode},
    widgets::Widget,
};

use crate::{
    app::{Message, HISTORY_DIR},
    popup::Popup,
};

/// Name entry for saving the current move log.
#[derive(Default)]
pub struct SaveInput {
    input: String,
}

impl SaveInput {
    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Char(c) => {
                    if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                        self.input.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Enter => {
                    if !self.input.is_empty() {
                        return Some(Message::SaveHistory(self.input.clone()));
                    }
                }
                _ => {}
            }
        }
        None
    }

    pub fn draw(&self) -> impl Widget + '_ {
        Popup::new("Save history as", self.input.clone())
    }
}

/// Picker over the files in the history directory.
#[derive(Default)]
pub struct LoadList {
    files: Vec<String>,
    selected: usize,
}

impl LoadList {
    pub fn refresh(&mut self) {
        self.files = saved_histories();
        self.selected = 0;
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    if !self.files.is_empty() {
                        self.selected = (self.selected + 1).min(self.files.len() - 1);
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Enter => {
                    if let Some(name) = self.files.get(self.selected) {
                        return Some(Message::LoadHistory(name.clone()));
                    }
                }
                _ => {}
            }
        }
        None
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let body = if self.files.is_empty() {
            "no saved histories".to_owned()
        } else {
            self.files
                .iter()
                .enumerate()
                .map(|(idx, name)| {
                    format!("{}{name}", if idx == self.selected { '>' } else { ' ' })
                })
                .join("\n")
        };
        Popup::new("Histories", body)
    }
}

// A missing or unreadable directory is the same as an empty one.
fn saved_histories() -> Vec<String> {
    fs::read_dir(HISTORY_DIR)
        .into_iter()
        .flatten()
        .filter_map(|entry| {
            let entry = entry.ok()?;
            if entry.path().is_dir() {
                return None;
            }
            Some(entry.file_name().to_string_lossy().into_owned())
        })
        .sorted()
        .collect_vec()
}
