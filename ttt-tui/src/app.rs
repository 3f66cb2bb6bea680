use std::{fs, io, path::Path, time::Duration};

use ratatui::{
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Layout, Rect},
    DefaultTerminal, Frame,
};
use tictac::{Game, History};
use ttt_types::Square;

use crate::{
    board::BoardView,
    history::{LoadList, SaveInput},
    status::StatusView,
    steps::StepList,
};

pub const HISTORY_DIR: &str = "histories";

enum Mode {
    Board,
    Steps,
    SaveName,
    LoadPick,
}

pub enum Message {
    Quit,
    Play(Square),
    JumpTo(usize),
    Reset,
    SaveHistory(String),
    LoadHistory(String),
}

pub struct App {
    game: Game,
    mode: Mode,
    board_view: BoardView,
    status: StatusView,
    step_list: StepList,
    save_input: SaveInput,
    load_list: LoadList,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let game = Game::new();
        let board_view = BoardView::new(&game);
        let step_list = StepList::new(&game);
        Self {
            game,
            mode: Mode::Board,
            board_view,
            status: StatusView,
            step_list,
            save_input: SaveInput::default(),
            load_list: LoadList::default(),
        }
    }

    /// Replaces the running game with one replayed from a saved move log.
    /// Missing or unreadable files leave the current game alone.
    pub fn load_history(&mut self, name: &str) {
        let Ok(text) = fs::read_to_string(Path::new(HISTORY_DIR).join(name)) else {
            return;
        };
        let Ok(history) = ron::from_str::<History>(&text) else {
            return;
        };
        self.game = history.game_with_history();
        self.on_state_change();
    }

    fn save_history(&self, name: &str) -> io::Result<()> {
        let history = History::from_game(&self.game);
        let text = ron::ser::to_string_pretty(&history, ron::ser::PrettyConfig::default())
            .map_err(io::Error::other)?;
        fs::create_dir_all(HISTORY_DIR)?;
        fs::write(Path::new(HISTORY_DIR).join(name), text)
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if let Some(message) = self.update() {
                match message {
                    Message::Quit => break,
                    Message::Play(square) => {
                        if self.game.play(square) {
                            self.on_state_change();
                        }
                    }
                    Message::JumpTo(step) => {
                        self.game.jump(step);
                        self.on_state_change();
                    }
                    Message::Reset => {
                        self.game = Game::new();
                        self.on_state_change();
                        self.mode = Mode::Board;
                    }
                    Message::SaveHistory(name) => {
                        self.save_history(&name)?;
                        self.mode = Mode::Board;
                    }
                    Message::LoadHistory(name) => {
                        self.load_history(&name);
                        self.mode = Mode::Board;
                    }
                }
            }
        }
        Ok(())
    }

    pub fn update(&mut self) -> Option<Message> {
        if event::poll(Duration::from_millis(100)).ok()? {
            let event = event::read().ok()?;
            return self.handle_event(&event);
        }
        None
    }

    fn handle_event(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key_ev) = event {
            // Text entry modes own the keyboard except for Esc, so a
            // history can be named "quarters" without quitting.
            if matches!(self.mode, Mode::Board | Mode::Steps) {
                match key_ev.code {
                    KeyCode::Char('q') => return Some(Message::Quit),
                    KeyCode::Char('r') => return Some(Message::Reset),
                    KeyCode::Char('b') => {
                        self.mode = Mode::Board;
                        return None;
                    }
                    KeyCode::Char('h') => {
                        self.mode = Mode::Steps;
                        return None;
                    }
                    KeyCode::Tab => {
                        self.mode = match self.mode {
                            Mode::Board => Mode::Steps,
                            _ => Mode::Board,
                        };
                        return None;
                    }
                    KeyCode::Char('s') => {
                        self.save_input.clear();
                        self.mode = Mode::SaveName;
                        return None;
                    }
                    KeyCode::Char('l') => {
                        self.load_list.refresh();
                        self.mode = Mode::LoadPick;
                        return None;
                    }
                    _ => {}
                }
            } else if key_ev.code == KeyCode::Esc {
                self.mode = Mode::Board;
                return None;
            }
        }
        match self.mode {
            Mode::Board => self.board_view.update(event),
            Mode::Steps => self.step_list.update(event),
            Mode::SaveName => self.save_input.update(event),
            Mode::LoadPick => self.load_list.update(event),
        }
    }

    fn on_state_change(&mut self) {
        self.board_view.on_state_change(&self.game);
        self.step_list.on_state_change(&self.game);
    }

    fn draw(&self, frame: &mut Frame) {
        let horizontal =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]);
        let vertical = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]);
        let [board, right] = horizontal.areas(frame.area());
        let [status, steps] = vertical.areas(right);
        frame.render_widget(self.board_view.draw(), board);
        frame.render_widget(self.status.draw(&self.game), status);
        frame.render_widget(self.step_list.draw(), steps);
        let full = frame.area();
        let popup_area = move |height: u16| Rect {
            x: (full.width / 2).saturating_sub(15),
            y: (full.height / 2).saturating_sub(height / 2),
            width: 30.min(full.width),
            height: height.min(full.height),
        };
        match self.mode {
            Mode::SaveName => frame.render_widget(self.save_input.draw(), popup_area(3)),
            Mode::LoadPick => frame.render_widget(self.load_list.draw(), popup_area(10)),
            Mode::Board | Mode::Steps => {}
        }
    }
}
