#![warn(clippy::pedantic)]

pub mod game;
pub mod history;

pub use game::Game;
pub use history::History;
