use std::io;

use app::App;
use clap::Parser;

pub mod app;
pub mod board;
pub mod history;
pub mod popup;
pub mod status;
pub mod steps;

#[derive(Parser)]
struct Args {
    /// Saved history to resume from (a file name under histories/)
    #[arg(long)]
    load: Option<String>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut app = App::new();
    if let Some(name) = &args.load {
        app.load_history(name);
    }
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}
