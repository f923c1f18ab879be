use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

mod app;
mod calendar;
mod dashboard;
mod filter;
mod kanban;
mod project;
mod seed;
mod settings;
mod store;
mod task;
mod team;
mod ui;

use app::App;
use store::Board;

#[derive(Debug, Parser)]
#[command(name = "montask", about = "Terminal task management board")]
struct Cli {
    /// Board file (created on first save)
    #[arg(long, default_value = "montask.json")]
    data: PathBuf,
    /// Append tracing output to this file (the terminal stays clean)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("montask=debug")),
            )
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let mut board = Board::load_from_file(&cli.data)?;
    if board.store.is_empty() && board.projects.is_empty() && board.team.is_empty() {
        board = seed::sample_board();
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(board);
    let result = app::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Save the board
    app.board.save_to_file(&cli.data)?;

    if let Err(err) = result {
        eprintln!("{:?}", err);
    }
    Ok(())
}
