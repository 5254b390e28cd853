//! Bilingual terminal tic-tac-toe.

#![warn(missing_docs)]

mod app;
mod i18n;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use i18n::{Key, Lang, Messages};

/// Trioline - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "trioline_tui")]
#[command(about = "Play tic-tac-toe in English or Bengali", long_about = None)]
#[command(version)]
struct Cli {
    /// Display language at startup (switchable in-game with 'l')
    #[arg(short, long, value_enum, default_value_t = Lang::En)]
    lang: Lang,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let messages = Messages::new(cli.lang);
    info!(lang = %cli.lang, greeting = messages.resolve(Key::Welcome), "Starting Trioline TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(messages);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    code => app.handle_key(code),
                }
            }
        }
    }
}
