mod app;
mod config;
mod draft;
mod export;
mod face;
mod format;
mod themes;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Field};
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "cardsmith")]
#[command(about = "TUI virtual card designer - live preview, PNG export")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/cardsmith/config.toml")]
    config: String,

    /// Directory for exported PNGs (overrides the config file)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardsmith=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Load config
    let mut config = Config::load(&cli.config)?;
    if let Some(dir) = cli.output_dir {
        config.export.output_dir = Some(dir);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config);

    // Run main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Surface a finished export before drawing
        app.poll_export().await;

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if ctrl => return Ok(()),
                    KeyCode::Char('e') if ctrl => app.trigger_export(),
                    KeyCode::Char('l') if ctrl => app.load_sample(),
                    KeyCode::Char('u') if ctrl => app.clear_field(),
                    KeyCode::Tab | KeyCode::Down => app.focus_next(),
                    KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
                    KeyCode::Left if app.focus() == Field::Theme => app.cycle_theme(-1),
                    KeyCode::Right if app.focus() == Field::Theme => app.cycle_theme(1),
                    KeyCode::Backspace => app.backspace(),
                    KeyCode::Char(c) if !ctrl => app.push_char(c),
                    _ => {}
                }
            }
        }
    }
}
