use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use mkdocs_tui::app::config::{config_dir, load_config};
use mkdocs_tui::app::{r#loop::run_loop, state::AppState};
use mkdocs_tui::domain::content::{default_content, load_content};
use mkdocs_tui::theme::PaletteType;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for PaletteType {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Dark => PaletteType::Dark,
            ThemeArg::Light => PaletteType::Light,
        }
    }
}

/// Browse an MkDocs-style getting started guide in the terminal.
#[derive(Parser, Debug)]
#[command(name = "mkdocs-tui", version, about)]
struct Args {
    /// TOML file with the site's sections, search entries and document.
    /// Watched and reloaded on change.
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Colour theme, overriding the configuration file
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Configuration file (default: ~/.config/mkdocs-tui/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Jump to sections instead of animating the scroll
    #[arg(long)]
    no_smooth_scroll: bool,
}

/// Logs go to a file: the terminal belongs to the UI.
fn init_tracing() {
    let Some(dir) = config_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("mkdocs-tui.log"))
    else {
        return;
    };

    let filter =
        EnvFilter::try_from_env("MKDOCS_TUI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    setup_panic_hook();

    let mut config = load_config(args.config.as_deref());
    if let Some(theme) = args.theme {
        config.theme = theme.into();
    }
    if args.no_smooth_scroll {
        config.smooth_scroll = false;
    }

    // Load content BEFORE terminal setup so a bad file is reported on a
    // normal terminal.
    let content = match &args.content {
        Some(path) => load_content(path)?,
        None => default_content(),
    };
    let mut app_state = AppState::new(content, &config);
    app_state.content_path = args.content.clone();
    tracing::info!(
        sections = app_state.content.sections.len(),
        entries = app_state.content.entries.len(),
        "starting"
    );

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{err:#}");
        println!("{err:?}");
    }

    Ok(())
}
