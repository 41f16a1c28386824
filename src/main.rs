use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use toastr::ToastManager;
use toastr::app::App;
use toastr::config::{Config, load_config};

/// Toast notification playground for the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file (defaults to <config dir>/toastr/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Default toast duration in milliseconds; 0 keeps toasts until dismissed
    #[arg(short, long)]
    duration: Option<u64>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let args = Args::parse();
    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("falling back to default config: {}", e);
            eprintln!("Warning: {}. Using defaults.", e);
            Config::default()
        }
    };

    let mut manager = ToastManager::from_config(&config.toast);
    if let Some(ms) = args.duration {
        let mut defaults = *manager.defaults();
        defaults.duration = Duration::from_millis(ms);
        manager = manager.with_defaults(defaults);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, App::new(manager));

    // Restore terminal (automatic cleanup)
    execute!(stdout(), DisableMouseCapture)?;
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout())? {
            app.handle_event(event::read()?);
        }

        for event in app.tick() {
            log::debug!("{:?}", event);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file; stderr would corrupt the TUI
#[cfg(debug_assertions)]
fn init_logging() {
    let path = std::env::temp_dir().join("toastr.log");
    if let Ok(file) = std::fs::File::create(&path) {
        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
}
