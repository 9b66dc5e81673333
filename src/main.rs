use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info, warn};

use yay::app::App;
use yay::config::Config;
use yay::event::{AppEvent, EventReader};
use yay::logging;
use yay::reconcile::fetch_settings;
use yay::ui;
use yay::ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "yay",
    version,
    about = "Terminal editor for per-application launch hotkeys"
)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let (config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    match logging::init(&config.log_filter) {
        Ok(path) => info!("yay {} logging to {}", env!("CARGO_PKG_VERSION"), path.display()),
        Err(e) => eprintln!("Logging disabled: {e:#}"),
    }
    match config_err {
        Some(e) => warn!(
            "Ignoring config {}: {e:#}",
            Config::config_path().display()
        ),
        None => info!("Loaded config from {}", Config::config_path().display()),
    }

    let (store, settings) = match fetch_settings(&config) {
        Ok(fetched) => fetched,
        Err(e) => {
            error!("Fetching settings failed: {e}");
            eprintln!("Error fetching settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    if settings.is_empty() {
        println!("No applications found.");
        return ExitCode::SUCCESS;
    }

    let theme = Theme::load_or_default(&config.theme);
    let mut app = App::new(&settings, store, theme);

    if let Err(e) = run(&mut app) {
        error!("Editor failed: {e:#}");
        eprintln!("Error running editor: {e:#}");
        return ExitCode::FAILURE;
    }

    print!("{}", app.report());
    ExitCode::SUCCESS
}

/// Own the terminal for the session and restore it whatever the outcome.
fn run(app: &mut App) -> Result<()> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("entering alternate screen");
    }

    // Lets the event reader tell presses from releases
    let keyboard_enhanced = execute!(
        io::stdout(),
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )
    .is_ok();

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .context("creating terminal")
        .and_then(|mut terminal| {
            let res = run_app(&mut terminal, app, &EventReader::new());
            let _ = terminal.show_cursor();
            res
        });

    if keyboard_enhanced {
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    disable_raw_mode().context("disabling raw mode")?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventReader,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => app.handle_key(key)?,
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
