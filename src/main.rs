use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io::{self, stdin},
    path::PathBuf,
};

use speedtyper::{
    app::{App, Control},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{CrosstermEventSource, EventSource, FixedTicker, GameEvent, Runner, Ticker},
    ui::ui,
    Result, TyperError,
};

/// race the clock: type the word, score it, get wpm and accuracy
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Cli {
    /// number of seconds a session lasts
    #[clap(short = 'd', long)]
    duration: Option<u32>,

    /// seed the word picker for a reproducible word order
    #[clap(long)]
    seed: Option<u64>,

    /// config file to read instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,

    /// write the resolved settings back to the config file
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Command line flags win over the config file
    fn resolve(&self, base: Config) -> Config {
        Config {
            duration_secs: self.duration.unwrap_or(base.duration_secs),
            seed: self.seed.or(base.seed),
        }
    }

    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = AppDirs::log_path() {
        // a missing log is no reason to refuse to play
        if let Err(err) = logging::init(&path) {
            eprintln!("warning: {err}");
        }
    }

    let store = cli.config_store();
    let config = cli.resolve(store.load()?);
    config.validate()?;
    if cli.save_config {
        store.save(&config)?;
    }

    if !stdin().is_tty() {
        return Err(TyperError::NotATty);
    }

    tracing::info!(duration = config.duration_secs, seed = ?config.seed, "starting");

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::from_config(&config);
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());
    let outcome = start_tui(&mut terminal, &mut app, runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

fn start_tui<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut runner: Runner<E, T>,
) -> Result<()> {
    loop {
        // the timer lives exactly as long as the playing session it serves
        runner.follow(app.tick_lease());
        terminal.draw(|f| ui(app, f))?;

        let Some(event) = runner.step() else {
            tracing::info!("event source closed");
            break;
        };

        match event {
            GameEvent::Tick => {
                app.on_tick();
            }
            GameEvent::Resize => {}
            GameEvent::Key(key) => {
                if app.on_key(key) == Control::Quit {
                    break;
                }
            }
        }
    }

    Ok(())
}
