mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use sprint::{
    config::{ConfigStore, FileConfigStore, RuntimeSettings, SettingsOverrides},
    game::{Game, GameState},
    runtime::{CrosstermEventSource, FixedTicker, FrameClock, Runner, SprintEvent},
    word::Deck,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

const TICK_RATE_MS: u64 = 100;

/// timed vocabulary matching game: is the shown translation right or wrong?
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A timed vocabulary sprint: each word is shown with a translation that is either its own or borrowed from another word. Judge it with the arrow keys before the clock runs out; three right in a row pays a bonus."
)]
pub struct Cli {
    /// seconds per round (0 disables the clock)
    #[clap(short = 's', long)]
    round_secs: Option<u64>,

    /// play without a clock
    #[clap(long)]
    no_timer: bool,

    /// number of words per round
    #[clap(short = 'w', long = "words")]
    words_per_round: Option<usize>,

    /// built-in deck to draw words from
    #[clap(short = 'd', long)]
    deck: Option<String>,

    /// JSON deck file to draw words from (overrides --deck)
    #[clap(short = 'f', long)]
    deck_file: Option<PathBuf>,

    /// list the built-in decks and exit
    #[clap(long)]
    list_decks: bool,

    /// store the resolved settings as the new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    fn to_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            round_secs: self.round_secs,
            no_timer: self.no_timer,
            words_per_round: self.words_per_round,
            deck: self.deck.clone(),
            deck_file: self.deck_file.clone(),
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub game: Game,
}

impl App {
    pub fn new(settings: RuntimeSettings) -> Result<Self, Box<dyn Error>> {
        let deck = settings.load_deck()?;
        let game = Game::new(settings, deck)?;
        Ok(Self { game })
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();

    if cli.list_decks {
        for name in Deck::builtin_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let store = FileConfigStore::new();
    let config = store.load();
    let settings = RuntimeSettings::resolve(&cli.to_overrides(), &config);

    if cli.save_config {
        store.save(&config.with_settings(&settings))?;
        log::info!("saved settings to {}", store.path().display());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    // load before touching the terminal so deck errors print normally
    let mut app = App::new(settings)?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

#[derive(Debug, PartialEq)]
enum Action {
    Continue,
    Quit,
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    terminal.draw(|f| ui(app, f))?;
    let mut clock = FrameClock::new();

    loop {
        let event = runner.step();
        // keys end the wait early, so the round clock runs on wall time
        app.game.on_tick(clock.lap());

        match event {
            SprintEvent::Tick => {
                if app.game.state() == GameState::Playing {
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            SprintEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            SprintEvent::Key(key) => {
                if handle_key(app, key)? == Action::Quit {
                    break;
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) -> Result<Action, Box<dyn Error>> {
    if key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
    {
        return Ok(Action::Quit);
    }

    match app.game.state() {
        GameState::Playing => {
            app.game.on_key(&key);
        }
        GameState::Results => match key.code {
            KeyCode::Char('n') => app.game.next_round()?,
            KeyCode::Char('s') => app.game.new_session()?,
            _ => {}
        },
    }

    Ok(Action::Continue)
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
