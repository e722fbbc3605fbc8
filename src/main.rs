use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::input::{map_key, InputAction};
use flappy::ui::{render_flappy, Assets};
use flappy::utils::logging;
use flappy::utils::persistence::DataDir;
use flappy::{
    FileScoreStore, GameConfig, ScoreStore, Session, CONFIG_FILE, HIGH_SCORE_FILE, LOG_FILE,
    MAX_FRAME_MS, REALTIME_FRAME_MS,
};
use log::LevelFilter;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use rand::Rng;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Flappy Bird in the terminal.
#[derive(Parser, Debug)]
#[command(name = "flappy", version, about = "Flappy Bird in the terminal")]
struct Cli {
    /// Read playfield settings from this JSON file instead of ~/.flappy/config.json
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Load sprites from this JSON sheet instead of the built-in one
    #[arg(long, value_name = "PATH")]
    assets: Option<PathBuf>,

    /// Keep the high score in this file instead of ~/.flappy/flappy_high_score.txt
    #[arg(long, value_name = "PATH")]
    high_score_file: Option<PathBuf>,

    /// Write the log here instead of ~/.flappy/flappy.log
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Set the stored high score to 0 and exit
    #[arg(long)]
    reset_high_score: bool,

    /// Save the active settings to ~/.flappy/config.json and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let data_dir = DataDir::home();
    init_logging(&cli, data_dir.as_ref().ok());
    if let Err(e) = &data_dir {
        log::warn!("No data directory: {}", e);
    }
    let data_dir = data_dir.ok();

    let config = match &cli.config {
        Some(path) => GameConfig::load_from(path)
            .unwrap_or_else(|e| fatal(&format!("Invalid config {}: {}", path.display(), e))),
        None => match &data_dir {
            Some(dir) => GameConfig::load_or_default(dir),
            None => GameConfig::default(),
        },
    };

    let assets = match &cli.assets {
        Some(path) => Assets::load(path),
        None => Assets::builtin(),
    }
    .unwrap_or_else(|e| fatal(&format!("Failed to load game resources: {}", e)));

    let mut store = match (cli.high_score_file.clone(), &data_dir) {
        (Some(path), _) => FileScoreStore::new(path),
        (None, Some(dir)) => FileScoreStore::in_dir(dir),
        (None, None) => FileScoreStore::new(HIGH_SCORE_FILE),
    };

    if cli.write_config {
        let dir = data_dir
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no data directory"))?;
        let path = dir.write_json(CONFIG_FILE, &config)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    if cli.reset_high_score {
        store.save(0)?;
        println!("High score reset ({})", store.path().display());
        return Ok(());
    }

    log::info!(
        "Starting: board {}x{}, high score file {}",
        config.board_width,
        config.board_height,
        store.path().display()
    );
    let mut session = Session::new(config, store, rand::thread_rng());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut session, &assets);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Terminal error: {}", e);
    }
    result
}

/// Draw, poll input and advance the session until the player quits.
fn run<B: Backend, S: ScoreStore, R: Rng>(
    terminal: &mut Terminal<B>,
    session: &mut Session<S, R>,
    assets: &Assets,
) -> io::Result<()> {
    let max_frame = Duration::from_millis(MAX_FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| render_flappy(frame, frame.size(), session.state(), assets))?;

        if event::poll(Duration::from_millis(REALTIME_FRAME_MS))? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    InputAction::Primary => {
                        session.primary_action();
                    }
                    InputAction::Quit => return Ok(()),
                    InputAction::None => {}
                }
            }
        }

        let now = Instant::now();
        session.advance(now.duration_since(last_frame).min(max_frame));
        last_frame = now;
    }
}

fn init_logging(cli: &Cli, data_dir: Option<&DataDir>) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let path = match &cli.log_file {
        Some(path) => path.clone(),
        None => match data_dir {
            Some(dir) => dir.file(LOG_FILE),
            None => {
                eprintln!("Logging disabled: no data directory");
                return;
            }
        },
    };
    if let Err(e) = logging::init_log(level, &path) {
        eprintln!("Logging disabled ({}): {}", path.display(), e);
    }
}

/// Report a startup failure and exit before the terminal is taken over.
fn fatal(message: &str) -> ! {
    log::error!("{}", message);
    eprintln!("{}", message);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
        let about = Cli::command().get_about().map(|s| s.to_string());
        assert_eq!(about.as_deref(), Some("Flappy Bird in the terminal"));
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["flappy", "--write-config", "-v"]);
        assert!(cli.write_config && cli.verbose);
        assert!(!cli.reset_high_score);

        let cli = Cli::parse_from(["flappy", "--high-score-file", "/tmp/hs.txt"]);
        assert_eq!(cli.high_score_file, Some(PathBuf::from("/tmp/hs.txt")));
    }
}
