//! deskcalc: keypad calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! deskcalc                       # interactive keypad
//! deskcalc eval "2 + 3 * 4 ="    # press keys, print the display
//! deskcalc -vv --log-file calc.log
//! ```

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use deskcalc::config::{CalcConfig, LogLevel};
use deskcalc::core::{CalcResult, Engine};
use deskcalc::logging;
use deskcalc::tui::{keypad_area, render, CalculatorApp, InputHandler};

/// Keypad calculator with two-tier operator precedence
#[derive(Parser, Debug)]
#[command(name = "deskcalc", version, about)]
struct Cli {
    /// Display capacity in characters
    #[arg(long, global = true)]
    max_len: Option<usize>,

    /// YAML configuration file
    #[arg(long, global = true, env = "DESKCALC_CONFIG")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true)]
    log_level: Option<LevelArg>,

    /// Raise the log level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive keypad (default)
    Run,

    /// Press a key sequence and print the final display
    Eval {
        /// Keys, e.g. "12.5 * 4 =" (arguments are joined)
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LevelArg> for LogLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Off => Self::Off,
            LevelArg::Error => Self::Error,
            LevelArg::Warn => Self::Warn,
            LevelArg::Info => Self::Info,
            LevelArg::Debug => Self::Debug,
            LevelArg::Trace => Self::Trace,
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CalcResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let interactive = !matches!(cli.command, Some(Commands::Eval { .. }));
    logging::init(&config, interactive)?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::Eval { keys }) => run_eval(&config, &keys.join(" ")),
        Some(Commands::Run) | None => run_tui(&config),
    }
}

/// Defaults, then the config file, then flags
fn build_config(cli: &Cli) -> CalcResult<CalcConfig> {
    let mut config = match &cli.config {
        Some(path) => CalcConfig::load(path)?,
        None => CalcConfig::default(),
    };
    if let Some(max_len) = cli.max_len {
        config = config.with_max_len(max_len);
    }
    if let Some(level) = cli.log_level {
        config = config.with_log_level(level.into());
    }
    let level = config.log_level.raised(cli.verbose);
    config = config.with_log_level(level);
    if let Some(path) = &cli.log_file {
        config = config.with_log_file(path);
    }
    config.validate()?;
    Ok(config)
}

fn run_eval(config: &CalcConfig, keys: &str) -> CalcResult<()> {
    let mut engine = Engine::with_max_len(config.max_len);
    engine.press_keys(keys)?;
    println!("{}", engine.display());
    Ok(())
}

fn run_tui(config: &CalcConfig) -> CalcResult<()> {
    enable_raw_mode()?;
    let mut terminal = setup_or_restore(enter_screen, restore_terminal)?;

    let result = event_loop(&mut terminal, CalculatorApp::with_config(config));

    restore_terminal()?;
    terminal.show_cursor()?;

    result
}

fn enter_screen() -> CalcResult<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

/// Runs `setup`; if it fails, runs `restore` before returning the setup error
fn setup_or_restore<T>(
    setup: impl FnOnce() -> CalcResult<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> CalcResult<T> {
    setup().map_err(|e| {
        if let Err(restore_err) = restore() {
            tracing::warn!(error = %restore_err, "terminal restore failed");
        }
        e
    })
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> CalcResult<()> {
    let input_handler = InputHandler::new();
    tracing::info!("keypad started");

    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) => app.handle_action(input_handler.handle_key(key))?,
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
                app.click(keypad_area(area), mouse.column, mouse.row)?;
            }
            _ => {}
        }
    }

    tracing::info!(display = app.display(), "keypad closed");
    Ok(())
}
