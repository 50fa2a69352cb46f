use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{poll as event_poll, read as event_read, Event as CrosstermEvent};
use meta_landing::app::TerminalSession;
use meta_landing::config::{self, BootConfig};
use meta_landing::headless::{self, SnapshotFormat};
use meta_landing::input::key_handler::{self, KeyResult};
use meta_landing::services::terminal_modes::{self, TerminalModes};
use meta_landing::services::time_source::{RealTimeSource, SharedTimeSource};
use meta_landing::services::{log_dirs, tracing_setup};
use meta_landing::view::render::{render_session, ViewState};
use meta_landing::view::theme::Theme;
use ratatui::Terminal;
use std::{
    io::{self, stdout},
    path::PathBuf,
    time::{Duration, Instant},
};

/// The meta landing page, as a terminal
#[derive(Parser, Debug)]
#[command(name = "meta-landing")]
#[command(about = "A boot sequence and a tiny shell that explain why this page was built the way it was", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file (default: XDG state dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Color theme (matrix, amber, mono)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Play the boot sequence with no delays
    #[arg(long)]
    skip_boot: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print every accepted command and what it does, then exit
    #[arg(long)]
    list_commands: bool,

    /// Read commands from stdin and print the screen after each one
    #[arg(long)]
    headless: bool,

    /// With --headless, print screens as JSON
    #[arg(long, requires = "headless")]
    json: bool,
}

struct SetupState {
    config: config::Config,
    terminal: Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
    /// Drop restores the terminal
    terminal_modes: TerminalModes,
}

/// Resolve the effective configuration from the file and the flags.
fn load_config(args: &Args) -> AnyhowResult<config::Config> {
    let mut config = match &args.config {
        Some(path) => config::Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => config::Config::load_default(),
    };

    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    if args.skip_boot {
        config.boot.enabled = false;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn init_logging(args: &Args) {
    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(log_dirs::main_log_path);
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Warning: logging disabled ({}): {}", log_file.display(), e);
        return;
    }

    log_dirs::cleanup_stale_logs();
    tracing::info!("meta-landing starting, logging to {}", log_file.display());
}

fn initialize_app(config: config::Config) -> AnyhowResult<SetupState> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let terminal_modes = TerminalModes::enable().context("Failed to set up terminal")?;

    let backend = ratatui::backend::CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.clear().context("Failed to clear terminal")?;

    Ok(SetupState {
        config,
        terminal,
        terminal_modes,
    })
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    if args.list_commands {
        let table = meta_landing::content::CommandTable::builtin();
        for (alias, command) in table.aliases().sorted() {
            println!("{alias} -> {command}");
        }
        return Ok(());
    }

    init_logging(&args);
    let config = load_config(&args)?;

    if args.dump_config {
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{json}");
        return Ok(());
    }

    let clock: SharedTimeSource = RealTimeSource::shared();

    if args.headless {
        let config = config::Config {
            boot: BootConfig::instant(),
            ..config
        };
        let mut session = TerminalSession::new(&config, clock);
        let format = if args.json {
            SnapshotFormat::Json
        } else {
            SnapshotFormat::Text
        };
        let stdin = io::stdin();
        let count = headless::run(&mut session, stdin.lock(), &mut stdout().lock(), format)
            .context("Headless run failed")?;
        tracing::info!("Headless run finished after {} commands", count);
        return Ok(());
    }

    let SetupState {
        config,
        mut terminal,
        mut terminal_modes,
    } = initialize_app(config)?;

    let theme = Theme::from_name(&config.theme);
    let mut session = TerminalSession::new(&config, clock);
    session.start_boot();

    let result = run_event_loop(&mut session, &mut terminal, &theme, |timeout| {
        if event_poll(timeout)? {
            Ok(Some(event_read()?))
        } else {
            Ok(None)
        }
    });

    session.teardown();
    terminal_modes.undo();

    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
    }
    tracing::info!("meta-landing exiting");
    result
}

/// Main loop: fire due boot steps, redraw when dirty, wait for input.
fn run_event_loop<F>(
    session: &mut TerminalSession,
    terminal: &mut Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
    theme: &Theme,
    mut poll_event: F,
) -> AnyhowResult<()>
where
    F: FnMut(Duration) -> AnyhowResult<Option<CrosstermEvent>>,
{
    const FRAME_DURATION: Duration = Duration::from_millis(16); // 60fps
    const IDLE_POLL: Duration = Duration::from_millis(250);

    let mut view = ViewState::new();
    let mut last_render = Instant::now();
    let mut needs_render = true;

    loop {
        if session.tick().changed() {
            needs_render = true;
        }

        if needs_render && last_render.elapsed() >= FRAME_DURATION {
            terminal
                .draw(|frame| render_session(frame, session, theme, &mut view))
                .context("Failed to draw frame")?;
            last_render = Instant::now();
            needs_render = false;
        }

        let mut timeout = if needs_render {
            FRAME_DURATION.saturating_sub(last_render.elapsed())
        } else {
            IDLE_POLL
        };
        if let Some(until_boot_step) = session.time_until_next_deadline() {
            timeout = timeout.min(until_boot_step);
        }

        let Some(event) = poll_event(timeout).context("Failed to read terminal events")? else {
            continue;
        };

        match event {
            CrosstermEvent::Key(key_event) => {
                let result = key_handler::handle_key(session, &mut view, key_event);
                if result == KeyResult::Quit {
                    tracing::info!("Quit requested");
                    break;
                }
                if result.needs_render() {
                    needs_render = true;
                }
            }
            CrosstermEvent::Paste(text) => {
                if key_handler::handle_paste(session, &text).needs_render() {
                    needs_render = true;
                }
            }
            CrosstermEvent::Resize(_, _) => {
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}
