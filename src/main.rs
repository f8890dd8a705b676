// diameter-viz: step-through visualizer for the binary tree diameter algorithm

use std::fs::File;
use std::io;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use diameter_viz::config::{Cli, Config, Mode};
use diameter_viz::trace::generate_steps;
use diameter_viz::tree::build_decorated;
use diameter_viz::tree::input::format_level_order;
use diameter_viz::tree::presets::presets;
use diameter_viz::ui::App;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn init_logging(config: &Config) -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // The TUI owns the terminal, so logs only go to a file there
    match (&config.log_file, config.mode) {
        (Some(path), _) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()?;
        }
        (None, Mode::Dump) | (None, Mode::ListPresets) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init()?;
        }
        (None, Mode::Interactive) => {}
    }
    Ok(())
}

fn main() -> Result<(), BoxError> {
    let config = Config::from(Cli::parse());
    init_logging(&config)?;

    if config.mode == Mode::ListPresets {
        for preset in presets() {
            println!(
                "{:<12} {:<40} {}",
                preset.name,
                preset.summary,
                format_level_order(preset.values)
            );
        }
        return Ok(());
    }

    let mut rng = config.rng();
    let values = match config.initial_values(&mut rng) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    tracing::info!(tree = %format_level_order(&values), "initial tree");

    if config.mode == Mode::Dump {
        let tree = build_decorated(&values)?;
        let steps = generate_steps(&tree);
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    let mut app = App::new(values, config.interval, rng)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
