use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use asciiboard::{App, Config, Response};

/// ASCII art drawing board driven by text commands
#[derive(Parser, Debug)]
#[command(name = "asciiboard")]
#[command(version, about, long_about = None)]
struct Args {
    /// Board width in cells
    #[arg(long)]
    width: Option<i32>,

    /// Board height in cells
    #[arg(long)]
    height: Option<i32>,

    /// Print the board without color escape sequences
    #[arg(long)]
    no_color: bool,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Saved board to load at start-up
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if args.no_color {
        config.color = false;
    }
    let config = config.validated()?;

    tracing::info!(width = config.width, height = config.height, "starting session");
    let mut app = App::new(config);

    // Load file if specified
    if let Some(path) = &args.file {
        let response = match app.load_file(path) {
            Ok(response) => response,
            Err(e) => Response::message(e.to_string()),
        };
        print_response(&app, &response)?;
    }

    run_app(&mut app)
}

fn run_app(app: &mut App) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    while app.running {
        {
            let mut out = io::stdout().lock();
            write!(out, "{}", app.config.prompt)?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input ends the session like `exit`
            break;
        }

        let response = app.handle_line(&line);
        print_response(app, &response)?;
    }

    Ok(())
}

fn print_response(app: &App, response: &Response) -> Result<()> {
    let mut out = io::stdout().lock();
    for line in &response.lines {
        writeln!(out, "{}", line)?;
    }
    if response.show_board {
        for row in app.board_rows() {
            writeln!(out, "{}", row)?;
        }
    }
    writeln!(out)?;
    Ok(())
}
