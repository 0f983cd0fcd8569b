//! Roster Binary
//!
//! Runs the interactive student menu on the terminal.

use std::io;

use clap::Parser;
use roster::config::DEFAULT_DATA_FILE;
use roster::{Config, Manager, Shell};
use tracing_subscriber::{fmt, EnvFilter};

/// Roster
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Interactive student record manager")]
#[command(version)]
struct Args {
    /// Data file holding one record per line
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    file: String,

    /// Log debug detail to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so they stay out of the menu on stdout
    let default_filter = if args.verbose { "warn,roster=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("Roster v{}", roster::VERSION);
    tracing::debug!("Data file: {}", args.file);

    let config = match Config::builder().data_file(&args.file).build() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let (manager, load_error) = Manager::open(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(manager, stdin.lock(), stdout.lock());

    let result = shell
        .start(load_error.as_ref())
        .and_then(|()| shell.run());

    if let Err(e) = result {
        tracing::error!("Console error: {}", e);
        std::process::exit(1);
    }
}
