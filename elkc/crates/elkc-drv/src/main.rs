//! elk CLI - front end for the elk language.
//!
//! Starts the token REPL by default; `tokens` and `parse` run the scanner or
//! the parser over a file.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use elkc_drv::{repl, Config, DriverError, Session};

/// elk - scanner and parser front end
#[derive(Parser, Debug)]
#[command(name = "elk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scanner and statement parser for the elk language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "ELK_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ELK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "ELK_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the elk CLI.
#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Read lines from stdin and print their tokens (default)
    Repl,

    /// Print the token stream of a file
    Tokens {
        /// Source file
        file: PathBuf,
    },

    /// Parse a file and print its statements
    Parse {
        /// Source file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    execute_command(cli.command.unwrap_or(Commands::Repl), config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token and statement output on stdout stays clean.
/// `RUST_LOG` is honoured unless `--verbose` is given.
fn init_logging(verbose: bool, no_color: bool) -> Result<(), DriverError> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config, DriverError> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> anyhow::Result<()> {
    tracing::debug!(?command, binding = %config.parser.binding, "executing command");
    let session = Session::new(config);
    let (mut stdout, mut stderr) = (io::stdout().lock(), io::stderr().lock());

    match command {
        Commands::Repl => {
            let prompt = session.config().repl.prompt.clone();
            repl::start(io::stdin().lock(), &mut stdout, &prompt).context("REPL I/O failed")?;
        },
        Commands::Tokens { file } => session.tokens(&file, &mut stdout, &mut stderr)?,
        Commands::Parse { file } => session.parse(&file, &mut stdout, &mut stderr)?,
    }
    Ok(())
}
