//! CLI entry point for tally.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod config;
mod logging;
mod tui;

/// In-memory todo list in your terminal.
#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    about = "tally: an in-memory todo list rendered as a terminal table"
)]
struct Cli {
    /// Configuration file (defaults to the user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append TUI logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the interactive terminal UI (default).
    Tui,

    /// Manage the configuration file.
    Config {
        #[command(subcommand)]
        cmd: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a configuration file populated with the defaults.
    Init {
        /// Destination (defaults to the user config directory).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Overwrite without asking.
        #[arg(long)]
        force: bool,
    },

    /// Load and validate the configuration file.
    Check,
}

fn main() -> Result<()> {
    let Cli {
        config,
        log_file,
        cmd,
    } = Cli::parse();
    let cmd = cmd.unwrap_or(Command::Tui);

    if should_install_tracing(&cmd) {
        logging::install_tracing();
    }

    execute_command(cmd, config, log_file)
}

fn execute_command(
    command: Command,
    config_path: Option<PathBuf>,
    log_file: Option<PathBuf>,
) -> Result<()> {
    match command {
        Command::Tui => {
            let config = config::load_validated(config_path.as_deref())?;
            let dispatch = logging::tui_dispatch(log_file.as_deref())?;
            tui::run(&config, dispatch)
        }
        Command::Config {
            cmd: ConfigCommand::Init { output, force },
        } => config::init_config(output.as_deref(), force),
        Command::Config {
            cmd: ConfigCommand::Check,
        } => config::check_config(config_path.as_deref()),
    }
}

const fn should_install_tracing(cmd: &Command) -> bool {
    !matches!(cmd, Command::Tui)
}
