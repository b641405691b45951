//! Debugkit CLI - console command groups and debug prints from the terminal
//!
//! # Commands
//!
//! - `debugkit list` - List registered command groups
//! - `debugkit show <group>` - Show a group's commands and help
//! - `debugkit enable <group>` / `debugkit disable <group>` - Dispatch a group's commands
//! - `debugkit print <message>` - Print through the `EnableDebug.PrintStringToConsole` gate
//! - `debugkit shell` - Interactive session (register, toggle, print, ...)
//!
//! Commands are dispatched to stdout, one `> command` line each, which makes the
//! tool handy for checking group definitions before wiring them into a host.
//!
//! # Config (debugkit.toml)
//!
//! ```toml
//! [print]
//! filter = "AI"
//!
//! [[groups]]
//! name = "Perf"
//! enable = ["stat fps", "stat unit"]
//! disable = ["stat fps", "stat unit"]
//! help = "Frame rate and timings"
//! ```

mod groups;
mod print;
mod session;
mod shell;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Debugkit CLI - console command groups and debug prints
#[derive(Parser)]
#[command(name = "debugkit")]
#[command(about = "Console command groups and gated debug prints")]
#[command(version)]
struct Cli {
    /// Path to debugkit.toml (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered command groups
    List,

    /// Show a command group's commands and help
    Show(groups::GroupArgs),

    /// Run a command group's enable commands
    Enable(groups::GroupArgs),

    /// Run a command group's disable commands
    Disable(groups::GroupArgs),

    /// Print a message through the debug print gate
    Print(print::PrintArgs),

    /// Start an interactive session
    Shell,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut bindings = session::open(cli.config.as_deref())?;

    match cli.command {
        Commands::List => groups::list(&bindings),
        Commands::Show(args) => groups::show(&bindings, args),
        Commands::Enable(args) => groups::enable(&mut bindings, args),
        Commands::Disable(args) => groups::disable(&mut bindings, args),
        Commands::Print(args) => print::execute(&mut bindings, args),
        Commands::Shell => shell::run(&mut bindings),
    }
}
