//! Print subcommand - send a message through the debug print gate

use std::io;

use anyhow::{Context, Result};
use clap::Args;
use debugkit_core::DebugBindings;
use debugkit_core::debug::print::{DEFAULT_CATEGORY, PRINT_FILTER_SETTING, PrintRequest};

use crate::session::EchoSink;

/// Arguments for the print command
#[derive(Args)]
pub struct PrintArgs {
    /// Message to print
    pub message: String,

    /// Print category, matched against the filter
    #[arg(short = 'C', long, default_value = DEFAULT_CATEGORY)]
    pub category: String,

    /// Override the EnableDebug.PrintStringToConsole value from the config
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Skip the console broadcast
    #[arg(long)]
    pub no_console: bool,

    /// Skip the on-screen message
    #[arg(long)]
    pub no_screen: bool,

    /// Log at trace level instead of info
    #[arg(long)]
    pub quiet_log: bool,
}

/// Execute the print command
pub fn execute(bindings: &mut DebugBindings, args: PrintArgs) -> Result<()> {
    if let Some(filter) = &args.filter {
        bindings.set_print_filter(filter);
    }

    let mut request = PrintRequest::new(&args.message).category(&args.category);
    request.to_console = !args.no_console;
    request.to_screen = !args.no_screen;
    request.to_log = !args.quiet_log;

    let mut sink = EchoSink::new(io::stdout());
    let shown = bindings.print(&request, &mut sink);
    sink.finish().context("Failed to write output")?;

    if !shown {
        eprintln!(
            "Category '{}' is filtered out ({} = {})",
            args.category,
            PRINT_FILTER_SETTING,
            bindings.printer().filter().value()
        );
    }
    Ok(())
}
