//! Command group subcommands: list, show, enable, disable

use anyhow::{Result, bail};
use clap::Args;
use debugkit_core::DebugBindings;

/// Arguments naming a single command group
#[derive(Args)]
pub struct GroupArgs {
    /// Command group name
    pub name: String,
}

/// List registered group names, one per line
pub fn list(bindings: &DebugBindings) -> Result<()> {
    let names = bindings.all_group_names();
    if names.is_empty() {
        println!("No command groups registered");
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

/// Show a group's help and command lists
pub fn show(bindings: &DebugBindings, args: GroupArgs) -> Result<()> {
    let Some(group) = bindings
        .registry()
        .find(&args.name)
        .and_then(|handle| handle.upgrade())
    else {
        bail!("Unknown command group '{}'", args.name);
    };

    println!("{}", group.name());
    let help = group.help();
    if !help.is_empty() {
        for line in help.lines() {
            println!("  {}", line);
        }
    }
    println!("  enable:");
    for command in group.enable_commands() {
        println!("    {}", command);
    }
    println!("  disable:");
    for command in group.disable_commands() {
        println!("    {}", command);
    }
    Ok(())
}

/// Dispatch a group's enable commands through stdout
pub fn enable(bindings: &mut DebugBindings, args: GroupArgs) -> Result<()> {
    if !bindings.enable_group(&args.name, None) {
        bail!("Unknown command group '{}'", args.name);
    }
    Ok(())
}

/// Dispatch a group's disable commands through stdout
pub fn disable(bindings: &mut DebugBindings, args: GroupArgs) -> Result<()> {
    if !bindings.disable_group(&args.name, None) {
        bail!("Unknown command group '{}'", args.name);
    }
    Ok(())
}
