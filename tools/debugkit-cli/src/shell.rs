//! Interactive shell - drive a live registry line by line
//!
//! ```text
//! register Perf stat fps; stat unit | stat fps; stat unit
//! enable Perf
//! print AI target acquired
//! unregister Perf
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use debugkit_core::DebugBindings;
use debugkit_core::debug::print::PrintRequest;

use crate::session::{EchoExecutor, EchoSink};

const USAGE: &str = "\
commands:
  list                                   list command groups
  show <group>                           show a group's commands
  register <group> <cmd; ...> | <cmd; ...>
                                         register enable | disable commands
  unregister <group>                     remove a group
  enable <group> / disable <group>       run a group's commands
  help <group> <text>                    set a group's help text
  filter <value>                         set EnableDebug.PrintStringToConsole
  print <category> <message>             print through the filter
  frame                                  advance the frame counter
  quit                                   leave the shell";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    List,
    Show(String),
    Register {
        name: String,
        enable: Vec<String>,
        disable: Vec<String>,
    },
    Unregister(String),
    Enable(String),
    Disable(String),
    Help { name: String, text: String },
    Filter(String),
    Print { category: String, message: String },
    Frame,
    Usage,
    Quit,
}

/// Split a `;`-separated command list, dropping empty entries
fn split_commands(list: &str) -> Vec<String> {
    list.split(';')
        .map(str::trim)
        .filter(|cmd| !cmd.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split off the first word of `rest`
fn first_word(rest: &str) -> (&str, &str) {
    match rest.split_once(char::is_whitespace) {
        Some((word, tail)) => (word, tail.trim()),
        None => (rest, ""),
    }
}

/// Parse a shell line; blank lines and `#` comments yield `None`
pub fn parse(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = first_word(line);
    let require_name = |rest: &str| -> Result<String> {
        let (name, tail) = first_word(rest);
        if name.is_empty() {
            bail!("'{}' needs a group name", verb);
        }
        if !tail.is_empty() {
            bail!("'{}' takes a single group name", verb);
        }
        Ok(name.to_string())
    };

    let command = match verb {
        "list" | "ls" => ShellCommand::List,
        "show" => ShellCommand::Show(require_name(rest)?),
        "unregister" => ShellCommand::Unregister(require_name(rest)?),
        "enable" => ShellCommand::Enable(require_name(rest)?),
        "disable" => ShellCommand::Disable(require_name(rest)?),
        "register" => {
            let (name, lists) = first_word(rest);
            if name.is_empty() {
                bail!("'register' needs a group name");
            }
            let (enable, disable) = lists.split_once('|').unwrap_or((lists, ""));
            ShellCommand::Register {
                name: name.to_string(),
                enable: split_commands(enable),
                disable: split_commands(disable),
            }
        }
        "help" if rest.is_empty() => ShellCommand::Usage,
        "help" => {
            let (name, text) = first_word(rest);
            if text.is_empty() {
                bail!("usage: help <group> <text>");
            }
            ShellCommand::Help {
                name: name.to_string(),
                text: text.replace("\\n", "\n"),
            }
        }
        "filter" => {
            if rest.is_empty() {
                bail!("'filter' needs a value (0, 1, or a category)");
            }
            ShellCommand::Filter(rest.to_string())
        }
        "print" => {
            let (category, message) = first_word(rest);
            if category.is_empty() || message.is_empty() {
                bail!("usage: print <category> <message>");
            }
            ShellCommand::Print {
                category: category.to_string(),
                message: message.to_string(),
            }
        }
        "frame" => ShellCommand::Frame,
        "?" => ShellCommand::Usage,
        "quit" | "exit" => ShellCommand::Quit,
        other => bail!("unknown command '{}' (try 'help')", other),
    };
    Ok(Some(command))
}

/// Apply one command; returns `false` when the shell should exit
pub fn apply(
    bindings: &mut DebugBindings,
    command: ShellCommand,
    out: &mut impl Write,
) -> Result<bool> {
    match command {
        ShellCommand::List => {
            for name in bindings.all_group_names() {
                writeln!(out, "{}", name)?;
            }
        }
        ShellCommand::Show(name) => {
            match bindings.registry().find(&name).and_then(|h| h.upgrade()) {
                Some(group) => {
                    writeln!(out, "{}: {}", group.name(), group.help())?;
                    writeln!(out, "  enable:  {}", group.enable_commands().join("; "))?;
                    writeln!(out, "  disable: {}", group.disable_commands().join("; "))?;
                }
                None => writeln!(out, "no group named '{}'", name)?,
            }
        }
        ShellCommand::Register {
            name,
            enable,
            disable,
        } => {
            if bindings.register_group(&name, &enable, &disable) {
                writeln!(out, "registered '{}'", name)?;
            } else {
                writeln!(out, "'{}' is already registered", name)?;
            }
        }
        ShellCommand::Unregister(name) => {
            if bindings.unregister_group(&name) {
                writeln!(out, "unregistered '{}'", name)?;
            } else {
                writeln!(out, "no group named '{}'", name)?;
            }
        }
        ShellCommand::Enable(name) => toggle(bindings, &name, true, out)?,
        ShellCommand::Disable(name) => toggle(bindings, &name, false, out)?,
        ShellCommand::Help { name, text } => {
            if !bindings.set_group_help(&name, &text) {
                writeln!(out, "no group named '{}'", name)?;
            }
        }
        ShellCommand::Filter(value) => {
            bindings.set_print_filter(&value);
            writeln!(out, "filter = {}", bindings.printer().filter().value())?;
        }
        ShellCommand::Print { category, message } => {
            let request = PrintRequest::new(&message).category(&category);
            let mut sink = EchoSink::new(&mut *out);
            let shown = bindings.print(&request, &mut sink);
            sink.finish()?;
            if !shown {
                writeln!(out, "(filtered)")?;
            }
        }
        ShellCommand::Frame => {
            writeln!(out, "frame {}", bindings.advance_frame())?;
        }
        ShellCommand::Usage => writeln!(out, "{}", USAGE)?,
        ShellCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Dispatch a group's commands, echoing each one to `out`
fn toggle(
    bindings: &mut DebugBindings,
    name: &str,
    enable: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut echo = EchoExecutor::new(&mut *out);
    let found = if enable {
        bindings.enable_group(name, Some(&mut echo))
    } else {
        bindings.disable_group(name, Some(&mut echo))
    };
    echo.finish()?;
    if !found {
        writeln!(out, "no group named '{}'", name)?;
    }
    Ok(())
}

/// Run the shell on stdin until EOF or `quit`
pub fn run(bindings: &mut DebugBindings) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "debugkit> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }

        match parse(&line) {
            Ok(Some(command)) => {
                if !apply(bindings, command, &mut stdout)? {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => writeln!(stdout, "error: {}", e)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use debugkit_core::CommandGroupRegistry;

    use super::*;

    fn run_lines(bindings: &mut DebugBindings, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            if let Some(command) = parse(line).unwrap() {
                apply(bindings, command, &mut out).unwrap();
            }
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_register() {
        let command = parse("register Perf stat fps; stat unit | stat fps;stat unit")
            .unwrap()
            .unwrap();
        assert_eq!(
            command,
            ShellCommand::Register {
                name: "Perf".to_string(),
                enable: vec!["stat fps".to_string(), "stat unit".to_string()],
                disable: vec!["stat fps".to_string(), "stat unit".to_string()],
            }
        );

        // Missing disable list
        let command = parse("register Wire viewmode wireframe").unwrap().unwrap();
        assert_eq!(
            command,
            ShellCommand::Register {
                name: "Wire".to_string(),
                enable: vec!["viewmode wireframe".to_string()],
                disable: Vec::new(),
            }
        );
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse("# comment").unwrap(), None);
        assert_eq!(parse("enable Perf").unwrap(), Some(ShellCommand::Enable("Perf".into())));
        assert_eq!(parse("help").unwrap(), Some(ShellCommand::Usage));
        assert_eq!(
            parse("print AI target acquired").unwrap(),
            Some(ShellCommand::Print {
                category: "AI".into(),
                message: "target acquired".into()
            })
        );
        assert_eq!(parse("exit").unwrap(), Some(ShellCommand::Quit));

        assert!(parse("enable").is_err());
        assert!(parse("enable a b").is_err());
        assert!(parse("register").is_err());
        assert!(parse("print AI").is_err());
        assert!(parse("help Perf").is_err());
        assert!(parse("explode").is_err());
    }

    #[test]
    fn test_session_flow() {
        let mut bindings = DebugBindings::new(Arc::new(CommandGroupRegistry::new()));
        let out = run_lines(
            &mut bindings,
            &[
                "register Perf stat fps; stat unit | stat fps; stat unit",
                "register Perf stat gpu",
                "help Perf frame stats",
                "list",
                "show Perf",
                "enable Perf",
                "disable Perf",
                "unregister Perf",
                "enable Perf",
                "unregister Perf",
                "frame",
            ],
        );

        assert_eq!(
            out,
            "registered 'Perf'\n\
             'Perf' is already registered\n\
             Perf\n\
             Perf: frame stats\n  \
             enable:  stat fps; stat unit\n  \
             disable: stat fps; stat unit\n\
             > stat fps\n\
             > stat unit\n\
             > stat fps\n\
             > stat unit\n\
             unregistered 'Perf'\n\
             no group named 'Perf'\n\
             no group named 'Perf'\n\
             frame 1\n"
        );
    }

    #[test]
    fn test_filter_and_quit() {
        let mut bindings = DebugBindings::new(Arc::new(CommandGroupRegistry::new()));
        let out = run_lines(&mut bindings, &["print AI hidden", "filter ai", "print AI shown"]);
        assert_eq!(
            out,
            "(filtered)\n\
             filter = AI\n\
             [screen 1.0s] [AI] shown\n\
             [console] [AI] shown\n"
        );

        let mut sink = Vec::new();
        assert!(!apply(&mut bindings, ShellCommand::Quit, &mut sink).unwrap());
    }
}
