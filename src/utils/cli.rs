//! Command-line argument parsing and help for fm.
//!
//! This module handles all CLI flag parsing used for launching, config initialization and help.
//!
//! When invoked with no args/flags (fm), fm simply launches the TUI in the current directory.

use crate::config::Config;

use std::path::PathBuf;

/// Where to start and where to report the final selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchOptions {
    pub start_dir: Option<String>,
    pub selection_path: Option<PathBuf>,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Run(LaunchOptions),
    Help,
    Version,
    Init,
    Invalid(String),
}

/// What the entry point should do after the arguments were handled.
pub enum CliAction {
    Run(LaunchOptions),
    Exit,
}

/// Parses the arguments after the program name.
///
/// Flags take their value either as the next argument or after `=`.
/// At most one positional directory is accepted and it must not clash with `--start-dir`.
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: IntoIterator<Item = String>,
{
    let mut opts = LaunchOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((f, v)) if f.starts_with("--") => (f.to_string(), Some(v.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "-h" | "--help" => return CliCommand::Help,
            "-v" | "--version" => return CliCommand::Version,
            "--init" => return CliCommand::Init,
            "--start-dir" | "--selection-path" => {
                let Some(value) = inline.or_else(|| args.next()) else {
                    return CliCommand::Invalid(format!("{} needs a value", flag));
                };
                if value.trim().is_empty() {
                    return CliCommand::Invalid(format!("{} needs a value", flag));
                }
                if flag == "--selection-path" {
                    opts.selection_path = Some(PathBuf::from(value));
                } else if opts.start_dir.replace(value).is_some() {
                    return CliCommand::Invalid("only one starting directory is allowed".into());
                }
            }
            other if other.starts_with('-') => {
                return CliCommand::Invalid(format!("Unknown argument: {}", other));
            }
            _ => {
                if opts.start_dir.replace(arg).is_some() {
                    return CliCommand::Invalid("only one starting directory is allowed".into());
                }
            }
        }
    }
    CliCommand::Run(opts)
}

/// Parses `std::env::args` and runs the informational commands.
pub fn handle_args() -> CliAction {
    match parse_args(std::env::args().skip(1)) {
        CliCommand::Run(opts) => CliAction::Run(opts),
        CliCommand::Help => {
            print_help();
            CliAction::Exit
        }
        CliCommand::Version => {
            print_version();
            CliAction::Exit
        }
        CliCommand::Init => {
            if let Err(e) = Config::generate_default(&Config::default_path()) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        CliCommand::Invalid(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn print_version() {
    println!("fm {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"fm - A simple, configurable terminal file manager

USAGE:
  fm [PATH] [OPTIONS]

PATH:
  Directory to open (defaults to current directory)

OPTIONS:
      --start-dir <DIR>        Starting directory (same as PATH)
      --selection-path <FILE>  Write the path of the file opened with Enter to FILE and exit
      --init                   Generate the default configuration file
  -h, --help                   Print help information
  -v, --version                Display the current installed version of fm

KEYS (defaults):
  j/k, Up/Down       move            Ctrl+d/Ctrl+u   page down/up
  g/G                top/bottom      h/l             parent/enter directory
  Enter              open            ~               home
  .                  toggle hidden   Ctrl+r          refresh
  :                  command bar     m / p / Esc     mark move / move here / cancel
  d                  delete (rm)     r, n, N         rename, new file, new directory
  q                  quit

COMMANDS (after ':'):
  rm | delete        delete the selected entry
  mkdir <name>       create a directory
  touch <name>       create a file
  mv <name>          rename the selected entry
  cd <path>          change directory
  q                  quit

ENVIRONMENT:
  FM_CONFIG          Override the default config path
  FM_LOG             Log filter when logging is enabled (default: debug)
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_runs_in_current_dir() {
        assert_eq!(parse_args(args(&[])), CliCommand::Run(LaunchOptions::default()));
    }

    #[test]
    fn positional_and_flags() {
        let cmd = parse_args(args(&["--selection-path", "/tmp/sel", "~/src"]));
        assert_eq!(
            cmd,
            CliCommand::Run(LaunchOptions {
                start_dir: Some("~/src".into()),
                selection_path: Some(PathBuf::from("/tmp/sel")),
            })
        );

        let cmd = parse_args(args(&["--start-dir=/var"]));
        assert_eq!(
            cmd,
            CliCommand::Run(LaunchOptions {
                start_dir: Some("/var".into()),
                selection_path: None,
            })
        );
    }

    #[test]
    fn informational_flags() {
        assert_eq!(parse_args(args(&["-h"])), CliCommand::Help);
        assert_eq!(parse_args(args(&["--version"])), CliCommand::Version);
        assert_eq!(parse_args(args(&["--init"])), CliCommand::Init);
    }

    #[test]
    fn invalid_input() {
        assert!(matches!(parse_args(args(&["--bogus"])), CliCommand::Invalid(_)));
        assert!(matches!(parse_args(args(&["--start-dir"])), CliCommand::Invalid(_)));
        assert!(matches!(parse_args(args(&["a", "b"])), CliCommand::Invalid(_)));
        assert!(matches!(
            parse_args(args(&["a", "--start-dir", "b"])),
            CliCommand::Invalid(_)
        ));
    }
}
