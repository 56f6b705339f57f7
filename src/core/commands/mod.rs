//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `REGISTRY`, the ordered table of commands shown by `help`
//! - `CommandResult` for command execution results
//!
//! # Architecture
//!
//! Input is split by [`parse_input`](crate::core::parser::parse_input), the
//! name is resolved case-insensitively into a `Command`, and
//! `execute_command` turns it into output lines plus an optional
//! [`SessionEffect`].

mod execute;
mod result;

pub use execute::{ExecContext, execute_command};
pub use result::{CommandResult, SessionEffect};

use std::fmt;

// =============================================================================
// Registry
// =============================================================================

/// A command as listed by `help`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every command, in `help` order.
pub const REGISTRY: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "List available commands",
    },
    CommandSpec {
        name: "whoami",
        description: "Print identity information",
    },
    CommandSpec {
        name: "ls",
        description: "List files (-l for long format)",
    },
    CommandSpec {
        name: "cat",
        description: "Print the contents of a file",
    },
    CommandSpec {
        name: "clear",
        description: "Clear the terminal screen",
    },
    CommandSpec {
        name: "date",
        description: "Print the current date and time",
    },
    CommandSpec {
        name: "reboot",
        description: "Restart the session",
    },
    CommandSpec {
        name: "sudo",
        description: "Execute a command as superuser",
    },
];

/// Flags that switch `ls` to the long listing.
const LONG_LISTING_FLAGS: &[&str] = &["-l", "-la", "-al"];

// =============================================================================
// File Argument Type
// =============================================================================

/// A file name passed to a command (e.g., `cat about.txt`).
///
/// Stored exactly as typed; lookup is case-sensitive and happens during
/// execution against the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileArg(String);

impl FileArg {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for FileArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Whoami,
    /// List files. `long` = long format (-l, -la, -al)
    Ls {
        long: bool,
    },
    /// Print a file; `None` when the operand is missing
    Cat(Option<FileArg>),
    Clear,
    Date,
    Reboot,
    Sudo,
    /// Unrecognized command, holding the name exactly as typed
    Unknown(String),
}

impl Command {
    /// Names of all registered commands, in `help` order.
    #[cfg(test)]
    pub fn names() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|spec| spec.name)
    }

    /// Parse command from name and arguments.
    ///
    /// The name is matched case-insensitively; arguments are left untouched.
    pub fn parse(name: &str, args: &[String]) -> Self {
        match name.to_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "whoami" => Self::Whoami,
            "ls" => Self::Ls {
                long: args
                    .iter()
                    .any(|arg| LONG_LISTING_FLAGS.contains(&arg.as_str())),
            },
            "cat" => Self::Cat(args.first().map(FileArg::new)),
            "clear" | "cls" => Self::Clear,
            "date" => Self::Date,
            "reboot" => Self::Reboot,
            "sudo" => Self::Sudo,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_ls() {
        assert_eq!(Command::parse("ls", &[]), Command::Ls { long: false });
        assert_eq!(
            Command::parse("ls", &args(&["-l"])),
            Command::Ls { long: true }
        );
        assert_eq!(
            Command::parse("ls", &args(&["-la"])),
            Command::Ls { long: true }
        );
        assert_eq!(
            Command::parse("ls", &args(&["-al"])),
            Command::Ls { long: true }
        );
        assert_eq!(
            Command::parse("ls", &args(&["-a"])),
            Command::Ls { long: false }
        );
    }

    #[test]
    fn test_parse_cat() {
        assert!(matches!(
            Command::parse("cat", &args(&["about.txt"])),
            Command::Cat(Some(ref f)) if *f == "about.txt"
        ));
        assert_eq!(Command::parse("cat", &[]), Command::Cat(None));
    }

    #[test]
    fn test_parse_cat_uses_first_operand_only() {
        assert!(matches!(
            Command::parse("cat", &args(&["a.txt", "b.txt"])),
            Command::Cat(Some(ref f)) if *f == "a.txt"
        ));
    }

    #[test]
    fn test_parse_case_insensitive_name_only() {
        assert_eq!(Command::parse("HELP", &[]), Command::Help);
        assert_eq!(Command::parse("CleAr", &[]), Command::Clear);
        assert!(matches!(
            Command::parse("CAT", &args(&["About.TXT"])),
            Command::Cat(Some(ref f)) if *f == "About.TXT"
        ));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Command::parse("?", &[]), Command::Help);
        assert_eq!(Command::parse("cls", &[]), Command::Clear);
    }

    #[test]
    fn test_parse_sudo_ignores_args() {
        assert_eq!(Command::parse("sudo", &[]), Command::Sudo);
        assert_eq!(
            Command::parse("sudo", &args(&["rm", "-rf", "/"])),
            Command::Sudo
        );
    }

    #[test]
    fn test_parse_unknown_keeps_original_case() {
        assert_eq!(
            Command::parse("FooBar", &[]),
            Command::Unknown("FooBar".to_string())
        );
    }

    #[test]
    fn test_registry_names_resolve() {
        for name in Command::names() {
            assert!(
                !matches!(Command::parse(name, &[]), Command::Unknown(_)),
                "{} should be a known command",
                name
            );
        }
    }

    #[test]
    fn test_registry_order() {
        let names: Vec<_> = Command::names().collect();
        assert_eq!(
            names,
            vec!["help", "whoami", "ls", "cat", "clear", "date", "reboot", "sudo"]
        );
    }
}
