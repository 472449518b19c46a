//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `execute_command` for running a command against the filesystem
//!
//! # Architecture
//!
//! A raw line is split by [`crate::core::parse_input`], turned into a
//! `Command` (arity errors are detected here), then executed. Execution only
//! mutates the filesystem (for `mkdir`); session changes travel back in the
//! `CommandResult`.

mod execute;
mod result;

pub use execute::execute_command;
pub(crate) use execute::listing;
pub use result::CommandResult;

use std::fmt;

use crate::core::error::ShellError;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `open bar`).
///
/// The path is stored as typed; it is only split and resolved during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Blank line
    Empty,
    Exit,
    Clear,
    Help,
    Pwd,
    Ls,
    /// Change directory; `None` goes home
    Cd(Option<PathArg>),
    Mkdir(Vec<PathArg>),
    Open(PathArg),
    /// Known command called with the wrong number of arguments
    Invalid(ShellError),
    Unknown(String),
}

impl Command {
    /// Parse command from name and arguments. Names are case-sensitive.
    pub fn parse(name: &str, args: &[String]) -> Self {
        match name {
            "" => Self::Empty,
            "exit" => Self::Exit,
            "clear" => Self::Clear,
            "help" => Self::Help,
            "pwd" => Self::Pwd,
            "ls" => Self::Ls,
            "cd" => match args {
                [] => Self::Cd(None),
                [path] => Self::Cd(Some(PathArg::new(path))),
                _ => Self::too_many(name),
            },
            "mkdir" => {
                if args.is_empty() {
                    Self::missing_operand(name)
                } else {
                    Self::Mkdir(args.iter().map(PathArg::new).collect())
                }
            }
            "open" => match args {
                [] => Self::missing_operand(name),
                [path] => Self::Open(PathArg::new(path)),
                _ => Self::too_many(name),
            },
            _ => Self::Unknown(name.to_string()),
        }
    }

    fn too_many(name: &str) -> Self {
        Self::Invalid(ShellError::TooManyArguments {
            cmd: name.to_string(),
        })
    }

    fn missing_operand(name: &str) -> Self {
        Self::Invalid(ShellError::MissingOperand {
            cmd: name.to_string(),
        })
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
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("", &[]), Command::Empty);
        assert_eq!(Command::parse("exit", &[]), Command::Exit);
        assert_eq!(Command::parse("clear", &[]), Command::Clear);
        assert_eq!(Command::parse("help", &[]), Command::Help);
        assert_eq!(Command::parse("pwd", &[]), Command::Pwd);
        assert_eq!(Command::parse("ls", &args(&["ignored"])), Command::Ls);
    }

    #[test]
    fn test_parse_cd() {
        assert_eq!(Command::parse("cd", &[]), Command::Cd(None));
        assert!(matches!(
            Command::parse("cd", &args(&["/home"])),
            Command::Cd(Some(ref p)) if p == &"/home"
        ));
        assert!(matches!(
            Command::parse("cd", &args(&["a", "b"])),
            Command::Invalid(ShellError::TooManyArguments { .. })
        ));
    }

    #[test]
    fn test_parse_mkdir() {
        assert!(matches!(
            Command::parse("mkdir", &args(&["a", "b/c"])),
            Command::Mkdir(ref paths) if paths.len() == 2 && paths[1] == "b/c"
        ));
        assert!(matches!(
            Command::parse("mkdir", &[]),
            Command::Invalid(ShellError::MissingOperand { .. })
        ));
    }

    #[test]
    fn test_parse_open() {
        assert!(matches!(
            Command::parse("open", &args(&["GT_Scheduler"])),
            Command::Open(ref p) if p == &"GT_Scheduler"
        ));
        assert!(matches!(
            Command::parse("open", &[]),
            Command::Invalid(ShellError::MissingOperand { .. })
        ));
        assert!(matches!(
            Command::parse("open", &args(&["a", "b"])),
            Command::Invalid(ShellError::TooManyArguments { .. })
        ));
    }

    #[test]
    fn test_parse_case_sensitive() {
        assert_eq!(
            Command::parse("LS", &[]),
            Command::Unknown("LS".to_string())
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            Command::parse("foobar", &[]),
            Command::Unknown(ref c) if c == "foobar"
        ));
    }
}
